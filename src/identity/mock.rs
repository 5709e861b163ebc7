// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use mockall::mock;

use crate::identity::IdentityApi;
use crate::identity::error::IdentityClientError;
use magellan_api_types::identity::role::Role;
use magellan_api_types::identity::tenant::Tenant;
use magellan_api_types::identity::user::User;

mock! {
    pub IdentityClient {}

    #[async_trait]
    impl IdentityApi for IdentityClient {
        async fn list_roles(&self) -> Result<Vec<Role>, IdentityClientError>;

        async fn list_tenants(&self) -> Result<Vec<Tenant>, IdentityClientError>;

        async fn list_users(&self) -> Result<Vec<User>, IdentityClientError>;

        async fn list_tenant_users<'a>(
            &self,
            tenant_id: &'a str,
        ) -> Result<Vec<User>, IdentityClientError>;

        async fn list_user_roles<'a>(
            &self,
            tenant_id: &'a str,
            user_id: &'a str,
        ) -> Result<Vec<Role>, IdentityClientError>;
    }
}
