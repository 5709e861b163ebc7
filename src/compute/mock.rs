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

use crate::compute::ComputeApi;
use crate::compute::error::ComputeClientError;
use magellan_api_types::compute::keypair::Keypair;

mock! {
    pub ComputeClient {}

    #[async_trait]
    impl ComputeApi for ComputeClient {
        async fn list_keypairs(&self) -> Result<Vec<Keypair>, ComputeClientError>;

        async fn create_keypair<'a>(
            &self,
            name: &'a str,
            public_key: &'a str,
        ) -> Result<Keypair, ComputeClientError>;

        async fn delete_keypair<'a>(&self, name: &'a str) -> Result<(), ComputeClientError>;
    }
}
