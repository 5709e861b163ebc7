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

//! # Identity client
//!
//! Client of the OpenStack Identity v2.0 API. A token is obtained with
//! password credentials (`POST /tokens`, optionally scoped to a tenant) and
//! carried as `X-Auth-Token` on every subsequent request. The listing
//! operations behind the inventory report live on the [`IdentityApi`] trait
//! so they can be mocked in tests.

use async_trait::async_trait;
use reqwest::{
    Client, ClientBuilder, StatusCode,
    header::{HeaderMap, HeaderName, HeaderValue},
};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

pub mod error;
#[cfg(test)]
pub mod mock;
#[cfg(test)]
pub use mock::MockIdentityClient;

use crate::identity::error::IdentityClientError;
use magellan_api_types::identity::auth::{
    Access, Auth, AuthRequest, AuthResponse, PasswordCredentials,
};
use magellan_api_types::identity::role::{Role, RoleList};
use magellan_api_types::identity::tenant::{Tenant, TenantList};
use magellan_api_types::identity::user::{User, UserList};

/// Listing operations of the identity service used by the admin tools.
#[async_trait]
pub trait IdentityApi: Send + Sync {
    /// List all roles known to the identity service.
    async fn list_roles(&self) -> Result<Vec<Role>, IdentityClientError>;

    /// List tenants visible to the authenticated user. An admin token sees
    /// every tenant, a user token only the user's own tenants.
    async fn list_tenants(&self) -> Result<Vec<Tenant>, IdentityClientError>;

    /// List all users known to the identity service.
    async fn list_users(&self) -> Result<Vec<User>, IdentityClientError>;

    /// List the users that are members of the given tenant.
    async fn list_tenant_users<'a>(
        &self,
        tenant_id: &'a str,
    ) -> Result<Vec<User>, IdentityClientError>;

    /// List the roles a user holds on the given tenant.
    async fn list_user_roles<'a>(
        &self,
        tenant_id: &'a str,
        user_id: &'a str,
    ) -> Result<Vec<Role>, IdentityClientError>;
}

/// Http client of the Identity v2.0 API.
#[derive(Debug)]
pub struct IdentityClient {
    client: Client,
    base_url: Url,
    insecure: bool,
}

impl IdentityClient {
    /// Build a client for the identity endpoint. With `insecure` the TLS
    /// certificate of the service is not validated.
    pub fn new(auth_url: Url, insecure: bool) -> Result<Self, IdentityClientError> {
        let mut base_url = auth_url;
        // Url::join replaces the last path segment unless the base ends
        // with a slash.
        if !base_url.path().ends_with('/') {
            base_url.set_path(&format!("{}/", base_url.path()));
        }

        let mut builder = ClientBuilder::new();
        if insecure {
            builder = builder.danger_accept_invalid_certs(true);
        }

        Ok(Self {
            client: builder.build()?,
            base_url,
            insecure,
        })
    }

    /// Authenticate with password credentials, optionally scoped to a
    /// tenant. On success the issued token is installed as a default
    /// `X-Auth-Token` header for the subsequent listing calls.
    #[tracing::instrument(level = "debug", skip(self, password))]
    pub async fn authenticate(
        &mut self,
        username: &str,
        password: &SecretString,
        tenant_name: Option<&str>,
    ) -> Result<Access, IdentityClientError> {
        let request = AuthRequest {
            auth: Auth {
                password_credentials: PasswordCredentials {
                    username: username.into(),
                    password: password.expose_secret().into(),
                },
                tenant_name: tenant_name.map(Into::into),
            },
        };

        let rsp = self
            .client
            .post(self.base_url.join("tokens")?)
            .json(&request)
            .send()
            .await?;

        if rsp.status() != StatusCode::OK {
            return Err(IdentityClientError::AuthFailed(rsp.status()));
        }
        let access = rsp.json::<AuthResponse>().await?.access;
        debug!("authenticated against {}", self.base_url);

        let mut token = HeaderValue::from_str(&access.token.id)?;
        token.set_sensitive(true);
        let mut builder = ClientBuilder::new().default_headers(HeaderMap::from_iter([(
            HeaderName::from_static("x-auth-token"),
            token,
        )]));
        if self.insecure {
            builder = builder.danger_accept_invalid_certs(true);
        }
        self.client = builder.build()?;

        Ok(access)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, IdentityClientError> {
        let url = self.base_url.join(path)?;
        let rsp = self.client.get(url.clone()).send().await?;
        match rsp.status() {
            StatusCode::OK => Ok(rsp.json().await?),
            status => Err(IdentityClientError::UnexpectedStatus { status, url }),
        }
    }
}

#[async_trait]
impl IdentityApi for IdentityClient {
    #[tracing::instrument(level = "debug", skip(self))]
    async fn list_roles(&self) -> Result<Vec<Role>, IdentityClientError> {
        Ok(self.get_json::<RoleList>("OS-KSADM/roles").await?.roles)
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn list_tenants(&self) -> Result<Vec<Tenant>, IdentityClientError> {
        Ok(self.get_json::<TenantList>("tenants").await?.tenants)
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn list_users(&self) -> Result<Vec<User>, IdentityClientError> {
        Ok(self.get_json::<UserList>("users").await?.users)
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn list_tenant_users<'a>(
        &self,
        tenant_id: &'a str,
    ) -> Result<Vec<User>, IdentityClientError> {
        Ok(self
            .get_json::<UserList>(&format!("tenants/{tenant_id}/users"))
            .await?
            .users)
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn list_user_roles<'a>(
        &self,
        tenant_id: &'a str,
        user_id: &'a str,
    ) -> Result<Vec<Role>, IdentityClientError> {
        Ok(self
            .get_json::<RoleList>(&format!("tenants/{tenant_id}/users/{user_id}/roles"))
            .await?
            .roles)
    }
}
