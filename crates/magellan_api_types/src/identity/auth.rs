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

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::identity::tenant::Tenant;

/// Password credentials of the authenticating user.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct PasswordCredentials {
    /// User name.
    pub username: String,
    /// User password.
    pub password: String,
}

/// The `auth` payload of a token request.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Auth {
    /// Password credentials.
    #[serde(rename = "passwordCredentials")]
    pub password_credentials: PasswordCredentials,
    /// Tenant the token should be scoped to. An unscoped token is issued
    /// when this is absent.
    #[serde(rename = "tenantName", skip_serializing_if = "Option::is_none")]
    pub tenant_name: Option<String>,
}

/// Complete token request body (`POST /tokens`).
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct AuthRequest {
    /// Authentication payload.
    pub auth: Auth,
}

/// The issued token.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Token {
    /// Token ID, sent as `X-Auth-Token` on subsequent requests.
    pub id: String,
    /// Expiration timestamp of the token. The time zone is UTC.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires: Option<DateTime<Utc>>,
    /// Tenant the token is scoped to, absent for unscoped tokens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant: Option<Tenant>,
}

/// A single service endpoint within a catalog entry.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Endpoint {
    /// Public URL of the endpoint.
    #[serde(rename = "publicURL")]
    pub public_url: String,
    /// Administrative URL of the endpoint.
    #[serde(rename = "adminURL", skip_serializing_if = "Option::is_none")]
    pub admin_url: Option<String>,
    /// Internal URL of the endpoint.
    #[serde(rename = "internalURL", skip_serializing_if = "Option::is_none")]
    pub internal_url: Option<String>,
    /// Region the endpoint is deployed in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

/// One service of the catalog returned with a scoped token.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct CatalogEntry {
    /// Service type (`identity`, `compute`, ...).
    #[serde(rename = "type")]
    pub service_type: String,
    /// Service name (`keystone`, `nova`, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Endpoints of the service.
    #[serde(default)]
    pub endpoints: Vec<Endpoint>,
}

/// The `access` object of a token response.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Access {
    /// The issued token.
    pub token: Token,
    /// Service catalog, empty for unscoped tokens.
    #[serde(rename = "serviceCatalog", default)]
    pub service_catalog: Vec<CatalogEntry>,
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub extra: Option<Value>,
}

/// Complete token response body.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct AuthResponse {
    /// Access object.
    pub access: Access,
}

impl Access {
    /// First public endpoint of the given service type in the catalog.
    pub fn service_endpoint(&self, service_type: &str) -> Option<&str> {
        self.service_catalog
            .iter()
            .find(|entry| entry.service_type == service_type)
            .and_then(|entry| entry.endpoints.first())
            .map(|endpoint| endpoint.public_url.as_str())
    }
}
