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

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Tenant response object. Newer identity API versions call the same
/// entity a project.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Tenant {
    /// Tenant ID.
    pub id: String,
    /// Tenant name. Must be unique within the identity service.
    pub name: String,
    /// Tenant description.
    pub description: Option<String>,
    /// If the tenant is enabled, this value is true. If the tenant is
    /// disabled, this value is false.
    pub enabled: bool,
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub extra: Option<Value>,
}

/// List of tenants.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct TenantList {
    /// Collection of tenant objects.
    pub tenants: Vec<Tenant>,
}
