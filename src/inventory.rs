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

//! # Userbase inventory
//!
//! Builds the tenant/user/membership report of the identity service. The
//! membership map classifies every tenant member by the two well-known
//! roles: a user holding `admin` is recorded as admin even when also a
//! `Member`, a user holding only `Member` is recorded as member, users with
//! any other role set are omitted.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::debug;

use crate::config::Config;
use crate::error::AdminError;
use crate::identity::{IdentityApi, IdentityClient};

/// Name of the administrative role in the identity service.
const ADMIN_ROLE: &str = "admin";
/// Name of the regular member role in the identity service.
const MEMBER_ROLE: &str = "Member";

/// Inventory error.
#[derive(Debug, Error)]
pub enum InventoryError {
    #[error(transparent)]
    IdentityClient {
        #[from]
        source: crate::identity::error::IdentityClientError,
    },

    /// A well-known role is not defined in the identity service.
    #[error("role {0} is not defined in the identity service")]
    RoleNotFound(String),
}

/// Tenant attributes of the report.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct TenantRecord {
    /// Tenant description.
    pub description: Option<String>,
    /// Whether the tenant is enabled.
    pub enabled: bool,
}

/// User attributes of the report.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct UserRecord {
    /// Email address of the user.
    pub email: Option<String>,
    /// Whether the user is enabled.
    pub enabled: bool,
}

/// The complete inventory document printed by `magellan-inventory`.
///
/// Maps are ordered so the document serializes deterministically.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct InventoryReport {
    /// Tenants keyed by tenant name.
    pub tenants: BTreeMap<String, TenantRecord>,
    /// Users keyed by user name.
    pub users: BTreeMap<String, UserRecord>,
    /// Role memberships: tenant name to user name to role name. Every
    /// tenant appears here, with an empty map when it has no admin or
    /// member users.
    pub memberships: BTreeMap<String, BTreeMap<String, String>>,
}

/// Assemble the inventory report from the identity service listings.
pub async fn build_report(identity: &impl IdentityApi) -> Result<InventoryReport, InventoryError> {
    // Resolve the two well-known roles before any tenant or user listing.
    let roles = identity.list_roles().await?;
    let admin = roles
        .iter()
        .find(|role| role.name == ADMIN_ROLE)
        .ok_or_else(|| InventoryError::RoleNotFound(ADMIN_ROLE.into()))?;
    let member = roles
        .iter()
        .find(|role| role.name == MEMBER_ROLE)
        .ok_or_else(|| InventoryError::RoleNotFound(MEMBER_ROLE.into()))?;

    let tenant_list = identity.list_tenants().await?;
    // Duplicate tenant or user names are last-write-wins, as served.
    let tenants = tenant_list
        .iter()
        .map(|tenant| {
            (
                tenant.name.clone(),
                TenantRecord {
                    description: tenant.description.clone(),
                    enabled: tenant.enabled,
                },
            )
        })
        .collect::<BTreeMap<_, _>>();
    let users = identity
        .list_users()
        .await?
        .into_iter()
        .map(|user| {
            (
                user.name,
                UserRecord {
                    email: user.email,
                    enabled: user.enabled,
                },
            )
        })
        .collect::<BTreeMap<_, _>>();
    debug!(
        "collected {} tenants and {} users",
        tenants.len(),
        users.len()
    );

    let mut memberships: BTreeMap<String, BTreeMap<String, String>> = BTreeMap::new();
    for tenant in &tenant_list {
        let tenant_memberships = memberships.entry(tenant.name.clone()).or_default();
        for user in identity.list_tenant_users(&tenant.id).await? {
            let user_roles = identity.list_user_roles(&tenant.id, &user.id).await?;
            // Explicit priority: admin wins over Member, anything else is
            // not a membership.
            if user_roles.iter().any(|role| role.name == admin.name) {
                tenant_memberships.insert(user.name, admin.name.clone());
            } else if user_roles.iter().any(|role| role.name == member.name) {
                tenant_memberships.insert(user.name, member.name.clone());
            }
        }
    }

    Ok(InventoryReport {
        tenants,
        users,
        memberships,
    })
}

/// Authenticate with the configured credentials and build the report.
pub async fn fetch_inventory(
    config: &Config,
    insecure: bool,
) -> Result<InventoryReport, AdminError> {
    let mut identity = IdentityClient::new(config.env.auth_url.clone(), insecure)?;
    identity
        .authenticate(
            &config.env.username,
            &config.env.password,
            Some(&config.env.tenant_name),
        )
        .await?;
    Ok(build_report(&identity).await?)
}
