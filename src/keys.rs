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

//! # Key pair management
//!
//! Reconciles a single named SSH key pair in the compute service. Exactly
//! one action is taken per invocation: delete, rename, replace or create,
//! in that precedence. Deleting a key that does not exist and renaming from
//! a name that does not exist are no-ops, not errors.

use secrecy::SecretString;
use tracing::debug;
use url::Url;

use crate::compute::{ComputeApi, ComputeClient};
use crate::compute::error::ComputeClientError;
use crate::error::AdminError;
use crate::identity::{IdentityApi, IdentityClient};

/// Identity credentials of the key owner.
#[derive(Clone, Debug)]
pub struct Credentials {
    /// User name, not the user ID.
    pub username: String,
    /// Password of the user.
    pub password: SecretString,
    /// Identity service endpoint.
    pub auth_url: Url,
}

/// One requested key pair change.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct KeyRequest {
    /// Name of the key pair to act on.
    pub name: String,
    /// Rename the key pair to this name instead of replacing it.
    pub rename: Option<String>,
    /// Delete the key pair instead of creating it.
    pub delete: bool,
    /// Public key material for create and replace.
    pub public_key: String,
}

/// The action `ensure_keypair` ended up taking.
#[derive(Clone, Debug, PartialEq)]
pub enum KeypairOutcome {
    /// A new key pair was registered.
    Created,
    /// An existing key pair of the same name was deleted and registered
    /// again with the supplied material.
    Replaced,
    /// The key pair was deleted.
    Deleted,
    /// Delete was requested but no key pair of that name exists.
    AlreadyAbsent,
    /// The key pair was registered under the new name, keeping its
    /// material, and the old name was deleted.
    Renamed,
    /// Rename was requested but no key pair of that name exists.
    RenameSourceMissing,
}

/// Apply the requested change to the account's key pair store.
pub async fn ensure_keypair(
    compute: &impl ComputeApi,
    request: &KeyRequest,
) -> Result<KeypairOutcome, ComputeClientError> {
    let existing = compute
        .list_keypairs()
        .await?
        .into_iter()
        .find(|keypair| keypair.name == request.name);

    if request.delete {
        if existing.is_some() {
            compute.delete_keypair(&request.name).await?;
            debug!("deleted key pair {}", request.name);
            Ok(KeypairOutcome::Deleted)
        } else {
            Ok(KeypairOutcome::AlreadyAbsent)
        }
    } else if let Some(rename) = &request.rename {
        if let Some(keypair) = existing {
            // The rename keeps the registered material, not the material
            // supplied on the command line.
            compute.create_keypair(rename, &keypair.public_key).await?;
            compute.delete_keypair(&request.name).await?;
            debug!("renamed key pair {} to {rename}", request.name);
            Ok(KeypairOutcome::Renamed)
        } else {
            Ok(KeypairOutcome::RenameSourceMissing)
        }
    } else if existing.is_some() {
        compute.delete_keypair(&request.name).await?;
        compute
            .create_keypair(&request.name, &request.public_key)
            .await?;
        debug!("replaced key pair {}", request.name);
        Ok(KeypairOutcome::Replaced)
    } else {
        compute
            .create_keypair(&request.name, &request.public_key)
            .await?;
        debug!("created key pair {}", request.name);
        Ok(KeypairOutcome::Created)
    }
}

/// Resolve the user's account context and apply the requested key pair
/// change.
///
/// The compute API requires a tenant scope, so the user is first
/// authenticated unscoped to list their tenants, then scoped to the first
/// one. A user without any tenant is a no-op returning `None`.
pub async fn manage_keypair(
    credentials: &Credentials,
    request: &KeyRequest,
) -> Result<Option<KeypairOutcome>, AdminError> {
    // Certificate validation stays disabled on this path.
    let mut identity = IdentityClient::new(credentials.auth_url.clone(), true)?;
    identity
        .authenticate(&credentials.username, &credentials.password, None)
        .await?;

    let tenants = identity.list_tenants().await?;
    let Some(tenant) = tenants.first() else {
        debug!("user {} belongs to no tenant", credentials.username);
        return Ok(None);
    };

    let access = identity
        .authenticate(
            &credentials.username,
            &credentials.password,
            Some(&tenant.name),
        )
        .await?;
    let endpoint = access
        .service_endpoint("compute")
        .ok_or(AdminError::ComputeEndpointMissing)?;
    let compute = ComputeClient::new(endpoint.parse()?, &access.token.id, false)?;

    Ok(Some(ensure_keypair(&compute, request).await?))
}

#[cfg(test)]
mod tests {
    use eyre::Result;
    use mockall::Sequence;

    use super::*;
    use crate::compute::MockComputeClient;
    use magellan_api_types::compute::keypair::Keypair;

    fn keypair(name: &str, public_key: &str) -> Keypair {
        Keypair {
            name: name.into(),
            public_key: public_key.into(),
            ..Default::default()
        }
    }

    fn request(name: &str) -> KeyRequest {
        KeyRequest {
            name: name.into(),
            public_key: "ssh-rsa NEW user@host".into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_when_absent() -> Result<()> {
        let mut compute = MockComputeClient::default();
        compute
            .expect_list_keypairs()
            .returning(|| Ok(vec![keypair("other", "ssh-rsa AAAA a@b")]));
        compute
            .expect_create_keypair()
            .withf(|name: &str, public_key: &str| {
                name == "deploy" && public_key == "ssh-rsa NEW user@host"
            })
            .times(1)
            .returning(|name, public_key| Ok(keypair(name, public_key)));
        compute.expect_delete_keypair().never();

        assert_eq!(
            KeypairOutcome::Created,
            ensure_keypair(&compute, &request("deploy")).await?
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_replace_is_delete_then_create() -> Result<()> {
        let mut compute = MockComputeClient::default();
        let mut seq = Sequence::new();
        compute
            .expect_list_keypairs()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(vec![keypair("deploy", "ssh-rsa OLD user@host")]));
        compute
            .expect_delete_keypair()
            .withf(|name: &str| name == "deploy")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        compute
            .expect_create_keypair()
            .withf(|name: &str, public_key: &str| {
                name == "deploy" && public_key == "ssh-rsa NEW user@host"
            })
            .times(1)
            .in_sequence(&mut seq)
            .returning(|name, public_key| Ok(keypair(name, public_key)));

        assert_eq!(
            KeypairOutcome::Replaced,
            ensure_keypair(&compute, &request("deploy")).await?
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_existing() -> Result<()> {
        let mut compute = MockComputeClient::default();
        compute
            .expect_list_keypairs()
            .returning(|| Ok(vec![keypair("deploy", "ssh-rsa AAAA a@b")]));
        compute
            .expect_delete_keypair()
            .withf(|name: &str| name == "deploy")
            .times(1)
            .returning(|_| Ok(()));
        compute.expect_create_keypair().never();

        let mut request = request("deploy");
        request.delete = true;
        assert_eq!(
            KeypairOutcome::Deleted,
            ensure_keypair(&compute, &request).await?
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_missing_is_a_noop() -> Result<()> {
        let mut compute = MockComputeClient::default();
        compute.expect_list_keypairs().returning(|| Ok(vec![]));
        compute.expect_delete_keypair().never();
        compute.expect_create_keypair().never();

        let mut request = request("ghost");
        request.delete = true;
        assert_eq!(
            KeypairOutcome::AlreadyAbsent,
            ensure_keypair(&compute, &request).await?
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_rename_keeps_registered_material() -> Result<()> {
        let mut compute = MockComputeClient::default();
        compute
            .expect_list_keypairs()
            .returning(|| Ok(vec![keypair("deploy", "ssh-rsa OLD user@host")]));
        compute
            .expect_create_keypair()
            .withf(|name: &str, public_key: &str| {
                name == "deploy2" && public_key == "ssh-rsa OLD user@host"
            })
            .times(1)
            .returning(|name, public_key| Ok(keypair(name, public_key)));
        compute
            .expect_delete_keypair()
            .withf(|name: &str| name == "deploy")
            .times(1)
            .returning(|_| Ok(()));

        let mut request = request("deploy");
        request.rename = Some("deploy2".into());
        assert_eq!(
            KeypairOutcome::Renamed,
            ensure_keypair(&compute, &request).await?
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_rename_missing_is_a_noop() -> Result<()> {
        let mut compute = MockComputeClient::default();
        compute.expect_list_keypairs().returning(|| Ok(vec![]));
        compute.expect_create_keypair().never();
        compute.expect_delete_keypair().never();

        let mut request = request("ghost");
        request.rename = Some("ghost2".into());
        assert_eq!(
            KeypairOutcome::RenameSourceMissing,
            ensure_keypair(&compute, &request).await?
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_wins_over_rename() -> Result<()> {
        let mut compute = MockComputeClient::default();
        compute
            .expect_list_keypairs()
            .returning(|| Ok(vec![keypair("deploy", "ssh-rsa OLD user@host")]));
        compute
            .expect_delete_keypair()
            .withf(|name: &str| name == "deploy")
            .times(1)
            .returning(|_| Ok(()));
        compute.expect_create_keypair().never();

        let mut request = request("deploy");
        request.delete = true;
        request.rename = Some("deploy2".into());
        assert_eq!(
            KeypairOutcome::Deleted,
            ensure_keypair(&compute, &request).await?
        );
        Ok(())
    }
}
