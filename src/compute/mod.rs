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

//! # Compute client
//!
//! Client of the compute API key pair resource. The endpoint comes from the
//! `compute` entry of the service catalog of a tenant-scoped token, the
//! token itself rides in `X-Auth-Token`.

use async_trait::async_trait;
use reqwest::{
    Client, ClientBuilder, StatusCode,
    header::{HeaderMap, HeaderName, HeaderValue},
};
use url::Url;

pub mod error;
#[cfg(test)]
pub mod mock;
#[cfg(test)]
pub use mock::MockComputeClient;

use crate::compute::error::ComputeClientError;
use magellan_api_types::compute::keypair::{
    Keypair, KeypairCreate, KeypairCreateRequest, KeypairList, KeypairResponse,
};

/// Key pair operations of the compute service.
#[async_trait]
pub trait ComputeApi: Send + Sync {
    /// List the key pairs of the authenticated user's account.
    async fn list_keypairs(&self) -> Result<Vec<Keypair>, ComputeClientError>;

    /// Register a key pair under the given name from existing public key
    /// material.
    async fn create_keypair<'a>(
        &self,
        name: &'a str,
        public_key: &'a str,
    ) -> Result<Keypair, ComputeClientError>;

    /// Delete the key pair with the given name.
    async fn delete_keypair<'a>(&self, name: &'a str) -> Result<(), ComputeClientError>;
}

/// Http client of the compute API.
#[derive(Debug)]
pub struct ComputeClient {
    client: Client,
    base_url: Url,
}

impl ComputeClient {
    /// Build a client for the compute endpoint with the given auth token.
    pub fn new(endpoint: Url, token: &str, insecure: bool) -> Result<Self, ComputeClientError> {
        let mut base_url = endpoint;
        // Url::join replaces the last path segment unless the base ends
        // with a slash.
        if !base_url.path().ends_with('/') {
            base_url.set_path(&format!("{}/", base_url.path()));
        }

        let mut header = HeaderValue::from_str(token)?;
        header.set_sensitive(true);
        let mut builder = ClientBuilder::new().default_headers(HeaderMap::from_iter([(
            HeaderName::from_static("x-auth-token"),
            header,
        )]));
        if insecure {
            builder = builder.danger_accept_invalid_certs(true);
        }

        Ok(Self {
            client: builder.build()?,
            base_url,
        })
    }
}

#[async_trait]
impl ComputeApi for ComputeClient {
    #[tracing::instrument(level = "debug", skip(self))]
    async fn list_keypairs(&self) -> Result<Vec<Keypair>, ComputeClientError> {
        let url = self.base_url.join("os-keypairs")?;
        let rsp = self.client.get(url.clone()).send().await?;
        match rsp.status() {
            StatusCode::OK => Ok(rsp
                .json::<KeypairList>()
                .await?
                .keypairs
                .into_iter()
                .map(|entry| entry.keypair)
                .collect()),
            status => Err(ComputeClientError::UnexpectedStatus { status, url }),
        }
    }

    #[tracing::instrument(level = "debug", skip(self, public_key))]
    async fn create_keypair<'a>(
        &self,
        name: &'a str,
        public_key: &'a str,
    ) -> Result<Keypair, ComputeClientError> {
        let request = KeypairCreateRequest {
            keypair: KeypairCreate {
                name: name.into(),
                public_key: public_key.into(),
            },
        };
        let url = self.base_url.join("os-keypairs")?;
        let rsp = self.client.post(url.clone()).json(&request).send().await?;
        match rsp.status() {
            StatusCode::OK | StatusCode::CREATED => {
                Ok(rsp.json::<KeypairResponse>().await?.keypair)
            }
            status => Err(ComputeClientError::UnexpectedStatus { status, url }),
        }
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn delete_keypair<'a>(&self, name: &'a str) -> Result<(), ComputeClientError> {
        let url = self.base_url.join(&format!("os-keypairs/{name}"))?;
        let rsp = self.client.delete(url.clone()).send().await?;
        match rsp.status() {
            StatusCode::OK | StatusCode::ACCEPTED | StatusCode::NO_CONTENT => Ok(()),
            status => Err(ComputeClientError::UnexpectedStatus { status, url }),
        }
    }
}
