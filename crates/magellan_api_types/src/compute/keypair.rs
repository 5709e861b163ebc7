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

/// An SSH key pair registered with the compute service.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Keypair {
    /// Key pair name. Must be unique per user account.
    pub name: String,
    /// Public key material in the OpenSSH wire format.
    pub public_key: String,
    /// Fingerprint of the public key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub extra: Option<Value>,
}

/// One element of the key pair list. The compute API nests every list
/// element under its own `keypair` key.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct KeypairEntry {
    /// The key pair itself.
    pub keypair: Keypair,
}

/// List of key pairs (`GET /os-keypairs`).
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct KeypairList {
    /// Collection of key pair entries.
    pub keypairs: Vec<KeypairEntry>,
}

/// Key pair create data.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct KeypairCreate {
    /// Name for the new key pair.
    pub name: String,
    /// Public key material to import.
    pub public_key: String,
}

/// Complete create request body (`POST /os-keypairs`).
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct KeypairCreateRequest {
    /// Key pair object.
    pub keypair: KeypairCreate,
}

/// Complete response with the key pair data.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct KeypairResponse {
    /// Key pair object.
    pub keypair: Keypair,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_list_nests_entries() {
        let list: KeypairList = serde_json::from_value(json!({
            "keypairs": [
                {
                    "keypair": {
                        "name": "deploy",
                        "public_key": "ssh-rsa AAAA deploy@magellan",
                        "fingerprint": "aa:bb:cc"
                    }
                }
            ]
        }))
        .unwrap();

        assert_eq!(1, list.keypairs.len());
        assert_eq!("deploy", list.keypairs[0].keypair.name);
        assert_eq!(
            "ssh-rsa AAAA deploy@magellan",
            list.keypairs[0].keypair.public_key
        );
    }

    #[test]
    fn test_create_request_envelope() {
        let request = KeypairCreateRequest {
            keypair: KeypairCreate {
                name: "deploy".into(),
                public_key: "ssh-rsa AAAA deploy@magellan".into(),
            },
        };
        assert_eq!(
            json!({
                "keypair": {
                    "name": "deploy",
                    "public_key": "ssh-rsa AAAA deploy@magellan"
                }
            }),
            serde_json::to_value(&request).unwrap()
        );
    }
}
