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
//! # Error
//!
//! Diverse errors that can occur while the admin tools talk to the cloud.
use thiserror::Error;

use crate::compute::error::ComputeClientError;
use crate::identity::error::IdentityClientError;
use crate::inventory::InventoryError;

/// Admin tool error.
#[derive(Debug, Error)]
pub enum AdminError {
    #[error(transparent)]
    ComputeClient {
        #[from]
        source: ComputeClientError,
    },

    #[error(transparent)]
    IdentityClient {
        #[from]
        source: IdentityClientError,
    },

    #[error(transparent)]
    Inventory {
        #[from]
        source: InventoryError,
    },

    /// The service catalog of the scoped token has no compute entry.
    #[error("the service catalog contains no compute endpoint")]
    ComputeEndpointMissing,

    /// Url parsing error.
    #[error(transparent)]
    UrlParse {
        #[from]
        source: url::ParseError,
    },
}
