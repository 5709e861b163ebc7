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

use reqwest::StatusCode;
use thiserror::Error;
use url::Url;

/// Compute client error.
#[derive(Debug, Error)]
pub enum ComputeClientError {
    /// A request returned an unexpected status code.
    #[error("compute request to {url} failed with status {status}")]
    UnexpectedStatus { status: StatusCode, url: Url },

    /// The auth token cannot be carried in an http header.
    #[error(transparent)]
    InvalidToken {
        #[from]
        source: reqwest::header::InvalidHeaderValue,
    },

    #[error(transparent)]
    Http {
        #[from]
        source: reqwest::Error,
    },

    #[error(transparent)]
    UrlParse {
        #[from]
        source: url::ParseError,
    },
}
