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

//! # Magellan API types
//!
//! Plain serde representations of the OpenStack API subset the Magellan
//! admin tools talk to: the Identity v2.0 API (token authentication,
//! tenants, users, roles and the service catalog) and the compute API
//! key pair resource.

pub mod compute;
pub mod identity;
