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

//! # Magellan admin tools
//!
//! Administrative command line utilities for the Magellan cloud, talking to
//! the OpenStack Identity v2.0 API and the compute API over HTTP:
//!
//! - `magellan-inventory` dumps the userbase (tenants, users and role
//!   memberships) as a single JSON document on standard output.
//! - `magellan-keys` creates, replaces, renames or deletes an SSH key pair
//!   registered with the compute service for a user account.
//!
//! Both tools are thin, single-shot clients: they authenticate, issue a
//! small batch of list/create/delete calls and reshape the responses. There
//! is no state kept between invocations and every upstream call is attempted
//! exactly once.
//!
//! The library half of the crate exposes the two operations behind the
//! binaries ([`inventory::fetch_inventory`] and [`keys::manage_keypair`])
//! together with the API clients they are built from, so the behavior is
//! testable without a live cloud.

pub mod compute;
pub mod config;
pub mod error;
pub mod identity;
pub mod inventory;
pub mod keys;
