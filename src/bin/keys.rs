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
//! Key pair management executable.
//!
//! This is the entry point of the `magellan-keys` binary.

use clap::Parser;
use color_eyre::Report;
use eyre::WrapErr;
use secrecy::SecretString;
use std::{env, io};
use tracing::debug;
use tracing_subscriber::{
    filter::{LevelFilter, Targets},
    prelude::*,
};

use magellan_admin::keys::{Credentials, KeyRequest, KeypairOutcome, manage_keypair};

/// Add, replace, rename or remove an SSH key pair for a user. The identity
/// service endpoint is taken from the `AUTH_URL` environment variable.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The username for the user, not the user ID.
    #[arg(short = 'u')]
    user: String,

    /// The user's password.
    #[arg(short = 'p')]
    password: String,

    /// Name to use for the key.
    #[arg(short = 'n')]
    name: String,

    /// If this is set, rename the key matching the name to this value.
    #[arg(short = 'r')]
    rename: Option<String>,

    /// Delete the key.
    #[arg(long)]
    delete: bool,

    /// Do not validate the TLS certificate when connecting to the identity
    /// service.
    #[arg(long)]
    insecure: bool,

    /// Raw public key material, joined with single spaces.
    #[arg(trailing_var_arg = true)]
    key_parts: Vec<String>,

    /// Verbosity level. Repeat to increase level.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[allow(clippy::print_stdout)]
#[tokio::main]
async fn main() -> Result<(), Report> {
    let args = Args::parse();

    let filter = Targets::new().with_default(match args.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    });

    let log_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_filter(filter);

    // build the tracing registry
    tracing_subscriber::registry().with(log_layer).init();

    if args.insecure {
        // Certificate validation is disabled on the identity path of this
        // tool whether or not the flag is given.
        debug!("--insecure is implied here");
    }

    let credentials = Credentials {
        username: args.user,
        password: SecretString::from(args.password),
        auth_url: env::var("AUTH_URL")
            .wrap_err("AUTH_URL must be set")?
            .parse()
            .wrap_err("AUTH_URL is not a valid url")?,
    };
    let request = KeyRequest {
        name: args.name,
        rename: args.rename,
        delete: args.delete,
        public_key: args.key_parts.join(" "),
    };

    match manage_keypair(&credentials, &request).await? {
        Some(KeypairOutcome::RenameSourceMissing) => {
            println!("No key found with name {}", request.name);
        }
        Some(outcome) => debug!("key pair {} reconciled: {outcome:?}", request.name),
        None => debug!("no tenant for the user, nothing to do"),
    }
    Ok(())
}
