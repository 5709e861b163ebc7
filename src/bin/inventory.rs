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
//! Userbase inventory executable.
//!
//! This is the entry point of the `magellan-inventory` binary.

use clap::Parser;
use color_eyre::Report;
use eyre::OptionExt;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{
    filter::{LevelFilter, Targets},
    prelude::*,
};

use magellan_admin::config::Config;
use magellan_admin::inventory::fetch_inventory;

/// Return an inventory of Magellan tenants and users as a JSON data
/// structure printed to standard output, with the tenants, users and role
/// memberships known to the identity service.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Do not validate the TLS certificate when connecting to the identity
    /// service.
    #[arg(long)]
    insecure: bool,

    /// Path to the userbase config file. Defaults to `userbase.config` in
    /// the home directory.
    #[arg(short, long)]
    config: Option<PathBuf>,

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

    let path = match args.config {
        Some(path) => path,
        None => Config::default_path().ok_or_eyre("cannot determine the home directory")?,
    };
    if !path.is_file() {
        println!("Config file {} does not exist!", path.display());
        std::process::exit(1);
    }
    let cfg = Config::new(path)?;

    let report = fetch_inventory(&cfg, args.insecure).await?;
    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}
