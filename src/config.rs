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

use config::{File, FileFormat};
use eyre::{Report, WrapErr};
use secrecy::SecretString;
use serde::Deserialize;
use std::path::PathBuf;
use url::Url;

/// Name of the userbase config file, looked up in the user's home directory.
pub const CONFIG_FILE_NAME: &str = "userbase.config";

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    /// Identity service credentials.
    pub env: EnvSection,
}

/// The `[env]` section of the userbase config file.
#[derive(Clone, Debug, Deserialize)]
pub struct EnvSection {
    /// User name to authenticate with.
    pub username: String,
    /// Password of the user.
    pub password: SecretString,
    /// Tenant the issued token is scoped to.
    pub tenant_name: String,
    /// Identity service endpoint.
    pub auth_url: Url,
}

impl Config {
    pub fn new(path: PathBuf) -> Result<Self, Report> {
        let mut builder = config::Config::builder();

        if path.is_file() {
            builder = builder.add_source(File::from(path).format(FileFormat::Ini));
        }

        builder
            .build()
            .wrap_err("Failed to read the configuration file")?
            .try_deserialize()
            .map_err(Report::from)
    }

    /// Default config file location, `~/userbase.config`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(CONFIG_FILE_NAME))
    }
}

#[cfg(test)]
mod tests {
    use eyre::Result;
    use secrecy::ExposeSecret;
    use std::io::Write;
    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_config() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(
            file,
            r#"[env]
username = admin
password = sekrit
tenant_name = services
auth_url = https://keystone.example.com:5000/v2.0"#
        )?;

        let config = Config::new(file.path().to_path_buf())?;
        assert_eq!("admin", config.env.username);
        assert_eq!("sekrit", config.env.password.expose_secret());
        assert_eq!("services", config.env.tenant_name);
        assert_eq!(
            "https://keystone.example.com:5000/v2.0",
            config.env.auth_url.as_str()
        );
        Ok(())
    }

    #[test]
    fn test_config_missing_file() {
        assert!(Config::new(PathBuf::from("/nonexistent/userbase.config")).is_err());
    }

    #[test]
    fn test_config_missing_section() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "[other]\nusername = admin")?;
        assert!(Config::new(file.path().to_path_buf()).is_err());
        Ok(())
    }

    #[test]
    fn test_default_path_ends_with_file_name() {
        if let Some(path) = Config::default_path() {
            assert!(path.ends_with(CONFIG_FILE_NAME));
        }
    }
}
