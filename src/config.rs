// Copyright 2025 Fernando Borretti
//
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

use std::fs::read_to_string;
use std::path::Path;

use serde::Deserialize;

use crate::error::Fallible;

pub const CONFIG_FILE: &str = "config.toml";

/// Configuration read from `config.toml` in the data directory.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub reader: ReaderConfig,
}

/// Where the verse-text collaborator should look passages up.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReaderConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Translation identifier understood by the service. The service picks
    /// its own default when unset.
    #[serde(default)]
    pub translation: Option<String>,
}

fn default_base_url() -> String {
    "https://bible-api.com".to_string()
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            translation: None,
        }
    }
}

impl Config {
    /// Load the config file from `directory`. A missing file yields the
    /// defaults.
    pub fn load(directory: &Path) -> Fallible<Self> {
        let path = directory.join(CONFIG_FILE);
        if !path.exists() {
            log::debug!("No config file, using defaults.");
            return Ok(Self::default());
        }
        let content = read_to_string(&path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Fallible<Self> {
        Ok(toml::from_str(content)?)
    }
}
