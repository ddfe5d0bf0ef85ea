// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Query file configuration.
//!
//! A query file bundles engine queries with a few settings so a batch can
//! be run from the command line. YAML is the default format; files ending
//! in `.toml` are read as TOML.

pub mod query;

pub use query::{Answer, Query, QueryResult};

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Root of a query file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct QueryFile {
    /// Run settings
    #[serde(default)]
    pub settings: Settings,
    /// Queries, answered in order
    #[serde(default)]
    pub queries: Vec<Query>,
}

impl QueryFile {
    /// Load a query file, choosing the format from the extension
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read query file: {:?}", path))?;

        if path.extension().is_some_and(|ext| ext == "toml") {
            Self::from_toml(&contents)
        } else {
            Self::from_yaml(&contents)
        }
    }

    /// Parse a query file from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse YAML query file")
    }

    /// Parse a query file from TOML string
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse TOML query file")
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize query file to YAML")
    }

    /// Save the query file as YAML
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = self.to_yaml()?;
        fs::write(path.as_ref(), yaml)
            .with_context(|| format!("Failed to write query file: {:?}", path.as_ref()))
    }

    /// Answer every query in order
    pub fn run(&self) -> Vec<QueryResult> {
        self.queries.iter().map(Query::answer).collect()
    }
}

/// Settings applied when running a query file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}
