// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Configuration management for behsse.
//!
//! Layers, lowest precedence first:
//!
//! 1. Built-in defaults
//! 2. `$CONFIG_DIR/behsse/config.toml`
//! 3. `./behsse.toml`
//! 4. The file given with `--config`
//! 5. `BEHSSE_FORMAT`, `BEHSSE_LINE_NUMBERS` and `NO_COLOR`
//!
//! ```toml
//! format = "ansi"
//! line-numbers = true
//!
//! [theme]
//! keyword = "blue bold"
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use behsse_highlight::{OutputFormat, Theme};
use serde::Deserialize;
use tracing::debug;

use crate::error::{BehsseError, Result};

const PROJECT_CONFIG: &str = "behsse.toml";

/// Effective configuration after all layers are merged.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Default output format
    pub format: OutputFormat,
    /// Number lines by default
    pub line_numbers: bool,
    /// Emit ANSI colors
    pub color: bool,
    /// Terminal theme
    pub theme: Theme,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: OutputFormat::Ansi,
            line_numbers: false,
            color: true,
            theme: Theme::default(),
        }
    }
}

/// One configuration file. Unset keys leave lower layers alone.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
struct ConfigFile {
    format: Option<OutputFormat>,
    line_numbers: Option<bool>,
    color: Option<bool>,
    theme: BTreeMap<String, String>,
}

impl Config {
    /// Load configuration from default locations, then `explicit` if given.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut config = Config::default();

        if let Some(user_config) = user_config_path() {
            if user_config.exists() {
                config.merge_from_file(&user_config)?;
            }
        }

        let project_config = PathBuf::from(PROJECT_CONFIG);
        if project_config.exists() {
            config.merge_from_file(&project_config)?;
        }

        if let Some(path) = explicit {
            if !path.exists() {
                return Err(BehsseError::Config(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            config.merge_from_file(path)?;
        }

        config.load_from_env(|key| std::env::var(key).ok())?;

        Ok(config)
    }

    /// Merge configuration from a TOML file.
    pub fn merge_from_file(&mut self, path: &Path) -> Result<()> {
        let content = std::fs::read_to_string(path).map_err(|source| BehsseError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let file: ConfigFile = toml::from_str(&content).map_err(|source| BehsseError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded config file");
        self.apply(file)
    }

    fn apply(&mut self, file: ConfigFile) -> Result<()> {
        if let Some(format) = file.format {
            self.format = format;
        }
        if let Some(line_numbers) = file.line_numbers {
            self.line_numbers = line_numbers;
        }
        if let Some(color) = file.color {
            self.color = color;
        }
        if !file.theme.is_empty() {
            self.theme = std::mem::take(&mut self.theme).with_overrides(file.theme)?;
        }
        Ok(())
    }

    /// Apply environment overrides, reading variables through `var`.
    pub fn load_from_env<F>(&mut self, var: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(format) = var("BEHSSE_FORMAT") {
            self.format = format.parse()?;
        }
        if let Some(value) = var("BEHSSE_LINE_NUMBERS") {
            self.line_numbers = parse_bool(&value).ok_or_else(|| {
                BehsseError::Config(format!("BEHSSE_LINE_NUMBERS must be a boolean, got '{value}'"))
            })?;
        }
        // https://no-color.org: any non-empty value disables color.
        if var("NO_COLOR").is_some_and(|value| !value.is_empty()) {
            self.color = false;
        }
        Ok(())
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("behsse").join("config.toml"))
}
