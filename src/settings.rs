// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Startup settings, loaded once from `settings.toml`.
//!
//! Every key is optional; missing keys fall back to fixed defaults. A
//! missing or malformed file is fatal at startup and is reported with a
//! user-facing message, so the TUI never runs against half-loaded settings.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

const DEFAULT_AUTHOR: &str = "Anonymous";
const DEFAULT_CATEGORY: &str = "General";
const DEFAULT_THEME: &str = "monokai";
const DEFAULT_OUTPUT_DIRECTORY: &str = ".";

#[derive(Debug)]
pub enum SettingsError {
    NotFound {
        path: PathBuf,
    },
    Io {
        path: PathBuf,
        source: io::Error,
    },
    Format {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { path } => write!(f, "{} not found.", path.display()),
            Self::Io { path, source } => write!(f, "cannot read {}: {source}", path.display()),
            Self::Format { path, .. } => {
                write!(f, "{} does not have the correct format.", path.display())
            }
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotFound { .. } => None,
            Self::Io { source, .. } => Some(source),
            Self::Format { source, .. } => Some(source),
        }
    }
}

/// Raw file layout: a single `[default]` table with optional keys.
#[derive(Debug, Default, Deserialize)]
struct SettingsFile {
    #[serde(default)]
    default: DefaultTable,
}

#[derive(Debug, Default, Deserialize)]
struct DefaultTable {
    author: Option<String>,
    categories: Option<Vec<String>>,
    textarea_default_content: Option<String>,
    theme: Option<String>,
    output_directory: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    author: String,
    categories: Vec<String>,
    textarea_default_content: String,
    theme: String,
    output_directory: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            author: DEFAULT_AUTHOR.to_owned(),
            categories: vec![DEFAULT_CATEGORY.to_owned()],
            textarea_default_content: String::new(),
            theme: DEFAULT_THEME.to_owned(),
            output_directory: DEFAULT_OUTPUT_DIRECTORY.to_owned(),
        }
    }
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(SettingsError::NotFound {
                    path: path.to_path_buf(),
                })
            }
            Err(source) => {
                return Err(SettingsError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let file: SettingsFile = toml::from_str(&text).map_err(|source| SettingsError::Format {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self::from_file(file))
    }

    fn from_file(file: SettingsFile) -> Self {
        let fallback = Self::default();
        let table = file.default;
        Self {
            author: table.author.unwrap_or(fallback.author),
            categories: table.categories.unwrap_or(fallback.categories),
            textarea_default_content: table
                .textarea_default_content
                .unwrap_or(fallback.textarea_default_content),
            theme: table.theme.unwrap_or(fallback.theme),
            output_directory: table.output_directory.unwrap_or(fallback.output_directory),
        }
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn textarea_default_content(&self) -> &str {
        &self.textarea_default_content
    }

    pub fn theme(&self) -> &str {
        &self.theme
    }

    pub fn output_directory(&self) -> &str {
        &self.output_directory
    }
}

#[cfg(test)]
mod tests {
    use std::env;
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::{Settings, SettingsError};

    fn write_temp_settings(name: &str, contents: &str) -> std::path::PathBuf {
        let nanos = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_nanos();
        let path = env::temp_dir().join(format!(
            "galatea-settings-{name}-{}-{nanos}.toml",
            std::process::id()
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn loads_a_fully_populated_file() {
        let path = write_temp_settings(
            "full",
            r##"
[default]
author = "Ada"
categories = ["General", "Developer", "Linux"]
textarea_default_content = "# Title\n"
theme = "dracula"
output_directory = "articles"
"##,
        );

        let settings = Settings::load(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(settings.author(), "Ada");
        assert_eq!(settings.categories(), ["General", "Developer", "Linux"]);
        assert_eq!(settings.textarea_default_content(), "# Title\n");
        assert_eq!(settings.theme(), "dracula");
        assert_eq!(settings.output_directory(), "articles");
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let path = write_temp_settings("partial", "[default]\nauthor = \"Bo\"\n");
        let settings = Settings::load(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(settings.author(), "Bo");
        assert_eq!(settings.categories(), ["General"]);
        assert_eq!(settings.textarea_default_content(), "");
        assert_eq!(settings.theme(), "monokai");
        assert_eq!(settings.output_directory(), ".");
    }

    #[test]
    fn an_empty_file_yields_all_defaults() {
        let path = write_temp_settings("empty", "");
        let settings = Settings::load(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn a_missing_file_is_reported_as_not_found() {
        let path = env::temp_dir().join("galatea-settings-definitely-missing.toml");
        let err = Settings::load(&path).unwrap_err();
        match &err {
            SettingsError::NotFound { path: reported } => assert_eq!(reported, &path),
            other => panic!("expected NotFound, got: {other:?}"),
        }
        assert!(err.to_string().ends_with("not found."));
    }

    #[test]
    fn a_malformed_file_is_reported_as_a_format_error() {
        let path = write_temp_settings("malformed", "default = [not toml");
        let err = Settings::load(&path).unwrap_err();
        let _ = std::fs::remove_file(&path);

        match &err {
            SettingsError::Format { .. } => {}
            other => panic!("expected Format, got: {other:?}"),
        }
        assert!(err.to_string().ends_with("does not have the correct format."));
    }
}
