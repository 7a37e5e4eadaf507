//! Configuration handling for the forms

use crate::error::{FormsError, Result};
use crate::state::{FormSpec, ADD_BOOK_FORM_ID, SEARCH_FORM_ID};
use crate::submit::DEFAULT_BASE_URL;
use crate::validation::{book_rules, search_rules};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "LIBRARY_FORMS_CONFIG";

/// User configuration: form layouts, validation rules and UI timing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormsConfig {
    /// Origin the form actions are resolved against
    pub base_url: String,
    /// Milliseconds between spinner frames
    pub spinner_interval_ms: u64,
    /// How long the loading state stays on screen before the result page
    pub navigation_delay_ms: u64,
    pub search_form: FormSpec,
    pub add_book_form: FormSpec,
}

impl Default for FormsConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            spinner_interval_ms: 80,
            navigation_delay_ms: 600,
            search_form: FormSpec::search(),
            add_book_form: FormSpec::add_book(),
        }
    }
}

impl FormsConfig {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        ProjectDirs::from("se", "fulkoping", "library-forms")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`, falling back to defaults if it doesn't exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| FormsError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: FormsConfig =
            serde_json::from_str(&content).map_err(|source| FormsError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;
        config.check_ids()?;
        config.fill_default_rules();
        Ok(config)
    }

    /// Save configuration to `path`
    #[allow(dead_code)]
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let write_err = |source| FormsError::ConfigWrite {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        let content = serde_json::to_string_pretty(self).map_err(|source| {
            FormsError::ConfigSerialize {
                path: path.to_path_buf(),
                source,
            }
        })?;
        fs::write(path, content).map_err(write_err)
    }

    /// A form without rules would accept anything, so it gets the built-in
    /// rule set for its id
    fn fill_default_rules(&mut self) {
        if self.search_form.rules.is_empty() {
            warn!(form = SEARCH_FORM_ID, "no rules configured, using built-in rules");
            self.search_form.rules = search_rules();
        }
        if self.add_book_form.rules.is_empty() {
            warn!(form = ADD_BOOK_FORM_ID, "no rules configured, using built-in rules");
            self.add_book_form.rules = book_rules();
        }
    }

    /// The submit bindings are keyed on the form ids
    fn check_ids(&self) -> Result<()> {
        if self.search_form.id != SEARCH_FORM_ID {
            return Err(FormsError::MissingForm(SEARCH_FORM_ID.to_string()));
        }
        if self.add_book_form.id != ADD_BOOK_FORM_ID {
            return Err(FormsError::MissingForm(ADD_BOOK_FORM_ID.to_string()));
        }
        Ok(())
    }
}
