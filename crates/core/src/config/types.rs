use std::collections::HashMap;
use std::path::PathBuf;

use serde::Deserialize;

use crate::stub::DEFAULT_URL;
use crate::toot::{DEFAULT_ALT_TEXT, DEFAULT_MAX_CHARS};

#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    pub version: u32,
    pub profile: Option<String>,
    pub profiles: HashMap<String, Profile>,
    #[serde(default)]
    pub toot: TootConfig,
    #[serde(default)]
    pub spellcheck: SpellcheckConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
pub struct Profile {
    pub site_root: String,
    #[serde(default = "default_posts_dir")]
    pub posts_dir: String,
    /// Link target used by stubs when none is given.
    #[serde(default = "default_url")]
    pub default_url: String,
    /// Language profile for the spell checker, e.g. `de-CH`.
    #[serde(default = "default_language")]
    pub language: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TootConfig {
    #[serde(default = "default_max_chars")]
    pub max_chars: usize,
    #[serde(default = "default_alt_text")]
    pub alt_text: String,
}

impl Default for TootConfig {
    fn default() -> Self {
        Self { max_chars: default_max_chars(), alt_text: default_alt_text() }
    }
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct SpellcheckConfig {
    /// Extra `[from, to]` substitutions on top of the language rules.
    #[serde(default)]
    pub replacements: Vec<(String, String)>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file_level: Option<String>,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), file_level: None, file: None }
    }
}

pub(crate) fn default_posts_dir() -> String {
    "{{site_root}}/docs/_posts".to_string()
}

pub(crate) fn default_url() -> String {
    DEFAULT_URL.to_string()
}

pub(crate) fn default_language() -> String {
    "de-CH".to_string()
}

fn default_max_chars() -> usize {
    DEFAULT_MAX_CHARS
}

fn default_alt_text() -> String {
    DEFAULT_ALT_TEXT.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub active_profile: String,
    pub site_root: PathBuf,
    pub posts_dir: PathBuf,
    pub default_url: String,
    pub language: String,
    pub toot: TootConfig,
    pub spellcheck: SpellcheckConfig,
    pub logging: LoggingConfig,
}
