use crate::config::types::{
    ConfigFile, LoggingConfig, Profile, ResolvedConfig, SpellcheckConfig, TootConfig,
    default_language, default_posts_dir, default_url,
};
use shellexpand::full;
use std::path::{Path, PathBuf};
use std::{env, fs};

use dirs::home_dir;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found at {0}")]
    NotFound(String),

    #[error("failed to read config file {0}: {1}")]
    ReadError(String, #[source] std::io::Error),

    #[error("failed to parse TOML in {0}: {1}")]
    ParseError(String, #[source] toml::de::Error),

    #[error("profile '{0}' not found")]
    ProfileNotFound(String),

    #[error("no profiles defined in config")]
    NoProfiles,

    #[error("version {0} is unsupported (expected 1)")]
    BadVersion(u32),

    #[error("home directory not available to expand '~'")]
    NoHome,
}

pub struct ConfigLoader;

impl ConfigLoader {
    pub fn load(
        config_path: Option<&Path>,
        profile_override: Option<&str>,
    ) -> Result<ResolvedConfig, ConfigError> {
        let path = match config_path {
            Some(p) => p.to_path_buf(),
            None => default_config_path(),
        };

        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }

        let s = fs::read_to_string(&path)
            .map_err(|e| ConfigError::ReadError(path.display().to_string(), e))?;

        let cf: ConfigFile = toml::from_str(&s)
            .map_err(|e| ConfigError::ParseError(path.display().to_string(), e))?;

        if cf.version != 1 {
            return Err(ConfigError::BadVersion(cf.version));
        }
        if cf.profiles.is_empty() {
            return Err(ConfigError::NoProfiles);
        }

        let active = profile_override
            .map(ToOwned::to_owned)
            .or(cf.profile.clone())
            .unwrap_or_else(|| "default".to_string());

        let prof = cf
            .profiles
            .get(&active)
            .ok_or_else(|| ConfigError::ProfileNotFound(active.clone()))?;

        Self::resolve_profile(&active, prof, &cf.toot, &cf.spellcheck, &cf.logging)
    }

    /// Like [`ConfigLoader::load`], but without an explicit path and without a
    /// default config file, fall back to built-in defaults rooted at `site_root`.
    pub fn load_or_default(
        config_path: Option<&Path>,
        profile_override: Option<&str>,
        site_root: &Path,
    ) -> Result<ResolvedConfig, ConfigError> {
        if config_path.is_none() && !default_config_path().exists() {
            debug!("no config file, using defaults");
            return Self::defaults(site_root);
        }
        Self::load(config_path, profile_override)
    }

    /// Built-in configuration for a site checked out at `site_root`.
    pub fn defaults(site_root: &Path) -> Result<ResolvedConfig, ConfigError> {
        let prof = Profile {
            site_root: site_root.to_string_lossy().into_owned(),
            posts_dir: default_posts_dir(),
            default_url: default_url(),
            language: default_language(),
        };
        Self::resolve_profile(
            "default",
            &prof,
            &TootConfig::default(),
            &SpellcheckConfig::default(),
            &LoggingConfig::default(),
        )
    }

    fn resolve_profile(
        active: &str,
        prof: &Profile,
        toot: &TootConfig,
        spellcheck: &SpellcheckConfig,
        log_cfg: &LoggingConfig,
    ) -> Result<ResolvedConfig, ConfigError> {
        let site_root = expand_path(&prof.site_root)?;
        let sub = |s: &str| s.replace("{{site_root}}", &site_root.to_string_lossy());

        let posts_dir = expand_path(&sub(&prof.posts_dir))?;

        // Resolve log file path if present
        let logging = if let Some(ref file) = log_cfg.file {
            let expanded_file = expand_path(&sub(&file.to_string_lossy()))?;
            LoggingConfig {
                level: log_cfg.level.clone(),
                file_level: log_cfg.file_level.clone(),
                file: Some(expanded_file),
            }
        } else {
            log_cfg.clone()
        };

        Ok(ResolvedConfig {
            active_profile: active.to_string(),
            site_root,
            posts_dir,
            default_url: prof.default_url.clone(),
            language: prof.language.clone(),
            toot: toot.clone(),
            spellcheck: spellcheck.clone(),
            logging,
        })
    }
}

pub fn default_config_path() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        return Path::new(&xdg).join("flurnamen").join("config.toml");
    }
    let home = home_dir().unwrap_or_else(|| PathBuf::from("~"));
    home.join(".config").join("flurnamen").join("config.toml")
}

fn expand_path(input: &str) -> Result<PathBuf, ConfigError> {
    let expanded = full(input).map_err(|_| ConfigError::NoHome)?;
    Ok(PathBuf::from(expanded.to_string()))
}
