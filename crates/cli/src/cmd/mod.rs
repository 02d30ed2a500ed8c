pub mod check;
pub mod doctor;
pub mod output;
pub mod split;
pub mod stub;
pub mod toot;

use crate::logging;
use flurnamen_core::config::{ConfigLoader, ResolvedConfig, default_config_path};
use std::path::Path;

/// Resolve configuration for `command`.
///
/// Without `--config` and without a config file, runs on defaults rooted at
/// the current directory.
pub fn load_config(
    command: &str,
    config: Option<&Path>,
    profile: Option<&str>,
) -> ResolvedConfig {
    let cwd = std::env::current_dir().unwrap_or_else(|_| ".".into());
    match ConfigLoader::load_or_default(config, profile, &cwd) {
        Ok(rc) => rc,
        Err(e) => {
            println!("FAIL flur {command}");
            println!("{e}");
            if config.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    }
}

pub fn init_logging(command: &str, cfg: &ResolvedConfig) {
    if let Err(e) = logging::init(&cfg.logging) {
        let file = cfg.logging.file.as_deref().unwrap_or(Path::new("?"));
        println!("FAIL flur {command}");
        println!("failed to create log file {}: {e}", file.display());
        std::process::exit(1);
    }
}
