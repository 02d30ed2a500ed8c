use super::init_logging;
use flurnamen_core::config::{ConfigLoader, default_config_path};
use std::path::Path;
use tracing::debug;

pub fn run(config: Option<&Path>, profile: Option<&str>) {
    match ConfigLoader::load(config, profile) {
        Ok(rc) => {
            init_logging("doctor", &rc);
            debug!(profile = %rc.active_profile, "config resolved");
            println!("OK   flur doctor");
            println!(
                "path: {}",
                config.map_or_else(
                    || default_config_path().display().to_string(),
                    |p| p.display().to_string()
                )
            );
            println!("profile: {}", rc.active_profile);
            println!("site_root: {}", rc.site_root.display());
            println!("posts_dir: {}", rc.posts_dir.display());
            println!("default_url: {}", rc.default_url);
            println!("language: {}", rc.language);
            println!("toot.max_chars: {}", rc.toot.max_chars);
            println!("spellcheck.replacements: {}", rc.spellcheck.replacements.len());
        }
        Err(e) => {
            println!("FAIL flur doctor");
            println!("{e}");
            if config.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    }
}
