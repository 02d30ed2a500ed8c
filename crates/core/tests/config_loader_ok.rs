use flurnamen_core::config::loader::ConfigLoader;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

fn write_file(path: &PathBuf, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn load_default_profile_ok() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("config.toml");
    let toml = r#"
version = 1
profile = "default"

[profiles.default]
site_root = "/tmp/blog"
posts_dir = "{{site_root}}/docs/_posts"
default_url = "https://map.geo.admin.ch"
language = "de-CH"

[toot]
max_chars = 300
alt_text = "Karte von {title}"

[spellcheck]
replacements = [["Strasse", "Gasse"]]
"#;

    write_file(&cfg_path, toml);

    let rc = ConfigLoader::load(Some(&cfg_path), None).expect("should load");
    assert_eq!(rc.active_profile, "default");
    assert_eq!(rc.site_root.display().to_string(), "/tmp/blog");
    assert!(rc.posts_dir.ends_with("docs/_posts"));
    assert_eq!(rc.default_url, "https://map.geo.admin.ch");
    assert_eq!(rc.language, "de-CH");
    assert_eq!(rc.toot.max_chars, 300);
    assert_eq!(rc.toot.alt_text, "Karte von {title}");
    assert_eq!(rc.spellcheck.replacements, vec![("Strasse".to_string(), "Gasse".to_string())]);
}

#[test]
fn optional_fields_fall_back_to_defaults() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("config.toml");
    write_file(
        &cfg_path,
        r#"
version = 1
[profiles.default]
site_root = "/tmp/blog"
"#,
    );

    let rc = ConfigLoader::load(Some(&cfg_path), None).expect("should load");
    assert_eq!(rc.posts_dir.display().to_string(), "/tmp/blog/docs/_posts");
    assert_eq!(rc.default_url, "https://draeckgaden.ch");
    assert_eq!(rc.language, "de-CH");
    assert_eq!(rc.toot.max_chars, 500);
    assert!(rc.toot.alt_text.contains("{title}"));
    assert!(rc.spellcheck.replacements.is_empty());
    assert_eq!(rc.logging.level, "info");
}

#[test]
fn load_with_profile_override_ok() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("flurnamen/config.toml");
    let toml = r#"
version = 1
profile = "default"

[profiles.default]
site_root = "/tmp/def"

[profiles.draft]
site_root = "/tmp/draft"
posts_dir = "{{site_root}}/_drafts"
"#;
    write_file(&cfg_path, toml);

    let rc = ConfigLoader::load(Some(&cfg_path), Some("draft")).expect("should load");
    assert_eq!(rc.active_profile, "draft");
    assert_eq!(rc.posts_dir.display().to_string(), "/tmp/draft/_drafts");
}

#[test]
fn log_file_path_is_substituted() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("config.toml");
    write_file(
        &cfg_path,
        r#"
version = 1
[profiles.default]
site_root = "/tmp/blog"

[logging]
level = "debug"
file = "{{site_root}}/flur.log"
"#,
    );

    let rc = ConfigLoader::load(Some(&cfg_path), None).unwrap();
    assert_eq!(rc.logging.level, "debug");
    assert_eq!(rc.logging.file.unwrap().display().to_string(), "/tmp/blog/flur.log");
}

#[test]
fn defaults_are_rooted_at_site() {
    let tmp = tempdir().unwrap();
    let rc = ConfigLoader::defaults(tmp.path()).unwrap();
    assert_eq!(rc.active_profile, "default");
    assert_eq!(rc.posts_dir, tmp.path().join("docs/_posts"));
}

#[test]
fn explicit_path_is_never_replaced_by_defaults() {
    let tmp = tempdir().unwrap();
    let missing = tmp.path().join("nope.toml");
    assert!(ConfigLoader::load_or_default(Some(&missing), None, tmp.path()).is_err());
}
