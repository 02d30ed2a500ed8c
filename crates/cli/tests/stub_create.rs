use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn stub_uses_default_posts_folder() {
    let tmp = tempdir().unwrap();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("flur"));
    cmd.env("XDG_CONFIG_HOME", tmp.path())
        .current_dir(tmp.path())
        .args(["stub", "--flurname", "Rüti", "--date", "2024-03-01"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Stub created at"))
        .stdout(predicate::str::contains("2024-03-01-Rüti.md"));

    let written =
        fs::read_to_string(tmp.path().join("docs/_posts/2024-03-01-Rüti.md")).unwrap();
    assert!(written.starts_with("---\ntitle: \"Rüti\"\n"));
    assert!(written.contains("thumbnail: images/rüti.png"));
    assert!(written.contains("Lorem Ipsum [Rüti](https://draeckgaden.ch)."));
}

#[test]
fn stub_uses_profile_folder_and_url() {
    let tmp = tempdir().unwrap();
    let site = tmp.path().join("site");
    let cfg = tmp.path().join("config.toml");
    fs::write(
        &cfg,
        format!(
            r#"
version = 1
[profiles.default]
site_root = "{}"
posts_dir = "{{{{site_root}}}}/_posts"
default_url = "https://map.geo.admin.ch"
"#,
            site.display()
        ),
    )
    .unwrap();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("flur"));
    cmd.args([
        "--config",
        cfg.to_str().unwrap(),
        "stub",
        "--flurname",
        "Hasle",
        "--date",
        "2024-03-01",
    ]);
    cmd.assert().success();

    let written = fs::read_to_string(site.join("_posts/2024-03-01-Hasle.md")).unwrap();
    assert!(written.contains("[Hasle](https://map.geo.admin.ch)"));
}

#[test]
fn stub_does_not_clobber_existing_post() {
    let tmp = tempdir().unwrap();
    let args = ["stub", "--flurname", "Au", "--date", "2024-03-01", "--url", "http://x"];

    let run = || {
        let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("flur"));
        cmd.env("XDG_CONFIG_HOME", tmp.path()).current_dir(tmp.path()).args(args);
        cmd
    };

    run().assert().success();
    run()
        .assert()
        .failure()
        .stdout(predicate::str::contains("FAIL flur stub"))
        .stdout(predicate::str::contains("already exists"));
    run().arg("--force").assert().success();
}

#[test]
fn stub_rejects_flurname_with_path() {
    let tmp = tempdir().unwrap();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("flur"));
    cmd.env("XDG_CONFIG_HOME", tmp.path())
        .current_dir(tmp.path())
        .args(["stub", "--flurname", "../Au", "--date", "2024-03-01"]);
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("FAIL flur stub"))
        .stdout(predicate::str::contains("path separators"));

    assert!(!tmp.path().join("docs/2024-03-01-Au.md").exists());
}
