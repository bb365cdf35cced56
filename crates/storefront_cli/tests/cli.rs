use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use pretty_assertions::assert_eq;

fn resource_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../resource")
}

/// Write a config pointing at the repository's catalog and messages.
fn write_config(dir: &Path, prefix: &str) -> PathBuf {
    let res = resource_dir();
    let path = dir.join("storefront.toml");
    fs::write(
        &path,
        format!(
            "[i18n]\ncatalog = {:?}\nmessages_dir = {:?}\nlocale_prefix = {:?}\n",
            res.join("locales/catalog.yaml"),
            res.join("messages"),
            prefix
        ),
    )
    .unwrap();
    path
}

fn storefront(config: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_storefront"))
        .arg("--config")
        .arg(config)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

#[test]
fn switch_prints_new_href() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), "as-needed");

    let out = storefront(&config, &["switch", "--region", "CA", "--language", "Français"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out).trim(), "/fr-CA");

    // Back to the default locale: no prefix.
    let out = storefront(&config, &["--locale", "de", "switch", "--region", "US"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out).trim(), "/");
}

#[test]
fn switch_without_match_fails_quietly() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), "always");

    let out = storefront(&config, &["switch", "--region", "US", "--language", "Deutsch"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(stdout(&out).is_empty());
}

#[test]
fn show_renders_translated_popover() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), "always");

    let out = storefront(&config, &["--locale", "de", "show", "--open"]);
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.starts_with("[🇩🇪]\n"), "{text}");
    assert!(text.contains("Wählen Sie Ihr Land und Ihre Sprache"), "{text}");
    assert!(text.contains("> 🇩🇪 DE"), "{text}");
    assert!(text.contains("[ Zur Website ]"), "{text}");

    let out = storefront(&config, &["--locale", "de", "show"]);
    assert_eq!(stdout(&out), "[🇩🇪]\n");
}

#[test]
fn regions_json_lists_languages() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), "always");

    let out = storefront(&config, &["--json", "regions"]);
    assert!(out.status.success());
    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(
        json["CH"]["languages"],
        serde_json::json!(["Deutsch", "Français", "Italiano"])
    );
    assert_eq!(json["US"]["flag"], "🇺🇸");
}

#[test]
fn check_passes_for_shipped_resources() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), "always");

    let out = storefront(&config, &["check"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert!(stdout(&out).contains("0 ambiguous pairs, 0 missing messages"));
}

#[test]
fn unknown_start_locale_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), "always");

    let out = storefront(&config, &["--locale", "xx", "show"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("xx"));
}
