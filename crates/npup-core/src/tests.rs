use std::cmp::Ordering;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use super::*;

#[test]
fn compare_orders_components_numerically() {
    let ordering =
        compare_version_labels("10.0.0", "9.9.9").expect("labels should compare");
    assert_eq!(ordering, Ordering::Greater);

    let ordering =
        compare_version_labels("2.14.1", "2.9.20").expect("labels should compare");
    assert_eq!(ordering, Ordering::Greater);
}

#[test]
fn compare_treats_zero_padded_components_as_equal() {
    let ordering =
        compare_version_labels("3.8.05", "3.8.5").expect("labels should compare");
    assert_eq!(ordering, Ordering::Equal);
}

#[test]
fn compare_pads_missing_components_with_zero() {
    let ordering = compare_version_labels("3.8", "3.8.0").expect("labels should compare");
    assert_eq!(ordering, Ordering::Equal);

    let ordering = compare_version_labels("3.8", "3.8.1").expect("labels should compare");
    assert_eq!(ordering, Ordering::Less);
}

#[test]
fn compare_rejects_non_numeric_components() {
    let err = compare_version_labels("3.8.x", "3.8.5")
        .expect_err("a non-numeric component should not compare");
    assert!(
        err.to_string().contains("component 'x' is not numeric"),
        "unexpected error: {err}"
    );
}

#[test]
fn compare_rejects_empty_labels() {
    let err = compare_version_labels("", "1.0.0").expect_err("an empty label should not compare");
    assert!(
        err.to_string().contains("version label is empty"),
        "unexpected error: {err}"
    );

    let err =
        compare_version_labels("1..0", "1.0.0").expect_err("an empty component should not compare");
    assert!(
        err.to_string().contains("is not numeric"),
        "unexpected error: {err}"
    );
}

#[test]
fn compare_rejects_the_unknown_sentinel() {
    let err = compare_version_labels(UNKNOWN_VERSION, "1.0.0")
        .expect_err("the probe sentinel is not a version label");
    assert!(
        err.to_string().contains("is not numeric"),
        "unexpected error: {err}"
    );
}

#[test]
fn parse_components_splits_on_dots() {
    let components = parse_version_components("3.10.10").expect("label should parse");
    assert_eq!(components, vec![3, 10, 10]);
}

#[test]
fn descriptor_parse_extracts_the_version_field() {
    let body = r#"
        {
            "name": "npm",
            "version": "3.8.5",
            "description": "a package manager for JavaScript"
        }
    "#;

    let version = parse_version_descriptor(body).expect("descriptor should parse");
    assert_eq!(version, "3.8.5");
}

#[test]
fn descriptor_parse_rejects_a_missing_version_field() {
    let err = parse_version_descriptor(r#"{ "name": "npm" }"#)
        .expect_err("a descriptor without a version should not parse");
    assert!(
        err.to_string().contains("failed to parse npm version descriptor"),
        "unexpected error: {err}"
    );
}

#[test]
fn descriptor_parse_rejects_an_empty_version_field() {
    let err = parse_version_descriptor(r#"{ "version": "  " }"#)
        .expect_err("a blank version should not parse");
    assert!(
        err.to_string().contains("empty version field"),
        "unexpected error: {err}"
    );
}

#[test]
fn descriptor_parse_rejects_invalid_json() {
    let err = parse_version_descriptor("<html>not json</html>")
        .expect_err("markup should not parse as a descriptor");
    assert!(
        err.to_string().contains("failed to parse npm version descriptor"),
        "unexpected error: {err}"
    );
}

#[test]
fn archive_file_name_is_the_v_prefixed_zip() {
    assert_eq!(archive_file_name("3.8.5"), "v3.8.5.zip");
}

#[test]
fn mirror_urls_append_the_archive_name_to_the_base() {
    assert_eq!(
        Mirror::Github.archive_url("3.8.5"),
        "https://github.com/npm/npm/releases/v3.8.5.zip"
    );
    assert_eq!(
        Mirror::Taobao.archive_url("3.8.5"),
        "http://npm.taobao.org/mirrors/npm/v3.8.5.zip"
    );
}

#[test]
fn mirror_parse_accepts_known_tokens() {
    assert_eq!(Mirror::parse("github").expect("token should parse"), Mirror::Github);
    assert_eq!(Mirror::parse("TAOBAO").expect("token should parse"), Mirror::Taobao);
    assert_eq!(Mirror::parse(" taobao ").expect("token should parse"), Mirror::Taobao);
}

#[test]
fn mirror_parse_rejects_unknown_tokens() {
    let err = Mirror::parse("npmmirror").expect_err("an unknown mirror should not parse");
    assert!(
        err.to_string().contains("invalid mirror: npmmirror"),
        "unexpected error: {err}"
    );
}

#[test]
fn mirror_defaults_to_github() {
    assert_eq!(Mirror::default(), Mirror::Github);
    assert_eq!(Mirror::default().as_str(), "github");
}

#[test]
fn settings_parse_a_full_file() {
    let input = r#"
        root = "/opt/node"
        mirror = "taobao"
    "#;

    let settings = Settings::from_toml_str(input).expect("settings should parse");
    assert_eq!(settings.root.as_deref(), Some(Path::new("/opt/node")));
    assert_eq!(settings.mirror, Some(Mirror::Taobao));
}

#[test]
fn settings_parse_an_empty_file_as_defaults() {
    let settings = Settings::from_toml_str("").expect("empty settings should parse");
    assert_eq!(settings, Settings::default());
}

#[test]
fn settings_reject_an_unknown_mirror_token() {
    let err = Settings::from_toml_str("mirror = \"fastly\"\n")
        .expect_err("an unknown mirror should not parse");
    assert!(
        err.to_string().contains("failed to parse npup settings"),
        "unexpected error: {err}"
    );
}

#[test]
fn load_settings_defaults_when_the_file_is_missing() {
    let settings = load_settings(Path::new("/nonexistent-npup-root/npup.toml"))
        .expect("a missing settings file should load as defaults");
    assert_eq!(settings, Settings::default());
}

#[test]
fn install_root_resolution_prefers_the_flag_then_env_then_settings() {
    let settings = Settings {
        root: Some(PathBuf::from("/from-settings")),
        mirror: None,
    };
    let exe_dir = Path::new("/from-exe");

    let root = resolve_install_root_from(
        Some(Path::new("/from-flag")),
        Some(OsStr::new("/from-env")),
        &settings,
        exe_dir,
    );
    assert_eq!(root, PathBuf::from("/from-flag"));

    let root = resolve_install_root_from(None, Some(OsStr::new("/from-env")), &settings, exe_dir);
    assert_eq!(root, PathBuf::from("/from-env"));

    let root = resolve_install_root_from(None, None, &settings, exe_dir);
    assert_eq!(root, PathBuf::from("/from-settings"));

    let root = resolve_install_root_from(None, None, &Settings::default(), exe_dir);
    assert_eq!(root, PathBuf::from("/from-exe"));
}

#[test]
fn install_root_resolution_ignores_an_empty_env_value() {
    let root = resolve_install_root_from(
        None,
        Some(OsStr::new("")),
        &Settings::default(),
        Path::new("/from-exe"),
    );
    assert_eq!(root, PathBuf::from("/from-exe"));
}
