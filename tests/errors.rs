//! Failure reporting for misconfigured or broken generation requests.

mod common;

use cmdref::error::Error;
use cmdref::loader::StaticModules;
use cmdref::plugin::generate_docs;
use std::collections::BTreeMap;

#[test]
fn missing_required_key_echoes_the_block() {
    let mut config = BTreeMap::new();
    config.insert("module".to_string(), "pkg.cli".to_string());
    let err = generate_docs(&common::file_modules(), &config).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("option 'command' is required"), "{message}");
    assert!(message.contains("pkg.cli"), "{message}");
}

#[test]
fn unknown_module_names_the_manifest_path() {
    let err = generate_docs(
        &common::file_modules(),
        &common::request("pkg.ghost", "main", &[]),
    )
    .unwrap_err();
    let message = err.to_string();
    assert!(
        message.contains("failed to import 'main' from 'pkg.ghost'"),
        "{message}"
    );
    assert!(message.contains("read module manifest"), "{message}");
    assert!(message.contains("pkg.ghost.json"), "{message}");
}

#[test]
fn malformed_manifest_is_an_import_failure() {
    let err = generate_docs(
        &common::file_modules(),
        &common::request("pkg.broken", "main", &[]),
    )
    .unwrap_err();
    match &err {
        Error::ImportFailed { module, .. } => assert_eq!(module, "pkg.broken"),
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().contains("parse module manifest"), "{err}");
}

#[test]
fn missing_attribute_is_reported_as_such() {
    let err = generate_docs(
        &common::file_modules(),
        &common::request("pkg.cli", "nope", &[]),
    )
    .unwrap_err();
    assert_eq!(err.to_string(), "module 'pkg.cli' has no attribute 'nope'");
}

#[test]
fn non_command_export_names_the_found_type() {
    let err = generate_docs(
        &common::file_modules(),
        &common::request("pkg.cli", "version", &[]),
    )
    .unwrap_err();
    match &err {
        Error::NotACommand { found, .. } => assert!(found.contains("String"), "{found}"),
        other => panic!("unexpected error: {other}"),
    }
    assert!(
        err.to_string().starts_with("'pkg.cli:version' of type"),
        "{err}"
    );
}

#[test]
fn invalid_depth_value_names_the_key() {
    let err = generate_docs(
        &common::file_modules(),
        &common::request("pkg.cli", "main", &[("depth", "minus one")]),
    )
    .unwrap_err();
    match err {
        Error::InvalidKey { key, value, .. } => {
            assert_eq!(key, "depth");
            assert_eq!(value, "minus one");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn loader_panic_is_reported_as_aborted_import() {
    let mut modules = StaticModules::new();
    modules.register("pkg.cli", || panic!("install aborted"));
    let err = generate_docs(&modules, &common::request("pkg.cli", "main", &[])).unwrap_err();
    match &err {
        Error::ImportAborted { panic, .. } => assert!(panic.contains("install aborted"), "{panic}"),
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().contains("module aborted during load"), "{err}");
}
