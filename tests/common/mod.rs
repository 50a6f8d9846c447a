//! Shared fixture plumbing for integration tests.

use cmdref::manifest::FileModules;
use std::collections::BTreeMap;
use std::env;
use std::path::PathBuf;

fn manifest_dir() -> PathBuf {
    PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".into()))
}

/// Loader over the checked-in `<module>.json` fixtures.
pub fn file_modules() -> FileModules {
    FileModules::new(manifest_dir().join("tests/fixtures/modules"))
}

/// Build a generation request block from key-value pairs.
pub fn request(module: &str, command: &str, extras: &[(&str, &str)]) -> BTreeMap<String, String> {
    let mut config = BTreeMap::new();
    config.insert("module".to_string(), module.to_string());
    config.insert("command".to_string(), command.to_string());
    for (key, value) in extras {
        config.insert((*key).to_string(), (*value).to_string());
    }
    config
}
