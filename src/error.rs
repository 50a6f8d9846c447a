//! Failure taxonomy for generation requests.
//!
//! Every variant carries enough context to locate the misconfiguration
//! without reading this crate's source: the offending key, the module and
//! attribute that were requested, or the type that was actually found.
//! Failures are never retried; the caller decides whether the surrounding
//! documentation build continues.
use std::collections::BTreeMap;
use thiserror::Error;

/// Ways a single generation request can fail.
#[derive(Debug, Error)]
pub enum Error {
    /// A required configuration key was absent from the request block.
    #[error("option '{key}' is required; provided configuration was {config:?}")]
    MissingKey {
        key: &'static str,
        config: BTreeMap<String, String>,
    },

    /// A configuration key was present but its value did not parse.
    #[error("option '{key}' has invalid value '{value}': {reason}")]
    InvalidKey {
        key: &'static str,
        value: String,
        reason: String,
    },

    /// The module loader reported a failure while loading the module.
    #[error("failed to import '{command}' from '{module}': {cause:#}")]
    ImportFailed {
        module: String,
        command: String,
        cause: anyhow::Error,
    },

    /// The module loader panicked while loading the module. Kept separate
    /// from [`Error::ImportFailed`] so callers can tell a module that
    /// reports an error apart from one that aborts outright.
    #[error("failed to import '{command}' from '{module}': module aborted during load: {panic}")]
    ImportAborted {
        module: String,
        command: String,
        panic: String,
    },

    /// The module loaded but exports nothing under the requested name.
    #[error("module '{module}' has no attribute '{attr}'")]
    MissingAttribute { module: String, attr: String },

    /// The requested export exists but is not a command.
    #[error("'{module}:{attr}' of type '{found}' is not a command")]
    NotACommand {
        module: String,
        attr: String,
        found: &'static str,
    },
}

/// Result alias used across the generation pipeline.
pub type Result<T> = std::result::Result<T, Error>;
