//! Host-facing generation requests.
//!
//! A documentation host hands over one flat string-to-string block per
//! fragment. The block is parsed before any module is loaded, so
//! configuration mistakes never trigger import side effects.
use crate::error::{Error, Result};
use crate::loader::{resolve_command, ModuleLoader};
use crate::render::{render_tree, RenderSettings};
use std::collections::BTreeMap;

const REQUIRED_KEYS: [&str; 2] = ["module", "command"];
const KNOWN_KEYS: [&str; 5] = ["module", "command", "depth", "style", "show_hidden"];

/// Parsed form of a host configuration block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockConfig {
    /// Module key handed to the loader.
    pub module: String,
    /// Name of the command export inside the module.
    pub command: String,
    pub settings: RenderSettings,
}

impl BlockConfig {
    /// Parse a raw configuration mapping.
    ///
    /// `module` and `command` are required; `depth`, `style`, and
    /// `show_hidden` are optional. Unrecognized keys are ignored with a
    /// warning.
    pub fn from_map(config: &BTreeMap<String, String>) -> Result<Self> {
        for key in REQUIRED_KEYS {
            if !config.contains_key(key) {
                return Err(Error::MissingKey {
                    key,
                    config: config.clone(),
                });
            }
        }
        for key in config.keys() {
            if !KNOWN_KEYS.contains(&key.as_str()) {
                tracing::warn!(key = key.as_str(), "ignoring unrecognized configuration key");
            }
        }
        let mut settings = RenderSettings::default();
        if let Some(depth) = config.get("depth") {
            settings.depth = depth.parse().map_err(|err| Error::InvalidKey {
                key: "depth",
                value: depth.clone(),
                reason: format!("{err}"),
            })?;
        }
        if let Some(style) = config.get("style") {
            settings.style = style.parse().map_err(|reason| Error::InvalidKey {
                key: "style",
                value: style.clone(),
                reason,
            })?;
        }
        if let Some(show_hidden) = config.get("show_hidden") {
            settings.show_hidden = show_hidden.parse().map_err(|err| Error::InvalidKey {
                key: "show_hidden",
                value: show_hidden.clone(),
                reason: format!("{err}"),
            })?;
        }
        Ok(Self {
            module: config["module"].clone(),
            command: config["command"].clone(),
            settings,
        })
    }
}

/// Generate the markdown fragment described by a configuration block.
///
/// One resolution attempt is made per request; any failure surfaces to the
/// caller, which decides whether the surrounding documentation build goes
/// on.
pub fn generate_docs(
    loader: &dyn ModuleLoader,
    config: &BTreeMap<String, String>,
) -> Result<Vec<String>> {
    let block = BlockConfig::from_map(config)?;
    let command = resolve_command(loader, &block.module, &block.command)?;
    let lines = render_tree(&command, &block.settings);
    tracing::debug!(
        module = block.module.as_str(),
        command = block.command.as_str(),
        lines = lines.len(),
        "rendered fragment"
    );
    Ok(lines)
}
