//! JSON command-tree manifests and the file-backed module loader.
//!
//! Manifests let a host declare the documented tree as data instead of
//! code: one `<module>.json` file per module, holding the root command and
//! optional extra exports.
use crate::command::{ArgSpec, Command, OptionSpec, Subcommands};
use crate::loader::{ModuleExports, ModuleLoader};
use anyhow::{bail, Context, Result};
use regex::Regex;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::sync::OnceLock;

fn default_true() -> bool {
    true
}

/// One module definition: the root command plus optional exports.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModuleManifest {
    pub command: CommandManifest,
    #[serde(default)]
    pub version: Option<String>,
}

/// Declarative form of a command node.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CommandManifest {
    pub name: String,
    #[serde(default)]
    pub help: Option<String>,
    #[serde(default)]
    pub short_help: Option<String>,
    #[serde(default)]
    pub options: Vec<OptionManifest>,
    #[serde(default)]
    pub args: Vec<ArgManifest>,
    #[serde(default)]
    pub subcommands: Vec<CommandManifest>,
    /// Marks a dispatching command even when no subcommands are listed yet.
    #[serde(default)]
    pub group: bool,
    #[serde(default = "default_true")]
    pub help_flag: bool,
    #[serde(default)]
    pub hidden: bool,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OptionManifest {
    pub flags: Vec<String>,
    #[serde(default)]
    pub metavar: Option<String>,
    #[serde(default)]
    pub help: Option<String>,
    #[serde(default)]
    pub default: Option<String>,
    #[serde(default)]
    pub hidden: bool,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArgManifest {
    pub metavar: String,
    #[serde(default = "default_true")]
    pub required: bool,
    #[serde(default)]
    pub variadic: bool,
}

impl CommandManifest {
    /// Build the command tree this manifest declares. Unusual flag
    /// spellings are reported but never rejected.
    pub fn into_command(self) -> Command {
        lint_option_flags(&self.name, &self.options);
        let subcommands = if self.subcommands.is_empty() && !self.group {
            Subcommands::None
        } else {
            let mut children = BTreeMap::new();
            for sub in self.subcommands {
                let child = sub.into_command();
                children.insert(child.name.clone(), child);
            }
            Subcommands::Eager(children)
        };
        Command {
            name: self.name,
            help: self.help,
            short_help: self.short_help,
            options: self.options.into_iter().map(OptionManifest::into_option).collect(),
            args: self.args.into_iter().map(ArgManifest::into_arg).collect(),
            subcommands,
            help_flag: self.help_flag,
            hidden: self.hidden,
        }
    }
}

impl OptionManifest {
    fn into_option(self) -> OptionSpec {
        OptionSpec {
            flags: self.flags,
            metavar: self.metavar,
            help: self.help,
            default: self.default,
            hidden: self.hidden,
        }
    }
}

impl ArgManifest {
    fn into_arg(self) -> ArgSpec {
        ArgSpec {
            metavar: self.metavar,
            required: self.required,
            variadic: self.variadic,
        }
    }
}

fn flag_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^-{1,2}[A-Za-z0-9][A-Za-z0-9-]*$").expect("flag pattern"))
}

fn lint_option_flags(command: &str, options: &[OptionManifest]) {
    for option in options {
        if option.flags.is_empty() {
            tracing::warn!(command, "option declares no flags");
            continue;
        }
        for flag in &option.flags {
            if !flag_pattern().is_match(flag) {
                tracing::warn!(command, flag = flag.as_str(), "unusual flag spelling");
            }
        }
    }
}

/// Module loader that reads `<root>/<module>.json` manifests.
///
/// The root command is exported under its own name; a `version` string is
/// exported under `version` when present.
pub struct FileModules {
    root: PathBuf,
}

impl FileModules {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn manifest_path(&self, module: &str) -> PathBuf {
        self.root.join(format!("{module}.json"))
    }
}

impl ModuleLoader for FileModules {
    fn load(&self, module: &str) -> Result<ModuleExports> {
        if module.contains('/') || module.contains('\\') || module.contains("..") {
            bail!("module key '{module}' must not contain path separators");
        }
        let path = self.manifest_path(module);
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("read module manifest {}", path.display()))?;
        let manifest: ModuleManifest = serde_json::from_str(&raw)
            .with_context(|| format!("parse module manifest {}", path.display()))?;
        let mut exports = ModuleExports::new();
        if let Some(version) = manifest.version {
            exports.insert("version", version);
        }
        let command = manifest.command.into_command();
        tracing::debug!(module, command = command.name.as_str(), "loaded module manifest");
        exports.insert(command.name.clone(), command);
        Ok(exports)
    }
}
