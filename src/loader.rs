//! Module loading seam between the host program and the generator.
//!
//! The host supplies command objects through a [`ModuleLoader`]; the
//! generator never discovers anything on its own. Loading a module may run
//! arbitrary host code, so the resolver distinguishes a loader that reports
//! an error from one that aborts outright.
use crate::command::Command;
use crate::error::{Error, Result};
use std::any::Any;
use std::collections::BTreeMap;
use std::panic::{catch_unwind, AssertUnwindSafe};

/// Named values exported by a loaded module.
///
/// Exports are type-erased; the concrete type name is recorded at insertion
/// so a mismatch can report what was actually found.
#[derive(Default)]
pub struct ModuleExports {
    entries: BTreeMap<String, Export>,
}

struct Export {
    value: Box<dyn Any>,
    type_name: &'static str,
}

impl ModuleExports {
    pub fn new() -> Self {
        Self::default()
    }

    /// Export `value` under `name`, replacing any previous export.
    pub fn insert<T: Any>(&mut self, name: impl Into<String>, value: T) {
        self.entries.insert(
            name.into(),
            Export {
                value: Box::new(value),
                type_name: std::any::type_name::<T>(),
            },
        );
    }
}

/// Host-supplied capability that maps a module key to its exports.
///
/// Implementations decide what a module key means: a manifest file, an
/// in-process registry, or anything else the host documents commands with.
pub trait ModuleLoader {
    /// Load the module behind `module`, running whatever host code that
    /// takes. Failures are reported with their full cause chain.
    fn load(&self, module: &str) -> anyhow::Result<ModuleExports>;
}

type ModuleInit = Box<dyn Fn() -> anyhow::Result<ModuleExports>>;

/// In-process module registry backed by initializer closures.
///
/// Each load runs the registered initializer again; nothing is cached
/// between generation requests.
#[derive(Default)]
pub struct StaticModules {
    modules: BTreeMap<String, ModuleInit>,
}

impl StaticModules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the initializer that produces `module`'s exports.
    pub fn register(
        &mut self,
        module: impl Into<String>,
        init: impl Fn() -> anyhow::Result<ModuleExports> + 'static,
    ) {
        self.modules.insert(module.into(), Box::new(init));
    }

    /// Register a module exporting a single command under `attr`.
    pub fn register_command(
        &mut self,
        module: impl Into<String>,
        attr: impl Into<String>,
        command: Command,
    ) {
        let attr = attr.into();
        self.register(module, move || {
            let mut exports = ModuleExports::new();
            exports.insert(attr.clone(), command.clone());
            Ok(exports)
        });
    }
}

impl ModuleLoader for StaticModules {
    fn load(&self, module: &str) -> anyhow::Result<ModuleExports> {
        let init = self
            .modules
            .get(module)
            .ok_or_else(|| anyhow::anyhow!("module '{module}' is not registered"))?;
        init()
    }
}

/// Locate `command` in `module` through the host's loader.
///
/// Failures map to the four resolver errors: the loader reporting an error
/// ([`Error::ImportFailed`]), the loader panicking ([`Error::ImportAborted`]),
/// a missing export ([`Error::MissingAttribute`]), and an export of the
/// wrong type ([`Error::NotACommand`]).
pub fn resolve_command(loader: &dyn ModuleLoader, module: &str, command: &str) -> Result<Command> {
    tracing::info!(module, command, "loading command module");
    let exports = match catch_unwind(AssertUnwindSafe(|| loader.load(module))) {
        Ok(Ok(exports)) => exports,
        Ok(Err(cause)) => {
            return Err(Error::ImportFailed {
                module: module.to_string(),
                command: command.to_string(),
                cause,
            })
        }
        Err(payload) => {
            return Err(Error::ImportAborted {
                module: module.to_string(),
                command: command.to_string(),
                panic: panic_text(payload.as_ref()),
            })
        }
    };
    let export = exports
        .entries
        .get(command)
        .ok_or_else(|| Error::MissingAttribute {
            module: module.to_string(),
            attr: command.to_string(),
        })?;
    export
        .value
        .downcast_ref::<Command>()
        .cloned()
        .ok_or_else(|| Error::NotACommand {
            module: module.to_string(),
            attr: command.to_string(),
            found: export.type_name,
        })
}

fn panic_text(payload: &(dyn Any + Send)) -> String {
    if let Some(text) = payload.downcast_ref::<&str>() {
        (*text).to_string()
    } else if let Some(text) = payload.downcast_ref::<String>() {
        text.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
