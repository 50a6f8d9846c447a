//! Markdown reference generation for command-line trees.
//!
//! The crate walks a command tree (leaf commands, eagerly registered
//! groups, lazily resolved registries) and renders each node as a markdown
//! fragment: title, description, usage, options. Fragments concatenate
//! depth-first with siblings in name order, so the same tree always yields
//! the same document.
//!
//! Hosts supply commands through a [`loader::ModuleLoader`] (in-process
//! registries via [`loader::StaticModules`], JSON manifests via
//! [`manifest::FileModules`]) and invoke [`plugin::generate_docs`] with one
//! configuration block per fragment.

pub mod command;
pub mod error;
pub mod loader;
pub mod manifest;
pub mod plugin;
pub mod render;

pub use command::{ArgSpec, Command, LazySubcommands, OptionSpec, Subcommands};
pub use error::{Error, Result};
pub use loader::{resolve_command, ModuleExports, ModuleLoader, StaticModules};
pub use plugin::{generate_docs, BlockConfig};
pub use render::{render_tree, RenderSettings, Style};
