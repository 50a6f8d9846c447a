//! CLI argument parsing for the reference generator.
//!
//! The CLI is intentionally thin: it wires a module directory and one
//! configuration block per run, so the same library path serves embedded
//! hosts unchanged.
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Root CLI entrypoint for markdown reference generation.
#[derive(Parser, Debug)]
#[command(
    name = "cmdref",
    version,
    about = "Markdown reference generator for command-line trees",
    after_help = "Commands:\n  generate --modules <dir> --module <key> --command <name>  Render one markdown fragment\n  tree --modules <dir> --module <key> --command <name>      Print the resolved command tree\n\nExamples:\n  cmdref generate --modules docs/modules --module pkg.cli --command main\n  cmdref generate --modules docs/modules --module pkg.cli --command main --depth 1 --style table\n  cmdref generate --modules docs/modules --module pkg.cli --command main --out docs/reference.md\n  cmdref tree --modules docs/modules --module pkg.cli --command main",
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct RootArgs {
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level generator commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    Generate(GenerateArgs),
    Tree(TreeArgs),
}

/// Generate command inputs for one markdown fragment.
#[derive(Parser, Debug)]
#[command(about = "Render a command tree as a markdown fragment")]
pub struct GenerateArgs {
    /// Directory containing <module>.json manifests
    #[arg(long, value_name = "DIR")]
    pub modules: PathBuf,

    /// Module key to load
    #[arg(long, value_name = "KEY")]
    pub module: String,

    /// Name of the command export inside the module
    #[arg(long, value_name = "NAME")]
    pub command: String,

    /// Nesting level of the root command's header
    #[arg(long, value_name = "N", default_value_t = 0)]
    pub depth: usize,

    /// Option listing style: plain or table
    #[arg(long, value_name = "STYLE", default_value = "plain")]
    pub style: String,

    /// Include hidden commands and options
    #[arg(long)]
    pub show_hidden: bool,

    /// Write the fragment here instead of stdout
    #[arg(long, value_name = "PATH")]
    pub out: Option<PathBuf>,
}

/// Tree command inputs for a quick structure listing.
#[derive(Parser, Debug)]
#[command(about = "Print the resolved command tree")]
pub struct TreeArgs {
    /// Directory containing <module>.json manifests
    #[arg(long, value_name = "DIR")]
    pub modules: PathBuf,

    /// Module key to load
    #[arg(long, value_name = "KEY")]
    pub module: String,

    /// Name of the command export inside the module
    #[arg(long, value_name = "NAME")]
    pub command: String,
}
