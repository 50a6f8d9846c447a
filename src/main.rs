//! cmdref binary: resolve a command tree from JSON manifests and render it
//! as markdown.
use anyhow::{Context, Result};
use clap::Parser;
use cmdref::command::Command;
use cmdref::loader::resolve_command;
use cmdref::manifest::FileModules;
use cmdref::plugin::generate_docs;
use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

mod cli;

use cli::{GenerateArgs, RootArgs, TreeArgs};

fn main() -> Result<()> {
    init_tracing();
    let args = RootArgs::parse();
    match args.command {
        cli::Command::Generate(args) => cmd_generate(args),
        cli::Command::Tree(args) => cmd_tree(args),
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_generate(args: GenerateArgs) -> Result<()> {
    let loader = FileModules::new(&args.modules);
    let mut config = BTreeMap::new();
    config.insert("module".to_string(), args.module);
    config.insert("command".to_string(), args.command);
    config.insert("depth".to_string(), args.depth.to_string());
    config.insert("style".to_string(), args.style);
    if args.show_hidden {
        config.insert("show_hidden".to_string(), "true".to_string());
    }
    let lines = generate_docs(&loader, &config)?;
    let mut doc = lines.join("\n");
    doc.push('\n');
    match &args.out {
        Some(path) => {
            write_atomic(path, &doc)?;
            tracing::info!(path = %path.display(), "wrote fragment");
        }
        None => print!("{doc}"),
    }
    Ok(())
}

fn cmd_tree(args: TreeArgs) -> Result<()> {
    let loader = FileModules::new(&args.modules);
    let command = resolve_command(&loader, &args.module, &args.command)?;
    print_tree(&command, 0);
    Ok(())
}

fn print_tree(command: &Command, indent: usize) {
    let mut label = command.name.clone();
    if command.hidden {
        label.push_str(" (hidden)");
    }
    let summary = command
        .short_help
        .as_deref()
        .or_else(|| command.help.as_deref().and_then(|help| help.lines().next()));
    match summary {
        Some(summary) => println!("{:indent$}{label}  {summary}", ""),
        None => println!("{:indent$}{label}", ""),
    }
    for (_, child) in command.children() {
        print_tree(&child, indent + 2);
    }
}

// Fragments land complete or not at all.
fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent)
        .with_context(|| format!("create output dir {}", parent.display()))?;
    let mut staged = tempfile::NamedTempFile::new_in(parent).context("stage output file")?;
    staged.write_all(contents.as_bytes()).context("write staged output")?;
    staged
        .persist(path)
        .with_context(|| format!("write {}", path.display()))?;
    Ok(())
}
