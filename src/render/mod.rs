//! Deterministic markdown rendering of a command tree.
//!
//! Rendering is a single synchronous depth-first pass: each node contributes
//! a fragment (title, description, usage, options), then its children follow
//! in name order, one level deeper. Nothing is cached between requests.

use crate::command::Command;
use std::str::FromStr;

mod format;
mod listing;

use format::{append_description, append_options, append_title, append_usage};

/// Option listing style for rendered fragments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Style {
    /// Two-column definition list inside a fenced code block.
    #[default]
    Plain,
    /// Markdown table with name, argument, description, and default columns.
    Table,
}

impl FromStr for Style {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plain" => Ok(Style::Plain),
            "table" => Ok(Style::Table),
            other => Err(format!(
                "unknown style '{other}' (expected 'plain' or 'table')"
            )),
        }
    }
}

/// Knobs for one rendering pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderSettings {
    /// Nesting level of the root command's header; children nest below it.
    pub depth: usize,
    pub style: Style,
    /// Include hidden commands and options.
    pub show_hidden: bool,
}

/// Traversal state for one node: the command, a link to the enclosing
/// context, and the nesting level. Lives only while the node and its
/// descendants render.
pub struct Context<'a> {
    command: &'a Command,
    parent: Option<&'a Context<'a>>,
    level: usize,
}

impl<'a> Context<'a> {
    fn new(command: &'a Command, parent: Option<&'a Context<'a>>, level: usize) -> Self {
        Self {
            command,
            parent,
            level,
        }
    }

    pub fn command(&self) -> &Command {
        self.command
    }

    pub fn level(&self) -> usize {
        self.level
    }

    /// Command names from the root down to this node.
    pub fn invocation_path(&self) -> Vec<&str> {
        let mut path = Vec::new();
        let mut current = Some(self);
        while let Some(ctx) = current {
            path.push(ctx.command.name.as_str());
            current = ctx.parent;
        }
        path.reverse();
        path
    }
}

/// Render `root` and every reachable subcommand as markdown lines.
///
/// Fragments appear depth-first with siblings in name order; hidden
/// subtrees are skipped unless the settings opt in.
pub fn render_tree(root: &Command, settings: &RenderSettings) -> Vec<String> {
    walk(root, None, settings.depth, settings)
}

fn walk<'a>(
    command: &'a Command,
    parent: Option<&'a Context<'a>>,
    level: usize,
    settings: &RenderSettings,
) -> Vec<String> {
    tracing::debug!(command = command.name.as_str(), level, "rendering command");
    let ctx = Context::new(command, parent, level);
    let mut lines = Vec::new();
    append_title(&mut lines, &ctx);
    append_description(&mut lines, command);
    append_usage(&mut lines, &ctx);
    append_options(&mut lines, command, settings);
    scrub_erase_markers(&mut lines);
    for (_, child) in command.children() {
        if child.hidden && !settings.show_hidden {
            continue;
        }
        lines.extend(walk(&child, Some(&ctx), level + 1, settings));
    }
    lines
}

// Upstream help strings may embed backspace markers to control rewrapping;
// they never belong in rendered output.
fn scrub_erase_markers(lines: &mut [String]) {
    for line in lines {
        if line.contains('\u{8}') {
            *line = line.replace('\u{8}', "");
        }
    }
}
