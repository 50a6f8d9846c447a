use super::listing;
use super::{Context, RenderSettings, Style};
use crate::command::Command;

pub(super) fn append_title(out: &mut Vec<String>, ctx: &Context<'_>) {
    out.push(format!(
        "{} {}",
        "#".repeat(ctx.level() + 1),
        ctx.command().name
    ));
    out.push(String::new());
}

pub(super) fn append_description(out: &mut Vec<String>, command: &Command) {
    // Empty help text counts as absent.
    let text = command
        .help
        .as_deref()
        .filter(|text| !text.is_empty())
        .or_else(|| {
            command
                .short_help
                .as_deref()
                .filter(|text| !text.is_empty())
        });
    let Some(text) = text else {
        return;
    };
    out.extend(text.lines().map(str::to_string));
    out.push(String::new());
}

pub(super) fn append_usage(out: &mut Vec<String>, ctx: &Context<'_>) {
    let path = ctx.invocation_path().join(" ");
    let pieces = ctx.command().usage_pieces().join(" ");
    out.push("Usage:".to_string());
    out.push("```".to_string());
    if pieces.is_empty() {
        out.push(path);
    } else {
        out.push(format!("{path} {pieces}"));
    }
    out.push("```".to_string());
}

pub(super) fn append_options(out: &mut Vec<String>, command: &Command, settings: &RenderSettings) {
    let options = command.listable_options(settings.show_hidden);
    if options.is_empty() {
        return;
    }
    out.push("Options:".to_string());
    match settings.style {
        Style::Plain => {
            out.push("```code".to_string());
            listing::append_rows(out, &options);
            out.push("```".to_string());
        }
        Style::Table => {
            out.push(String::new());
            listing::append_table(out, &options);
            out.push(String::new());
        }
    }
}
