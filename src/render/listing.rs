//! Option listing layouts: the two-column definition list and the table
//! alternative.
use crate::command::OptionSpec;

const LIST_INDENT: usize = 2;
const COL_SPACING: usize = 2;
const COL_MAX: usize = 30;
const MAX_WIDTH: usize = 78;

/// Append one definition-list row per option, plus aligned continuation
/// lines for wrapped or multi-line help.
pub(super) fn append_rows(out: &mut Vec<String>, options: &[&OptionSpec]) {
    let labels: Vec<String> = options.iter().map(|option| option.flag_label()).collect();
    let widest = labels.iter().map(String::len).max().unwrap_or(0);
    let first_col = widest.min(COL_MAX) + COL_SPACING;
    let text_width = MAX_WIDTH.saturating_sub(first_col + LIST_INDENT).max(10);
    let indent = " ".repeat(LIST_INDENT);

    for (option, label) in options.iter().zip(&labels) {
        let mut help_lines = wrapped_help(option, text_width).into_iter();
        let Some(lead) = help_lines.next() else {
            out.push(format!("{indent}{label}"));
            continue;
        };
        if label.len() + COL_SPACING <= first_col {
            out.push(format!("{indent}{label:<first_col$}{lead}"));
        } else {
            // Overlong labels push their help text down a line.
            out.push(format!("{indent}{label}"));
            push_continuation(out, first_col, &lead);
        }
        for line in help_lines {
            push_continuation(out, first_col, &line);
        }
    }
}

fn push_continuation(out: &mut Vec<String>, first_col: usize, line: &str) {
    if line.is_empty() {
        out.push(String::new());
        return;
    }
    out.push(format!("{}{line}", " ".repeat(LIST_INDENT + first_col)));
}

fn wrapped_help(option: &OptionSpec, width: usize) -> Vec<String> {
    let Some(help) = option.help.as_deref() else {
        return Vec::new();
    };
    let mut lines = Vec::new();
    for line in help.lines() {
        if line.is_empty() {
            lines.push(String::new());
        } else {
            wrap_line(line, width, &mut lines);
        }
    }
    while lines.first().is_some_and(String::is_empty) {
        lines.remove(0);
    }
    while lines.last().is_some_and(String::is_empty) {
        lines.pop();
    }
    lines
}

fn wrap_line(line: &str, width: usize, out: &mut Vec<String>) {
    if line.len() <= width {
        out.push(line.to_string());
        return;
    }
    let mut current = String::new();
    for word in line.split_whitespace() {
        if !current.is_empty() && current.len() + 1 + word.len() > width {
            out.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        out.push(current);
    }
}

/// Append the table layout: a fixed header plus one row per option, with
/// pipes escaped so cell boundaries survive.
pub(super) fn append_table(out: &mut Vec<String>, options: &[&OptionSpec]) {
    out.push("| Name | Argument | Description | Default |".to_string());
    out.push("| --- | --- | --- | --- |".to_string());
    for option in options {
        let name = format!("`{}`", escape_cell(&option.flags.join(", ")));
        let argument = code_cell(option.metavar.as_deref());
        let description = option
            .help
            .as_deref()
            .map(|help| escape_cell(&help.split_whitespace().collect::<Vec<_>>().join(" ")))
            .unwrap_or_default();
        let default = code_cell(option.default.as_deref());
        out.push(format!(
            "| {name} | {argument} | {description} | {default} |"
        ));
    }
}

fn code_cell(value: Option<&str>) -> String {
    match value {
        Some(value) if !value.is_empty() => format!("`{}`", escape_cell(value)),
        _ => String::new(),
    }
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(options: &[&OptionSpec]) -> Vec<String> {
        let mut out = Vec::new();
        append_rows(&mut out, options);
        out
    }

    #[test]
    fn rows_align_help_to_the_widest_label() {
        let all = OptionSpec::new("--all").with_help("List everything.");
        let number = OptionSpec::new("-n")
            .with_alias("--number")
            .with_metavar("COUNT")
            .with_help("How many.");
        let out = rows(&[&all, &number]);
        // Widest label is 18 chars, so help starts at column 22.
        assert_eq!(
            out,
            vec![
                format!("{:<22}{}", "  --all", "List everything."),
                format!("{:<22}{}", "  -n, --number COUNT", "How many."),
            ]
        );
    }

    #[test]
    fn a_row_without_help_is_just_the_label() {
        let quiet = OptionSpec::new("--quiet");
        assert_eq!(rows(&[&quiet]), vec!["  --quiet".to_string()]);
    }

    #[test]
    fn overlong_labels_break_before_the_help() {
        let option = OptionSpec::new("--extremely-long-option-flag-name")
            .with_metavar("VALUE")
            .with_help("Does things.");
        let out = rows(&[&option]);
        assert_eq!(
            out,
            vec![
                "  --extremely-long-option-flag-name VALUE".to_string(),
                format!("{}Does things.", " ".repeat(34)),
            ]
        );
    }

    #[test]
    fn multi_line_help_continues_under_the_first_line() {
        let option = OptionSpec::new("--mode")
            .with_metavar("MODE")
            .with_help("Pick a mode.\nRepeat for detail.");
        let out = rows(&[&option]);
        assert_eq!(
            out,
            vec![
                format!("{:<15}{}", "  --mode MODE", "Pick a mode."),
                format!("{}Repeat for detail.", " ".repeat(15)),
            ]
        );
    }

    #[test]
    fn long_help_wraps_within_the_page_width() {
        let option = OptionSpec::new("--notes").with_help(
            "Attach free-form notes to the run so later readers can reconstruct \
             why each individual invocation was started in the first place.",
        );
        let out = rows(&[&option]);
        assert!(out.len() > 1, "expected wrapped help, got {out:?}");
        assert!(out[0].starts_with("  --notes  "));
        for line in &out[1..] {
            assert!(line.starts_with(&" ".repeat(11)), "bad continuation {line:?}");
        }
        for line in &out {
            assert!(line.len() <= MAX_WIDTH, "line too wide: {line:?}");
        }
    }

    #[test]
    fn table_rows_escape_pipes_and_leave_empty_cells_blank() {
        let format = OptionSpec::new("-f")
            .with_alias("--format")
            .with_metavar("A|B")
            .with_help("Choose A|B output.")
            .with_default("A|B");
        let bare = OptionSpec::new("--bare");
        let mut out = Vec::new();
        append_table(&mut out, &[&format, &bare]);
        assert_eq!(
            out,
            vec![
                "| Name | Argument | Description | Default |".to_string(),
                "| --- | --- | --- | --- |".to_string(),
                "| `-f, --format` | `A\\|B` | Choose A\\|B output. | `A\\|B` |".to_string(),
                "| `--bare` |  |  |  |".to_string(),
            ]
        );
    }
}
