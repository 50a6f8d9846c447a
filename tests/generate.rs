//! End-to-end generation against checked-in module manifests.

mod common;

use cmdref::command::{Command, LazySubcommands};
use cmdref::loader::{ModuleExports, StaticModules};
use cmdref::plugin::generate_docs;
use regex::Regex;
use std::env;
use std::fs;
use std::path::PathBuf;

fn golden(name: &str) -> String {
    let path = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".into()))
        .join("tests/golden")
        .join(name);
    fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("read golden {}: {err}", path.display()))
}

fn document(lines: &[String]) -> String {
    let mut doc = lines.join("\n");
    doc.push('\n');
    doc
}

#[test]
fn renders_the_reference_document() {
    let lines = generate_docs(
        &common::file_modules(),
        &common::request("pkg.cli", "main", &[]),
    )
    .expect("generate pkg.cli docs");
    assert_eq!(document(&lines), golden("pkg_cli.md"));
}

#[test]
fn renders_the_table_styled_document() {
    let config = common::request("pkg.cli", "main", &[("style", "table"), ("depth", "1")]);
    let lines = generate_docs(&common::file_modules(), &config).expect("generate table docs");
    assert_eq!(document(&lines), golden("pkg_cli_table.md"));
}

#[test]
fn renders_a_nested_tree_with_hidden_items_skipped() {
    let lines = generate_docs(
        &common::file_modules(),
        &common::request("pkg.deploy", "deploy", &[]),
    )
    .expect("generate pkg.deploy docs");
    assert_eq!(document(&lines), golden("pkg_deploy.md"));
}

#[test]
fn show_hidden_reveals_commands_and_options() {
    let config = common::request("pkg.deploy", "deploy", &[("show_hidden", "true")]);
    let lines = generate_docs(&common::file_modules(), &config).expect("generate with hidden");
    assert!(lines.contains(&"## debug-dump".to_string()), "{lines:?}");
    assert!(lines.iter().any(|line| line.contains("--trace")), "{lines:?}");
}

#[test]
fn headers_descend_one_level_at_a_time() {
    let lines = generate_docs(
        &common::file_modules(),
        &common::request("pkg.deploy", "deploy", &[]),
    )
    .expect("generate pkg.deploy docs");
    let header = Regex::new(r"^(#+) ").expect("header pattern");
    let levels: Vec<usize> = lines
        .iter()
        .filter_map(|line| header.captures(line))
        .map(|captures| captures[1].len())
        .collect();
    assert_eq!(levels.first(), Some(&1));
    for pair in levels.windows(2) {
        assert!(pair[1] <= pair[0] + 1, "header level jumped: {levels:?}");
    }
}

#[test]
fn depth_applies_to_every_header() {
    let config = common::request("pkg.deploy", "deploy", &[("depth", "2")]);
    let lines = generate_docs(&common::file_modules(), &config).expect("generate with depth");
    assert_eq!(lines[0], "### deploy");
    let header = Regex::new(r"^(#+) ").expect("header pattern");
    let min = lines
        .iter()
        .filter_map(|line| header.captures(line))
        .map(|captures| captures[1].len())
        .min()
        .expect("at least one header");
    assert_eq!(min, 3);
}

#[test]
fn lazy_registries_generate_like_eager_ones() {
    let mut modules = StaticModules::new();
    modules.register("pkg.lazy", || {
        let lazy = LazySubcommands::new(
            vec!["restore".to_string(), "backup".to_string()],
            |name| Some(Command::new(name)),
        );
        let mut exports = ModuleExports::new();
        exports.insert("main", Command::group("main").with_lazy_subcommands(lazy));
        Ok(exports)
    });
    let lines = generate_docs(&modules, &common::request("pkg.lazy", "main", &[]))
        .expect("generate lazy docs");
    let headers: Vec<&String> = lines.iter().filter(|line| line.starts_with('#')).collect();
    assert_eq!(headers, vec!["# main", "## backup", "## restore"]);
}
