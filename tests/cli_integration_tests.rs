mod utils;

use clap::Parser;
use starter_answers::cli::{Cli, Runner};
use starter_answers::{Answers, LocalFilesystem};
use test_log::test;
use utils::answers_path;

fn run(args: &[&str]) -> String {
    let cli = Cli::parse_from(std::iter::once("starter-answers").chain(args.iter().copied()));
    let mut out = Vec::new();
    Runner::new(&cli, LocalFilesystem).run(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_set_creates_parent_directories() {
    let (dir, _) = answers_path();
    let path = dir.path().join("nested").join("answers.json");
    let file = path.to_str().unwrap();

    run(&["--file", file, "set", "vendorName", "Acme"]);
    run(&["--file", file, "set", "skipPrompts", "true"]);

    let answers = Answers::new(&path, LocalFilesystem).unwrap();
    assert_eq!(answers.vendor_name.as_deref(), Some("Acme"));
    assert!(answers.skip_prompts);
}

#[test]
fn test_show_prints_what_save_writes() {
    let (_dir, path) = answers_path();
    let file = path.to_str().unwrap();
    run(&["--file", file, "set", "license", "MIT"]);

    let shown = run(&["--file", file, "show"]);
    assert_eq!(shown, format!("{}\n", std::fs::read_to_string(&path).unwrap()));
}

#[test]
fn test_reset_restores_defaults() {
    let (_dir, path) = answers_path();
    let file = path.to_str().unwrap();
    run(&["--file", file, "set", "license", "MIT"]);
    run(&["--file", file, "reset"]);

    assert_eq!(run(&["--file", file, "get", "license"]), "Proprietary\n");
}
