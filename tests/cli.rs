//! CLI argument parsing and binary smoke tests.

use assert_cmd::Command as BinCommand;
use clap::Parser;
use predicates::prelude::*;
use sitewright::cli::{Cli, Commands, GenerateArgs, ParseArgs};

#[test]
fn generate_flag_parsing() {
    // Given
    let argv = vec![
        "swr",
        "generate",
        "--out-dir",
        "/tmp/sites",
        "--zip",
        "--json",
        "a",
        "landing",
        "page",
    ];

    // When
    let cmd = Cli::parse_from(argv);

    // Then
    match cmd.command {
        Commands::Generate(GenerateArgs { prompt, out_dir, zip, zip_only, json, .. }) => {
            assert_eq!(prompt, vec!["a", "landing", "page"]);
            assert_eq!(out_dir.as_deref(), Some("/tmp/sites"));
            assert!(zip);
            assert!(!zip_only);
            assert!(json);
        }
        _ => panic!("expected Generate command"),
    }
}

#[test]
fn zip_and_zip_only_conflict() {
    let argv = vec!["swr", "generate", "--zip", "--zip-only", "brief"];
    assert!(Cli::try_parse_from(argv).is_err());
}

#[test]
fn parse_flag_parsing() {
    let argv = vec!["swr", "parse", "--compact", "a", "brief"];
    let cmd = Cli::parse_from(argv);

    match cmd.command {
        Commands::Parse(ParseArgs { prompt, compact, clipboard }) => {
            assert_eq!(prompt, vec!["a", "brief"]);
            assert!(compact);
            assert!(!clipboard);
        }
        _ => panic!("expected Parse command"),
    }
}

#[test]
fn global_flags_are_global() {
    let argv = vec!["swr", "plan", "brief", "--quiet", "--dry-run"];
    let cmd = Cli::parse_from(argv);
    assert!(cmd.quiet);
    assert!(cmd.dry_run);
    assert!(!cmd.no_color);
}

#[test]
fn prompt_is_required() {
    assert!(Cli::try_parse_from(vec!["swr", "generate"]).is_err());
    assert!(Cli::try_parse_from(vec!["swr", "parse"]).is_err());
}

#[test]
fn parse_emits_intent_json() {
    BinCommand::cargo_bin("swr")
        .expect("binary built")
        .args(["--quiet", "parse", "Use #0B74DE as primary color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"primaryColor\": \"#0B74DE\""))
        .stdout(predicate::str::contains("\"siteName\": \"My Website\""));
}

#[test]
fn parse_compact_is_single_line() {
    BinCommand::cargo_bin("swr")
        .expect("binary built")
        .args(["--quiet", "parse", "--compact", "a brief"])
        .assert()
        .success()
        .stdout(predicate::str::contains("{\"siteName\""));
}

#[test]
fn generate_dry_run_writes_nothing() {
    let tmp = assert_fs::TempDir::new().expect("tempdir");

    BinCommand::cargo_bin("swr")
        .expect("binary built")
        .current_dir(tmp.path())
        .args(["--dry-run", "generate", "a site for 'Smoke Test'"])
        .assert()
        .success()
        .stdout(predicate::str::contains("DRY RUN"));

    // Nothing materialized
    assert!(!tmp.path().join("smoke-test").exists());
    assert!(!tmp.path().join("smoke-test.zip").exists());
}

#[test]
fn generate_writes_scaffold() {
    let tmp = assert_fs::TempDir::new().expect("tempdir");

    BinCommand::cargo_bin("swr")
        .expect("binary built")
        .current_dir(tmp.path())
        .args(["--quiet", "generate", "a site for 'Smoke Test' with pricing"])
        .assert()
        .success();

    let root = tmp.path().join("smoke-test");
    assert!(root.join("package.json").exists());
    assert!(root.join("src/components/Pricing.tsx").exists());
    assert!(root.join("README.md").exists());
}

#[test]
fn plan_prints_summary_table() {
    BinCommand::cargo_bin("swr")
        .expect("binary built")
        .args(["plan", "saas landing with pricing and features"])
        .assert()
        .success()
        .stdout(predicate::str::contains("saas-landing"))
        .stdout(predicate::str::contains("package.json"));
}

#[test]
fn completions_generate_to_stdout() {
    BinCommand::cargo_bin("swr")
        .expect("binary built")
        .args(["completions", "bash", "--stdout"])
        .assert()
        .success()
        .stdout(predicate::str::contains("swr"));
}
