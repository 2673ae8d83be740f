//! CLI parse tests.

use super::{Cli, CliCommand, KindArg, ProductArg};
use clap::Parser;

fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

#[test]
fn cli_parse_status() {
    match parse(&["sheetstat", "status", "osm-50k"]) {
        CliCommand::Status { product, json } => {
            assert_eq!(product, ProductArg::Osm50k);
            assert!(!json);
        }
        _ => panic!("expected Status"),
    }
}

#[test]
fn cli_parse_status_json() {
    match parse(&["sheetstat", "status", "cmpdi-5k", "--json"]) {
        CliCommand::Status { product, json } => {
            assert_eq!(product, ProductArg::Cmpdi5k);
            assert!(json);
        }
        _ => panic!("expected Status with --json"),
    }
}

#[test]
fn cli_parse_fetch() {
    match parse(&["sheetstat", "fetch", "osm-50k", "gtiff"]) {
        CliCommand::Fetch { product, kind } => {
            assert_eq!(product, ProductArg::Osm50k);
            assert_eq!(kind, KindArg::Gtiff);
        }
        _ => panic!("expected Fetch"),
    }
}

#[test]
fn cli_rejects_unknown_product() {
    assert!(Cli::try_parse_from(["sheetstat", "status", "nakshe-25k"]).is_err());
}

#[test]
fn cli_parse_completions() {
    match parse(&["sheetstat", "completions", "bash"]) {
        CliCommand::Completions { shell } => {
            assert_eq!(shell, clap_complete::Shell::Bash);
        }
        _ => panic!("expected Completions"),
    }
}
