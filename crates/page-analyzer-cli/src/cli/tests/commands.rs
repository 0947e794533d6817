use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use std::path::Path;

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn cli_parse_add() {
    let cli = parse(&["page-analyzer", "add", "https://example.com/a"]);
    assert!(cli.db.is_none());
    match cli.command {
        CliCommand::Add { url } => assert_eq!(url, "https://example.com/a"),
        _ => panic!("expected Add"),
    }
}

#[test]
fn cli_parse_add_keeps_raw_input() {
    // Validation happens in the core, not in argument parsing.
    match parse(&["page-analyzer", "add", "not a url"]).command {
        CliCommand::Add { url } => assert_eq!(url, "not a url"),
        _ => panic!("expected Add"),
    }
}

#[test]
fn cli_parse_global_db_after_subcommand() {
    let cli = parse(&["page-analyzer", "list", "--db", "/tmp/urls.db"]);
    assert_eq!(cli.db.as_deref(), Some(Path::new("/tmp/urls.db")));
    match cli.command {
        CliCommand::List { json } => assert!(!json),
        _ => panic!("expected List"),
    }
}

#[test]
fn cli_parse_list_json() {
    match parse(&["page-analyzer", "list", "--json"]).command {
        CliCommand::List { json } => assert!(json),
        _ => panic!("expected List --json"),
    }
}

#[test]
fn cli_parse_show() {
    match parse(&["page-analyzer", "show", "42"]).command {
        CliCommand::Show { id } => assert_eq!(id, 42),
        _ => panic!("expected Show"),
    }
}

#[test]
fn cli_parse_show_rejects_non_numeric_id() {
    assert!(Cli::try_parse_from(["page-analyzer", "show", "abc"]).is_err());
}

#[test]
fn cli_parse_completions() {
    match parse(&["page-analyzer", "completions", "bash"]).command {
        CliCommand::Completions { shell } => assert_eq!(shell, Shell::Bash),
        _ => panic!("expected Completions"),
    }
}

#[test]
fn cli_parse_man() {
    assert!(matches!(parse(&["page-analyzer", "man"]).command, CliCommand::Man));
}

#[test]
fn cli_requires_subcommand() {
    assert!(Cli::try_parse_from(["page-analyzer"]).is_err());
}
