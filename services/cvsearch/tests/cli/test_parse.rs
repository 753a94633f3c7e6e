//! Tests for argument parsing and shell completions

use clap::Parser;
use clap_complete::Shell;
use cvsearch::cli::commands::completions::write_completions;
use cvsearch::cli::{Cli, Commands, OutputFormat};

#[test]
fn test_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from([
        "cvsearch",
        "export-config",
        "--output",
        "ui.json",
        "--format",
        "json",
        "--config",
        "/etc/cvsearch.toml",
    ])
    .unwrap();

    assert_eq!(cli.format, OutputFormat::Json);
    assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("/etc/cvsearch.toml")));
    match cli.command {
        Commands::ExportConfig(args) => {
            assert_eq!(args.output.unwrap().to_str(), Some("ui.json"))
        }
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn test_default_format_is_human() {
    let cli = Cli::try_parse_from(["cvsearch", "facet-fields", "--disjunctive"]).unwrap();
    assert_eq!(cli.format, OutputFormat::Human);
    assert!(matches!(cli.command, Commands::FacetFields(ref a) if a.disjunctive));
}

#[test]
fn test_clean_records_requires_input() {
    assert!(Cli::try_parse_from(["cvsearch", "clean-records"]).is_err());
}

#[test]
fn test_unknown_command_rejected() {
    assert!(Cli::try_parse_from(["cvsearch", "search-code"]).is_err());
}

#[test]
fn test_bash_completions_mention_commands() {
    let mut buf = Vec::new();
    write_completions(Shell::Bash, &mut buf);
    let script = String::from_utf8(buf).unwrap();
    assert!(script.contains("export-config"));
    assert!(script.contains("clean-records"));
}
