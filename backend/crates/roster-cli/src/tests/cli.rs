use crate::{Cli, Commands};

use clap::Parser;

#[test]
fn given_global_flags_after_subcommand_when_parsing_then_accepted() {
    let cli = Cli::try_parse_from(["roster", "list", "--email", "a@b.com", "--pretty"]).unwrap();

    assert_eq!(cli.email.as_deref(), Some("a@b.com"));
    assert!(cli.pretty);
    assert_eq!(
        cli.command,
        Commands::List {
            search: None,
            loan_only: false
        }
    );
}

#[test]
fn given_list_filters_when_parsing_then_captured() {
    let cli = Cli::try_parse_from(["roster", "list", "--search", "zak", "--loan-only"]).unwrap();

    assert_eq!(cli.email, None);
    assert_eq!(
        cli.command,
        Commands::List {
            search: Some("zak".into()),
            loan_only: true
        }
    );
}

#[test]
fn given_negative_value_when_parsing_edit_then_kept_as_value() {
    let cli = Cli::try_parse_from(["roster", "edit", "m-1", "loan", "-5"]).unwrap();

    assert_eq!(
        cli.command,
        Commands::Edit {
            id: "m-1".into(),
            field: "loan".into(),
            value: "-5".into()
        }
    );
}

#[test]
fn given_edit_without_value_when_parsing_then_error() {
    assert!(Cli::try_parse_from(["roster", "edit", "m-1", "name"]).is_err());
}

#[test]
fn given_no_subcommand_when_parsing_then_error() {
    assert!(Cli::try_parse_from(["roster", "--pretty"]).is_err());
}
