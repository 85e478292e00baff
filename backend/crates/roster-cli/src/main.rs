//! roster - member contributions roster
//!
//! Prints the roster as JSON after every command, so it can be scripted.
//!
//! # Examples
//!
//! ```bash
//! # Members with an outstanding loan
//! roster list --loan-only --pretty
//!
//! # Add a blank member
//! roster --email lydia@example.com add
//!
//! # Admin edits
//! roster --email admin@photovault.com edit <id> savings 1500
//! roster --email admin@photovault.com delete <id>
//! ```

use roster_cli::{Cli, CliResult, CommandOutcome, Runner, logger};
use roster_config::Config;
use roster_core::{
    AddMemberPolicy, AuthenticatedUser, Capability, FileSlot, RosterController, RosterStore,
};

use std::process::ExitCode;

use clap::Parser;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let outcome = match run(&cli) {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("Error: {e}");
            if let Some(hint) = e.hint() {
                eprintln!("{hint}");
            }
            if e.is_transient() {
                eprintln!("This may be temporary. Run the command again.");
            }
            return ExitCode::FAILURE;
        }
    };

    match outcome.to_json(cli.pretty) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Error serializing response: {e}");
            return ExitCode::FAILURE;
        }
    }

    if outcome.accepted {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn run(cli: &Cli) -> CliResult<CommandOutcome> {
    let config = Config::load()?;
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;
    config.log_summary();

    let user = cli.email.as_deref().map(AuthenticatedUser::with_email);
    let capability = Capability::derive(user.as_ref(), &config.access.admin_emails);

    let add_policy = match config.access.add_member_policy {
        roster_config::AddMemberPolicy::AnyAuthenticated => AddMemberPolicy::AnyAuthenticated,
        roster_config::AddMemberPolicy::AdminOnly => AddMemberPolicy::AdminOnly,
    };
    let controller = RosterController::new(add_policy);
    let store = RosterStore::new(FileSlot::new(config.storage_path()?));

    Runner::new(store, controller, capability).run(&cli.command)
}
