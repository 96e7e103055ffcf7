//! credcheck CLI - Migrations, user records and ad-hoc verification.
//!
//! # Usage
//!
//! ```bash
//! # Create the user table
//! credcheck migrate
//!
//! # Add a user (secret read from CREDCHECK_USER_SECRET)
//! CREDCHECK_USER_SECRET=s3cr3t credcheck user add -l alice -n "Alice A."
//!
//! # Verify a login/secret pair
//! CREDCHECK_USER_SECRET=s3cr3t credcheck verify -l alice --json
//!
//! # Check the database is reachable
//! credcheck ping
//! ```
//!
//! # Exit Codes
//!
//! - `0` - Success (for `verify`: credentials matched)
//! - `1` - `verify` only: credentials did not match
//! - `2` - Any error (configuration, store unavailable, query failure, timeout)

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::process::ExitCode;

use clap::{Parser, Subcommand};

mod commands;

use commands::CommandError;

#[derive(Debug, Parser)]
#[command(name = "credcheck")]
#[command(author, version, about = "credcheck CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Manage user records
    User {
        #[command(subcommand)]
        action: UserAction,
    },
    /// Verify a login against the stored records
    Verify {
        /// Login identifier, used verbatim
        #[arg(short, long)]
        login: String,

        /// Give up after this many seconds (at least 1)
        #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
        timeout_secs: Option<u64>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Check that the database answers
    Ping,
}

#[derive(Debug, Subcommand)]
enum UserAction {
    /// Add a user record
    Add {
        /// Login identifier
        #[arg(short, long)]
        login: String,

        /// Display name returned on successful verification
        #[arg(short, long)]
        name: String,
    },
}

/// Outcome of a successful command run.
#[derive(Debug)]
enum Outcome {
    Done,
    Rejected,
}

/// Process exit status for a command run.
///
/// `0` on success, `1` when `verify` found no match, `2` on any error.
const fn exit_status(result: &Result<Outcome, CommandError>) -> u8 {
    match result {
        Ok(Outcome::Done) => 0,
        Ok(Outcome::Rejected) => 1,
        Err(_) => 2,
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Log to stderr so stdout carries only command output
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "credcheck=info,credcheck_verifier=info".into());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = run(cli).await;
    if let Err(e) = &result {
        tracing::error!("Command failed: {e}");
        report(e);
    }
    ExitCode::from(exit_status(&result))
}

async fn run(cli: Cli) -> Result<Outcome, CommandError> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::User { action } => match action {
            UserAction::Add { login, name } => {
                commands::user::add(&login, &name).await?;
            }
        },
        Commands::Verify {
            login,
            timeout_secs,
            json,
        } => {
            let result = commands::verify::run(&login, timeout_secs, json).await?;
            if !result.is_matched() {
                return Ok(Outcome::Rejected);
            }
        }
        Commands::Ping => commands::ping::run().await?,
    }
    Ok(Outcome::Done)
}

/// Print a short, detail-free error line for whoever ran the command.
#[allow(clippy::print_stderr)]
fn report(error: &CommandError) {
    match error {
        CommandError::Verify(e) => eprintln!("error: {}", e.public_message()),
        other => eprintln!("error: {other}"),
    }
}
