//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Parser, Subcommand};

/// Reimbursement API - role-gated CRUD for reimbursement records
#[derive(Parser, Debug)]
#[command(name = "reimbursement-api")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    Serve(ServeArgs),

    /// Run database migrations
    Migrate(MigrateArgs),

    /// Mint a bearer token for local testing
    Token(TokenArgs),
}

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Host to bind to
    #[arg(short = 'H', long, default_value = "0.0.0.0", env = "SERVER_HOST")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, default_value = "3000", env = "SERVER_PORT")]
    pub port: u16,
}

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(subcommand)]
    pub action: MigrateAction,
}

/// Migration actions
#[derive(Subcommand, Debug)]
pub enum MigrateAction {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset and re-run all migrations
    Fresh,
}

/// Arguments for the token command
#[derive(Parser, Debug)]
pub struct TokenArgs {
    /// Login the token is issued for (must match an account)
    pub login: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_serve_with_overrides() {
        let cli = Cli::try_parse_from(["reimbursement-api", "serve", "--port", "8081"]).unwrap();

        match cli.command {
            Commands::Serve(args) => assert_eq!(args.port, 8081),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn parses_token_login_and_global_verbose() {
        let cli = Cli::try_parse_from(["reimbursement-api", "token", "maria", "-v"]).unwrap();

        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Token(TokenArgs { ref login }) if login == "maria"));
    }

    #[test]
    fn migrate_requires_an_action() {
        assert!(Cli::try_parse_from(["reimbursement-api", "migrate"]).is_err());
    }
}
