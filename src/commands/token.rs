//! Token command - Issues a bearer token signed with the server secret.

use crate::cli::args::TokenArgs;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::services::{AuthService, Authenticator};

/// Execute the token command
pub async fn execute(args: TokenArgs, config: Config) -> AppResult<()> {
    let auth = Authenticator::new(config);
    let token = auth.issue_token(&args.login)?;

    tracing::info!(
        "Issued token for '{}' (expires in {}s)",
        args.login,
        token.expires_in
    );

    let rendered = serde_json::to_string_pretty(&token)
        .map_err(|e| AppError::internal(format!("Failed to render token: {}", e)))?;
    println!("{}", rendered);

    Ok(())
}
