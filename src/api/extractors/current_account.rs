//! Current account extractor.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::domain::Account;
use crate::errors::AppError;

/// Account of the authenticated user.
///
/// Requires [`auth_middleware`](crate::api::middleware::auth_middleware) on the
/// route; handlers pass the account on to services explicitly.
pub struct CurrentAccount(pub Account);

#[async_trait]
impl FromRequestParts<AppState> for CurrentAccount {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<CurrentUser>()
            .ok_or(AppError::Unauthorized)?;

        let account = state.account_service.current_account(&user.login).await?;

        Ok(CurrentAccount(account))
    }
}
