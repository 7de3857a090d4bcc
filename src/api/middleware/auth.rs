//! Bearer token middleware for the reimbursement routes.

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::api::AppState;
use crate::config::BEARER_TOKEN_PREFIX;
use crate::errors::AppError;

/// Login of the verified token subject, stored in request extensions.
///
/// Only says who signed in; [`CurrentAccount`](crate::api::extractors::CurrentAccount)
/// turns it into an account with a permission level.
#[derive(Clone, Debug)]
pub struct CurrentUser {
    pub login: String,
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix(BEARER_TOKEN_PREFIX)
}

/// Reject requests without a valid bearer token (401) and record the
/// token subject as [`CurrentUser`].
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Some(token) = bearer_token(request.headers()) else {
        tracing::debug!("Missing bearer token on {}", request.uri().path());
        return Err(AppError::Unauthorized);
    };

    let login = state.auth_service.verify_token(token)?.sub;
    request.extensions_mut().insert(CurrentUser { login });

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn bearer_token_strips_scheme() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc.def"));

        assert_eq!(bearer_token(&headers), Some("abc.def"));
    }

    #[test]
    fn other_schemes_are_ignored() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic dXNlcjpwdw=="));

        assert_eq!(bearer_token(&headers), None);
        assert_eq!(bearer_token(&HeaderMap::new()), None);
    }
}
