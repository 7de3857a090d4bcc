//! JSON body extractor that also runs `validator` rules.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::errors::AppError;

/// JSON body that has passed its `validator` rules.
///
/// Deserialization failures and rule violations both surface as
/// [`AppError::Validation`] (400).
///
/// ```rust,ignore
/// use reimbursement_api::api::extractors::ValidatedJson;
/// use reimbursement_api::domain::Reimbursement;
///
/// async fn create(ValidatedJson(record): ValidatedJson<Reimbursement>) {
///     // description length already checked
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => match value.validate() {
                Ok(()) => Ok(ValidatedJson(value)),
                Err(errors) => Err(AppError::validation(describe(&errors))),
            },
            Err(rejection) => Err(AppError::validation(rejection.body_text())),
        }
    }
}

/// `field: message` pairs sorted by field name, joined with "; "
fn describe(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(message) => format!("{}: {}", field, message),
                None => format!("{}: invalid ({})", field, e.code),
            })
        })
        .collect();
    parts.sort();
    parts.join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Reimbursement;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    #[test]
    fn long_description_is_reported_by_field() {
        let record = Reimbursement {
            id: None,
            account_id: 1,
            description: Some("x".repeat(256)),
            amount: Decimal::new(100, 2),
            date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            status: Default::default(),
        };

        let errors = record.validate().unwrap_err();

        assert_eq!(
            describe(&errors),
            "description: Description must be at most 255 characters"
        );
    }
}
