//! Entity alert headers.
//!
//! Successful writes announce themselves through a pair of response headers
//! that clients use to show notifications. They never affect the status or
//! body of a response.

use std::convert::Infallible;

use axum::http::{HeaderName, HeaderValue};
use axum::response::{IntoResponseParts, ResponseParts};

use crate::config::{ALERT_HEADER, APPLICATION_NAME, PARAMS_HEADER};

/// Alert header pair added to a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityAlert {
    message: String,
    param: String,
}

impl EntityAlert {
    fn new(entity: &str, event: &str, param: impl ToString) -> Self {
        Self {
            message: format!("{}.{}.{}", APPLICATION_NAME, entity, event),
            param: param.to_string(),
        }
    }

    pub fn created(entity: &str, id: impl ToString) -> Self {
        Self::new(entity, "created", id)
    }

    pub fn updated(entity: &str, id: impl ToString) -> Self {
        Self::new(entity, "updated", id)
    }

    pub fn deleted(entity: &str, id: impl ToString) -> Self {
        Self::new(entity, "deleted", id)
    }
}

impl IntoResponseParts for EntityAlert {
    type Error = Infallible;

    fn into_response_parts(self, mut res: ResponseParts) -> Result<ResponseParts, Self::Error> {
        // Values that are not valid header text are dropped rather than failing the response
        if let Ok(value) = HeaderValue::from_str(&self.message) {
            res.headers_mut()
                .insert(HeaderName::from_static(ALERT_HEADER), value);
        }
        if let Ok(value) = HeaderValue::from_str(&self.param) {
            res.headers_mut()
                .insert(HeaderName::from_static(PARAMS_HEADER), value);
        }
        Ok(res)
    }
}
