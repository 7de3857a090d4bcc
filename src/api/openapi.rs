//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::reimbursement_handler;
use crate::domain::{PermissionLevel, Reimbursement, ReimbursementStatus};
use crate::services::TokenResponse;

/// OpenAPI documentation for the Reimbursement API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Reimbursement API",
        version = "0.1.0",
        description = "Role-gated CRUD for reimbursement records",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        reimbursement_handler::create_reimbursement,
        reimbursement_handler::update_reimbursement,
        reimbursement_handler::list_reimbursements,
        reimbursement_handler::get_reimbursement,
        reimbursement_handler::delete_reimbursement,
    ),
    components(
        schemas(
            Reimbursement,
            ReimbursementStatus,
            PermissionLevel,
            TokenResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Reimbursements", description = "Reimbursement records")
    )
)]
pub struct ApiDoc;

/// Security scheme modifier for JWT Bearer authentication
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT issued by the identity provider"))
                        .build(),
                ),
            );
        }
    }
}
