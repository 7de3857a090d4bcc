//! Reimbursement handlers.

use axum::{
    extract::State,
    http::{header::LOCATION, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};

use crate::api::alerts::EntityAlert;
use crate::api::extractors::{CurrentAccount, PathParam, ValidatedJson};
use crate::api::AppState;
use crate::config::{ENTITY_REIMBURSEMENT, REIMBURSEMENT_RESOURCE_PATH};
use crate::domain::Reimbursement;
use crate::errors::{AppError, AppResult};

/// Create reimbursement routes
pub fn reimbursement_routes() -> Router<AppState> {
    Router::new()
        .route(
            REIMBURSEMENT_RESOURCE_PATH,
            get(list_reimbursements)
                .post(create_reimbursement)
                .put(update_reimbursement),
        )
        .route(
            &format!("{}/:id", REIMBURSEMENT_RESOURCE_PATH),
            get(get_reimbursement).delete(delete_reimbursement),
        )
}

fn persisted_id(record: &Reimbursement) -> AppResult<i64> {
    record
        .id
        .ok_or_else(|| AppError::internal("store returned a reimbursement without an id"))
}

/// Create a new reimbursement (admin or operator)
#[utoipa::path(
    post,
    path = "/api/reimbursements",
    tag = "Reimbursements",
    security(("bearer_auth" = [])),
    request_body = Reimbursement,
    responses(
        (status = 201, description = "Reimbursement created", body = Reimbursement),
        (status = 400, description = "The reimbursement already has an id"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin or operator only")
    )
)]
pub async fn create_reimbursement(
    State(state): State<AppState>,
    CurrentAccount(account): CurrentAccount,
    ValidatedJson(payload): ValidatedJson<Reimbursement>,
) -> AppResult<impl IntoResponse> {
    tracing::debug!("REST request to save Reimbursement : {:?}", payload);

    let saved = state.reimbursement_service.create(&account, payload).await?;
    let id = persisted_id(&saved)?;

    Ok((
        StatusCode::CREATED,
        [(LOCATION, format!("{}/{}", REIMBURSEMENT_RESOURCE_PATH, id))],
        EntityAlert::created(ENTITY_REIMBURSEMENT, id),
        Json(saved),
    ))
}

/// Replace an existing reimbursement (admin only)
#[utoipa::path(
    put,
    path = "/api/reimbursements",
    tag = "Reimbursements",
    security(("bearer_auth" = [])),
    request_body = Reimbursement,
    responses(
        (status = 200, description = "Reimbursement updated", body = Reimbursement),
        (status = 400, description = "The reimbursement has no id"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin only"),
        (status = 404, description = "Reimbursement not found")
    )
)]
pub async fn update_reimbursement(
    State(state): State<AppState>,
    CurrentAccount(account): CurrentAccount,
    ValidatedJson(payload): ValidatedJson<Reimbursement>,
) -> AppResult<impl IntoResponse> {
    tracing::debug!("REST request to update Reimbursement : {:?}", payload);

    let saved = state.reimbursement_service.update(&account, payload).await?;
    let id = persisted_id(&saved)?;

    Ok((
        StatusCode::OK,
        EntityAlert::updated(ENTITY_REIMBURSEMENT, id),
        Json(saved),
    ))
}

/// List reimbursements
///
/// Every authenticated account receives the full list unless the server runs
/// with `REIMBURSEMENT_LIST_SCOPE=owned`.
#[utoipa::path(
    get,
    path = "/api/reimbursements",
    tag = "Reimbursements",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "List of reimbursements", body = Vec<Reimbursement>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn list_reimbursements(
    State(state): State<AppState>,
    CurrentAccount(account): CurrentAccount,
) -> AppResult<Json<Vec<Reimbursement>>> {
    tracing::debug!("REST request to get all Reimbursements");

    let records = state.reimbursement_service.list(&account).await?;
    Ok(Json(records))
}

/// Get reimbursement by ID (owner, admin or operator)
#[utoipa::path(
    get,
    path = "/api/reimbursements/{id}",
    tag = "Reimbursements",
    security(("bearer_auth" = [])),
    params(
        ("id" = i64, Path, description = "Reimbursement ID")
    ),
    responses(
        (status = 200, description = "Reimbursement", body = Reimbursement),
        (status = 400, description = "Id is not a number"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Not the owner, admin or operator"),
        (status = 404, description = "Reimbursement not found")
    )
)]
pub async fn get_reimbursement(
    State(state): State<AppState>,
    CurrentAccount(account): CurrentAccount,
    PathParam(id): PathParam<i64>,
) -> AppResult<Response> {
    tracing::debug!("REST request to get Reimbursement : {}", id);

    let response = match state.reimbursement_service.get(&account, id).await? {
        Some(record) => Json(record).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    };

    Ok(response)
}

/// Delete reimbursement (admin only)
#[utoipa::path(
    delete,
    path = "/api/reimbursements/{id}",
    tag = "Reimbursements",
    security(("bearer_auth" = [])),
    params(
        ("id" = i64, Path, description = "Reimbursement ID")
    ),
    responses(
        (status = 200, description = "Reimbursement deleted, or it did not exist"),
        (status = 400, description = "Id is not a number"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin only")
    )
)]
pub async fn delete_reimbursement(
    State(state): State<AppState>,
    CurrentAccount(account): CurrentAccount,
    PathParam(id): PathParam<i64>,
) -> AppResult<(StatusCode, EntityAlert, ())> {
    tracing::debug!("REST request to delete Reimbursement : {}", id);

    state.reimbursement_service.delete(&account, id).await?;

    Ok((StatusCode::OK, EntityAlert::deleted(ENTITY_REIMBURSEMENT, id), ()))
}
