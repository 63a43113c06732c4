//! Investigador endpoints

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;
use validator::Validate;

use super::{ApiJson, ApiPath, ApiQuery};
use crate::{
    error::AppResult,
    models::{
        investigador::{Investigador, InvestigadorInput, InvestigadorQuery},
        pagination::{PageRequest, PaginationMeta},
    },
    AppState,
};

/// Paginated investigator listing
#[derive(Serialize, ToSchema)]
pub struct InvestigadoresPage {
    pub data: Vec<Investigador>,
    pub pagination: PaginationMeta,
}

/// List investigators, optionally searching by name
#[utoipa::path(
    get,
    path = "/investigadores",
    tag = "investigadores",
    params(
        ("name" = Option<String>, Query, description = "First or last name substring"),
        ("page" = Option<i64>, Query, description = "Page number (default: 1)"),
        ("limit" = Option<i64>, Query, description = "Items per page (default: 10, max: 100)")
    ),
    responses(
        (status = 200, description = "Investigators", body = InvestigadoresPage)
    )
)]
pub async fn list_investigadores(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<InvestigadorQuery>,
) -> AppResult<Json<InvestigadoresPage>> {
    let page = PageRequest::from_raw(query.page.as_deref(), query.limit.as_deref());
    let (data, total) = state
        .services
        .investigadores
        .list(query.name.as_deref(), page)
        .await?;

    Ok(Json(InvestigadoresPage {
        data,
        pagination: PaginationMeta::new(page, total),
    }))
}

/// Get investigator by ID
#[utoipa::path(
    get,
    path = "/investigadores/{id}",
    tag = "investigadores",
    params(("id" = i32, Path, description = "Investigator ID")),
    responses(
        (status = 200, description = "Investigator", body = Investigador),
        (status = 404, description = "Investigator not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_investigador(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> AppResult<Json<Investigador>> {
    let investigador = state.services.investigadores.get_by_id(id).await?;
    Ok(Json(investigador))
}

/// Create an investigator
#[utoipa::path(
    post,
    path = "/investigadores",
    tag = "investigadores",
    request_body = InvestigadorInput,
    responses(
        (status = 201, description = "Investigator created", body = Investigador),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_investigador(
    State(state): State<AppState>,
    ApiJson(data): ApiJson<InvestigadorInput>,
) -> AppResult<(StatusCode, Json<Investigador>)> {
    data.validate()?;
    let investigador = state.services.investigadores.create(&data).await?;
    Ok((StatusCode::CREATED, Json(investigador)))
}

/// Replace an investigator
#[utoipa::path(
    put,
    path = "/investigadores/{id}",
    tag = "investigadores",
    params(("id" = i32, Path, description = "Investigator ID")),
    request_body = InvestigadorInput,
    responses(
        (status = 200, description = "Investigator updated", body = Investigador),
        (status = 404, description = "Investigator not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_investigador(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(data): ApiJson<InvestigadorInput>,
) -> AppResult<Json<Investigador>> {
    data.validate()?;
    let investigador = state.services.investigadores.update(id, &data).await?;
    Ok(Json(investigador))
}

/// Delete an investigator and its links
#[utoipa::path(
    delete,
    path = "/investigadores/{id}",
    tag = "investigadores",
    params(("id" = i32, Path, description = "Investigator ID")),
    responses(
        (status = 204, description = "Investigator deleted (or did not exist)")
    )
)]
pub async fn delete_investigador(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> AppResult<StatusCode> {
    state.services.investigadores.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
