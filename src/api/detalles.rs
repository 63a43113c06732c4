//! Group/investigator link endpoints

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use super::{ApiJson, ApiPath};
use crate::{
    error::AppResult,
    models::detalle::{DetalleGrupoInvestigador, DetalleInput},
    AppState,
};

/// Links of one group
#[utoipa::path(
    get,
    path = "/grupos/{id}/detalles",
    tag = "detalles",
    params(("id" = i32, Path, description = "Group ID")),
    responses(
        (status = 200, description = "Links of the group", body = Vec<DetalleGrupoInvestigador>),
        (status = 404, description = "Group not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_detalles_by_grupo(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> AppResult<Json<Vec<DetalleGrupoInvestigador>>> {
    let detalles = state.services.detalles.list_by_grupo(id).await?;
    Ok(Json(detalles))
}

/// Get link by ID
#[utoipa::path(
    get,
    path = "/detalles/{id}",
    tag = "detalles",
    params(("id" = i32, Path, description = "Link ID")),
    responses(
        (status = 200, description = "Link", body = DetalleGrupoInvestigador),
        (status = 404, description = "Link not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_detalle(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> AppResult<Json<DetalleGrupoInvestigador>> {
    let detalle = state.services.detalles.get_by_id(id).await?;
    Ok(Json(detalle))
}

/// Link an investigator to a group
#[utoipa::path(
    post,
    path = "/detalles",
    tag = "detalles",
    request_body = DetalleInput,
    responses(
        (status = 201, description = "Link created", body = DetalleGrupoInvestigador),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_detalle(
    State(state): State<AppState>,
    ApiJson(data): ApiJson<DetalleInput>,
) -> AppResult<(StatusCode, Json<DetalleGrupoInvestigador>)> {
    data.validate()?;
    let detalle = state.services.detalles.create(&data).await?;
    Ok((StatusCode::CREATED, Json(detalle)))
}

/// Replace a link
#[utoipa::path(
    put,
    path = "/detalles/{id}",
    tag = "detalles",
    params(("id" = i32, Path, description = "Link ID")),
    request_body = DetalleInput,
    responses(
        (status = 200, description = "Link updated", body = DetalleGrupoInvestigador),
        (status = 404, description = "Link not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_detalle(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(data): ApiJson<DetalleInput>,
) -> AppResult<Json<DetalleGrupoInvestigador>> {
    data.validate()?;
    let detalle = state.services.detalles.update(id, &data).await?;
    Ok(Json(detalle))
}

/// Delete a link
#[utoipa::path(
    delete,
    path = "/detalles/{id}",
    tag = "detalles",
    params(("id" = i32, Path, description = "Link ID")),
    responses(
        (status = 204, description = "Link deleted (or did not exist)")
    )
)]
pub async fn delete_detalle(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> AppResult<StatusCode> {
    state.services.detalles.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
