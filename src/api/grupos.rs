//! Grupo endpoints

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;
use validator::Validate;

use super::{ApiJson, ApiPath, ApiQuery};
use crate::{
    error::AppResult,
    models::{
        grupo::{
            CreateGrupoWithDetails, Grupo, GrupoInput, GrupoListing, GrupoSearchParams,
            GrupoWithInvestigadores,
        },
        pagination::{PageRequest, PaginationMeta},
    },
    repository::search::GrupoSearch,
    AppState,
};

/// Paginated group listing
#[derive(Serialize, ToSchema)]
pub struct GruposPage {
    pub data: GrupoListing,
    pub pagination: PaginationMeta,
}

/// List or search groups with pagination
#[utoipa::path(
    get,
    path = "/grupos",
    tag = "grupos",
    params(
        ("grupo" = Option<String>, Query, description = "Group name substring"),
        ("investigador" = Option<String>, Query, description = "Investigator first or last name substring"),
        ("año" = Option<i32>, Query, description = "Registration year"),
        ("lineaInvestigacion" = Option<String>, Query, description = "Research line substring"),
        ("tipoInvestigacion" = Option<String>, Query, description = "Research type substring"),
        ("page" = Option<i64>, Query, description = "Page number (default: 1)"),
        ("limit" = Option<i64>, Query, description = "Items per page (default: 10, max: 100)")
    ),
    responses(
        (status = 200, description = "Groups; enriched with investigators when any filter is given", body = GruposPage),
        (status = 400, description = "Invalid year", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_grupos(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<GrupoSearchParams>,
) -> AppResult<Json<GruposPage>> {
    let search = GrupoSearch::from_params(&params)?;
    let page = PageRequest::from_raw(params.page.as_deref(), params.limit.as_deref());

    let (data, total) = state.services.grupos.list(&search, page).await?;

    Ok(Json(GruposPage {
        data,
        pagination: PaginationMeta::new(page, total),
    }))
}

/// Get group by ID
#[utoipa::path(
    get,
    path = "/grupos/{id}",
    tag = "grupos",
    params(("id" = i32, Path, description = "Group ID")),
    responses(
        (status = 200, description = "Group", body = Grupo),
        (status = 404, description = "Group not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_grupo(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> AppResult<Json<Grupo>> {
    let grupo = state.services.grupos.get_by_id(id).await?;
    Ok(Json(grupo))
}

/// Get group with its investigators and their roles
#[utoipa::path(
    get,
    path = "/grupos/{id}/details",
    tag = "grupos",
    params(("id" = i32, Path, description = "Group ID")),
    responses(
        (status = 200, description = "Group with investigators", body = GrupoWithInvestigadores),
        (status = 404, description = "Group not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_grupo_details(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> AppResult<Json<GrupoWithInvestigadores>> {
    let details = state.services.grupos.get_details(id).await?;
    Ok(Json(details))
}

/// Groups an investigator belongs to
#[utoipa::path(
    get,
    path = "/investigadores/{id}/grupos",
    tag = "grupos",
    params(("id" = i32, Path, description = "Investigator ID")),
    responses(
        (status = 200, description = "Groups with their members", body = Vec<GrupoWithInvestigadores>),
        (status = 404, description = "Investigator not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_grupos_by_investigador(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> AppResult<Json<Vec<GrupoWithInvestigadores>>> {
    let grupos = state.services.grupos.list_by_investigador(id).await?;
    Ok(Json(grupos))
}

/// Create a group
#[utoipa::path(
    post,
    path = "/grupos",
    tag = "grupos",
    request_body = GrupoInput,
    responses(
        (status = 201, description = "Group created", body = Grupo),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_grupo(
    State(state): State<AppState>,
    ApiJson(data): ApiJson<GrupoInput>,
) -> AppResult<(StatusCode, Json<Grupo>)> {
    data.validate()?;
    let grupo = state.services.grupos.create(&data).await?;
    Ok((StatusCode::CREATED, Json(grupo)))
}

/// Create a group and its investigator links in one transaction
#[utoipa::path(
    post,
    path = "/grupos/with-details",
    tag = "grupos",
    request_body = CreateGrupoWithDetails,
    responses(
        (status = 201, description = "Group and links created", body = Grupo),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse),
        (status = 500, description = "Nothing was created", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_grupo_with_details(
    State(state): State<AppState>,
    ApiJson(data): ApiJson<CreateGrupoWithDetails>,
) -> AppResult<(StatusCode, Json<Grupo>)> {
    data.validate()?;
    let grupo = state.services.grupos.create_with_details(&data).await?;
    Ok((StatusCode::CREATED, Json(grupo)))
}

/// Replace a group
#[utoipa::path(
    put,
    path = "/grupos/{id}",
    tag = "grupos",
    params(("id" = i32, Path, description = "Group ID")),
    request_body = GrupoInput,
    responses(
        (status = 200, description = "Group updated", body = Grupo),
        (status = 404, description = "Group not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_grupo(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(data): ApiJson<GrupoInput>,
) -> AppResult<Json<Grupo>> {
    data.validate()?;
    let grupo = state.services.grupos.update(id, &data).await?;
    Ok(Json(grupo))
}

/// Delete a group and its links
#[utoipa::path(
    delete,
    path = "/grupos/{id}",
    tag = "grupos",
    params(("id" = i32, Path, description = "Group ID")),
    responses(
        (status = 204, description = "Group deleted (or did not exist)")
    )
)]
pub async fn delete_grupo(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> AppResult<StatusCode> {
    state.services.grupos.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
