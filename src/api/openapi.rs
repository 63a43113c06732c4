//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{detalles, grupos, health, investigadores};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Grupos API",
        version = "1.0.0",
        description = "Research groups and investigators REST API"
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Investigadores
        investigadores::list_investigadores,
        investigadores::get_investigador,
        investigadores::create_investigador,
        investigadores::update_investigador,
        investigadores::delete_investigador,
        // Grupos
        grupos::list_grupos,
        grupos::get_grupo,
        grupos::get_grupo_details,
        grupos::list_grupos_by_investigador,
        grupos::create_grupo,
        grupos::create_grupo_with_details,
        grupos::update_grupo,
        grupos::delete_grupo,
        // Detalles
        detalles::list_detalles_by_grupo,
        detalles::get_detalle,
        detalles::create_detalle,
        detalles::update_detalle,
        detalles::delete_detalle,
    ),
    components(
        schemas(
            // Investigadores
            crate::models::investigador::Investigador,
            crate::models::investigador::InvestigadorInput,
            crate::models::investigador::InvestigadorConRol,
            investigadores::InvestigadoresPage,
            // Grupos
            crate::models::grupo::Grupo,
            crate::models::grupo::GrupoInput,
            crate::models::grupo::InvestigadorRelacion,
            crate::models::grupo::CreateGrupoWithDetails,
            crate::models::grupo::GrupoWithInvestigadores,
            crate::models::grupo::GrupoListing,
            grupos::GruposPage,
            // Detalles
            crate::models::detalle::DetalleGrupoInvestigador,
            crate::models::detalle::DetalleInput,
            // Pagination
            crate::models::pagination::PaginationMeta,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "investigadores", description = "Investigator management"),
        (name = "grupos", description = "Research group management and search"),
        (name = "detalles", description = "Group membership links")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
