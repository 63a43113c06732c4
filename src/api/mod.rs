//! API handlers for the grupos REST endpoints

pub mod detalles;
pub mod grupos;
pub mod health;
pub mod investigadores;
pub mod openapi;

use axum::{
    extract::{FromRequest, FromRequestParts},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{error::AppError, AppState};

/// JSON body extractor whose rejections use the common error body
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Path extractor whose rejections use the common error body
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);

/// Query extractor whose rejections use the common error body
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct ApiQuery<T>(pub T);

/// Create the application router with all routes
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Investigadores
        .route(
            "/investigadores",
            get(investigadores::list_investigadores).post(investigadores::create_investigador),
        )
        .route(
            "/investigadores/:id",
            get(investigadores::get_investigador)
                .put(investigadores::update_investigador)
                .delete(investigadores::delete_investigador),
        )
        .route(
            "/investigadores/:id/grupos",
            get(grupos::list_grupos_by_investigador),
        )
        // Grupos
        .route("/grupos", get(grupos::list_grupos).post(grupos::create_grupo))
        .route("/grupos/with-details", post(grupos::create_grupo_with_details))
        .route(
            "/grupos/:id",
            get(grupos::get_grupo)
                .put(grupos::update_grupo)
                .delete(grupos::delete_grupo),
        )
        .route("/grupos/:id/details", get(grupos::get_grupo_details))
        .route("/grupos/:id/detalles", get(detalles::list_detalles_by_grupo))
        // Detalles
        .route("/detalles", post(detalles::create_detalle))
        .route(
            "/detalles/:id",
            get(detalles::get_detalle)
                .put(detalles::update_detalle)
                .delete(detalles::delete_detalle),
        )
        .with_state(state);

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
