//! Grupos de Investigación server
//!
//! REST JSON API managing research groups, investigators and the roles
//! linking them, with filtered paginated search and a transactional
//! group-with-members creation.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use crate::config::AppConfig;
pub use crate::error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<services::Services>,
}
