//! Business logic services

pub mod detalles;
pub mod grupos;
pub mod investigadores;

use crate::{error::AppResult, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    repository: Repository,
    pub grupos: grupos::GruposService,
    pub investigadores: investigadores::InvestigadoresService,
    pub detalles: detalles::DetallesService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            grupos: grupos::GruposService::new(repository.clone()),
            investigadores: investigadores::InvestigadoresService::new(repository.clone()),
            detalles: detalles::DetallesService::new(repository.clone()),
            repository,
        }
    }

    /// Used by the readiness probe
    pub async fn check_database(&self) -> AppResult<()> {
        self.repository.ping().await
    }
}
