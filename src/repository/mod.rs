//! Repository layer for database operations

pub mod detalles;
pub mod grupos;
pub mod investigadores;
pub mod search;

use sqlx::{Pool, Postgres};

use crate::error::AppResult;

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub grupos: grupos::GruposRepository,
    pub investigadores: investigadores::InvestigadoresRepository,
    pub detalles: detalles::DetallesRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            grupos: grupos::GruposRepository::new(pool.clone()),
            investigadores: investigadores::InvestigadoresRepository::new(pool.clone()),
            detalles: detalles::DetallesRepository::new(pool.clone()),
            pool,
        }
    }

    /// Round-trip to the database
    pub async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
