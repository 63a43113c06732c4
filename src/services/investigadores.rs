//! Investigador service

use crate::{
    error::AppResult,
    models::{
        investigador::{Investigador, InvestigadorInput},
        pagination::PageRequest,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct InvestigadoresService {
    repository: Repository,
}

impl InvestigadoresService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(
        &self,
        name: Option<&str>,
        page: PageRequest,
    ) -> AppResult<(Vec<Investigador>, i64)> {
        self.repository.investigadores.list(name, page).await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Investigador> {
        self.repository.investigadores.get_by_id(id).await
    }

    pub async fn create(&self, data: &InvestigadorInput) -> AppResult<Investigador> {
        let created = self.repository.investigadores.create(data).await?;
        tracing::info!("Created investigador {}", created.id_investigador);
        Ok(created)
    }

    pub async fn update(&self, id: i32, data: &InvestigadorInput) -> AppResult<Investigador> {
        self.repository.investigadores.update(id, data).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.investigadores.delete(id).await
    }
}
