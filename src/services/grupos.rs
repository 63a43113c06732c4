//! Grupo service

use crate::{
    error::AppResult,
    models::{
        grupo::{CreateGrupoWithDetails, Grupo, GrupoInput, GrupoListing, GrupoWithInvestigadores},
        pagination::PageRequest,
    },
    repository::{search::GrupoSearch, Repository},
};

#[derive(Clone)]
pub struct GruposService {
    repository: Repository,
}

impl GruposService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Search groups, or list them all when no filter is given.
    ///
    /// Searching returns groups enriched with their investigators; the
    /// unfiltered listing does not.
    pub async fn list(
        &self,
        search: &GrupoSearch,
        page: PageRequest,
    ) -> AppResult<(GrupoListing, i64)> {
        if search.is_empty() {
            let (grupos, total) = self.repository.grupos.list(page).await?;
            Ok((GrupoListing::Plain(grupos), total))
        } else {
            let (grupos, total) = self.repository.grupos.search(search, page).await?;
            Ok((GrupoListing::Enriched(grupos), total))
        }
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Grupo> {
        self.repository.grupos.get_by_id(id).await
    }

    pub async fn get_details(&self, id: i32) -> AppResult<GrupoWithInvestigadores> {
        self.repository.grupos.get_details(id).await
    }

    /// Groups of an investigator; 404 when the investigator does not exist
    pub async fn list_by_investigador(
        &self,
        investigador_id: i32,
    ) -> AppResult<Vec<GrupoWithInvestigadores>> {
        self.repository.investigadores.get_by_id(investigador_id).await?;
        self.repository.grupos.list_by_investigador(investigador_id).await
    }

    pub async fn create(&self, data: &GrupoInput) -> AppResult<Grupo> {
        let created = self.repository.grupos.create(data).await?;
        tracing::info!("Created grupo {}", created.id_grupo);
        Ok(created)
    }

    pub async fn create_with_details(&self, data: &CreateGrupoWithDetails) -> AppResult<Grupo> {
        self.repository.grupos.create_with_details(data).await
    }

    pub async fn update(&self, id: i32, data: &GrupoInput) -> AppResult<Grupo> {
        self.repository.grupos.update(id, data).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.grupos.delete(id).await
    }
}
