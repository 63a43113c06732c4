//! Group/investigator link service

use crate::{
    error::AppResult,
    models::detalle::{DetalleGrupoInvestigador, DetalleInput},
    repository::Repository,
};

#[derive(Clone)]
pub struct DetallesService {
    repository: Repository,
}

impl DetallesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<DetalleGrupoInvestigador> {
        self.repository.detalles.get_by_id(id).await
    }

    /// Links of a group; 404 when the group itself does not exist
    pub async fn list_by_grupo(&self, grupo_id: i32) -> AppResult<Vec<DetalleGrupoInvestigador>> {
        self.repository.grupos.get_by_id(grupo_id).await?;
        self.repository.detalles.list_by_grupo(grupo_id).await
    }

    pub async fn create(&self, data: &DetalleInput) -> AppResult<DetalleGrupoInvestigador> {
        self.repository.detalles.create(data).await
    }

    pub async fn update(&self, id: i32, data: &DetalleInput) -> AppResult<DetalleGrupoInvestigador> {
        self.repository.detalles.update(id, data).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.detalles.delete(id).await
    }
}
