//! Group/investigator link repository

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::detalle::{DetalleGrupoInvestigador, DetalleInput},
};

#[derive(Clone)]
pub struct DetallesRepository {
    pool: Pool<Postgres>,
}

impl DetallesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<DetalleGrupoInvestigador> {
        sqlx::query_as::<_, DetalleGrupoInvestigador>(
            "SELECT * FROM detalle_grupo_investigador WHERE id_detalle_gi = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Detalle {} not found", id)))
    }

    /// All links of one group, by investigator
    pub async fn list_by_grupo(&self, grupo_id: i32) -> AppResult<Vec<DetalleGrupoInvestigador>> {
        let rows = sqlx::query_as::<_, DetalleGrupoInvestigador>(
            r#"
            SELECT * FROM detalle_grupo_investigador
            WHERE id_grupo = $1
            ORDER BY id_investigador, id_detalle_gi
            "#,
        )
        .bind(grupo_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn create(&self, data: &DetalleInput) -> AppResult<DetalleGrupoInvestigador> {
        let row = sqlx::query_as::<_, DetalleGrupoInvestigador>(
            r#"
            INSERT INTO detalle_grupo_investigador (id_grupo, id_investigador, tipo_relacion)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(data.id_grupo)
        .bind(data.id_investigador)
        .bind(&data.tipo_relacion)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn update(&self, id: i32, data: &DetalleInput) -> AppResult<DetalleGrupoInvestigador> {
        sqlx::query_as::<_, DetalleGrupoInvestigador>(
            r#"
            UPDATE detalle_grupo_investigador
            SET id_grupo = $1, id_investigador = $2, tipo_relacion = $3, updated_at = NOW()
            WHERE id_detalle_gi = $4
            RETURNING *
            "#,
        )
        .bind(data.id_grupo)
        .bind(data.id_investigador)
        .bind(&data.tipo_relacion)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Detalle {} not found", id)))
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM detalle_grupo_investigador WHERE id_detalle_gi = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            tracing::debug!("Delete of detalle {} affected no rows", id);
        }
        Ok(())
    }
}
