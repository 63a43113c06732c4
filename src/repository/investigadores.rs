//! Investigadores repository

use sqlx::{Pool, Postgres};

use super::search::contains_pattern;
use crate::{
    error::{AppError, AppResult},
    models::{
        investigador::{Investigador, InvestigadorInput},
        pagination::PageRequest,
    },
};

#[derive(Clone)]
pub struct InvestigadoresRepository {
    pool: Pool<Postgres>,
}

impl InvestigadoresRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List investigators, optionally filtered by a first/last name substring
    pub async fn list(
        &self,
        name: Option<&str>,
        page: PageRequest,
    ) -> AppResult<(Vec<Investigador>, i64)> {
        let pattern = contains_pattern(name);

        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM investigador
            WHERE $1::text IS NULL
               OR lower(unaccent(nombre)) LIKE lower(unaccent($1))
               OR lower(unaccent(apellido)) LIKE lower(unaccent($1))
            "#,
        )
        .bind(&pattern)
        .fetch_one(&self.pool)
        .await?;

        let rows = sqlx::query_as::<_, Investigador>(
            r#"
            SELECT * FROM investigador
            WHERE $1::text IS NULL
               OR lower(unaccent(nombre)) LIKE lower(unaccent($1))
               OR lower(unaccent(apellido)) LIKE lower(unaccent($1))
            ORDER BY id_investigador
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(&pattern)
        .bind(page.limit)
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;

        Ok((rows, total))
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Investigador> {
        sqlx::query_as::<_, Investigador>("SELECT * FROM investigador WHERE id_investigador = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Investigador {} not found", id)))
    }

    pub async fn create(&self, data: &InvestigadorInput) -> AppResult<Investigador> {
        let row = sqlx::query_as::<_, Investigador>(
            r#"
            INSERT INTO investigador (nombre, apellido)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(&data.nombre)
        .bind(&data.apellido)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Replace all mutable fields
    pub async fn update(&self, id: i32, data: &InvestigadorInput) -> AppResult<Investigador> {
        sqlx::query_as::<_, Investigador>(
            r#"
            UPDATE investigador
            SET nombre = $1, apellido = $2, updated_at = NOW()
            WHERE id_investigador = $3
            RETURNING *
            "#,
        )
        .bind(&data.nombre)
        .bind(&data.apellido)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Investigador {} not found", id)))
    }

    /// Delete an investigator; its links go with it. Missing IDs are not an error.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM investigador WHERE id_investigador = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            tracing::debug!("Delete of investigador {} affected no rows", id);
        }
        Ok(())
    }
}
