//! Grupos repository: CRUD, member enrichment, search and the
//! transactional create-with-details.

use std::collections::HashMap;

use sqlx::{postgres::PgExecutor, FromRow, Pool, Postgres, QueryBuilder, Transaction};

use super::search::GrupoSearch;
use crate::{
    error::{AppError, AppResult},
    models::{
        grupo::{CreateGrupoWithDetails, Grupo, GrupoInput, GrupoWithInvestigadores},
        investigador::InvestigadorConRol,
        pagination::PageRequest,
    },
};

/// One member row of the group/link/investigator join
#[derive(Debug, Clone, FromRow)]
pub(crate) struct MiembroRow {
    pub id_grupo: i32,
    pub id_investigador: i32,
    pub nombre: String,
    pub apellido: String,
    pub rol: String,
}

impl From<MiembroRow> for InvestigadorConRol {
    fn from(row: MiembroRow) -> Self {
        Self {
            id_investigador: row.id_investigador,
            nombre: row.nombre,
            apellido: row.apellido,
            rol: row.rol,
        }
    }
}

/// Attach member rows to their groups, keeping both input orders.
/// Groups without rows get an empty member list.
pub(crate) fn group_members(
    grupos: Vec<Grupo>,
    rows: Vec<MiembroRow>,
) -> Vec<GrupoWithInvestigadores> {
    let mut by_grupo: HashMap<i32, Vec<InvestigadorConRol>> = HashMap::new();
    for row in rows {
        by_grupo.entry(row.id_grupo).or_default().push(row.into());
    }

    grupos
        .into_iter()
        .map(|grupo| {
            let investigadores = by_grupo.remove(&grupo.id_grupo).unwrap_or_default();
            GrupoWithInvestigadores {
                grupo,
                investigadores,
            }
        })
        .collect()
}

async fn insert_grupo<'e, E>(executor: E, data: &GrupoInput) -> Result<Grupo, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, Grupo>(
        r#"
        INSERT INTO grupo (
            nombre, numero_resolucion, linea_investigacion,
            tipo_investigacion, fecha_registro, archivo
        ) VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(&data.nombre)
    .bind(&data.numero_resolucion)
    .bind(&data.linea_investigacion)
    .bind(&data.tipo_investigacion)
    .bind(data.fecha_registro)
    .bind(&data.archivo)
    .fetch_one(executor)
    .await
}

#[derive(Clone)]
pub struct GruposRepository {
    pool: Pool<Postgres>,
}

impl GruposRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    // =========================================================================
    // READ
    // =========================================================================

    /// Plain paginated listing, no member enrichment
    pub async fn list(&self, page: PageRequest) -> AppResult<(Vec<Grupo>, i64)> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM grupo")
            .fetch_one(&self.pool)
            .await?;

        let rows = sqlx::query_as::<_, Grupo>(
            "SELECT * FROM grupo ORDER BY id_grupo LIMIT $1 OFFSET $2",
        )
        .bind(page.limit)
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;

        Ok((rows, total))
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Grupo> {
        sqlx::query_as::<_, Grupo>("SELECT * FROM grupo WHERE id_grupo = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Grupo {} not found", id)))
    }

    /// Group with all of its investigators and their roles
    pub async fn get_details(&self, id: i32) -> AppResult<GrupoWithInvestigadores> {
        let grupo = self.get_by_id(id).await?;
        self.with_members(vec![grupo])
            .await?
            .pop()
            .ok_or_else(|| AppError::Internal(format!("Grupo {} lost during enrichment", id)))
    }

    /// Every group the investigator belongs to, each with its full member list
    pub async fn list_by_investigador(
        &self,
        investigador_id: i32,
    ) -> AppResult<Vec<GrupoWithInvestigadores>> {
        let grupos = sqlx::query_as::<_, Grupo>(
            r#"
            SELECT g.* FROM grupo g
            WHERE EXISTS (
                SELECT 1 FROM detalle_grupo_investigador d
                WHERE d.id_grupo = g.id_grupo AND d.id_investigador = $1
            )
            ORDER BY g.id_grupo
            "#,
        )
        .bind(investigador_id)
        .fetch_all(&self.pool)
        .await?;

        self.with_members(grupos).await
    }

    /// Load members of the given groups, ordered by investigator
    async fn with_members(&self, grupos: Vec<Grupo>) -> AppResult<Vec<GrupoWithInvestigadores>> {
        if grupos.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i32> = grupos.iter().map(|g| g.id_grupo).collect();
        let rows = sqlx::query_as::<_, MiembroRow>(
            r#"
            SELECT d.id_grupo, i.id_investigador, i.nombre, i.apellido,
                   d.tipo_relacion AS rol
            FROM detalle_grupo_investigador d
            JOIN investigador i ON i.id_investigador = d.id_investigador
            WHERE d.id_grupo = ANY($1)
            ORDER BY d.id_grupo, i.id_investigador, d.id_detalle_gi
            "#,
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(group_members(grupos, rows))
    }

    // =========================================================================
    // SEARCH
    // =========================================================================

    /// Filtered, paginated search returning enriched groups.
    ///
    /// The total is the number of distinct matching groups, independent of
    /// the page window.
    pub async fn search(
        &self,
        search: &GrupoSearch,
        page: PageRequest,
    ) -> AppResult<(Vec<GrupoWithInvestigadores>, i64)> {
        let mut count = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM grupo g");
        search.push_where(&mut count);
        let total: i64 = count.build_query_scalar().fetch_one(&self.pool).await?;

        let mut select = QueryBuilder::<Postgres>::new("SELECT g.* FROM grupo g");
        search.push_where(&mut select);
        select
            .push(" ORDER BY g.id_grupo LIMIT ")
            .push_bind(page.limit)
            .push(" OFFSET ")
            .push_bind(page.offset());

        let grupos: Vec<Grupo> = select.build_query_as().fetch_all(&self.pool).await?;
        tracing::debug!(
            "Group search matched {} groups, returning {} (page {})",
            total,
            grupos.len(),
            page.page
        );

        Ok((self.with_members(grupos).await?, total))
    }

    // =========================================================================
    // CREATE
    // =========================================================================

    pub async fn create(&self, data: &GrupoInput) -> AppResult<Grupo> {
        Ok(insert_grupo(&self.pool, data).await?)
    }

    /// Insert a group and all of its links as one unit.
    ///
    /// Either every row is committed or none is: any failure rolls the
    /// transaction back before the error is returned. Dropping the
    /// transaction on an early exit also rolls it back.
    pub async fn create_with_details(&self, data: &CreateGrupoWithDetails) -> AppResult<Grupo> {
        let mut tx = self.pool.begin().await?;

        match Self::insert_with_links(&mut tx, data).await {
            Ok(grupo) => {
                tx.commit().await?;
                tracing::info!(
                    "Created grupo {} with {} investigadores",
                    grupo.id_grupo,
                    data.investigadores.len()
                );
                Ok(grupo)
            }
            Err(e) => {
                tracing::warn!("Rolling back grupo creation: {}", e);
                if let Err(rollback_err) = tx.rollback().await {
                    tracing::error!("Rollback failed: {:?}", rollback_err);
                }
                Err(e.into())
            }
        }
    }

    async fn insert_with_links(
        tx: &mut Transaction<'_, Postgres>,
        data: &CreateGrupoWithDetails,
    ) -> Result<Grupo, sqlx::Error> {
        let grupo = insert_grupo(&mut **tx, &data.grupo).await?;

        for relacion in &data.investigadores {
            sqlx::query(
                r#"
                INSERT INTO detalle_grupo_investigador (id_grupo, id_investigador, tipo_relacion)
                VALUES ($1, $2, $3)
                "#,
            )
            .bind(grupo.id_grupo)
            .bind(relacion.id_investigador)
            .bind(&relacion.tipo_relacion)
            .execute(&mut **tx)
            .await?;
        }

        Ok(grupo)
    }

    // =========================================================================
    // UPDATE / DELETE
    // =========================================================================

    /// Replace all mutable fields
    pub async fn update(&self, id: i32, data: &GrupoInput) -> AppResult<Grupo> {
        sqlx::query_as::<_, Grupo>(
            r#"
            UPDATE grupo SET
                nombre = $1,
                numero_resolucion = $2,
                linea_investigacion = $3,
                tipo_investigacion = $4,
                fecha_registro = $5,
                archivo = $6,
                updated_at = NOW()
            WHERE id_grupo = $7
            RETURNING *
            "#,
        )
        .bind(&data.nombre)
        .bind(&data.numero_resolucion)
        .bind(&data.linea_investigacion)
        .bind(&data.tipo_investigacion)
        .bind(data.fecha_registro)
        .bind(&data.archivo)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Grupo {} not found", id)))
    }

    /// Delete a group; its links go with it. Missing IDs are not an error.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM grupo WHERE id_grupo = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            tracing::debug!("Delete of grupo {} affected no rows", id);
        }
        Ok(())
    }
}
