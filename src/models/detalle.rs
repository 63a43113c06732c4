//! Group/investigator link model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Link between one group and one investigator, carrying the role
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DetalleGrupoInvestigador {
    #[serde(rename = "idDetalleGI")]
    pub id_detalle_gi: i32,
    pub id_grupo: i32,
    pub id_investigador: i32,
    /// Role of the investigator in the group (e.g. "leader", "member")
    pub tipo_relacion: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DetalleInput {
    #[validate(range(min = 1, message = "idGrupo must be positive"))]
    pub id_grupo: i32,
    #[validate(range(min = 1, message = "idInvestigador must be positive"))]
    pub id_investigador: i32,
    #[validate(length(min = 1, message = "tipoRelacion is required"))]
    pub tipo_relacion: String,
}
