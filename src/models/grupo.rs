//! Grupo model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::investigador::InvestigadorConRol;

/// Research group record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Grupo {
    pub id_grupo: i32,
    pub nombre: String,
    pub numero_resolucion: String,
    pub linea_investigacion: String,
    pub tipo_investigacion: String,
    /// Registration date (YYYY-MM-DD)
    pub fecha_registro: NaiveDate,
    /// Attachment reference
    pub archivo: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create / full-replace request body for a group
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GrupoInput {
    #[validate(length(min = 1, message = "nombre is required"))]
    pub nombre: String,
    #[validate(length(min = 1, message = "numeroResolucion is required"))]
    pub numero_resolucion: String,
    #[validate(length(min = 1, message = "lineaInvestigacion is required"))]
    pub linea_investigacion: String,
    #[validate(length(min = 1, message = "tipoInvestigacion is required"))]
    pub tipo_investigacion: String,
    pub fecha_registro: NaiveDate,
    #[serde(default)]
    pub archivo: String,
}

/// One (investigator, role) pair of a composite create
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InvestigadorRelacion {
    #[validate(range(min = 1, message = "idInvestigador must be positive"))]
    pub id_investigador: i32,
    #[validate(length(min = 1, message = "tipoRelacion is required"))]
    pub tipo_relacion: String,
}

/// Body of `POST /grupos/with-details`
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateGrupoWithDetails {
    #[validate(nested)]
    pub grupo: GrupoInput,
    #[serde(default)]
    #[validate(nested)]
    pub investigadores: Vec<InvestigadorRelacion>,
}

/// A group together with every investigator linked to it
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct GrupoWithInvestigadores {
    pub grupo: Grupo,
    pub investigadores: Vec<InvestigadorConRol>,
}

/// Page content of the group listing: plain when unfiltered, enriched when searching
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(untagged)]
pub enum GrupoListing {
    Plain(Vec<Grupo>),
    Enriched(Vec<GrupoWithInvestigadores>),
}

/// Raw query parameters of `GET /grupos`.
///
/// Everything arrives as text so that bad paging values fall back to defaults
/// instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrupoSearchParams {
    /// Group name substring
    pub grupo: Option<String>,
    /// Investigator first or last name substring
    pub investigador: Option<String>,
    /// Registration year
    #[serde(rename = "año", alias = "anio")]
    pub anio: Option<String>,
    pub linea_investigacion: Option<String>,
    pub tipo_investigacion: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn grupo() -> Grupo {
        let at = DateTime::<Utc>::default();
        Grupo {
            id_grupo: 7,
            nombre: "Robótica".to_string(),
            numero_resolucion: "RES-7".to_string(),
            linea_investigacion: "Control".to_string(),
            tipo_investigacion: "Aplicada".to_string(),
            fecha_registro: NaiveDate::from_ymd_opt(2023, 4, 10).unwrap(),
            archivo: String::new(),
            created_at: at,
            updated_at: at,
        }
    }

    #[test]
    fn test_listing_serializes_as_bare_array() {
        let plain = serde_json::to_value(GrupoListing::Plain(vec![grupo()])).unwrap();
        assert_eq!(plain[0]["idGrupo"], 7);
        assert_eq!(plain[0]["fechaRegistro"], "2023-04-10");

        let enriched = serde_json::to_value(GrupoListing::Enriched(vec![GrupoWithInvestigadores {
            grupo: grupo(),
            investigadores: vec![],
        }]))
        .unwrap();
        assert_eq!(enriched[0]["grupo"]["idGrupo"], 7);
        assert_eq!(enriched[0]["investigadores"], json!([]));
    }
}
