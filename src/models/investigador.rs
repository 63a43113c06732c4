//! Investigador model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Investigator record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Investigador {
    pub id_investigador: i32,
    pub nombre: String,
    pub apellido: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create / full-replace request body.
///
/// Any `idInvestigador` in the body is ignored; the path ID wins on update.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct InvestigadorInput {
    #[validate(length(min = 1, message = "nombre is required"))]
    pub nombre: String,
    #[validate(length(min = 1, message = "apellido is required"))]
    pub apellido: String,
}

/// An investigator as seen from one group, annotated with its role there
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InvestigadorConRol {
    pub id_investigador: i32,
    pub nombre: String,
    pub apellido: String,
    pub rol: String,
}

/// Query parameters for the investigator listing
#[derive(Debug, Default, Deserialize)]
pub struct InvestigadorQuery {
    /// Substring of first or last name
    pub name: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}
