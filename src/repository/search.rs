//! Group search filter.
//!
//! Filters are accumulated as typed predicates and rendered onto a
//! `QueryBuilder`, so every user value travels as a bound parameter. The
//! rendered clause expects the group table to be aliased `g`.
//!
//! Text matching is case and accent insensitive. Both sides go through
//! `lower(unaccent(..))` in PostgreSQL; the term is only NFC-composed here,
//! since `unaccent` rules match precomposed letters.

use sqlx::{Postgres, QueryBuilder};
use unicode_normalization::UnicodeNormalization;

use crate::{
    error::{AppError, AppResult},
    models::grupo::GrupoSearchParams,
};

/// Trim and compose `s` ("e" + U+0301 -> "é"); case and accents are left to the database
pub fn normalize_term(s: &str) -> String {
    s.trim().nfc().collect()
}

/// `%term%` with LIKE metacharacters escaped
pub fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// Escaped LIKE pattern for a raw user term; `None` when blank.
///
/// The pattern must be compared as `LIKE lower(unaccent($n))`.
pub fn contains_pattern(raw: Option<&str>) -> Option<String> {
    raw.map(normalize_term)
        .filter(|s| !s.is_empty())
        .map(|s| like_pattern(&s))
}

const FOLD_OPEN: &str = "lower(unaccent(";
const FOLD_CLOSE: &str = "))";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    GroupName(String),
    /// Matches if any linked investigator's first or last name matches
    InvestigatorName(String),
    Year(i32),
    ResearchLine(String),
    ResearchType(String),
}

impl Predicate {
    fn push_to(&self, qb: &mut QueryBuilder<'_, Postgres>) {
        match self {
            Predicate::GroupName(pattern) => {
                push_folded_like(qb, "g.nombre", pattern);
            }
            Predicate::InvestigatorName(pattern) => {
                qb.push(
                    "EXISTS (SELECT 1 FROM detalle_grupo_investigador d \
                     JOIN investigador i ON i.id_investigador = d.id_investigador \
                     WHERE d.id_grupo = g.id_grupo AND (",
                );
                push_folded_like(qb, "i.nombre", pattern);
                qb.push(" OR ");
                push_folded_like(qb, "i.apellido", pattern);
                qb.push("))");
            }
            Predicate::Year(year) => {
                qb.push("CAST(EXTRACT(YEAR FROM g.fecha_registro) AS INTEGER) = ")
                    .push_bind(*year);
            }
            Predicate::ResearchLine(pattern) => {
                push_folded_like(qb, "g.linea_investigacion", pattern);
            }
            Predicate::ResearchType(pattern) => {
                push_folded_like(qb, "g.tipo_investigacion", pattern);
            }
        }
    }
}

/// `lower(unaccent(column)) LIKE lower(unaccent($n))`
fn push_folded_like(qb: &mut QueryBuilder<'_, Postgres>, column: &str, pattern: &str) {
    qb.push(FOLD_OPEN)
        .push(column)
        .push(FOLD_CLOSE)
        .push(" LIKE ")
        .push(FOLD_OPEN)
        .push_bind(pattern.to_string())
        .push(FOLD_CLOSE);
}

/// AND-combination of group predicates
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GrupoSearch {
    predicates: Vec<Predicate>,
}

impl GrupoSearch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the filter from raw query parameters.
    ///
    /// Blank values are ignored. A year that is not an integer is rejected.
    pub fn from_params(params: &GrupoSearchParams) -> AppResult<Self> {
        let year = match params.anio.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => Some(raw.parse::<i32>().map_err(|_| {
                AppError::BadRequest(format!("Invalid year: {}", raw))
            })?),
            _ => None,
        };

        Ok(Self::new()
            .group_name(params.grupo.as_deref())
            .investigator_name(params.investigador.as_deref())
            .year(year)
            .research_line(params.linea_investigacion.as_deref())
            .research_type(params.tipo_investigacion.as_deref()))
    }

    pub fn group_name(mut self, term: Option<&str>) -> Self {
        if let Some(pattern) = contains_pattern(term) {
            self.predicates.push(Predicate::GroupName(pattern));
        }
        self
    }

    pub fn investigator_name(mut self, term: Option<&str>) -> Self {
        if let Some(pattern) = contains_pattern(term) {
            self.predicates.push(Predicate::InvestigatorName(pattern));
        }
        self
    }

    pub fn year(mut self, year: Option<i32>) -> Self {
        if let Some(year) = year {
            self.predicates.push(Predicate::Year(year));
        }
        self
    }

    pub fn research_line(mut self, term: Option<&str>) -> Self {
        if let Some(pattern) = contains_pattern(term) {
            self.predicates.push(Predicate::ResearchLine(pattern));
        }
        self
    }

    pub fn research_type(mut self, term: Option<&str>) -> Self {
        if let Some(pattern) = contains_pattern(term) {
            self.predicates.push(Predicate::ResearchType(pattern));
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    /// Append ` WHERE p1 AND p2 ...`; appends nothing when there are no predicates
    pub fn push_where(&self, qb: &mut QueryBuilder<'_, Postgres>) {
        for (i, predicate) in self.predicates.iter().enumerate() {
            qb.push(if i == 0 { " WHERE " } else { " AND " });
            predicate.push_to(qb);
        }
    }
}
