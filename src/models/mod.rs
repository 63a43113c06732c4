//! Data models for research groups and investigators

pub mod detalle;
pub mod grupo;
pub mod investigador;
pub mod pagination;

pub use detalle::{DetalleGrupoInvestigador, DetalleInput};
pub use grupo::{
    CreateGrupoWithDetails, Grupo, GrupoInput, GrupoListing, GrupoSearchParams,
    GrupoWithInvestigadores, InvestigadorRelacion,
};
pub use investigador::{Investigador, InvestigadorConRol, InvestigadorInput, InvestigadorQuery};
pub use pagination::{PageRequest, PaginationMeta};
