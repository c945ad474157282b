//! # Exoplanet Archive Service
//!
//! Table queries against the archive's nstedAPI. Each table is its own
//! registered operation so its `table` default travels with it.

use crate::core::error::NasaError;
use crate::registry::operations::{EXOPLANETS_CUMULATIVE, EXOPLANETS_K2, EXOPLANETS_KEPLER, EXOPLANETS_TESS};
use crate::retrieve::dispatcher::Dispatcher;
use crate::retrieve::envelope::ResponseEnvelope;
use crate::retrieve::params::{PathParams, QueryParams};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExoplanetTable {
    /// Kepler cumulative KOI table.
    Cumulative,
    KeplerCandidates,
    /// TESS Input Catalog v8.
    Tess,
    K2Candidates,
}

impl ExoplanetTable {
    pub fn operation(&self) -> &'static str {
        match self {
            ExoplanetTable::Cumulative => EXOPLANETS_CUMULATIVE,
            ExoplanetTable::KeplerCandidates => EXOPLANETS_KEPLER,
            ExoplanetTable::Tess => EXOPLANETS_TESS,
            ExoplanetTable::K2Candidates => EXOPLANETS_K2,
        }
    }
}

/// Column selection and filtering; `None` keeps the archive's behavior
/// (`select=*`, no filter, natural order).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExoplanetQuery {
    pub select: Option<String>,
    pub where_clause: Option<String>,
    pub order: Option<String>,
}

pub struct ExoplanetsService {
    dispatcher: Dispatcher,
}

impl ExoplanetsService {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Queries one archive table.
    ///
    /// # Arguments
    /// * `table` - The [`ExoplanetTable`] to read.
    /// * `query` - Overrides for `select`, `where` and `order`.
    pub async fn table(&self, table: ExoplanetTable, query: &ExoplanetQuery) -> Result<ResponseEnvelope, NasaError> {
        let params = QueryParams::new()
            .with_opt("select", query.select.as_deref())
            .with_opt("where", query.where_clause.as_deref())
            .with_opt("order", query.order.as_deref());
        self.dispatcher.send(table.operation(), &PathParams::new(), &params).await
    }
}
