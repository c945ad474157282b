//! # Antarctic Meteorite Catalog Service

use crate::core::error::NasaError;
use crate::registry::operations::{METEORITES_LIST, METEORITES_ONE};
use crate::retrieve::dispatcher::Dispatcher;
use crate::retrieve::envelope::ResponseEnvelope;
use crate::retrieve::params::{PathParams, QueryParams};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeteoriteSearch {
    pub search: Option<String>,
    /// Classification such as `H5` or `LL6`.
    pub meteorite_type: Option<String>,
    pub year_found: Option<i32>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

pub struct MeteoritesService {
    dispatcher: Dispatcher,
}

impl MeteoritesService {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Searches the Antarctic meteorite catalog.
    ///
    /// # Arguments
    /// * `search` - A [`MeteoriteSearch`]; `limit` defaults to 20.
    pub async fn meteorites(&self, search: &MeteoriteSearch) -> Result<ResponseEnvelope, NasaError> {
        let query = QueryParams::new()
            .with_opt("search", search.search.as_deref())
            .with_opt("meteorite_type", search.meteorite_type.as_deref())
            .with_opt("year_found", search.year_found)
            .with_opt("page", search.page)
            .with_opt("limit", search.limit);
        self.dispatcher.send(METEORITES_LIST, &PathParams::new(), &query).await
    }

    pub async fn meteorite(&self, meteorite_id: &str) -> Result<ResponseEnvelope, NasaError> {
        let path = PathParams::new().with("meteorite_id", meteorite_id);
        self.dispatcher.send(METEORITES_ONE, &path, &QueryParams::new()).await
    }
}
