//! # Lunar Sample Catalog Service

use crate::core::error::NasaError;
use crate::registry::operations::{LUNAR_SAMPLE, LUNAR_SAMPLES};
use crate::retrieve::dispatcher::Dispatcher;
use crate::retrieve::envelope::ResponseEnvelope;
use crate::retrieve::params::{PathParams, QueryParams};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleSearch {
    pub search: Option<String>,
    /// e.g. `basalt`, `breccia`, `soil`.
    pub sample_type: Option<String>,
    /// e.g. `Apollo 11`.
    pub mission: Option<String>,
    pub page: Option<u32>,
    /// Page size; the registry default is 20.
    pub limit: Option<u32>,
}

pub struct LunarSamplesService {
    dispatcher: Dispatcher,
}

impl LunarSamplesService {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    pub async fn samples(&self, search: &SampleSearch) -> Result<ResponseEnvelope, NasaError> {
        let query = QueryParams::new()
            .with_opt("search", search.search.as_deref())
            .with_opt("sample_type", search.sample_type.as_deref())
            .with_opt("mission", search.mission.as_deref())
            .with_opt("page", search.page)
            .with_opt("limit", search.limit);
        self.dispatcher.send(LUNAR_SAMPLES, &PathParams::new(), &query).await
    }

    /// One sample by its catalog id, e.g. `10003`.
    pub async fn sample(&self, sample_id: &str) -> Result<ResponseEnvelope, NasaError> {
        self.dispatcher
            .send(LUNAR_SAMPLE, &PathParams::new().with("sample_id", sample_id), &QueryParams::new())
            .await
    }
}
