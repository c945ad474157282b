//! # Near Earth Object Web Service

use chrono::NaiveDate;

use crate::core::error::NasaError;
use crate::registry::operations::{NEO_BROWSE, NEO_FEED, NEO_LOOKUP};
use crate::retrieve::dispatcher::Dispatcher;
use crate::retrieve::envelope::ResponseEnvelope;
use crate::retrieve::params::{PathParams, QueryParams};

pub struct NeoService {
    dispatcher: Dispatcher,
}

impl NeoService {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Close approaches between `start` and `end`.
    ///
    /// The provider caps the span at seven days and fills in `start + 7`
    /// when `end` is omitted.
    pub async fn feed(&self, start: NaiveDate, end: Option<NaiveDate>) -> Result<ResponseEnvelope, NasaError> {
        let query = QueryParams::new()
            .with("start_date", start)
            .with_opt("end_date", end);
        self.dispatcher.send(NEO_FEED, &PathParams::new(), &query).await
    }

    /// One asteroid by its SPK-ID.
    ///
    /// # Arguments
    /// * `asteroid_id` - SPK-ID such as `3542519`, encoded as one path segment.
    pub async fn lookup(&self, asteroid_id: &str) -> Result<ResponseEnvelope, NasaError> {
        self.dispatcher
            .send(NEO_LOOKUP, &PathParams::new().with("asteroid_id", asteroid_id), &QueryParams::new())
            .await
    }

    /// Pages through the whole catalog; the registry defaults are page 0, size 20.
    pub async fn browse(&self, page: Option<u32>, size: Option<u32>) -> Result<ResponseEnvelope, NasaError> {
        let query = QueryParams::new().with_opt("page", page).with_opt("size", size);
        self.dispatcher.send(NEO_BROWSE, &PathParams::new(), &query).await
    }
}
