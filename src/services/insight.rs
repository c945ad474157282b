//! # InSight Mars Weather Service

use crate::core::error::NasaError;
use crate::registry::operations::INSIGHT_WEATHER;
use crate::retrieve::dispatcher::Dispatcher;
use crate::retrieve::envelope::ResponseEnvelope;
use crate::retrieve::params::{PathParams, QueryParams};

pub struct InsightService {
    dispatcher: Dispatcher,
}

impl InsightService {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Per-sol summaries from the lander's last reporting week.
    pub async fn weather(&self) -> Result<ResponseEnvelope, NasaError> {
        self.dispatcher
            .send(INSIGHT_WEATHER, &PathParams::new(), &QueryParams::new())
            .await
    }
}
