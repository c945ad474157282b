//! # TechTransfer Service
//!
//! Patent, software and spinoff search. An absent or empty search term lists
//! without filtering.

use crate::core::error::NasaError;
use crate::registry::operations::{TECHTRANSFER_PATENTS, TECHTRANSFER_SOFTWARE, TECHTRANSFER_SPINOFFS};
use crate::retrieve::dispatcher::Dispatcher;
use crate::retrieve::envelope::ResponseEnvelope;
use crate::retrieve::params::{PathParams, QueryParams};

pub struct TechTransferService {
    dispatcher: Dispatcher,
}

impl TechTransferService {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Searches NASA patents.
    ///
    /// # Arguments
    /// * `query` - Search term; `None` or `""` lists everything.
    pub async fn patents(&self, query: Option<&str>) -> Result<ResponseEnvelope, NasaError> {
        self.search(TECHTRANSFER_PATENTS, query).await
    }

    pub async fn software(&self, query: Option<&str>) -> Result<ResponseEnvelope, NasaError> {
        self.search(TECHTRANSFER_SOFTWARE, query).await
    }

    pub async fn spinoffs(&self, query: Option<&str>) -> Result<ResponseEnvelope, NasaError> {
        self.search(TECHTRANSFER_SPINOFFS, query).await
    }

    async fn search(&self, operation: &str, query: Option<&str>) -> Result<ResponseEnvelope, NasaError> {
        let params = QueryParams::new().with_opt("query", query);
        self.dispatcher.send(operation, &PathParams::new(), &params).await
    }
}
