//! # Astronomy Picture of the Day Service

use chrono::NaiveDate;

use crate::core::error::NasaError;
use crate::registry::operations::APOD;
use crate::retrieve::dispatcher::Dispatcher;
use crate::retrieve::envelope::ResponseEnvelope;
use crate::retrieve::params::{PathParams, QueryParams};

pub struct ApodService {
    dispatcher: Dispatcher,
}

impl ApodService {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Today's picture, as decided by the provider's clock.
    pub async fn today(&self) -> Result<ResponseEnvelope, NasaError> {
        self.fetch(QueryParams::new()).await
    }

    /// Picture published on `date`.
    ///
    /// # Arguments
    /// * `date` - Calendar day, sent as `YYYY-MM-DD`. The provider rejects
    ///   days before 1995-06-16 with a 400, surfaced as `client-error-4xx`.
    pub async fn by_date(&self, date: NaiveDate) -> Result<ResponseEnvelope, NasaError> {
        self.fetch(QueryParams::new().with("date", date)).await
    }

    /// Every picture from `start` through `end` (the provider's today when `None`).
    pub async fn range(&self, start: NaiveDate, end: Option<NaiveDate>) -> Result<ResponseEnvelope, NasaError> {
        let query = QueryParams::new()
            .with("start_date", start)
            .with_opt("end_date", end);
        self.fetch(query).await
    }

    /// `count` randomly chosen pictures.
    pub async fn random(&self, count: u32) -> Result<ResponseEnvelope, NasaError> {
        self.fetch(QueryParams::new().with("count", count)).await
    }

    async fn fetch(&self, query: QueryParams) -> Result<ResponseEnvelope, NasaError> {
        self.dispatcher.send(APOD, &PathParams::new(), &query).await
    }
}
