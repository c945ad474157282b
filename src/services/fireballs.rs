//! # Fireball Service
//!
//! Bright meteor reports from the JPL SSD fireball API. Parameter names use
//! that API's hyphenated spelling.

use chrono::NaiveDate;

use crate::core::error::NasaError;
use crate::registry::operations::FIREBALLS;
use crate::retrieve::dispatcher::Dispatcher;
use crate::retrieve::envelope::ResponseEnvelope;
use crate::retrieve::params::{PathParams, QueryParams};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FireballQuery {
    pub date_min: Option<NaiveDate>,
    pub date_max: Option<NaiveDate>,
    /// Minimum total radiated energy, in units of 10^10 J.
    pub energy_min: Option<f64>,
    pub limit: Option<u32>,
}

pub struct FireballsService {
    dispatcher: Dispatcher,
}

impl FireballsService {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Lists fireball events, newest first.
    ///
    /// # Arguments
    /// * `query` - A [`FireballQuery`]; `limit` defaults to 20 when unset.
    pub async fn fireballs(&self, query: &FireballQuery) -> Result<ResponseEnvelope, NasaError> {
        let params = QueryParams::new()
            .with_opt("date-min", query.date_min)
            .with_opt("date-max", query.date_max)
            .with_opt("energy-min", query.energy_min)
            .with_opt("limit", query.limit);
        self.dispatcher.send(FIREBALLS, &PathParams::new(), &params).await
    }
}
