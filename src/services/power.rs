//! # POWER Climate Data Service
//!
//! Point queries against the Prediction Of Worldwide Energy Resources API.

use chrono::NaiveDate;

use crate::core::error::NasaError;
use crate::registry::operations::{POWER_CLIMATOLOGY, POWER_DAILY};
use crate::retrieve::dispatcher::Dispatcher;
use crate::retrieve::envelope::ResponseEnvelope;
use crate::retrieve::params::{PathParams, QueryParams};

/// User community, which selects the units POWER reports in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PowerCommunity {
    /// Renewable energy.
    #[default]
    Re,
    /// Agroclimatology.
    Ag,
    /// Sustainable buildings.
    Sb,
}

impl PowerCommunity {
    pub fn as_str(&self) -> &'static str {
        match self {
            PowerCommunity::Re => "RE",
            PowerCommunity::Ag => "AG",
            PowerCommunity::Sb => "SB",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PowerPointQuery {
    /// Parameter codes such as `T2M` or `PRECTOTCORR`; sent comma separated.
    pub parameters: Vec<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub community: PowerCommunity,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PowerClimatologyQuery {
    pub parameters: Vec<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub community: PowerCommunity,
}

pub struct PowerService {
    dispatcher: Dispatcher,
}

impl PowerService {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Daily values for a point between two dates.
    ///
    /// # Arguments
    /// * `query` - A [`PowerPointQuery`]; `start` and `end` are sent as `YYYY-MM-DD`.
    pub async fn daily(&self, query: &PowerPointQuery) -> Result<ResponseEnvelope, NasaError> {
        let params = point_params(&query.parameters, query.latitude, query.longitude, query.community)
            .with("start", query.start)
            .with("end", query.end);
        self.dispatcher.send(POWER_DAILY, &PathParams::new(), &params).await
    }

    /// Long-term monthly averages for a point.
    pub async fn climatology(&self, query: &PowerClimatologyQuery) -> Result<ResponseEnvelope, NasaError> {
        let params = point_params(&query.parameters, query.latitude, query.longitude, query.community);
        self.dispatcher.send(POWER_CLIMATOLOGY, &PathParams::new(), &params).await
    }
}

fn point_params(parameters: &[String], latitude: f64, longitude: f64, community: PowerCommunity) -> QueryParams {
    let joined = parameters.join(",");
    QueryParams::new()
        .with_opt("parameters", Some(joined))
        .with("latitude", latitude)
        .with("longitude", longitude)
        .with("community", community.as_str())
}
