//! # Earth Imagery Service
//!
//! Landsat asset listings and imagery for a coordinate.

use chrono::NaiveDate;
use reqwest::Url;

use crate::core::error::NasaError;
use crate::registry::operations::{EARTH_ASSETS, EARTH_IMAGERY};
use crate::retrieve::dispatcher::Dispatcher;
use crate::retrieve::envelope::ResponseEnvelope;
use crate::retrieve::params::{PathParams, QueryParams};

#[derive(Debug, Clone, PartialEq)]
pub struct EarthQuery {
    pub lat: f64,
    pub lon: f64,
    pub date: Option<NaiveDate>,
    /// Width and height of the tile in degrees; imagery defaults to 0.15.
    pub dim: Option<f64>,
}

impl EarthQuery {
    pub fn at(lat: f64, lon: f64) -> Self {
        Self {
            lat,
            lon,
            date: None,
            dim: None,
        }
    }

    fn to_params(&self) -> QueryParams {
        QueryParams::new()
            .with("lat", self.lat)
            .with("lon", self.lon)
            .with_opt("date", self.date)
            .with_opt("dim", self.dim)
    }
}

pub struct EarthService {
    dispatcher: Dispatcher,
}

impl EarthService {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Acquisition dates and ids of images available near the point.
    pub async fn assets(&self, query: &EarthQuery) -> Result<ResponseEnvelope, NasaError> {
        self.dispatcher
            .send(EARTH_ASSETS, &PathParams::new(), &query.to_params())
            .await
    }

    /// Requests the imagery endpoint through the dispatcher.
    ///
    /// The provider answers with a PNG, which the dispatcher reports as
    /// `malformed-response`; use [`EarthService::imagery_url`] to embed the image.
    pub async fn imagery(&self, query: &EarthQuery) -> Result<ResponseEnvelope, NasaError> {
        self.dispatcher
            .send(EARTH_IMAGERY, &PathParams::new(), &query.to_params())
            .await
    }

    /// Fully resolved imagery URL, key included, for direct embedding.
    pub fn imagery_url(&self, query: &EarthQuery) -> Result<Url, NasaError> {
        let descriptor = self
            .dispatcher
            .describe(EARTH_IMAGERY, &PathParams::new(), &query.to_params())?;
        Ok(descriptor.full_url())
    }
}
