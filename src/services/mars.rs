//! # Mars Rover Photos Service
//!
//! Photo listings and mission manifests for the Mars rovers.

use chrono::NaiveDate;

use crate::core::error::NasaError;
use crate::registry::operations::{MARS_MANIFEST, MARS_PHOTOS, MARS_ROVERS};
use crate::retrieve::dispatcher::Dispatcher;
use crate::retrieve::envelope::ResponseEnvelope;
use crate::retrieve::params::{PathParams, QueryParams};

/// Filters for a photo listing. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarsPhotoQuery {
    /// Earth date the photos were taken.
    pub earth_date: Option<NaiveDate>,
    /// Martian sol, the alternative to `earth_date`.
    pub sol: Option<u32>,
    /// Camera abbreviation such as `fhaz`, `navcam` or `mast`.
    pub camera: Option<String>,
    pub page: Option<u32>,
}

impl MarsPhotoQuery {
    pub fn on_earth_date(date: NaiveDate) -> Self {
        Self {
            earth_date: Some(date),
            ..Self::default()
        }
    }

    fn to_params(&self) -> QueryParams {
        QueryParams::new()
            .with_opt("earth_date", self.earth_date)
            .with_opt("sol", self.sol)
            .with_opt("camera", self.camera.as_deref())
            .with_opt("page", self.page)
    }
}

pub struct MarsPhotosService {
    dispatcher: Dispatcher,
}

impl MarsPhotosService {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Lists the rovers with their cameras and mission status.
    pub async fn rovers(&self) -> Result<ResponseEnvelope, NasaError> {
        self.dispatcher
            .send(MARS_ROVERS, &PathParams::new(), &QueryParams::new())
            .await
    }

    /// Photos taken by `rover` matching `query`.
    ///
    /// # Arguments
    /// * `rover` - Rover name such as `curiosity`, `opportunity` or `spirit`.
    /// * `query` - A [`MarsPhotoQuery`]; unset fields are left out of the request.
    pub async fn photos(&self, rover: &str, query: &MarsPhotoQuery) -> Result<ResponseEnvelope, NasaError> {
        self.dispatcher
            .send(MARS_PHOTOS, &PathParams::new().with("rover", rover), &query.to_params())
            .await
    }

    /// Mission manifest: landing and max dates, and per-sol photo counts.
    ///
    /// # Arguments
    /// * `rover` - Rover name, used as a path segment.
    pub async fn manifest(&self, rover: &str) -> Result<ResponseEnvelope, NasaError> {
        self.dispatcher
            .send(MARS_MANIFEST, &PathParams::new().with("rover", rover), &QueryParams::new())
            .await
    }
}
