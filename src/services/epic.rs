//! # EPIC Service
//!
//! Earth Polychromatic Imaging Camera metadata, plus links into the image
//! archive (the archive serves PNG files, so those are returned as URLs
//! rather than fetched).

use chrono::{Datelike, NaiveDate};
use reqwest::Url;

use crate::core::dates::format_api_date;
use crate::core::error::NasaError;
use crate::registry::Provider;
use crate::registry::operations::{EPIC_AVAILABLE, EPIC_BY_DATE, EPIC_RECENT};
use crate::retrieve::dispatcher::Dispatcher;
use crate::retrieve::envelope::ResponseEnvelope;
use crate::retrieve::params::{PathParams, QueryParams};

pub struct EpicService {
    dispatcher: Dispatcher,
}

impl EpicService {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Metadata for the most recent day of natural-color images.
    pub async fn recent(&self) -> Result<ResponseEnvelope, NasaError> {
        self.dispatcher
            .send(EPIC_RECENT, &PathParams::new(), &QueryParams::new())
            .await
    }

    pub async fn by_date(&self, date: NaiveDate) -> Result<ResponseEnvelope, NasaError> {
        let path = PathParams::new().with("date", format_api_date(date));
        self.dispatcher.send(EPIC_BY_DATE, &path, &QueryParams::new()).await
    }

    /// Dates for which natural-color imagery exists.
    pub async fn available(&self) -> Result<ResponseEnvelope, NasaError> {
        self.dispatcher
            .send(EPIC_AVAILABLE, &PathParams::new(), &QueryParams::new())
            .await
    }

    /// Archive URL of one PNG, e.g. `.../archive/natural/2015/10/31/png/<image>.png`.
    pub fn image_url(&self, date: NaiveDate, image: &str) -> Result<Url, NasaError> {
        let base = self.dispatcher.registry().base_url(Provider::EpicArchive);
        let invalid = || NasaError::InvalidBaseUrl {
            provider: Provider::EpicArchive.slug().to_string(),
            url: base.to_string(),
        };

        let mut url = Url::parse(base).map_err(|_| invalid())?;
        {
            let mut parts = url.path_segments_mut().map_err(|_| invalid())?;
            parts.pop_if_empty().extend([
                "archive".to_string(),
                "natural".to_string(),
                format!("{:04}", date.year()),
                format!("{:02}", date.month()),
                format!("{:02}", date.day()),
                "png".to_string(),
                format!("{}.png", image),
            ]);
        }
        Ok(url)
    }
}
