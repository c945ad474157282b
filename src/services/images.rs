//! # NASA Image and Video Library Service

use crate::core::error::NasaError;
use crate::registry::operations::{IMAGES_ASSET, IMAGES_METADATA, IMAGES_SEARCH};
use crate::retrieve::dispatcher::Dispatcher;
use crate::retrieve::envelope::ResponseEnvelope;
use crate::retrieve::params::{PathParams, QueryParams};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Image,
    Video,
    Audio,
}

impl MediaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Image => "image",
            MediaType::Video => "video",
            MediaType::Audio => "audio",
        }
    }
}

/// Free-text search with optional narrowing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImageSearch {
    pub q: String,
    pub media_type: Option<MediaType>,
    pub year_start: Option<i32>,
    pub year_end: Option<i32>,
    pub page: Option<u32>,
}

impl ImageSearch {
    pub fn text(q: impl Into<String>) -> Self {
        Self {
            q: q.into(),
            ..Self::default()
        }
    }
}

pub struct ImagesService {
    dispatcher: Dispatcher,
}

impl ImagesService {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Searches the library.
    ///
    /// `q` is always sent, even when empty: the provider treats it as a
    /// required field and answers an empty term with its own 400, which
    /// comes back as a `client-error-4xx` envelope.
    ///
    /// # Arguments
    /// * `search` - An [`ImageSearch`]; unset narrowing fields are omitted.
    pub async fn search(&self, search: &ImageSearch) -> Result<ResponseEnvelope, NasaError> {
        let query = QueryParams::new()
            .with("q", search.q.as_str())
            .with_opt("media_type", search.media_type.map(|m| m.as_str()))
            .with_opt("year_start", search.year_start)
            .with_opt("year_end", search.year_end)
            .with_opt("page", search.page);
        self.dispatcher.send(IMAGES_SEARCH, &PathParams::new(), &query).await
    }

    /// File manifest (original, thumbnails, captions) for one item.
    pub async fn asset(&self, nasa_id: &str) -> Result<ResponseEnvelope, NasaError> {
        self.by_id(IMAGES_ASSET, nasa_id).await
    }

    /// Location of the item's full metadata document.
    pub async fn metadata(&self, nasa_id: &str) -> Result<ResponseEnvelope, NasaError> {
        self.by_id(IMAGES_METADATA, nasa_id).await
    }

    async fn by_id(&self, operation: &str, nasa_id: &str) -> Result<ResponseEnvelope, NasaError> {
        self.dispatcher
            .send(operation, &PathParams::new().with("nasa_id", nasa_id), &QueryParams::new())
            .await
    }
}
