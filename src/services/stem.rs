//! # STEM Resources Service
//!
//! One templated operation; the category is the last path segment.

use crate::core::error::NasaError;
use crate::registry::operations::STEM_RESOURCES;
use crate::retrieve::dispatcher::Dispatcher;
use crate::retrieve::envelope::ResponseEnvelope;
use crate::retrieve::params::{PathParams, QueryParams};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StemCategory {
    Activities,
    Resources,
    Events,
    Challenges,
    Competitions,
    Internships,
    Scholarships,
    Fellowships,
    Grants,
    Programs,
    Centers,
    Partners,
    Networks,
    Outreach,
    Education,
    Research,
    Innovation,
    Technology,
    Engineering,
    Mathematics,
    Science,
}

impl StemCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            StemCategory::Activities => "activities",
            StemCategory::Resources => "resources",
            StemCategory::Events => "events",
            StemCategory::Challenges => "challenges",
            StemCategory::Competitions => "competitions",
            StemCategory::Internships => "internships",
            StemCategory::Scholarships => "scholarships",
            StemCategory::Fellowships => "fellowships",
            StemCategory::Grants => "grants",
            StemCategory::Programs => "programs",
            StemCategory::Centers => "centers",
            StemCategory::Partners => "partners",
            StemCategory::Networks => "networks",
            StemCategory::Outreach => "outreach",
            StemCategory::Education => "education",
            StemCategory::Research => "research",
            StemCategory::Innovation => "innovation",
            StemCategory::Technology => "technology",
            StemCategory::Engineering => "engineering",
            StemCategory::Mathematics => "mathematics",
            StemCategory::Science => "science",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StemQuery {
    pub search: Option<String>,
    pub page: Option<u32>,
}

pub struct StemService {
    dispatcher: Dispatcher,
}

impl StemService {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Lists resources in one STEM category.
    ///
    /// # Arguments
    /// * `category` - A [`StemCategory`], sent as the last path segment.
    /// * `query` - Optional free-text `search` and `page`.
    pub async fn resources(&self, category: StemCategory, query: &StemQuery) -> Result<ResponseEnvelope, NasaError> {
        let path = PathParams::new().with("category", category.as_str());
        let params = QueryParams::new()
            .with_opt("search", query.search.as_deref())
            .with_opt("page", query.page);
        self.dispatcher.send(STEM_RESOURCES, &path, &params).await
    }
}
