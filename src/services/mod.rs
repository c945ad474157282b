//! # Topic Services
//!
//! One service per data domain. Each method shapes its parameters, calls the
//! dispatcher for exactly one operation and returns the envelope untouched.
//! Services own a [`Dispatcher`](crate::retrieve::Dispatcher) handed in at
//! construction; clones share the same connection pool.

pub mod apod;
pub mod donki;
pub mod earth;
pub mod epic;
pub mod exoplanets;
pub mod fireballs;
pub mod images;
pub mod insight;
pub mod lunar;
pub mod mars;
pub mod meteorites;
pub mod neo;
pub mod power;
pub mod stem;
pub mod techtransfer;

pub use apod::ApodService;
pub use donki::{DonkiEvent, DonkiService};
pub use earth::{EarthQuery, EarthService};
pub use epic::EpicService;
pub use exoplanets::{ExoplanetQuery, ExoplanetTable, ExoplanetsService};
pub use fireballs::{FireballQuery, FireballsService};
pub use images::{ImageSearch, ImagesService, MediaType};
pub use insight::InsightService;
pub use lunar::{LunarSamplesService, SampleSearch};
pub use mars::{MarsPhotoQuery, MarsPhotosService};
pub use meteorites::{MeteoriteSearch, MeteoritesService};
pub use neo::NeoService;
pub use power::{PowerClimatologyQuery, PowerCommunity, PowerPointQuery, PowerService};
pub use stem::{StemCategory, StemQuery, StemService};
pub use techtransfer::TechTransferService;
