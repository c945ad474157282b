//! Static operation table.
//!
//! One entry per remote endpoint. Names are the public handles used by
//! [`Dispatcher::send`](crate::retrieve::dispatcher::Dispatcher::send).

use crate::registry::{Operation, Provider};

pub const APOD: &str = "apod";

pub const NEO_FEED: &str = "neo.feed";
pub const NEO_LOOKUP: &str = "neo.lookup";
pub const NEO_BROWSE: &str = "neo.browse";

pub const MARS_ROVERS: &str = "mars.rovers";
pub const MARS_PHOTOS: &str = "mars.photos";
pub const MARS_MANIFEST: &str = "mars.manifest";

pub const EPIC_RECENT: &str = "epic.recent";
pub const EPIC_BY_DATE: &str = "epic.by_date";
pub const EPIC_AVAILABLE: &str = "epic.available";

pub const DONKI_EVENTS: &str = "donki.events";

pub const TECHTRANSFER_PATENTS: &str = "techtransfer.patents";
pub const TECHTRANSFER_SOFTWARE: &str = "techtransfer.software";
pub const TECHTRANSFER_SPINOFFS: &str = "techtransfer.spinoffs";

pub const INSIGHT_WEATHER: &str = "insight.weather";

pub const IMAGES_SEARCH: &str = "images.search";
pub const IMAGES_ASSET: &str = "images.asset";
pub const IMAGES_METADATA: &str = "images.metadata";

pub const EXOPLANETS_CUMULATIVE: &str = "exoplanets.cumulative";
pub const EXOPLANETS_KEPLER: &str = "exoplanets.kepler";
pub const EXOPLANETS_TESS: &str = "exoplanets.tess";
pub const EXOPLANETS_K2: &str = "exoplanets.k2";

pub const LUNAR_SAMPLES: &str = "lunar.samples";
pub const LUNAR_SAMPLE: &str = "lunar.sample";

pub const METEORITES_LIST: &str = "meteorites.list";
pub const METEORITES_ONE: &str = "meteorites.one";

pub const POWER_DAILY: &str = "power.daily";
pub const POWER_CLIMATOLOGY: &str = "power.climatology";

pub const STEM_RESOURCES: &str = "stem.resources";

pub const FIREBALLS: &str = "fireballs";

pub const EARTH_ASSETS: &str = "earth.assets";
pub const EARTH_IMAGERY: &str = "earth.imagery";

const EXOPLANET_PATH: &str = "/cgi-bin/nstedAPI/nph-nstedAPI";

pub static OPERATIONS: &[Operation] = &[
    Operation::keyed(APOD, "/planetary/apod", &[]),
    // NEO
    Operation::keyed(NEO_FEED, "/neo/rest/v1/feed", &[]),
    Operation::keyed(NEO_LOOKUP, "/neo/rest/v1/neo/{asteroid_id}", &[]),
    Operation::keyed(NEO_BROWSE, "/neo/rest/v1/neo/browse", &[("page", "0"), ("size", "20")]),
    // Mars rover photos
    Operation::keyed(MARS_ROVERS, "/mars-photos/api/v1/rovers", &[]),
    Operation::keyed(MARS_PHOTOS, "/mars-photos/api/v1/rovers/{rover}/photos", &[]),
    Operation::keyed(MARS_MANIFEST, "/mars-photos/api/v1/manifests/{rover}", &[]),
    // EPIC
    Operation::keyed(EPIC_RECENT, "/EPIC/api/natural", &[]),
    Operation::keyed(EPIC_BY_DATE, "/EPIC/api/natural/date/{date}", &[]),
    Operation::keyed(EPIC_AVAILABLE, "/EPIC/api/natural/available", &[]),
    // DONKI
    Operation::keyed(DONKI_EVENTS, "/DONKI/{event}", &[]),
    // TechTransfer
    Operation::keyed(TECHTRANSFER_PATENTS, "/techtransfer/patent/", &[]),
    Operation::keyed(TECHTRANSFER_SOFTWARE, "/techtransfer/software/", &[]),
    Operation::keyed(TECHTRANSFER_SPINOFFS, "/techtransfer/spinoff/", &[]),
    // InSight
    Operation::keyed(INSIGHT_WEATHER, "/insight_weather/", &[("feedtype", "json"), ("ver", "1.0")]),
    // Image and Video Library
    Operation::open(IMAGES_SEARCH, Provider::ImageLibrary, "/search", &[]),
    Operation::open(IMAGES_ASSET, Provider::ImageLibrary, "/asset/{nasa_id}", &[]),
    Operation::open(IMAGES_METADATA, Provider::ImageLibrary, "/metadata/{nasa_id}", &[]),
    // Exoplanet archive
    Operation::open(
        EXOPLANETS_CUMULATIVE,
        Provider::ExoplanetArchive,
        EXOPLANET_PATH,
        &[("table", "cumulative"), ("select", "*"), ("format", "json")],
    ),
    Operation::open(
        EXOPLANETS_KEPLER,
        Provider::ExoplanetArchive,
        EXOPLANET_PATH,
        &[("table", "keplercandidates"), ("select", "*"), ("format", "json")],
    ),
    Operation::open(
        EXOPLANETS_TESS,
        Provider::ExoplanetArchive,
        EXOPLANET_PATH,
        &[("table", "ticv8"), ("select", "*"), ("format", "json")],
    ),
    Operation::open(
        EXOPLANETS_K2,
        Provider::ExoplanetArchive,
        EXOPLANET_PATH,
        &[("table", "k2candidates"), ("select", "*"), ("format", "json")],
    ),
    // Astromaterials curation
    Operation::open(LUNAR_SAMPLES, Provider::AstromaterialsCurator, "/lunar/sample/api", &[("limit", "20")]),
    Operation::open(LUNAR_SAMPLE, Provider::AstromaterialsCurator, "/lunar/sample/api/{sample_id}", &[]),
    Operation::open(METEORITES_LIST, Provider::AstromaterialsCurator, "/antmet/sample/api", &[("limit", "20")]),
    Operation::open(METEORITES_ONE, Provider::AstromaterialsCurator, "/antmet/sample/api/{meteorite_id}", &[]),
    // POWER
    Operation::open(POWER_DAILY, Provider::Power, "/api/temporal/daily/point", &[("format", "JSON")]),
    Operation::open(POWER_CLIMATOLOGY, Provider::Power, "/api/temporal/climatology/point", &[("format", "JSON")]),
    // STEM
    Operation::keyed(STEM_RESOURCES, "/stem/{category}", &[]),
    // JPL SSD fireball feed
    Operation::open(FIREBALLS, Provider::SolarSystemDynamics, "/fireball.api", &[("limit", "20")]),
    // Earth imagery
    Operation::keyed(EARTH_ASSETS, "/planetary/earth/assets", &[]),
    Operation::keyed(EARTH_IMAGERY, "/planetary/earth/imagery", &[("dim", "0.15")]),
];
