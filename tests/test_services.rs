//! # Topic Services Mock Test Suite
//!
//! Each service against a mock server: the path it hits, the query it
//! shapes and the envelope it hands back.

use chrono::NaiveDate;
use nasa_api_ng::core::dates::DateRange;
use nasa_api_ng::loggers::LoggerBuilder;
use nasa_api_ng::registry::{EndpointRegistry, Provider};
use nasa_api_ng::retrieve::{Dispatcher, DispatcherOptions, ErrorKind};
use nasa_api_ng::services::{
    ApodService, DonkiEvent, DonkiService, EarthQuery, EarthService, EpicService, ExoplanetQuery,
    ExoplanetTable, ExoplanetsService, FireballQuery, FireballsService, ImageSearch, ImagesService,
    InsightService, LunarSamplesService, MediaType, MeteoriteSearch, MeteoritesService, NeoService,
    PowerClimatologyQuery, PowerCommunity, PowerPointQuery, PowerService, SampleSearch, StemCategory,
    StemQuery, StemService, TechTransferService,
};
use serde_json::json;
use std::collections::HashMap;
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const KEY: &str = "SERVICEKEY";

async fn setup() -> (Dispatcher, MockServer) {
    let server = MockServer::start().await;
    let logger = LoggerBuilder::new("services_test").build().unwrap();
    let registry = Provider::ALL
        .into_iter()
        .fold(EndpointRegistry::standard(), |reg, p| reg.with_host(p, server.uri()));
    let opts = DispatcherOptions {
        api_key: KEY.to_string(),
        timeout: Duration::from_secs(2),
    };
    (Dispatcher::new_with_opts(logger, registry, Some(opts)), server)
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

async fn ok_json(server: &MockServer) {
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
        .mount(server)
        .await;
}

/// Query of the only request the server has seen.
async fn single_query(server: &MockServer) -> (String, HashMap<String, String>) {
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1, "expected exactly one request");
    let url = &requests[0].url;
    let query = url.query_pairs().map(|(k, v)| (k.into_owned(), v.into_owned())).collect();
    (url.path().to_string(), query)
}

// =========================================================================
// api.nasa.gov
// =========================================================================

#[tokio::test]
async fn test_apod_dates_are_sent_as_iso_days() {
    let (dispatcher, server) = setup().await;

    Mock::given(method("GET"))
        .and(path("/planetary/apod"))
        .and(query_param("date", "2024-01-05"))
        .and(query_param("api_key", KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "date": "2024-01-05" })))
        .expect(1)
        .mount(&server)
        .await;

    let env = ApodService::new(dispatcher).by_date(date(2024, 1, 5)).await.unwrap();
    assert_eq!(env.payload().unwrap()["date"], "2024-01-05");
}

#[tokio::test]
async fn test_apod_range_without_end_omits_end_date() {
    let (dispatcher, server) = setup().await;
    ok_json(&server).await;

    ApodService::new(dispatcher).range(date(2024, 2, 1), None).await.unwrap();

    let (_, query) = single_query(&server).await;
    assert_eq!(query.get("start_date").map(String::as_str), Some("2024-02-01"));
    assert!(!query.contains_key("end_date"));
}

#[tokio::test]
async fn test_apod_random_count() {
    let (dispatcher, server) = setup().await;
    ok_json(&server).await;

    ApodService::new(dispatcher).random(5).await.unwrap();

    let (_, query) = single_query(&server).await;
    assert_eq!(query.get("count").map(String::as_str), Some("5"));
}

#[tokio::test]
async fn test_neo_feed_and_browse() {
    let (dispatcher, server) = setup().await;

    Mock::given(method("GET"))
        .and(path("/neo/rest/v1/feed"))
        .and(query_param("start_date", "2024-03-01"))
        .and(query_param("end_date", "2024-03-07"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "element_count": 0 })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/neo/rest/v1/neo/browse"))
        .and(query_param("page", "0"))
        .and(query_param("size", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "near_earth_objects": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let neo = NeoService::new(dispatcher);
    let feed = neo.feed(date(2024, 3, 1), Some(date(2024, 3, 7))).await.unwrap();
    assert!(feed.is_success());
    let browse = neo.browse(None, Some(5)).await.unwrap();
    assert!(browse.is_success());
}

#[tokio::test]
async fn test_donki_event_is_a_path_segment() {
    let (dispatcher, server) = setup().await;

    Mock::given(method("GET"))
        .and(path("/DONKI/FLR"))
        .and(query_param("startDate", "2024-05-01"))
        .and(query_param("endDate", "2024-05-31"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let range = DateRange::new(date(2024, 5, 1), date(2024, 5, 31));
    let env = DonkiService::new(dispatcher)
        .events(DonkiEvent::SolarFlare, &range)
        .await
        .unwrap();
    assert_eq!(env.payload(), Some(&json!([])));
}

#[tokio::test]
async fn test_techtransfer_empty_query_is_omitted() {
    let (dispatcher, server) = setup().await;
    ok_json(&server).await;

    TechTransferService::new(dispatcher).patents(Some("")).await.unwrap();

    let (path, query) = single_query(&server).await;
    assert_eq!(path, "/techtransfer/patent/");
    assert!(!query.contains_key("query"));
    assert_eq!(query.get("api_key").map(String::as_str), Some(KEY));
}

#[tokio::test]
async fn test_insight_weather_defaults() {
    let (dispatcher, server) = setup().await;

    Mock::given(method("GET"))
        .and(path("/insight_weather/"))
        .and(query_param("feedtype", "json"))
        .and(query_param("ver", "1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "sol_keys": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let env = InsightService::new(dispatcher).weather().await.unwrap();
    assert!(env.is_success());
}

#[tokio::test]
async fn test_stem_category_path() {
    let (dispatcher, server) = setup().await;
    ok_json(&server).await;

    let query = StemQuery {
        search: Some("rockets".to_string()),
        page: None,
    };
    StemService::new(dispatcher)
        .resources(StemCategory::Internships, &query)
        .await
        .unwrap();

    let (path, query) = single_query(&server).await;
    assert_eq!(path, "/stem/internships");
    assert_eq!(query.get("search").map(String::as_str), Some("rockets"));
    assert!(!query.contains_key("page"));
}

#[tokio::test]
async fn test_earth_imagery_defaults_and_url() {
    let (dispatcher, server) = setup().await;

    Mock::given(method("GET"))
        .and(path("/planetary/earth/imagery"))
        .and(query_param("dim", "0.15"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0x89, b'P', b'N', b'G']))
        .mount(&server)
        .await;

    let earth = EarthService::new(dispatcher);
    let query = EarthQuery::at(29.78, -95.33);

    // the provider answers with an image, not JSON
    let env = earth.imagery(&query).await.unwrap();
    assert_eq!(env.error_kind(), Some(ErrorKind::MalformedResponse));

    let url = earth.imagery_url(&query).unwrap();
    assert_eq!(url.path(), "/planetary/earth/imagery");
    let pairs: HashMap<String, String> = url.query_pairs().map(|(k, v)| (k.into_owned(), v.into_owned())).collect();
    assert_eq!(pairs.get("lat").map(String::as_str), Some("29.78"));
    assert_eq!(pairs.get("lon").map(String::as_str), Some("-95.33"));
    assert_eq!(pairs.get("dim").map(String::as_str), Some("0.15"));
    assert_eq!(pairs.get("api_key").map(String::as_str), Some(KEY));
}

// =========================================================================
// other providers
// =========================================================================

#[tokio::test]
async fn test_epic_by_date_and_image_url() {
    let (dispatcher, server) = setup().await;

    Mock::given(method("GET"))
        .and(path("/EPIC/api/natural/date/2015-10-31"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "image": "epic_1b_20151031074844" }])))
        .expect(1)
        .mount(&server)
        .await;

    let epic = EpicService::new(dispatcher);
    let env = epic.by_date(date(2015, 10, 31)).await.unwrap();
    assert!(env.is_success());

    let url = epic.image_url(date(2015, 10, 31), "epic_1b_20151031074844").unwrap();
    assert_eq!(
        url.path(),
        "/archive/natural/2015/10/31/png/epic_1b_20151031074844.png"
    );
    assert!(url.query().is_none());
}

#[tokio::test]
async fn test_epic_sends_no_key() {
    let (dispatcher, server) = setup().await;
    ok_json(&server).await;

    EpicService::new(dispatcher).available().await.unwrap();

    let (path, query) = single_query(&server).await;
    assert_eq!(path, "/EPIC/api/natural/available");
    assert!(!query.contains_key("api_key"));
}

#[tokio::test]
async fn test_images_search_omits_unset_fields() {
    let (dispatcher, server) = setup().await;
    ok_json(&server).await;

    let search = ImageSearch {
        media_type: Some(MediaType::Video),
        ..ImageSearch::text("apollo 11")
    };
    ImagesService::new(dispatcher).search(&search).await.unwrap();

    let (path, query) = single_query(&server).await;
    assert_eq!(path, "/search");
    assert_eq!(query.get("q").map(String::as_str), Some("apollo 11"));
    assert_eq!(query.get("media_type").map(String::as_str), Some("video"));
    assert!(!query.contains_key("year_start"));
    assert!(!query.contains_key("page"));
    assert!(!query.contains_key("api_key"));
}

#[tokio::test]
async fn test_images_empty_search_term_is_still_sent() {
    let (dispatcher, server) = setup().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({ "reason": "Expected at least one search parameter" })))
        .mount(&server)
        .await;

    let env = ImagesService::new(dispatcher).search(&ImageSearch::text("")).await.unwrap();
    assert_eq!(env.error_kind(), Some(ErrorKind::ClientError));

    let (_, query) = single_query(&server).await;
    assert_eq!(query.get("q").map(String::as_str), Some(""));
}

#[tokio::test]
async fn test_images_asset_by_id() {
    let (dispatcher, server) = setup().await;

    Mock::given(method("GET"))
        .and(path("/asset/as11-40-5874"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "collection": { "items": [] } })))
        .expect(1)
        .mount(&server)
        .await;

    let env = ImagesService::new(dispatcher).asset("as11-40-5874").await.unwrap();
    assert!(env.is_success());
}

#[tokio::test]
async fn test_exoplanet_table_defaults_and_override() {
    let (dispatcher, server) = setup().await;
    ok_json(&server).await;

    let query = ExoplanetQuery {
        select: Some("kepid,koi_disposition".to_string()),
        ..ExoplanetQuery::default()
    };
    ExoplanetsService::new(dispatcher)
        .table(ExoplanetTable::Cumulative, &query)
        .await
        .unwrap();

    let (path, query) = single_query(&server).await;
    assert_eq!(path, "/cgi-bin/nstedAPI/nph-nstedAPI");
    assert_eq!(query.get("table").map(String::as_str), Some("cumulative"));
    assert_eq!(query.get("select").map(String::as_str), Some("kepid,koi_disposition"));
    assert_eq!(query.get("format").map(String::as_str), Some("json"));
    assert!(!query.contains_key("where"));
}

#[tokio::test]
async fn test_exoplanet_tess_table() {
    let (dispatcher, server) = setup().await;
    ok_json(&server).await;

    ExoplanetsService::new(dispatcher)
        .table(ExoplanetTable::Tess, &ExoplanetQuery::default())
        .await
        .unwrap();

    let (_, query) = single_query(&server).await;
    assert_eq!(query.get("table").map(String::as_str), Some("ticv8"));
    assert_eq!(query.get("select").map(String::as_str), Some("*"));
}

#[tokio::test]
async fn test_lunar_samples_default_limit() {
    let (dispatcher, server) = setup().await;
    ok_json(&server).await;

    let search = SampleSearch {
        mission: Some("Apollo 11".to_string()),
        ..SampleSearch::default()
    };
    LunarSamplesService::new(dispatcher).samples(&search).await.unwrap();

    let (path, query) = single_query(&server).await;
    assert_eq!(path, "/lunar/sample/api");
    assert_eq!(query.get("limit").map(String::as_str), Some("20"));
    assert_eq!(query.get("mission").map(String::as_str), Some("Apollo 11"));
    assert!(!query.contains_key("sample_type"));
}

#[tokio::test]
async fn test_meteorite_by_id() {
    let (dispatcher, server) = setup().await;

    Mock::given(method("GET"))
        .and(path("/antmet/sample/api/ALH84001"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "name": "ALH84001" })))
        .expect(1)
        .mount(&server)
        .await;

    let meteorites = MeteoritesService::new(dispatcher);
    let env = meteorites.meteorite("ALH84001").await.unwrap();
    assert_eq!(env.payload().unwrap()["name"], "ALH84001");
}

#[tokio::test]
async fn test_meteorite_search_year() {
    let (dispatcher, server) = setup().await;
    ok_json(&server).await;

    let search = MeteoriteSearch {
        year_found: Some(1984),
        limit: Some(5),
        ..MeteoriteSearch::default()
    };
    MeteoritesService::new(dispatcher).meteorites(&search).await.unwrap();

    let (_, query) = single_query(&server).await;
    assert_eq!(query.get("year_found").map(String::as_str), Some("1984"));
    assert_eq!(query.get("limit").map(String::as_str), Some("5"));
}

#[tokio::test]
async fn test_power_daily_point() {
    let (dispatcher, server) = setup().await;
    ok_json(&server).await;

    let query = PowerPointQuery {
        parameters: vec!["T2M".to_string(), "PRECTOTCORR".to_string()],
        latitude: 40.5,
        longitude: -105.25,
        start: date(2024, 1, 1),
        end: date(2024, 1, 31),
        community: PowerCommunity::Ag,
    };
    PowerService::new(dispatcher).daily(&query).await.unwrap();

    let (path, query) = single_query(&server).await;
    assert_eq!(path, "/api/temporal/daily/point");
    assert_eq!(query.get("parameters").map(String::as_str), Some("T2M,PRECTOTCORR"));
    assert_eq!(query.get("latitude").map(String::as_str), Some("40.5"));
    assert_eq!(query.get("longitude").map(String::as_str), Some("-105.25"));
    assert_eq!(query.get("start").map(String::as_str), Some("2024-01-01"));
    assert_eq!(query.get("end").map(String::as_str), Some("2024-01-31"));
    assert_eq!(query.get("community").map(String::as_str), Some("AG"));
    assert_eq!(query.get("format").map(String::as_str), Some("JSON"));
    assert!(!query.contains_key("api_key"));
}

#[tokio::test]
async fn test_power_climatology_without_parameters() {
    let (dispatcher, server) = setup().await;
    ok_json(&server).await;

    let query = PowerClimatologyQuery {
        parameters: Vec::new(),
        latitude: 0.0,
        longitude: 0.0,
        community: PowerCommunity::default(),
    };
    PowerService::new(dispatcher).climatology(&query).await.unwrap();

    let (path, query) = single_query(&server).await;
    assert_eq!(path, "/api/temporal/climatology/point");
    assert!(!query.contains_key("parameters"));
    assert_eq!(query.get("community").map(String::as_str), Some("RE"));
}

#[tokio::test]
async fn test_fireball_hyphenated_params() {
    let (dispatcher, server) = setup().await;

    Mock::given(method("GET"))
        .and(path("/fireball.api"))
        .and(query_param("date-min", "2023-01-01"))
        .and(query_param("energy-min", "0.3"))
        .and(query_param("limit", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "count": "0", "data": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let query = FireballQuery {
        date_min: Some(date(2023, 1, 1)),
        energy_min: Some(0.3),
        ..FireballQuery::default()
    };
    let env = FireballsService::new(dispatcher).fireballs(&query).await.unwrap();
    assert_eq!(env.payload().unwrap()["count"], "0");
}

// =========================================================================
// failures surface unchanged
// =========================================================================

#[tokio::test]
async fn test_service_returns_failed_envelope_unchanged() {
    let (dispatcher, server) = setup().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({ "msg": "Date must be between Jun 16, 1995 and today" })))
        .mount(&server)
        .await;

    let env = ApodService::new(dispatcher).by_date(date(1990, 1, 1)).await.unwrap();
    let err = env.error().unwrap();
    assert_eq!(err.kind, ErrorKind::ClientError);
    assert_eq!(err.message, "Date must be between Jun 16, 1995 and today");
    assert_eq!(err.status, Some(400));
}

#[tokio::test]
async fn test_service_timeout_is_an_envelope() {
    let server = MockServer::start().await;
    let logger = LoggerBuilder::new("services_test").build().unwrap();
    let registry = EndpointRegistry::standard().with_host(Provider::ImageLibrary, server.uri());
    let opts = DispatcherOptions {
        api_key: KEY.to_string(),
        timeout: Duration::from_millis(100),
    };
    let dispatcher = Dispatcher::new_with_opts(logger, registry, Some(opts));

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({}))
                .set_delay(Duration::from_millis(600)),
        )
        .mount(&server)
        .await;

    let env = ImagesService::new(dispatcher)
        .search(&ImageSearch::text("saturn"))
        .await
        .unwrap();
    assert_eq!(env.error_kind(), Some(ErrorKind::Timeout));
    assert!(env.payload().is_none());
}
