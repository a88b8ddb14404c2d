use festidex::catalog::join::resolve;
use festidex::{CatalogConfig, FestidexError, HttpSource, Snapshot};
use serde_json::json;
use serial_test::serial;
use std::env;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn source_for(server: &MockServer) -> HttpSource {
    let mut config = CatalogConfig::with_api_url(format!("{}/api", server.uri()));
    config.fetch_timeout_secs = 5;
    HttpSource::new(config).unwrap()
}

async fn mount(server: &MockServer, resource: &str, response: ResponseTemplate, calls: u64) {
    Mock::given(method("GET"))
        .and(path(format!("/api/{}", resource)))
        .respond_with(response)
        .expect(calls)
        .mount(server)
        .await;
}

fn artists_body() -> serde_json::Value {
    json!([
        {
            "id": 1,
            "image": "https://example.test/images/queen.jpeg",
            "name": "Queen",
            "members": ["Freddie Mercury", "Brian May"],
            "creationDate": 1970,
            "firstAlbum": "14-12-1973",
            "locations": "https://example.test/api/locations/1",
            "concertDates": "https://example.test/api/dates/1",
            "relations": "https://example.test/api/relation/1"
        },
        {
            "id": 2,
            "name": "SOJA",
            "members": ["Jacob Hemphill"],
            "creationDate": 1997,
            "firstAlbum": "05-06-2002"
        }
    ])
}

#[tokio::test]
async fn test_load_ragged_catalog() {
    let server = MockServer::start().await;
    mount(
        &server,
        "artists",
        ResponseTemplate::new(200).set_body_json(artists_body()),
        1,
    )
    .await;
    mount(
        &server,
        "locations",
        ResponseTemplate::new(200).set_body_json(json!({
            "index": [{"id": 1, "locations": ["osaka-japan", "london-uk"], "dates": ""}]
        })),
        1,
    )
    .await;
    mount(
        &server,
        "dates",
        ResponseTemplate::new(200).set_body_json(json!({"index": []})),
        1,
    )
    .await;
    mount(
        &server,
        "relation",
        ResponseTemplate::new(200).set_body_json(json!({
            "index": [{
                "id": 1,
                "datesLocations": {"osaka-japan": ["20-08-2019"], "london-uk": ["01-09-2019"]}
            }]
        })),
        1,
    )
    .await;

    let snapshot = Snapshot::load(&source_for(&server)).await.unwrap();
    let counts = snapshot.counts();
    assert_eq!(
        (counts.artists, counts.locations, counts.dates, counts.relations),
        (2, 1, 0, 1)
    );

    let queen = resolve(&snapshot, 1).unwrap();
    assert_eq!(queen.locations, ["osaka-japan", "london-uk"]);
    assert!(queen.dates.is_empty());
    // Upstream key order survives decoding.
    let keys: Vec<&str> = queen.dates_locations.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["osaka-japan", "london-uk"]);

    let soja = resolve(&snapshot, 2).unwrap();
    assert_eq!(soja.artist.image, "");
    assert!(soja.locations.is_empty());
    assert!(soja.dates_locations.is_empty());
}

#[tokio::test]
async fn test_artists_failure_aborts_load() {
    let server = MockServer::start().await;
    mount(&server, "artists", ResponseTemplate::new(500), 1).await;
    for resource in ["locations", "dates", "relation"] {
        mount(
            &server,
            resource,
            ResponseTemplate::new(200).set_body_json(json!({"index": []})),
            0,
        )
        .await;
    }

    match Snapshot::load(&source_for(&server)).await {
        Err(FestidexError::Fetch { resource, message }) => {
            assert_eq!(resource, "artists");
            assert!(message.contains("500"), "{}", message);
        }
        other => panic!("expected fetch error, got {:?}", other.map(|s| s.len())),
    }
}

#[tokio::test]
async fn test_malformed_dates_abort_before_relations() {
    let server = MockServer::start().await;
    mount(
        &server,
        "artists",
        ResponseTemplate::new(200).set_body_json(artists_body()),
        1,
    )
    .await;
    mount(
        &server,
        "locations",
        ResponseTemplate::new(200).set_body_json(json!({"index": []})),
        1,
    )
    .await;
    mount(
        &server,
        "dates",
        ResponseTemplate::new(200).set_body_string("{\"index\": [{\"id\": 1, \"dates\": ["),
        1,
    )
    .await;
    mount(
        &server,
        "relation",
        ResponseTemplate::new(200).set_body_json(json!({"index": []})),
        0,
    )
    .await;

    let err = Snapshot::load(&source_for(&server)).await.unwrap_err();
    assert!(
        matches!(&err, FestidexError::Decode { resource, .. } if resource == "dates"),
        "{:?}",
        err
    );
}

#[tokio::test]
async fn test_trailing_slash_in_api_url() {
    let server = MockServer::start().await;
    mount(
        &server,
        "artists",
        ResponseTemplate::new(200).set_body_json(json!([])),
        1,
    )
    .await;
    for resource in ["locations", "dates", "relation"] {
        mount(
            &server,
            resource,
            ResponseTemplate::new(200).set_body_json(json!({"index": []})),
            1,
        )
        .await;
    }

    let source = HttpSource::new(CatalogConfig::with_api_url(format!("{}/api/", server.uri())))
        .unwrap();
    let snapshot = Snapshot::load(&source).await.unwrap();
    assert!(snapshot.is_empty());
}

#[test]
#[serial]
fn test_config_from_env() {
    env::set_var("FESTIDEX_API_URL", "http://127.0.0.1:9999/api");
    env::set_var("FESTIDEX_FETCH_TIMEOUT_SECS", "7");

    let config = CatalogConfig::from_env();
    assert_eq!(config.api_url, "http://127.0.0.1:9999/api");
    assert_eq!(config.fetch_timeout_secs, 7);
    assert_eq!(config.endpoint("relation"), "http://127.0.0.1:9999/api/relation");

    env::remove_var("FESTIDEX_API_URL");
    env::remove_var("FESTIDEX_FETCH_TIMEOUT_SECS");
}

#[test]
#[serial]
fn test_config_from_env_defaults() {
    env::remove_var("FESTIDEX_API_URL");
    env::set_var("FESTIDEX_FETCH_TIMEOUT_SECS", "not-a-number");

    let config = CatalogConfig::from_env();
    assert_eq!(config.api_url, festidex::source::config::DEFAULT_API_URL);
    assert_eq!(config.fetch_timeout_secs, 30);

    env::remove_var("FESTIDEX_FETCH_TIMEOUT_SECS");
}
