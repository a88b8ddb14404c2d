use festidex::{Artist, DateRecord, LocationRecord, RelationRecord, Snapshot, StaticSource};
use std::sync::Arc;
use tokio::net::TcpListener;

fn artist(id: i64, name: &str, members: &[&str], year: i32, album: &str) -> Artist {
    let api = "https://groupietrackers.herokuapp.com/api";
    Artist {
        id,
        image: format!("{}/images/{}.jpeg", api, name.to_lowercase().replace(' ', "")),
        name: name.to_string(),
        members: members.iter().map(|m| m.to_string()).collect(),
        creation_date: year,
        first_album: album.to_string(),
        locations: format!("{}/locations/{}", api, id),
        concert_dates: format!("{}/dates/{}", api, id),
        relations: format!("{}/relation/{}", api, id),
    }
}

fn venues(id: i64, slugs: &[&str]) -> LocationRecord {
    LocationRecord {
        id,
        locations: slugs.iter().map(|s| s.to_string()).collect(),
        dates: format!("https://groupietrackers.herokuapp.com/api/dates/{}", id),
    }
}

fn dates(id: i64, dates: &[&str]) -> DateRecord {
    DateRecord {
        id,
        dates: dates.iter().map(|d| d.to_string()).collect(),
    }
}

fn relation(id: i64, entries: Vec<(&str, Vec<&str>)>) -> RelationRecord {
    let mut record = RelationRecord {
        id,
        ..Default::default()
    };
    for (slug, days) in entries {
        record.dates_locations.insert(
            slug.to_string(),
            days.iter().map(|d| d.to_string()).collect(),
        );
    }
    record
}

/// Four artists over deliberately ragged auxiliary collections:
/// 3 location records, 2 date records, 3 relation records.
#[allow(dead_code)]
pub fn fixture_source() -> StaticSource {
    StaticSource {
        artists: vec![
            artist(
                1,
                "Queen",
                &["Freddie Mercury", "Brian May", "John Daecon", "Roger Meddows-Taylor"],
                1970,
                "14-12-1973",
            ),
            artist(
                2,
                "SOJA",
                &["Jacob Hemphill", "Bob Jefferson", "Ryan Berty", "Ken Bergman"],
                1997,
                "05-06-2002",
            ),
            artist(
                3,
                "Pink Floyd",
                &["Roger Waters", "Nick Mason", "David Gilmour", "Richard Wright", "Syd Barrett"],
                1965,
                "05-08-1967",
            ),
            artist(
                4,
                "Scorpions",
                &["Rudolf Schenker", "Klaus Meine", "Matthias Jabs"],
                1965,
                "14-04-1972",
            ),
        ],
        locations: vec![
            venues(1, &["north_carolina-usa", "los_angeles-usa", "osaka-japan"]),
            venues(2, &["playa_del_carmen-mexico", "papeete-french_polynesia"]),
            venues(3, &["london-uk", "los_angeles-usa"]),
        ],
        dates: vec![
            dates(1, &["*23-08-2019", "*22-08-2019", "*20-08-2019"]),
            dates(2, &["*05-12-2019", "16-11-2019"]),
        ],
        relations: vec![
            relation(
                1,
                vec![
                    ("north_carolina-usa", vec!["23-08-2019"]),
                    ("los_angeles-usa", vec!["22-08-2019"]),
                    ("osaka-japan", vec!["20-08-2019"]),
                ],
            ),
            relation(
                2,
                vec![
                    ("playa_del_carmen-mexico", vec!["05-12-2019"]),
                    ("papeete-french_polynesia", vec!["16-11-2019"]),
                ],
            ),
            relation(
                3,
                vec![
                    ("london-uk", vec!["01-06-1977"]),
                    ("los_angeles-usa", vec!["26-04-1975"]),
                ],
            ),
        ],
    }
}

#[allow(dead_code)]
pub fn fixture() -> Snapshot {
    let source = fixture_source();
    Snapshot::new(source.artists, source.locations, source.dates, source.relations)
}

/// Serve the fixture on an ephemeral port; returns `host:port`.
#[allow(dead_code)]
pub async fn spawn_server() -> String {
    spawn_server_with(fixture()).await
}

#[allow(dead_code)]
pub async fn spawn_server_with(snapshot: Snapshot) -> String {
    let state = Arc::new(festidex_http::handlers::AppState::new(snapshot));
    let app = festidex_http::router(state, None);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap().to_string();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;
    addr
}
