use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Artist identifier as published upstream: 1-based and dense.
pub type ArtistId = i64;

/// Venue slug → ordered concert dates at that venue.
pub type DatesByVenue = IndexMap<String, Vec<String>>;

/// An artist or band, as served by the `/artists` endpoint.
///
/// The three URL fields (`locations`, `concert_dates`, `relations`) point at
/// the upstream per-artist documents; the catalog never follows them, it
/// joins the bulk collections positionally instead.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    pub id: ArtistId,
    #[serde(default)]
    pub image: String,
    pub name: String,
    #[serde(default)]
    pub members: Vec<String>,
    #[serde(default)]
    pub creation_date: i32,
    #[serde(default)]
    pub first_album: String,
    #[serde(default)]
    pub locations: String,
    #[serde(default)]
    pub concert_dates: String,
    #[serde(default)]
    pub relations: String,
}

/// Venue slugs for one artist (`"city-country"`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationRecord {
    pub id: ArtistId,
    #[serde(default)]
    pub locations: Vec<String>,
    #[serde(default)]
    pub dates: String,
}

/// Concert dates for one artist. Dates are opaque (`*dd-mm-yyyy`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DateRecord {
    pub id: ArtistId,
    #[serde(default)]
    pub dates: Vec<String>,
}

/// Which dates an artist played at which venue.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationRecord {
    pub id: ArtistId,
    #[serde(default)]
    pub dates_locations: DatesByVenue,
}

/// Wire wrapper for the three auxiliary endpoints: `{"index": [...]}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexEnvelope<T> {
    pub index: Vec<T>,
}
