//! Suppliers of the four raw catalog collections.
//!
//! The catalog does not care where its data comes from. A [`CatalogSource`]
//! hands over each collection already decoded; [`HttpSource`] fetches them
//! from the upstream API and [`StaticSource`] serves collections that are
//! already in memory.

pub mod config;
pub mod http;

use std::future::Future;

use serde::de::DeserializeOwned;

use crate::error::{FestidexError, Result};
use crate::types::{Artist, DateRecord, IndexEnvelope, LocationRecord, RelationRecord};

pub use config::CatalogConfig;
pub use http::HttpSource;

pub const ARTISTS: &str = "artists";
pub const LOCATIONS: &str = "locations";
pub const DATES: &str = "dates";
pub const RELATIONS: &str = "relation";

/// One fetch per collection. Each either yields the decoded collection or
/// fails with [`FestidexError::Fetch`] / [`FestidexError::Decode`].
pub trait CatalogSource {
    fn fetch_artists(&self) -> impl Future<Output = Result<Vec<Artist>>> + Send;
    fn fetch_locations(&self) -> impl Future<Output = Result<Vec<LocationRecord>>> + Send;
    fn fetch_dates(&self) -> impl Future<Output = Result<Vec<DateRecord>>> + Send;
    fn fetch_relations(&self) -> impl Future<Output = Result<Vec<RelationRecord>>> + Send;
}

/// Collections that are already decoded, e.g. fixtures or an embedded dump.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    pub artists: Vec<Artist>,
    pub locations: Vec<LocationRecord>,
    pub dates: Vec<DateRecord>,
    pub relations: Vec<RelationRecord>,
}

impl CatalogSource for StaticSource {
    async fn fetch_artists(&self) -> Result<Vec<Artist>> {
        Ok(self.artists.clone())
    }

    async fn fetch_locations(&self) -> Result<Vec<LocationRecord>> {
        Ok(self.locations.clone())
    }

    async fn fetch_dates(&self) -> Result<Vec<DateRecord>> {
        Ok(self.dates.clone())
    }

    async fn fetch_relations(&self) -> Result<Vec<RelationRecord>> {
        Ok(self.relations.clone())
    }
}

/// Decode the `/artists` payload: a bare JSON array.
pub fn decode_artists(body: &[u8]) -> Result<Vec<Artist>> {
    serde_json::from_slice(body).map_err(|e| FestidexError::decode(ARTISTS, e))
}

pub fn decode_locations(body: &[u8]) -> Result<Vec<LocationRecord>> {
    decode_index(LOCATIONS, body)
}

pub fn decode_dates(body: &[u8]) -> Result<Vec<DateRecord>> {
    decode_index(DATES, body)
}

pub fn decode_relations(body: &[u8]) -> Result<Vec<RelationRecord>> {
    decode_index(RELATIONS, body)
}

fn decode_index<T: DeserializeOwned>(resource: &str, body: &[u8]) -> Result<Vec<T>> {
    serde_json::from_slice::<IndexEnvelope<T>>(body)
        .map(|envelope| envelope.index)
        .map_err(|e| FestidexError::decode(resource, e))
}
