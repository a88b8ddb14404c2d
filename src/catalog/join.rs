//! Positional join of the auxiliary collections onto artists.
//!
//! The upstream API publishes four parallel arrays. Artist `id` N lives at
//! index N-1 of `artists`, and its venues, dates and relations live at index
//! N-1 of their own arrays. The `id` fields of the auxiliary records are not
//! consulted. Auxiliary arrays are sometimes shorter than `artists`; a
//! missing record joins as empty.

use once_cell::sync::Lazy;
use serde::Serialize;

use super::snapshot::Snapshot;
use crate::error::{FestidexError, Result};
use crate::query::format::{format_map_label, format_venue};
use crate::types::{Artist, ArtistId, DatesByVenue};

static NO_RELATIONS: Lazy<DatesByVenue> = Lazy::new(DatesByVenue::new);

/// Everything known about one artist, borrowed from the snapshot.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinedView<'a> {
    pub artist: &'a Artist,
    pub locations: &'a [String],
    pub dates: &'a [String],
    pub dates_locations: &'a DatesByVenue,
}

/// One venue of the relation map with its display labels.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Concert<'a> {
    pub slug: &'a str,
    pub venue: String,
    pub map_label: String,
    pub dates: &'a [String],
}

impl<'a> JoinedView<'a> {
    /// Relation map entries in upstream order.
    pub fn concerts(&self) -> Vec<Concert<'a>> {
        self.dates_locations
            .iter()
            .map(|(slug, dates)| Concert {
                slug: slug.as_str(),
                venue: format_venue(slug),
                map_label: format_map_label(slug),
                dates: dates.as_slice(),
            })
            .collect()
    }
}

/// Resolve a 1-based artist id. Ids outside `1..=len` are `ArtistNotFound`.
pub fn resolve(snapshot: &Snapshot, id: ArtistId) -> Result<JoinedView<'_>> {
    let index = position(snapshot, id)
        .ok_or_else(|| FestidexError::ArtistNotFound(id.to_string()))?;
    let artist = snapshot
        .artist(index)
        .ok_or_else(|| FestidexError::ArtistNotFound(id.to_string()))?;

    Ok(JoinedView {
        artist,
        locations: venues_at(snapshot, index),
        dates: snapshot
            .date(index)
            .map(|d| d.dates.as_slice())
            .unwrap_or(&[]),
        dates_locations: snapshot
            .relation(index)
            .map(|r| &r.dates_locations)
            .unwrap_or(&*NO_RELATIONS),
    })
}

/// Parse a routed identifier. Anything that is not a decimal integer is
/// reported as not found rather than as a bad request.
pub fn parse_id(raw: &str) -> Result<ArtistId> {
    raw.parse::<ArtistId>()
        .map_err(|_| FestidexError::ArtistNotFound(raw.to_string()))
}

pub fn resolve_str<'a>(snapshot: &'a Snapshot, raw: &str) -> Result<JoinedView<'a>> {
    let id = parse_id(raw)?;
    resolve(snapshot, id)
}

/// Venue slugs joined to the artist at 0-based `index`; empty when the
/// locations collection stops short of it.
pub fn venues_at(snapshot: &Snapshot, index: usize) -> &[String] {
    snapshot
        .location(index)
        .map(|l| l.locations.as_slice())
        .unwrap_or(&[])
}

fn position(snapshot: &Snapshot, id: ArtistId) -> Option<usize> {
    if id < 1 {
        return None;
    }
    let index = usize::try_from(id - 1).ok()?;
    (index < snapshot.len()).then_some(index)
}
