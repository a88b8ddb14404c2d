//! Free-text search across the fielded facets of every artist.
//!
//! One linear pass over the snapshot in collection order. For each artist the
//! facets are tested in a fixed order: name, members, creation year, first
//! album, venues. Every facet that contains the query (case-insensitively)
//! contributes a hit. Within a single call, a hit whose display text and
//! facet type were already emitted is dropped.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::join::venues_at;
use crate::catalog::Snapshot;
use crate::query::format::format_venue;
use crate::types::{Artist, ArtistId};

/// How many hits the search-as-you-type box shows.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 10;

/// Facet a hit came from. Serializes to the fixed tags used by the front-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HitKind {
    #[serde(rename = "artist/band")]
    Artist,
    #[serde(rename = "member")]
    Member,
    #[serde(rename = "creation date")]
    CreationDate,
    #[serde(rename = "first album")]
    FirstAlbum,
    #[serde(rename = "location")]
    Location,
}

impl HitKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            HitKind::Artist => "artist/band",
            HitKind::Member => "member",
            HitKind::CreationDate => "creation date",
            HitKind::FirstAlbum => "first album",
            HitKind::Location => "location",
        }
    }
}

impl fmt::Display for HitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: HitKind,
    pub id: ArtistId,
}

/// Hits of one search call plus the (text, facet) pairs already emitted.
struct HitSet {
    hits: Vec<SearchHit>,
    seen: HashSet<(String, HitKind)>,
    limit: Option<usize>,
}

impl HitSet {
    fn new(limit: Option<usize>) -> Self {
        Self {
            hits: Vec::new(),
            seen: HashSet::new(),
            limit,
        }
    }

    fn is_full(&self) -> bool {
        self.limit.is_some_and(|limit| self.hits.len() >= limit)
    }

    fn push(&mut self, name: String, kind: HitKind, id: ArtistId) {
        if self.is_full() {
            return;
        }
        if self.seen.insert((name.clone(), kind)) {
            self.hits.push(SearchHit { name, kind, id });
        }
    }
}

/// Read-only search over a loaded [`Snapshot`].
#[derive(Debug, Clone, Copy)]
pub struct SearchEngine<'a> {
    snapshot: &'a Snapshot,
}

impl<'a> SearchEngine<'a> {
    pub fn new(snapshot: &'a Snapshot) -> Self {
        Self { snapshot }
    }

    /// All hits for `query`, in artist → facet → occurrence order.
    ///
    /// An empty query returns no hits; callers decide what to show instead.
    pub fn search(&self, query: &str) -> Vec<SearchHit> {
        self.collect(query, None)
    }

    /// The first `limit` hits of [`SearchEngine::search`], without scanning
    /// the rest of the catalog once the limit is reached.
    pub fn suggest(&self, query: &str, limit: usize) -> Vec<SearchHit> {
        self.collect(query, Some(limit))
    }

    fn collect(&self, query: &str, limit: Option<usize>) -> Vec<SearchHit> {
        let needle = query.to_lowercase();
        if needle.is_empty() || limit == Some(0) {
            return Vec::new();
        }

        let mut hits = HitSet::new(limit);
        for (index, artist) in self.snapshot.artists().iter().enumerate() {
            self.scan_artist(index, artist, query, &needle, &mut hits);
            if hits.is_full() {
                break;
            }
        }
        hits.hits
    }

    fn scan_artist(
        &self,
        index: usize,
        artist: &Artist,
        raw_query: &str,
        needle: &str,
        hits: &mut HitSet,
    ) {
        let id = artist.id;

        if contains_folded(&artist.name, needle) {
            hits.push(artist.name.clone(), HitKind::Artist, id);
        }

        for member in &artist.members {
            if contains_folded(member, needle) {
                hits.push(member.clone(), HitKind::Member, id);
            }
        }

        // Years are digits only; compare against the query as typed.
        if artist.creation_date.to_string().contains(raw_query) {
            hits.push(
                format!("{} (created in {})", artist.name, artist.creation_date),
                HitKind::CreationDate,
                id,
            );
        }

        if contains_folded(&artist.first_album, needle) {
            hits.push(
                format!("{} (first album: {})", artist.name, artist.first_album),
                HitKind::FirstAlbum,
                id,
            );
        }

        for slug in venues_at(self.snapshot, index) {
            if contains_folded(slug, needle) {
                hits.push(format_venue(slug), HitKind::Location, id);
            }
        }
    }
}

/// Convenience wrapper for a one-off search.
pub fn search(snapshot: &Snapshot, query: &str) -> Vec<SearchHit> {
    SearchEngine::new(snapshot).search(query)
}

fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}
