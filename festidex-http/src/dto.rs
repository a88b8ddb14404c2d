use festidex::query::filter::deserialize_bound;
use festidex::{Concert, JoinedView, SearchHit};
use serde::{Deserialize, Serialize};

/// `?q=...&limit=...` on both search routes.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
    /// Unparsable values are ignored rather than rejected.
    #[serde(default, deserialize_with = "deserialize_bound")]
    pub limit: Option<usize>,
}

impl SearchParams {
    pub fn is_blank(&self) -> bool {
        self.q.is_empty()
    }
}

/// Body of `GET /search`.
#[derive(Debug, Serialize)]
pub struct SearchPage {
    pub query: String,
    pub total: usize,
    pub hits: Vec<SearchHit>,
}

/// Body of `GET /artist/:id`: the joined view plus its concert schedule.
#[derive(Debug, Serialize)]
pub struct ArtistPage<'a> {
    #[serde(flatten)]
    pub view: JoinedView<'a>,
    pub concerts: Vec<Concert<'a>>,
}

impl<'a> From<JoinedView<'a>> for ArtistPage<'a> {
    fn from(view: JoinedView<'a>) -> Self {
        Self {
            concerts: view.concerts(),
            view,
        }
    }
}
