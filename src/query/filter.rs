use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize};

use crate::catalog::Snapshot;
use crate::types::Artist;

/// Range filters over the artist listing. Every bound is optional and
/// inclusive; an unset bound does not constrain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistFilter {
    #[serde(default, deserialize_with = "deserialize_bound")]
    pub creation_min: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_bound")]
    pub creation_max: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_bound")]
    pub members_min: Option<usize>,
    #[serde(default, deserialize_with = "deserialize_bound")]
    pub members_max: Option<usize>,
}

impl ArtistFilter {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn matches(&self, artist: &Artist) -> bool {
        within(artist.creation_date, self.creation_min, self.creation_max)
            && within(artist.members.len(), self.members_min, self.members_max)
    }

    /// Matching artists in collection order.
    pub fn apply<'a>(&self, snapshot: &'a Snapshot) -> Vec<&'a Artist> {
        snapshot
            .artists()
            .iter()
            .filter(|artist| self.matches(artist))
            .collect()
    }
}

/// Optional numeric bound from a form field. Blank or unparsable input
/// (`creationMin=`, `membersMin=abc`) means "no bound", as does `null`.
pub fn deserialize_bound<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + TryFrom<i64> + TryFrom<u64>,
{
    struct Bound<T>(PhantomData<T>);

    impl<'de, T> de::Visitor<'de> for Bound<T>
    where
        T: FromStr + TryFrom<i64> + TryFrom<u64>,
    {
        type Value = Option<T>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("an integer, a numeric string, or null")
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D: Deserializer<'de>>(
            self,
            deserializer: D,
        ) -> Result<Self::Value, D::Error> {
            deserializer.deserialize_any(self)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
            Ok(T::try_from(v).ok())
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
            Ok(T::try_from(v).ok())
        }

        fn visit_f64<E: de::Error>(self, _v: f64) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            Ok(v.trim().parse().ok())
        }
    }

    deserializer.deserialize_any(Bound(PhantomData))
}

fn within<T: PartialOrd>(value: T, min: Option<T>, max: Option<T>) -> bool {
    min.map_or(true, |min| value >= min) && max.map_or(true, |max| value <= max)
}
