use std::time::Duration;

use super::config::CatalogConfig;
use super::{
    decode_artists, decode_dates, decode_locations, decode_relations, CatalogSource, ARTISTS,
    DATES, LOCATIONS, RELATIONS,
};
use crate::error::{FestidexError, Result};
use crate::types::{Artist, DateRecord, LocationRecord, RelationRecord};

/// Fetches the catalog collections from the upstream JSON API.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    config: CatalogConfig,
}

impl HttpSource {
    pub fn new(config: CatalogConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.fetch_timeout_secs))
            .user_agent(concat!("festidex/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FestidexError::Config(format!("HTTP client: {}", e)))?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    async fn get(&self, resource: &str) -> Result<Vec<u8>> {
        let url = self.config.endpoint(resource);
        tracing::debug!("Fetching {} from {}", resource, url);

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FestidexError::fetch(resource, e))?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FestidexError::fetch(
                resource,
                format!("upstream returned {}", status),
            ));
        }
        let body = resp
            .bytes()
            .await
            .map_err(|e| FestidexError::fetch(resource, e))?;
        Ok(body.to_vec())
    }
}

impl CatalogSource for HttpSource {
    async fn fetch_artists(&self) -> Result<Vec<Artist>> {
        decode_artists(&self.get(ARTISTS).await?)
    }

    async fn fetch_locations(&self) -> Result<Vec<LocationRecord>> {
        decode_locations(&self.get(LOCATIONS).await?)
    }

    async fn fetch_dates(&self) -> Result<Vec<DateRecord>> {
        decode_dates(&self.get(DATES).await?)
    }

    async fn fetch_relations(&self) -> Result<Vec<RelationRecord>> {
        decode_relations(&self.get(RELATIONS).await?)
    }
}
