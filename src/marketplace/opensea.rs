//! OpenSea REST API client.
//!
//! Implements both the listing feed and the secondary asset-metadata lookup
//! against the OpenSea v2 API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, info};

use super::traits::{AssetLookup, AssetMetadata, ListingSource};
use crate::domain::{ContractAddress, RawListing, TokenId};
use crate::error::{LookupError, SourceError};

/// Upper bound on a single asset-metadata lookup. A lookup that runs past
/// this is abandoned and reads as a failed lookup.
pub const ASSET_LOOKUP_TIMEOUT: Duration = Duration::from_secs(8);

const API_KEY_HEADER: &str = "X-API-KEY";

/// HTTP client for the OpenSea REST API.
pub struct OpenSeaClient {
    client: Client,
    base_url: String,
    api_key: String,
    asset_timeout: Duration,
}

impl OpenSeaClient {
    /// Create a new client with the given base URL and API key.
    #[must_use]
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
            api_key,
            asset_timeout: ASSET_LOOKUP_TIMEOUT,
        }
    }

    /// Override the asset-lookup timeout.
    #[must_use]
    pub fn with_asset_timeout(mut self, timeout: Duration) -> Self {
        self.asset_timeout = timeout;
        self
    }
}

#[derive(Debug, Deserialize)]
struct ListingsResponse {
    #[serde(default)]
    listings: Option<Vec<RawListing>>,
}

#[derive(Debug, Deserialize)]
struct AssetResponse {
    #[serde(default)]
    nft: Option<AssetPayload>,
}

#[derive(Debug, Deserialize)]
struct AssetPayload {
    #[serde(default)]
    image_url: Option<String>,
    #[serde(default)]
    display_image_url: Option<String>,
}

#[async_trait]
impl ListingSource for OpenSeaClient {
    async fn listings(&self, slug: &str) -> Result<Vec<RawListing>, SourceError> {
        if self.api_key.is_empty() {
            return Err(SourceError::MissingCredential);
        }

        let url = format!("{}/listings/collection/{}/all", self.base_url, slug);
        info!(url = %url, "Fetching collection listings");

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => {}
            StatusCode::UNAUTHORIZED => return Err(SourceError::InvalidCredential),
            status => {
                return Err(SourceError::Status {
                    status: status.as_u16(),
                })
            }
        }

        let body: ListingsResponse = response.json().await?;
        let listings = body.listings.unwrap_or_default();
        debug!(count = listings.len(), "Fetched listings");

        Ok(listings)
    }
}

#[async_trait]
impl AssetLookup for OpenSeaClient {
    async fn asset_metadata(
        &self,
        contract: &ContractAddress,
        token: &TokenId,
    ) -> Result<AssetMetadata, LookupError> {
        let url = format!(
            "{}/chain/ethereum/contract/{}/nfts/{}",
            self.base_url, contract, token
        );

        let request = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .header(API_KEY_HEADER, &self.api_key)
            .send();

        let response = tokio::time::timeout(self.asset_timeout, request)
            .await
            .map_err(|_| LookupError::TimedOut {
                after: self.asset_timeout,
            })??;

        if !response.status().is_success() {
            return Err(LookupError::Status {
                status: response.status().as_u16(),
            });
        }

        let body: AssetResponse = response.json().await?;
        let image_url = body.nft.and_then(|nft| nft.image_url.or(nft.display_image_url));
        debug!(token = %token, found = image_url.is_some(), "Asset metadata lookup");

        Ok(AssetMetadata { image_url })
    }
}
