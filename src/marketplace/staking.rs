//! Staking-points REST API client.
//!
//! The privileged channel to the staking service. A token with no staking
//! record is an ordinary zero-point answer here; only transport failures
//! surface as errors, and the enrichment producer folds those to zero too.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, warn};

use super::traits::PointsChannel;
use crate::domain::{CollectionKind, TokenId};
use crate::error::LookupError;

/// HTTP client for the staking-points API.
pub struct StakingClient {
    client: Client,
    base_url: String,
}

impl StakingClient {
    /// Create a new client with the given base URL.
    #[must_use]
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }
}

/// The points field has gone by several names across API revisions.
#[derive(Debug, Default, Deserialize)]
struct PointsResponse {
    #[serde(default)]
    points: Option<u64>,
    #[serde(default, rename = "totalPoints")]
    total_points: Option<u64>,
    #[serde(default, rename = "stakingPoints")]
    staking_points: Option<u64>,
}

impl PointsResponse {
    fn points(&self) -> u64 {
        self.points
            .or(self.total_points)
            .or(self.staking_points)
            .unwrap_or(0)
    }
}

#[async_trait]
impl PointsChannel for StakingClient {
    async fn points(
        &self,
        token: &TokenId,
        collection: CollectionKind,
    ) -> Result<u64, LookupError> {
        let url = format!(
            "{}/seeds/points?id={}&type={}",
            self.base_url,
            token,
            collection.label()
        );

        let response = self.client.get(&url).send().await?;

        match response.status() {
            status if status.is_success() => {}
            StatusCode::NOT_FOUND => {
                debug!(token = %token, collection = %collection, "No staking data, zero points");
                return Ok(0);
            }
            status => {
                warn!(token = %token, status = status.as_u16(), "Staking lookup failed, zero points");
                return Ok(0);
            }
        }

        let body: PointsResponse = response.json().await?;
        let points = body.points();
        debug!(token = %token, points, "Staking points resolved");

        Ok(points)
    }
}
