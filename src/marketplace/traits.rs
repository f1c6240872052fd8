//! Marketplace trait definitions.
//!
//! These traits define the interface that any marketplace or staking
//! backend must provide. The enrichment pipeline only ever talks to these
//! seams, never to a concrete client.

use async_trait::async_trait;

use crate::domain::{CollectionKind, ContractAddress, RawListing, TokenId};
use crate::error::{LookupError, SourceError};

/// Source of raw marketplace listings for a collection.
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Fetch every current listing for the collection slug.
    async fn listings(&self, slug: &str) -> Result<Vec<RawListing>, SourceError>;
}

/// Metadata returned by the secondary asset lookup.
#[derive(Debug, Clone, Default)]
pub struct AssetMetadata {
    /// Canonical image URL, when the marketplace knows one.
    pub image_url: Option<String>,
}

/// Secondary lookup for per-token asset metadata (image resolution).
#[async_trait]
pub trait AssetLookup: Send + Sync {
    /// Fetch metadata for a single token.
    async fn asset_metadata(
        &self,
        contract: &ContractAddress,
        token: &TokenId,
    ) -> Result<AssetMetadata, LookupError>;
}

/// Channel to the staking-points service.
///
/// Implementations must tolerate being invoked many times concurrently for
/// distinct tokens; the pipeline fans a whole batch out through this seam.
#[async_trait]
pub trait PointsChannel: Send + Sync {
    /// Fetch the staking points for a token.
    ///
    /// "No staking data" is a valid zero-point answer, not an error;
    /// implementations fold not-found responses to `Ok(0)`.
    async fn points(
        &self,
        token: &TokenId,
        collection: CollectionKind,
    ) -> Result<u64, LookupError>;
}
