//! Marketplace integrations.
//!
//! Trait seams for the three external services the feed depends on, plus
//! the REST clients that implement them.

mod opensea;
mod staking;
mod traits;

pub use opensea::{OpenSeaClient, ASSET_LOOKUP_TIMEOUT};
pub use staking::StakingClient;
pub use traits::{AssetLookup, AssetMetadata, ListingSource, PointsChannel};
