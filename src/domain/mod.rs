//! Marketplace-agnostic domain logic.

mod id;
mod listing;
mod rank;

// Core domain types
pub use id::{ContractAddress, ListingKey, TokenId};
pub use listing::{
    fallback_image, missing_identity_image, CollectionKind, Listing, RawListing,
    DEFAULT_CURRENCY,
};

// Ranking
pub use rank::{best_deal_index, rank, SortPolicy};
