//! Ranking policies over an enriched listing batch.
//!
//! Pure functions: ranking always operates on a copy and never observes or
//! mutates shared state.

use super::listing::Listing;

/// How a rendered batch is ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortPolicy {
    /// Descending staking points per unit of price.
    #[default]
    BestDeal,
    /// Descending price.
    HighestPrice,
    /// Ascending price.
    LowestPrice,
    /// Input order preserved. Also the reading of any unrecognized policy
    /// name, which is never an error.
    Unranked,
}

impl SortPolicy {
    /// Parse a policy name. Unknown names read as [`SortPolicy::Unranked`].
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "bestdeal" => Self::BestDeal,
            "highestprice" => Self::HighestPrice,
            "lowestprice" => Self::LowestPrice,
            _ => Self::Unranked,
        }
    }
}

/// Order a batch by the given policy.
///
/// Sorts are stable, so equal keys keep their input order. The input slice
/// is never reordered; callers receive a fresh, owned ordering.
#[must_use]
pub fn rank(listings: &[Listing], policy: SortPolicy) -> Vec<Listing> {
    let mut ordered = listings.to_vec();
    match policy {
        SortPolicy::BestDeal => {
            ordered.sort_by(|a, b| b.points_per_price().total_cmp(&a.points_per_price()));
        }
        SortPolicy::HighestPrice => {
            ordered.sort_by(|a, b| b.price_value().total_cmp(&a.price_value()));
        }
        SortPolicy::LowestPrice => {
            ordered.sort_by(|a, b| a.price_value().total_cmp(&b.price_value()));
        }
        SortPolicy::Unranked => {}
    }
    ordered
}

/// Index of the entry eligible for the best-deal highlight, if any.
///
/// Only the top entry under [`SortPolicy::BestDeal`] qualifies, and only
/// when its ratio is strictly positive.
#[must_use]
pub fn best_deal_index(ranked: &[Listing], policy: SortPolicy) -> Option<usize> {
    if policy != SortPolicy::BestDeal {
        return None;
    }
    let first = ranked.first()?;
    (first.points_per_price() > 0.0).then_some(0)
}
