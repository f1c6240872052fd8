//! Batch enrichment orchestration.
//!
//! [`Enricher`] owns the two process-lifetime caches (image URLs and
//! staking points) and drives the two-phase display contract over each
//! loaded batch:
//!
//! 1. Paint immediately from whatever is already cached or known, without
//!    touching the network.
//! 2. Fan an image resolution and a points resolution out for every
//!    listing, wait for the whole set to settle, then paint again with the
//!    selected ranking applied.
//!
//! Individual lookups never fail the batch: every failure path folds into
//! a placeholder image or a zero-point score inside the producer, so the
//! fan-in always completes.

use std::sync::Arc;

use futures_util::future::join_all;
use tracing::debug;

use crate::cache::FlightCache;
use crate::domain::{
    best_deal_index, fallback_image, missing_identity_image, rank, CollectionKind, Listing,
    ListingKey, SortPolicy,
};
use crate::marketplace::{AssetLookup, PointsChannel};
use crate::present::{Card, Present};

/// Key for the points cache: the same token can earn different points under
/// different collections, so the collection tag is part of the key.
type PointsKey = (CollectionKind, ListingKey);

/// Fans deduplicated lookups out across listing batches and feeds the
/// presenter. One instance is meant to live for the whole process: its
/// caches deliberately persist across loads and across collection switches,
/// and are never evicted.
pub struct Enricher {
    images: FlightCache<ListingKey, String>,
    points: FlightCache<PointsKey, u64>,
    assets: Arc<dyn AssetLookup>,
    staking: Arc<dyn PointsChannel>,
}

impl Enricher {
    /// Create an enricher with empty caches.
    #[must_use]
    pub fn new(assets: Arc<dyn AssetLookup>, staking: Arc<dyn PointsChannel>) -> Self {
        Self {
            images: FlightCache::new(),
            points: FlightCache::new(),
            assets,
            staking,
        }
    }

    /// Enrich a batch and drive both paints on `presenter`.
    ///
    /// Returns the enriched listings in their input order; ranking is
    /// applied to the final paint only, over a copy.
    pub async fn enrich(
        &self,
        mut listings: Vec<Listing>,
        policy: SortPolicy,
        presenter: &dyn Present,
    ) -> Vec<Listing> {
        if listings.is_empty() {
            presenter.render_empty();
            return listings;
        }

        debug!(count = listings.len(), "Enriching batch");

        // Phase 1: fill from settled cache entries only, then paint. No
        // suspension between here and the paint.
        for listing in &mut listings {
            self.fill_from_cache(listing);
        }
        presenter.render_initial(&cards(&listings, None));

        // Fan out one image and one points resolution per listing, then
        // fan in over the full set.
        let images = join_all(listings.iter().map(|listing| self.resolve_image(listing)));
        let points = join_all(listings.iter().map(|listing| self.resolve_points(listing)));
        let (images, points) = tokio::join!(images, points);

        for ((listing, image), points) in listings.iter_mut().zip(images).zip(points) {
            listing.set_image_url(image);
            if let Some(points) = points {
                listing.set_staking_points(points);
            }
        }

        debug!(
            images_cached = self.images.len(),
            points_cached = self.points.len(),
            "Batch enrichment settled"
        );

        // Phase 2: rank a copy and paint the final view.
        let ranked = rank(&listings, policy);
        let best = best_deal_index(&ranked, policy);
        presenter.render_final(&cards(&ranked, best));

        listings
    }

    /// Seed a listing's enrichment slots from already-settled cache
    /// entries. Never suspends and never starts a resolution.
    fn fill_from_cache(&self, listing: &mut Listing) {
        let Some(key) = listing.key().cloned() else {
            return;
        };
        if listing.image_url().is_none() {
            if let Some(url) = self.images.get(&key) {
                listing.set_image_url(url);
            }
        }
        if listing.staking_points().is_none() {
            if let Some(points) = self.points.get(&(listing.collection(), key)) {
                listing.set_staking_points(points);
            }
        }
    }

    /// Resolve a listing's image URL through the single-flight cache.
    ///
    /// The producer tries the image embedded in the listing payload first,
    /// then the secondary metadata lookup, and finally the deterministic
    /// placeholder. All three outcomes are cached identically.
    async fn resolve_image(&self, listing: &Listing) -> String {
        if let Some(url) = listing.image_url() {
            return url.to_string();
        }
        let Some(key) = listing.key().cloned() else {
            return missing_identity_image().to_string();
        };

        let embedded = listing.embedded_image().map(str::to_string);
        let assets = Arc::clone(&self.assets);
        let producer_key = key.clone();

        self.images
            .resolve(key, move || async move {
                if let Some(url) = embedded {
                    return url;
                }
                match assets
                    .asset_metadata(producer_key.contract(), producer_key.token())
                    .await
                {
                    Ok(metadata) => metadata
                        .image_url
                        .unwrap_or_else(|| fallback_image(producer_key.token())),
                    Err(error) => {
                        debug!(key = %producer_key, %error, "Image lookup degraded to placeholder");
                        fallback_image(producer_key.token())
                    }
                }
            })
            .await
    }

    /// Resolve a listing's staking points through the single-flight cache.
    ///
    /// Returns `None` only when the listing has no identity to look up;
    /// every lookup failure is folded into a zero-point answer.
    async fn resolve_points(&self, listing: &Listing) -> Option<u64> {
        if let Some(points) = listing.staking_points() {
            return Some(points);
        }
        let key = listing.key().cloned()?;
        let collection = listing.collection();

        let staking = Arc::clone(&self.staking);
        let producer_key = key.clone();

        let points = self
            .points
            .resolve((collection, key), move || async move {
                match staking.points(producer_key.token(), collection).await {
                    Ok(points) => points,
                    Err(error) => {
                        debug!(key = %producer_key, %error, "Points lookup degraded to zero");
                        0
                    }
                }
            })
            .await;
        Some(points)
    }

    /// Number of settled image resolutions.
    #[must_use]
    pub fn cached_images(&self) -> usize {
        self.images.len()
    }

    /// Number of settled points resolutions.
    #[must_use]
    pub fn cached_points(&self) -> usize {
        self.points.len()
    }
}

/// Build presenter cards, flagging at most one best deal.
fn cards(listings: &[Listing], best: Option<usize>) -> Vec<Card> {
    listings
        .iter()
        .enumerate()
        .map(|(index, listing)| Card {
            listing: listing.clone(),
            best_deal: Some(index) == best,
        })
        .collect()
}
