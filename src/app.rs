//! App orchestration module.
//!
//! Wires the REST clients, the enricher, and the terminal presenter
//! together and runs one fetch-enrich-rank-render cycle per requested
//! collection. The enricher (and with it every cache) is shared across
//! the cycles, so a token already resolved for one load is served from
//! memory in the next.

use std::sync::Arc;

use tracing::{error, info};

use crate::config::Config;
use crate::domain::{CollectionKind, Listing, SortPolicy};
use crate::enrich::Enricher;
use crate::error::Result;
use crate::marketplace::{ListingSource, OpenSeaClient, StakingClient};
use crate::present::{Present, TablePresenter};

/// Main application struct.
pub struct App;

impl App {
    /// Load, enrich, and render each requested collection in order.
    ///
    /// A failed listing fetch is fatal to that load and to the run: the
    /// presenter shows an error banner instead of a partial batch and the
    /// error is returned. Enrichment lookups can never fail a load.
    pub async fn run(
        config: Config,
        collections: Vec<CollectionKind>,
        policy: SortPolicy,
    ) -> Result<()> {
        let opensea = Arc::new(OpenSeaClient::new(
            config.network.api_url.clone(),
            config.network.api_key.clone(),
        ));
        let staking = Arc::new(StakingClient::new(config.network.staking_api_url.clone()));
        let enricher = Enricher::new(opensea.clone(), staking);
        let presenter = TablePresenter::new();

        for collection in collections {
            info!(collection = %collection, slug = collection.slug(), "Loading listings");

            let raw = match opensea.listings(collection.slug()).await {
                Ok(raw) => raw,
                Err(err) => {
                    presenter.render_error(&format!(
                        "Failed to fetch {collection} listings. Please try again."
                    ));
                    error!(collection = %collection, error = %err, "Listing fetch failed");
                    return Err(err.into());
                }
            };

            let listings: Vec<Listing> = raw
                .iter()
                .map(|raw| Listing::from_raw(raw, collection))
                .collect();

            let enriched = enricher.enrich(listings, policy, &presenter).await;
            info!(
                collection = %collection,
                listings = enriched.len(),
                images_cached = enricher.cached_images(),
                points_cached = enricher.cached_points(),
                "Load complete"
            );
        }

        Ok(())
    }
}
