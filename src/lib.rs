//! Seedscout - marketplace listing enrichment and best-deal ranking.
//!
//! This crate fetches the live listing feed for a fixed set of seed NFT
//! collections, enriches every listing with an image URL and a staking-points
//! score from two independent services, and ranks the combined results.
//!
//! # Architecture
//!
//! Enrichment is built around a per-key single-flight cache so that two
//! listings (or two loads) asking for the same token never issue the same
//! lookup twice:
//!
//! - **[`cache`]** - `FlightCache`, the generic single-flight deduplicator
//! - **[`enrich`]** - the fan-out/fan-in orchestrator and its two-phase
//!   render contract (immediate paint, then enriched + ranked paint)
//! - **[`domain`]** - listing records, identity keys, and ranking policies
//! - **[`marketplace`]** - trait seams and REST clients for the listing,
//!   asset-metadata, and staking-points services
//! - **[`present`]** - the render port plus the terminal table presenter
//! - **[`config`]** - TOML configuration with environment overrides
//! - **[`error`]** - error types for the crate
//! - **[`app`]** - application orchestration
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use seedscout::config::Config;
//! use seedscout::enrich::Enricher;
//! use seedscout::marketplace::{OpenSeaClient, StakingClient};
//!
//! let config = Config::default();
//! let opensea = Arc::new(OpenSeaClient::new(
//!     config.network.api_url.clone(),
//!     config.network.api_key.clone(),
//! ));
//! let staking = Arc::new(StakingClient::new(config.network.staking_api_url.clone()));
//! let enricher = Enricher::new(opensea, staking);
//! ```

pub mod app;
pub mod cache;
pub mod config;
pub mod domain;
pub mod enrich;
pub mod error;
pub mod marketplace;
pub mod present;
