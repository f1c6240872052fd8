//! Listing records and the typed raw-payload parse.
//!
//! - [`RawListing`] - the marketplace payload as it arrives over the wire
//! - [`Listing`] - the in-memory record the enrichment pipeline works on
//! - [`CollectionKind`] - the closed set of collections the feed covers

use std::fmt;

use serde::Deserialize;

use super::id::{ListingKey, TokenId};

/// Currency symbol assumed when the payload carries none.
pub const DEFAULT_CURRENCY: &str = "ETH";

/// Minor units per whole currency unit (wei per ETH).
const MINOR_UNITS: f64 = 1e18;

/// Image shown for listings whose identity cannot be derived.
const MISSING_IDENTITY_IMAGE: &str = "https://via.placeholder.com/300x300?text=No+ID";

/// The collections the feed covers. Assigned by the caller when a batch is
/// loaded, never derived from the listing payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionKind {
    Mythic,
    Ancient,
}

impl CollectionKind {
    /// Marketplace collection slug this kind is listed under.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Mythic => "mythicseed",
            Self::Ancient => "ancientseed",
        }
    }

    /// Human-readable label, also the `type` parameter of the staking API.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Mythic => "Mythic",
            Self::Ancient => "Ancient",
        }
    }
}

impl fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A marketplace listing as returned by the listing endpoint.
///
/// Every level of nesting is optional: payloads in the wild omit whole
/// subtrees, and a missing field must parse as absence rather than fail the
/// batch.
#[derive(Debug, Clone, Deserialize)]
pub struct RawListing {
    #[serde(default)]
    pub price: Option<ListingPrice>,
    #[serde(default)]
    pub protocol_data: Option<ProtocolData>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListingPrice {
    #[serde(default)]
    pub current: Option<CurrentPrice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CurrentPrice {
    /// Price in minor units (wei), as a decimal string.
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProtocolData {
    #[serde(default)]
    pub parameters: Option<ProtocolParameters>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProtocolParameters {
    #[serde(default)]
    pub offer: Option<Vec<OfferItem>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OfferItem {
    /// Contract address of the offered token.
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default, rename = "identifierOrCriteria")]
    pub identifier_or_criteria: Option<String>,
    /// Image URL occasionally embedded directly in the offer.
    #[serde(default, rename = "imageUrl")]
    pub image_url: Option<String>,
}

impl RawListing {
    /// The first offer item, the only one the feed consults.
    fn offer_item(&self) -> Option<&OfferItem> {
        self.protocol_data
            .as_ref()?
            .parameters
            .as_ref()?
            .offer
            .as_ref()?
            .first()
    }

    /// Derive the stable identity of this listing.
    ///
    /// Fails closed: a payload without the expected offer structure yields
    /// `None`, which downstream code treats as "cannot enrich, show
    /// placeholder" rather than an error.
    #[must_use]
    pub fn listing_key(&self) -> Option<ListingKey> {
        let offer = self.offer_item()?;
        let contract = offer.token.as_deref()?;
        let token = offer.identifier_or_criteria.as_deref()?;
        Some(ListingKey::new(contract, token))
    }

    fn embedded_image(&self) -> Option<&str> {
        self.offer_item()?.image_url.as_deref()
    }

    fn price_raw(&self) -> Option<&str> {
        self.price.as_ref()?.current.as_ref()?.value.as_deref()
    }

    fn currency(&self) -> Option<&str> {
        self.price.as_ref()?.current.as_ref()?.currency.as_deref()
    }
}

/// A listing enriched (or about to be enriched) with an image URL and a
/// staking-points score.
///
/// Core fields are fixed at construction; the two enrichment slots are
/// written at most once and never re-fetched for the same in-memory record.
#[derive(Debug, Clone)]
pub struct Listing {
    key: Option<ListingKey>,
    price_raw: Option<String>,
    currency: String,
    collection: CollectionKind,
    embedded_image: Option<String>,
    image_url: Option<String>,
    staking_points: Option<u64>,
}

impl Listing {
    /// Build a listing from a raw payload, tagging it with the collection
    /// the caller loaded it from.
    #[must_use]
    pub fn from_raw(raw: &RawListing, collection: CollectionKind) -> Self {
        Self {
            key: raw.listing_key(),
            price_raw: raw.price_raw().map(str::to_string),
            currency: raw
                .currency()
                .unwrap_or(DEFAULT_CURRENCY)
                .to_string(),
            collection,
            embedded_image: raw.embedded_image().map(str::to_string),
            image_url: None,
            staking_points: None,
        }
    }

    /// Get the listing identity, if one could be derived.
    #[must_use]
    pub const fn key(&self) -> Option<&ListingKey> {
        self.key.as_ref()
    }

    /// Get the collection this listing was loaded from.
    #[must_use]
    pub const fn collection(&self) -> CollectionKind {
        self.collection
    }

    /// Get the currency symbol.
    #[must_use]
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Image URL embedded directly in the listing payload, if any.
    #[must_use]
    pub fn embedded_image(&self) -> Option<&str> {
        self.embedded_image.as_deref()
    }

    /// Get the resolved image URL, if resolution has completed.
    #[must_use]
    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    /// Get the resolved staking points, if resolution has completed.
    #[must_use]
    pub const fn staking_points(&self) -> Option<u64> {
        self.staking_points
    }

    /// Record the resolved image URL. First write wins; the value never
    /// changes once set.
    pub fn set_image_url(&mut self, url: impl Into<String>) {
        if self.image_url.is_none() {
            self.image_url = Some(url.into());
        }
    }

    /// Record the resolved staking points. First write wins.
    pub fn set_staking_points(&mut self, points: u64) {
        if self.staking_points.is_none() {
            self.staking_points = Some(points);
        }
    }

    /// Whether the payload carried a price at all.
    #[must_use]
    pub const fn has_price(&self) -> bool {
        self.price_raw.is_some()
    }

    /// Price in whole currency units.
    ///
    /// An absent or unparseable raw price is "unavailable" and reads as 0.0;
    /// it is never an error.
    #[must_use]
    pub fn price_value(&self) -> f64 {
        self.price_raw
            .as_deref()
            .and_then(|raw| raw.parse::<f64>().ok())
            .map(|minor| minor / MINOR_UNITS)
            .filter(|value| value.is_finite() && *value >= 0.0)
            .unwrap_or(0.0)
    }

    /// Staking points earned per whole currency unit of price.
    ///
    /// Zero price or zero points both yield 0.0, so unenrichable listings
    /// never gain a ranking advantage.
    #[must_use]
    pub fn points_per_price(&self) -> f64 {
        let points = self.staking_points.unwrap_or(0);
        let price = self.price_value();
        if price == 0.0 || points == 0 {
            return 0.0;
        }
        points as f64 / price
    }

    /// Display name, derived from the token identifier.
    #[must_use]
    pub fn display_name(&self) -> String {
        match &self.key {
            Some(key) => format!("NFT #{}", key.token()),
            None => "Unknown NFT".to_string(),
        }
    }

    /// Price formatted for display, with a fixed four-decimal convention.
    #[must_use]
    pub fn display_price(&self) -> String {
        match self.price_raw.as_deref().and_then(|raw| raw.parse::<f64>().ok()) {
            Some(minor) if minor.is_finite() && minor >= 0.0 => {
                format!("{:.4} {}", minor / MINOR_UNITS, self.currency)
            }
            _ => "Price not available".to_string(),
        }
    }

    /// Image to paint before (or instead of) a resolved one.
    #[must_use]
    pub fn placeholder_image(&self) -> String {
        match &self.key {
            Some(key) => fallback_image(key.token()),
            None => missing_identity_image().to_string(),
        }
    }
}

/// Deterministic placeholder image for a token whose lookup failed or has
/// not completed yet. Derived from the identity so it is stable across
/// calls and cacheable like a real answer.
#[must_use]
pub fn fallback_image(token: &TokenId) -> String {
    format!("https://via.placeholder.com/300x300/667eea/ffffff?text=NFT+%23{token}")
}

/// Placeholder for listings with no derivable identity.
#[must_use]
pub fn missing_identity_image() -> &'static str {
    MISSING_IDENTITY_IMAGE
}
