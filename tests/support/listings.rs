//! Listing fixtures built from wire-shaped payloads.

use seedscout::domain::{CollectionKind, Listing, RawListing};

/// Raw listing payload with an identity and a price in whole ETH.
pub fn raw_listing(contract: &str, token: &str, price_eth: u64) -> RawListing {
    serde_json::from_value(serde_json::json!({
        "price": { "current": { "value": format!("{price_eth}000000000000000000"), "currency": "ETH" } },
        "protocol_data": { "parameters": { "offer": [
            { "token": contract, "identifierOrCriteria": token }
        ]}}
    }))
    .expect("fixture payload parses")
}

/// Raw listing payload whose offer structure is missing entirely.
pub fn raw_listing_without_identity(price_eth: u64) -> RawListing {
    serde_json::from_value(serde_json::json!({
        "price": { "current": { "value": format!("{price_eth}000000000000000000") } }
    }))
    .expect("fixture payload parses")
}

/// Raw listing payload with an image URL embedded in the offer.
pub fn raw_listing_with_embedded_image(
    contract: &str,
    token: &str,
    price_eth: u64,
    image_url: &str,
) -> RawListing {
    serde_json::from_value(serde_json::json!({
        "price": { "current": { "value": format!("{price_eth}000000000000000000") } },
        "protocol_data": { "parameters": { "offer": [
            { "token": contract, "identifierOrCriteria": token, "imageUrl": image_url }
        ]}}
    }))
    .expect("fixture payload parses")
}

/// A ready-to-enrich listing tagged with a collection.
pub fn listing(contract: &str, token: &str, price_eth: u64, collection: CollectionKind) -> Listing {
    Listing::from_raw(&raw_listing(contract, token, price_eth), collection)
}
