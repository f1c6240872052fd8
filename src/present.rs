//! The render port and its terminal implementation.
//!
//! The enrichment pipeline drives a [`Present`] implementation through two
//! sequenced paints per load: an immediate one from whatever is already
//! known, and a final one once every lookup has settled. Everything behind
//! the trait is presentation glue; the pipeline never inspects what a
//! presenter does with the cards.

use owo_colors::OwoColorize;
use parking_lot::Mutex;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::domain::Listing;

/// One renderable listing with its highlight eligibility.
#[derive(Debug, Clone)]
pub struct Card {
    pub listing: Listing,
    /// True only for the top entry of a best-deal ranked final paint whose
    /// ratio is strictly positive.
    pub best_deal: bool,
}

/// Render sink for the two-phase display contract.
pub trait Present: Send + Sync {
    /// Phase 1: paint the batch immediately from cached or placeholder
    /// values, in input order. Must not suspend.
    fn render_initial(&self, cards: &[Card]);

    /// Phase 2: paint the fully enriched batch in display order.
    fn render_final(&self, cards: &[Card]);

    /// The batch was empty; nothing to enrich or rank.
    fn render_empty(&self);

    /// A load failed outright. The view is cleared and replaced with the
    /// message; no partial batch is shown.
    fn render_error(&self, message: &str);
}

#[derive(Tabled)]
struct ListingRow {
    #[tabled(rename = "Listing")]
    name: String,
    #[tabled(rename = "Collection")]
    collection: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Points")]
    points: String,
    #[tabled(rename = "Pts/ETH")]
    ratio: String,
    #[tabled(rename = "Image")]
    image: String,
    #[tabled(rename = "")]
    badge: String,
}

impl From<&Card> for ListingRow {
    fn from(card: &Card) -> Self {
        let listing = &card.listing;
        let ratio = listing.points_per_price();
        Self {
            name: listing.display_name(),
            collection: listing.collection().to_string(),
            price: listing.display_price(),
            points: match listing.staking_points() {
                Some(points) => points.to_string(),
                None => "...".to_string(),
            },
            ratio: if ratio > 0.0 {
                format!("{ratio:.2}")
            } else {
                "-".to_string()
            },
            image: listing
                .image_url()
                .map(str::to_string)
                .unwrap_or_else(|| listing.placeholder_image()),
            badge: if card.best_deal {
                "\u{1f525} best deal".to_string()
            } else {
                String::new()
            },
        }
    }
}

/// Terminal presenter: prints each paint as a table and keeps a spinner
/// alive between the two while lookups are settling.
pub struct TablePresenter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl TablePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn print_table(cards: &[Card]) {
        let rows: Vec<ListingRow> = cards.iter().map(ListingRow::from).collect();
        let mut table = Table::new(rows);
        table.with(Style::rounded());
        println!("{table}");
    }

    fn clear_spinner(&self) {
        if let Some(spinner) = self.spinner.lock().take() {
            spinner.finish_and_clear();
        }
    }

    fn start_spinner(&self, message: &str) {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner} {msg}").unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(80));
        *self.spinner.lock() = Some(spinner);
    }
}

impl Default for TablePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Present for TablePresenter {
    fn render_initial(&self, cards: &[Card]) {
        self.clear_spinner();
        println!("{} ({} listings)", "Listings".bold(), cards.len());
        Self::print_table(cards);
        self.start_spinner("Resolving images and staking points...");
    }

    fn render_final(&self, cards: &[Card]) {
        self.clear_spinner();
        println!("{}", "Enriched listings".bold());
        Self::print_table(cards);
        if let Some(best) = cards.iter().find(|card| card.best_deal) {
            println!(
                "{} {} at {}",
                "Best deal:".yellow().bold(),
                best.listing.display_name(),
                best.listing.display_price()
            );
        }
    }

    fn render_empty(&self) {
        self.clear_spinner();
        println!("No listings found.");
    }

    fn render_error(&self, message: &str) {
        self.clear_spinner();
        eprintln!("{} {}", "error:".red().bold(), message);
    }
}
