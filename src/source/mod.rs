//! Acquisition of the authoritative (name, points) list.
//!
//! Two interchangeable strategies exist: scraping the card table from the
//! static Genesys page, and walking the paginated point-list API. Which one
//! runs is a configuration choice, not a code path difference downstream.

pub mod api;
pub mod html;

use crate::config::{SourceStrategy, SyncConfig};
use crate::error::SyncResult;
use crate::models::CardEntry;

pub use api::ApiSource;
pub use html::HtmlSource;

/// A strategy that produces the complete current point list.
pub trait CardSource {
    fn fetch(&self) -> SyncResult<Vec<CardEntry>>;
}

/// Builds the card source selected by the configuration.
pub fn for_config(config: &SyncConfig) -> Box<dyn CardSource> {
    match config.source {
        SourceStrategy::Html => Box::new(HtmlSource::new(config.page_url.clone())),
        SourceStrategy::Api => Box::new(ApiSource::new(config.api_endpoint.clone())),
    }
}
