//! Paginated point-list API strategy.
//!
//! The endpoint answers form-encoded POSTs with a JSON envelope:
//! `{ "Success": "Success", "Result": { "TotalPages": n, "Results": [...] } }`.
//! Pages are fetched one after another; a failure on any page aborts the
//! whole fetch rather than returning a partial list.

use std::time::Duration;

use serde::Deserialize;

use super::CardSource;
use crate::error::{SyncError, SyncResult};
use crate::models::CardEntry;

const RESULTS_PER_PAGE: u32 = 100;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Deserialize)]
struct PointListResponse {
    #[serde(rename = "Success")]
    success: Option<String>,
    #[serde(rename = "Result")]
    result: Option<PointListPage>,
}

#[derive(Debug, Deserialize)]
struct PointListPage {
    #[serde(rename = "TotalPages")]
    total_pages: u32,
    #[serde(rename = "Results", default)]
    results: Vec<PointListRecord>,
}

#[derive(Debug, Deserialize)]
struct PointListRecord {
    #[serde(rename = "DisplayCardName")]
    display_card_name: Option<String>,
    #[serde(rename = "Name")]
    name: Option<String>,
    #[serde(rename = "Points")]
    points: Option<serde_json::Number>,
}

impl PointListRecord {
    /// Maps a raw record to a card entry.
    ///
    /// The display name wins over the plain name; records without a usable
    /// name or without points are dropped.
    fn to_entry(&self) -> Option<CardEntry> {
        let name = [self.display_card_name.as_deref(), self.name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|name| !name.is_empty())?;
        let points = self.points.as_ref()?.to_string();
        Some(CardEntry::new(name, points))
    }
}

pub struct ApiSource {
    endpoint: String,
}

impl ApiSource {
    pub fn new(endpoint: String) -> Self {
        Self { endpoint }
    }

    fn fetch_page(&self, page: u32) -> SyncResult<PointListPage> {
        log::debug!("Requesting point list page {}", page);

        let response = reqwest::blocking::Client::new()
            .post(&self.endpoint)
            .header("User-Agent", "GenesysSync/1.0")
            .timeout(REQUEST_TIMEOUT)
            .form(&[
                ("currentPage", page.to_string()),
                ("resultsPerPage", RESULTS_PER_PAGE.to_string()),
                ("searchTerm", String::new()),
            ])
            .send()?;

        if !response.status().is_success() {
            return Err(SyncError::HttpStatus {
                url: self.endpoint.clone(),
                status: response.status(),
            });
        }

        let body: PointListResponse = serde_json::from_str(&response.text()?)?;

        if body.success.as_deref() != Some("Success") {
            return Err(SyncError::Api {
                page,
                reason: "response lacks a success indicator".to_string(),
            });
        }
        body.result.ok_or_else(|| SyncError::Api {
            page,
            reason: "response lacks a Result payload".to_string(),
        })
    }
}

impl CardSource for ApiSource {
    fn fetch(&self) -> SyncResult<Vec<CardEntry>> {
        let first = self.fetch_page(1)?;
        let total_pages = first.total_pages;
        log::info!("Point list spans {} page(s)", total_pages);

        let mut records = first.results;
        for page in 2..=total_pages {
            let mut next = self.fetch_page(page)?;
            records.append(&mut next.results);
        }

        let cards: Vec<CardEntry> = records
            .iter()
            .filter_map(PointListRecord::to_entry)
            .collect();
        log::info!("Fetched {} cards from the point list API", cards.len());
        Ok(cards)
    }
}

#[cfg(test)]
#[path = "api_tests.rs"]
mod tests;
