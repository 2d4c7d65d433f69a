//! Legacy HTML strategy: scrape the card table from the Genesys page.

use scraper::{Html, Selector};

use super::CardSource;
use crate::error::{SyncError, SyncResult};
use crate::models::CardEntry;

/// Element id of the point-list table on the Genesys page.
const TABLE_ID: &str = "tablepress-genesys";

pub struct HtmlSource {
    url: String,
}

impl HtmlSource {
    pub fn new(url: String) -> Self {
        Self { url }
    }

    fn fetch_page(&self) -> SyncResult<String> {
        log::info!("Fetching Genesys page: {}", self.url);

        let response = reqwest::blocking::Client::new()
            .get(&self.url)
            .header("User-Agent", "GenesysSync/1.0")
            .send()?;

        if !response.status().is_success() {
            return Err(SyncError::HttpStatus {
                url: self.url.clone(),
                status: response.status(),
            });
        }

        Ok(response.text()?)
    }
}

impl CardSource for HtmlSource {
    fn fetch(&self) -> SyncResult<Vec<CardEntry>> {
        let html = self.fetch_page()?;
        parse_card_table(&html)
    }
}

/// Extracts (name, points) rows from the point-list table.
///
/// A row contributes an entry when it has at least two cells: name first,
/// points second, both trimmed. Shorter rows (spacers, section headers) are
/// skipped.
pub fn parse_card_table(html: &str) -> SyncResult<Vec<CardEntry>> {
    let document = Html::parse_document(html);

    // Selector strings are fixed and known valid.
    let table_selector = Selector::parse(&format!("table#{}", TABLE_ID)).unwrap();
    let row_selector = Selector::parse("tbody tr").unwrap();
    let cell_selector = Selector::parse("td").unwrap();

    let table = document
        .select(&table_selector)
        .next()
        .ok_or_else(|| SyncError::MissingTable {
            table_id: TABLE_ID.to_string(),
        })?;

    let mut cards = Vec::new();
    for row in table.select(&row_selector) {
        let cells: Vec<_> = row.select(&cell_selector).collect();
        if cells.len() < 2 {
            continue;
        }
        let name = cell_text(&cells[0]);
        let points = cell_text(&cells[1]);
        cards.push(CardEntry::new(name, points));
    }

    log::info!("Parsed {} cards from the Genesys table", cards.len());
    Ok(cards)
}

fn cell_text(cell: &scraper::ElementRef<'_>) -> String {
    cell.text().collect::<String>().trim().to_string()
}

#[cfg(test)]
#[path = "html_tests.rs"]
mod tests;
