//! Fixed configuration for a sync run.
//!
//! There are no command line flags; all URLs and paths live here so that
//! tests can substitute their own (mock servers, temp directories).

use std::path::PathBuf;

/// Which authoritative source to fetch the point list from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceStrategy {
    /// Scrape the card table from the static Genesys page.
    Html,
    /// Query the paginated point-list API.
    Api,
}

/// All paths and URLs used by one sync run.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    pub source: SourceStrategy,
    /// Genesys page used by the HTML strategy.
    pub page_url: String,
    /// POST endpoint used by the API strategy.
    pub api_endpoint: String,
    /// Checkpoint TSV written between fetch and resolution.
    pub intermediate_path: PathBuf,
    /// Local card database (cards.cdb).
    pub db_path: PathBuf,
    /// Raw-file mirror used to bootstrap the card database when absent.
    pub db_remote_url: String,
    /// Destination banlist file.
    pub output_path: PathBuf,
}

/// Returns the user's home directory, falling back to the working directory.
fn home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}

impl Default for SyncConfig {
    fn default() -> Self {
        let ignis = home_dir().join("Games").join("ProjectIgnis");
        Self {
            source: SourceStrategy::Api,
            page_url: "https://www.yugioh-card.com/en/genesys/".to_string(),
            api_endpoint: "https://www.yugioh-card.com/eu/_api/genesys/cardlist".to_string(),
            intermediate_path: PathBuf::from("genesys_cards.txt"),
            db_path: ignis.join("expansions").join("cards.cdb"),
            db_remote_url:
                "https://raw.githubusercontent.com/ProjectIgnis/BabelCDB/master/cards.cdb"
                    .to_string(),
            output_path: ignis.join("lflists").join("genesys.txt"),
        }
    }
}
