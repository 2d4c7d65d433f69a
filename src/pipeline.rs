//! End-to-end sync run: fetch, checkpoint, resolve, emit.

use crate::banlist;
use crate::card_db;
use crate::checkpoint;
use crate::config::SyncConfig;
use crate::error::SyncResult;
use crate::models::RunSummary;
use crate::source;

/// Runs the whole pipeline once.
///
/// Every stage must succeed for the next to start; the only tolerated
/// partial outcome is card names the database cannot resolve, which are
/// returned in the summary instead of failing the run.
pub fn run(config: &SyncConfig) -> SyncResult<RunSummary> {
    let card_source = source::for_config(config);

    log::info!("Fetching current Genesys point list...");
    let fetched = card_source.fetch()?;

    log::info!(
        "Saving {} cards to {}",
        fetched.len(),
        config.intermediate_path.display()
    );
    checkpoint::write_checkpoint(&config.intermediate_path, &fetched)?;

    // Resolution works off the checkpoint, not the in-memory list, so a
    // re-run against an edited file behaves exactly like a fresh fetch.
    let cards = checkpoint::read_checkpoint(&config.intermediate_path)?;

    let db_path = card_db::ensure_card_db(config)?;
    let conn = card_db::open_card_db(&db_path)?;

    log::info!("Looking up card IDs for {} cards...", cards.len());
    let resolution = banlist::resolve_entries(&conn, &cards)?;

    banlist::write_banlist(&config.output_path, &resolution.resolved)?;

    Ok(RunSummary {
        fetched: cards.len(),
        resolved: resolution.resolved.len(),
        unresolved: resolution.unresolved,
        output_path: config.output_path.clone(),
    })
}
