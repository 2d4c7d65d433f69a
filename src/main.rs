//! Genesys banlist sync.
//!
//! Fetches the current Genesys point list, resolves card names against the
//! local cards.cdb and writes an EDOPro lflist file.

use genesys_sync::{pipeline, SyncConfig};

fn main() {
    // Initialize logger. Set RUST_LOG environment variable to control log level.
    // Examples: RUST_LOG=info, RUST_LOG=warn, RUST_LOG=genesys_sync=debug
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = SyncConfig::default();
    let summary = match pipeline::run(&config) {
        Ok(summary) => summary,
        Err(e) => {
            log::error!("Sync failed: {e}");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    println!(
        "Banlist written to {} ({} of {} cards)",
        summary.output_path.display(),
        summary.resolved,
        summary.fetched
    );

    // Unresolved names are a warning, not a failure; list every one so the
    // operator can fix the name or refresh the database.
    if !summary.unresolved.is_empty() {
        println!(
            "{} cards were not found in the database:",
            summary.unresolved.len()
        );
        for card in &summary.unresolved {
            println!("  - {} {}", card.name, card.points);
        }
    }
}
