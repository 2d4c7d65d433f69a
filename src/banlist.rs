//! Resolution pass and banlist file emission.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use rusqlite::Connection;

use crate::card_db::lookup_card_id;
use crate::error::SyncResult;
use crate::models::{CardEntry, Resolution, ResolvedEntry, UnresolvedEntry};

/// First line of the emitted file; EDOPro uses it as the banlist section name.
pub const BANLIST_HEADER: &str = "!Genesys";

/// Resolves every fetched entry against the card database.
///
/// A name the database does not know is not a failure; it is recorded and
/// reported so the operator can fix the name or update the database.
pub fn resolve_entries(conn: &Connection, entries: &[CardEntry]) -> SyncResult<Resolution> {
    let mut resolution = Resolution::default();

    for entry in entries {
        match lookup_card_id(conn, &entry.name)? {
            Some(card_id) => resolution.resolved.push(ResolvedEntry {
                card_id,
                points: entry.points.clone(),
            }),
            None => {
                log::debug!("No card ID found for '{}'", entry.name);
                resolution.unresolved.push(UnresolvedEntry {
                    name: entry.name.clone(),
                    points: entry.points.clone(),
                });
            }
        }
    }

    Ok(resolution)
}

/// Writes the banlist file: the section header, then one line per resolved
/// card in source order.
pub fn write_banlist(path: &Path, resolved: &[ResolvedEntry]) -> SyncResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let mut out = BufWriter::new(File::create(path)?);
    writeln!(out, "{}", BANLIST_HEADER)?;
    for entry in resolved {
        writeln!(out, "{}", entry.to_line())?;
    }
    out.flush()?;

    log::info!(
        "Banlist written to {} ({} cards)",
        path.display(),
        resolved.len()
    );
    Ok(())
}
