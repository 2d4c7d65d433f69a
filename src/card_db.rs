//! Local card database (cards.cdb) access.
//!
//! The database is an externally maintained SQLite file mapping card names
//! to their numeric IDs. This module only ever reads it; provisioning
//! downloads the file once if it is missing and never refreshes it.

use std::path::{Path, PathBuf};

use rusqlite::{Connection, OptionalExtension};

use crate::config::SyncConfig;
use crate::error::{SyncError, SyncResult};

/// Makes sure the card database exists locally and returns its path.
///
/// An existing file is returned as-is with no freshness check. Otherwise the
/// database is downloaded from the configured mirror and written verbatim.
pub fn ensure_card_db(config: &SyncConfig) -> SyncResult<PathBuf> {
    if config.db_path.exists() {
        log::debug!("Card database already present: {}", config.db_path.display());
        return Ok(config.db_path.clone());
    }
    download_card_db(&config.db_remote_url, &config.db_path)?;
    Ok(config.db_path.clone())
}

fn download_card_db(url: &str, dest: &Path) -> SyncResult<()> {
    log::info!("Card database missing, downloading from: {}", url);

    if let Some(parent) = dest.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let response = reqwest::blocking::Client::new()
        .get(url)
        .header("User-Agent", "GenesysSync/1.0")
        .send()?;

    if !response.status().is_success() {
        return Err(SyncError::HttpStatus {
            url: url.to_string(),
            status: response.status(),
        });
    }

    let bytes = response.bytes()?;
    std::fs::write(dest, &bytes)?;
    log::info!(
        "Wrote card database ({} bytes) to {}",
        bytes.len(),
        dest.display()
    );
    Ok(())
}

/// Opens the card database read-only for a resolution pass.
pub fn open_card_db(path: &Path) -> SyncResult<Connection> {
    let conn = Connection::open(path)?;
    Ok(conn)
}

/// Looks up the ID for an exact card name in the `texts` table.
///
/// Matching is case-sensitive with no normalization; a name the database
/// does not know yields `Ok(None)`, which callers treat as a normal outcome.
pub fn lookup_card_id(conn: &Connection, name: &str) -> SyncResult<Option<i64>> {
    let id = conn
        .query_row("SELECT id FROM texts WHERE name = ?1", [name], |row| {
            row.get(0)
        })
        .optional()?;
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(
            "CREATE TABLE texts (
                id   INTEGER NOT NULL PRIMARY KEY,
                name TEXT NOT NULL
            );",
        )
        .unwrap();
        conn
    }

    fn insert_card(conn: &Connection, id: i64, name: &str) {
        conn.execute(
            "INSERT INTO texts (id, name) VALUES (?1, ?2)",
            rusqlite::params![id, name],
        )
        .unwrap();
    }

    #[test]
    fn lookup_finds_exact_name() {
        let conn = test_conn();
        insert_card(&conn, 46986414, "Dark Magician");

        let id = lookup_card_id(&conn, "Dark Magician").unwrap();
        assert_eq!(id, Some(46986414));
    }

    #[test]
    fn lookup_unknown_name_is_none_not_error() {
        let conn = test_conn();
        insert_card(&conn, 46986414, "Dark Magician");

        let id = lookup_card_id(&conn, "Totally Fake Card").unwrap();
        assert_eq!(id, None);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let conn = test_conn();
        insert_card(&conn, 89631139, "Blue-Eyes White Dragon");

        assert_eq!(lookup_card_id(&conn, "blue-eyes white dragon").unwrap(), None);
        assert_eq!(
            lookup_card_id(&conn, "Blue-Eyes White Dragon").unwrap(),
            Some(89631139)
        );
    }
}
