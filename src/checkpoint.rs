//! Tab-separated checkpoint file between fetch and resolution.
//!
//! The fetched list is written to disk before any database work so the
//! resolution step can be re-run (or the file hand-edited) without hitting
//! the network again.

use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::Path;

use crate::error::SyncResult;
use crate::models::CardEntry;

/// Writes one `name<TAB>points` line per entry, in input order.
///
/// Card names are assumed to contain no tabs or newlines; nothing is escaped.
pub fn write_checkpoint(path: &Path, entries: &[CardEntry]) -> SyncResult<()> {
    let mut out = BufWriter::new(File::create(path)?);
    for entry in entries {
        writeln!(out, "{}\t{}", entry.name, entry.points)?;
    }
    out.flush()?;
    Ok(())
}

fn parse_line(line: &str) -> Option<CardEntry> {
    let parts: Vec<&str> = line.trim().split('\t').collect();
    if parts.len() != 2 {
        return None;
    }
    Some(CardEntry::new(parts[0], parts[1]))
}

/// Reads a checkpoint file back into card entries.
///
/// Lines that do not split into exactly two tab-separated fields are dropped
/// silently; a malformed line must not abort the batch.
pub fn read_checkpoint(path: &Path) -> SyncResult<Vec<CardEntry>> {
    let file = File::open(path)?;
    let reader = io::BufReader::new(file);
    let mut entries = Vec::new();

    for line in reader.lines() {
        let line = line?;
        if let Some(entry) = parse_line(&line) {
            entries.push(entry);
        }
    }

    Ok(entries)
}
