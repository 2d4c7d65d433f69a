pub mod banlist;
pub mod card_db;
pub mod checkpoint;
pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod source;

// Re-export commonly used items
pub use banlist::{resolve_entries, write_banlist, BANLIST_HEADER};
pub use card_db::{ensure_card_db, lookup_card_id, open_card_db};
pub use checkpoint::{read_checkpoint, write_checkpoint};
pub use config::{SourceStrategy, SyncConfig};
pub use error::{SyncError, SyncResult};
pub use models::{CardEntry, Resolution, ResolvedEntry, RunSummary, UnresolvedEntry};
pub use source::{ApiSource, CardSource, HtmlSource};
