//! # Liked Mirror Sync
//!
//! One-way reconciliation of a user's liked tracks into a named destination
//! playlist on the same service.
//!
//! ## Overview
//!
//! A mirror run recomputes the full desired state every time and fully
//! overwrites the destination, so runs are idempotent and safe to repeat
//! after any failure. There is no delta sync, no bidirectional merge, and no
//! conflict handling against concurrent external edits.
//!
//! ## Components
//!
//! - **Liked-Set Fetcher** (`fetcher`): drains the paginated liked listing
//!   into the ordered desired-state sequence
//! - **Playlist Resolver** (`resolver`): finds the destination by exact name
//!   among the user's playlists
//! - **Content Replacer** (`replacer`): overwrites the destination in chunks
//!   of at most the provider's write ceiling
//! - **Mirror Coordinator** (`coordinator`): sequences the stages and
//!   reports a run summary

pub mod coordinator;
pub mod error;
pub mod fetcher;
pub mod replacer;
pub mod resolver;

#[cfg(test)]
pub(crate) mod testing;

pub use coordinator::{MirrorConfig, MirrorCoordinator, MirrorSummary};
pub use error::{Result, SyncError};
pub use fetcher::fetch_all_liked_uris;
pub use replacer::replace_all_items;
pub use resolver::find_playlist_by_name;
