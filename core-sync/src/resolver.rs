//! # Playlist Resolver
//!
//! Stage 2 of a mirror run: locates the destination playlist by name among
//! the playlists the current user owns. Creation on a miss is the
//! coordinator's decision, not this module's.

use bridge_traits::music::{MusicProvider, Playlist};
use tracing::debug;

use crate::fetcher::PAGE_SIZE;
use crate::Result;

/// Search the current user's playlists for an exact name match.
///
/// Pages through the listing under the same pagination contract as the
/// liked-set fetch and returns the first playlist whose name is byte-equal
/// to `name`. Exhausting the listing without a match returns `None`, which
/// is a normal outcome, not an error.
///
/// Limitation: if the service allows duplicate playlist names, the first
/// match in listing order wins and that order is service-defined. Callers
/// that may face duplicates should resolve an id themselves instead of
/// relying on a name.
pub async fn find_playlist_by_name(
    provider: &dyn MusicProvider,
    name: &str,
) -> Result<Option<Playlist>> {
    let mut offset = 0u32;

    loop {
        let page = provider.playlists_page(PAGE_SIZE, offset).await?;

        debug!(
            offset,
            received = page.items.len(),
            total = page.total,
            "Scanned playlists page"
        );

        let has_more = page.has_more();
        let next_offset = page.next_offset();

        if let Some(found) = page.items.into_iter().find(|p| p.name == name) {
            debug!(playlist_id = %found.id, "Found destination playlist");
            return Ok(Some(found));
        }

        if !has_more {
            return Ok(None);
        }
        offset = next_offset;
    }
}
