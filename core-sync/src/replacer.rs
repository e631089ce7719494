//! # Content Replacer
//!
//! Stage 3 of a mirror run: overwrites a playlist's contents with the
//! desired-state sequence, split into write calls of at most
//! [`MAX_WRITE_BATCH`] identifiers.

use bridge_traits::music::{MusicProvider, MAX_WRITE_BATCH};
use tracing::debug;

use crate::{Result, SyncError};

/// Overwrite the playlist's contents with `uris`, in order.
///
/// The remote replace semantic (discard-and-set) is only available on the
/// first write; the remaining chunks are appended in order, which preserves
/// both chunk order and intra-chunk order, so the final playlist order
/// equals the input order exactly. An empty input issues a single replace
/// call with no identifiers, purging the playlist.
///
/// # Errors
///
/// A failure on the initial replace leaves the playlist untouched and
/// propagates as-is. An append failing after at least one successful write
/// leaves the playlist partially updated and surfaces as
/// [`SyncError::PartialWrite`] with the failed chunk index; no rollback is
/// attempted. Re-running the full sync is always safe because the next run
/// starts with a clean replace.
pub async fn replace_all_items(
    provider: &dyn MusicProvider,
    playlist_id: &str,
    uris: &[String],
) -> Result<()> {
    if uris.is_empty() {
        provider.replace_playlist_items(playlist_id, &[]).await?;
        debug!(playlist_id, "Purged playlist contents");
        return Ok(());
    }

    let chunks: Vec<&[String]> = uris.chunks(MAX_WRITE_BATCH).collect();
    let total_chunks = chunks.len();

    provider.replace_playlist_items(playlist_id, chunks[0]).await?;
    debug!(
        playlist_id,
        chunk = 0,
        total_chunks,
        count = chunks[0].len(),
        "Replaced playlist contents"
    );

    let mut applied = chunks[0].len();

    for (index, chunk) in chunks.iter().enumerate().skip(1) {
        if let Err(source) = provider.append_playlist_items(playlist_id, chunk).await {
            return Err(SyncError::PartialWrite {
                failed_chunk: index,
                total_chunks,
                tracks_applied: applied,
                source,
            });
        }

        applied += chunk.len();
        debug!(
            playlist_id,
            chunk = index,
            total_chunks,
            applied,
            "Appended playlist chunk"
        );
    }

    Ok(())
}
