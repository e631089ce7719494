//! # Liked-Set Fetcher
//!
//! Stage 1 of a mirror run: drains the paginated liked-tracks listing into
//! the ordered identifier sequence the destination playlist must be made to
//! equal (the desired state).

use bridge_traits::music::MusicProvider;
use tracing::{debug, warn};

use crate::Result;

/// Page size requested from the paginated listing endpoints.
pub(crate) const PAGE_SIZE: u32 = 50;

/// Drain the full liked-tracks listing into an ordered identifier sequence.
///
/// Starting at offset 0, requests pages of [`PAGE_SIZE`] and appends each
/// page's identifiers in received order. Entries without an identifier
/// (removed or region-locked tracks) are skipped, never treated as errors.
///
/// The scan advances by the limit the server actually applied, not the
/// requested constant, and terminates once the next offset reaches the
/// `total` observed on the latest page. Trusting the latest `total` means a
/// listing that mutates mid-scan cannot loop forever; a handful of items may
/// be skipped or double-counted in that window, which is accepted.
///
/// # Errors
///
/// Any provider failure aborts the whole fetch and propagates. A half-drained
/// sequence is never returned; it would describe a wrong desired state.
pub async fn fetch_all_liked_uris(provider: &dyn MusicProvider) -> Result<Vec<String>> {
    let mut uris = Vec::new();
    let mut offset = 0u32;
    let mut last_total: Option<u32> = None;

    loop {
        let page = provider.liked_page(PAGE_SIZE, offset).await?;

        if let Some(previous) = last_total {
            if previous != page.total {
                warn!(
                    previous,
                    current = page.total,
                    "Liked total changed mid-scan; trusting the latest value"
                );
            }
        }
        last_total = Some(page.total);

        let received = page.items.len();
        let has_more = page.has_more();
        let next_offset = page.next_offset();
        uris.extend(page.items.into_iter().filter_map(|track| track.uri));

        debug!(
            offset,
            received,
            collected = uris.len(),
            total = page.total,
            "Fetched liked page"
        );

        if !has_more {
            break;
        }
        offset = next_offset;
    }

    Ok(uris)
}
