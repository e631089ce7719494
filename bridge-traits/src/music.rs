//! Music Service Abstractions
//!
//! Provider-agnostic models and the trait a streaming-service connector
//! implements: paginated listings of the user's liked tracks and playlists,
//! playlist creation, and ordered playlist writes.

use async_trait::async_trait;

use crate::error::Result;

/// Maximum number of track identifiers the service accepts per write call.
///
/// This is a contract of the remote write endpoints, not a tunable; larger
/// inputs must be split into consecutive chunks of at most this size.
pub const MAX_WRITE_BATCH: usize = 100;

/// One page of a paginated listing.
///
/// The service reports the `limit` it actually applied (which may be smaller
/// than the one requested), the `offset` this page starts at, and the `total`
/// size of the listing as observed at call time. `total` is not stable: the
/// remote set can mutate between pages of one scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub limit: u32,
    pub offset: u32,
    pub total: u32,
}

impl<T> Page<T> {
    /// Offset of the page that follows this one.
    ///
    /// Advances by the server-reported `limit` rather than the requested
    /// constant, so a server that applies a smaller page size is still
    /// scanned without gaps.
    pub fn next_offset(&self) -> u32 {
        self.offset.saturating_add(self.limit)
    }

    /// Whether another page exists, judged against the `total` observed on
    /// this call (never a cached earlier value).
    pub fn has_more(&self) -> bool {
        self.next_offset() < self.total
    }
}

/// A track the user saved to their library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LikedTrack {
    /// Opaque identifier addressing the track on the service. Absent for
    /// entries the service can no longer address (removed or region-locked);
    /// such entries are skipped, never treated as errors.
    pub uri: Option<String>,
    /// Unix timestamp of when the track was saved, when the service reports
    /// one.
    pub added_at: Option<i64>,
}

/// A named, ordered, user-owned collection of tracks.
///
/// Identity is the `id`; the `name` is only used for discovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    pub id: String,
    pub name: String,
}

/// Parameters for creating a playlist.
#[derive(Debug, Clone)]
pub struct NewPlaylist {
    pub name: String,
    pub description: String,
    pub public: bool,
    pub collaborative: bool,
}

/// Music streaming service connector
///
/// One implementation per remote service. All listing operations share the
/// same pagination contract: the next page starts at
/// [`Page::next_offset`] and the scan is complete once that offset reaches
/// the latest observed `total`.
///
/// # Example
///
/// ```ignore
/// use bridge_traits::music::MusicProvider;
///
/// async fn count_liked(provider: &dyn MusicProvider) -> Result<u32> {
///     let first = provider.liked_page(1, 0).await?;
///     Ok(first.total)
/// }
/// ```
#[async_trait]
pub trait MusicProvider: Send + Sync {
    /// Fetch one page of the user's liked tracks.
    async fn liked_page(&self, limit: u32, offset: u32) -> Result<Page<LikedTrack>>;

    /// Fetch one page of the playlists owned by the current user.
    async fn playlists_page(&self, limit: u32, offset: u32) -> Result<Page<Playlist>>;

    /// Create a playlist for the current user.
    ///
    /// The service assigns the id and may normalize the name; the returned
    /// value is authoritative and callers must use it for subsequent
    /// operations instead of the requested values.
    async fn create_playlist(&self, new: NewPlaylist) -> Result<Playlist>;

    /// Replace the entire contents of a playlist with `uris`, in order.
    ///
    /// At most [`MAX_WRITE_BATCH`] identifiers per call. An empty slice
    /// purges the playlist.
    async fn replace_playlist_items(&self, playlist_id: &str, uris: &[String]) -> Result<()>;

    /// Append `uris` to the end of a playlist, in order.
    ///
    /// At most [`MAX_WRITE_BATCH`] identifiers per call.
    async fn append_playlist_items(&self, playlist_id: &str, uris: &[String]) -> Result<()>;
}
