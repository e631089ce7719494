//! Spotify Web API payload types
//!
//! Data structures for (de)serializing Spotify Web API requests and
//! responses. Only the fields the sync consumes are modeled; unknown fields
//! are ignored on deserialization.

use serde::{Deserialize, Serialize};

/// Spotify paging object
///
/// See: https://developer.spotify.com/documentation/web-api/concepts/api-calls (paging)
#[derive(Debug, Clone, Deserialize)]
pub struct SpotifyPaging<T> {
    /// Link to this page
    #[serde(default)]
    pub href: Option<String>,

    /// Items on this page
    pub items: Vec<T>,

    /// Page size the server applied (may be smaller than requested)
    pub limit: u32,

    /// Link to the next page, if any
    #[serde(default)]
    pub next: Option<String>,

    /// Offset this page starts at
    pub offset: u32,

    /// Link to the previous page, if any
    #[serde(default)]
    pub previous: Option<String>,

    /// Total size of the listing as observed on this call
    pub total: u32,
}

/// Entry in the saved-tracks listing (`GET /me/tracks`)
#[derive(Debug, Clone, Deserialize)]
pub struct SpotifySavedTrack {
    /// When the track was saved (RFC 3339)
    #[serde(default)]
    pub added_at: Option<String>,

    /// The track itself; null for entries the service can no longer resolve
    #[serde(default)]
    pub track: Option<SpotifyTrackRef>,
}

/// Track fields the sync needs
#[derive(Debug, Clone, Deserialize)]
pub struct SpotifyTrackRef {
    /// Spotify URI (`spotify:track:...`); absent for unplayable entries
    #[serde(default)]
    pub uri: Option<String>,
}

/// Playlist resource (subset)
///
/// See: https://developer.spotify.com/documentation/web-api/reference/get-playlist
#[derive(Debug, Clone, Deserialize)]
pub struct SpotifyPlaylist {
    /// Playlist ID
    pub id: String,

    /// Display name
    pub name: String,

    /// Description, when set
    #[serde(default)]
    pub description: Option<String>,

    /// Public visibility flag; null when unknown
    #[serde(default)]
    pub public: Option<bool>,

    /// Collaborative flag
    #[serde(default)]
    pub collaborative: Option<bool>,

    /// Version token of the playlist contents
    #[serde(default)]
    pub snapshot_id: Option<String>,
}

/// Body of `POST /me/playlists`
#[derive(Debug, Clone, Serialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
    pub description: String,
    pub public: bool,
    pub collaborative: bool,
}

/// Body of `PUT`/`POST /playlists/{id}/tracks`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModifyTracksRequest {
    pub uris: Vec<String>,
}

/// Acknowledgement returned by the tracks write endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct SnapshotResponse {
    /// Version token after the write
    pub snapshot_id: String,
}
