//! # Mirror Coordinator
//!
//! Orchestrates one liked-mirror run against a music service provider.
//!
//! ## Workflow
//!
//! 1. Fetch the full liked-track identifier sequence (stage 1) and scan the
//!    user's playlists for the destination name (stage 2). The two listings
//!    are independent and read-only, so they run concurrently.
//! 2. Create the destination playlist if the scan came up empty. Creation
//!    waits for both listings, so a failed fetch never leaves a freshly
//!    created empty playlist behind.
//! 3. Overwrite the destination's contents with the fetched sequence
//!    (stage 3).
//! 4. Return a summary built from the server-returned playlist identity and
//!    the fetched count.
//!
//! No step is retried internally. A failed run leaves the destination in
//! whatever state the last successful call produced; re-running is always
//! safe because stage 3 starts with a full replace.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use core_sync::{MirrorConfig, MirrorCoordinator};
//! use std::sync::Arc;
//!
//! let coordinator = MirrorCoordinator::new(MirrorConfig::default(), provider);
//! let summary = coordinator.sync().await?;
//! println!("{} tracks mirrored into {}", summary.track_count, summary.playlist_name);
//! ```

use bridge_traits::music::{MusicProvider, NewPlaylist, Playlist};
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::fetcher::fetch_all_liked_uris;
use crate::replacer::replace_all_items;
use crate::resolver::find_playlist_by_name;
use crate::Result;

/// Mirror run configuration
#[derive(Debug, Clone)]
pub struct MirrorConfig {
    /// Name of the destination playlist, matched byte-equal during resolution
    pub destination_name: String,

    /// Description sent when the destination has to be created
    pub description: String,

    /// Whether a created destination is publicly visible
    pub public: bool,

    /// Whether a created destination accepts edits from other users
    pub collaborative: bool,
}

impl Default for MirrorConfig {
    fn default() -> Self {
        Self {
            destination_name: "Liked Mirror".to_string(),
            description: "Mirror of your liked tracks.".to_string(),
            public: false,
            collaborative: false,
        }
    }
}

impl MirrorConfig {
    pub fn with_destination_name(mut self, name: impl Into<String>) -> Self {
        self.destination_name = name.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Outcome of one completed mirror run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MirrorSummary {
    /// Server-assigned id of the destination playlist
    pub playlist_id: String,

    /// Server-reported name of the destination playlist
    pub playlist_name: String,

    /// Number of identifiers written to the destination
    pub track_count: usize,
}

/// Coordinator for one-way liked-track mirroring
pub struct MirrorCoordinator {
    config: MirrorConfig,
    provider: Arc<dyn MusicProvider>,
}

impl MirrorCoordinator {
    pub fn new(config: MirrorConfig, provider: Arc<dyn MusicProvider>) -> Self {
        Self { config, provider }
    }

    /// Run one full mirror pass and return its summary.
    ///
    /// Safe to re-invoke at any time: every run recomputes the desired state
    /// and fully overwrites the destination. Concurrent runs against the
    /// same destination name are the caller's responsibility to prevent.
    #[instrument(skip(self), fields(destination = %self.config.destination_name))]
    pub async fn sync(&self) -> Result<MirrorSummary> {
        let provider = self.provider.as_ref();

        let (uris, existing) = tokio::try_join!(
            fetch_all_liked_uris(provider),
            find_playlist_by_name(provider, &self.config.destination_name),
        )?;

        info!(track_count = uris.len(), "Computed desired state");

        let destination = match existing {
            Some(playlist) => {
                info!(playlist_id = %playlist.id, "Resolved existing destination");
                playlist
            }
            None => self.create_destination().await?,
        };

        replace_all_items(provider, &destination.id, &uris).await?;

        let summary = MirrorSummary {
            playlist_id: destination.id,
            playlist_name: destination.name,
            track_count: uris.len(),
        };

        info!(
            playlist_id = %summary.playlist_id,
            track_count = summary.track_count,
            "Mirror run complete"
        );

        Ok(summary)
    }

    /// Create the destination playlist, returning the server-assigned
    /// identity (the service may normalize the requested name).
    async fn create_destination(&self) -> Result<Playlist> {
        let created = self
            .provider
            .create_playlist(NewPlaylist {
                name: self.config.destination_name.clone(),
                description: self.config.description.clone(),
                public: self.config.public,
                collaborative: self.config.collaborative,
            })
            .await?;

        info!(playlist_id = %created.id, "Created destination playlist");

        Ok(created)
    }
}
