//! # Spotify Provider
//!
//! Implements the `MusicProvider` trait against the Spotify Web API.
//!
//! ## Overview
//!
//! This module provides:
//! - Bearer authentication on every request
//! - Paginated saved-tracks and playlists listings
//! - Playlist creation with visibility flags
//! - Ordered playlist content writes (replace and append)
//! - Typed error classification, including rate-limit responses

pub mod connector;
pub mod error;
pub mod types;

pub use connector::SpotifyConnector;
pub use error::{Result, SpotifyError};
