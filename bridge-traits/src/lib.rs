//! # Host Bridge Traits
//!
//! Platform abstraction traits that must be implemented by each host platform.
//!
//! ## Overview
//!
//! This crate defines the contract between the sync core and everything that
//! touches the outside world. The core never constructs an HTTP stack or a
//! service client itself; it receives implementations of these traits and
//! stays testable against fakes.
//!
//! ## Traits
//!
//! - [`HttpClient`](http::HttpClient) - Async HTTP transport with bearer auth and TLS
//! - [`AuthFailureHook`](http::AuthFailureHook) - Injected callback on credential rejection
//! - [`MusicProvider`](music::MusicProvider) - Liked-track and playlist operations of one streaming service
//!
//! ## Error Handling
//!
//! All bridge traits use the [`BridgeError`](error::BridgeError) type for
//! consistent error handling. Implementations should:
//!
//! - Convert transport- and service-specific errors to `BridgeError`
//! - Provide actionable error messages
//! - Map credential rejection to `BridgeError::Unauthorized`, never a generic failure
//!
//! ## Thread Safety
//!
//! All bridge traits require `Send + Sync` bounds to support safe concurrent
//! usage across async tasks. Implementations must ensure thread safety.

pub mod error;
pub mod http;
pub mod music;

pub use error::BridgeError;

// Re-export commonly used types
pub use http::{AuthFailureHook, HttpClient, HttpMethod, HttpRequest, HttpResponse};
pub use music::{LikedTrack, MusicProvider, NewPlaylist, Page, Playlist, MAX_WRITE_BATCH};
