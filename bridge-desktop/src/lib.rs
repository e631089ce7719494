//! # Desktop Bridge Implementations
//!
//! Default implementations of bridge traits for desktop platforms
//! (macOS, Windows, Linux).
//!
//! ## Overview
//!
//! This crate provides the production HTTP transport:
//! - `HttpClient` using `reqwest` with rustls TLS
//!
//! ## Usage
//!
//! ```ignore
//! use bridge_desktop::ReqwestHttpClient;
//! use bridge_traits::HttpClient;
//!
//! #[tokio::main]
//! async fn main() {
//!     let http_client = ReqwestHttpClient::new();
//!
//!     // Hand to a connector or service facade
//! }
//! ```

mod http;

pub use http::ReqwestHttpClient;
