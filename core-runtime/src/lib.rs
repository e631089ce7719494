//! # Core Runtime Module
//!
//! Provides foundational runtime infrastructure for the workspace:
//! - Logging and tracing infrastructure
//!
//! ## Overview
//!
//! This crate establishes the logging conventions used throughout the system.
//! Embedders initialize it once at startup; every other crate just emits
//! `tracing` events and trusts the subscriber configured here.

pub mod error;
pub mod logging;

pub use error::{Error, Result};
