//! # Centrifuge HTTP API
//!
//! An async Rust client for the administrative HTTP API of a Centrifuge
//! real-time messaging server. It supports:
//!
//! - Publishing and broadcasting data into channels
//! - Unsubscribing and disconnecting users
//! - Presence, presence stats, history and history removal queries
//! - Channel listing and server info
//! - HMAC-SHA256 connection tokens and private channel signs
//!
//! Responses are handed back as raw `reqwest::Response` values; non-2xx
//! statuses are not treated as errors.
//!
//! For usage examples, see `demos/publish.rs`.

pub mod client;
pub mod config;
pub mod error;
pub mod request;
pub mod signature;

pub use client::Client;
pub use config::Config;
pub use error::{Error, Result};
