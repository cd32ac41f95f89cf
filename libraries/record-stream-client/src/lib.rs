//! Record Machine - Streaming Service Client
//!
//! HTTP client for the signed-URL endpoint that fronts remote object
//! storage. Given an object path, the endpoint returns a time-limited
//! playable URL:
//!
//! ```text
//! POST { "objectPath": "...", "expiresIn": 3600 }
//!  200 -> { "signedUrl": "https://cdn.../object?signature=..." }
//!  400 -> { "error": "..." }
//! ```
//!
//! `expiresIn` is optional; the endpoint falls back to its one-hour default
//! when the field is omitted or invalid. URLs are never cached or
//! refreshed here — an expired URL is remedied by requesting a new one.
//!
//! [`SignedUrlClient`] implements [`record_playback::UrlResolver`], so it
//! plugs directly into the playback coordinator.

#![forbid(unsafe_code)]

mod client;
mod error;
mod types;

pub use client::{SignedUrlClient, StreamClientConfig};
pub use error::{Result, StreamClientError};
pub use types::{ErrorResponse, SignedUrlRequest, SignedUrlResponse};
