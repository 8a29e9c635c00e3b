//! # kanka-client
//!
//! A typed async client for the [Kanka](https://kanka.io) campaign-management
//! API (see <https://kanka.io/docs/1.0> for the API documentation).
//!
//! ## Features
//!
//! - **Typed envelopes**: every response decodes into `Envelope<T>` with the
//!   caller-supplied payload shape
//! - **Self rate limiting**: a sliding-window gate keeps the client inside
//!   the API's per-minute request quota without relying on 429 responses
//! - **Pagination**: `fetch_all` follows "next" links until the collection
//!   is exhausted, preserving cross-page order
//! - **TLS enforcement**: insecure base URLs and pagination links are
//!   upgraded to `https://`, and foreign links are refused outright
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use kanka_client::{Client, ClientConfig, Result};
//! use reqwest::Method;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Campaign {
//!     id: u32,
//!     name: String,
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = Client::new(ClientConfig::builder().token("...").build())?;
//!
//!     // All pages, in order
//!     let campaigns = client
//!         .fetch_all::<Campaign>(Method::GET, "/campaigns")
//!         .await
//!         .into_result()?;
//!
//!     // A single record
//!     let campaign: Campaign = client.fetch_one("/campaigns/1").await?;
//!
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::cast_possible_truncation)]

/// Error types for the client
pub mod error;

/// Client configuration
pub mod config;

/// Wire types (envelope, links, meta, page)
pub mod types;

/// Request dispatcher and rate gate
pub mod http;

/// Pagination driver
pub mod pagination;

pub use config::{ClientConfig, ClientConfigBuilder, BASE_URL_V1};
pub use error::{Error, Result};
pub use http::{Client, RateGate};
pub use pagination::FetchOutcome;
pub use types::{Envelope, Links, Meta, Page};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
