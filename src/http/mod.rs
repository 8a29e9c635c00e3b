//! HTTP request core
//!
//! The dispatcher executes one authenticated call per invocation and the
//! rate gate keeps the client inside the API's per-minute request quota.

mod client;
mod rate_limit;

pub use client::Client;
pub use rate_limit::RateGate;
