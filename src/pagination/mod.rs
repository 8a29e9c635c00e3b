//! Pagination driver
//!
//! Turns the dispatcher's single-page calls into complete result sets by
//! following the envelope's "next" cursor until it runs out. Ordering is
//! guaranteed within one fetch: page N's records precede page N+1's.

use crate::error::{Error, Result};
use crate::http::Client;
use reqwest::Method;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Result of a multi-page fetch
///
/// When a page fails mid-way the loop stops, but the records accumulated
/// from earlier pages are kept. Callers must check [`error`] before
/// treating the result set as complete.
///
/// [`error`]: FetchOutcome::error
#[derive(Debug)]
pub struct FetchOutcome<T> {
    /// Records accumulated in cross-page response order
    pub records: Vec<T>,
    /// The error that stopped pagination, if any
    pub error: Option<Error>,
}

impl<T> FetchOutcome<T> {
    /// Check whether every page was consumed without error
    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }

    /// Convert into a `Result`, discarding partial records on error
    pub fn into_result(self) -> Result<Vec<T>> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.records),
        }
    }
}

impl Client {
    /// Fetch every page of a collection endpoint
    ///
    /// Dispatches `endpoint`, appends the decoded records, and keeps
    /// following the returned cursor until no next page remains or a page
    /// fails. A failure on page K still returns the K-1 pages already
    /// accumulated, alongside the error.
    pub async fn fetch_all<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
    ) -> FetchOutcome<T> {
        let mut records = Vec::new();
        let mut cursor = Some(endpoint.to_string());
        let mut pages = 0u32;

        while let Some(url) = cursor {
            match self.execute::<Vec<T>>(method.clone(), &url).await {
                Ok(page) => {
                    pages += 1;
                    records.extend(page.data);
                    cursor = page.next;
                }
                Err(error) => {
                    warn!(%endpoint, pages, records = records.len(), %error, "fetch stopped early");
                    return FetchOutcome {
                        records,
                        error: Some(error),
                    };
                }
            }
        }

        debug!(%endpoint, pages, records = records.len(), "fetch complete");
        FetchOutcome {
            records,
            error: None,
        }
    }

    /// Fetch a single record
    ///
    /// The degenerate case of [`fetch_all`](Client::fetch_all): one GET
    /// against `/resource/{id}`, no pagination loop.
    pub async fn fetch_one<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let page = self.execute::<T>(Method::GET, endpoint).await?;
        Ok(page.data)
    }
}
