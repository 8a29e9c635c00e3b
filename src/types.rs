//! Wire types shared by the dispatcher and the pagination driver
//!
//! Every Kanka response is wrapped in the same envelope: a `data` payload
//! plus pagination `links` and `meta`. The payload is polymorphic — a single
//! record for `/resource/{id}` endpoints, an array for collection endpoints —
//! so [`Envelope`] is generic over the caller-supplied shape.

use serde::Deserialize;

/// Generic wrapper around every API payload
///
/// `links` and `meta` are omitted on single-record responses; they default
/// to empty, which the dispatcher reads as "no further pages".
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
    #[serde(default)]
    pub links: Links,
    #[serde(default)]
    pub meta: Meta,
}

/// Pagination links of a collection response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Links {
    #[serde(default)]
    pub first: Option<String>,
    #[serde(default)]
    pub last: Option<String>,
    #[serde(default)]
    pub prev: Option<String>,
    #[serde(default)]
    pub next: Option<String>,
}

/// Pagination metadata of a collection response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Meta {
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub current_page: u32,
    #[serde(default)]
    pub last_page: u32,
    #[serde(default)]
    pub per_page: u32,
    #[serde(default)]
    pub from: Option<u32>,
    #[serde(default)]
    pub to: Option<u32>,
    #[serde(default)]
    pub total: u64,
}

impl Meta {
    /// Check whether the envelope reports pages beyond the current one
    pub fn has_more_pages(&self) -> bool {
        self.current_page < self.last_page
    }
}

/// One decoded page: the payload plus the cursor to the next page
///
/// `next` is `None` when the result set is exhausted.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub data: T,
    pub next: Option<String>,
}

impl<T> Page<T> {
    /// Check whether this is the final page
    pub fn is_last(&self) -> bool {
        self.next.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_envelope_decodes_collection() {
        let body = serde_json::json!({
            "data": [{"id": 1}, {"id": 2}],
            "links": {
                "first": "https://kanka.io/api/1.0/campaigns?page=1",
                "last": "https://kanka.io/api/1.0/campaigns?page=3",
                "prev": null,
                "next": "https://kanka.io/api/1.0/campaigns?page=2"
            },
            "meta": {
                "path": "https://kanka.io/api/1.0/campaigns",
                "current_page": 1,
                "last_page": 3,
                "per_page": 15,
                "from": 1,
                "to": 15,
                "total": 33
            }
        });

        let envelope: Envelope<Vec<serde_json::Value>> = serde_json::from_value(body).unwrap();
        assert_eq!(envelope.data.len(), 2);
        assert_eq!(
            envelope.links.next.as_deref(),
            Some("https://kanka.io/api/1.0/campaigns?page=2")
        );
        assert!(envelope.meta.has_more_pages());
        assert_eq!(envelope.meta.total, 33);
    }

    #[test]
    fn test_envelope_decodes_single_record_without_links() {
        let body = serde_json::json!({
            "data": {"id": 7, "name": "Redcap"}
        });

        let envelope: Envelope<serde_json::Value> = serde_json::from_value(body).unwrap();
        assert_eq!(envelope.data["name"], "Redcap");
        assert!(envelope.links.next.is_none());
        assert!(!envelope.meta.has_more_pages());
    }

    #[test]
    fn test_meta_tolerates_null_from_to() {
        let body = serde_json::json!({
            "data": [],
            "meta": {
                "current_page": 1,
                "last_page": 1,
                "per_page": 15,
                "from": null,
                "to": null,
                "total": 0
            }
        });

        let envelope: Envelope<Vec<serde_json::Value>> = serde_json::from_value(body).unwrap();
        assert_eq!(envelope.meta.from, None);
        assert!(!envelope.meta.has_more_pages());
    }
}
