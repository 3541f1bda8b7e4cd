//! Server response types.
//!
//! Every DataBeaver REST response uses the same envelope:
//! ```json
//! { "success": true, "data": { ... }, "_metadata": { "total": 2, "pageCount": 1, "pageLinks": { ... } } }
//! ```
//! `data` is an object for singular lookups and an array for lists. The
//! envelope is first read untyped, then `data` is decoded into the caller's
//! type only once `success` has been checked.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use dbv_core::error::DbvResult;

/// Standard server response envelope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T = serde_json::Value> {
    /// Whether the server handled the request successfully.
    #[serde(default)]
    pub success: bool,
    /// Response payload (object or array depending on the endpoint).
    #[serde(default)]
    pub data: Option<T>,
    /// Pagination metadata, present on list responses.
    #[serde(rename = "_metadata", default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

/// Pagination metadata from list responses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Metadata {
    /// Total number of records matching the query.
    pub total: u64,
    /// Current page number.
    pub page: Option<u64>,
    /// Page size used for this response.
    pub per_page: Option<u64>,
    /// Number of pages available.
    pub page_count: Option<u64>,
    /// Links to neighbouring pages.
    pub page_links: PageLinks,
}

/// Links to the current, previous, and next page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}

impl PageLinks {
    /// Drop links the server sent as empty strings.
    fn normalized(self) -> Self {
        fn keep(link: Option<String>) -> Option<String> {
            link.filter(|l| !l.is_empty())
        }
        Self {
            current: keep(self.current),
            previous: keep(self.previous),
            next: keep(self.next),
        }
    }
}

/// One page of a list query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Total number of records matching the query, across all pages.
    pub total: u64,
    /// Records on this page.
    pub data: Vec<T>,
    /// Number of pages available.
    pub page_count: u64,
    /// Pagination links. `None` when the query produced no result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<PageLinks>,
}

impl<T> Page<T> {
    /// The result of a list query with no matches.
    pub fn empty() -> Self {
        Self {
            total: 0,
            data: Vec::new(),
            page_count: 1,
            links: None,
        }
    }

    /// Whether this page holds no records.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl Envelope {
    /// Whether the server reported success.
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Decode `data` as a single entity.
    ///
    /// Returns `None` when the envelope reports failure or carries no data.
    pub fn into_entity<T: DeserializeOwned>(self) -> DbvResult<Option<T>> {
        match self.data {
            Some(data) if self.success && !data.is_null() => Ok(Some(serde_json::from_value(data)?)),
            _ => Ok(None),
        }
    }

    /// Decode the first element of a `data` array.
    ///
    /// Returns `None` when the envelope reports failure or the array is
    /// empty or missing.
    pub fn into_first<T: DeserializeOwned>(self) -> DbvResult<Option<T>> {
        if !self.success {
            return Ok(None);
        }
        match self.data {
            Some(serde_json::Value::Array(items)) => match items.into_iter().next() {
                Some(first) => Ok(Some(serde_json::from_value(first)?)),
                None => Ok(None),
            },
            _ => Ok(None),
        }
    }

    /// Normalize a list response into a [`Page`].
    ///
    /// A failed envelope becomes [`Page::empty`]. Without `_metadata` the
    /// page describes just the records returned.
    pub fn into_page<T: DeserializeOwned>(self) -> DbvResult<Page<T>> {
        if !self.success {
            return Ok(Page::empty());
        }

        let data: Vec<T> = match self.data {
            None | Some(serde_json::Value::Null) => Vec::new(),
            Some(value) => serde_json::from_value(value)?,
        };

        let Some(metadata) = self.metadata else {
            return Ok(Page {
                total: data.len() as u64,
                data,
                page_count: 1,
                links: None,
            });
        };

        let page_count = metadata.page_count.unwrap_or_else(|| {
            match metadata.per_page {
                Some(per_page) if per_page > 0 => metadata.total.div_ceil(per_page).max(1),
                _ => 1,
            }
        });

        Ok(Page {
            total: metadata.total,
            data,
            page_count,
            links: Some(metadata.page_links.normalized()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        id: String,
    }

    fn envelope(value: serde_json::Value) -> Envelope {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_into_entity_success() {
        let item: Option<Item> = envelope(json!({"success": true, "data": {"id": "1"}}))
            .into_entity()
            .unwrap();
        assert_eq!(item.unwrap().id, "1");
    }

    #[test]
    fn test_into_entity_failure_is_absent() {
        let item: Option<Item> = envelope(json!({"success": false, "data": {"id": "1"}}))
            .into_entity()
            .unwrap();
        assert!(item.is_none());

        let item: Option<Item> = envelope(json!({"success": true, "data": null}))
            .into_entity()
            .unwrap();
        assert!(item.is_none());
    }

    #[test]
    fn test_into_entity_shape_mismatch() {
        let result: DbvResult<Option<Item>> =
            envelope(json!({"success": true, "data": {"id": 5}})).into_entity();
        assert!(matches!(
            result,
            Err(dbv_core::DbvError::Serialization(_))
        ));
    }

    #[test]
    fn test_into_first() {
        let item: Option<Item> =
            envelope(json!({"success": true, "data": [{"id": "1"}, {"id": "2"}]}))
                .into_first()
                .unwrap();
        assert_eq!(item.unwrap().id, "1");

        let item: Option<Item> = envelope(json!({"success": true, "data": []}))
            .into_first()
            .unwrap();
        assert!(item.is_none());

        let item: Option<Item> = envelope(json!({"success": true, "data": {"id": "1"}}))
            .into_first()
            .unwrap();
        assert!(item.is_none());
    }

    #[test]
    fn test_into_page_with_metadata() {
        let page: Page<Item> = envelope(json!({
            "success": true,
            "_metadata": {
                "total": 2,
                "pageCount": 1,
                "pageLinks": {"current": "U1", "next": "U2"}
            },
            "data": [{"id": "1"}]
        }))
        .into_page()
        .unwrap();

        assert_eq!(page.total, 2);
        assert_eq!(page.page_count, 1);
        assert_eq!(page.data, vec![Item { id: "1".into() }]);
        let links = page.links.unwrap();
        assert_eq!(links.current.as_deref(), Some("U1"));
        assert_eq!(links.next.as_deref(), Some("U2"));
        assert!(links.previous.is_none());
    }

    #[test]
    fn test_into_page_empty_links_are_absent() {
        let page: Page<Item> = envelope(json!({
            "success": true,
            "_metadata": {"total": 0, "pageCount": 1, "pageLinks": {"current": "", "previous": ""}},
            "data": []
        }))
        .into_page()
        .unwrap();
        assert_eq!(page.links, Some(PageLinks::default()));
    }

    #[test]
    fn test_into_page_failure_is_empty() {
        let page: Page<Item> = envelope(json!({"success": false}))
            .into_page()
            .unwrap();
        assert_eq!(page, Page::empty());
        assert_eq!(page.page_count, 1);
        assert!(page.links.is_none());
    }

    #[test]
    fn test_into_page_derives_page_count() {
        let page: Page<Item> = envelope(json!({
            "success": true,
            "_metadata": {"total": 5, "page": 1, "perPage": 2, "pageLinks": {}},
            "data": [{"id": "1"}, {"id": "2"}]
        }))
        .into_page()
        .unwrap();
        assert_eq!(page.page_count, 3);
    }

    #[test]
    fn test_into_page_without_metadata() {
        let page: Page<Item> = envelope(json!({"success": true, "data": [{"id": "1"}]}))
            .into_page()
            .unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.page_count, 1);
        assert!(page.links.is_none());
    }

    #[test]
    fn test_page_serializes_camel_case() {
        let page: Page<serde_json::Value> = Page::empty();
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["pageCount"], 1);
        assert!(json.get("links").is_none());
    }
}
