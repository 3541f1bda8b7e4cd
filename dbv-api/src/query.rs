//! Query parameters for list and lookup requests.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use dbv_core::constants::params;

/// Options for a list query.
///
/// Every field is optional; an unset field adds nothing to the request.
/// Filter entries are sent verbatim as `key=value` pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RequestOptions {
    /// Field filters, e.g. `status=active`.
    pub filter: BTreeMap<String, String>,
    /// Page number to fetch.
    pub page: Option<u32>,
    /// Records per page.
    pub per_page: Option<u32>,
    /// Field to sort on.
    pub sort_by: Option<String>,
    /// Sort direction as understood by the server, e.g. "asc" or "desc".
    pub sort_order: Option<String>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a filter on `key`.
    pub fn filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.filter.insert(key.into(), value.into());
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    pub fn sort_by(mut self, field: impl Into<String>) -> Self {
        self.sort_by = Some(field.into());
        self
    }

    pub fn sort_order(mut self, order: impl Into<String>) -> Self {
        self.sort_order = Some(order.into());
        self
    }

    /// Build the query parameters for this request.
    ///
    /// Filters are applied first, then the paging and sorting options, so an
    /// explicit `page` wins over a `page` filter key.
    pub fn to_params(&self) -> QueryParams {
        let mut query = QueryParams::new();
        for (key, value) in &self.filter {
            query.set(key, value);
        }
        if let Some(page) = self.page {
            query.set(params::PAGE, page.to_string());
        }
        if let Some(per_page) = self.per_page {
            query.set(params::PER_PAGE, per_page.to_string());
        }
        if let Some(ref sort_by) = self.sort_by {
            query.set(params::SORT_BY, sort_by);
        }
        if let Some(ref sort_order) = self.sort_order {
            query.set(params::SORT_ORDER, sort_order);
        }
        query
    }
}

/// Ordered query string pairs where each key appears at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`, replacing any earlier value in place.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some(existing) => existing.1 = value,
            None => self.pairs.push((key, value)),
        }
    }

    /// Value currently set for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn as_pairs(&self) -> &[(String, String)] {
        &self.pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_options_add_nothing() {
        assert!(RequestOptions::new().to_params().is_empty());
    }

    #[test]
    fn test_filter_and_page() {
        let params = RequestOptions::new()
            .filter("status", "active")
            .page(1)
            .to_params();
        assert_eq!(
            params.as_pairs(),
            &[
                ("status".to_string(), "active".to_string()),
                ("page".to_string(), "1".to_string()),
            ]
        );
    }

    #[test]
    fn test_all_options() {
        let params = RequestOptions::new()
            .filter("status", "active")
            .filter("sector", "health")
            .page(3)
            .per_page(50)
            .sort_by("createdAt")
            .sort_order("desc")
            .to_params();
        assert_eq!(params.len(), 6);
        assert_eq!(params.get("sector"), Some("health"));
        assert_eq!(params.get("perPage"), Some("50"));
        assert_eq!(params.get("sortBy"), Some("createdAt"));
        assert_eq!(params.get("sortOrder"), Some("desc"));
    }

    #[test]
    fn test_zero_page_is_still_sent() {
        let params = RequestOptions::new().page(0).to_params();
        assert_eq!(params.get("page"), Some("0"));
    }

    #[test]
    fn test_option_overrides_filter_key() {
        let params = RequestOptions::new()
            .filter("page", "9")
            .page(2)
            .to_params();
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("page"), Some("2"));
    }

    #[test]
    fn test_options_from_json() {
        let options: RequestOptions = serde_json::from_str(
            r#"{"filter": {"status": "pending"}, "page": 1, "perPage": 10}"#,
        )
        .unwrap();
        assert_eq!(options.filter["status"], "pending");
        assert_eq!(options.per_page, Some(10));
        assert!(options.sort_by.is_none());
    }
}
