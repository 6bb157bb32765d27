//! Catalog filters kept in the page's query string, and the request
//! parameters of `GET /tour`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DIVISION_PARAM: &str = "division";
pub const TOUR_TYPE_PARAM: &str = "tourType";

/// Filter state mirrored from `?division=..&tourType=..`.
///
/// Keys other than the two filters are carried through untouched so that
/// updating a filter never drops unrelated parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TourFilters {
    params: BTreeMap<String, String>,
}

impl TourFilters {
    pub fn from_params(params: BTreeMap<String, String>) -> Self {
        let mut filters = Self { params };
        // An empty value is the same as no filter
        filters.params.retain(|_, v| !v.is_empty());
        filters
    }

    pub fn params(&self) -> &BTreeMap<String, String> {
        &self.params
    }

    pub fn division(&self) -> Option<&str> {
        self.params.get(DIVISION_PARAM).map(String::as_str)
    }

    pub fn tour_type(&self) -> Option<&str> {
        self.params.get(TOUR_TYPE_PARAM).map(String::as_str)
    }

    pub fn set_division(&mut self, value: &str) {
        self.set(DIVISION_PARAM, value);
    }

    pub fn set_tour_type(&mut self, value: &str) {
        self.set(TOUR_TYPE_PARAM, value);
    }

    /// Drops both filters, keeps everything else
    pub fn clear(&mut self) {
        self.params.remove(DIVISION_PARAM);
        self.params.remove(TOUR_TYPE_PARAM);
    }

    pub fn is_active(&self) -> bool {
        self.division().is_some() || self.tour_type().is_some()
    }

    /// Request parameters for the catalog list
    pub fn to_query(&self) -> TourQuery {
        TourQuery {
            division: self.division().map(str::to_string),
            tour_type: self.tour_type().map(str::to_string),
            ..TourQuery::default()
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        if value.is_empty() {
            self.params.remove(key);
        } else {
            self.params.insert(key.to_string(), value.to_string());
        }
    }
}

/// Query parameters accepted by the list endpoints
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TourQuery {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub division: Option<String>,
    #[serde(rename = "tourType", skip_serializing_if = "Option::is_none")]
    pub tour_type: Option<String>,
    /// Comma separated projection, e.g. "_id,name"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

impl TourQuery {
    pub fn by_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    pub fn with_fields(mut self, fields: &str) -> Self {
        self.fields = Some(fields.to_string());
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_set_and_clear_keep_other_params() {
        let mut f = TourFilters::from_params(params(&[("page", "2")]));
        assert!(!f.is_active());

        f.set_division("d1");
        f.set_tour_type("t1");
        assert!(f.is_active());
        assert_eq!(f.division(), Some("d1"));
        assert_eq!(f.tour_type(), Some("t1"));

        f.clear();
        assert!(!f.is_active());
        assert_eq!(f.params(), &params(&[("page", "2")]));
    }

    #[test]
    fn test_empty_values_are_no_filter() {
        let mut f = TourFilters::from_params(params(&[("division", ""), ("tourType", "t1")]));
        assert_eq!(f.division(), None);
        f.set_tour_type("");
        assert!(!f.is_active());
    }

    #[test]
    fn test_to_query() {
        let mut f = TourFilters::default();
        f.set_tour_type("t1");
        let q = f.to_query();
        assert_eq!(q.division, None);
        assert_eq!(q.tour_type.as_deref(), Some("t1"));
    }

    #[test]
    fn test_query_skips_empty_params() {
        let q = TourQuery::by_id("abc").with_fields("name");
        let json = serde_json::to_value(&q).unwrap();
        assert_eq!(json, serde_json::json!({"_id": "abc", "fields": "name"}));

        let q = TourQuery::default().with_limit(1000).with_page(3);
        let json = serde_json::to_value(&q).unwrap();
        assert_eq!(json, serde_json::json!({"limit": 1000, "page": 3}));
    }
}
