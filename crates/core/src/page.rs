//! Pagination envelope and query composition for the listing endpoints.
//!
//! All five entity listings (items, stock levels, movements, replenishment
//! requests, audit events) answer with the same page envelope.

use serde::{Deserialize, Serialize};

/// One page of a listing response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
    pub total_pages: u32,
    /// Requested page size.
    pub size: u32,
    /// Zero-based index of this page.
    pub number: u32,
    pub first: bool,
    pub last: bool,
}

impl<T> Page<T> {
    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Page/size pair composed onto listing requests.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PageQuery {
    /// Zero-based page index.
    pub page: u32,
    pub size: u32,
}

impl PageQuery {
    pub const DEFAULT_SIZE: u32 = 20;

    pub fn new(page: u32, size: u32) -> Self {
        Self { page, size }
    }

    /// First page at the default size.
    pub fn first() -> Self {
        Self::default()
    }

    /// Query-string pairs in the order the services expect them.
    pub fn params(&self) -> [(&'static str, String); 2] {
        [
            ("page", self.page.to_string()),
            ("size", self.size.to_string()),
        ]
    }
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page: 0,
            size: Self::DEFAULT_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_query_is_first_page_of_twenty() {
        let q = PageQuery::default();
        assert_eq!(q.page, 0);
        assert_eq!(q.size, 20);
        assert_eq!(
            q.params(),
            [("page", "0".to_string()), ("size", "20".to_string())]
        );
    }

    #[test]
    fn deserializes_service_page_envelope() {
        let json = r#"{
            "content": [1, 2, 3],
            "totalElements": 3,
            "totalPages": 1,
            "size": 20,
            "number": 0,
            "first": true,
            "last": true
        }"#;
        let page: Page<i64> = serde_json::from_str(json).unwrap();
        assert_eq!(page.len(), 3);
        assert!(page.first && page.last);
        assert_eq!(page.total_elements, 3);
    }
}
