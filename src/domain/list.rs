//! Paged collections and the query parameters that page them

use serde::{Deserialize, Serialize};

/// One page of resources as returned by the registry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceList<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    pub size: i32,
    pub page_size: i32,
    #[serde(default)]
    pub next_page_token: String,
}

impl<T> ResourceList<T> {
    /// Build a single page holding every item
    pub fn single_page(items: Vec<T>) -> Self {
        let size = items.len() as i32;

        Self {
            items,
            size,
            page_size: size,
            next_page_token: String::new(),
        }
    }

    pub fn has_next_page(&self) -> bool {
        !self.next_page_token.is_empty()
    }
}

/// Paging and ordering parameters forwarded to registry list calls
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub page_size: Option<String>,
    pub order_by: Option<String>,
    pub sort_order: Option<String>,
    pub next_page_token: Option<String>,
}

impl ListQuery {
    /// Query pairs in upstream parameter names, skipping unset values
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        [
            ("pageSize", &self.page_size),
            ("orderBy", &self.order_by),
            ("sortOrder", &self.sort_order),
            ("nextPageToken", &self.next_page_token),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.as_ref().map(|v| (key, v.clone())))
        .collect()
    }
}
