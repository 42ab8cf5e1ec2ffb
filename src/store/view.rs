use serde::{Deserialize, Serialize};

use crate::model::{Ad, Category, Pagination};

/// Per-view request lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewStatus {
    /// Nothing requested yet.
    Idle,
    /// A replace-wholesale request is in flight.
    Loading,
    /// Last request succeeded; data is valid.
    Loaded,
    /// Last request failed; data was cleared.
    Error,
}

impl Default for ViewStatus {
    fn default() -> Self {
        ViewStatus::Idle
    }
}

/// A paginated, filter-parameterized sequence of ads (`browse` and `mine`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ListView {
    pub items: Vec<Ad>,
    pub pagination: Pagination,
    pub status: ViewStatus,
}

impl ListView {
    /// Whether the view currently holds an ad with this id.
    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|ad| ad.id == id)
    }
}

/// The currently viewed single ad, or none.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DetailView {
    pub ad: Option<Ad>,
    pub status: ViewStatus,
}

/// Reference category list, fetched once per session.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CategoryList {
    pub items: Vec<Category>,
    pub status: ViewStatus,
}
