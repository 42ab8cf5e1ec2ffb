//! Domain types shared by the store, the coordinator, and the gateway.
//!
//! Everything here crosses the RPC boundary, so the whole module is
//! serde-derived. Field names are the crate's own; transport adapters map
//! them onto whatever the wire uses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Denormalized owner display fields carried on every ad.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdOwner {
    pub id: String,
    pub name: String,
    pub avatar_url: Option<String>,
}

/// A single marketplace listing.
///
/// `id` and `owner` are assigned server-side and immutable for the ad's
/// lifetime. `category` may be unresolved when the server returns an ad
/// whose category was deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ad {
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub location: String,
    pub category: Option<String>,
    pub photos: Vec<String>,
    pub owner: AdOwner,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

/// Reference data, fetched once per session and read-only after that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
}

/// Caller-supplied fields for create and update.
///
/// The form layer validates these before dispatch (see
/// [`validate_ad_fields`](crate::validate_ad_fields)); the coordinator
/// assumes pre-validated input and does not re-check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdFields {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub location: String,
    pub category: String,
    pub photos: Vec<String>,
}

impl AdFields {
    /// Attach uploaded photo identifiers, replacing any previous list.
    /// The create flow uploads first, then submits the returned ids here.
    pub fn with_photos(mut self, photos: Vec<String>) -> Self {
        self.photos = photos;
        self
    }
}

/// Sort order applied server-side to list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    Newest,
    Oldest,
    PriceLow,
    PriceHigh,
    Title,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::Oldest => "oldest",
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
            SortKey::Title => "title",
        }
    }
}

impl Default for SortKey {
    fn default() -> Self {
        SortKey::Newest
    }
}

/// Filter parameters for the browse and my-ads listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdFilters {
    pub search: Option<String>,
    pub category: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub location: Option<String>,
    pub sort: SortKey,
    pub page: u32,
    pub page_size: u32,
}

impl Default for AdFilters {
    fn default() -> Self {
        AdFilters {
            search: None,
            category: None,
            min_price: None,
            max_price: None,
            location: None,
            sort: SortKey::default(),
            page: 1,
            page_size: 12,
        }
    }
}

impl AdFilters {
    pub fn page(page: u32) -> Self {
        AdFilters {
            page,
            ..Default::default()
        }
    }

    /// Flatten the filters into query-string pairs. Empty optional fields
    /// are omitted entirely rather than sent as empty values.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(search) = &self.search {
            if !search.is_empty() {
                pairs.push(("search".to_string(), search.clone()));
            }
        }
        if let Some(category) = &self.category {
            if !category.is_empty() {
                pairs.push(("category".to_string(), category.clone()));
            }
        }
        if let Some(min) = self.min_price {
            pairs.push(("minPrice".to_string(), min.to_string()));
        }
        if let Some(max) = self.max_price {
            pairs.push(("maxPrice".to_string(), max.to_string()));
        }
        if let Some(location) = &self.location {
            if !location.is_empty() {
                pairs.push(("location".to_string(), location.clone()));
            }
        }
        pairs.push(("sort".to_string(), self.sort.as_str().to_string()));
        pairs.push(("page".to_string(), self.page.to_string()));
        pairs.push(("limit".to_string(), self.page_size.to_string()));
        pairs
    }
}

/// Pagination descriptor returned alongside every list page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub current: u32,
    pub pages: u32,
    pub total: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Pagination {
            current: 1,
            pages: 1,
            total: 0,
        }
    }
}

/// One page of ads plus its pagination descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdPage {
    pub ads: Vec<Ad>,
    pub pagination: Pagination,
}

/// Result payload of a toggle — the server echoes the id and the new flag,
/// not a full ad.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveToggle {
    pub id: String,
    pub active: bool,
}

/// An in-memory photo awaiting upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl PhotoFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        PhotoFile {
            name: name.into(),
            bytes,
        }
    }
}
