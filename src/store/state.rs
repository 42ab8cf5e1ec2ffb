use serde::{Deserialize, Serialize};

use super::view::{CategoryList, DetailView, ListView};

/// The whole of the store's state: three ad views plus reference data.
///
/// Each view has an independent lifecycle; no view is invalidated by
/// another view's failure. All four containers start empty and idle.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AdsState {
    pub browse: ListView,
    pub mine: ListView,
    pub detail: DetailView,
    pub categories: CategoryList,
}
