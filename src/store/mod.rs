//! Collection Store - normalized views over one ad collection.
//!
//! The store holds three named views (`browse`, `mine`, `detail`) plus the
//! `categories` reference list. Each view carries its own lifecycle status
//! and is only ever changed by dispatching an [`AdsEvent`](crate::AdsEvent)
//! through the reducer; reads are cloned snapshots.
//!
//! The reducer is a pure function from `(state, event)` to a new state so
//! the reconciliation rules stay independently testable; `CollectionStore`
//! wraps it with the single-writer lock and the optional change emitter.
//!
//! ## Example
//!
//! ```ignore
//! use adsync::{AdsEvent, CollectionStore, ViewStatus};
//!
//! let store = CollectionStore::new();
//! store.dispatch(AdsEvent::BrowseStarted)?;
//! assert_eq!(store.browse()?.status, ViewStatus::Loading);
//! ```

mod collection;
mod reducer;
mod state;
mod view;

pub use collection::CollectionStore;
pub use reducer::reduce;
pub use state::AdsState;
pub use view::{CategoryList, DetailView, ListView, ViewStatus};
