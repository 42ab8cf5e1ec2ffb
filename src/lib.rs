mod auth;
mod coordinator;
mod error;
mod event;
mod gateway;
mod model;
mod reconcile;
mod store;
mod validation;

pub use auth::{Session, StaticSession};
pub use coordinator::ActionCoordinator;
pub use error::{FieldError, GatewayError, StoreError};
pub use event::AdsEvent;
pub use gateway::AdGateway;
pub use model::{
    ActiveToggle, Ad, AdFields, AdFilters, AdOwner, AdPage, Category, Pagination, PhotoFile,
    SortKey,
};
pub use reconcile::{patch_active, prepend_ad, remove_ad, replace_ad};
pub use store::{reduce, AdsState, CategoryList, CollectionStore, DetailView, ListView, ViewStatus};
pub use validation::{validate_ad_fields, DESCRIPTION_MIN_LEN, TITLE_MIN_LEN};

// Re-export the EventEmitter from the event_emitter_rs crate
#[cfg(feature = "emitter")]
pub use event_emitter_rs::EventEmitter;
