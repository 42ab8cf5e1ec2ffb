use crate::error::GatewayError;
use crate::model::{ActiveToggle, Ad, AdPage, Category};

/// Typed lifecycle event consumed by the store's reducer.
///
/// Every coordinator operation emits exactly one `*Started` event at
/// dispatch and exactly one settlement event (`*Loaded`/`Created`/... or
/// `*Failed`) when the gateway call resolves. This is the only protocol
/// through which view state changes.
#[derive(Debug, Clone)]
pub enum AdsEvent {
    BrowseStarted,
    BrowseLoaded(AdPage),
    BrowseFailed(GatewayError),

    MineStarted,
    MineLoaded(AdPage),
    MineFailed(GatewayError),

    DetailStarted,
    DetailLoaded(Ad),
    DetailFailed(GatewayError),
    /// Synchronous clear when the detail surface unmounts. Does not cancel
    /// an in-flight fetch; a late response will repopulate the view.
    DetailCleared,

    CreateStarted,
    Created(Ad),
    CreateFailed(GatewayError),

    UpdateStarted { id: String },
    Updated(Ad),
    UpdateFailed { id: String, error: GatewayError },

    ToggleStarted { id: String },
    Toggled(ActiveToggle),
    ToggleFailed { id: String, error: GatewayError },

    /// Removal from the list views happens here, before the gateway
    /// responds. A later failure does not restore the entries.
    DeleteStarted { id: String },
    Deleted { id: String },
    DeleteFailed { id: String, error: GatewayError },

    UploadStarted,
    Uploaded { photo_ids: Vec<String> },
    UploadFailed(GatewayError),

    CategoriesStarted,
    CategoriesLoaded(Vec<Category>),
    CategoriesFailed(GatewayError),
}

impl AdsEvent {
    /// Stable name for logging and change notification.
    pub fn name(&self) -> &'static str {
        match self {
            AdsEvent::BrowseStarted => "browse_started",
            AdsEvent::BrowseLoaded(_) => "browse_loaded",
            AdsEvent::BrowseFailed(_) => "browse_failed",
            AdsEvent::MineStarted => "mine_started",
            AdsEvent::MineLoaded(_) => "mine_loaded",
            AdsEvent::MineFailed(_) => "mine_failed",
            AdsEvent::DetailStarted => "detail_started",
            AdsEvent::DetailLoaded(_) => "detail_loaded",
            AdsEvent::DetailFailed(_) => "detail_failed",
            AdsEvent::DetailCleared => "detail_cleared",
            AdsEvent::CreateStarted => "create_started",
            AdsEvent::Created(_) => "created",
            AdsEvent::CreateFailed(_) => "create_failed",
            AdsEvent::UpdateStarted { .. } => "update_started",
            AdsEvent::Updated(_) => "updated",
            AdsEvent::UpdateFailed { .. } => "update_failed",
            AdsEvent::ToggleStarted { .. } => "toggle_started",
            AdsEvent::Toggled(_) => "toggled",
            AdsEvent::ToggleFailed { .. } => "toggle_failed",
            AdsEvent::DeleteStarted { .. } => "delete_started",
            AdsEvent::Deleted { .. } => "deleted",
            AdsEvent::DeleteFailed { .. } => "delete_failed",
            AdsEvent::UploadStarted => "upload_started",
            AdsEvent::Uploaded { .. } => "uploaded",
            AdsEvent::UploadFailed(_) => "upload_failed",
            AdsEvent::CategoriesStarted => "categories_started",
            AdsEvent::CategoriesLoaded(_) => "categories_loaded",
            AdsEvent::CategoriesFailed(_) => "categories_failed",
        }
    }
}
