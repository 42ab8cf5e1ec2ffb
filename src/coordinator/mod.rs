//! Action Coordinator - turns UI-initiated operations into gateway calls
//! plus lifecycle events.
//!
//! Every operation issues exactly one gateway call, bracketed by exactly
//! one started event and exactly one settlement event, and hands the
//! payload (or the typed failure) straight back to the caller. List and
//! fetch failures are additionally absorbed into the owning view's status;
//! mutation failures leave the store untouched, with the one documented
//! exception of the optimistic delete.
//!
//! Events reach the store in settlement order, not issue order. There is no
//! request-identity tag, so overlapping list calls race and the last one to
//! settle wins.

use std::sync::Arc;

use crate::auth::Session;
use crate::error::GatewayError;
use crate::event::AdsEvent;
use crate::gateway::AdGateway;
use crate::model::{ActiveToggle, Ad, AdFields, AdFilters, AdPage, Category, PhotoFile};
use crate::store::CollectionStore;

/// Issues operations against the gateway and feeds the store.
pub struct ActionCoordinator<G> {
    store: Arc<CollectionStore>,
    gateway: G,
    session: Arc<dyn Session>,
}

impl<G: AdGateway> ActionCoordinator<G> {
    pub fn new(store: Arc<CollectionStore>, gateway: G, session: Arc<dyn Session>) -> Self {
        ActionCoordinator {
            store,
            gateway,
            session,
        }
    }

    /// The store this coordinator feeds.
    pub fn store(&self) -> &Arc<CollectionStore> {
        &self.store
    }

    /// Replace the `browse` view with the ads matching `filters`.
    pub async fn list_ads(&self, filters: &AdFilters) -> Result<AdPage, GatewayError> {
        check_filters(filters)?;
        tracing::debug!(page = filters.page, "listing ads");
        self.store.dispatch(AdsEvent::BrowseStarted)?;
        match self.gateway.list_ads(filters).await {
            Ok(page) => {
                self.store.dispatch(AdsEvent::BrowseLoaded(page.clone()))?;
                Ok(page)
            }
            Err(err) => {
                tracing::warn!(error = %err, "listing ads failed");
                self.store.dispatch(AdsEvent::BrowseFailed(err.clone()))?;
                Err(err)
            }
        }
    }

    /// Replace the `mine` view with the current user's ads. Refused
    /// outright when no user is authenticated; the store is not touched.
    pub async fn list_my_ads(&self, filters: &AdFilters) -> Result<AdPage, GatewayError> {
        if !self.session.is_authenticated() {
            return Err(GatewayError::Unauthorized);
        }
        check_filters(filters)?;
        tracing::debug!(page = filters.page, "listing my ads");
        self.store.dispatch(AdsEvent::MineStarted)?;
        match self.gateway.list_my_ads(filters).await {
            Ok(page) => {
                self.store.dispatch(AdsEvent::MineLoaded(page.clone()))?;
                Ok(page)
            }
            Err(err) => {
                tracing::warn!(error = %err, "listing my ads failed");
                self.store.dispatch(AdsEvent::MineFailed(err.clone()))?;
                Err(err)
            }
        }
    }

    /// Replace the `detail` view with a single ad.
    pub async fn fetch_ad_by_id(&self, id: &str) -> Result<Ad, GatewayError> {
        require_id(id)?;
        self.store.dispatch(AdsEvent::DetailStarted)?;
        match self.gateway.fetch_ad(id).await {
            Ok(ad) => {
                self.store.dispatch(AdsEvent::DetailLoaded(ad.clone()))?;
                Ok(ad)
            }
            Err(err) => {
                tracing::warn!(id, error = %err, "fetching ad failed");
                self.store.dispatch(AdsEvent::DetailFailed(err.clone()))?;
                Err(err)
            }
        }
    }

    /// Create an ad; on success it is prepended to both list views.
    /// `fields` are assumed pre-validated by the form layer.
    pub async fn create_ad(&self, fields: &AdFields) -> Result<Ad, GatewayError> {
        self.store.dispatch(AdsEvent::CreateStarted)?;
        match self.gateway.create_ad(fields).await {
            Ok(ad) => {
                tracing::debug!(id = %ad.id, "ad created");
                self.store.dispatch(AdsEvent::Created(ad.clone()))?;
                Ok(ad)
            }
            Err(err) => {
                tracing::warn!(error = %err, "creating ad failed");
                self.store.dispatch(AdsEvent::CreateFailed(err.clone()))?;
                Err(err)
            }
        }
    }

    /// Update an ad; on success every view holding the id gets the new
    /// value. Ownership is the server's call — non-owners get `Forbidden`.
    pub async fn update_ad(&self, id: &str, fields: &AdFields) -> Result<Ad, GatewayError> {
        require_id(id)?;
        self.store.dispatch(AdsEvent::UpdateStarted { id: id.to_string() })?;
        match self.gateway.update_ad(id, fields).await {
            Ok(ad) => {
                self.store.dispatch(AdsEvent::Updated(ad.clone()))?;
                Ok(ad)
            }
            Err(err) => {
                tracing::warn!(id, error = %err, "updating ad failed");
                self.store.dispatch(AdsEvent::UpdateFailed {
                    id: id.to_string(),
                    error: err.clone(),
                })?;
                Err(err)
            }
        }
    }

    /// Flip the active flag; on success only that field is patched in
    /// every view holding the id.
    pub async fn toggle_active(&self, id: &str) -> Result<ActiveToggle, GatewayError> {
        require_id(id)?;
        self.store.dispatch(AdsEvent::ToggleStarted { id: id.to_string() })?;
        match self.gateway.toggle_active(id).await {
            Ok(toggle) => {
                self.store.dispatch(AdsEvent::Toggled(toggle.clone()))?;
                Ok(toggle)
            }
            Err(err) => {
                tracing::warn!(id, error = %err, "toggling ad failed");
                self.store.dispatch(AdsEvent::ToggleFailed {
                    id: id.to_string(),
                    error: err.clone(),
                })?;
                Err(err)
            }
        }
    }

    /// Delete an ad. The list views drop the id at dispatch, before the
    /// gateway responds; a failed delete does not restore the entries.
    pub async fn delete_ad(&self, id: &str) -> Result<String, GatewayError> {
        require_id(id)?;
        self.store.dispatch(AdsEvent::DeleteStarted { id: id.to_string() })?;
        match self.gateway.delete_ad(id).await {
            Ok(deleted_id) => {
                self.store.dispatch(AdsEvent::Deleted {
                    id: deleted_id.clone(),
                })?;
                Ok(deleted_id)
            }
            Err(err) => {
                tracing::warn!(id, error = %err, "deleting ad failed; entries stay removed");
                self.store.dispatch(AdsEvent::DeleteFailed {
                    id: id.to_string(),
                    error: err.clone(),
                })?;
                Err(err)
            }
        }
    }

    /// Upload photos and return their stored identifiers. No view changes;
    /// the caller attaches the ids to a subsequent create or update.
    pub async fn upload_photos(&self, files: &[PhotoFile]) -> Result<Vec<String>, GatewayError> {
        if files.is_empty() {
            return Err(GatewayError::validation(
                "files",
                "at least one file is required",
            ));
        }
        self.store.dispatch(AdsEvent::UploadStarted)?;
        match self.gateway.upload_photos(files).await {
            Ok(photo_ids) => {
                tracing::debug!(count = photo_ids.len(), "photos uploaded");
                self.store.dispatch(AdsEvent::Uploaded {
                    photo_ids: photo_ids.clone(),
                })?;
                Ok(photo_ids)
            }
            Err(err) => {
                tracing::warn!(error = %err, "uploading photos failed");
                self.store.dispatch(AdsEvent::UploadFailed(err.clone()))?;
                Err(err)
            }
        }
    }

    /// Replace the category reference list.
    pub async fn list_categories(&self) -> Result<Vec<Category>, GatewayError> {
        self.store.dispatch(AdsEvent::CategoriesStarted)?;
        match self.gateway.list_categories().await {
            Ok(categories) => {
                self.store
                    .dispatch(AdsEvent::CategoriesLoaded(categories.clone()))?;
                Ok(categories)
            }
            Err(err) => {
                tracing::warn!(error = %err, "listing categories failed");
                self.store.dispatch(AdsEvent::CategoriesFailed(err.clone()))?;
                Err(err)
            }
        }
    }

    /// Synchronous clear when the detail surface unmounts. Does not cancel
    /// an in-flight fetch.
    pub fn clear_detail(&self) -> Result<(), GatewayError> {
        self.store.dispatch(AdsEvent::DetailCleared)?;
        Ok(())
    }
}

fn require_id(id: &str) -> Result<(), GatewayError> {
    if id.trim().is_empty() {
        return Err(GatewayError::validation("id", "id must not be empty"));
    }
    Ok(())
}

fn check_filters(filters: &AdFilters) -> Result<(), GatewayError> {
    if filters.page == 0 {
        return Err(GatewayError::validation("page", "page must be at least 1"));
    }
    if filters.page_size == 0 {
        return Err(GatewayError::validation(
            "page_size",
            "page size must be positive",
        ));
    }
    Ok(())
}
