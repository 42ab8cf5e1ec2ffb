//! The abstract RPC boundary.
//!
//! The core never talks to a network itself. A transport adapter implements
//! [`AdGateway`], attaches the session credential to every call, translates
//! timeouts and connection failures into [`GatewayError::Network`], and
//! handles the global login redirect on an unauthorized response. The core
//! only observes the settled `Result`.

use async_trait::async_trait;

use crate::error::GatewayError;
use crate::model::{ActiveToggle, Ad, AdFields, AdFilters, AdPage, Category, PhotoFile};

/// One method per operation; each call settles exactly once.
#[async_trait]
pub trait AdGateway: Send + Sync {
    /// Public browse listing, filtered and paginated server-side.
    async fn list_ads(&self, filters: &AdFilters) -> Result<AdPage, GatewayError>;

    /// Same shape as `list_ads`, scoped server-side to the current user.
    async fn list_my_ads(&self, filters: &AdFilters) -> Result<AdPage, GatewayError>;

    async fn fetch_ad(&self, id: &str) -> Result<Ad, GatewayError>;

    /// Returns the created ad with server-assigned id and owner.
    async fn create_ad(&self, fields: &AdFields) -> Result<Ad, GatewayError>;

    /// Ownership is enforced server-side; non-owners get `Forbidden`.
    async fn update_ad(&self, id: &str, fields: &AdFields) -> Result<Ad, GatewayError>;

    /// Flips the active flag; the server echoes id and the new value only.
    async fn toggle_active(&self, id: &str) -> Result<ActiveToggle, GatewayError>;

    /// Echoes the deleted id back.
    async fn delete_ad(&self, id: &str) -> Result<String, GatewayError>;

    /// Stores the blobs and returns their identifiers, in order.
    async fn upload_photos(&self, files: &[PhotoFile]) -> Result<Vec<String>, GatewayError>;

    async fn list_categories(&self) -> Result<Vec<Category>, GatewayError>;
}

// Shared gateways are the common case: the coordinator holds one handle,
// the wiring code another.
#[async_trait]
impl<G: AdGateway + ?Sized> AdGateway for std::sync::Arc<G> {
    async fn list_ads(&self, filters: &AdFilters) -> Result<AdPage, GatewayError> {
        (**self).list_ads(filters).await
    }

    async fn list_my_ads(&self, filters: &AdFilters) -> Result<AdPage, GatewayError> {
        (**self).list_my_ads(filters).await
    }

    async fn fetch_ad(&self, id: &str) -> Result<Ad, GatewayError> {
        (**self).fetch_ad(id).await
    }

    async fn create_ad(&self, fields: &AdFields) -> Result<Ad, GatewayError> {
        (**self).create_ad(fields).await
    }

    async fn update_ad(&self, id: &str, fields: &AdFields) -> Result<Ad, GatewayError> {
        (**self).update_ad(id, fields).await
    }

    async fn toggle_active(&self, id: &str) -> Result<ActiveToggle, GatewayError> {
        (**self).toggle_active(id).await
    }

    async fn delete_ad(&self, id: &str) -> Result<String, GatewayError> {
        (**self).delete_ad(id).await
    }

    async fn upload_photos(&self, files: &[PhotoFile]) -> Result<Vec<String>, GatewayError> {
        (**self).upload_photos(files).await
    }

    async fn list_categories(&self) -> Result<Vec<Category>, GatewayError> {
        (**self).list_categories().await
    }
}
