use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::sync::oneshot;

use adsync::{
    ActiveToggle, Ad, AdFields, AdFilters, AdGateway, AdPage, Category, GatewayError, PhotoFile,
};

/// One scripted settlement: the result to return, optionally held behind a
/// gate so the test controls when the call resolves.
struct Scripted<T> {
    result: Result<T, GatewayError>,
    gate: Option<oneshot::Receiver<()>>,
}

fn push<T>(queue: &Mutex<VecDeque<Scripted<T>>>, result: Result<T, GatewayError>) {
    queue.lock().unwrap().push_back(Scripted { result, gate: None });
}

fn push_gated<T>(
    queue: &Mutex<VecDeque<Scripted<T>>>,
    result: Result<T, GatewayError>,
) -> oneshot::Sender<()> {
    let (tx, rx) = oneshot::channel();
    queue.lock().unwrap().push_back(Scripted {
        result,
        gate: Some(rx),
    });
    tx
}

async fn settle<T>(
    queue: &Mutex<VecDeque<Scripted<T>>>,
    op: &'static str,
) -> Result<T, GatewayError> {
    let scripted = queue
        .lock()
        .unwrap()
        .pop_front()
        .unwrap_or_else(|| panic!("no scripted response left for {}", op));
    if let Some(gate) = scripted.gate {
        // a dropped sender releases the gate too
        let _ = gate.await;
    }
    scripted.result
}

/// In-memory gateway that replays scripted responses in FIFO order per
/// operation. Gated responses let race tests force settlement order.
#[derive(Default)]
pub struct ScriptedGateway {
    list_ads: Mutex<VecDeque<Scripted<AdPage>>>,
    list_my_ads: Mutex<VecDeque<Scripted<AdPage>>>,
    fetch_ad: Mutex<VecDeque<Scripted<Ad>>>,
    create_ad: Mutex<VecDeque<Scripted<Ad>>>,
    update_ad: Mutex<VecDeque<Scripted<Ad>>>,
    toggle_active: Mutex<VecDeque<Scripted<ActiveToggle>>>,
    delete_ad: Mutex<VecDeque<Scripted<String>>>,
    upload_photos: Mutex<VecDeque<Scripted<Vec<String>>>>,
    list_categories: Mutex<VecDeque<Scripted<Vec<Category>>>>,
}

impl ScriptedGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_list_ads(&self, result: Result<AdPage, GatewayError>) {
        push(&self.list_ads, result);
    }

    pub fn push_list_ads_gated(&self, result: Result<AdPage, GatewayError>) -> oneshot::Sender<()> {
        push_gated(&self.list_ads, result)
    }

    pub fn push_list_my_ads(&self, result: Result<AdPage, GatewayError>) {
        push(&self.list_my_ads, result);
    }

    pub fn push_fetch_ad(&self, result: Result<Ad, GatewayError>) {
        push(&self.fetch_ad, result);
    }

    pub fn push_fetch_ad_gated(&self, result: Result<Ad, GatewayError>) -> oneshot::Sender<()> {
        push_gated(&self.fetch_ad, result)
    }

    pub fn push_create_ad(&self, result: Result<Ad, GatewayError>) {
        push(&self.create_ad, result);
    }

    pub fn push_update_ad(&self, result: Result<Ad, GatewayError>) {
        push(&self.update_ad, result);
    }

    pub fn push_toggle_active(&self, result: Result<ActiveToggle, GatewayError>) {
        push(&self.toggle_active, result);
    }

    pub fn push_delete_ad(&self, result: Result<String, GatewayError>) {
        push(&self.delete_ad, result);
    }

    pub fn push_delete_ad_gated(&self, result: Result<String, GatewayError>) -> oneshot::Sender<()> {
        push_gated(&self.delete_ad, result)
    }

    pub fn push_upload_photos(&self, result: Result<Vec<String>, GatewayError>) {
        push(&self.upload_photos, result);
    }

    pub fn push_list_categories(&self, result: Result<Vec<Category>, GatewayError>) {
        push(&self.list_categories, result);
    }
}

#[async_trait]
impl AdGateway for ScriptedGateway {
    async fn list_ads(&self, _filters: &AdFilters) -> Result<AdPage, GatewayError> {
        settle(&self.list_ads, "list_ads").await
    }

    async fn list_my_ads(&self, _filters: &AdFilters) -> Result<AdPage, GatewayError> {
        settle(&self.list_my_ads, "list_my_ads").await
    }

    async fn fetch_ad(&self, _id: &str) -> Result<Ad, GatewayError> {
        settle(&self.fetch_ad, "fetch_ad").await
    }

    async fn create_ad(&self, _fields: &AdFields) -> Result<Ad, GatewayError> {
        settle(&self.create_ad, "create_ad").await
    }

    async fn update_ad(&self, _id: &str, _fields: &AdFields) -> Result<Ad, GatewayError> {
        settle(&self.update_ad, "update_ad").await
    }

    async fn toggle_active(&self, _id: &str) -> Result<ActiveToggle, GatewayError> {
        settle(&self.toggle_active, "toggle_active").await
    }

    async fn delete_ad(&self, _id: &str) -> Result<String, GatewayError> {
        settle(&self.delete_ad, "delete_ad").await
    }

    async fn upload_photos(&self, _files: &[PhotoFile]) -> Result<Vec<String>, GatewayError> {
        settle(&self.upload_photos, "upload_photos").await
    }

    async fn list_categories(&self) -> Result<Vec<Category>, GatewayError> {
        settle(&self.list_categories, "list_categories").await
    }
}
