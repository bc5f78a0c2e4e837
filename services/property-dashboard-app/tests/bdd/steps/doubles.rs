//! Test doubles shared by the step definitions

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use property_dashboard_app::io::{HttpClient, HttpResponse};
use property_dashboard_app::tenant::KeyValueStore;
use property_dashboard_app::DashboardError;

use crate::world::CannedResponse;

/// An HTTP client that replays one canned answer and counts requests
#[derive(Debug)]
pub struct CannedHttpClient {
    pub response: CannedResponse,
    pub requests: Arc<AtomicUsize>,
}

#[async_trait(?Send)]
impl HttpClient for CannedHttpClient {
    async fn get(&self, _url: &str) -> property_dashboard_app::Result<HttpResponse> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        match &self.response {
            CannedResponse::Respond { status, body } => Ok(HttpResponse {
                status: *status,
                body: body.clone(),
            }),
            CannedResponse::Fail(msg) => Err(DashboardError::Http(msg.clone())),
        }
    }
}

/// A store whose every access raises a fault, like a sandboxed iframe
#[derive(Debug, Default)]
pub struct FaultyStore;

impl KeyValueStore for FaultyStore {
    fn length(&self) -> property_dashboard_app::Result<usize> {
        Err(DashboardError::StoreAccess("SecurityError".to_string()))
    }

    fn key(&self, _index: usize) -> property_dashboard_app::Result<Option<String>> {
        Err(DashboardError::StoreAccess("SecurityError".to_string()))
    }

    fn get_item(&self, _key: &str) -> property_dashboard_app::Result<Option<String>> {
        Err(DashboardError::StoreAccess("SecurityError".to_string()))
    }
}
