//! Client-side API types and fetch helpers
//!
//! These types mirror the JSON served by the dashboard backend.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::io::HttpClient;
use crate::DashboardError;

/// Path of the property list endpoint
pub const PROPERTIES_PATH: &str = "/dashboard/properties";

/// Path of the revenue summary endpoint
pub const SUMMARY_PATH: &str = "/dashboard/summary";

/// A property the user can select
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant: Option<String>,
}

impl Property {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            tenant: None,
        }
    }
}

/// Tenant a browser session is assumed to belong to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TenantId {
    #[default]
    #[serde(rename = "tenant-a")]
    TenantA,
    #[serde(rename = "tenant-b")]
    TenantB,
}

impl TenantId {
    pub fn as_str(&self) -> &'static str {
        match self {
            TenantId::TenantA => "tenant-a",
            TenantId::TenantB => "tenant-b",
        }
    }
}

impl fmt::Display for TenantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepted shapes of the property list response
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PropertiesPayload {
    List(Vec<Property>),
    Wrapped { data: Vec<Property> },
}

/// Parse a property list body, rejecting unknown shapes and empty lists
pub fn parse_properties(body: &str) -> crate::Result<Vec<Property>> {
    let properties = match serde_json::from_str::<PropertiesPayload>(body)? {
        PropertiesPayload::List(properties) => properties,
        PropertiesPayload::Wrapped { data } => data,
    };

    if properties.is_empty() {
        return Err(DashboardError::EmptyPropertyList);
    }
    Ok(properties)
}

/// Revenue summary as returned by /dashboard/summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueSummaryResponse {
    pub property_id: String,
    pub total_revenue: f64,
    pub currency: String,
    pub reservations_count: u32,
}

/// Typed access to the dashboard backend
#[derive(Clone)]
pub struct DashboardApi {
    base_url: String,
    http: Arc<dyn HttpClient>,
}

impl fmt::Debug for DashboardApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DashboardApi")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl DashboardApi {
    pub fn new(base_url: impl Into<String>, http: Arc<dyn HttpClient>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, http }
    }

    /// An API client talking to the origin the page was served from
    pub fn for_page_origin() -> Self {
        Self::new(page_origin(), crate::io::default_http_client())
    }

    /// Fetch the live property list
    ///
    /// Transport errors, non-2xx statuses, unknown shapes and empty lists
    /// all come back as errors.
    pub async fn fetch_properties(&self) -> crate::Result<Vec<Property>> {
        let url = format!("{}{}", self.base_url, PROPERTIES_PATH);
        let response = self.http.get(&url).await?;
        if !response.is_success() {
            return Err(DashboardError::Status {
                status: response.status,
                url,
            });
        }
        parse_properties(&response.body)
    }

    /// Fetch the revenue summary for one property
    pub async fn fetch_summary(&self, property_id: &str) -> crate::Result<RevenueSummaryResponse> {
        let url = format!(
            "{}{}?property_id={}",
            self.base_url,
            SUMMARY_PATH,
            urlencoding::encode(property_id)
        );
        let response = self.http.get(&url).await?;
        if !response.is_success() {
            return Err(DashboardError::Status {
                status: response.status,
                url,
            });
        }
        Ok(serde_json::from_str(&response.body)?)
    }
}

fn page_origin() -> String {
    #[cfg(all(feature = "csr", target_arch = "wasm32"))]
    {
        web_sys::window()
            .and_then(|window| window.location().origin().ok())
            .unwrap_or_default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        String::new()
    }
}
