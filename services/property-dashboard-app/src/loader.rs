//! One-shot property loading with tenant-filtered fallback

use tokio_util::sync::CancellationToken;

use crate::api::{DashboardApi, Property, TenantId};
use crate::fallback::fallback_for;
use crate::tenant::{KeyValueStore, TenantResolver};

/// Where the active property list came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListSource {
    Live,
    Fallback(TenantId),
}

/// Result of a completed load
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOutcome {
    pub properties: Vec<Property>,
    pub source: ListSource,
}

impl LoadOutcome {
    /// Id of the first property, if any
    pub fn default_selection(&self) -> Option<&str> {
        self.properties.first().map(|p| p.id.as_str())
    }
}

/// Loads the property list once, falling back to the sample table
pub struct PropertyLoader {
    api: DashboardApi,
    store: Box<dyn KeyValueStore>,
}

impl PropertyLoader {
    pub fn new(api: DashboardApi, store: Box<dyn KeyValueStore>) -> Self {
        Self { api, store }
    }

    /// Run the load unless `cancel` fires first
    ///
    /// Returns `None` when cancelled; the caller must not apply any state in
    /// that case.
    pub async fn load(&self, cancel: &CancellationToken) -> Option<LoadOutcome> {
        let outcome = cancel.run_until_cancelled(self.load_once()).await;
        if outcome.is_none() {
            tracing::debug!("Property load cancelled");
        }
        outcome
    }

    async fn load_once(&self) -> LoadOutcome {
        match self.api.fetch_properties().await {
            Ok(properties) => {
                tracing::info!("Loaded {} properties from API", properties.len());
                LoadOutcome {
                    properties,
                    source: ListSource::Live,
                }
            }
            Err(e) => {
                tracing::error!("API failed, using fallback: {}", e);
                let tenant = TenantResolver::new(&*self.store).resolve();
                let properties = fallback_for(tenant);
                tracing::info!(
                    "Using fallback for tenant {}: {} properties",
                    tenant,
                    properties.len()
                );
                LoadOutcome {
                    properties,
                    source: ListSource::Fallback(tenant),
                }
            }
        }
    }
}
