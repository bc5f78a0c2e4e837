//! BDD test world for the property dashboard frontend

use cucumber::World;
use property_dashboard_app::api::TenantId;
use property_dashboard_app::loader::LoadOutcome;
use property_dashboard_app::selection::SelectorState;
use property_dashboard_app::tenant::MemoryStore;

/// What the fake backend does when asked for the property list
#[derive(Debug, Clone)]
pub enum CannedResponse {
    Respond { status: u16, body: String },
    Fail(String),
}

#[derive(Debug, Default, World)]
pub struct DashboardWorld {
    // Tenant resolution
    pub store: MemoryStore,
    pub store_faulty: bool,
    pub resolved_tenant: Option<TenantId>,

    // Property loading
    pub response: Option<CannedResponse>,
    pub outcome: Option<LoadOutcome>,
    pub requests: usize,

    // Selection
    pub selector: SelectorState,
    pub last_select_accepted: Option<bool>,
}
