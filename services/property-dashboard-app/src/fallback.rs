//! Built-in sample properties used when the backend is unavailable

use crate::api::{Property, TenantId};

/// Sample properties with their tenant, in display order
///
/// `prop-001` appears under both tenants.
const FALLBACK_PROPERTIES: &[(&str, &str, TenantId)] = &[
    ("prop-001", "Beach House Alpha", TenantId::TenantA),
    ("prop-002", "City Apartment Downtown", TenantId::TenantA),
    ("prop-003", "Country Villa Estate", TenantId::TenantA),
    ("prop-001", "Mountain Lodge Beta", TenantId::TenantB),
    ("prop-004", "Lakeside Cottage", TenantId::TenantB),
    ("prop-005", "Urban Loft Modern", TenantId::TenantB),
];

/// The whole fallback table
pub fn fallback_properties() -> Vec<Property> {
    FALLBACK_PROPERTIES
        .iter()
        .map(|(id, name, tenant)| Property {
            id: id.to_string(),
            name: name.to_string(),
            tenant: Some(tenant.as_str().to_string()),
        })
        .collect()
}

/// Fallback entries belonging to `tenant`, in table order
pub fn fallback_for(tenant: TenantId) -> Vec<Property> {
    fallback_properties()
        .into_iter()
        .filter(|p| p.tenant.as_deref() == Some(tenant.as_str()))
        .collect()
}
