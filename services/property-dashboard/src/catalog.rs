//! Per-tenant property catalog

use serde::Serialize;

use crate::config::{default_currency, CatalogConfig, CatalogProperty, TenantCatalog};

/// Property as listed by /dashboard/properties
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyEntry {
    pub id: String,
    pub name: String,
}

/// Revenue summary as returned by /dashboard/summary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RevenueSummary {
    pub property_id: String,
    pub total_revenue: f64,
    pub currency: String,
    pub reservations_count: u32,
}

/// Immutable lookup of properties by tenant
#[derive(Debug, Clone)]
pub struct Catalog {
    default_tenant: String,
    tenants: Vec<TenantCatalog>,
}

impl Catalog {
    pub fn from_config(config: &CatalogConfig) -> Self {
        let tenants = if config.tenants.is_empty() {
            tracing::info!("No catalog configured, serving sample properties");
            sample_tenants()
        } else {
            config.tenants.clone()
        };
        Self {
            default_tenant: config.default_tenant.clone(),
            tenants,
        }
    }

    /// Tenant assumed when a request does not name one
    pub fn default_tenant(&self) -> &str {
        &self.default_tenant
    }

    fn tenant(&self, tenant: &str) -> Option<&TenantCatalog> {
        self.tenants.iter().find(|t| t.tenant == tenant)
    }

    /// Properties of `tenant` sorted by name; empty for unknown tenants
    pub fn properties_for(&self, tenant: &str) -> Vec<PropertyEntry> {
        let Some(catalog) = self.tenant(tenant) else {
            tracing::debug!("Unknown tenant {}, returning no properties", tenant);
            return Vec::new();
        };
        let mut entries: Vec<PropertyEntry> = catalog
            .properties
            .iter()
            .map(|p| PropertyEntry {
                id: p.id.clone(),
                name: p.name.clone(),
            })
            .collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        entries
    }

    /// Revenue summary for a property owned by `tenant`
    pub fn summary(&self, tenant: &str, property_id: &str) -> crate::Result<RevenueSummary> {
        let property = self
            .tenant(tenant)
            .and_then(|t| t.properties.iter().find(|p| p.id == property_id))
            .ok_or_else(|| crate::ServiceError::PropertyNotFound {
                property_id: property_id.to_string(),
                tenant: tenant.to_string(),
            })?;

        Ok(match &property.revenue {
            Some(revenue) => RevenueSummary {
                property_id: property.id.clone(),
                total_revenue: revenue.total,
                currency: revenue.currency.clone(),
                reservations_count: revenue.reservations,
            },
            None => RevenueSummary {
                property_id: property.id.clone(),
                total_revenue: 0.0,
                currency: default_currency(),
                reservations_count: 0,
            },
        })
    }
}

fn sample_tenants() -> Vec<TenantCatalog> {
    let tenant = |tenant: &str, properties: &[(&str, &str)]| TenantCatalog {
        tenant: tenant.to_string(),
        properties: properties
            .iter()
            .map(|(id, name)| CatalogProperty {
                id: id.to_string(),
                name: name.to_string(),
                revenue: None,
            })
            .collect(),
    };

    vec![
        tenant(
            "tenant-a",
            &[
                ("prop-001", "Beach House Alpha"),
                ("prop-002", "City Apartment Downtown"),
                ("prop-003", "Country Villa Estate"),
            ],
        ),
        tenant(
            "tenant-b",
            &[
                ("prop-001", "Mountain Lodge Beta"),
                ("prop-004", "Lakeside Cottage"),
                ("prop-005", "Urban Loft Modern"),
            ],
        ),
    ]
}
