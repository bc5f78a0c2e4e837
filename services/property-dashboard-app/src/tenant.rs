//! Tenant detection from browser key-value storage
//!
//! There is no authoritative tenant on the client. The resolver scans the
//! storage values for well-known markers and falls back to tenant A when it
//! finds none or cannot read the storage at all.

use crate::api::TenantId;
use crate::DashboardError;

/// Marker that identifies tenant A
pub const TENANT_A_MARKER: &str = "sunset";

/// Marker that identifies tenant B
pub const TENANT_B_MARKER: &str = "ocean";

/// Read-only view of a browser-style key-value store
///
/// Mirrors the Web Storage API: entries are enumerated by index and any call
/// may raise an access fault.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore {
    /// Number of entries in the store
    fn length(&self) -> crate::Result<usize>;

    /// Key at `index` in enumeration order
    fn key(&self, index: usize) -> crate::Result<Option<String>>;

    /// Value stored under `key`
    fn get_item(&self, key: &str) -> crate::Result<Option<String>>;
}

/// In-memory store preserving insertion order
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Vec<(String, String)>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`, keeping the key's original position if present
    pub fn set_item(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MemoryStore {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut store = MemoryStore::new();
        for (key, value) in iter {
            store.set_item(key, value);
        }
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn length(&self) -> crate::Result<usize> {
        Ok(self.entries.len())
    }

    fn key(&self, index: usize) -> crate::Result<Option<String>> {
        Ok(self.entries.get(index).map(|(k, _)| k.clone()))
    }

    fn get_item(&self, key: &str) -> crate::Result<Option<String>> {
        Ok(self
            .entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone()))
    }
}

/// `window.localStorage`
#[cfg(all(feature = "csr", target_arch = "wasm32"))]
#[derive(Debug, Default)]
pub struct BrowserStorage;

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
impl BrowserStorage {
    fn storage(&self) -> crate::Result<web_sys::Storage> {
        let window = web_sys::window()
            .ok_or_else(|| DashboardError::StoreAccess("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| DashboardError::StoreAccess(format!("{:?}", e)))?
            .ok_or_else(|| DashboardError::StoreAccess("localStorage unavailable".to_string()))
    }
}

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
impl KeyValueStore for BrowserStorage {
    fn length(&self) -> crate::Result<usize> {
        self.storage()?
            .length()
            .map(|len| len as usize)
            .map_err(|e| DashboardError::StoreAccess(format!("{:?}", e)))
    }

    fn key(&self, index: usize) -> crate::Result<Option<String>> {
        self.storage()?
            .key(index as u32)
            .map_err(|e| DashboardError::StoreAccess(format!("{:?}", e)))
    }

    fn get_item(&self, key: &str) -> crate::Result<Option<String>> {
        self.storage()?
            .get_item(key)
            .map_err(|e| DashboardError::StoreAccess(format!("{:?}", e)))
    }
}

/// The key-value store for the current target
pub fn default_store() -> Box<dyn KeyValueStore> {
    #[cfg(all(feature = "csr", target_arch = "wasm32"))]
    {
        Box::new(BrowserStorage)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Box::new(MemoryStore::new())
    }
}

/// Guesses the tenant of the current session from a key-value store
pub struct TenantResolver<'a> {
    store: &'a dyn KeyValueStore,
}

impl<'a> TenantResolver<'a> {
    pub fn new(store: &'a dyn KeyValueStore) -> Self {
        Self { store }
    }

    /// Resolve the tenant, defaulting to tenant A
    ///
    /// Store access faults are logged and never surfaced.
    pub fn resolve(&self) -> TenantId {
        match self.scan() {
            Ok(Some(tenant)) => {
                tracing::debug!("Resolved tenant {} from storage", tenant);
                tenant
            }
            Ok(None) => {
                tracing::debug!("No tenant marker in storage, using {}", TenantId::default());
                TenantId::default()
            }
            Err(e) => {
                tracing::error!("Error getting tenant: {}", e);
                TenantId::default()
            }
        }
    }

    fn scan(&self) -> crate::Result<Option<TenantId>> {
        for index in 0..self.store.length()? {
            let key = self.store.key(index)?.unwrap_or_default();
            let Some(value) = self.store.get_item(&key)? else {
                continue;
            };
            if let Some(tenant) = tenant_for_value(&value) {
                return Ok(Some(tenant));
            }
        }
        Ok(None)
    }
}

/// Tenant named by a single stored value, checking tenant A's marker first
pub fn tenant_for_value(value: &str) -> Option<TenantId> {
    if value.contains(TENANT_A_MARKER) {
        Some(TenantId::TenantA)
    } else if value.contains(TENANT_B_MARKER) {
        Some(TenantId::TenantB)
    } else {
        None
    }
}
