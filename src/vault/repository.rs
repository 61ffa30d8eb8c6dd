//! Loads and stores the vault blob, collapsing every failure to an empty vault.

use crate::db::KvStore;
use crate::models::{VaultData, MAX_VERSIONS};

/// Fixed storage key of the vault blob.
pub const VAULT_KEY: &str = "brandsnap_vault";

/// Typed access to the persisted vault.
#[derive(Clone)]
pub struct VaultRepository {
    store: KvStore,
}

impl VaultRepository {
    pub fn new(store: KvStore) -> Self {
        Self { store }
    }

    /// Load the vault, or an empty one if it is absent, unreadable or corrupt.
    pub async fn load(&self) -> VaultData {
        let raw = match self.store.get(VAULT_KEY).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return VaultData::default(),
            Err(e) => {
                tracing::warn!("Vault unavailable, using empty vault: {}", e);
                return VaultData::default();
            }
        };

        match serde_json::from_str::<VaultData>(&raw) {
            Ok(mut vault) => {
                // The retention cap is fixed; a stored value never overrides it.
                vault.max_versions = MAX_VERSIONS;
                vault
            }
            Err(e) => {
                tracing::warn!("Vault blob failed to decode, using empty vault: {}", e);
                VaultData::default()
            }
        }
    }

    /// Persist the vault. A failed write is logged and otherwise ignored.
    pub async fn save(&self, vault: &VaultData) {
        let raw = match serde_json::to_string(vault) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::error!("Failed to encode vault: {}", e);
                return;
            }
        };

        if let Err(e) = self.store.put(VAULT_KEY, &raw).await {
            tracing::error!("Failed to save vault: {}", e);
        }
    }
}
