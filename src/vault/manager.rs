//! Version manager: numbering, retention, restore and the history queries.

use std::collections::HashSet;

use chrono::{SecondsFormat, Utc};
use tokio::sync::Mutex;

use super::VaultRepository;
use crate::db::KvStore;
use crate::models::{BrandKit, BrandVersion, VaultData};

/// The vault for one application session.
pub struct Vault {
    repo: VaultRepository,
    write_lock: Mutex<()>,
}

impl Vault {
    pub fn new(store: KvStore) -> Self {
        Self {
            repo: VaultRepository::new(store),
            write_lock: Mutex::new(()),
        }
    }

    /// Store a new version of `brand_kit` for `business_name`.
    ///
    /// The version number is one above the highest stored for the business
    /// (case-insensitive), or 1. The new entry becomes current. If the business
    /// then holds more than `maxVersions` entries, its lowest-numbered ones are
    /// evicted; other businesses are never touched.
    pub async fn create_version(
        &self,
        business_name: &str,
        industry: &str,
        style: &str,
        brand_kit: BrandKit,
        note: Option<String>,
    ) -> BrandVersion {
        let _guard = self.write_lock.lock().await;
        self.create_locked(business_name, industry, style, brand_kit, note)
            .await
    }

    async fn create_locked(
        &self,
        business_name: &str,
        industry: &str,
        style: &str,
        brand_kit: BrandKit,
        note: Option<String>,
    ) -> BrandVersion {
        let mut vault = self.repo.load().await;

        let next_version = vault
            .versions
            .iter()
            .filter(|v| v.belongs_to(business_name))
            .map(|v| v.version)
            .max()
            .map_or(1, |max| max.saturating_add(1));

        let entry = BrandVersion {
            id: new_version_id(),
            version: next_version,
            business_name: business_name.to_string(),
            industry: industry.to_string(),
            style: style.to_string(),
            brand_kit,
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            note,
        };

        vault.versions.insert(0, entry.clone());

        let evicted = evict_excess(&mut vault, business_name);
        if !evicted.is_empty() {
            tracing::debug!(
                business = %business_name,
                evicted = ?evicted,
                "Evicted versions over retention cap"
            );
        }

        vault.current_version_id = Some(entry.id.clone());
        self.repo.save(&vault).await;

        tracing::info!(
            business = %business_name,
            version = entry.version,
            id = %entry.id,
            "Stored brand version"
        );

        entry
    }

    /// Store a copy of an existing version as the newest one.
    ///
    /// Returns `None` when no version has this id.
    pub async fn restore_version(&self, id: &str) -> Option<BrandVersion> {
        let _guard = self.write_lock.lock().await;

        let source = self
            .repo
            .load()
            .await
            .versions
            .into_iter()
            .find(|v| v.id == id)?;

        let note = format!("Restored from v{}", source.version);
        let restored = self
            .create_locked(
                &source.business_name,
                &source.industry,
                &source.style,
                source.brand_kit,
                Some(note),
            )
            .await;

        Some(restored)
    }

    /// Mark an existing version as current without creating a new one.
    pub async fn set_current_version(&self, id: &str) -> Option<BrandVersion> {
        let _guard = self.write_lock.lock().await;

        let mut vault = self.repo.load().await;
        let version = vault.versions.iter().find(|v| v.id == id)?.clone();

        vault.current_version_id = Some(version.id.clone());
        self.repo.save(&vault).await;

        Some(version)
    }

    /// Remove a version. Returns whether anything was removed.
    ///
    /// Deleting the current version hands "current" to the first remaining
    /// entry of the global list.
    pub async fn delete_version(&self, id: &str) -> bool {
        let _guard = self.write_lock.lock().await;

        let mut vault = self.repo.load().await;
        let initial_len = vault.versions.len();

        vault.versions.retain(|v| v.id != id);
        if vault.versions.len() == initial_len {
            return false;
        }

        if vault.current_version_id.as_deref() == Some(id) {
            vault.current_version_id = vault.versions.first().map(|v| v.id.clone());
        }

        self.repo.save(&vault).await;
        tracing::info!(id = %id, "Deleted brand version");

        true
    }

    /// The whole vault as currently stored.
    pub async fn snapshot(&self) -> VaultData {
        self.repo.load().await
    }

    pub async fn get_version(&self, id: &str) -> Option<BrandVersion> {
        self.repo
            .load()
            .await
            .versions
            .into_iter()
            .find(|v| v.id == id)
    }

    /// The version marked current, or the most recently inserted one.
    pub async fn current_version(&self) -> Option<BrandVersion> {
        let vault = self.repo.load().await;
        match vault.current_version_id {
            Some(id) => vault.versions.into_iter().find(|v| v.id == id),
            None => vault.versions.into_iter().next(),
        }
    }

    /// Versions for a business (case-insensitive), highest version first.
    pub async fn versions_for_business(&self, business_name: &str) -> Vec<BrandVersion> {
        let mut versions: Vec<BrandVersion> = self
            .repo
            .load()
            .await
            .versions
            .into_iter()
            .filter(|v| v.belongs_to(business_name))
            .collect();

        versions.sort_by(|a, b| b.version.cmp(&a.version));
        versions
    }

    pub async fn version_count(&self, business_name: &str) -> usize {
        self.repo
            .load()
            .await
            .versions
            .iter()
            .filter(|v| v.belongs_to(business_name))
            .count()
    }

    /// Distinct business names exactly as stored, in list order.
    ///
    /// Deduplicates by exact string, so "Acme" and "acme" are both listed even
    /// though every other lookup treats them as the same business.
    pub async fn all_business_names(&self) -> Vec<String> {
        let vault = self.repo.load().await;
        let mut seen = HashSet::new();

        vault
            .versions
            .into_iter()
            .map(|v| v.business_name)
            .filter(|name| seen.insert(name.clone()))
            .collect()
    }
}

fn new_version_id() -> String {
    format!("v_{}", uuid::Uuid::new_v4().simple())
}

/// Drop the lowest-numbered versions of `business_name` beyond the cap.
///
/// Returns the evicted ids.
fn evict_excess(vault: &mut VaultData, business_name: &str) -> Vec<String> {
    let cap = vault.max_versions.max(1);

    let mut owned: Vec<(u64, String)> = vault
        .versions
        .iter()
        .filter(|v| v.belongs_to(business_name))
        .map(|v| (v.version, v.id.clone()))
        .collect();

    if owned.len() <= cap {
        return Vec::new();
    }

    owned.sort_by(|a, b| b.0.cmp(&a.0));
    let evicted: Vec<String> = owned.split_off(cap).into_iter().map(|(_, id)| id).collect();

    vault.versions.retain(|v| !evicted.contains(&v.id));

    if let Some(current) = &vault.current_version_id {
        if evicted.contains(current) {
            vault.current_version_id = vault.versions.first().map(|v| v.id.clone());
        }
    }

    evicted
}
