//! Brand Vault endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    Json,
};

use super::{success, version_not_found, ApiResult};
use crate::errors::AppError;
use crate::models::{
    BrandDiff, BrandVersion, CompareQuery, CreateVersionRequest, DeleteResult, SetCurrentRequest,
    VaultData, VersionCount, VersionSummary,
};
use crate::vault::{compare_brand_kits, format_relative_time};
use crate::AppState;

/// GET /api/vault - The whole vault.
pub async fn get_vault(State(state): State<AppState>) -> ApiResult<VaultData> {
    success(state.vault.snapshot().await)
}

/// GET /api/vault/businesses - Distinct business names.
pub async fn list_businesses(State(state): State<AppState>) -> ApiResult<Vec<String>> {
    success(state.vault.all_business_names().await)
}

/// GET /api/vault/businesses/:name/versions - History for one business, newest first.
pub async fn list_business_versions(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<Vec<VersionSummary>> {
    let versions = state
        .vault
        .versions_for_business(&name)
        .await
        .into_iter()
        .map(|version| VersionSummary {
            created_label: format_relative_time(&version.created_at),
            version,
        })
        .collect();

    success(versions)
}

/// GET /api/vault/businesses/:name/count - Number of stored versions.
pub async fn count_business_versions(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<VersionCount> {
    success(VersionCount {
        count: state.vault.version_count(&name).await,
    })
}

/// POST /api/vault/versions - Store a kit as a new version.
pub async fn create_version(
    State(state): State<AppState>,
    payload: Result<Json<CreateVersionRequest>, JsonRejection>,
) -> ApiResult<BrandVersion> {
    let Json(request) = payload?;

    let business_name = request.business_name.trim();
    if business_name.is_empty() {
        return Err(AppError::Validation(
            "Business name is required".to_string(),
        ));
    }

    let version = state
        .vault
        .create_version(
            business_name,
            &request.industry,
            &request.style,
            request.brand_kit,
            request.note,
        )
        .await;

    success(version)
}

/// GET /api/vault/versions/:id - One stored version.
pub async fn get_version(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<BrandVersion> {
    match state.vault.get_version(&id).await {
        Some(version) => success(version),
        None => Err(version_not_found(&id)),
    }
}

/// DELETE /api/vault/versions/:id - Remove a stored version.
pub async fn delete_version(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<DeleteResult> {
    if state.vault.delete_version(&id).await {
        success(DeleteResult { removed: true })
    } else {
        Err(version_not_found(&id))
    }
}

/// POST /api/vault/versions/:id/restore - Store a copy of an older version as the newest.
pub async fn restore_version(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<BrandVersion> {
    match state.vault.restore_version(&id).await {
        Some(version) => success(version),
        None => Err(version_not_found(&id)),
    }
}

/// GET /api/vault/current - The active version.
pub async fn get_current_version(State(state): State<AppState>) -> ApiResult<BrandVersion> {
    match state.vault.current_version().await {
        Some(version) => success(version),
        None => Err(AppError::NotFound("Vault is empty".to_string())),
    }
}

/// PUT /api/vault/current - Mark a stored version as active.
pub async fn set_current_version(
    State(state): State<AppState>,
    payload: Result<Json<SetCurrentRequest>, JsonRejection>,
) -> ApiResult<BrandVersion> {
    let Json(request) = payload?;

    match state.vault.set_current_version(&request.id).await {
        Some(version) => success(version),
        None => Err(version_not_found(&request.id)),
    }
}

/// GET /api/vault/compare?from=&to= - Diff two stored versions.
pub async fn compare_versions(
    State(state): State<AppState>,
    Query(query): Query<CompareQuery>,
) -> ApiResult<BrandDiff> {
    let old = state
        .vault
        .get_version(&query.from)
        .await
        .ok_or_else(|| version_not_found(&query.from))?;
    let new = state
        .vault
        .get_version(&query.to)
        .await
        .ok_or_else(|| version_not_found(&query.to))?;

    success(compare_brand_kits(&old.brand_kit, &new.brand_kit))
}
