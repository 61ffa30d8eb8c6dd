//! Generation endpoint.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use super::{success, ApiResult};
use crate::errors::AppError;
use crate::models::{GenerateRequest, GenerateResponse};
use crate::AppState;

/// POST /api/generate - Generate a brand kit and store it as a new version.
pub async fn generate_brand_kit(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> ApiResult<GenerateResponse> {
    let Json(request) = payload?;

    let business_name = request.business_name.trim();
    if business_name.is_empty() || request.description.trim().is_empty() {
        return Err(AppError::Validation(
            "Business name and description are required".to_string(),
        ));
    }

    let brand_kit = state.generator.generate(&request).await.map_err(|e| {
        tracing::error!("Generation error: {}", e);
        AppError::Upstream("Failed to generate brand kit. Please try again.".to_string())
    })?;

    let version = state
        .vault
        .create_version(
            business_name,
            request.industry.as_deref().unwrap_or_default(),
            request.style.as_deref().unwrap_or_default(),
            brand_kit,
            None,
        )
        .await;

    success(GenerateResponse { version })
}
