//! Analytics tracking endpoint.

use axum::{body::Bytes, http::StatusCode, Json};
use chrono::{SecondsFormat, Utc};
use serde_json::{Map, Value};

use crate::models::TrackAck;

const PRODUCT: &str = "brandsnap";

/// POST /api/track - Stamp an analytics event and write it to the log.
pub async fn track_event(body: Bytes) -> (StatusCode, Json<TrackAck>) {
    let Ok(mut event) = serde_json::from_slice::<Map<String, Value>>(&body) else {
        return (StatusCode::BAD_REQUEST, Json(TrackAck { success: false }));
    };

    event.insert("product".to_string(), Value::from(PRODUCT));
    event.insert(
        "timestamp".to_string(),
        Value::from(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)),
    );

    let event = Value::Object(event);
    tracing::info!(target: "track", event = %event, "Tracked event");

    (StatusCode::OK, Json(TrackAck { success: true }))
}
