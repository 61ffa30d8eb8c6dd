//! Relative timestamp labels for history views.

use chrono::{DateTime, Datelike, Utc};

/// Label a creation timestamp relative to the current time.
pub fn format_relative_time(iso: &str) -> String {
    format_relative_time_at(iso, Utc::now())
}

/// Label a creation timestamp relative to `now`.
///
/// Buckets: under a minute "Just now" (future times included), then minutes,
/// hours and days up to a week. Older timestamps render as a short date, with
/// the year only when it differs from `now`. Unparseable input is echoed back.
pub fn format_relative_time_at(iso: &str, now: DateTime<Utc>) -> String {
    let Ok(created) = DateTime::parse_from_rfc3339(iso) else {
        return iso.to_string();
    };
    let created = created.with_timezone(&Utc);
    let elapsed = now.signed_duration_since(created);

    let minutes = elapsed.num_minutes();
    if minutes < 1 {
        return "Just now".to_string();
    }
    if minutes < 60 {
        return format!("{}m ago", minutes);
    }

    let hours = elapsed.num_hours();
    if hours < 24 {
        return format!("{}h ago", hours);
    }

    let days = elapsed.num_days();
    if days < 7 {
        return format!("{}d ago", days);
    }

    if created.year() == now.year() {
        created.format("%b %-d").to_string()
    } else {
        created.format("%b %-d, %Y").to_string()
    }
}
