use chrono::{DateTime, Utc};

/// Relative time ("2 min ago", "yesterday")
pub fn format_relative_time(ts: &DateTime<Utc>) -> String {
    format_relative_time_at(ts, Utc::now())
}

pub fn format_relative_time_at(ts: &DateTime<Utc>, now: DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(*ts);

    let seconds = duration.num_seconds();
    let minutes = duration.num_minutes();
    let hours = duration.num_hours();
    let days = duration.num_days();

    if seconds < 60 {
        "just now".to_string()
    } else if minutes < 60 {
        format!("{} min ago", minutes)
    } else if hours < 24 {
        format!("{} hours ago", hours)
    } else if days == 1 {
        "yesterday".to_string()
    } else if days < 7 {
        format!("{} days ago", days)
    } else if days < 30 {
        format!("{} weeks ago", days / 7)
    } else if days < 365 {
        format!("{} months ago", days / 30)
    } else {
        format!("{} years ago", days / 365)
    }
}

/// Calendar date shown on the detail page
pub fn format_date(ts: &DateTime<Utc>) -> String {
    ts.format("%d/%m/%Y").to_string()
}
