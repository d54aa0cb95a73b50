use crate::Season;

/// Human readable child age from a months value.
///
/// `5` → "5 months", `24` → "2 years", `14` → "1 year and 2 months".
pub fn format_age_months(months: u32) -> String {
    let years = months / 12;
    let rest = months % 12;

    let years_label = |n: u32| format!("{} {}", n, if n == 1 { "year" } else { "years" });
    let months_label = |n: u32| format!("{} {}", n, if n == 1 { "month" } else { "months" });

    match (years, rest) {
        (0, m) => months_label(m),
        (y, 0) => years_label(y),
        (y, m) => format!("{} and {}", years_label(y), months_label(m)),
    }
}

/// Compact counter for likes and views: `1.2k`, `3.4M`
pub fn format_count(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}k", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}

/// Regional-indicator flag for a two letter ISO country code
pub fn flag_emoji(code: &str) -> Option<String> {
    let code = code.trim();
    if code.len() != 2 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }

    code.chars()
        .map(|c| char::from_u32(0x1F1E6 + (c.to_ascii_uppercase() as u32 - 'A' as u32)))
        .collect()
}

/// Emoji shown next to a season: the stored one if any, else a default
pub fn season_badge(season: Option<Season>, stored_emoji: Option<&str>) -> &str {
    if let Some(emoji) = stored_emoji.filter(|e| !e.trim().is_empty()) {
        return emoji;
    }

    match season {
        Some(Season::Spring) => "🌸",
        Some(Season::Summer) => "☀️",
        Some(Season::Autumn) => "🍂",
        Some(Season::Winter) => "❄️",
        None => "🌍",
    }
}

/// Truncate a string to a maximum number of characters
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max).collect();
        format!("{}...", cut.trim_end())
    }
}
