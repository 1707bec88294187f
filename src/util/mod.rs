//
//  logfire-cli
//  util/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Utility Module
//!
//! Small helpers shared by the model and the command layer.
//!
//! ## Categories
//!
//! - **Time Utilities**: [`format_relative_time`]
//! - **String Utilities**: [`slugify`], [`truncate`]
//!
//! ## Example
//!
//! ```rust
//! use logfire_cli::util::{slugify, truncate};
//!
//! assert_eq!(slugify("Service Overview"), "service-overview");
//! assert_eq!(truncate("a long dashboard name", 9), "a long...");
//! ```

use chrono::{DateTime, Utc};

/// Describes how long ago `timestamp` was, relative to now.
///
/// See [`format_relative_time_from`] for the labels used.
pub fn format_relative_time(timestamp: DateTime<Utc>) -> String {
    format_relative_time_from(timestamp, Utc::now())
}

/// Describes how long before `now` the `timestamp` was.
///
/// # Notes
///
/// - Returns "just now" for timestamps within the last 60 seconds.
/// - Returns "in the future" for timestamps ahead of `now`.
/// - Months and years are approximated as 30 and 365 days.
pub fn format_relative_time_from(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff = now.signed_duration_since(timestamp).num_seconds();

    if diff < 0 {
        return "in the future".to_string();
    }

    let (amount, unit) = match diff {
        0..=59 => return "just now".to_string(),
        60..=3_599 => (diff / 60, "minute"),
        3_600..=86_399 => (diff / 3_600, "hour"),
        86_400..=604_799 => (diff / 86_400, "day"),
        604_800..=2_591_999 => (diff / 604_800, "week"),
        2_592_000..=31_535_999 => (diff / 2_592_000, "month"),
        _ => (diff / 31_536_000, "year"),
    };

    format!("{} {}{} ago", amount, unit, if amount == 1 { "" } else { "s" })
}

/// Normalizes a dashboard name into the slug form the API expects.
///
/// Lowercases the input and turns spaces and underscores into hyphens.
/// Nothing else is rewritten; the server remains the authority on the
/// final slug.
///
/// # Example
///
/// ```rust
/// use logfire_cli::util::slugify;
///
/// assert_eq!(slugify("My Dashboard"), "my-dashboard");
/// assert_eq!(slugify("api_latency"), "api-latency");
/// assert_eq!(slugify("already-a-slug"), "already-a-slug");
/// ```
pub fn slugify(s: &str) -> String {
    s.to_lowercase()
        .chars()
        .map(|c| if c == ' ' || c == '_' { '-' } else { c })
        .collect()
}

/// Truncates a string to at most `max_len` characters, adding "..." when cut.
///
/// Operates on `char`s, so multi-byte names are never split mid-character.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    if max_len > 3 {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    } else {
        s.chars().take(max_len).collect()
    }
}
