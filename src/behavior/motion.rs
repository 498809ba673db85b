//! Motion Preference - Reduced-motion probe
//!
//! Terminal sessions have no media query, so the preference arrives
//! through the `REDUCE_MOTION` environment variable, following the
//! `NO_COLOR` convention: any value other than empty, `0`, or `false`
//! (case-insensitive) enables it.
//!
//! The page probes this once at install time and hands the result to
//! every controller through
//! [`PageContext`](crate::behavior::PageContext). Nothing re-reads the
//! environment afterwards, so a mid-session change takes effect on the
//! next install, never on a live page.

use std::env;

/// Environment variable holding the reduced-motion preference.
pub const REDUCE_MOTION_ENV: &str = "REDUCE_MOTION";

/// Read the reduced-motion preference from the environment.
pub fn reduced_motion() -> bool {
    parse_preference(env::var(REDUCE_MOTION_ENV).ok().as_deref())
}

/// Interpret a raw variable value. Unset, empty, `0`, and `false`
/// (case-insensitive) all mean motion is fine.
fn parse_preference(value: Option<&str>) -> bool {
    match value {
        None => false,
        Some(raw) => {
            let trimmed = raw.trim();
            !(trimmed.is_empty()
                || trimmed == "0"
                || trimmed.eq_ignore_ascii_case("false"))
        }
    }
}
