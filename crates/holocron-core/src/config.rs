//! Environment lookups shared by service configs.
//!
//! Each service keeps its own config struct with a `from_env()` constructor;
//! these helpers cover the repeated "read, parse, fall back" dance.

use std::str::FromStr;

/// Read `key` and parse it, falling back to `default` when unset or unparseable.
pub fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env_opt(key).and_then(|v| v.parse().ok()).unwrap_or(default)
}

/// Read `key`, treating an empty or whitespace-only value as unset.
pub fn env_opt(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

/// Read a boolean flag. Accepts `1/0`, `true/false`, `yes/no`, `on/off`.
pub fn env_flag(key: &str, default: bool) -> bool {
    env_opt(key).and_then(|v| parse_flag(&v)).unwrap_or(default)
}

pub fn parse_flag(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
