//! Environment-driven settings.
//!
//! Values are read from the process environment (populated from `.env` by `main`).
//! Unset or unparsable values fall back to defaults.

use std::path::PathBuf;

const DEFAULT_CATALOG_PATH: &str = "config.toml";

/// Path of the reference-data catalog, from `CATALOG_PATH`.
#[must_use]
pub fn catalog_path() -> PathBuf {
    std::env::var("CATALOG_PATH")
        .map_or_else(|_| PathBuf::from(DEFAULT_CATALOG_PATH), PathBuf::from)
}

/// Maximum recipes embedded per author in subscription listings, from `RECIPES_LIMIT`.
///
/// `None` means no limit.
#[must_use]
pub fn recipes_limit() -> Option<u64> {
    std::env::var("RECIPES_LIMIT")
        .ok()
        .and_then(|value| parse_limit(&value))
}

fn parse_limit(value: &str) -> Option<u64> {
    value.trim().parse::<u64>().ok().filter(|limit| *limit > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_limit() {
        assert_eq!(parse_limit("3"), Some(3));
        assert_eq!(parse_limit(" 10 "), Some(10));
        assert_eq!(parse_limit("0"), None);
        assert_eq!(parse_limit("-1"), None);
        assert_eq!(parse_limit("lots"), None);
    }
}
