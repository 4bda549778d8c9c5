//! npm range matching on top of nodejs-semver

use nodejs_semver::{Range, Version};

/// Parse a version the way `semver.satisfies` does before matching
pub fn parse_version(version: &str) -> Option<Version> {
    Version::parse(version.trim()).ok()
}

/// Parse an npm range expression. An empty expression means any version.
fn parse_range(range: &str) -> Option<Range> {
    let trimmed = range.trim();
    let expr = if trimmed.is_empty() { "*" } else { trimmed };
    Range::parse(expr).ok()
}

/// Returns true if `version` satisfies `range`; unparsable input never does
pub fn satisfies(version: &Version, range: &str) -> bool {
    parse_range(range)
        .map(|r| version.satisfies(&r))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(version: &str, range: &str) -> bool {
        parse_version(version)
            .map(|v| satisfies(&v, range))
            .unwrap_or(false)
    }

    #[test]
    fn test_caret() {
        assert!(check("18.2.0", "^18.0.0"));
        assert!(!check("17.0.0", "^18.0.0"));
        assert!(!check("19.0.0", "^18.0.0"));
    }

    #[test]
    fn test_tilde() {
        assert!(check("1.2.5", "~1.2.3"));
        assert!(!check("1.3.0", "~1.2.3"));
    }

    #[test]
    fn test_union() {
        let range = "^16.8.0 || ^17.0.0 || ^18.0.0";
        assert!(check("16.14.0", range));
        assert!(check("17.0.2", range));
        assert!(!check("15.7.0", range));
    }

    #[test]
    fn test_x_range_and_wildcard() {
        assert!(check("16.14.0", "16.x"));
        assert!(!check("17.0.0", "16.x"));
        assert!(check("18.2.0", "*"));
    }

    #[test]
    fn test_comparator_set() {
        assert!(check("18.2.0", ">=16.8.0 <19.0.0"));
        assert!(!check("19.1.0", ">=16.8.0 <19.0.0"));
    }

    #[test]
    fn test_hyphen_range() {
        assert!(check("17.5.0", "17.0.0 - 18.1.0"));
        assert!(!check("18.2.0", "17.0.0 - 18.1.0"));
    }

    #[test]
    fn test_exact_version_is_not_caret() {
        assert!(check("18.2.0", "18.2.0"));
        assert!(!check("18.2.1", "18.2.0"));
    }

    #[test]
    fn test_empty_range_matches_anything() {
        assert!(check("0.0.1", ""));
        assert!(check("18.2.0", "  "));
    }

    #[test]
    fn test_invalid_version_never_satisfies() {
        assert!(parse_version("banana").is_none());
        assert!(!check("banana", "^1.0.0"));
    }
}
