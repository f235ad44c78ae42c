/// Turn a display name into a url- and filename-safe identifier.
///
/// Trims, lowercases, collapses whitespace runs to single hyphens, then
/// strips everything outside `[a-z0-9-]`. Total and idempotent; uniqueness
/// is the persistence layer's problem, not this function's.
pub fn create_slug(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_names() {
        assert_eq!(create_slug("Tampa Bay"), "tampa-bay");
        assert_eq!(create_slug("St. Petersburg"), "st-petersburg");
        assert_eq!(create_slug("Miami"), "miami");
    }

    #[test]
    fn test_whitespace_collapsing() {
        assert_eq!(create_slug("  Key   West  "), "key-west");
        assert_eq!(create_slug("Fort\tMyers"), "fort-myers");
    }

    #[test]
    fn test_strips_disallowed_characters() {
        assert_eq!(create_slug("Port St. Lucie (FL)"), "port-st-lucie-fl");
        assert_eq!(create_slug("Café Town"), "caf-town");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(create_slug(""), "");
        assert_eq!(create_slug("   "), "");
    }

    #[test]
    fn test_idempotent() {
        for name in ["Tampa Bay", "  Key   West  ", "Port St. Lucie (FL)", "x"] {
            let once = create_slug(name);
            assert_eq!(create_slug(&once), once);
        }
    }

    #[test]
    fn test_output_charset() {
        let slug = create_slug("A weird!! NAME *** 42");
        assert!(
            slug.chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        );
    }
}
