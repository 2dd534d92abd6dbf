//! Supported-language registry.
//!
//! A static table mapping short language codes to human-readable display
//! names. Selectors on the CLI accept either form; the pipeline and the
//! remote services operate on codes only.

/// One supported language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language {
    /// Short code sent to the remote services (e.g. "en", "zh-cn")
    pub code: &'static str,
    /// Human-readable display name (e.g. "English")
    pub name: &'static str,
}

/// All languages supported by the recognition, translation, and synthesis
/// services this tool talks to.
///
/// Display names are unique, so resolving a name back to a code is
/// unambiguous.
pub const LANGUAGES: &[Language] = &[
    Language { code: "en", name: "English" },
    Language { code: "es", name: "Spanish" },
    Language { code: "fr", name: "French" },
    Language { code: "de", name: "German" },
    Language { code: "it", name: "Italian" },
    Language { code: "ja", name: "Japanese" },
    Language { code: "ko", name: "Korean" },
    Language { code: "zh-cn", name: "Chinese (Simplified)" },
    Language { code: "hi", name: "Hindi" },
    Language { code: "ar", name: "Arabic" },
    Language { code: "ml", name: "Malayalam" },
];

/// Resolve a user-supplied selector to a language.
///
/// Accepts either the short code or the display name, ASCII
/// case-insensitively.
///
/// # Returns
///
/// Returns `Some(&Language)` on a match, `None` otherwise.
pub fn find(selector: &str) -> Option<&'static Language> {
    let selector = selector.trim();
    LANGUAGES.iter().find(|l| {
        l.code.eq_ignore_ascii_case(selector) || l.name.eq_ignore_ascii_case(selector)
    })
}

/// Look up a language by its short code.
pub fn by_code(code: &str) -> Option<&'static Language> {
    LANGUAGES.iter().find(|l| l.code.eq_ignore_ascii_case(code))
}

/// Look up a language by its display name.
pub fn by_name(name: &str) -> Option<&'static Language> {
    LANGUAGES.iter().find(|l| l.name.eq_ignore_ascii_case(name))
}

/// Get all supported languages, in table order.
pub fn all() -> &'static [Language] {
    LANGUAGES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_by_code() {
        let lang = find("en").expect("en should exist");
        assert_eq!(lang.code, "en");
        assert_eq!(lang.name, "English");
    }

    #[test]
    fn test_find_by_display_name() {
        let lang = find("Spanish").expect("Spanish should exist");
        assert_eq!(lang.code, "es");
    }

    #[test]
    fn test_find_is_case_insensitive() {
        assert_eq!(find("ENGLISH").map(|l| l.code), Some("en"));
        assert_eq!(find("Zh-CN").map(|l| l.code), Some("zh-cn"));
        assert_eq!(find("malayalam").map(|l| l.code), Some("ml"));
    }

    #[test]
    fn test_find_trims_whitespace() {
        assert_eq!(find("  fr  ").map(|l| l.code), Some("fr"));
    }

    #[test]
    fn test_find_not_found() {
        assert!(find("klingon").is_none());
        assert!(find("").is_none());
    }

    #[test]
    fn test_registry_has_eleven_languages() {
        assert_eq!(all().len(), 11);
    }

    #[test]
    fn test_code_round_trips_through_display_name() {
        for lang in all() {
            let resolved = by_name(lang.name)
                .unwrap_or_else(|| panic!("display name {} not found", lang.name));
            assert_eq!(
                resolved.code, lang.code,
                "display name {} resolved to the wrong code",
                lang.name
            );
        }
    }

    #[test]
    fn test_codes_are_unique() {
        let mut codes: Vec<_> = all().iter().map(|l| l.code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), all().len(), "language codes are not unique");
    }

    #[test]
    fn test_display_names_are_unique() {
        let mut names: Vec<_> = all().iter().map(|l| l.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), all().len(), "display names are not unique");
    }

    #[test]
    fn test_codes_are_lowercase() {
        for lang in all() {
            assert_eq!(
                lang.code,
                lang.code.to_ascii_lowercase(),
                "code {} is not lowercase",
                lang.code
            );
        }
    }

    #[test]
    fn test_chinese_uses_locale_qualified_code() {
        let lang = by_name("Chinese (Simplified)").expect("Chinese should exist");
        assert_eq!(lang.code, "zh-cn");
    }
}
