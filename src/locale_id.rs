//! Locale identifier canonicalization
//!
//! Identifiers are stored and looked up with `_` between subtags
//! (`bs_Cyrl_BA`), whatever spelling the caller or the provider used.

/// Separator used by every stored locale identifier
pub const CANONICAL_SEPARATOR: char = '_';

/// Separator accepted on input and rewritten to [`CANONICAL_SEPARATOR`]
pub const ALTERNATE_SEPARATOR: char = '-';

/// Rewrite a locale identifier to the canonical separator.
///
/// Total and idempotent: `normalize_locale_id(normalize_locale_id(x)) == normalize_locale_id(x)`.
pub fn normalize_locale_id(locale_id: &str) -> String {
    locale_id.replace(ALTERNATE_SEPARATOR, &CANONICAL_SEPARATOR.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_normalize_locale_id() {
        assert_eq!(normalize_locale_id("en"), "en");
        assert_eq!(normalize_locale_id("fr-CA"), "fr_CA");
        assert_eq!(normalize_locale_id("bs-Cyrl-BA"), "bs_Cyrl_BA");
        assert_eq!(normalize_locale_id("fr_CA"), "fr_CA");
        assert_eq!(normalize_locale_id("bs_Cyrl_BA"), "bs_Cyrl_BA");
    }

    proptest! {
        #[test]
        fn normalize_is_idempotent(id in "[a-zA-Z0-9_-]{0,16}") {
            let once = normalize_locale_id(&id);
            prop_assert_eq!(normalize_locale_id(&once), once);
        }

        #[test]
        fn hyphen_and_underscore_spellings_agree(parts in prop::collection::vec("[a-zA-Z]{2,4}", 1..4)) {
            let hyphen = parts.join("-");
            let underscore = parts.join("_");
            prop_assert_eq!(normalize_locale_id(&hyphen), normalize_locale_id(&underscore));
        }
    }
}
