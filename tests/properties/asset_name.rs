//! Property tests for bundle path segment sanitization.

use proptest::prelude::*;

use muwanx::AssetName;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: sanitizing never panics on arbitrary input.
    #[test]
    fn property_sanitize_never_panics(s in "(?s).{0,256}") {
        let name = AssetName::sanitize(&s);
        let _ = name.segment_problem();
    }

    /// PROPERTY: sanitizing an already-sanitized ASCII name changes nothing.
    #[test]
    fn property_sanitize_is_idempotent(s in "[ -~]{0,64}") {
        let once = AssetName::sanitize(&s);
        let twice = AssetName::sanitize(once.as_str());
        prop_assert_eq!(once, twice);
    }

    /// PROPERTY: the result never holds spaces, hyphens or ASCII upper case.
    #[test]
    fn property_sanitize_output_charset(s in "[ -~]{0,64}") {
        let name = AssetName::sanitize(&s);
        prop_assert!(!name.as_str().contains(' '));
        prop_assert!(!name.as_str().contains('-'));
        prop_assert!(!name.as_str().chars().any(|c| c.is_ascii_uppercase()));
        prop_assert_eq!(name.as_str().len(), s.len());
    }

    /// PROPERTY: names differing only in case, spaces vs hyphens vs
    /// underscores map to the same segment.
    #[test]
    fn property_separator_and_case_variants_collide(
        words in proptest::collection::vec("[a-z0-9]{1,8}", 1..4),
        separators in proptest::collection::vec(prop_oneof![Just(' '), Just('-'), Just('_')], 3),
    ) {
        let joined = |sep: char| words.join(&sep.to_string());
        let base = AssetName::sanitize(&joined('_'));
        for sep in &separators {
            prop_assert_eq!(&AssetName::sanitize(&joined(*sep)), &base);
            prop_assert_eq!(&AssetName::sanitize(&joined(*sep).to_uppercase()), &base);
        }
    }
}
