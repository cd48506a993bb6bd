//! Property-based tests for the package URL grammar and canonical form.
//!
//! Components are generated from the legal alphabets, including characters
//! that must be percent-encoded, and the resulting package URLs are checked
//! for round-trip stability and order independence.

use std::collections::BTreeMap;

use proptest::prelude::*;

use package_url::{PackageType, PackageUrl, ParseErrorKind, Qualifiers};

/// Strategies for generating component values.
mod strategies {
    use super::*;

    /// Generate a syntactically valid type: a letter, then letters, digits, '.', '+' or '-'.
    pub fn package_type() -> impl Strategy<Value = String> {
        "[a-zA-Z][a-zA-Z0-9.+-]{0,7}"
    }

    /// Generate a type that starts with a digit.
    pub fn digit_type() -> impl Strategy<Value = String> {
        "[0-9][a-z0-9]{0,5}"
    }

    /// Generate a segment mixing safe characters with ones that need encoding.
    pub fn segment() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9._~+@:%?#&= é-]{1,10}"
    }

    /// Generate a name that is not blank after trimming.
    pub fn name() -> impl Strategy<Value = String> {
        segment().prop_filter("blank name", |s| !s.trim().is_empty())
    }

    /// Generate an optional namespace of 1-3 segments.
    pub fn namespace() -> impl Strategy<Value = Option<String>> {
        prop::option::of(prop::collection::vec(segment(), 1..=3).prop_map(|s| s.join("/")))
    }

    /// Generate an optional version.
    pub fn version() -> impl Strategy<Value = Option<String>> {
        prop::option::of("[a-zA-Z0-9.:@+ -]{0,10}")
    }

    /// Generate a legal qualifier key.
    pub fn qualifier_key() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9._-]{0,8}"
    }

    /// Generate qualifiers with distinct keys.
    pub fn qualifiers() -> impl Strategy<Value = BTreeMap<String, String>> {
        prop::collection::btree_map(qualifier_key(), segment(), 0..=4)
    }

    /// Generate an optional subpath of 1-3 segments.
    pub fn subpath() -> impl Strategy<Value = Option<String>> {
        prop::option::of(
            prop::collection::vec("[a-zA-Z0-9._@% -]{1,6}", 1..=3).prop_map(|s| s.join("/")),
        )
    }

    /// Build a package URL from generated parts, skipping combinations a type rule rejects.
    pub fn purl() -> impl Strategy<Value = PackageUrl> {
        (package_type(), namespace(), name(), version(), qualifiers(), subpath()).prop_filter_map(
            "rejected by type rule",
            |(t, ns, name, version, qualifiers, subpath)| {
                PackageUrl::new(
                    &t,
                    ns.as_deref(),
                    &name,
                    version.as_deref(),
                    &qualifiers,
                    subpath.as_deref(),
                )
                .ok()
            },
        )
    }
}

mod type_tests {
    use super::strategies::*;
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        #[test]
        fn valid_types_parse_lowercased(t in package_type()) {
            let parsed = PackageType::parse(&t).unwrap();
            prop_assert_eq!(parsed.as_str(), t.to_ascii_lowercase());
        }

        #[test]
        fn digit_types_are_rejected(t in digit_type()) {
            prop_assert!(PackageType::parse(&t).is_err());
            let input = format!("pkg:{t}/name");
            prop_assert!(PackageUrl::parse(&input).is_err());
        }
    }
}

mod roundtrip_tests {
    use super::strategies::*;
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn canonical_reparses_to_equal_value(p in purl()) {
            let reparsed = PackageUrl::parse(p.to_canonical_string()).unwrap();
            prop_assert_eq!(&reparsed, &p);
            prop_assert_eq!(reparsed.to_canonical_string(), p.to_canonical_string());
        }

        #[test]
        fn canonicalization_is_idempotent(p in purl()) {
            let once = PackageUrl::parse(p.to_canonical_string()).unwrap();
            let twice = PackageUrl::parse(once.to_canonical_string()).unwrap();
            prop_assert_eq!(once.to_canonical_string(), twice.to_canonical_string());
        }

        #[test]
        fn components_survive_reparse(p in purl()) {
            let reparsed = PackageUrl::parse(p.to_canonical_string()).unwrap();
            prop_assert_eq!(reparsed.package_type(), p.package_type());
            prop_assert_eq!(reparsed.namespace(), p.namespace());
            prop_assert_eq!(reparsed.name(), p.name());
            prop_assert_eq!(reparsed.version(), p.version());
            prop_assert_eq!(reparsed.qualifiers(), p.qualifiers());
            prop_assert_eq!(reparsed.subpath(), p.subpath());
        }

        #[test]
        fn coordinates_prefix_canonical(p in purl()) {
            let coordinates = p.coordinates();
            prop_assert!(p.to_canonical_string().starts_with(&coordinates));
            prop_assert!(!coordinates.contains('?'));
            prop_assert!(!coordinates.contains('#'));
        }
    }
}

mod equivalence_tests {
    use super::strategies::*;
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn leading_slashes_do_not_matter(p in purl(), slashes in 1..4usize) {
            let canonical = p.to_canonical_string();
            let rest = canonical.strip_prefix("pkg:").unwrap();
            let input = format!("pkg:{}{rest}", "/".repeat(slashes));
            let reparsed = PackageUrl::parse(&input).unwrap();
            prop_assert_eq!(reparsed.to_canonical_string(), canonical);
        }

        #[test]
        fn scheme_case_does_not_matter(p in purl(), scheme in "[pP][kK][gG]") {
            let canonical = p.to_canonical_string();
            let rest = canonical.strip_prefix("pkg:").unwrap();
            let reparsed = PackageUrl::parse(&format!("{scheme}:{rest}")).unwrap();
            prop_assert_eq!(reparsed, p);
        }

        #[test]
        fn qualifier_order_does_not_matter(
            pairs in prop::collection::btree_map(qualifier_key(), "[a-z0-9]{1,6}", 1..=5)
                .prop_map(|m| m.into_iter().collect::<Vec<_>>())
                .prop_shuffle()
        ) {
            let shuffled: Vec<String> = pairs.iter().map(|(k, v)| format!("{k}={v}")).collect();
            let mut by_key = pairs.clone();
            by_key.sort();
            let sorted: Vec<String> = by_key.iter().map(|(k, v)| format!("{k}={v}")).collect();

            let a = PackageUrl::parse(&format!("pkg:generic/name?{}", shuffled.join("&"))).unwrap();
            let b = PackageUrl::parse(&format!("pkg:generic/name?{}", sorted.join("&"))).unwrap();
            prop_assert!(a.is_canonical_equal(&b));
            prop_assert_eq!(a.to_canonical_string(), format!("pkg:generic/name?{}", sorted.join("&")));
        }

        #[test]
        fn qualifier_key_case_does_not_matter(key in qualifier_key(), value in "[a-z0-9]{1,6}") {
            let upper = format!("pkg:generic/name?{}={value}", key.to_ascii_uppercase());
            let lower = format!("pkg:generic/name?{key}={value}");
            prop_assert_eq!(PackageUrl::parse(&upper).unwrap(), PackageUrl::parse(&lower).unwrap());
        }

        #[test]
        fn construction_paths_agree(p in purl()) {
            let rebuilt = PackageUrl::new(
                p.package_type().as_str(),
                p.namespace().map(|ns| ns.as_str()),
                p.name(),
                p.version(),
                p.qualifiers(),
                p.subpath().map(|s| s.as_str()),
            )
            .unwrap();
            prop_assert_eq!(rebuilt, p);
        }

        #[test]
        fn duplicate_keys_are_rejected(key in qualifier_key(), a in "[a-z]{1,4}", b in "[a-z]{1,4}") {
            let input = format!("pkg:generic/name?{key}={a}&{}={b}", key.to_ascii_uppercase());
            let err = PackageUrl::parse(&input).unwrap_err();
            let is_duplicate = matches!(err.kind, ParseErrorKind::DuplicateQualifier { .. });
            prop_assert!(is_duplicate);
        }
    }
}

mod robustness_tests {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(2000))]

        #[test]
        fn parse_never_panics(input in any::<String>()) {
            let _ = PackageUrl::parse(&input);
        }

        #[test]
        fn parse_never_panics_on_pkg_prefix(rest in "[a-zA-Z0-9/@?#&=%:._ -]{0,40}") {
            if let Ok(p) = PackageUrl::parse(&format!("pkg:{rest}")) {
                let reparsed = PackageUrl::parse(p.to_canonical_string());
                prop_assert!(reparsed.is_ok());
            }
        }

        #[test]
        fn empty_values_are_dropped(key in "[a-z]{1,6}") {
            let p = PackageUrl::parse(&format!("pkg:generic/name?{key}=")).unwrap();
            prop_assert!(p.qualifiers().is_empty());
            prop_assert_eq!(p.qualifiers(), &Qualifiers::new());
        }
    }
}
