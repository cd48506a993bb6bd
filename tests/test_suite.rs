//! Data-driven conformance tests.
//!
//! Each entry in `tests/data/test-suite-data.json` is checked twice: once by
//! parsing the raw string and once by building from the listed components.

use std::collections::BTreeMap;

use serde::Deserialize;

use package_url::{PackageUrl, PackageUrlBuilder};

const SUITE: &str = include_str!("data/test-suite-data.json");

#[derive(Debug, Deserialize)]
struct TestCase {
    description: String,
    purl: String,
    canonical_purl: Option<String>,
    #[serde(rename = "type")]
    package_type: Option<String>,
    namespace: Option<String>,
    name: Option<String>,
    version: Option<String>,
    qualifiers: Option<BTreeMap<String, String>>,
    subpath: Option<String>,
    is_invalid: bool,
}

impl TestCase {
    fn qualifiers(&self) -> BTreeMap<String, String> {
        self.qualifiers.clone().unwrap_or_default()
    }

    fn build(&self) -> Option<Result<PackageUrl, package_url::ValidationError>> {
        let package_type = self.package_type.as_deref()?;
        let name = self.name.as_deref()?;
        Some(PackageUrl::new(
            package_type,
            self.namespace.as_deref(),
            name,
            self.version.as_deref(),
            self.qualifiers(),
            self.subpath.as_deref(),
        ))
    }
}

fn load() -> Vec<TestCase> {
    serde_json::from_str(SUITE).expect("test suite data should be valid JSON")
}

fn valid_cases() -> impl Iterator<Item = TestCase> {
    load().into_iter().filter(|case| !case.is_invalid)
}

fn invalid_cases() -> impl Iterator<Item = TestCase> {
    load().into_iter().filter(|case| case.is_invalid)
}

#[test]
fn suite_has_both_kinds() {
    assert!(valid_cases().count() > 0);
    assert!(invalid_cases().count() > 0);
}

#[test]
fn valid_entries_parse_into_expected_components() {
    for case in valid_cases() {
        let purl = PackageUrl::parse(&case.purl)
            .unwrap_or_else(|e| panic!("{}: {e}", case.description));

        assert_eq!(
            Some(purl.package_type().as_str()),
            case.package_type.as_deref(),
            "{}",
            case.description
        );
        assert_eq!(
            purl.namespace().map(|ns| ns.as_str()),
            case.namespace.as_deref(),
            "{}",
            case.description
        );
        assert_eq!(Some(purl.name()), case.name.as_deref(), "{}", case.description);
        assert_eq!(purl.version(), case.version.as_deref(), "{}", case.description);

        let qualifiers: BTreeMap<String, String> = purl
            .qualifiers()
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        assert_eq!(qualifiers, case.qualifiers(), "{}", case.description);

        assert_eq!(
            purl.subpath().map(|s| s.as_str()),
            case.subpath.as_deref(),
            "{}",
            case.description
        );
        assert_eq!(
            Some(purl.to_canonical_string()),
            case.canonical_purl.as_deref(),
            "{}",
            case.description
        );
    }
}

#[test]
fn canonical_forms_are_stable() {
    for case in valid_cases() {
        let canonical = case.canonical_purl.as_deref().expect("valid entries carry a canonical form");
        let purl = PackageUrl::parse(canonical)
            .unwrap_or_else(|e| panic!("{}: {e}", case.description));
        assert_eq!(purl.to_canonical_string(), canonical, "{}", case.description);
        assert_eq!(purl, PackageUrl::parse(&case.purl).unwrap(), "{}", case.description);
    }
}

#[test]
fn valid_entries_build_from_components() {
    for case in valid_cases() {
        let built = case
            .build()
            .expect("valid entries list type and name")
            .unwrap_or_else(|e| panic!("{}: {e}", case.description));
        assert_eq!(
            Some(built.to_canonical_string()),
            case.canonical_purl.as_deref(),
            "{}",
            case.description
        );
    }
}

#[test]
fn builder_agrees_with_parser() {
    for case in valid_cases() {
        let mut builder = PackageUrlBuilder::new()
            .try_package_type(case.package_type.as_deref().unwrap_or_default())
            .unwrap_or_else(|e| panic!("{}: {e}", case.description))
            .name(case.name.clone().unwrap_or_default())
            .maybe_version(case.version.as_deref());
        if let Some(ns) = &case.namespace {
            builder = builder.try_namespace(ns).unwrap();
        }
        if let Some(subpath) = &case.subpath {
            builder = builder.try_subpath(subpath).unwrap();
        }
        for (key, value) in case.qualifiers() {
            builder = builder.qualifier(key, value);
        }

        let built = builder
            .build()
            .unwrap_or_else(|e| panic!("{}: {e}", case.description));
        let parsed = PackageUrl::parse(&case.purl).unwrap();
        assert_eq!(built, parsed, "{}", case.description);
    }
}

#[test]
fn invalid_entries_fail_to_parse() {
    for case in invalid_cases() {
        let result = PackageUrl::parse(&case.purl);
        assert!(
            result.is_err(),
            "{}: '{}' parsed as {:?}",
            case.description,
            case.purl,
            result.ok()
        );
    }
}

#[test]
fn invalid_entries_fail_to_build() {
    for case in invalid_cases() {
        if let Some(result) = case.build() {
            assert!(
                result.is_err(),
                "{}: components built {:?}",
                case.description,
                result.ok()
            );
        }
    }
}

#[test]
fn errors_name_the_input() {
    for case in invalid_cases() {
        if let Err(e) = PackageUrl::parse(&case.purl) {
            assert_eq!(e.input, case.purl);
            assert!(e.to_string().contains(&case.purl), "{}", case.description);
        }
    }
}
