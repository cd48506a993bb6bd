//! Kani Arbitrary implementations and proof harnesses.
//!
//! Kani is not a Cargo dependency. Install and run with:
//!
//! ```bash
//! cargo install --locked kani-verifier
//! cargo kani setup
//! cargo kani --features kani
//! ```
//!
//! This module is only compiled when using Kani (`#[cfg(kani)]`).

use crate::encoding;
use crate::{Namespace, PackageType, PackageUrl, Qualifiers, Subpath};

/// Characters valid anywhere in a type
const TYPE_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789.+-";

/// Characters for generated name, namespace and subpath segments
const SEGMENT_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABC019.-_@:% ";

fn pick(chars: &[u8]) -> char {
    let idx: usize = kani::any();
    chars[idx % chars.len()] as char
}

/// Discards the current path of the search
fn prune<T>() -> T {
    kani::assume(false);
    unreachable!()
}

fn arbitrary_string(chars: &[u8], max: usize) -> String {
    let len: usize = kani::any();
    let len = 1 + (len % max);
    (0..len).map(|_| pick(chars)).collect()
}

impl kani::Arbitrary for PackageType {
    fn any() -> Self {
        let len: usize = kani::any();
        let len = len % 4;
        let first = pick(b"abcdefghijklmnopqrstuvwxyz");
        let s: String = std::iter::once(first)
            .chain((0..len).map(|_| pick(TYPE_CHARS)))
            .collect();
        match PackageType::parse(&s) {
            Ok(t) => t,
            Err(_) => prune(),
        }
    }
}

impl kani::Arbitrary for Namespace {
    fn any() -> Self {
        let first = arbitrary_string(SEGMENT_CHARS, 3);
        let second = arbitrary_string(SEGMENT_CHARS, 3);
        match Namespace::from_segments([first, second]) {
            Ok(Some(ns)) => ns,
            _ => prune(),
        }
    }
}

impl kani::Arbitrary for Subpath {
    fn any() -> Self {
        let segment = arbitrary_string(SEGMENT_CHARS, 4);
        kani::assume(!Subpath::is_dropped(encoding::trim(&segment)));
        match Subpath::from_segments([segment]) {
            Ok(Some(sub)) => sub,
            _ => prune(),
        }
    }
}

impl kani::Arbitrary for Qualifiers {
    fn any() -> Self {
        let value = arbitrary_string(SEGMENT_CHARS, 3);
        let key = if kani::any() { "arch" } else { "repository_url" };
        match Qualifiers::from_pairs([(key, value)]) {
            Ok(q) => q,
            Err(_) => prune(),
        }
    }
}

impl kani::Arbitrary for PackageUrl {
    fn any() -> Self {
        let package_type: PackageType = kani::any();
        let name = arbitrary_string(SEGMENT_CHARS, 4);
        kani::assume(!encoding::trim(&name).is_empty());
        let namespace: Option<Namespace> = if kani::any() { Some(kani::any()) } else { None };
        let subpath: Option<Subpath> = if kani::any() { Some(kani::any()) } else { None };
        let qualifiers: Qualifiers = kani::any();

        let built = PackageUrl::new(
            package_type.as_str(),
            namespace.as_ref().map(Namespace::as_str),
            &name,
            None,
            qualifiers.iter(),
            subpath.as_ref().map(Subpath::as_str),
        );
        match built {
            Ok(purl) => purl,
            Err(_) => prune(),
        }
    }
}

/// Proof: Parsing the canonical form yields an equal value
#[kani::proof]
#[kani::unwind(10)]
fn proof_canonical_roundtrip() {
    let purl: PackageUrl = kani::any();
    let canonical = purl.to_canonical_string();
    let reparsed = PackageUrl::parse(canonical).expect("canonical should parse");
    assert_eq!(reparsed, purl);
    assert_eq!(reparsed.to_canonical_string(), canonical);
}

/// Proof: Canonicalization is idempotent
#[kani::proof]
#[kani::unwind(10)]
fn proof_canonical_idempotent() {
    let purl: PackageUrl = kani::any();
    let once = PackageUrl::parse(purl.to_canonical_string()).expect("canonical should parse");
    let twice = PackageUrl::parse(once.to_canonical_string()).expect("canonical should parse");
    assert_eq!(once.to_canonical_string(), twice.to_canonical_string());
}

/// Proof: Coordinates never contain a qualifier or subpath separator
#[kani::proof]
#[kani::unwind(10)]
fn proof_coordinates_strip_extras() {
    let purl: PackageUrl = kani::any();
    let coordinates = purl.coordinates();
    assert!(!coordinates.contains('?'));
    assert!(!coordinates.contains('#'));
    assert!(purl.to_canonical_string().starts_with(&coordinates));
}

/// Proof: Parsed types are always lowercase
#[kani::proof]
#[kani::unwind(6)]
fn proof_type_is_lowercase() {
    let t: PackageType = kani::any();
    assert!(!t.as_str().chars().any(|c| c.is_ascii_uppercase()));
}
