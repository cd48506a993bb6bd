//! Splits a raw package URL string into decoded components.
//!
//! The decoder only knows the string grammar. Component legality and
//! type-specific normalization happen afterwards in [`PackageUrl`](crate::PackageUrl).

use std::collections::BTreeSet;

use crate::constants::SCHEME;
use crate::encoding;
use crate::error::ParseErrorKind;
use crate::standard_types::GENERIC;

/// Percent-decoded components of a raw package URL, not yet validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RawComponents {
    pub package_type: String,
    pub namespace: Vec<String>,
    pub name: String,
    pub version: Option<String>,
    pub qualifiers: Vec<(String, String)>,
    pub subpath: Vec<String>,
}

/// Decodes a raw package URL.
pub(crate) fn decode(input: &str) -> Result<RawComponents, ParseErrorKind> {
    if input.is_empty() {
        return Err(ParseErrorKind::Empty);
    }

    let rest = strip_scheme(input)?;
    let has_authority = rest.starts_with("//");
    let rest = rest.trim_start_matches('/');

    // Subpath and qualifiers may contain '/', so they go first.
    let (rest, subpath) = match rest.split_once('#') {
        Some((rest, subpath)) => (rest, Some(subpath)),
        None => (rest, None),
    };
    let (path, qualifiers) = match rest.split_once('?') {
        Some((path, qualifiers)) => (path, Some(qualifiers)),
        None => (rest, None),
    };

    if has_authority {
        reject_authority(path)?;
    }

    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    let Some((package_type, rest)) = segments.split_first() else {
        return Err(ParseErrorKind::MissingComponent { component: "type" });
    };
    let Some((last, namespace)) = rest.split_last() else {
        return Err(ParseErrorKind::MissingComponent { component: "name" });
    };

    // Generic packages have no host, so a literal `user@host` or `host:port`
    // up front is a URL pasted into the path. Escaped forms are plain data.
    let is_generic = package_type.eq_ignore_ascii_case(GENERIC);
    if let Some(first) = namespace
        .first()
        .filter(|s| is_generic && (has_userinfo(s) || has_port(s)))
    {
        return Err(ParseErrorKind::AuthorityPresent {
            authority: (*first).to_string(),
        });
    }

    let (name, version) = match last.rsplit_once('@') {
        Some((name, version)) => (name, Some(version)),
        None => (*last, None),
    };
    if name.is_empty() {
        return Err(ParseErrorKind::MissingComponent { component: "name" });
    }

    let version = match version {
        Some(v) => Some(decode_component(v)?).filter(|v| !v.is_empty()),
        None => None,
    };
    let namespace = namespace
        .iter()
        .map(|s| decode_segment(s))
        .collect::<Result<Vec<_>, _>>()?;
    let qualifiers = match qualifiers {
        Some(q) => decode_qualifiers(q)?,
        None => Vec::new(),
    };
    let subpath = match subpath {
        Some(s) => s.split('/').map(decode_segment).collect::<Result<Vec<_>, _>>()?,
        None => Vec::new(),
    };

    Ok(RawComponents {
        package_type: (*package_type).to_string(),
        namespace,
        name: decode_component(name)?,
        version,
        qualifiers,
        subpath,
    })
}

/// Returns true if `s` looks like `user@host`.
fn has_userinfo(s: &str) -> bool {
    s.split_once('@')
        .is_some_and(|(user, host)| !user.is_empty() && !host.is_empty())
}

/// Returns true if `s` looks like `host:port`.
fn has_port(s: &str) -> bool {
    s.rsplit_once(':').is_some_and(|(host, port)| {
        !host.is_empty() && !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit())
    })
}

fn strip_scheme(input: &str) -> Result<&str, ParseErrorKind> {
    match input.split_once(':') {
        Some((scheme, rest)) if scheme.eq_ignore_ascii_case(SCHEME) => Ok(rest),
        Some((scheme, _)) => Err(ParseErrorKind::InvalidScheme {
            found: Some(scheme.to_string()),
        }),
        None => Err(ParseErrorKind::InvalidScheme { found: None }),
    }
}

fn reject_authority(path: &str) -> Result<(), ParseErrorKind> {
    let authority = path.split('/').next().unwrap_or_default();
    if authority.contains('@') || has_port(authority) {
        return Err(ParseErrorKind::AuthorityPresent {
            authority: authority.to_string(),
        });
    }
    Ok(())
}

fn decode_qualifiers(raw: &str) -> Result<Vec<(String, String)>, ParseErrorKind> {
    let mut seen = BTreeSet::new();
    let mut pairs = Vec::new();

    for pair in raw.split('&').filter(|p| !p.is_empty()) {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        let key = decode_component(key)?;
        let folded = key.to_ascii_lowercase();
        if !seen.insert(folded.clone()) {
            return Err(ParseErrorKind::DuplicateQualifier { key: folded });
        }
        pairs.push((key, decode_component(value)?));
    }

    Ok(pairs)
}

fn decode_component(raw: &str) -> Result<String, ParseErrorKind> {
    encoding::decode(raw).ok_or_else(|| ParseErrorKind::InvalidPercentEncoding {
        value: raw.to_string(),
    })
}

/// Decodes a namespace or subpath segment, which must not hide a '/'.
fn decode_segment(raw: &str) -> Result<String, ParseErrorKind> {
    let decoded = decode_component(raw)?;
    if decoded.contains('/') {
        return Err(ParseErrorKind::EncodedSlash {
            segment: raw.to_string(),
        });
    }
    Ok(decoded)
}
