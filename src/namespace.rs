//! Namespace type for package URLs.

use std::fmt;
use std::str::FromStr;

use crate::encoding;
use crate::error::NamespaceError;

/// A normalized package namespace: an ordered list of decoded segments.
///
/// Segments are trimmed and empty segments are dropped, so `"a//b/"` and
/// `"a/b"` describe the same namespace. [`Display`](fmt::Display) writes the
/// percent-encoded canonical form; [`Namespace::as_str`] returns the decoded
/// segments joined by `/`.
///
/// # Examples
///
/// ```
/// use package_url::Namespace;
///
/// let ns = Namespace::parse("@angular").unwrap();
/// assert_eq!(ns.as_str(), "@angular");
/// assert_eq!(ns.to_string(), "%40angular");
///
/// let ns = Namespace::parse("/google.golang.org//genproto/").unwrap();
/// assert_eq!(ns.segments(), ["google.golang.org", "genproto"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Namespace {
    segments: Vec<String>,
    /// Decoded segments joined by '/'
    joined: String,
}

impl Namespace {
    /// Parses a decoded namespace string, splitting it on `/`.
    ///
    /// # Errors
    ///
    /// Returns `NamespaceError::Empty` if no segment remains after trimming.
    pub fn parse(input: &str) -> Result<Self, NamespaceError> {
        Self::from_segments(input.split('/'))?.ok_or(NamespaceError::Empty)
    }

    /// Builds a namespace from individual decoded segments.
    ///
    /// Returns `Ok(None)` when every segment is blank.
    ///
    /// # Errors
    ///
    /// Returns `NamespaceError::SegmentContainsSlash` if a segment contains `/`.
    pub fn from_segments<I, S>(segments: I) -> Result<Option<Self>, NamespaceError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut kept = Vec::new();
        for (index, segment) in segments.into_iter().enumerate() {
            let segment = encoding::trim(segment.as_ref());
            if segment.contains('/') {
                return Err(NamespaceError::SegmentContainsSlash {
                    segment: segment.to_string(),
                    index,
                });
            }
            if !segment.is_empty() {
                kept.push(segment.to_string());
            }
        }

        if kept.is_empty() {
            return Ok(None);
        }
        Ok(Some(Self::from_vec(kept)))
    }

    /// Returns the decoded segments.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Returns the decoded segments joined by `/`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.joined
    }

    pub(crate) fn make_ascii_lowercase(&mut self) {
        for segment in &mut self.segments {
            segment.make_ascii_lowercase();
        }
        self.joined.make_ascii_lowercase();
    }

    fn from_vec(segments: Vec<String>) -> Self {
        let joined = segments.join("/");
        Self { segments, joined }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            write!(f, "{}", encoding::encode(segment))?;
        }
        Ok(())
    }
}

impl FromStr for Namespace {
    type Err = NamespaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Namespace {
    fn as_ref(&self) -> &str {
        &self.joined
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Namespace {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.joined)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Namespace {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
