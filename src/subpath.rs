//! Subpath type for addressing a path inside a package.

use std::fmt;
use std::str::FromStr;

use crate::encoding;
use crate::error::SubpathError;

/// A normalized subpath: decoded segments relative to the package root.
///
/// Segments are trimmed; empty, `.` and `..` segments are dropped.
///
/// # Examples
///
/// ```
/// use package_url::Subpath;
///
/// let sub = Subpath::parse("/googleapis/api/annotations/").unwrap();
/// assert_eq!(sub.as_str(), "googleapis/api/annotations");
///
/// let sub = Subpath::parse("a/./b/../c").unwrap();
/// assert_eq!(sub.segments(), ["a", "b", "c"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Subpath {
    segments: Vec<String>,
    /// Decoded segments joined by '/'
    joined: String,
}

impl Subpath {
    /// Parses a decoded subpath string, splitting it on `/`.
    ///
    /// # Errors
    ///
    /// Returns `SubpathError::Empty` if no usable segment remains.
    pub fn parse(input: &str) -> Result<Self, SubpathError> {
        Self::from_segments(input.split('/'))?.ok_or(SubpathError::Empty)
    }

    /// Builds a subpath from individual decoded segments.
    ///
    /// Returns `Ok(None)` when every segment is dropped.
    ///
    /// # Errors
    ///
    /// Returns `SubpathError::SegmentContainsSlash` if a segment contains `/`.
    pub fn from_segments<I, S>(segments: I) -> Result<Option<Self>, SubpathError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut kept = Vec::new();
        for (index, segment) in segments.into_iter().enumerate() {
            let segment = encoding::trim(segment.as_ref());
            if segment.contains('/') {
                return Err(SubpathError::SegmentContainsSlash {
                    segment: segment.to_string(),
                    index,
                });
            }
            if !Self::is_dropped(segment) {
                kept.push(segment.to_string());
            }
        }

        if kept.is_empty() {
            return Ok(None);
        }
        let joined = kept.join("/");
        Ok(Some(Self {
            segments: kept,
            joined,
        }))
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

    /// Returns true if a segment is discarded during normalization.
    #[must_use]
    pub fn is_dropped(segment: &str) -> bool {
        matches!(segment, "" | "." | "..")
    }
}

impl fmt::Display for Subpath {
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

impl FromStr for Subpath {
    type Err = SubpathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Subpath {
    fn as_ref(&self) -> &str {
        &self.joined
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Subpath {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.joined)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Subpath {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
