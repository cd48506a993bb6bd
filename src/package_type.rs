//! Package type (ecosystem identifier) for package URLs.

use std::cmp::Ordering;
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use crate::encoding;
use crate::error::PackageTypeError;
use crate::policy::{self, TypePolicy};
use crate::standard_types;

/// A validated, lower-cased package type such as `npm` or `maven`.
///
/// The first character is an ASCII letter, `.`, `+` or `-`; the rest may
/// also contain digits. Case folding is ASCII-only, so the stored value is
/// independent of any locale.
///
/// # Examples
///
/// ```
/// use package_url::PackageType;
///
/// let ty = PackageType::parse("Maven").unwrap();
/// assert_eq!(ty.as_str(), "maven");
///
/// assert!(PackageType::parse("0invalid").is_err());
/// assert!(PackageType::parse("invalid^type").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageType(String);

impl PackageType {
    /// Parses a package type, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns `PackageTypeError` if:
    /// - The type is blank
    /// - The type starts with a digit
    /// - The type contains a character outside `[A-Za-z0-9.+-]`
    pub fn parse(input: &str) -> Result<Self, PackageTypeError> {
        let input = encoding::trim(input);
        let Some(first) = input.chars().next() else {
            return Err(PackageTypeError::Empty);
        };

        if first.is_ascii_digit() {
            return Err(PackageTypeError::StartsWithDigit { found: first });
        }

        for (i, c) in input.chars().enumerate() {
            if !Self::is_valid_char(c) {
                return Err(PackageTypeError::InvalidChar { char: c, position: i });
            }
        }

        Ok(Self(input.to_ascii_lowercase()))
    }

    /// Returns the type as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if this is one of the [`standard_types`].
    #[must_use]
    pub fn is_standard(&self) -> bool {
        standard_types::ALL.contains(&self.0.as_str())
    }

    /// Returns the normalization policy registered for this type.
    #[must_use]
    pub fn policy(&self) -> &'static TypePolicy {
        policy::lookup(&self.0)
    }

    /// Returns true if the character is valid anywhere in a type.
    #[must_use]
    pub const fn is_valid_char(c: char) -> bool {
        c.is_ascii_alphanumeric() || matches!(c, '.' | '+' | '-')
    }
}

impl fmt::Display for PackageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PackageType {
    type Err = PackageTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for PackageType {
    type Error = PackageTypeError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl AsRef<str> for PackageType {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Deref for PackageType {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl PartialOrd for PackageType {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PackageType {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for PackageType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for PackageType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_lowercases() {
        let ty = PackageType::parse("GOLANG").unwrap();
        assert_eq!(ty.as_str(), "golang");
    }

    #[test]
    fn parse_trims_whitespace() {
        let ty = PackageType::parse("  npm ").unwrap();
        assert_eq!(ty.as_str(), "npm");

        assert!(matches!(
            PackageType::parse("\u{2003}npm"),
            Err(PackageTypeError::InvalidChar { char: '\u{2003}', position: 0 })
        ));
    }

    #[test]
    fn parse_allows_punctuation() {
        assert_eq!(PackageType::parse("a.b+c-d").unwrap().as_str(), "a.b+c-d");
        assert_eq!(PackageType::parse("-x").unwrap().as_str(), "-x");
        assert_eq!(PackageType::parse("x2").unwrap().as_str(), "x2");
    }

    #[test]
    fn parse_empty_fails() {
        assert!(matches!(PackageType::parse(""), Err(PackageTypeError::Empty)));
        assert!(matches!(PackageType::parse("   "), Err(PackageTypeError::Empty)));
    }

    #[test]
    fn parse_leading_digit_fails() {
        let result = PackageType::parse("0invalid");
        assert!(matches!(
            result,
            Err(PackageTypeError::StartsWithDigit { found: '0' })
        ));
    }

    #[test]
    fn parse_invalid_char_fails() {
        let result = PackageType::parse("invalid^type");
        assert!(matches!(
            result,
            Err(PackageTypeError::InvalidChar { char: '^', position: 7 })
        ));
    }

    #[test]
    fn parse_underscore_fails() {
        assert!(matches!(
            PackageType::parse("my_type"),
            Err(PackageTypeError::InvalidChar { char: '_', .. })
        ));
    }

    #[test]
    fn lowercasing_is_locale_independent() {
        // 'I' folds to ASCII 'i', never to a dotless i.
        let ty = PackageType::parse("PIP").unwrap();
        assert_eq!(ty.as_str(), "pip");
    }

    #[test]
    fn standard_types_are_recognized() {
        assert!(PackageType::parse("npm").unwrap().is_standard());
        assert!(PackageType::parse("Maven").unwrap().is_standard());
        assert!(!PackageType::parse("validtype").unwrap().is_standard());
    }
}
