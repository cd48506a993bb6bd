//! Qualifiers for package URLs.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::encoding;
use crate::error::QualifierError;

/// Qualifiers of a package URL, as a read-only map sorted by key.
///
/// Keys are lower-cased on construction and must match
/// `[A-Za-z.+_-][A-Za-z0-9.+_-]*`. Entries with an empty value are dropped,
/// so `key=` and a bare `key` carry no qualifier at all.
///
/// # Examples
///
/// ```
/// use package_url::Qualifiers;
///
/// let q = Qualifiers::from_pairs([("Distro", "jessie"), ("arch", "i386"), ("empty", "")]).unwrap();
/// assert_eq!(q.len(), 2);
/// assert_eq!(q.get("distro"), Some("jessie"));
/// assert_eq!(q.to_string(), "arch=i386&distro=jessie");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Qualifiers {
    entries: BTreeMap<String, String>,
}

impl Qualifiers {
    /// Creates an empty qualifier map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds qualifiers from decoded key/value pairs.
    ///
    /// # Errors
    ///
    /// Returns `QualifierError` if a key is invalid or two keys are equal
    /// after lower-casing.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, QualifierError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut seen = BTreeSet::new();
        let mut entries = BTreeMap::new();

        for (key, value) in pairs {
            let key = key.as_ref().to_ascii_lowercase();
            Self::validate_key(&key)?;

            if !seen.insert(key.clone()) {
                return Err(QualifierError::Duplicate { key });
            }

            let value = value.as_ref();
            if !value.is_empty() {
                entries.insert(key, value.to_string());
            }
        }

        Ok(Self { entries })
    }

    /// Returns the value for a key. The lookup is case-insensitive.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .get(&key.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Returns true if the key is present. The lookup is case-insensitive.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Returns true if there are no qualifiers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of qualifiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns an iterator over the qualifiers in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns the underlying sorted map.
    #[must_use]
    pub fn as_map(&self) -> &BTreeMap<String, String> {
        &self.entries
    }

    /// Returns true if the key matches the qualifier key grammar.
    #[must_use]
    pub fn is_valid_key(key: &str) -> bool {
        Self::validate_key(key).is_ok()
    }

    fn validate_key(key: &str) -> Result<(), QualifierError> {
        let Some(first) = key.chars().next() else {
            return Err(QualifierError::InvalidKey {
                key: key.to_string(),
                reason: "key cannot be empty",
            });
        };

        if first.is_ascii_digit() {
            return Err(QualifierError::InvalidKey {
                key: key.to_string(),
                reason: "key cannot start with a number",
            });
        }

        if !key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '+' | '_' | '-'))
        {
            return Err(QualifierError::InvalidKey {
                key: key.to_string(),
                reason: "key must be letters, digits, '.', '+', '_' or '-'",
            });
        }

        Ok(())
    }
}

impl fmt::Display for Qualifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str("&")?;
            }
            write!(f, "{key}={}", encoding::encode(value))?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Qualifiers {
    type Item = (&'a String, &'a String);
    type IntoIter = std::collections::btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Qualifiers {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_map(&self.entries)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Qualifiers {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let map = BTreeMap::<String, String>::deserialize(deserializer)?;
        Self::from_pairs(map).map_err(serde::de::Error::custom)
    }
}
