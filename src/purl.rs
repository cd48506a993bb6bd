//! Main package URL type.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::OnceLock;

use tracing::{debug, trace};

use crate::constants::SCHEME;
use crate::decoder;
use crate::encoding;
use crate::error::{ParseError, ParseErrorKind, ValidationError};
use crate::namespace::Namespace;
use crate::package_type::PackageType;
use crate::policy;
use crate::qualifiers::Qualifiers;
use crate::subpath::Subpath;

/// The components of a package URL while they are being normalized.
#[derive(Debug, Clone)]
pub(crate) struct PurlParts {
    pub namespace: Option<Namespace>,
    pub name: String,
    pub version: Option<String>,
    pub qualifiers: Qualifiers,
    pub subpath: Option<Subpath>,
}

/// A parsed, validated and normalized package URL.
///
/// Both construction paths, [`PackageUrl::parse`] for raw strings and
/// [`PackageUrl::new`] (or [`PackageUrlBuilder`](crate::PackageUrlBuilder))
/// for discrete fields, end in the same normalized representation.
///
/// # Structure
///
/// ```text
/// pkg:<type>/<namespace>/<name>@<version>?<qualifiers>#<subpath>
/// ```
///
/// # Examples
///
/// ```
/// use package_url::PackageUrl;
///
/// let purl = PackageUrl::parse("pkg:maven/org.apache.xmlgraphics/batik-anim@1.9.1?packaging=sources").unwrap();
/// assert_eq!(purl.package_type().as_str(), "maven");
/// assert_eq!(purl.namespace().map(|ns| ns.as_str()), Some("org.apache.xmlgraphics"));
/// assert_eq!(purl.name(), "batik-anim");
/// assert_eq!(purl.version(), Some("1.9.1"));
/// assert_eq!(purl.qualifiers().get("packaging"), Some("sources"));
///
/// // Qualifier order never changes the canonical form
/// let a = PackageUrl::parse("pkg:deb/debian/curl@7.50.3-1?distro=jessie&arch=i386").unwrap();
/// assert_eq!(a.to_canonical_string(), "pkg:deb/debian/curl@7.50.3-1?arch=i386&distro=jessie");
/// ```
#[derive(Debug, Clone)]
pub struct PackageUrl {
    package_type: PackageType,
    namespace: Option<Namespace>,
    name: String,
    version: Option<String>,
    qualifiers: Qualifiers,
    subpath: Option<Subpath>,
    /// Canonical string, computed on first use
    canonical: OnceLock<String>,
}

impl PackageUrl {
    /// Parses a package URL from a string.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if:
    /// - The input is empty or the scheme is not `pkg:`
    /// - The input carries an authority (userinfo or port)
    /// - The type or name is missing
    /// - A percent escape is malformed, or hides a `/` in a namespace or subpath segment
    /// - A qualifier key appears twice
    /// - Any decoded component fails validation
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        match Self::parse_inner(input) {
            Ok(purl) => {
                trace!(canonical = purl.to_canonical_string(), "parsed package URL");
                Ok(purl)
            }
            Err(kind) => {
                let err = ParseError {
                    input: input.to_string(),
                    kind,
                };
                debug!(error = %err, "rejected package URL");
                Err(err)
            }
        }
    }

    /// Creates a package URL from decoded component values.
    ///
    /// Values are used as given: they are not percent-decoded a second time.
    /// `namespace` and `subpath` are split on `/`. Qualifier keys are
    /// lower-cased and pairs with an empty value are dropped.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::Missing` if the type or name is empty, and
    /// another `ValidationError` if any component is illegal.
    ///
    /// # Examples
    ///
    /// ```
    /// use package_url::PackageUrl;
    ///
    /// let purl = PackageUrl::new(
    ///     "npm",
    ///     Some("@angular"),
    ///     "animation",
    ///     Some("12.3.1"),
    ///     [("Repository_URL", "registry.npmjs.org")],
    ///     None,
    /// )
    /// .unwrap();
    /// assert_eq!(
    ///     purl.to_canonical_string(),
    ///     "pkg:npm/%40angular/animation@12.3.1?repository_url=registry.npmjs.org"
    /// );
    /// ```
    pub fn new<I, K, V>(
        package_type: &str,
        namespace: Option<&str>,
        name: &str,
        version: Option<&str>,
        qualifiers: I,
        subpath: Option<&str>,
    ) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let result = Self::new_inner(package_type, namespace, name, version, qualifiers, subpath);
        if let Err(e) = &result {
            debug!(error = %e, package_type, name, "rejected package URL components");
        }
        result
    }

    /// Returns the scheme, always `pkg`.
    #[must_use]
    pub const fn scheme(&self) -> &'static str {
        SCHEME
    }

    /// Returns the package type.
    #[must_use]
    pub const fn package_type(&self) -> &PackageType {
        &self.package_type
    }

    /// Returns the namespace, if present.
    #[must_use]
    pub const fn namespace(&self) -> Option<&Namespace> {
        self.namespace.as_ref()
    }

    /// Returns the name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the version, if present.
    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Returns the qualifiers, sorted by key.
    #[must_use]
    pub const fn qualifiers(&self) -> &Qualifiers {
        &self.qualifiers
    }

    /// Returns the subpath, if present.
    #[must_use]
    pub const fn subpath(&self) -> Option<&Subpath> {
        self.subpath.as_ref()
    }

    /// Returns the canonical string form.
    ///
    /// The string is computed once and cached; re-parsing it yields an equal
    /// package URL.
    #[must_use]
    pub fn to_canonical_string(&self) -> &str {
        self.canonical.get_or_init(|| self.render(true))
    }

    /// Returns the canonical form without qualifiers and subpath.
    ///
    /// # Examples
    ///
    /// ```
    /// use package_url::PackageUrl;
    ///
    /// let purl = PackageUrl::parse("pkg:generic/acme/example-component@1.0.0?key1=value1#src").unwrap();
    /// assert_eq!(purl.coordinates(), "pkg:generic/acme/example-component@1.0.0");
    /// ```
    #[must_use]
    pub fn coordinates(&self) -> String {
        self.render(false)
    }

    /// Returns true if both identify the same package version, ignoring
    /// qualifiers and subpath.
    #[must_use]
    pub fn is_coordinates_equal(&self, other: &Self) -> bool {
        self.package_type == other.package_type
            && self.namespace == other.namespace
            && self.name == other.name
            && self.version == other.version
    }

    /// Returns true if both have the same canonical form.
    #[must_use]
    pub fn is_canonical_equal(&self, other: &Self) -> bool {
        self.to_canonical_string() == other.to_canonical_string()
    }

    /// Returns a copy with the given version, or without one for `None`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if a type rule rejects the result.
    ///
    /// # Examples
    ///
    /// ```
    /// use package_url::PackageUrl;
    ///
    /// let purl = PackageUrl::parse("pkg:cargo/rand@0.7.2").unwrap();
    /// let updated = purl.with_version(Some("0.8.5")).unwrap();
    /// assert_eq!(updated.to_canonical_string(), "pkg:cargo/rand@0.8.5");
    /// ```
    pub fn with_version(&self, version: Option<&str>) -> Result<Self, ValidationError> {
        self.rebuild(|parts| parts.version = version.map(str::to_string))
    }

    /// Returns a copy with the given qualifiers.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if a type rule rejects the result.
    pub fn with_qualifiers(&self, qualifiers: Qualifiers) -> Result<Self, ValidationError> {
        self.rebuild(|parts| parts.qualifiers = qualifiers)
    }

    /// Returns a copy without qualifiers.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if a type rule rejects the result.
    pub fn without_qualifiers(&self) -> Result<Self, ValidationError> {
        self.with_qualifiers(Qualifiers::new())
    }

    /// Returns a copy with the given subpath.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if a type rule rejects the result.
    pub fn with_subpath(&self, subpath: Subpath) -> Result<Self, ValidationError> {
        self.rebuild(|parts| parts.subpath = Some(subpath))
    }

    /// Returns a copy without a subpath.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if a type rule rejects the result.
    pub fn without_subpath(&self) -> Result<Self, ValidationError> {
        self.rebuild(|parts| parts.subpath = None)
    }

    /// Normalizes components and applies the type policy.
    pub(crate) fn from_parts(
        package_type: PackageType,
        mut parts: PurlParts,
    ) -> Result<Self, ValidationError> {
        parts.name = encoding::trim(&parts.name).to_string();
        if parts.name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        parts.version = parts.version.filter(|v| !v.is_empty());

        policy::apply(&package_type, &mut parts)?;

        Ok(Self {
            package_type,
            namespace: parts.namespace,
            name: parts.name,
            version: parts.version,
            qualifiers: parts.qualifiers,
            subpath: parts.subpath,
            canonical: OnceLock::new(),
        })
    }

    fn new_inner<I, K, V>(
        package_type: &str,
        namespace: Option<&str>,
        name: &str,
        version: Option<&str>,
        qualifiers: I,
        subpath: Option<&str>,
    ) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        if package_type.is_empty() {
            return Err(ValidationError::Missing { component: "type" });
        }
        if name.is_empty() {
            return Err(ValidationError::Missing { component: "name" });
        }

        let package_type = PackageType::parse(package_type).map_err(ValidationError::InvalidType)?;
        let namespace = match namespace {
            Some(ns) => {
                Namespace::from_segments(ns.split('/')).map_err(ValidationError::InvalidNamespace)?
            }
            None => None,
        };
        let qualifiers =
            Qualifiers::from_pairs(qualifiers).map_err(ValidationError::InvalidQualifier)?;
        let subpath = match subpath {
            Some(sub) => {
                Subpath::from_segments(sub.split('/')).map_err(ValidationError::InvalidSubpath)?
            }
            None => None,
        };

        Self::from_parts(
            package_type,
            PurlParts {
                namespace,
                name: name.to_string(),
                version: version.map(str::to_string),
                qualifiers,
                subpath,
            },
        )
    }

    fn parse_inner(input: &str) -> Result<Self, ParseErrorKind> {
        let raw = decoder::decode(input)?;

        let package_type =
            PackageType::parse(&raw.package_type).map_err(ValidationError::InvalidType)?;
        let namespace =
            Namespace::from_segments(raw.namespace).map_err(ValidationError::InvalidNamespace)?;
        let qualifiers =
            Qualifiers::from_pairs(raw.qualifiers).map_err(ValidationError::InvalidQualifier)?;
        let subpath =
            Subpath::from_segments(raw.subpath).map_err(ValidationError::InvalidSubpath)?;

        let purl = Self::from_parts(
            package_type,
            PurlParts {
                namespace,
                name: raw.name,
                version: raw.version,
                qualifiers,
                subpath,
            },
        )?;
        Ok(purl)
    }

    fn rebuild(&self, edit: impl FnOnce(&mut PurlParts)) -> Result<Self, ValidationError> {
        let mut parts = PurlParts {
            namespace: self.namespace.clone(),
            name: self.name.clone(),
            version: self.version.clone(),
            qualifiers: self.qualifiers.clone(),
            subpath: self.subpath.clone(),
        };
        edit(&mut parts);
        Self::from_parts(self.package_type.clone(), parts)
    }

    fn render(&self, with_extras: bool) -> String {
        let mut out = format!("{SCHEME}:{}", self.package_type);

        if let Some(namespace) = &self.namespace {
            out.push('/');
            out.push_str(&namespace.to_string());
        }

        out.push('/');
        out.extend(encoding::encode(&self.name));

        if let Some(version) = &self.version {
            out.push('@');
            out.extend(encoding::encode(version));
        }

        if with_extras {
            if !self.qualifiers.is_empty() {
                out.push('?');
                out.push_str(&self.qualifiers.to_string());
            }
            if let Some(subpath) = &self.subpath {
                out.push('#');
                out.push_str(&subpath.to_string());
            }
        }

        out
    }
}

impl PartialEq for PackageUrl {
    fn eq(&self, other: &Self) -> bool {
        self.is_coordinates_equal(other)
            && self.qualifiers == other.qualifiers
            && self.subpath == other.subpath
    }
}

impl Eq for PackageUrl {}

impl Hash for PackageUrl {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.package_type.hash(state);
        self.namespace.hash(state);
        self.name.hash(state);
        self.version.hash(state);
        self.qualifiers.hash(state);
        self.subpath.hash(state);
    }
}

impl PartialOrd for PackageUrl {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PackageUrl {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_canonical_string().cmp(other.to_canonical_string())
    }
}

impl fmt::Display for PackageUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_canonical_string())
    }
}

impl FromStr for PackageUrl {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for PackageUrl {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl AsRef<str> for PackageUrl {
    fn as_ref(&self) -> &str {
        self.to_canonical_string()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for PackageUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.to_canonical_string())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for PackageUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
