//! Typestate builder for constructing [`PackageUrl`] instances.
//!
//! Phantom types enforce at compile time that the type and name are set
//! before `build()` is available.

use std::marker::PhantomData;

use crate::error::{NamespaceError, PackageTypeError, SubpathError, ValidationError};
use crate::namespace::Namespace;
use crate::package_type::PackageType;
use crate::purl::{PackageUrl, PurlParts};
use crate::qualifiers::Qualifiers;
use crate::subpath::Subpath;

/// Marker: No components set yet.
#[derive(Debug, Clone, Copy, Default)]
pub struct Empty;

/// Marker: Package type has been set.
#[derive(Debug, Clone, Copy, Default)]
pub struct HasType;

/// Marker: Type and name are set, ready to build.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ready;

/// A typestate builder for constructing [`PackageUrl`] instances.
///
/// The type is set first, then the name. Namespace, version, qualifiers
/// and subpath are optional and can be added at any point.
///
/// # Type State
///
/// - [`Empty`]: Initial state, no components set
/// - [`HasType`]: Package type has been set
/// - [`Ready`]: Type and name set, can call `build()`
///
/// # Examples
///
/// ```
/// use package_url::{PackageUrlBuilder, PackageType, Namespace};
///
/// let purl = PackageUrlBuilder::new()
///     .package_type(PackageType::parse("maven").unwrap())
///     .namespace(Namespace::parse("org.apache.commons").unwrap())
///     .name("io")
///     .version("1.3.4")
///     .build()
///     .unwrap();
///
/// assert_eq!(purl.to_canonical_string(), "pkg:maven/org.apache.commons/io@1.3.4");
/// ```
///
/// # Compile-Time Safety
///
/// ```compile_fail
/// use package_url::PackageUrlBuilder;
///
/// // Error: cannot set the name before the type
/// let builder = PackageUrlBuilder::new().name("io");
/// ```
///
/// ```compile_fail
/// use package_url::{PackageUrlBuilder, PackageType};
///
/// // Error: cannot call build() without a name
/// let purl = PackageUrlBuilder::new()
///     .package_type(PackageType::parse("npm").unwrap())
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct PackageUrlBuilder<State = Empty> {
    package_type: Option<PackageType>,
    namespace: Option<Namespace>,
    name: Option<String>,
    version: Option<String>,
    qualifiers: Vec<(String, String)>,
    subpath: Option<Subpath>,
    _state: PhantomData<State>,
}

impl PackageUrlBuilder<Empty> {
    /// Creates a new builder in the initial state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            package_type: None,
            namespace: None,
            name: None,
            version: None,
            qualifiers: Vec::new(),
            subpath: None,
            _state: PhantomData,
        }
    }

    /// Sets the package type and advances to the [`HasType`] state.
    #[must_use]
    pub fn package_type(self, package_type: PackageType) -> PackageUrlBuilder<HasType> {
        PackageUrlBuilder {
            package_type: Some(package_type),
            namespace: self.namespace,
            name: self.name,
            version: self.version,
            qualifiers: self.qualifiers,
            subpath: self.subpath,
            _state: PhantomData,
        }
    }

    /// Parses and sets the package type from a string.
    ///
    /// # Errors
    ///
    /// Returns [`PackageTypeError`] if the string is not a valid type.
    ///
    /// # Examples
    ///
    /// ```
    /// use package_url::PackageUrlBuilder;
    ///
    /// let builder = PackageUrlBuilder::new().try_package_type("npm")?;
    /// # Ok::<(), package_url::PackageTypeError>(())
    /// ```
    pub fn try_package_type(self, s: &str) -> Result<PackageUrlBuilder<HasType>, PackageTypeError> {
        let package_type = PackageType::parse(s)?;
        Ok(self.package_type(package_type))
    }
}

impl Default for PackageUrlBuilder<Empty> {
    fn default() -> Self {
        Self::new()
    }
}

impl PackageUrlBuilder<HasType> {
    /// Sets the name and advances to the [`Ready`] state.
    ///
    /// The name is taken as decoded text; it is trimmed on build.
    #[must_use]
    pub fn name(self, name: impl Into<String>) -> PackageUrlBuilder<Ready> {
        PackageUrlBuilder {
            package_type: self.package_type,
            namespace: self.namespace,
            name: Some(name.into()),
            version: self.version,
            qualifiers: self.qualifiers,
            subpath: self.subpath,
            _state: PhantomData,
        }
    }
}

impl PackageUrlBuilder<Ready> {
    /// Builds the final [`PackageUrl`], applying the same normalization as
    /// [`PackageUrl::parse`].
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if the name is empty or blank, a qualifier
    /// key is invalid or repeated, or a type rule rejects the components.
    ///
    /// # Examples
    ///
    /// ```
    /// use package_url::PackageUrlBuilder;
    ///
    /// let purl = PackageUrlBuilder::new()
    ///     .try_package_type("pypi")?
    ///     .name("Django_package")
    ///     .version("1.11.1")
    ///     .build()?;
    ///
    /// assert_eq!(purl.to_canonical_string(), "pkg:pypi/django-package@1.11.1");
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn build(self) -> Result<PackageUrl, ValidationError> {
        let package_type = self
            .package_type
            .ok_or(ValidationError::Missing { component: "type" })?;
        let name = match self.name {
            Some(name) if !name.is_empty() => name,
            _ => return Err(ValidationError::Missing { component: "name" }),
        };
        let qualifiers =
            Qualifiers::from_pairs(self.qualifiers).map_err(ValidationError::InvalidQualifier)?;

        PackageUrl::from_parts(
            package_type,
            PurlParts {
                namespace: self.namespace,
                name,
                version: self.version,
                qualifiers,
                subpath: self.subpath,
            },
        )
    }
}

/// Methods available in all states for optional components.
impl<State> PackageUrlBuilder<State> {
    /// Sets the namespace. If called multiple times, the last value wins.
    #[must_use]
    pub fn namespace(mut self, namespace: Namespace) -> Self {
        self.namespace = Some(namespace);
        self
    }

    /// Parses and sets the namespace from a `/`-separated string.
    ///
    /// # Errors
    ///
    /// Returns [`NamespaceError`] if no segment remains after trimming.
    pub fn try_namespace(self, s: &str) -> Result<Self, NamespaceError> {
        let namespace = Namespace::parse(s)?;
        Ok(self.namespace(namespace))
    }

    /// Sets the namespace if provided, otherwise leaves it unchanged.
    #[must_use]
    pub fn maybe_namespace(self, namespace: Option<Namespace>) -> Self {
        match namespace {
            Some(ns) => self.namespace(ns),
            None => self,
        }
    }

    /// Sets the version. An empty version is treated as absent.
    #[must_use]
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Sets the version if provided, otherwise leaves it unchanged.
    #[must_use]
    pub fn maybe_version(self, version: Option<&str>) -> Self {
        match version {
            Some(v) => self.version(v),
            None => self,
        }
    }

    /// Adds one qualifier.
    ///
    /// Keys are checked on build; adding the same key twice makes `build()` fail.
    ///
    /// # Examples
    ///
    /// ```
    /// use package_url::PackageUrlBuilder;
    ///
    /// let purl = PackageUrlBuilder::new()
    ///     .try_package_type("deb")?
    ///     .try_namespace("debian")?
    ///     .name("curl")
    ///     .qualifier("distro", "jessie")
    ///     .qualifier("arch", "i386")
    ///     .build()?;
    ///
    /// assert_eq!(purl.to_canonical_string(), "pkg:deb/debian/curl?arch=i386&distro=jessie");
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[must_use]
    pub fn qualifier(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.qualifiers.push((key.into(), value.into()));
        self
    }

    /// Replaces all qualifiers.
    #[must_use]
    pub fn qualifiers(mut self, qualifiers: &Qualifiers) -> Self {
        self.qualifiers = qualifiers
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        self
    }

    /// Sets the subpath. If called multiple times, the last value wins.
    #[must_use]
    pub fn subpath(mut self, subpath: Subpath) -> Self {
        self.subpath = Some(subpath);
        self
    }

    /// Parses and sets the subpath from a `/`-separated string.
    ///
    /// # Errors
    ///
    /// Returns [`SubpathError`] if no usable segment remains.
    pub fn try_subpath(self, s: &str) -> Result<Self, SubpathError> {
        let subpath = Subpath::parse(s)?;
        Ok(self.subpath(subpath))
    }

    /// Sets the subpath if provided, otherwise leaves it unchanged.
    #[must_use]
    pub fn maybe_subpath(self, subpath: Option<Subpath>) -> Self {
        match subpath {
            Some(s) => self.subpath(s),
            None => self,
        }
    }
}
