//! Per-type normalization and legality rules.
//!
//! The table below is the single place where ecosystem-specific behavior
//! lives. Types not listed get [`TypePolicy::DEFAULT`]: everything is kept
//! verbatim and no extra component is required.

use tracing::debug;

use crate::constants::REPOSITORY_URL;
use crate::error::ValidationError;
use crate::package_type::PackageType;
use crate::purl::PurlParts;
use crate::standard_types::{
    BITBUCKET, DEB, GITHUB, GOLANG, HEX, HUGGINGFACE, MAVEN, MLFLOW, PYPI, RPM, SWIFT,
};

/// A rule that inspects the whole set of components of one type.
pub(crate) type TypeHook = fn(&mut PurlParts) -> Result<(), &'static str>;

/// Normalization flags for one package type.
#[derive(Debug, Clone, Copy)]
#[allow(clippy::struct_excessive_bools)]
pub struct TypePolicy {
    /// Namespace segments are ASCII lower-cased
    pub lowercase_namespace: bool,
    /// The name is ASCII lower-cased
    pub lowercase_name: bool,
    /// `_` in the name is replaced with `-`
    pub dash_name: bool,
    /// The version is ASCII lower-cased
    pub lowercase_version: bool,
    /// A namespace must be present
    pub requires_namespace: bool,
    hook: Option<TypeHook>,
}

impl TypePolicy {
    /// Policy for types without special rules.
    pub const DEFAULT: Self = Self {
        lowercase_namespace: false,
        lowercase_name: false,
        dash_name: false,
        lowercase_version: false,
        requires_namespace: false,
        hook: None,
    };

    const CASE_INSENSITIVE: Self = Self {
        lowercase_namespace: true,
        lowercase_name: true,
        ..Self::DEFAULT
    };

    const NAMESPACED: Self = Self {
        requires_namespace: true,
        ..Self::DEFAULT
    };

    /// Returns true if a type-specific hook runs after the flags.
    #[must_use]
    pub const fn has_hook(&self) -> bool {
        self.hook.is_some()
    }
}

static POLICIES: &[(&str, TypePolicy)] = &[
    (BITBUCKET, TypePolicy::CASE_INSENSITIVE),
    (DEB, TypePolicy::CASE_INSENSITIVE),
    (GITHUB, TypePolicy::CASE_INSENSITIVE),
    (GOLANG, TypePolicy::CASE_INSENSITIVE),
    (HEX, TypePolicy::CASE_INSENSITIVE),
    (
        HUGGINGFACE,
        TypePolicy {
            lowercase_version: true,
            ..TypePolicy::DEFAULT
        },
    ),
    (MAVEN, TypePolicy::NAMESPACED),
    (
        MLFLOW,
        TypePolicy {
            hook: Some(mlflow_rules),
            ..TypePolicy::DEFAULT
        },
    ),
    (
        PYPI,
        TypePolicy {
            lowercase_name: true,
            dash_name: true,
            ..TypePolicy::DEFAULT
        },
    ),
    (
        RPM,
        TypePolicy {
            lowercase_namespace: true,
            ..TypePolicy::DEFAULT
        },
    ),
    (SWIFT, TypePolicy::NAMESPACED),
];

/// Returns the policy for a lower-cased package type.
pub(crate) fn lookup(package_type: &str) -> &'static TypePolicy {
    POLICIES
        .iter()
        .find(|(name, _)| *name == package_type)
        .map_or(&TypePolicy::DEFAULT, |(_, policy)| policy)
}

/// Applies the policy of `package_type` to the components in place.
pub(crate) fn apply(package_type: &PackageType, parts: &mut PurlParts) -> Result<(), ValidationError> {
    let policy = package_type.policy();

    if policy.lowercase_namespace {
        if let Some(namespace) = parts.namespace.as_mut() {
            namespace.make_ascii_lowercase();
        }
    }
    if policy.lowercase_name {
        parts.name.make_ascii_lowercase();
    }
    if policy.dash_name {
        parts.name = parts.name.replace('_', "-");
    }
    if policy.lowercase_version {
        if let Some(version) = parts.version.as_mut() {
            version.make_ascii_lowercase();
        }
    }

    if policy.requires_namespace && parts.namespace.is_none() {
        debug!(package_type = %package_type, "namespace required but missing");
        return Err(ValidationError::NamespaceRequired {
            package_type: package_type.to_string(),
        });
    }

    if let Some(hook) = policy.hook {
        hook(parts).map_err(|reason| {
            debug!(package_type = %package_type, reason, "type rule rejected components");
            ValidationError::TypeRule {
                package_type: package_type.to_string(),
                reason,
            }
        })?;
    }

    Ok(())
}

/// Names registered on Databricks are case-insensitive; elsewhere case is kept.
fn mlflow_rules(parts: &mut PurlParts) -> Result<(), &'static str> {
    let on_databricks = parts
        .qualifiers
        .get(REPOSITORY_URL)
        .is_some_and(|url| url.to_ascii_lowercase().contains("databricks"));
    if on_databricks {
        debug!(name = %parts.name, "lower-casing mlflow name for databricks repository");
        parts.name.make_ascii_lowercase();
    }
    Ok(())
}
