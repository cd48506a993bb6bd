//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use package_url::prelude::*;
//!
//! let purl = PackageUrl::parse("pkg:cargo/rand@0.7.2").unwrap();
//! ```
//!
//! Builder state markers (`Empty`, `HasType`, `Ready`) are excluded as they
//! are implementation details.

pub use crate::{
    // Core types
    Namespace, PackageType, PackageUrl, Qualifiers, Subpath, TypePolicy,
    // Builder
    PackageUrlBuilder,
    // Errors
    NamespaceError, PackageTypeError, ParseError, ParseErrorKind, QualifierError, SubpathError,
    ValidationError,
    // Constants
    REPOSITORY_URL, SCHEME,
};
