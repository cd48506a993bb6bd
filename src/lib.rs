//! Parser, validator and builder for package URLs (`pkg:` URIs).
//!
//! A package URL identifies a software package across ecosystems with a
//! single string:
//!
//! ```text
//! pkg:<type>/<namespace>/<name>@<version>?<qualifiers>#<subpath>
//! ```
//!
//! Only the type and name are required. Every value is normalized on
//! construction, so two package URLs naming the same package produce the
//! same canonical string.
//!
//! # Quick Start
//!
//! ```rust
//! use package_url::PackageUrl;
//!
//! let purl = PackageUrl::parse("pkg:npm/%40angular/animation@12.3.1").unwrap();
//!
//! assert_eq!(purl.package_type().as_str(), "npm");
//! assert_eq!(purl.namespace().map(|ns| ns.as_str()), Some("@angular"));
//! assert_eq!(purl.name(), "animation");
//! assert_eq!(purl.version(), Some("12.3.1"));
//! assert_eq!(purl.to_string(), "pkg:npm/%40angular/animation@12.3.1");
//! ```
//!
//! # Building from components
//!
//! [`PackageUrl::new`] takes decoded values directly. The typestate
//! [`PackageUrlBuilder`] enforces at compile time that a type and name are
//! given:
//!
//! ```rust
//! use package_url::PackageUrlBuilder;
//!
//! let purl = PackageUrlBuilder::new()
//!     .try_package_type("maven")?
//!     .try_namespace("org.apache.xmlgraphics")?
//!     .name("batik-anim")
//!     .version("1.9.1")
//!     .qualifier("packaging", "sources")
//!     .build()?;
//!
//! assert_eq!(
//!     purl.to_canonical_string(),
//!     "pkg:maven/org.apache.xmlgraphics/batik-anim@1.9.1?packaging=sources"
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Normalization
//!
//! | Component | Rule |
//! |-----------|------|
//! | Scheme | `pkg`, matched case-insensitively |
//! | Type | trimmed, lower-cased |
//! | Namespace | empty segments dropped, segments trimmed |
//! | Name | trimmed, must not be blank |
//! | Version | empty is absent |
//! | Qualifiers | keys lower-cased, empty values dropped, sorted by key |
//! | Subpath | empty, `.` and `..` segments dropped |
//!
//! Trimming strips ASCII spaces and control characters only. Some types
//! fold case or rewrite names further; see [`TypePolicy`].

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod builder;
mod constants;
mod decoder;
mod encoding;
mod error;
#[cfg(kani)]
mod kani_impls;
mod namespace;
mod package_type;
mod policy;
pub mod prelude;
mod purl;
mod qualifiers;
pub mod standard_types;
mod subpath;

pub use builder::{Empty, HasType, PackageUrlBuilder, Ready};
pub use constants::{REPOSITORY_URL, SCHEME};
pub use error::{
    NamespaceError, PackageTypeError, ParseError, ParseErrorKind, QualifierError, SubpathError,
    ValidationError,
};
pub use namespace::Namespace;
pub use package_type::PackageType;
pub use policy::TypePolicy;
pub use purl::PackageUrl;
pub use qualifiers::Qualifiers;
pub use subpath::Subpath;
