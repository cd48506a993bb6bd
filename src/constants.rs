//! Constants for package URL parsing and serialization.

/// The package URL scheme.
pub const SCHEME: &str = "pkg";

/// Qualifier key naming the repository a package is fetched from.
pub const REPOSITORY_URL: &str = "repository_url";
