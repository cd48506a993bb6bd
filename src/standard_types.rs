//! Package types registered in the package URL type registry.
//!
//! A package URL may use any type matching the type grammar; these are the
//! ones with an agreed meaning.

#![allow(missing_docs)]

pub const ALPM: &str = "alpm";
pub const APK: &str = "apk";
pub const BITBUCKET: &str = "bitbucket";
pub const BITNAMI: &str = "bitnami";
pub const CARGO: &str = "cargo";
pub const COCOAPODS: &str = "cocoapods";
pub const COMPOSER: &str = "composer";
pub const CONAN: &str = "conan";
pub const CONDA: &str = "conda";
pub const CPAN: &str = "cpan";
pub const CRAN: &str = "cran";
pub const DEB: &str = "deb";
pub const DOCKER: &str = "docker";
pub const GEM: &str = "gem";
pub const GENERIC: &str = "generic";
pub const GITHUB: &str = "github";
pub const GOLANG: &str = "golang";
pub const HACKAGE: &str = "hackage";
pub const HEX: &str = "hex";
pub const HUGGINGFACE: &str = "huggingface";
pub const LUAROCKS: &str = "luarocks";
pub const MAVEN: &str = "maven";
pub const MLFLOW: &str = "mlflow";
pub const NPM: &str = "npm";
pub const NUGET: &str = "nuget";
pub const OCI: &str = "oci";
pub const PUB: &str = "pub";
pub const PYPI: &str = "pypi";
pub const QPKG: &str = "qpkg";
pub const RPM: &str = "rpm";
pub const SWID: &str = "swid";
pub const SWIFT: &str = "swift";

/// Every registered type, sorted.
pub const ALL: &[&str] = &[
    ALPM, APK, BITBUCKET, BITNAMI, CARGO, COCOAPODS, COMPOSER, CONAN, CONDA, CPAN, CRAN, DEB,
    DOCKER, GEM, GENERIC, GITHUB, GOLANG, HACKAGE, HEX, HUGGINGFACE, LUAROCKS, MAVEN, MLFLOW, NPM,
    NUGET, OCI, PUB, PYPI, QPKG, RPM, SWID, SWIFT,
];
