//! Error types for package URL parsing and validation.

use std::error::Error;
use std::fmt;

/// Errors that can occur when parsing a package URL string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The input that failed to parse
    pub input: String,
    /// The specific error that occurred
    pub kind: ParseErrorKind,
}

/// Specific parsing error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Input is empty
    Empty,
    /// Missing or invalid scheme (expected "pkg:")
    InvalidScheme {
        /// The scheme that was found, if any
        found: Option<String>,
    },
    /// The input carries a network authority (userinfo or port)
    AuthorityPresent {
        /// The authority that was found
        authority: String,
    },
    /// Missing required component
    MissingComponent {
        /// Name of the missing component
        component: &'static str,
    },
    /// Malformed percent escape or escape decoding to invalid UTF-8
    InvalidPercentEncoding {
        /// The offending raw value
        value: String,
    },
    /// A namespace or subpath segment contains an encoded `/`
    EncodedSlash {
        /// The offending raw segment
        segment: String,
    },
    /// The same qualifier key appears twice (compared case-insensitively)
    DuplicateQualifier {
        /// The duplicated key, lower-cased
        key: String,
    },
    /// A decoded component failed validation
    Invalid(ValidationError),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse package URL '{}': ", self.input)?;
        match &self.kind {
            ParseErrorKind::Empty => write!(f, "input is empty"),
            ParseErrorKind::InvalidScheme { found } => match found {
                Some(s) => write!(f, "expected scheme 'pkg:', found '{s}'"),
                None => write!(f, "missing scheme; package URL must start with 'pkg:'"),
            },
            ParseErrorKind::AuthorityPresent { authority } => write!(
                f,
                "authority '{authority}' is not allowed; package URLs carry no userinfo or port"
            ),
            ParseErrorKind::MissingComponent { component } => {
                write!(f, "missing required component: {component}")
            }
            ParseErrorKind::InvalidPercentEncoding { value } => {
                write!(f, "invalid percent encoding in '{value}'")
            }
            ParseErrorKind::EncodedSlash { segment } => {
                write!(f, "segment '{segment}' contains an encoded '/'")
            }
            ParseErrorKind::DuplicateQualifier { key } => {
                write!(f, "duplicate qualifier '{key}'")
            }
            ParseErrorKind::Invalid(e) => write!(f, "{e}"),
        }
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.kind {
            ParseErrorKind::Invalid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ValidationError> for ParseErrorKind {
    fn from(e: ValidationError) -> Self {
        Self::Invalid(e)
    }
}

/// Errors raised when a component is structurally present but illegal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required argument was not supplied
    Missing {
        /// Name of the missing component
        component: &'static str,
    },
    /// The package type is invalid
    InvalidType(PackageTypeError),
    /// The namespace is invalid
    InvalidNamespace(NamespaceError),
    /// The name is blank after trimming
    EmptyName,
    /// A qualifier is invalid
    InvalidQualifier(QualifierError),
    /// The subpath is invalid
    InvalidSubpath(SubpathError),
    /// The package type requires a namespace and none was given
    NamespaceRequired {
        /// The package type
        package_type: String,
    },
    /// A type-specific rule rejected the components
    TypeRule {
        /// The package type
        package_type: String,
        /// Reason for rejection
        reason: &'static str,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { component } => write!(f, "a {component} is always required"),
            Self::InvalidType(e) => write!(f, "invalid type: {e}"),
            Self::InvalidNamespace(e) => write!(f, "invalid namespace: {e}"),
            Self::EmptyName => write!(f, "name cannot be blank"),
            Self::InvalidQualifier(e) => write!(f, "invalid qualifier: {e}"),
            Self::InvalidSubpath(e) => write!(f, "invalid subpath: {e}"),
            Self::NamespaceRequired { package_type } => {
                write!(f, "type '{package_type}' requires a namespace")
            }
            Self::TypeRule {
                package_type,
                reason,
            } => write!(f, "type '{package_type}': {reason}"),
        }
    }
}

impl Error for ValidationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidType(e) => Some(e),
            Self::InvalidNamespace(e) => Some(e),
            Self::InvalidQualifier(e) => Some(e),
            Self::InvalidSubpath(e) => Some(e),
            _ => None,
        }
    }
}

/// Errors for package type parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackageTypeError {
    /// Type is blank
    Empty,
    /// Type starts with a digit
    StartsWithDigit {
        /// The digit found
        found: char,
    },
    /// Invalid character (not ASCII letter, digit, '.', '+' or '-')
    InvalidChar {
        /// The invalid character
        char: char,
        /// Position in the input
        position: usize,
    },
}

impl fmt::Display for PackageTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "type cannot be empty"),
            Self::StartsWithDigit { found } => {
                write!(f, "type cannot start with a number, found '{found}'")
            }
            Self::InvalidChar { char, position } => write!(
                f,
                "invalid character '{char}' at position {position}; only letters, digits, '.', '+' and '-' allowed"
            ),
        }
    }
}

impl Error for PackageTypeError {}

/// Errors for namespace parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NamespaceError {
    /// No segment remains after trimming
    Empty,
    /// A segment contains a '/'
    SegmentContainsSlash {
        /// The invalid segment
        segment: String,
        /// Index of the segment
        index: usize,
    },
}

impl fmt::Display for NamespaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "namespace has no non-empty segment"),
            Self::SegmentContainsSlash { segment, index } => {
                write!(f, "segment '{segment}' at index {index} contains '/'")
            }
        }
    }
}

impl Error for NamespaceError {}

/// Errors for qualifier validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QualifierError {
    /// Invalid qualifier key
    InvalidKey {
        /// The invalid key
        key: String,
        /// Reason for invalidity
        reason: &'static str,
    },
    /// Two keys collide after lower-casing
    Duplicate {
        /// The duplicated key, lower-cased
        key: String,
    },
}

impl fmt::Display for QualifierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidKey { key, reason } => write!(f, "invalid key '{key}': {reason}"),
            Self::Duplicate { key } => write!(f, "duplicate key '{key}'"),
        }
    }
}

impl Error for QualifierError {}

/// Errors for subpath parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubpathError {
    /// No segment remains after dropping empty, '.' and '..' segments
    Empty,
    /// A segment contains a '/'
    SegmentContainsSlash {
        /// The invalid segment
        segment: String,
        /// Index of the segment
        index: usize,
    },
}

impl fmt::Display for SubpathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "subpath has no usable segment"),
            Self::SegmentContainsSlash { segment, index } => {
                write!(f, "segment '{segment}' at index {index} contains '/'")
            }
        }
    }
}

impl Error for SubpathError {}
