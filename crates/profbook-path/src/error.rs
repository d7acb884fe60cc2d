//! Errors produced while parsing identifiers and resolving paths

use crate::id::IdKind;

/// Coarse classification of a [`PathError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathErrorKind {
    /// Malformed identifier text
    InvalidIdentifier,
    /// Malformed path text or an out-of-bounds resolution
    InvalidPath,
}

/// Errors related to identifiers and paths
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// Identifier text does not match its kind's format
    #[error("invalid {kind} identifier: {text:?}")]
    InvalidIdentifier {
        /// Kind the text was checked against
        kind: IdKind,
        /// Offending text
        text: String,
    },

    /// Path text is empty
    #[error("path is empty")]
    EmptyPath,

    /// Empty segment between two separators
    #[error("path contains empty segment")]
    EmptySegment,

    /// Segment token whose text would not parse back as an identifier segment
    #[error("segment {0:?} is not a plain identifier segment")]
    MalformedSegment(String),

    /// `~` used anywhere except the first segment
    #[error("root marker '~' may only start a path")]
    MisplacedRoot,

    /// Absolute path text that does not start at the root
    #[error("path {0:?} is not absolute")]
    NotAbsolute(String),

    /// `..` applied at the root
    #[error("cannot ascend above the root")]
    AboveRoot,

    /// A segment would descend below student level
    #[error("cannot descend below student level at segment {segment:?}")]
    TooDeep {
        /// Segment that would have been pushed at depth 3
        segment: String,
    },

    /// A segment is not a valid identifier for the depth it lands on
    #[error("segment {segment:?} is not a valid {expected} identifier")]
    InvalidSegment {
        /// Offending segment
        segment: String,
        /// Kind required at that depth
        expected: IdKind,
    },
}

impl PathError {
    /// Classify this error
    #[inline]
    #[must_use]
    pub fn kind(&self) -> PathErrorKind {
        match self {
            Self::InvalidIdentifier { .. } => PathErrorKind::InvalidIdentifier,
            _ => PathErrorKind::InvalidPath,
        }
    }
}
