//! ProfBook Paths
//!
//! Typed identifiers and filesystem-like paths for a three-level tree:
//! the root, groups under it, and students under each group.
//!
//! # Core Concepts
//!
//! - [`GroupId`] / [`StudentId`]: disjoint, validated identifier kinds
//! - [`AbsolutePath`]: rooted path of depth 0 to 2
//! - [`RelativePath`]: `.`/`..`/identifier tokens resolved against an absolute path
//!
//! # Example
//!
//! ```rust
//! use profbook_path::{AbsolutePath, RelativePath};
//!
//! let current: AbsolutePath = "~/grp-001".parse().unwrap();
//! let relative: RelativePath = "../grp-002/stu-004".parse().unwrap();
//!
//! let resolved = current.resolve(&relative).unwrap();
//! assert!(resolved.is_student_level());
//! assert_eq!(resolved.to_string(), "~/grp-002/stu-004");
//! ```

#![warn(unreachable_pub)]

mod error;
mod id;
mod path;

pub use error::{PathError, PathErrorKind};
pub use id::{GroupId, IdKind, Identifier, StudentId};
pub use path::{AbsolutePath, PathToken, RelativePath, MAX_DEPTH, ROOT_MARKER, SEPARATOR};

/// Parse group id text
///
/// # Errors
/// Returns [`PathError::InvalidIdentifier`] for malformed text.
#[inline]
pub fn parse_group_id(text: &str) -> Result<GroupId, PathError> {
    GroupId::parse(text)
}

/// Parse student id text
///
/// # Errors
/// Returns [`PathError::InvalidIdentifier`] for malformed text.
#[inline]
pub fn parse_student_id(text: &str) -> Result<StudentId, PathError> {
    StudentId::parse(text)
}

/// Parse relative path text
///
/// # Errors
/// Returns an invalid-path [`PathError`] for empty text, empty segments or a misplaced `~`.
#[inline]
pub fn parse_relative_path(text: &str) -> Result<RelativePath, PathError> {
    text.parse()
}

/// Resolve `relative` against `current`
///
/// # Errors
/// See [`AbsolutePath::resolve`].
#[inline]
pub fn resolve(current: &AbsolutePath, relative: &RelativePath) -> Result<AbsolutePath, PathError> {
    current.resolve(relative)
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
