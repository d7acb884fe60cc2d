//! Error types for the dispatch layer and [`State`](crate::State)
//!
//! Every failure a command can see comes back as a [`StateError`]; use
//! [`StateError::kind`] to branch on the category without matching on the
//! nested model errors.

use profbook_model::{ChildError, TaskError};
use profbook_path::{AbsolutePath, PathError, PathErrorKind};
use std::fmt::{self, Display, Formatter};

/// Operation that was requested on a path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Child management (add/remove/lookup/list)
    Children,
    /// Task management
    Tasks,
    /// Apply to every student of a group
    BulkGroup,
    /// Apply to every group of the root
    BulkRoot,
    /// Move a student between groups
    MoveStudent,
    /// Change the current directory
    ChangeDirectory,
}

impl Display for Operation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Children => "child management",
            Self::Tasks => "task management",
            Self::BulkGroup => "apply to all students",
            Self::BulkRoot => "apply to all groups",
            Self::MoveStudent => "move student",
            Self::ChangeDirectory => "change directory",
        };
        f.write_str(text)
    }
}

/// Category of a [`StateError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidIdentifier,
    InvalidPath,
    PathNotFound,
    UnsupportedOperation,
    DuplicateChild,
    DuplicateTask,
    NoSuchChild,
    NoSuchTask,
    /// Task payload rejected before reaching a list
    InvalidTask,
    Config,
}

/// Main state error type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    /// Identifier or path text was malformed, or resolution went out of bounds
    #[error("invalid path: {0}")]
    Path(#[from] PathError),

    /// Well-formed path with no node in the tree
    #[error("path not found: {0}")]
    PathNotFound(AbsolutePath),

    /// Existing node whose kind does not support the operation
    #[error("{operation} is not supported at {path}")]
    UnsupportedOperation {
        path: AbsolutePath,
        operation: Operation,
    },

    /// Bulk operation would touch more children than configured
    #[error("bulk operation at {path} targets {targets} children (limit {limit})")]
    BulkLimitExceeded {
        path: AbsolutePath,
        targets: usize,
        limit: usize,
    },

    #[error("child error: {0}")]
    Child(#[from] ChildError),

    #[error("task error: {0}")]
    Task(#[from] TaskError),

    /// Configuration could not be parsed or validated
    #[error("configuration error: {0}")]
    Config(String),
}

impl StateError {
    /// Create an unsupported-operation error
    #[inline]
    #[must_use]
    pub fn unsupported(path: &AbsolutePath, operation: Operation) -> Self {
        Self::UnsupportedOperation {
            path: path.clone(),
            operation,
        }
    }

    /// Categorise this error
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Path(e) => match e.kind() {
                PathErrorKind::InvalidIdentifier => ErrorKind::InvalidIdentifier,
                PathErrorKind::InvalidPath => ErrorKind::InvalidPath,
            },
            Self::PathNotFound(_) => ErrorKind::PathNotFound,
            Self::UnsupportedOperation { .. } | Self::BulkLimitExceeded { .. } => {
                ErrorKind::UnsupportedOperation
            }
            Self::Child(ChildError::Duplicate(_)) => ErrorKind::DuplicateChild,
            Self::Child(ChildError::NoSuch(_)) => ErrorKind::NoSuchChild,
            Self::Task(TaskError::Duplicate(_)) => ErrorKind::DuplicateTask,
            Self::Task(TaskError::NoSuch { .. }) => ErrorKind::NoSuchTask,
            Self::Task(TaskError::BlankDescription | TaskError::InvalidDue(_)) => {
                ErrorKind::InvalidTask
            }
            Self::Config(_) => ErrorKind::Config,
        }
    }

    /// Check if error is retryable
    ///
    /// Always `false`: every failure follows from the input and the current tree.
    #[inline]
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use profbook_path::{GroupId, Identifier};

    #[test]
    fn kinds_follow_taxonomy() {
        let id = Identifier::Group(GroupId::parse("grp-001").unwrap());

        assert_eq!(StateError::from(PathError::AboveRoot).kind(), ErrorKind::InvalidPath);
        assert_eq!(
            StateError::from(GroupId::parse("x").unwrap_err()).kind(),
            ErrorKind::InvalidIdentifier
        );
        assert_eq!(
            StateError::PathNotFound(AbsolutePath::Root).kind(),
            ErrorKind::PathNotFound
        );
        assert_eq!(
            StateError::unsupported(&AbsolutePath::Root, Operation::Tasks).kind(),
            ErrorKind::UnsupportedOperation
        );
        assert_eq!(
            StateError::from(ChildError::Duplicate(id.clone())).kind(),
            ErrorKind::DuplicateChild
        );
        assert_eq!(StateError::from(ChildError::NoSuch(id)).kind(), ErrorKind::NoSuchChild);
        assert_eq!(
            StateError::from(TaskError::NoSuch { index: 0, size: 0 }).kind(),
            ErrorKind::NoSuchTask
        );
        assert_eq!(StateError::from(TaskError::BlankDescription).kind(), ErrorKind::InvalidTask);
        assert_eq!(
            StateError::from(TaskError::InvalidDue("soon".into())).kind(),
            ErrorKind::InvalidTask
        );
    }

    #[test]
    fn unsupported_message_names_operation_and_path() {
        let err = StateError::unsupported(&AbsolutePath::Root, Operation::Tasks);
        assert_eq!(err.to_string(), "task management is not supported at ~");
        assert!(!err.is_retryable());
    }
}
