//! Error types for tree nodes and task lists

use crate::task::Task;
use profbook_path::{Identifier, PathError};

/// Child collection errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChildError {
    /// A child with this identifier is already present
    #[error("duplicate child: {0}")]
    Duplicate(Identifier),

    /// No child with this identifier
    #[error("no such child: {0}")]
    NoSuch(Identifier),
}

/// Task list errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TaskError {
    /// A structurally equal task is already in the list
    #[error("duplicate task: {0}")]
    Duplicate(Task),

    /// 1-based index outside `[1, size]`
    #[error("no task at index {index} (list has {size})")]
    NoSuch { index: usize, size: usize },

    /// Description is empty after trimming
    #[error("task description cannot be blank")]
    BlankDescription,

    /// Due text does not match `%Y-%m-%d %H:%M`
    #[error("invalid due date {0:?}, expected YYYY-MM-DD HH:MM")]
    InvalidDue(String),
}

/// Name validation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NameError {
    /// Name is empty after trimming
    #[error("name cannot be blank")]
    Blank,
}

/// Any model-layer failure
///
/// Used by builders that combine several model operations, such as the
/// sample fixture.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    #[error(transparent)]
    Path(#[from] PathError),

    #[error(transparent)]
    Name(#[from] NameError),

    #[error(transparent)]
    Child(#[from] ChildError),

    #[error(transparent)]
    Task(#[from] TaskError),
}
