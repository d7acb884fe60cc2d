//! ProfBook State
//!
//! The layer commands talk to: resolve a path against the current one, find
//! the node it names, and obtain a capability view for the requested kind of
//! operation.
//!
//! # Core Concepts
//!
//! - [`State`]: tree root plus current path; the single entry point
//! - [`locate`]: path to [`NodeRef`], or [`StateError::PathNotFound`]
//! - [`child_view`] / [`task_view`]: capability views, or [`StateError::UnsupportedOperation`]
//! - [`apply_task`] with [`BulkScope`]: one task to one node or to every child
//!
//! # Example
//!
//! ```rust
//! use profbook_model::{Group, Name, Task};
//! use profbook_path::{GroupId, RelativePath};
//! use profbook_state::{BulkScope, State};
//!
//! let mut state = State::new();
//! let group = Group::new(Name::new("Group One").unwrap(), GroupId::parse("grp-001").unwrap());
//! state.root_child_view().add_child(group).unwrap();
//!
//! let path: RelativePath = "grp-001".parse().unwrap();
//! let task = Task::todo("Prepare slides").unwrap();
//! let outcome = state.apply_task(&path, BulkScope::Single, &task).unwrap();
//! assert_eq!(outcome.len(), 1);
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod config;
mod error;
mod manager;
mod state;
mod view;

pub use config::StateConfig;
pub use error::{ErrorKind, Operation, StateError};
pub use manager::{
    all_children_of, apply_task, apply_task_to, bulk_targets, child_view, group_child_view, locate,
    locate_mut, move_student, root_child_view, task_view, BulkOutcome, BulkScope, ScopeParseError,
};
pub use state::State;
pub use view::{AnyChildView, ChildView, NodeMut, NodeRef, TaskView};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for commands
    pub use crate::{
        AnyChildView, BulkScope, ChildView, ErrorKind, NodeRef, State, StateError, TaskView,
    };
    pub use profbook_model::prelude::*;
    pub use profbook_path::{AbsolutePath, RelativePath};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
