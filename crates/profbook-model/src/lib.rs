//! ProfBook Model
//!
//! The three node kinds of the ProfBook tree and the task lists they own.
//!
//! # Core Concepts
//!
//! - [`Root`]: holds groups ([`ChildOperation<Group>`])
//! - [`Group`]: holds students ([`ChildOperation<Student>`]) and tasks ([`TaskOperation`])
//! - [`Student`]: holds tasks only
//! - [`Task`]: a [`ToDo`] or a [`Deadline`], kept in a [`TaskList`]
//!
//! Capabilities are traits implemented only by the nodes that support them,
//! so asking a student for children does not compile.
//!
//! # Example
//!
//! ```rust
//! use profbook_model::{ChildOperation, Group, Name, Root, Task, TaskOperation};
//! use profbook_path::GroupId;
//!
//! let mut root = Root::new();
//! let mut group = Group::new(Name::new("Group One").unwrap(), GroupId::parse("grp-001").unwrap());
//! group.add_task(Task::todo("Prepare slides").unwrap()).unwrap();
//! root.add_child(group).unwrap();
//!
//! assert_eq!(root.num_children(), 1);
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod children;
mod error;
mod node;
mod task;

pub mod sample;

pub use children::{Children, TreeChild};
pub use error::{ChildError, ModelError, NameError, TaskError};
pub use node::{ChildOperation, Group, Name, Root, Student, TaskOperation};
pub use task::{Deadline, Task, TaskList, ToDo, DUE_FORMAT};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with tree nodes
    pub use crate::{
        ChildOperation, Group, Name, Root, Student, Task, TaskList, TaskOperation, TreeChild,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
