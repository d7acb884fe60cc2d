//! Node references and capability views
//!
//! [`NodeRef`] and [`NodeMut`] are closed sums over the three node kinds.
//! A capability view ([`ChildView`], [`TaskView`]) can only be obtained from
//! a node kind that supports it; the query returns `None` otherwise.

use profbook_model::{
    ChildError, ChildOperation, Group, Root, Student, Task, TaskError, TaskOperation, TreeChild,
};
use profbook_path::AbsolutePath;
use std::fmt::{self, Display, Formatter};

/// Shared reference to a node of any kind
#[derive(Debug, Clone, Copy)]
pub enum NodeRef<'a> {
    Root(&'a Root),
    Group(&'a Group),
    Student(&'a Student),
}

impl<'a> NodeRef<'a> {
    /// Task owner, for groups and students
    #[must_use]
    pub fn as_task_owner(&self) -> Option<&'a dyn TaskOperation> {
        match *self {
            Self::Root(_) => None,
            Self::Group(g) => Some(g as &dyn TaskOperation),
            Self::Student(s) => Some(s as &dyn TaskOperation),
        }
    }

    /// Whether this node kind can hold children
    #[must_use]
    pub fn is_child_container(&self) -> bool {
        !matches!(self, Self::Student(_))
    }

    #[must_use]
    pub fn as_group(&self) -> Option<&'a Group> {
        match *self {
            Self::Group(g) => Some(g),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_student(&self) -> Option<&'a Student> {
        match *self {
            Self::Student(s) => Some(s),
            _ => None,
        }
    }
}

/// Exclusive reference to a node of any kind
#[derive(Debug)]
pub enum NodeMut<'a> {
    Root(&'a mut Root),
    Group(&'a mut Group),
    Student(&'a mut Student),
}

impl<'a> NodeMut<'a> {
    /// Child-management view, for the root and groups
    #[must_use]
    pub fn as_child_container(self, path: AbsolutePath) -> Option<AnyChildView<'a>> {
        match self {
            Self::Root(r) => Some(AnyChildView::Groups(ChildView::new(path, r))),
            Self::Group(g) => Some(AnyChildView::Students(ChildView::new(path, g))),
            Self::Student(_) => None,
        }
    }

    /// Task-management view, for groups and students
    #[must_use]
    pub fn as_task_owner(self, path: AbsolutePath) -> Option<TaskView<'a>> {
        match self {
            Self::Root(_) => None,
            Self::Group(g) => Some(TaskView::new(path, g)),
            Self::Student(s) => Some(TaskView::new(path, s)),
        }
    }
}

/// Child-management capability over children of type `T`
pub struct ChildView<'a, T: TreeChild> {
    path: AbsolutePath,
    owner: &'a mut dyn ChildOperation<T>,
}

impl<'a, T: TreeChild> ChildView<'a, T> {
    pub(crate) fn new(path: AbsolutePath, owner: &'a mut dyn ChildOperation<T>) -> Self {
        Self { path, owner }
    }

    /// Path of the container
    #[inline]
    #[must_use]
    pub fn path(&self) -> &AbsolutePath {
        &self.path
    }

    /// # Errors
    /// Returns [`ChildError::Duplicate`] if the id is taken; nothing changes.
    pub fn add_child(&mut self, child: T) -> Result<(), ChildError> {
        self.owner.add_child(child)
    }

    /// # Errors
    /// Returns [`ChildError::NoSuch`] if the id is absent.
    pub fn delete_child(&mut self, id: &T::Id) -> Result<T, ChildError> {
        self.owner.delete_child(id)
    }

    /// # Errors
    /// Returns [`ChildError::NoSuch`] if no child has the replacement's id.
    pub fn update_child(&mut self, child: T) -> Result<T, ChildError> {
        self.owner.update_child(child)
    }

    #[must_use]
    pub fn get_child(&self, id: &T::Id) -> Option<&T> {
        self.owner.get_child(id)
    }

    #[must_use]
    pub fn has_child(&self, id: &T::Id) -> bool {
        self.owner.has_child(id)
    }

    /// Children in insertion order
    #[must_use]
    pub fn all_children(&self) -> Vec<&T> {
        self.owner.all_children()
    }

    #[must_use]
    pub fn num_children(&self) -> usize {
        self.owner.num_children()
    }
}

/// Child view of whichever container a path resolved to
pub enum AnyChildView<'a> {
    /// Root: children are groups
    Groups(ChildView<'a, Group>),
    /// Group: children are students
    Students(ChildView<'a, Student>),
}

impl AnyChildView<'_> {
    #[must_use]
    pub fn path(&self) -> &AbsolutePath {
        match self {
            Self::Groups(v) => v.path(),
            Self::Students(v) => v.path(),
        }
    }

    #[must_use]
    pub fn num_children(&self) -> usize {
        match self {
            Self::Groups(v) => v.num_children(),
            Self::Students(v) => v.num_children(),
        }
    }
}

/// Task-management capability over one group or student
pub struct TaskView<'a> {
    path: AbsolutePath,
    owner: &'a mut dyn TaskOperation,
}

impl<'a> TaskView<'a> {
    pub(crate) fn new(path: AbsolutePath, owner: &'a mut dyn TaskOperation) -> Self {
        Self { path, owner }
    }

    /// Path of the task owner
    #[inline]
    #[must_use]
    pub fn path(&self) -> &AbsolutePath {
        &self.path
    }

    /// # Errors
    /// Returns [`TaskError::Duplicate`] for a structurally equal task; nothing changes.
    pub fn add_task(&mut self, task: Task) -> Result<(), TaskError> {
        self.owner.add_task(task)
    }

    /// # Errors
    /// Returns [`TaskError::NoSuch`] outside `[1, size]`.
    pub fn delete_task(&mut self, index: usize) -> Result<Task, TaskError> {
        self.owner.delete_task(index)
    }

    /// # Errors
    /// Returns [`TaskError::NoSuch`] outside `[1, size]`.
    pub fn get_task(&self, index: usize) -> Result<&Task, TaskError> {
        self.owner.get_task(index)
    }

    /// # Errors
    /// Returns [`TaskError::NoSuch`] outside `[1, size]`.
    pub fn mark_task(&mut self, index: usize) -> Result<&Task, TaskError> {
        self.owner.mark_task(index)
    }

    /// # Errors
    /// Returns [`TaskError::NoSuch`] outside `[1, size]`.
    pub fn unmark_task(&mut self, index: usize) -> Result<&Task, TaskError> {
        self.owner.unmark_task(index)
    }

    #[must_use]
    pub fn find_tasks(&self, keyword: &str) -> Vec<(usize, &Task)> {
        self.owner.find_tasks(keyword)
    }

    #[must_use]
    pub fn has_task(&self, task: &Task) -> bool {
        self.owner.has_task(task)
    }

    #[must_use]
    pub fn all_tasks(&self) -> &[Task] {
        self.owner.all_tasks()
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.owner.task_list_size()
    }
}

impl Display for TaskView<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.path, self.owner.task_list())
    }
}
