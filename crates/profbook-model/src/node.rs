//! Tree nodes: [`Root`], [`Group`] and [`Student`]
//!
//! Each node kind implements only the capability traits it supports:
//!
//! | node    | [`ChildOperation`] | [`TaskOperation`] |
//! |---------|--------------------|-------------------|
//! | Root    | groups             | no                |
//! | Group   | students           | yes               |
//! | Student | no                 | yes               |
//!
//! Nodes do not store their depth or a link to their owner; both follow from
//! where the node sits in the tree.

use crate::children::{Children, TreeChild};
use crate::error::{ChildError, NameError, TaskError};
use crate::task::{Task, TaskList};
use profbook_path::{GroupId, StudentId};
use std::fmt::{self, Display, Formatter};

/// Display name of a group or student
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    /// Create a trimmed, non-blank name
    ///
    /// # Errors
    /// Returns [`NameError::Blank`] for blank text.
    pub fn new(text: impl Into<String>) -> Result<Self, NameError> {
        let text = text.into();
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(NameError::Blank);
        }
        Ok(Self(trimmed.to_owned()))
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Name {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Nodes that own child nodes of type `T`
pub trait ChildOperation<T: TreeChild> {
    fn children(&self) -> &Children<T>;

    fn children_mut(&mut self) -> &mut Children<T>;

    /// # Errors
    /// Returns [`ChildError::Duplicate`] if the id is taken.
    fn add_child(&mut self, child: T) -> Result<(), ChildError> {
        self.children_mut().add(child)
    }

    /// # Errors
    /// Returns [`ChildError::NoSuch`] if the id is absent.
    fn delete_child(&mut self, id: &T::Id) -> Result<T, ChildError> {
        self.children_mut().remove(id)
    }

    /// # Errors
    /// Returns [`ChildError::NoSuch`] if no child has the replacement's id.
    fn update_child(&mut self, child: T) -> Result<T, ChildError> {
        self.children_mut().update(child)
    }

    fn get_child(&self, id: &T::Id) -> Option<&T> {
        self.children().get(id)
    }

    fn get_child_mut(&mut self, id: &T::Id) -> Option<&mut T> {
        self.children_mut().get_mut(id)
    }

    fn has_child(&self, id: &T::Id) -> bool {
        self.children().contains(id)
    }

    /// Children in insertion order
    fn all_children(&self) -> Vec<&T> {
        self.children().values().collect()
    }

    fn num_children(&self) -> usize {
        self.children().len()
    }
}

/// Nodes that own a [`TaskList`]
pub trait TaskOperation {
    fn task_list(&self) -> &TaskList;

    fn task_list_mut(&mut self) -> &mut TaskList;

    /// # Errors
    /// Returns [`TaskError::Duplicate`] for a structurally equal task.
    fn add_task(&mut self, task: Task) -> Result<(), TaskError> {
        self.task_list_mut().add(task)
    }

    /// # Errors
    /// Returns [`TaskError::NoSuch`] outside `[1, size]`.
    fn delete_task(&mut self, index: usize) -> Result<Task, TaskError> {
        self.task_list_mut().remove(index)
    }

    /// # Errors
    /// Returns [`TaskError::NoSuch`] outside `[1, size]`.
    fn get_task(&self, index: usize) -> Result<&Task, TaskError> {
        self.task_list().get(index)
    }

    /// # Errors
    /// Returns [`TaskError::NoSuch`] outside `[1, size]`.
    fn mark_task(&mut self, index: usize) -> Result<&Task, TaskError> {
        self.task_list_mut().mark(index)
    }

    /// # Errors
    /// Returns [`TaskError::NoSuch`] outside `[1, size]`.
    fn unmark_task(&mut self, index: usize) -> Result<&Task, TaskError> {
        self.task_list_mut().unmark(index)
    }

    fn find_tasks(&self, keyword: &str) -> Vec<(usize, &Task)> {
        self.task_list().find(keyword)
    }

    fn has_task(&self, task: &Task) -> bool {
        self.task_list().contains(task)
    }

    fn all_tasks(&self) -> &[Task] {
        self.task_list().as_slice()
    }

    fn task_list_size(&self) -> usize {
        self.task_list().len()
    }
}

/// Top of the tree; holds groups only
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Root {
    groups: Children<Group>,
}

impl Root {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ChildOperation<Group> for Root {
    fn children(&self) -> &Children<Group> {
        &self.groups
    }

    fn children_mut(&mut self) -> &mut Children<Group> {
        &mut self.groups
    }
}

/// Container of students with its own task list
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    id: GroupId,
    name: Name,
    students: Children<Student>,
    tasks: TaskList,
}

impl Group {
    #[must_use]
    pub fn new(name: Name, id: GroupId) -> Self {
        Self {
            id,
            name,
            students: Children::new(),
            tasks: TaskList::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Copy of this group under a new name, keeping students and tasks
    #[must_use]
    pub fn renamed(&self, name: Name) -> Self {
        Self {
            name,
            ..self.clone()
        }
    }
}

impl TreeChild for Group {
    type Id = GroupId;

    fn id(&self) -> &GroupId {
        &self.id
    }
}

impl ChildOperation<Student> for Group {
    fn children(&self) -> &Children<Student> {
        &self.students
    }

    fn children_mut(&mut self) -> &mut Children<Student> {
        &mut self.students
    }
}

impl TaskOperation for Group {
    fn task_list(&self) -> &TaskList {
        &self.tasks
    }

    fn task_list_mut(&mut self) -> &mut TaskList {
        &mut self.tasks
    }
}

impl Display for Group {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

/// Leaf node with a task list
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    id: StudentId,
    name: Name,
    tasks: TaskList,
}

impl Student {
    #[must_use]
    pub fn new(name: Name, id: StudentId) -> Self {
        Self {
            id,
            name,
            tasks: TaskList::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Copy of this student under a new name, keeping tasks
    #[must_use]
    pub fn renamed(&self, name: Name) -> Self {
        Self {
            name,
            ..self.clone()
        }
    }
}

impl TreeChild for Student {
    type Id = StudentId;

    fn id(&self) -> &StudentId {
        &self.id
    }
}

impl TaskOperation for Student {
    fn task_list(&self) -> &TaskList {
        &self.tasks
    }

    fn task_list_mut(&mut self) -> &mut TaskList {
        &mut self.tasks
    }
}

impl Display for Student {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}
