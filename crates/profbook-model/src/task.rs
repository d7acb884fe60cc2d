//! Tasks and task lists
//!
//! A [`Task`] is either a [`ToDo`] or a [`Deadline`]. A [`TaskList`] keeps
//! tasks in insertion order, addresses them by 1-based index and refuses
//! structural duplicates.

use crate::error::TaskError;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Format used to parse and display deadline due times
pub const DUE_FORMAT: &str = "%Y-%m-%d %H:%M";

fn checked_description(description: impl Into<String>) -> Result<String, TaskError> {
    let description = description.into();
    let trimmed = description.trim();
    if trimmed.is_empty() {
        return Err(TaskError::BlankDescription);
    }
    Ok(trimmed.to_owned())
}

fn status_icon(done: bool) -> &'static str {
    if done {
        "X"
    } else {
        " "
    }
}

/// Task with only a description
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToDo {
    description: String,
    is_done: bool,
}

impl ToDo {
    /// Create an unfinished to-do
    ///
    /// # Errors
    /// Returns [`TaskError::BlankDescription`] for blank text.
    pub fn new(description: impl Into<String>) -> Result<Self, TaskError> {
        Ok(Self {
            description: checked_description(description)?,
            is_done: false,
        })
    }
}

/// Task with a due time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deadline {
    description: String,
    due: NaiveDateTime,
    is_done: bool,
}

impl Deadline {
    /// Create an unfinished deadline
    ///
    /// # Errors
    /// Returns [`TaskError::BlankDescription`] for blank text.
    pub fn new(description: impl Into<String>, due: NaiveDateTime) -> Result<Self, TaskError> {
        Ok(Self {
            description: checked_description(description)?,
            due,
            is_done: false,
        })
    }

    /// Parse due text in [`DUE_FORMAT`]
    ///
    /// # Errors
    /// Returns [`TaskError::InvalidDue`] if the text does not match.
    pub fn parse_due(text: &str) -> Result<NaiveDateTime, TaskError> {
        NaiveDateTime::parse_from_str(text.trim(), DUE_FORMAT)
            .map_err(|_| TaskError::InvalidDue(text.to_owned()))
    }

    /// Due time
    #[inline]
    #[must_use]
    pub fn due(&self) -> NaiveDateTime {
        self.due
    }
}

// Duplicate detection is structural and ignores completion.
impl PartialEq for ToDo {
    fn eq(&self, other: &Self) -> bool {
        self.description == other.description
    }
}

impl Eq for ToDo {}

impl PartialEq for Deadline {
    fn eq(&self, other: &Self) -> bool {
        self.description == other.description && self.due == other.due
    }
}

impl Eq for Deadline {}

/// A task owned by a group or a student
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Task {
    ToDo(ToDo),
    Deadline(Deadline),
}

impl Task {
    /// Create a to-do task
    ///
    /// # Errors
    /// Returns [`TaskError::BlankDescription`] for blank text.
    pub fn todo(description: impl Into<String>) -> Result<Self, TaskError> {
        ToDo::new(description).map(Self::ToDo)
    }

    /// Create a deadline task
    ///
    /// # Errors
    /// Returns [`TaskError::BlankDescription`] for blank text.
    pub fn deadline(description: impl Into<String>, due: NaiveDateTime) -> Result<Self, TaskError> {
        Deadline::new(description, due).map(Self::Deadline)
    }

    #[must_use]
    pub fn description(&self) -> &str {
        match self {
            Self::ToDo(t) => &t.description,
            Self::Deadline(d) => &d.description,
        }
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        match self {
            Self::ToDo(t) => t.is_done,
            Self::Deadline(d) => d.is_done,
        }
    }

    /// Due time, for deadlines
    #[must_use]
    pub fn due(&self) -> Option<NaiveDateTime> {
        match self {
            Self::ToDo(_) => None,
            Self::Deadline(d) => Some(d.due),
        }
    }

    fn set_done(&mut self, done: bool) {
        match self {
            Self::ToDo(t) => t.is_done = done,
            Self::Deadline(d) => d.is_done = done,
        }
    }

    /// Mark as completed
    pub fn mark(&mut self) {
        self.set_done(true);
    }

    /// Mark as not completed
    pub fn unmark(&mut self) {
        self.set_done(false);
    }
}

impl Display for Task {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::ToDo(t) => write!(f, "[T][{}] {}", status_icon(t.is_done), t.description),
            Self::Deadline(d) => write!(
                f,
                "[D][{}] {}(by: {})",
                status_icon(d.is_done),
                d.description,
                d.due.format(DUE_FORMAT)
            ),
        }
    }
}

impl From<ToDo> for Task {
    fn from(todo: ToDo) -> Self {
        Self::ToDo(todo)
    }
}

impl From<Deadline> for Task {
    fn from(deadline: Deadline) -> Self {
        Self::Deadline(deadline)
    }
}

/// Ordered task collection addressed by 1-based index
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tasks
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Whether `index` lies in `[1, len]`
    #[inline]
    #[must_use]
    pub fn is_valid_index(&self, index: usize) -> bool {
        (1..=self.tasks.len()).contains(&index)
    }

    fn check_index(&self, index: usize) -> Result<usize, TaskError> {
        if self.is_valid_index(index) {
            Ok(index - 1)
        } else {
            Err(TaskError::NoSuch {
                index,
                size: self.tasks.len(),
            })
        }
    }

    /// Whether a structurally equal task is present
    #[must_use]
    pub fn contains(&self, task: &Task) -> bool {
        self.tasks.contains(task)
    }

    /// Append a task
    ///
    /// # Errors
    /// Returns [`TaskError::Duplicate`] if an equal task is already present;
    /// the list is unchanged.
    pub fn add(&mut self, task: Task) -> Result<(), TaskError> {
        if self.contains(&task) {
            return Err(TaskError::Duplicate(task));
        }
        self.tasks.push(task);
        Ok(())
    }

    /// Remove and return the task at a 1-based index
    ///
    /// # Errors
    /// Returns [`TaskError::NoSuch`] outside `[1, len]`.
    pub fn remove(&mut self, index: usize) -> Result<Task, TaskError> {
        let i = self.check_index(index)?;
        Ok(self.tasks.remove(i))
    }

    /// Task at a 1-based index
    ///
    /// # Errors
    /// Returns [`TaskError::NoSuch`] outside `[1, len]`.
    pub fn get(&self, index: usize) -> Result<&Task, TaskError> {
        let i = self.check_index(index)?;
        Ok(&self.tasks[i])
    }

    /// Mark the task at a 1-based index as done
    ///
    /// # Errors
    /// Returns [`TaskError::NoSuch`] outside `[1, len]`.
    pub fn mark(&mut self, index: usize) -> Result<&Task, TaskError> {
        let i = self.check_index(index)?;
        self.tasks[i].mark();
        Ok(&self.tasks[i])
    }

    /// Mark the task at a 1-based index as not done
    ///
    /// # Errors
    /// Returns [`TaskError::NoSuch`] outside `[1, len]`.
    pub fn unmark(&mut self, index: usize) -> Result<&Task, TaskError> {
        let i = self.check_index(index)?;
        self.tasks[i].unmark();
        Ok(&self.tasks[i])
    }

    /// Tasks whose description contains `keyword`, ignoring case, with their 1-based index
    #[must_use]
    pub fn find(&self, keyword: &str) -> Vec<(usize, &Task)> {
        let needle = keyword.trim().to_lowercase();
        self.tasks
            .iter()
            .enumerate()
            .filter(|(_, t)| t.description().to_lowercase().contains(&needle))
            .map(|(i, t)| (i + 1, t))
            .collect()
    }

    /// All tasks in insertion order
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Task] {
        &self.tasks
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }
}

impl Display for TaskList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let items: Vec<String> = self.tasks.iter().map(ToString::to_string).collect();
        write!(f, "[{}]", items.join(", "))
    }
}
