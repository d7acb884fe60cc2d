//! Process state: the tree root plus the current path
//!
//! [`State`] is passed by reference into every command. It is single-writer:
//! holding `&mut State` is the only way to mutate the tree, so no locking is
//! involved. A multi-user front end would wrap it in one mutex.

use crate::config::StateConfig;
use crate::error::{Operation, StateError};
use crate::manager::{self, BulkOutcome, BulkScope};
use crate::view::{AnyChildView, ChildView, NodeRef, TaskView};
use profbook_model::{Group, Root, Student, Task};
use profbook_path::{AbsolutePath, Identifier, RelativePath};

/// Tree root and current working path
#[derive(Debug, Clone, Default)]
pub struct State {
    root: Root,
    current: AbsolutePath,
    config: StateConfig,
}

impl State {
    /// Empty tree, current path at the root
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Existing tree, current path at the root
    #[must_use]
    pub fn with_root(root: Root) -> Self {
        Self {
            root,
            ..Self::default()
        }
    }

    /// Existing tree with configuration applied
    ///
    /// The initial path is not required to exist yet.
    #[must_use]
    pub fn with_config(config: StateConfig, root: Root) -> Self {
        tracing::debug!(initial_path = %config.initial_path, "state created");
        Self {
            root,
            current: config.initial_path.clone(),
            config,
        }
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &StateConfig {
        &self.config
    }

    #[inline]
    #[must_use]
    pub fn current_path(&self) -> &AbsolutePath {
        &self.current
    }

    /// Replace the current path without checking the tree
    pub fn set_current_path(&mut self, path: AbsolutePath) {
        tracing::debug!(from = %self.current, to = %path, "current path set");
        self.current = path;
    }

    /// Resolve `relative` against the current path
    ///
    /// # Errors
    /// Returns [`StateError::Path`] for an out-of-bounds or ill-typed resolution.
    pub fn resolve_from_current(&self, relative: &RelativePath) -> Result<AbsolutePath, StateError> {
        Ok(self.current.resolve(relative)?)
    }

    #[inline]
    #[must_use]
    pub fn root(&self) -> &Root {
        &self.root
    }

    #[inline]
    pub fn root_mut(&mut self) -> &mut Root {
        &mut self.root
    }

    /// # Errors
    /// See [`manager::locate`].
    pub fn locate(&self, path: &AbsolutePath) -> Result<NodeRef<'_>, StateError> {
        manager::locate(&self.root, path)
    }

    /// # Errors
    /// See [`manager::child_view`].
    pub fn child_view(&mut self, path: &AbsolutePath) -> Result<AnyChildView<'_>, StateError> {
        manager::child_view(&mut self.root, path)
    }

    #[must_use]
    pub fn root_child_view(&mut self) -> ChildView<'_, Group> {
        manager::root_child_view(&mut self.root)
    }

    /// # Errors
    /// See [`manager::group_child_view`].
    pub fn group_child_view(&mut self, path: &AbsolutePath) -> Result<ChildView<'_, Student>, StateError> {
        manager::group_child_view(&mut self.root, path)
    }

    /// # Errors
    /// See [`manager::task_view`].
    pub fn task_view(&mut self, path: &AbsolutePath) -> Result<TaskView<'_>, StateError> {
        manager::task_view(&mut self.root, path)
    }

    /// # Errors
    /// See [`manager::all_children_of`].
    pub fn all_children_of(&self, path: &AbsolutePath) -> Result<Vec<(Identifier, NodeRef<'_>)>, StateError> {
        manager::all_children_of(&self.root, path)
    }

    /// Whether a node exists at `path`
    #[must_use]
    pub fn has_path(&self, path: &AbsolutePath) -> bool {
        self.locate(path).is_ok()
    }

    /// Whether the node at `path` exists and owns a task list
    #[must_use]
    pub fn has_task_list_in_path(&self, path: &AbsolutePath) -> bool {
        self.locate(path)
            .is_ok_and(|node| node.as_task_owner().is_some())
    }

    /// Whether the node at `path` exists and can hold children
    #[must_use]
    pub fn has_children_in_path(&self, path: &AbsolutePath) -> bool {
        self.locate(path).is_ok_and(|node| node.is_child_container())
    }

    /// Move the current path to an existing root or group
    ///
    /// # Errors
    /// - [`StateError::Path`] if resolution fails
    /// - [`StateError::PathNotFound`] if nothing is there
    /// - [`StateError::UnsupportedOperation`] for a student
    pub fn change_directory(&mut self, relative: &RelativePath) -> Result<&AbsolutePath, StateError> {
        let target = self.resolve_from_current(relative)?;
        if !self.locate(&target)?.is_child_container() {
            return Err(StateError::unsupported(&target, Operation::ChangeDirectory));
        }
        self.set_current_path(target);
        Ok(&self.current)
    }

    /// Add `task` at a path relative to the current one, per `scope`
    ///
    /// Bulk scopes are not transactional; see [`manager::apply_task_to`].
    ///
    /// # Errors
    /// - [`StateError::BulkLimitExceeded`] if the configured limit would be exceeded
    /// - any error from [`manager::bulk_targets`] or [`manager::apply_task_to`]
    pub fn apply_task(
        &mut self,
        relative: &RelativePath,
        scope: BulkScope,
        task: &Task,
    ) -> Result<BulkOutcome, StateError> {
        let path = self.resolve_from_current(relative)?;
        let targets = manager::bulk_targets(&self.root, &path, scope)?;
        if let Some(limit) = self.config.max_bulk_targets {
            if targets.len() > limit {
                return Err(StateError::BulkLimitExceeded {
                    path,
                    targets: targets.len(),
                    limit,
                });
            }
        }
        tracing::debug!(path = %path, ?scope, targets = targets.len(), "applying task");
        manager::apply_task_to(&mut self.root, &targets, task)
    }

    /// Move a student into another group; both paths are relative to the current one
    ///
    /// If the current path was inside the moved student it follows the student.
    ///
    /// # Errors
    /// See [`manager::move_student`].
    pub fn move_student(&mut self, from: &RelativePath, to: &RelativePath) -> Result<AbsolutePath, StateError> {
        let source = self.resolve_from_current(from)?;
        let destination = self.resolve_from_current(to)?;
        let new_path = manager::move_student(&mut self.root, &source, &destination)?;
        if self.current == source {
            self.set_current_path(new_path.clone());
        }
        Ok(new_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use profbook_model::sample::sample_root;

    fn rel(text: &str) -> RelativePath {
        text.parse().unwrap()
    }

    #[test]
    fn new_state_starts_at_empty_root() {
        let state = State::new();
        assert!(state.current_path().is_root());
        assert_eq!(state.all_children_of(&AbsolutePath::Root).unwrap().len(), 0);
    }

    #[test]
    fn set_current_path_does_not_check_existence() {
        let mut state = State::new();
        let ghost: AbsolutePath = "~/grp-404".parse().unwrap();
        state.set_current_path(ghost.clone());
        assert_eq!(state.current_path(), &ghost);
        assert!(!state.has_path(&ghost));
    }

    #[test]
    fn change_directory_only_into_containers() {
        let mut state = State::with_root(sample_root().unwrap());
        assert_eq!(state.change_directory(&rel("grp-001")).unwrap().to_string(), "~/grp-001");

        assert!(matches!(
            state.change_directory(&rel("stu-001")),
            Err(StateError::UnsupportedOperation { operation: Operation::ChangeDirectory, .. })
        ));
        assert!(matches!(
            state.change_directory(&rel("../grp-404")),
            Err(StateError::PathNotFound(_))
        ));
        assert_eq!(state.current_path().to_string(), "~/grp-001");
    }

    #[test]
    fn path_queries() {
        let state = State::with_root(sample_root().unwrap());
        let group: AbsolutePath = "~/grp-001".parse().unwrap();
        let student: AbsolutePath = "~/grp-001/stu-001".parse().unwrap();

        assert!(state.has_task_list_in_path(&group));
        assert!(state.has_task_list_in_path(&student));
        assert!(!state.has_task_list_in_path(&AbsolutePath::Root));
        assert!(state.has_children_in_path(&AbsolutePath::Root));
        assert!(!state.has_children_in_path(&student));
        assert!(!state.has_children_in_path(&"~/grp-404".parse().unwrap()));
    }

    #[test]
    fn bulk_limit_is_enforced_before_mutation() {
        let config = StateConfig::new().with_max_bulk_targets(1);
        let mut state = State::with_config(config, sample_root().unwrap());
        let task = Task::todo("Survey").unwrap();

        let err = state
            .apply_task(&rel("~"), BulkScope::AllChildrenOfRoot, &task)
            .unwrap_err();
        assert!(matches!(err, StateError::BulkLimitExceeded { targets: 2, limit: 1, .. }));
        let mut view = state.task_view(&"~/grp-001".parse().unwrap()).unwrap();
        assert!(!view.has_task(&task));
        assert!(view.add_task(task).is_ok());
    }

    #[test]
    fn move_student_updates_current_path() {
        let mut state = State::with_root(sample_root().unwrap());
        state.set_current_path("~/grp-001/stu-002".parse().unwrap());
        let moved = state.move_student(&rel("."), &rel("~/grp-002")).unwrap();
        assert_eq!(moved.to_string(), "~/grp-002/stu-002");
        assert_eq!(state.current_path(), &moved);
    }
}
