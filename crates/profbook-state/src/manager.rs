//! Locating nodes and handing out capability views
//!
//! All functions here take the tree root explicitly and an already-resolved
//! [`AbsolutePath`]. Syntactic checks happen during resolution; these
//! functions only answer "does the node exist" and "does it support this".
//!
//! Single-target operations either succeed or leave the tree unchanged.
//! Bulk operations ([`apply_task`]) are not transactional: children updated
//! before a failing child keep their change.

use crate::error::{Operation, StateError};
use crate::view::{AnyChildView, ChildView, NodeMut, NodeRef, TaskView};
use profbook_model::{ChildError, ChildOperation, Group, Root, Student, Task, TreeChild};
use profbook_path::{AbsolutePath, Identifier};
use std::str::FromStr;

/// Which nodes a bulk-capable command applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BulkScope {
    /// Only the node at the path
    #[default]
    Single,
    /// Every student of the group at the path
    AllChildrenOfGroup,
    /// Every group under the root
    AllChildrenOfRoot,
}

/// Unrecognised bulk scope flag
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown bulk scope {0:?} (expected allStu or allGrp)")]
pub struct ScopeParseError(pub String);

impl FromStr for BulkScope {
    type Err = ScopeParseError;

    /// Parse the command-line flags `allStu` and `allGrp`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" => Ok(Self::Single),
            "allStu" => Ok(Self::AllChildrenOfGroup),
            "allGrp" => Ok(Self::AllChildrenOfRoot),
            other => Err(ScopeParseError(other.to_owned())),
        }
    }
}

/// Result of a bulk-capable operation
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BulkOutcome {
    /// Paths that were updated, in the order they were processed
    pub applied: Vec<AbsolutePath>,
}

impl BulkOutcome {
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.applied.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.applied.is_empty()
    }
}

/// Find the node at `path`
///
/// # Errors
/// Returns [`StateError::PathNotFound`] carrying the full requested path.
pub fn locate<'a>(root: &'a Root, path: &AbsolutePath) -> Result<NodeRef<'a>, StateError> {
    let not_found = || StateError::PathNotFound(path.clone());
    match path {
        AbsolutePath::Root => Ok(NodeRef::Root(root)),
        AbsolutePath::Group(g) => root.get_child(g).map(NodeRef::Group).ok_or_else(not_found),
        AbsolutePath::Student(g, s) => root
            .get_child(g)
            .and_then(|group| group.get_child(s))
            .map(NodeRef::Student)
            .ok_or_else(not_found),
    }
}

/// Find the node at `path` for mutation
///
/// # Errors
/// Returns [`StateError::PathNotFound`] carrying the full requested path.
pub fn locate_mut<'a>(root: &'a mut Root, path: &AbsolutePath) -> Result<NodeMut<'a>, StateError> {
    let not_found = || StateError::PathNotFound(path.clone());
    match path {
        AbsolutePath::Root => Ok(NodeMut::Root(root)),
        AbsolutePath::Group(g) => root
            .get_child_mut(g)
            .map(NodeMut::Group)
            .ok_or_else(not_found),
        AbsolutePath::Student(g, s) => root
            .get_child_mut(g)
            .and_then(|group| group.get_child_mut(s))
            .map(NodeMut::Student)
            .ok_or_else(not_found),
    }
}

/// Child-management view of the root or a group
///
/// # Errors
/// - [`StateError::PathNotFound`] if nothing is at `path`
/// - [`StateError::UnsupportedOperation`] for a student
pub fn child_view<'a>(root: &'a mut Root, path: &AbsolutePath) -> Result<AnyChildView<'a>, StateError> {
    locate_mut(root, path)?
        .as_child_container(path.clone())
        .ok_or_else(|| StateError::unsupported(path, Operation::Children))
}

/// Group-management view of the root
#[must_use]
pub fn root_child_view(root: &mut Root) -> ChildView<'_, Group> {
    ChildView::new(AbsolutePath::Root, root)
}

/// Student-management view of the group at `path`
///
/// # Errors
/// - [`StateError::UnsupportedOperation`] if `path` is not group-level
/// - [`StateError::PathNotFound`] if the group does not exist
pub fn group_child_view<'a>(
    root: &'a mut Root,
    path: &AbsolutePath,
) -> Result<ChildView<'a, Student>, StateError> {
    let AbsolutePath::Group(g) = path else {
        return Err(StateError::unsupported(path, Operation::Children));
    };
    let group = root
        .get_child_mut(g)
        .ok_or_else(|| StateError::PathNotFound(path.clone()))?;
    Ok(ChildView::new(path.clone(), group))
}

/// Task-management view of a group or student
///
/// # Errors
/// - [`StateError::PathNotFound`] if nothing is at `path`
/// - [`StateError::UnsupportedOperation`] for the root
pub fn task_view<'a>(root: &'a mut Root, path: &AbsolutePath) -> Result<TaskView<'a>, StateError> {
    locate_mut(root, path)?
        .as_task_owner(path.clone())
        .ok_or_else(|| StateError::unsupported(path, Operation::Tasks))
}

/// Direct children of the node at `path`, in insertion order
///
/// # Errors
/// - [`StateError::PathNotFound`] if nothing is at `path`
/// - [`StateError::UnsupportedOperation`] for a student
pub fn all_children_of<'a>(
    root: &'a Root,
    path: &AbsolutePath,
) -> Result<Vec<(Identifier, NodeRef<'a>)>, StateError> {
    match locate(root, path)? {
        NodeRef::Root(r) => Ok(r
            .children()
            .iter()
            .map(|(id, group)| (Identifier::Group(id.clone()), NodeRef::Group(group)))
            .collect()),
        NodeRef::Group(g) => Ok(g
            .children()
            .iter()
            .map(|(id, student)| (Identifier::Student(id.clone()), NodeRef::Student(student)))
            .collect()),
        NodeRef::Student(_) => Err(StateError::unsupported(path, Operation::Children)),
    }
}

/// Paths a bulk-capable operation at `path` would touch
///
/// # Errors
/// - [`StateError::UnsupportedOperation`] if the scope does not fit the path depth
/// - [`StateError::PathNotFound`] if the container does not exist
pub fn bulk_targets(
    root: &Root,
    path: &AbsolutePath,
    scope: BulkScope,
) -> Result<Vec<AbsolutePath>, StateError> {
    match scope {
        BulkScope::Single => Ok(vec![path.clone()]),
        BulkScope::AllChildrenOfGroup if !path.is_group_level() => {
            Err(StateError::unsupported(path, Operation::BulkGroup))
        }
        BulkScope::AllChildrenOfRoot if !path.is_root() => {
            Err(StateError::unsupported(path, Operation::BulkRoot))
        }
        BulkScope::AllChildrenOfGroup | BulkScope::AllChildrenOfRoot => all_children_of(root, path)?
            .iter()
            .map(|(id, _)| path.child(id).map_err(StateError::from))
            .collect(),
    }
}

/// Add `task` to every path in `targets`, in order
///
/// Stops at the first failure and returns it. Targets processed before the
/// failure keep the task.
///
/// # Errors
/// The first [`StateError`] raised by a target.
pub fn apply_task_to(root: &mut Root, targets: &[AbsolutePath], task: &Task) -> Result<BulkOutcome, StateError> {
    let mut outcome = BulkOutcome::default();
    for target in targets {
        let result = task_view(root, target).and_then(|mut view| {
            view.add_task(task.clone()).map_err(StateError::from)
        });
        if let Err(err) = result {
            if !outcome.is_empty() {
                tracing::warn!(
                    failed_at = %target,
                    applied = outcome.len(),
                    total = targets.len(),
                    "bulk task add stopped part-way; earlier targets keep the task"
                );
            }
            return Err(err);
        }
        tracing::debug!(path = %target, "task added");
        outcome.applied.push(target.clone());
    }
    Ok(outcome)
}

/// Add `task` at `path` according to `scope`
///
/// # Errors
/// See [`bulk_targets`] and [`apply_task_to`].
pub fn apply_task(
    root: &mut Root,
    path: &AbsolutePath,
    scope: BulkScope,
    task: &Task,
) -> Result<BulkOutcome, StateError> {
    let targets = bulk_targets(root, path, scope)?;
    apply_task_to(root, &targets, task)
}

/// Move the student at `from` into the group at `to`
///
/// The destination is checked before the student is detached, so a failed
/// move leaves the tree unchanged. Returns the student's new path.
///
/// # Errors
/// - [`StateError::UnsupportedOperation`] unless `from` is student-level and `to` is group-level
/// - [`StateError::PathNotFound`] if either node is missing
/// - [`StateError::Child`] with [`ChildError::Duplicate`] if the destination already has that id
pub fn move_student(
    root: &mut Root,
    from: &AbsolutePath,
    to: &AbsolutePath,
) -> Result<AbsolutePath, StateError> {
    let AbsolutePath::Student(source_group, student_id) = from else {
        return Err(StateError::unsupported(from, Operation::MoveStudent));
    };
    let AbsolutePath::Group(dest_group) = to else {
        return Err(StateError::unsupported(to, Operation::MoveStudent));
    };

    locate(root, from)?;
    let destination = locate(root, to)?
        .as_group()
        .ok_or_else(|| StateError::PathNotFound(to.clone()))?;
    if destination.has_child(student_id) {
        return Err(ChildError::Duplicate(student_id.clone().into()).into());
    }

    let student = root
        .get_child_mut(source_group)
        .ok_or_else(|| StateError::PathNotFound(from.clone()))?
        .delete_child(student_id)?;
    let new_path = to.child(&student.id().clone().into())?;
    root.get_child_mut(dest_group)
        .ok_or_else(|| StateError::PathNotFound(to.clone()))?
        .add_child(student)?;

    tracing::debug!(from = %from, to = %new_path, "student moved");
    Ok(new_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use profbook_model::sample::sample_root;
    use profbook_model::{Name, TaskOperation};
    use profbook_path::{GroupId, StudentId};

    fn path(text: &str) -> AbsolutePath {
        text.parse().unwrap()
    }

    #[test]
    fn locate_known_and_unknown() {
        let root = sample_root().unwrap();
        assert!(matches!(locate(&root, &AbsolutePath::Root), Ok(NodeRef::Root(_))));

        let student = locate(&root, &path("~/grp-001/stu-003")).unwrap();
        assert_eq!(student.as_student().unwrap().name().as_str(), "Raman");

        let missing = path("~/grp-001/stu-009");
        assert_eq!(
            locate(&root, &missing).unwrap_err(),
            StateError::PathNotFound(missing)
        );
    }

    #[test]
    fn locate_reports_full_path_when_prefix_missing() {
        let root = sample_root().unwrap();
        let missing = path("~/grp-099/stu-001");
        assert_eq!(
            locate(&root, &missing).unwrap_err(),
            StateError::PathNotFound(missing)
        );
    }

    #[test]
    fn views_follow_node_kind() {
        let mut root = sample_root().unwrap();

        assert!(matches!(
            child_view(&mut root, &AbsolutePath::Root),
            Ok(AnyChildView::Groups(_))
        ));
        assert!(matches!(
            child_view(&mut root, &path("~/grp-001")),
            Ok(AnyChildView::Students(_))
        ));
        assert!(matches!(
            child_view(&mut root, &path("~/grp-001/stu-001")),
            Err(StateError::UnsupportedOperation { operation: Operation::Children, .. })
        ));

        assert!(matches!(
            task_view(&mut root, &AbsolutePath::Root),
            Err(StateError::UnsupportedOperation { operation: Operation::Tasks, .. })
        ));
        assert_eq!(task_view(&mut root, &path("~/grp-002")).unwrap().size(), 10);
    }

    #[test]
    fn group_child_view_requires_group_path() {
        let mut root = sample_root().unwrap();
        assert!(matches!(
            group_child_view(&mut root, &AbsolutePath::Root),
            Err(StateError::UnsupportedOperation { .. })
        ));
        assert!(matches!(
            group_child_view(&mut root, &path("~/grp-007")),
            Err(StateError::PathNotFound(_))
        ));

        let mut view = group_child_view(&mut root, &path("~/grp-001")).unwrap();
        let newcomer = Student::new(Name::new("Newcomer").unwrap(), StudentId::parse("stu-011").unwrap());
        view.add_child(newcomer).unwrap();
        assert_eq!(view.num_children(), 6);
    }

    #[test]
    fn all_children_in_insertion_order() {
        let root = sample_root().unwrap();
        let ids: Vec<String> = all_children_of(&root, &path("~/grp-002"))
            .unwrap()
            .into_iter()
            .map(|(id, _)| id.to_string())
            .collect();
        assert_eq!(ids, vec!["stu-006", "stu-007", "stu-008", "stu-009", "stu-010"]);

        assert!(matches!(
            all_children_of(&root, &path("~/grp-002/stu-006")),
            Err(StateError::UnsupportedOperation { .. })
        ));
    }

    #[test]
    fn bulk_scope_parsing() {
        assert_eq!("allStu".parse::<BulkScope>().unwrap(), BulkScope::AllChildrenOfGroup);
        assert_eq!("allGrp".parse::<BulkScope>().unwrap(), BulkScope::AllChildrenOfRoot);
        assert_eq!("".parse::<BulkScope>().unwrap(), BulkScope::Single);
        assert!("everyone".parse::<BulkScope>().is_err());
    }

    #[test]
    fn bulk_scope_must_match_depth() {
        let mut root = sample_root().unwrap();
        let task = Task::todo("Read chapter 3").unwrap();
        assert!(matches!(
            apply_task(&mut root, &AbsolutePath::Root, BulkScope::AllChildrenOfGroup, &task),
            Err(StateError::UnsupportedOperation { operation: Operation::BulkGroup, .. })
        ));
        assert!(matches!(
            apply_task(&mut root, &path("~/grp-001"), BulkScope::AllChildrenOfRoot, &task),
            Err(StateError::UnsupportedOperation { operation: Operation::BulkRoot, .. })
        ));
    }

    #[test]
    fn bulk_apply_to_all_groups() {
        let mut root = sample_root().unwrap();
        let task = Task::todo("Mid-term feedback").unwrap();
        let outcome = apply_task(&mut root, &AbsolutePath::Root, BulkScope::AllChildrenOfRoot, &task).unwrap();
        assert_eq!(outcome.applied, vec![path("~/grp-001"), path("~/grp-002")]);

        let g1 = root.get_child(&GroupId::parse("grp-001").unwrap()).unwrap();
        assert!(g1.has_task(&task));
    }

    #[test]
    fn move_student_between_groups() {
        let mut root = sample_root().unwrap();
        let new_path = move_student(&mut root, &path("~/grp-001/stu-001"), &path("~/grp-002")).unwrap();
        assert_eq!(new_path, path("~/grp-002/stu-001"));
        assert!(locate(&root, &path("~/grp-001/stu-001")).is_err());
        assert!(locate(&root, &new_path).is_ok());
    }

    #[test]
    fn failed_move_leaves_tree_unchanged() {
        let mut root = sample_root().unwrap();
        let before = root.clone();

        let err = move_student(&mut root, &path("~/grp-001/stu-001"), &path("~/grp-001")).unwrap_err();
        assert!(matches!(err, StateError::Child(ChildError::Duplicate(_))));

        let err = move_student(&mut root, &path("~/grp-001/stu-001"), &path("~/grp-404")).unwrap_err();
        assert!(matches!(err, StateError::PathNotFound(_)));

        let err = move_student(&mut root, &path("~/grp-001"), &path("~/grp-002")).unwrap_err();
        assert!(matches!(err, StateError::UnsupportedOperation { .. }));

        assert_eq!(root, before);
    }
}
