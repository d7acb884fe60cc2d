use pretty_assertions::assert_eq;
use profbook_model::{ChildOperation, TaskOperation, TreeChild};
use profbook_path::{AbsolutePath, GroupId, Identifier, StudentId};
use profbook_model::sample::sample_root;
use profbook_state::{
    all_children_of, locate, AnyChildView, BulkScope, ErrorKind, NodeRef, State, StateConfig,
    StateError,
};
use profbook_test_utils::{
    abs, deadline, empty_state, group, rel, sample_state, student, todo,
};

#[test]
fn test_create_group_student_and_task_scenario() {
    let mut state = empty_state();

    match state.child_view(&AbsolutePath::Root).unwrap() {
        AnyChildView::Groups(mut groups) => groups.add_child(group("grp-001", "Group One")).unwrap(),
        AnyChildView::Students(_) => panic!("root must hold groups"),
    }

    state.change_directory(&rel("grp-001")).unwrap();
    let here = state.current_path().clone();
    state
        .group_child_view(&here)
        .unwrap()
        .add_child(student("stu-001", "Tejas"))
        .unwrap();

    let target = state.resolve_from_current(&rel("stu-001")).unwrap();
    assert_eq!(target, abs("~/grp-001/stu-001"));
    state.task_view(&target).unwrap().add_task(todo("Submit report")).unwrap();

    let children = all_children_of(state.root(), &abs("/grp-001")).unwrap();
    assert_eq!(children.len(), 1);
    assert_eq!(
        children[0].0,
        Identifier::Student(StudentId::parse("stu-001").unwrap())
    );
    let NodeRef::Student(s) = children[0].1 else {
        panic!("child of a group must be a student");
    };
    assert_eq!(s.all_tasks().len(), 1);

    let err = state
        .task_view(&target)
        .unwrap()
        .add_task(todo("Submit report"))
        .unwrap_err();
    assert_eq!(StateError::from(err).kind(), ErrorKind::DuplicateTask);
    assert_eq!(state.task_view(&target).unwrap().size(), 1);
}

#[test]
fn test_bulk_deadline_is_not_transactional() {
    let mut state = sample_state();
    let task = deadline("Assignment 1", "2023-11-15 10:00");

    // stu-003 is the third student of grp-001 and already has the deadline
    state
        .task_view(&abs("~/grp-001/stu-003"))
        .unwrap()
        .add_task(task.clone())
        .unwrap();

    state.change_directory(&rel("grp-001")).unwrap();
    let err = state
        .apply_task(&rel("."), BulkScope::AllChildrenOfGroup, &task)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DuplicateTask);

    let root = state.root();
    for (id, expected) in [
        ("stu-001", true),
        ("stu-002", true),
        ("stu-003", true),
        ("stu-004", false),
        ("stu-005", false),
    ] {
        let path = abs(&format!("~/grp-001/{id}"));
        let node = locate(root, &path).unwrap();
        let has = node.as_task_owner().unwrap().has_task(&task);
        assert_eq!(has, expected, "{id}");
    }
    assert_eq!(
        locate(root, &abs("~/grp-001/stu-003"))
            .unwrap()
            .as_task_owner()
            .unwrap()
            .task_list_size(),
        1
    );
}

#[test]
fn test_bulk_deadline_to_every_student() {
    let mut state = sample_state();
    let task = deadline("Project Presentation", "2023-12-05 14:00");

    let outcome = state
        .apply_task(&rel("grp-002"), BulkScope::AllChildrenOfGroup, &task)
        .unwrap();
    let applied: Vec<String> = outcome.applied.iter().map(ToString::to_string).collect();
    assert_eq!(
        applied,
        vec![
            "~/grp-002/stu-006",
            "~/grp-002/stu-007",
            "~/grp-002/stu-008",
            "~/grp-002/stu-009",
            "~/grp-002/stu-010",
        ]
    );
    // The group itself is not a target
    assert!(!state.task_view(&abs("~/grp-002")).unwrap().has_task(&task));
}

#[test]
fn test_bulk_on_empty_group_applies_nothing() {
    let mut state = sample_state();
    state.root_child_view().add_child(group("grp-003", "Empty")).unwrap();
    let outcome = state
        .apply_task(&rel("grp-003"), BulkScope::AllChildrenOfGroup, &todo("Nothing"))
        .unwrap();
    assert!(outcome.is_empty());
}

#[test]
fn test_error_kinds_across_boundary() {
    let mut state = sample_state();

    let err = state.resolve_from_current(&rel("..")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidPath);

    let err = state.task_view(&AbsolutePath::Root).err().unwrap();
    assert_eq!(err.kind(), ErrorKind::UnsupportedOperation);

    let err = state.child_view(&abs("~/grp-001/stu-001")).err().unwrap();
    assert_eq!(err.kind(), ErrorKind::UnsupportedOperation);

    let err = state.task_view(&abs("~/grp-001/stu-404")).err().unwrap();
    assert_eq!(err.kind(), ErrorKind::PathNotFound);

    let err = state
        .root_child_view()
        .add_child(group("grp-001", "Clash"))
        .unwrap_err();
    assert_eq!(StateError::from(err).kind(), ErrorKind::DuplicateChild);

    let err = state
        .group_child_view(&abs("~/grp-001"))
        .unwrap()
        .delete_child(&StudentId::parse("stu-404").unwrap())
        .unwrap_err();
    assert_eq!(StateError::from(err).kind(), ErrorKind::NoSuchChild);

    let mut tasks = state.task_view(&abs("~/grp-002")).unwrap();
    let size = tasks.size();
    for index in [0, size + 1] {
        let err = tasks.delete_task(index).unwrap_err();
        assert_eq!(StateError::from(err).kind(), ErrorKind::NoSuchTask);
    }
    tasks.delete_task(size).unwrap();
    assert_eq!(tasks.size(), size - 1);
}

#[test]
fn test_locate_returns_inserted_node() {
    let mut state = empty_state();
    state.root_child_view().add_child(group("grp-005", "Late")).unwrap();
    let node = state.locate(&abs("~/grp-005")).unwrap();
    let g = node.as_group().unwrap();
    assert_eq!(g.id(), &GroupId::parse("grp-005").unwrap());
    assert_eq!(g.name().as_str(), "Late");
    assert_eq!(g.num_children(), 0);
}

#[test]
fn test_deleting_group_removes_paths_below_it() {
    let mut state = sample_state();
    let removed = state
        .root_child_view()
        .delete_child(&GroupId::parse("grp-001").unwrap())
        .unwrap();
    assert_eq!(removed.num_children(), 5);
    assert!(!state.has_path(&abs("~/grp-001/stu-001")));
    assert!(state.has_path(&abs("~/grp-002/stu-006")));
}

#[test]
fn test_configured_state_starts_at_initial_path() {
    let config = StateConfig::from_toml_str("initial_path = \"~/grp-002\"").unwrap();
    let mut state = State::with_config(config, sample_root().unwrap());
    assert_eq!(state.current_path(), &abs("~/grp-002"));

    let target = state.resolve_from_current(&rel("stu-006")).unwrap();
    assert_eq!(target, abs("~/grp-002/stu-006"));
    state.change_directory(&rel("..")).unwrap();
    assert!(state.current_path().is_root());
}

#[test]
fn test_bulk_limit_reports_unsupported_operation() {
    let config = StateConfig::new().with_max_bulk_targets(1);
    let mut state = State::with_config(config, sample_root().unwrap());
    let task = todo("Too many");

    let err = state
        .apply_task(&rel("grp-001"), BulkScope::AllChildrenOfGroup, &task)
        .unwrap_err();
    assert!(matches!(
        err,
        StateError::BulkLimitExceeded { targets: 5, limit: 1, .. }
    ));
    assert_eq!(err.kind(), ErrorKind::UnsupportedOperation);
    assert!(!err.is_retryable());

    let outcome = state
        .apply_task(&rel("grp-001/stu-001"), BulkScope::Single, &task)
        .unwrap();
    assert_eq!(outcome.applied, vec![abs("~/grp-001/stu-001")]);
}

#[test]
fn test_child_view_reports_its_container() {
    let mut state = sample_state();

    let view = state.child_view(&AbsolutePath::Root).unwrap();
    assert!(matches!(view, AnyChildView::Groups(_)));
    assert_eq!(view.path(), &AbsolutePath::Root);
    assert_eq!(view.num_children(), 2);

    let view = state.child_view(&abs("~/grp-002")).unwrap();
    assert!(matches!(view, AnyChildView::Students(_)));
    assert_eq!(view.path(), &abs("~/grp-002"));
    assert_eq!(view.num_children(), 5);
}
