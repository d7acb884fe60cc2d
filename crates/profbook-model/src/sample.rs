//! Sample tree used for demos and tests
//!
//! Built only through the public child-add and task-add operations, the same
//! way a loader would rebuild a saved tree.

use crate::error::ModelError;
use crate::node::{ChildOperation, Group, Name, Root, Student, TaskOperation};
use crate::task::Task;
use profbook_path::{GroupId, StudentId};

const GROUP_ONE_STUDENTS: [(&str, &str); 5] = [
    ("Tejas", "stu-001"),
    ("Jackie", "stu-002"),
    ("Raman", "stu-003"),
    ("Yarn Meng", "stu-004"),
    ("Kiat Win", "stu-005"),
];

const GROUP_TWO_STUDENTS: [(&str, &str); 5] = [
    ("Ming Yuan", "stu-006"),
    ("Zann", "stu-007"),
    ("Nereus", "stu-008"),
    ("Gary", "stu-009"),
    ("Nidhish", "stu-010"),
];

fn students(entries: &[(&str, &str)]) -> Result<Vec<Student>, ModelError> {
    entries
        .iter()
        .map(|(name, id)| -> Result<Student, ModelError> {
            Ok(Student::new(Name::new(*name)?, StudentId::parse(id)?))
        })
        .collect()
}

/// Ten to-dos named `Task 0` through `Task 9`
///
/// # Errors
/// Never fails in practice; kept fallible because task construction is.
pub fn sample_tasks() -> Result<Vec<Task>, ModelError> {
    (0..10)
        .map(|i| Task::todo(format!("Task {i}")).map_err(ModelError::from))
        .collect()
}

/// `grp-001` with students `stu-001` to `stu-005` and no tasks
///
/// # Errors
/// Propagates any model failure.
pub fn sample_group_one() -> Result<Group, ModelError> {
    let mut group = Group::new(Name::new("Group One")?, GroupId::parse("grp-001")?);
    for student in students(&GROUP_ONE_STUDENTS)? {
        group.add_child(student)?;
    }
    Ok(group)
}

/// `grp-002` with students `stu-006` to `stu-010` and ten to-dos
///
/// # Errors
/// Propagates any model failure.
pub fn sample_group_two() -> Result<Group, ModelError> {
    let mut group = Group::new(Name::new("Best Group in CS2103T")?, GroupId::parse("grp-002")?);
    for student in students(&GROUP_TWO_STUDENTS)? {
        group.add_child(student)?;
    }
    for task in sample_tasks()? {
        group.add_task(task)?;
    }
    Ok(group)
}

/// Root holding both sample groups
///
/// # Errors
/// Propagates any model failure.
pub fn sample_root() -> Result<Root, ModelError> {
    let mut root = Root::new();
    root.add_child(sample_group_one()?)?;
    root.add_child(sample_group_two()?)?;
    Ok(root)
}
