//! Typed identifiers for groups and students
//!
//! Provides [`GroupId`] and [`StudentId`], two disjoint validated identifier
//! kinds, plus [`Identifier`] for places that hold either.

use crate::error::PathError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

static GROUP_ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^grp-[0-9]{3}$").expect("group id pattern is valid"));

static STUDENT_ID_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(stu-[0-9]{3}|[0-9]{4}[A-Z])$").expect("student id pattern is valid")
});

/// Which identifier language a piece of text was checked against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdKind {
    /// `grp-###`
    Group,
    /// `stu-###` or `####X`
    Student,
}

impl Display for IdKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Group => f.write_str("group"),
            Self::Student => f.write_str("student"),
        }
    }
}

/// Identifier of a group, e.g. `grp-001`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GroupId(String);

impl GroupId {
    /// Parse and validate group id text
    ///
    /// # Errors
    /// Returns [`PathError::InvalidIdentifier`] if the trimmed text is not `grp-` plus three digits.
    pub fn parse(text: &str) -> Result<Self, PathError> {
        let trimmed = text.trim();
        if GROUP_ID_PATTERN.is_match(trimmed) {
            Ok(Self(trimmed.to_owned()))
        } else {
            Err(PathError::InvalidIdentifier {
                kind: IdKind::Group,
                text: text.to_owned(),
            })
        }
    }

    /// Check text against the group id format without allocating an id
    #[inline]
    #[must_use]
    pub fn is_valid(text: &str) -> bool {
        GROUP_ID_PATTERN.is_match(text.trim())
    }

    /// Identifier text
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Identifier of a student, e.g. `stu-001` or `0001Y`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StudentId(String);

impl StudentId {
    /// Parse and validate student id text
    ///
    /// # Errors
    /// Returns [`PathError::InvalidIdentifier`] if the trimmed text matches neither
    /// `stu-###` nor four digits followed by an uppercase letter.
    pub fn parse(text: &str) -> Result<Self, PathError> {
        let trimmed = text.trim();
        if STUDENT_ID_PATTERN.is_match(trimmed) {
            Ok(Self(trimmed.to_owned()))
        } else {
            Err(PathError::InvalidIdentifier {
                kind: IdKind::Student,
                text: text.to_owned(),
            })
        }
    }

    /// Check text against the student id format
    #[inline]
    #[must_use]
    pub fn is_valid(text: &str) -> bool {
        STUDENT_ID_PATTERN.is_match(text.trim())
    }

    /// Identifier text
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

macro_rules! id_conversions {
    ($ty:ident) => {
        impl Display for $ty {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $ty {
            type Err = PathError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl TryFrom<String> for $ty {
            type Error = PathError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::parse(&value)
            }
        }

        impl From<$ty> for String {
            fn from(id: $ty) -> Self {
                id.0
            }
        }

        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

id_conversions!(GroupId);
id_conversions!(StudentId);

/// Either kind of identifier
///
/// Used where a child of unknown depth is named, such as listing the
/// children of an arbitrary container.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Identifier {
    /// A group below the root
    Group(GroupId),
    /// A student below a group
    Student(StudentId),
}

impl Identifier {
    /// Kind of this identifier
    #[inline]
    #[must_use]
    pub fn kind(&self) -> IdKind {
        match self {
            Self::Group(_) => IdKind::Group,
            Self::Student(_) => IdKind::Student,
        }
    }

    /// Identifier text
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Group(id) => id.as_str(),
            Self::Student(id) => id.as_str(),
        }
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<GroupId> for Identifier {
    fn from(id: GroupId) -> Self {
        Self::Group(id)
    }
}

impl From<StudentId> for Identifier {
    fn from(id: StudentId) -> Self {
        Self::Student(id)
    }
}
