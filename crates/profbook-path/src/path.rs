//! Absolute and relative paths into the ProfBook tree
//!
//! An [`AbsolutePath`] names a node by depth: the root, a group, or a student
//! inside a group. A [`RelativePath`] is a list of navigation tokens that is
//! only meaningful once [resolved](AbsolutePath::resolve) against a current
//! absolute path. Resolution is purely syntactic and never consults the tree.

use crate::error::PathError;
use crate::id::{GroupId, IdKind, Identifier, StudentId};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Segment separator
pub const SEPARATOR: char = '/';

/// Text used for the root
pub const ROOT_MARKER: &str = "~";

/// Depth of a student path, the deepest level of the tree
pub const MAX_DEPTH: usize = 2;

/// Fully rooted path, depth 0 to 2
///
/// # Examples
/// - `~` is the root
/// - `~/grp-001` is a group
/// - `~/grp-001/stu-001` is a student in that group
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum AbsolutePath {
    /// The root
    #[default]
    Root,
    /// A group directly under the root
    Group(GroupId),
    /// A student inside a group
    Student(GroupId, StudentId),
}

impl AbsolutePath {
    /// Root path
    #[inline]
    #[must_use]
    pub fn root() -> Self {
        Self::Root
    }

    /// Number of segments below the root
    #[inline]
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Root => 0,
            Self::Group(_) => 1,
            Self::Student(..) => MAX_DEPTH,
        }
    }

    /// Depth 0
    #[inline]
    #[must_use]
    pub fn is_root(&self) -> bool {
        matches!(self, Self::Root)
    }

    /// Depth 1
    #[inline]
    #[must_use]
    pub fn is_group_level(&self) -> bool {
        matches!(self, Self::Group(_))
    }

    /// Depth 2
    #[inline]
    #[must_use]
    pub fn is_student_level(&self) -> bool {
        matches!(self, Self::Student(..))
    }

    /// Group segment, if the path is at or below group level
    #[inline]
    #[must_use]
    pub fn group_id(&self) -> Option<&GroupId> {
        match self {
            Self::Root => None,
            Self::Group(g) | Self::Student(g, _) => Some(g),
        }
    }

    /// Student segment, if the path is at student level
    #[inline]
    #[must_use]
    pub fn student_id(&self) -> Option<&StudentId> {
        match self {
            Self::Student(_, s) => Some(s),
            _ => None,
        }
    }

    /// Last segment as an identifier (`None` for the root)
    #[must_use]
    pub fn last(&self) -> Option<Identifier> {
        match self {
            Self::Root => None,
            Self::Group(g) => Some(Identifier::Group(g.clone())),
            Self::Student(_, s) => Some(Identifier::Student(s.clone())),
        }
    }

    /// Path with the last segment removed (`None` for the root)
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        match self {
            Self::Root => None,
            Self::Group(_) => Some(Self::Root),
            Self::Student(g, _) => Some(Self::Group(g.clone())),
        }
    }

    /// Append a typed child segment
    ///
    /// # Errors
    /// - [`PathError::TooDeep`] when called on a student path
    /// - [`PathError::InvalidSegment`] when the identifier kind does not fit the next depth
    pub fn child(&self, id: &Identifier) -> Result<Self, PathError> {
        match (self, id) {
            (Self::Root, Identifier::Group(g)) => Ok(Self::Group(g.clone())),
            (Self::Group(g), Identifier::Student(s)) => Ok(Self::Student(g.clone(), s.clone())),
            (Self::Student(..), other) => Err(PathError::TooDeep {
                segment: other.to_string(),
            }),
            (Self::Root, other) => Err(PathError::InvalidSegment {
                segment: other.to_string(),
                expected: IdKind::Group,
            }),
            (Self::Group(_), other) => Err(PathError::InvalidSegment {
                segment: other.to_string(),
                expected: IdKind::Student,
            }),
        }
    }

    /// Push a raw segment, inferring its identifier kind from the current depth
    fn push_segment(&self, segment: &str) -> Result<Self, PathError> {
        match self {
            Self::Root => GroupId::parse(segment)
                .map(Self::Group)
                .map_err(|_| PathError::InvalidSegment {
                    segment: segment.to_owned(),
                    expected: IdKind::Group,
                }),
            Self::Group(g) => StudentId::parse(segment)
                .map(|s| Self::Student(g.clone(), s))
                .map_err(|_| PathError::InvalidSegment {
                    segment: segment.to_owned(),
                    expected: IdKind::Student,
                }),
            Self::Student(..) => Err(PathError::TooDeep {
                segment: segment.to_owned(),
            }),
        }
    }

    /// Resolve a relative path against this one
    ///
    /// Tokens are applied left to right. A rooted relative path ignores `self`.
    ///
    /// # Errors
    /// - [`PathError::AboveRoot`] if `..` is applied at the root
    /// - [`PathError::TooDeep`] if a segment is pushed below student level
    /// - [`PathError::InvalidSegment`] if a segment is not the identifier kind legal at its depth
    pub fn resolve(&self, relative: &RelativePath) -> Result<Self, PathError> {
        let mut current = self.clone();
        for token in relative.tokens() {
            current = match token {
                PathToken::Root => Self::Root,
                PathToken::Current => current,
                PathToken::Parent => current.parent().ok_or(PathError::AboveRoot)?,
                PathToken::Segment(segment) => current.push_segment(segment)?,
            };
        }
        Ok(current)
    }
}

impl Display for AbsolutePath {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Root => f.write_str(ROOT_MARKER),
            Self::Group(g) => write!(f, "{ROOT_MARKER}{SEPARATOR}{g}"),
            Self::Student(g, s) => write!(f, "{ROOT_MARKER}{SEPARATOR}{g}{SEPARATOR}{s}"),
        }
    }
}

impl FromStr for AbsolutePath {
    type Err = PathError;

    /// Parse rooted text such as `~/grp-001` or `/grp-001/stu-001`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let relative = RelativePath::from_str(s)?;
        if !relative.is_rooted() {
            return Err(PathError::NotAbsolute(s.to_owned()));
        }
        Self::Root.resolve(&relative)
    }
}

impl TryFrom<String> for AbsolutePath {
    type Error = PathError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AbsolutePath> for String {
    fn from(path: AbsolutePath) -> Self {
        path.to_string()
    }
}

/// Single navigation token of a [`RelativePath`]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathToken {
    /// `~`: jump to the root (only ever the first token)
    Root,
    /// `.`: stay
    Current,
    /// `..`: ascend one level
    Parent,
    /// Identifier text; its kind is decided by the depth it is pushed at
    Segment(String),
}

impl Display for PathToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Root => f.write_str(ROOT_MARKER),
            Self::Current => f.write_str("."),
            Self::Parent => f.write_str(".."),
            Self::Segment(s) => f.write_str(s),
        }
    }
}

/// Sequence of navigation tokens with no inherent root
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelativePath(Vec<PathToken>);

impl RelativePath {
    /// Create from tokens
    ///
    /// Segments must read back as the same token when displayed and parsed.
    ///
    /// # Errors
    /// - [`PathError::EmptyPath`] for no tokens
    /// - [`PathError::MisplacedRoot`] if `Root` is not the first token
    /// - [`PathError::EmptySegment`] for a blank segment
    /// - [`PathError::MalformedSegment`] for a segment with a separator,
    ///   surrounding whitespace, or the text of a navigation token
    pub fn new(tokens: Vec<PathToken>) -> Result<Self, PathError> {
        if tokens.is_empty() {
            return Err(PathError::EmptyPath);
        }
        if tokens.iter().skip(1).any(|t| *t == PathToken::Root) {
            return Err(PathError::MisplacedRoot);
        }
        for token in &tokens {
            if let PathToken::Segment(segment) = token {
                check_segment(segment)?;
            }
        }
        Ok(Self(tokens))
    }

    /// `.`
    #[inline]
    #[must_use]
    pub fn current() -> Self {
        Self(vec![PathToken::Current])
    }

    /// `..`
    #[inline]
    #[must_use]
    pub fn parent() -> Self {
        Self(vec![PathToken::Parent])
    }

    /// Relative path naming one direct child
    #[inline]
    #[must_use]
    pub fn child(id: &Identifier) -> Self {
        Self(vec![PathToken::Segment(id.to_string())])
    }

    /// Tokens in application order
    #[inline]
    #[must_use]
    pub fn tokens(&self) -> &[PathToken] {
        &self.0
    }

    /// Whether resolution starts from the root regardless of the current path
    #[inline]
    #[must_use]
    pub fn is_rooted(&self) -> bool {
        self.0.first() == Some(&PathToken::Root)
    }
}

fn check_segment(segment: &str) -> Result<(), PathError> {
    let trimmed = segment.trim();
    if trimmed.is_empty() {
        return Err(PathError::EmptySegment);
    }
    if trimmed != segment
        || segment.contains(SEPARATOR)
        || matches!(segment, "." | ".." | ROOT_MARKER)
    {
        return Err(PathError::MalformedSegment(segment.to_owned()));
    }
    Ok(())
}

impl Display for RelativePath {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let joined = self
            .0
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("/");
        f.write_str(&joined)
    }
}

impl FromStr for RelativePath {
    type Err = PathError;

    /// Whitespace around the text and around each segment is ignored
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if text.is_empty() {
            return Err(PathError::EmptyPath);
        }

        let mut tokens = Vec::new();
        let mut rest = text;
        if let Some(stripped) = rest.strip_prefix(SEPARATOR) {
            tokens.push(PathToken::Root);
            rest = stripped;
            if rest.is_empty() {
                return Ok(Self(tokens));
            }
        }
        // A single trailing separator is tolerated: `grp-001/`
        let rest = rest.strip_suffix(SEPARATOR).unwrap_or(rest);

        for (i, segment) in rest.split(SEPARATOR).enumerate() {
            let token = match segment.trim() {
                "" => return Err(PathError::EmptySegment),
                ROOT_MARKER if i == 0 && tokens.is_empty() => PathToken::Root,
                ROOT_MARKER => return Err(PathError::MisplacedRoot),
                "." => PathToken::Current,
                ".." => PathToken::Parent,
                other => PathToken::Segment(other.to_owned()),
            };
            tokens.push(token);
        }

        Ok(Self(tokens))
    }
}

impl From<&AbsolutePath> for RelativePath {
    /// Rooted relative path that resolves to `path` from anywhere
    fn from(path: &AbsolutePath) -> Self {
        let mut tokens = vec![PathToken::Root];
        if let Some(g) = path.group_id() {
            tokens.push(PathToken::Segment(g.to_string()));
        }
        if let Some(s) = path.student_id() {
            tokens.push(PathToken::Segment(s.to_string()));
        }
        Self(tokens)
    }
}
