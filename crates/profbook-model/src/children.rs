//! Insertion-ordered child collections
//!
//! Provides [`Children<T>`], the keyed container a [`Root`](crate::Root)
//! uses for groups and a [`Group`](crate::Group) uses for students.

use crate::error::ChildError;
use indexmap::IndexMap;
use profbook_path::Identifier;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// A node that can live inside a [`Children`] collection
pub trait TreeChild {
    /// Key type; fixed by the child's level in the tree
    type Id: Clone + Eq + Hash + Debug + Display + Into<Identifier>;

    /// Key this child is stored under
    fn id(&self) -> &Self::Id;
}

/// Children keyed by identifier, iterated in insertion order
#[derive(Debug, Clone, PartialEq)]
pub struct Children<T: TreeChild> {
    entries: IndexMap<T::Id, T>,
}

impl<T: TreeChild> Default for Children<T> {
    fn default() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }
}

impl<T: TreeChild> Children<T> {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a child under its own id
    ///
    /// # Errors
    /// Returns [`ChildError::Duplicate`] if the id is taken; nothing changes.
    pub fn add(&mut self, child: T) -> Result<(), ChildError> {
        let id = child.id().clone();
        if self.entries.contains_key(&id) {
            return Err(ChildError::Duplicate(id.into()));
        }
        self.entries.insert(id, child);
        Ok(())
    }

    /// Remove a child, keeping the order of the rest
    ///
    /// # Errors
    /// Returns [`ChildError::NoSuch`] if the id is absent.
    pub fn remove(&mut self, id: &T::Id) -> Result<T, ChildError> {
        self.entries
            .shift_remove(id)
            .ok_or_else(|| ChildError::NoSuch(id.clone().into()))
    }

    /// Replace a child in place
    ///
    /// The replacement must carry the same id; it keeps the old position.
    ///
    /// # Errors
    /// Returns [`ChildError::NoSuch`] if no child has the replacement's id.
    pub fn update(&mut self, child: T) -> Result<T, ChildError> {
        let id = child.id().clone();
        match self.entries.get_mut(&id) {
            Some(slot) => Ok(std::mem::replace(slot, child)),
            None => Err(ChildError::NoSuch(id.into())),
        }
    }

    #[inline]
    #[must_use]
    pub fn get(&self, id: &T::Id) -> Option<&T> {
        self.entries.get(id)
    }

    #[inline]
    pub fn get_mut(&mut self, id: &T::Id) -> Option<&mut T> {
        self.entries.get_mut(id)
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, id: &T::Id) -> bool {
        self.entries.contains_key(id)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Ids in insertion order
    pub fn ids(&self) -> impl Iterator<Item = &T::Id> {
        self.entries.keys()
    }

    /// Children in insertion order
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.entries.values()
    }

    /// `(id, child)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&T::Id, &T)> {
        self.entries.iter()
    }
}
