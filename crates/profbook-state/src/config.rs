//! State configuration
//!
//! Loaded from TOML or built in code:
//!
//! ```toml
//! initial_path = "~/grp-001"
//! max_bulk_targets = 50
//! ```

use crate::error::StateError;
use profbook_path::AbsolutePath;
use serde::{Deserialize, Serialize};

/// Settings applied when a [`State`](crate::State) is created
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StateConfig {
    /// Current path right after start-up
    pub initial_path: AbsolutePath,
    /// Refuse bulk operations that would touch more children than this
    pub max_bulk_targets: Option<usize>,
}

impl StateConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With initial path
    #[inline]
    #[must_use]
    pub fn with_initial_path(mut self, path: AbsolutePath) -> Self {
        self.initial_path = path;
        self
    }

    /// With bulk target limit
    #[inline]
    #[must_use]
    pub fn with_max_bulk_targets(mut self, limit: usize) -> Self {
        self.max_bulk_targets = Some(limit);
        self
    }

    /// Parse TOML text
    ///
    /// # Errors
    /// Returns [`StateError::Config`] for malformed TOML, unknown keys or an
    /// `initial_path` that is not a valid absolute path.
    pub fn from_toml_str(text: &str) -> Result<Self, StateError> {
        toml::from_str(text).map_err(|e| StateError::Config(e.to_string()))
    }

    /// Render as TOML text
    ///
    /// # Errors
    /// Returns [`StateError::Config`] if serialization fails.
    pub fn to_toml_string(&self) -> Result<String, StateError> {
        toml::to_string(self).map_err(|e| StateError::Config(e.to_string()))
    }
}

impl Default for StateConfig {
    fn default() -> Self {
        Self {
            initial_path: AbsolutePath::Root,
            max_bulk_targets: None,
        }
    }
}
