//! Stable field identity.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies one field of a form.
///
/// Ids are assigned in declaration order when a form is built and never
/// change for the lifetime of that form. Values, markers and render requests
/// are all keyed by `FieldId`, so two fields sharing a `name` stay distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FieldId(usize);

impl FieldId {
    /// Creates a field id from its declaration index.
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the declaration index.
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
