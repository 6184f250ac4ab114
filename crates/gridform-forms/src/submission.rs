//! Submitted form data.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::fields::{FieldDefinition, FormValue};

/// The `{name: value}` mapping handed to the success callback and POSTed to
/// the API endpoint.
///
/// When two fields share a name, the later field's value wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmissionData(BTreeMap<String, FormValue>);

impl SubmissionData {
    /// Builds the mapping from definitions and their values, in declaration order.
    pub fn collect(fields: &[FieldDefinition], values: &[FormValue]) -> Self {
        Self(
            fields
                .iter()
                .zip(values)
                .map(|(field, value)| (field.name.clone(), value.clone()))
                .collect(),
        )
    }

    /// Returns the value submitted under `name`.
    pub fn get(&self, name: &str) -> Option<&FormValue> {
        self.0.get(name)
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if nothing was submitted.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over `(name, value)` pairs sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FormValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Consumes the data, returning the underlying map.
    pub fn into_inner(self) -> BTreeMap<String, FormValue> {
        self.0
    }
}

impl<K: Into<String>, V: Into<FormValue>> FromIterator<(K, V)> for SubmissionData {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
