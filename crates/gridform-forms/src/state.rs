//! Form state model.
//!
//! [`FormState`] owns the field definitions and one [`FieldState`] record per
//! field, in declaration order and keyed by [`FieldId`]. Records are kept
//! behind an [`Arc`] and replaced copy-on-write, so a [`snapshot`] taken
//! before an edit never changes afterwards; together with [`revision`] this
//! is enough for change detection by the presentation layer.
//!
//! Once a submit has been attempted, every edit re-runs validation until the
//! next [`reset`].
//!
//! [`snapshot`]: FormState::snapshot
//! [`revision`]: FormState::revision
//! [`reset`]: FormState::reset

use std::sync::Arc;

use gridform_core::error::{FormError, FormResult};
use gridform_core::field_id::FieldId;

use crate::fields::{FieldDefinition, FormValue};
use crate::validation::{self, ErrorMarker};

/// The current value and marker of one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldState {
    /// The field this record belongs to.
    pub id: FieldId,
    /// The current value.
    pub value: FormValue,
    /// The marker from the most recent validation.
    pub marker: ErrorMarker,
}

/// Values and markers of a form.
#[derive(Debug, Clone)]
pub struct FormState {
    fields: Vec<FieldDefinition>,
    records: Arc<Vec<FieldState>>,
    attempted: bool,
    revision: u64,
}

impl FormState {
    /// Creates the state for `fields`, with every value at its default.
    pub fn new(fields: Vec<FieldDefinition>) -> Self {
        let records = Arc::new(default_records(&fields));
        Self {
            fields,
            records,
            attempted: false,
            revision: 0,
        }
    }

    /// Returns the field definitions in declaration order.
    pub fn fields(&self) -> &[FieldDefinition] {
        &self.fields
    }

    /// Returns the definition of `id`.
    pub fn field(&self, id: FieldId) -> Option<&FieldDefinition> {
        self.fields.get(id.index())
    }

    /// Returns the ids of all fields in declaration order.
    pub fn ids(&self) -> impl Iterator<Item = FieldId> + '_ {
        self.records.iter().map(|r| r.id)
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the form has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns a snapshot of all records.
    ///
    /// The snapshot is unaffected by later edits.
    pub fn snapshot(&self) -> Arc<Vec<FieldState>> {
        Arc::clone(&self.records)
    }

    /// Returns the record of `id`.
    pub fn record(&self, id: FieldId) -> Option<&FieldState> {
        self.records.get(id.index())
    }

    /// Returns the current value of `id`.
    pub fn value(&self, id: FieldId) -> Option<&FormValue> {
        self.record(id).map(|r| &r.value)
    }

    /// Returns the current marker of `id`.
    pub fn marker(&self, id: FieldId) -> Option<ErrorMarker> {
        self.record(id).map(|r| r.marker)
    }

    /// Returns all values in declaration order.
    pub fn values(&self) -> Vec<FormValue> {
        self.records.iter().map(|r| r.value.clone()).collect()
    }

    /// Returns all markers in declaration order.
    pub fn markers(&self) -> Vec<ErrorMarker> {
        self.records.iter().map(|r| r.marker).collect()
    }

    /// Returns `true` once a submit has been attempted since the last reset.
    pub const fn has_attempted(&self) -> bool {
        self.attempted
    }

    /// Returns a counter that changes on every mutation.
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Replaces the value of `id`.
    ///
    /// Re-validates the whole form if a submit has already been attempted.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::UnknownField`] for an id outside this form and
    /// [`FormError::ValueKindMismatch`] when a boolean is given to a text
    /// field or text to a boolean-like field. The state is unchanged on error.
    pub fn set_value(&mut self, id: FieldId, value: impl Into<FormValue>) -> FormResult<()> {
        let value = value.into();
        let field = self.field(id).ok_or(FormError::UnknownField(id))?;
        if !value.fits(field.field_type) {
            return Err(FormError::ValueKindMismatch {
                field: field.name.clone(),
            });
        }

        Arc::make_mut(&mut self.records)[id.index()].value = value;
        self.revision += 1;

        if self.attempted {
            self.validate();
        }
        Ok(())
    }

    /// Runs validation and stores the markers.
    pub fn validate(&mut self) -> Vec<ErrorMarker> {
        let markers = validation::validate(&self.fields, &self.values());
        let records = Arc::make_mut(&mut self.records);
        for (record, marker) in records.iter_mut().zip(&markers) {
            record.marker = *marker;
        }
        self.revision += 1;
        markers
    }

    /// Records that a submit was attempted, enabling re-validation on edit.
    pub fn mark_attempted(&mut self) {
        self.attempted = true;
    }

    /// Clears the attempt flag without touching values.
    pub fn clear_attempt(&mut self) {
        self.attempted = false;
    }

    /// Restores every value and marker to its default and clears the attempt flag.
    pub fn reset(&mut self) {
        self.records = Arc::new(default_records(&self.fields));
        self.attempted = false;
        self.revision += 1;
    }
}

fn default_records(fields: &[FieldDefinition]) -> Vec<FieldState> {
    fields
        .iter()
        .enumerate()
        .map(|(i, field)| FieldState {
            id: FieldId::new(i),
            value: field.field_type.default_value(),
            marker: ErrorMarker::Valid,
        })
        .collect()
}
