//! Render requests: fields paired with their current state and layout.
//!
//! A [`RenderRequest`] is everything a host needs to draw one field: what
//! kind of control, where it sits in the grid, how tall it is, and the value
//! and marker it currently holds. The [`FieldId`] it carries is the handle
//! the host passes back to [`InlineForm::set_value`] when the user edits.
//!
//! [`InlineForm::set_value`]: crate::form::InlineForm::set_value

use serde::Serialize;

use gridform_core::field_id::FieldId;
use gridform_core::grid::GridOptions;
use gridform_core::settings::{GridSettings, SubmitSettings};

use crate::fields::{DropdownOption, FieldDefinition, FormValue};
use crate::layout::{self, Placement};
use crate::state::FieldState;
use crate::validation::ErrorMarker;
use crate::widgets::InputKind;

/// One field, ready to be drawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderRequest {
    /// Handle for edits.
    pub id: FieldId,
    /// The field name.
    pub name: String,
    /// Label drawn above the control. Always `None` for boolean-like fields.
    pub label: Option<String>,
    /// Text drawn next to a checkbox or toggle.
    pub caption: Option<String>,
    /// Placeholder for an empty control.
    pub placeholder: Option<String>,
    /// The control to draw.
    pub kind: InputKind,
    /// Dropdown entries.
    pub options: Vec<DropdownOption>,
    /// Grid placement.
    pub placement: Placement,
    /// Control height in pixels.
    pub height: u32,
    /// The current value.
    pub value: FormValue,
    /// The current marker.
    pub marker: ErrorMarker,
}

impl RenderRequest {
    /// Builds the request for `field` in `state`, laid out at `viewport_width`
    /// if given.
    pub fn new(
        field: &FieldDefinition,
        state: &FieldState,
        grid: &GridSettings,
        viewport_width: Option<u32>,
    ) -> Self {
        let kind = InputKind::for_field(field.field_type);
        let resolved = layout::resolve_field(&field.grid_options, grid, viewport_width);
        let (label, caption) = if kind.has_label() {
            (field.label.clone(), None)
        } else {
            (None, field.label.clone())
        };

        Self {
            id: state.id,
            name: field.name.clone(),
            label,
            caption,
            placeholder: field.placeholder.clone(),
            kind,
            options: field.options.clone(),
            placement: resolved.placement,
            height: resolved.height,
            value: state.value.clone(),
            marker: state.marker,
        }
    }

    /// Returns the HTML id for the control, e.g. `id_email`.
    pub fn auto_id(&self) -> String {
        format!("id_{}", self.name)
    }

    /// Returns `true` if the field should be drawn in its error state.
    pub const fn has_error(&self) -> bool {
        self.marker.is_blocking()
    }
}

/// The submit button, ready to be drawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitButton {
    /// Button text.
    pub text: String,
    /// Grid placement, or `None` to let the grid place it after the fields.
    pub placement: Option<Placement>,
    /// Inline style from the submit settings; empty when none is set.
    pub style: String,
}

impl SubmitButton {
    /// Builds the button from the submit settings.
    pub fn new(submit: &SubmitSettings, grid: &GridSettings, viewport_width: Option<u32>) -> Self {
        let placement = submit
            .grid
            .as_ref()
            .map(|options| place(options, grid.default_field_columns, viewport_width));
        Self {
            text: submit.text.clone(),
            placement,
            style: submit.inline_style(),
        }
    }
}

fn place(options: &GridOptions, default_span_columns: u32, viewport_width: Option<u32>) -> Placement {
    match viewport_width {
        Some(width) => layout::resolve_placement_at(options, default_span_columns, width),
        None => layout::resolve_placement(options, default_span_columns),
    }
}
