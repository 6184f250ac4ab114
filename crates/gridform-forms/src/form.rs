//! The inline form.
//!
//! [`InlineForm`] ties the pieces together: it owns the [`FormState`], runs
//! the validation engine on submit, hands accepted data to the success
//! callback and the configured endpoint, drives the success indicator, and
//! produces [`RenderRequest`]s for the host to draw.
//!
//! # Submit flow
//!
//! 1. The attempt flag is set and every field is validated.
//! 2. If any marker blocks, [`SubmitOutcome::Blocked`] is returned and
//!    nothing else happens. Later edits re-validate until the next submit.
//! 3. Otherwise the `{name: value}` data is built, the success callback runs,
//!    the POST is dispatched in the background if an endpoint is configured,
//!    and the success indicator is shown (always with an endpoint, otherwise
//!    only if enabled).
//! 4. Values and markers are reset and [`SubmitOutcome::Submitted`] is
//!    returned.
//!
//! # Examples
//!
//! ```
//! use gridform_core::settings::FormSettings;
//! use gridform_forms::fields::{FieldDefinition, FieldType};
//! use gridform_forms::form::{InlineForm, SubmitOutcome};
//!
//! let mut form = InlineForm::new(
//!     vec![FieldDefinition::new("name", FieldType::Text).required(true)],
//!     FormSettings::default(),
//! );
//!
//! assert!(matches!(form.submit(), SubmitOutcome::Blocked(_)));
//!
//! let id = form.id_of("name").unwrap();
//! form.set_value(id, "Ada").unwrap();
//! let SubmitOutcome::Submitted(data) = form.submit() else {
//!     panic!("expected submission");
//! };
//! assert_eq!(data.get("name").unwrap().as_text(), Some("Ada"));
//! ```

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

use gridform_core::error::FormResult;
use gridform_core::field_id::FieldId;
use gridform_core::logging::submission_span;
use gridform_core::settings::FormSettings;

use crate::bound_field::{RenderRequest, SubmitButton};
use crate::config::FormConfig;
use crate::fields::{FieldDefinition, FormValue};
use crate::indicator::SuccessIndicator;
use crate::state::FormState;
use crate::submission::SubmissionData;
use crate::transport::{self, HttpTransport, Transport};
use crate::validation::{self, ErrorMarker};

/// Callback invoked synchronously with the data of every accepted submission.
pub type SuccessCallback = Box<dyn FnMut(&SubmissionData) + Send>;

/// The result of [`InlineForm::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// At least one field blocks submission; holds every field's marker.
    Blocked(Vec<ErrorMarker>),
    /// The data was accepted and the form reset.
    Submitted(SubmissionData),
}

impl SubmitOutcome {
    /// Returns `true` if the data was accepted.
    pub const fn is_submitted(&self) -> bool {
        matches!(self, Self::Submitted(_))
    }

    /// Returns the markers of a blocked submit.
    pub fn markers(&self) -> Option<&[ErrorMarker]> {
        match self {
            Self::Blocked(markers) => Some(markers.as_slice()),
            Self::Submitted(_) => None,
        }
    }

    /// Returns the data of an accepted submit.
    pub const fn data(&self) -> Option<&SubmissionData> {
        match self {
            Self::Submitted(data) => Some(data),
            Self::Blocked(_) => None,
        }
    }
}

/// A form laid out on a grid, validated on submit.
pub struct InlineForm {
    settings: FormSettings,
    state: FormState,
    on_success: Option<SuccessCallback>,
    transport: Arc<dyn Transport>,
    indicator: SuccessIndicator,
    last_dispatch: Option<JoinHandle<()>>,
}

impl InlineForm {
    /// Creates a form posting over HTTP when an endpoint is configured.
    pub fn new(fields: Vec<FieldDefinition>, settings: FormSettings) -> Self {
        let indicator = SuccessIndicator::new(settings.success.text.clone());
        Self {
            settings,
            state: FormState::new(fields),
            on_success: None,
            transport: Arc::new(HttpTransport::new()),
            indicator,
            last_dispatch: None,
        }
    }

    /// Creates a form from a loaded config.
    pub fn from_config(config: FormConfig) -> Self {
        Self::new(config.fields, config.settings)
    }

    /// Sets the callback run for every accepted submission.
    #[must_use]
    pub fn on_success(mut self, callback: impl FnMut(&SubmissionData) + Send + 'static) -> Self {
        self.on_success = Some(Box::new(callback));
        self
    }

    /// Replaces the transport used to POST accepted submissions.
    #[must_use]
    pub fn with_transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Arc::new(transport);
        self
    }

    // ── Accessors ────────────────────────────────────────────────────

    /// Returns the settings.
    pub const fn settings(&self) -> &FormSettings {
        &self.settings
    }

    /// Returns the state model.
    pub const fn state(&self) -> &FormState {
        &self.state
    }

    /// Returns the field definitions in declaration order.
    pub fn fields(&self) -> &[FieldDefinition] {
        self.state.fields()
    }

    /// Returns the id of the first field named `name`.
    pub fn id_of(&self, name: &str) -> Option<FieldId> {
        self.state
            .fields()
            .iter()
            .position(|f| f.name == name)
            .map(FieldId::new)
    }

    /// Returns all values in declaration order.
    pub fn values(&self) -> Vec<FormValue> {
        self.state.values()
    }

    /// Returns all markers in declaration order.
    pub fn markers(&self) -> Vec<ErrorMarker> {
        self.state.markers()
    }

    /// Returns the success indicator.
    pub const fn indicator(&self) -> &SuccessIndicator {
        &self.indicator
    }

    // ── Editing ──────────────────────────────────────────────────────

    /// Replaces the value of a field.
    ///
    /// # Errors
    ///
    /// See [`FormState::set_value`].
    pub fn set_value(&mut self, id: FieldId, value: impl Into<FormValue>) -> FormResult<()> {
        self.state.set_value(id, value)
    }

    /// Restores every field to its default, clears the attempt flag and hides
    /// the success indicator.
    pub fn reset(&mut self) {
        self.state.reset();
        self.indicator.dismiss();
    }

    // ── Submission ───────────────────────────────────────────────────

    /// Validates and, if nothing blocks, submits the form.
    pub fn submit(&mut self) -> SubmitOutcome {
        let span = submission_span(&self.settings.title);
        let _guard = span.enter();

        self.state.mark_attempted();
        let markers = self.state.validate();
        if validation::is_blocking(&markers) {
            let blocking = markers.iter().filter(|m| m.is_blocking()).count();
            tracing::debug!(blocking, "submission blocked");
            return SubmitOutcome::Blocked(markers);
        }

        let data = SubmissionData::collect(self.state.fields(), &self.state.values());
        self.state.clear_attempt();

        if let Some(callback) = self.on_success.as_mut() {
            callback(&data);
        }

        if let Some(api) = self.settings.api_endpoint() {
            self.last_dispatch = transport::dispatch(Arc::clone(&self.transport), api, data.clone());
            self.show_success();
        } else if self.settings.success.enabled {
            self.show_success();
        }

        self.state.reset();
        tracing::info!(fields = data.len(), "submission accepted");
        SubmitOutcome::Submitted(data)
    }

    /// Takes the handle of the most recent background POST, if any.
    ///
    /// Awaiting it waits for delivery; the form itself never does.
    pub fn take_dispatch(&mut self) -> Option<JoinHandle<()>> {
        self.last_dispatch.take()
    }

    fn show_success(&mut self) {
        self.indicator
            .show(Duration::from_millis(self.settings.success.duration_ms));
    }

    // ── Presentation ─────────────────────────────────────────────────

    /// Builds one render request per field, laid out at `viewport_width` if
    /// given.
    pub fn render_requests(&self, viewport_width: Option<u32>) -> Vec<RenderRequest> {
        let records = self.state.snapshot();
        self.state
            .fields()
            .iter()
            .zip(records.iter())
            .map(|(field, record)| {
                RenderRequest::new(field, record, &self.settings.grid, viewport_width)
            })
            .collect()
    }

    /// Builds the submit button, laid out at `viewport_width` if given.
    pub fn submit_button(&self, viewport_width: Option<u32>) -> SubmitButton {
        SubmitButton::new(&self.settings.submit, &self.settings.grid, viewport_width)
    }

    /// Returns the inline style of the grid container.
    pub fn container_style(&self) -> String {
        self.settings.grid.container_style()
    }
}

impl fmt::Debug for InlineForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InlineForm")
            .field("settings", &self.settings)
            .field("state", &self.state)
            .field("has_on_success", &self.on_success.is_some())
            .field("indicator", &self.indicator)
            .finish_non_exhaustive()
    }
}
