//! Form settings.
//!
//! [`FormSettings`] is the explicit configuration struct for a form: grid
//! geometry, the submit button, the optional API endpoint and the success
//! indicator. Every field has a documented default, applied when the struct
//! is built with [`Default`] or loaded through
//! [`settings_loader`](crate::settings_loader).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::grid::GridOptions;

/// Grid geometry shared by every field of a form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSettings {
    /// Number of equal-width columns in the grid. Default `1`.
    pub grid_columns: u32,
    /// Columns a field spans when its options do not say. Default `1`.
    pub default_field_columns: u32,
    /// Horizontal gap between columns in pixels. Default `3`.
    pub column_gap: u32,
    /// Vertical gap between rows in pixels. Default `3`.
    pub row_gap: u32,
    /// Height in pixels of a single-row input. Default `50`.
    pub fields_height: u32,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            grid_columns: 1,
            default_field_columns: 1,
            column_gap: 3,
            row_gap: 3,
            fields_height: 50,
        }
    }
}

impl GridSettings {
    /// Renders the inline style of the grid container.
    ///
    /// ```
    /// use gridform_core::settings::GridSettings;
    ///
    /// let style = GridSettings::default().container_style();
    /// assert_eq!(
    ///     style,
    ///     "display: grid; grid-template-columns: repeat(1, 1fr); column-gap: 3px; row-gap: 3px;"
    /// );
    /// ```
    pub fn container_style(&self) -> String {
        format!(
            "display: grid; grid-template-columns: repeat({}, 1fr); column-gap: {}px; row-gap: {}px;",
            self.grid_columns, self.column_gap, self.row_gap
        )
    }
}

/// The submit button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitSettings {
    /// Button label. Default `"Submit"`.
    pub text: String,
    /// Grid placement of the button; automatic placement when `None`.
    pub grid: Option<GridOptions>,
    /// Extra CSS declarations for the button, keyed by property name.
    ///
    /// Keys may be written in CSS (`background-color`) or camel case
    /// (`backgroundColor`). Default empty.
    #[serde(default)]
    pub style: BTreeMap<String, String>,
}

impl Default for SubmitSettings {
    fn default() -> Self {
        Self {
            text: "Submit".to_string(),
            grid: None,
            style: BTreeMap::new(),
        }
    }
}

impl SubmitSettings {
    /// Renders [`style`](Self::style) as an inline style, in key order.
    ///
    /// ```
    /// use gridform_core::settings::SubmitSettings;
    ///
    /// let mut submit = SubmitSettings::default();
    /// assert_eq!(submit.inline_style(), "");
    /// submit.style.insert("backgroundColor".into(), "teal".into());
    /// submit.style.insert("border".into(), "none".into());
    /// assert_eq!(submit.inline_style(), "background-color: teal; border: none;");
    /// ```
    pub fn inline_style(&self) -> String {
        self.style
            .iter()
            .map(|(property, value)| format!("{}: {value};", css_property(property)))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// `fontSize` -> `font-size`; names already in CSS form pass through.
fn css_property(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// The transient indicator shown after a successful submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessSettings {
    /// Show the indicator when no API endpoint is configured. Default `true`.
    ///
    /// With an endpoint configured the indicator is always shown.
    pub enabled: bool,
    /// Indicator text. Default `"Success!"`.
    pub text: String,
    /// How long the indicator stays visible, in milliseconds. Default `2000`.
    pub duration_ms: u64,
}

impl Default for SuccessSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            text: "Success!".to_string(),
            duration_ms: 2000,
        }
    }
}

/// The complete set of form settings.
///
/// # Examples
///
/// ```
/// use gridform_core::settings::FormSettings;
///
/// let settings = FormSettings::default();
/// assert_eq!(settings.submit.text, "Submit");
/// assert_eq!(settings.grid.fields_height, 50);
/// assert!(settings.api.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSettings {
    // ── Core ─────────────────────────────────────────────────────────

    /// Whether debug mode is enabled (pretty logs). Default `true`.
    pub debug: bool,
    /// The log level filter (e.g. "info", "debug"). Default `"info"`.
    pub log_level: String,

    // ── Presentation ─────────────────────────────────────────────────

    /// Form title. Default `"Form"`.
    pub title: String,
    /// Form subtitle. Default `"Complete the following form"`.
    pub subtitle: String,
    /// Grid geometry.
    pub grid: GridSettings,
    /// Submit button.
    pub submit: SubmitSettings,
    /// Success indicator.
    pub success: SuccessSettings,

    // ── Network ──────────────────────────────────────────────────────

    /// Endpoint receiving the submitted data as a JSON POST. Default `None`.
    pub api: Option<String>,
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            debug: true,
            log_level: "info".to_string(),
            title: "Form".to_string(),
            subtitle: "Complete the following form".to_string(),
            grid: GridSettings::default(),
            submit: SubmitSettings::default(),
            success: SuccessSettings::default(),
            api: None,
        }
    }
}

impl FormSettings {
    /// Returns the API endpoint, treating an empty string as unset.
    pub fn api_endpoint(&self) -> Option<&str> {
        self.api.as_deref().filter(|api| !api.is_empty())
    }
}
