//! Declarative grid placement options.
//!
//! These are the plain data types a host supplies for each field (and for
//! the submit button). Resolution into concrete placements and heights lives
//! in `gridform-forms::layout`.

use serde::{Deserialize, Serialize};

/// Where a field sits in the form grid, plus its responsive overrides.
///
/// # Examples
///
/// ```
/// use gridform_core::grid::{Breakpoint, GridOptions};
///
/// let options = GridOptions::at(1, 2)
///     .columns(2)
///     .breakpoint(Breakpoint::max_width(600).columns(1));
/// assert_eq!(options.columns, Some(2));
/// assert_eq!(options.responsive.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridOptions {
    /// First grid column (1-based).
    pub column_start: u32,
    /// First grid row (1-based).
    pub row_start: u32,
    /// Column span; the form's default field columns when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<u32>,
    /// Row span; one row when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rows: Option<u32>,
    /// Ordered responsive overrides.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub responsive: Vec<Breakpoint>,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self::at(1, 1)
    }
}

impl GridOptions {
    /// Places a field at `column_start` / `row_start` with default spans.
    pub const fn at(column_start: u32, row_start: u32) -> Self {
        Self {
            column_start,
            row_start,
            columns: None,
            rows: None,
            responsive: Vec::new(),
        }
    }

    /// Sets the column span.
    #[must_use]
    pub const fn columns(mut self, columns: u32) -> Self {
        self.columns = Some(columns);
        self
    }

    /// Sets the row span.
    #[must_use]
    pub const fn rows(mut self, rows: u32) -> Self {
        self.rows = Some(rows);
        self
    }

    /// Appends a responsive override.
    #[must_use]
    pub fn breakpoint(mut self, breakpoint: Breakpoint) -> Self {
        self.responsive.push(breakpoint);
        self
    }
}

/// A placement override that applies at viewport widths `<= breakpoint`.
///
/// Only the properties that are set override anything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Breakpoint {
    /// Maximum viewport width in pixels at which this override applies.
    pub breakpoint: u32,
    /// Overrides the first grid column.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_start: Option<u32>,
    /// Overrides the first grid row.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_start: Option<u32>,
    /// Overrides the column span.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<u32>,
    /// Overrides the row span.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rows: Option<u32>,
}

impl Breakpoint {
    /// Creates an override with no properties for widths up to `px`.
    pub const fn max_width(px: u32) -> Self {
        Self {
            breakpoint: px,
            column_start: None,
            row_start: None,
            columns: None,
            rows: None,
        }
    }

    /// Sets the overridden first column.
    #[must_use]
    pub const fn column_start(mut self, column_start: u32) -> Self {
        self.column_start = Some(column_start);
        self
    }

    /// Sets the overridden first row.
    #[must_use]
    pub const fn row_start(mut self, row_start: u32) -> Self {
        self.row_start = Some(row_start);
        self
    }

    /// Sets the overridden column span.
    #[must_use]
    pub const fn columns(mut self, columns: u32) -> Self {
        self.columns = Some(columns);
        self
    }

    /// Sets the overridden row span.
    #[must_use]
    pub const fn rows(mut self, rows: u32) -> Self {
        self.rows = Some(rows);
        self
    }

    /// Returns `true` if this override is active at `viewport_width`.
    pub const fn matches(&self, viewport_width: u32) -> bool {
        viewport_width <= self.breakpoint
    }
}
