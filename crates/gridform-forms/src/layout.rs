//! Grid layout resolver.
//!
//! Turns a field's declarative [`GridOptions`] into a concrete [`Placement`]
//! and pixel height, either for the base layout or for a given viewport
//! width. Responsive overrides behave like `@media (max-width: Npx)` rules in
//! a stylesheet: every breakpoint whose width is at least the viewport's
//! applies, in declaration order, and only the properties it sets override
//! anything. A later matching breakpoint wins over an earlier one.
//!
//! The same rules are also emitted as CSS ([`placement_css`], [`height_css`])
//! for hosts that style with real media queries.
//!
//! Zero spans are treated as unset, like the other unset values.

use std::fmt::Write as _;

use serde::Serialize;

use gridform_core::grid::{Breakpoint, GridOptions};
use gridform_core::settings::GridSettings;

/// A concrete grid placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    /// First grid column (1-based).
    pub column_start: u32,
    /// First grid row (1-based).
    pub row_start: u32,
    /// Number of columns spanned.
    pub column_span: u32,
    /// Number of rows spanned.
    pub row_span: u32,
}

impl Placement {
    fn apply(&mut self, breakpoint: &Breakpoint) {
        if let Some(column_start) = breakpoint.column_start {
            self.column_start = column_start;
        }
        if let Some(row_start) = breakpoint.row_start {
            self.row_start = row_start;
        }
        if let Some(columns) = nonzero(breakpoint.columns) {
            self.column_span = columns;
        }
        if let Some(rows) = nonzero(breakpoint.rows) {
            self.row_span = rows;
        }
    }
}

/// A field's resolved placement together with its input height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldLayout {
    /// Where the field sits.
    pub placement: Placement,
    /// Input height in pixels.
    pub height: u32,
}

/// Resolves the base placement, ignoring breakpoints.
///
/// The column span falls back to `default_span_columns`, the row span to 1.
pub fn resolve_placement(options: &GridOptions, default_span_columns: u32) -> Placement {
    Placement {
        column_start: options.column_start,
        row_start: options.row_start,
        column_span: nonzero(options.columns).unwrap_or(default_span_columns),
        row_span: nonzero(options.rows).unwrap_or(1),
    }
}

/// Resolves the placement at a viewport width, applying matching breakpoints.
///
/// # Examples
///
/// ```
/// use gridform_core::grid::{Breakpoint, GridOptions};
/// use gridform_forms::layout::resolve_placement_at;
///
/// let options = GridOptions::at(1, 1)
///     .breakpoint(Breakpoint::max_width(600).columns(2))
///     .breakpoint(Breakpoint::max_width(400).columns(1));
///
/// assert_eq!(resolve_placement_at(&options, 3, 350).column_span, 1);
/// assert_eq!(resolve_placement_at(&options, 3, 500).column_span, 2);
/// assert_eq!(resolve_placement_at(&options, 3, 800).column_span, 3);
/// ```
pub fn resolve_placement_at(
    options: &GridOptions,
    default_span_columns: u32,
    viewport_width: u32,
) -> Placement {
    let mut placement = resolve_placement(options, default_span_columns);
    for breakpoint in options
        .responsive
        .iter()
        .filter(|bp| bp.matches(viewport_width))
    {
        placement.apply(breakpoint);
    }
    placement
}

/// Computes the pixel height of an input spanning `row_count` rows.
///
/// `base_row_height * rows + row_gap * (rows - 1)`, so a multi-row input
/// covers the gaps between its rows while a single-row input is exactly
/// `base_row_height`. A missing or zero row count means one row. The
/// arithmetic saturates at `u32::MAX` rather than overflowing.
///
/// ```
/// use gridform_forms::layout::resolve_height;
///
/// assert_eq!(resolve_height(Some(2), 50, 3), 103);
/// assert_eq!(resolve_height(None, 50, 3), 50);
/// ```
pub fn resolve_height(row_count: Option<u32>, base_row_height: u32, row_gap: u32) -> u32 {
    let rows = nonzero(row_count).unwrap_or(1);
    base_row_height
        .saturating_mul(rows)
        .saturating_add(row_gap.saturating_mul(rows - 1))
}

/// Computes the input height for the row span resolved at `viewport_width`.
pub fn resolve_field_height_at(
    options: &GridOptions,
    grid: &GridSettings,
    viewport_width: u32,
) -> u32 {
    resolve_field(options, grid, Some(viewport_width)).height
}

/// Resolves placement and height, at `viewport_width` if given.
pub fn resolve_field(
    options: &GridOptions,
    grid: &GridSettings,
    viewport_width: Option<u32>,
) -> FieldLayout {
    let placement = match viewport_width {
        Some(width) => resolve_placement_at(options, grid.default_field_columns, width),
        None => resolve_placement(options, grid.default_field_columns),
    };
    FieldLayout {
        placement,
        height: resolve_height(Some(placement.row_span), grid.fields_height, grid.row_gap),
    }
}

/// Renders the placement rules of a field container as CSS declarations.
///
/// The base placement comes first, followed by one media query per
/// breakpoint holding only the properties that breakpoint sets.
///
/// ```
/// use gridform_core::grid::{Breakpoint, GridOptions};
/// use gridform_forms::layout::placement_css;
///
/// let options = GridOptions::at(2, 1).breakpoint(Breakpoint::max_width(480).column_start(1));
/// let css = placement_css(&options, 1);
/// assert!(css.starts_with("grid-column-start: 2;\n"));
/// assert!(css.contains("@media (max-width: 480px) {\n  grid-column-start: 1;\n}\n"));
/// ```
pub fn placement_css(options: &GridOptions, default_span_columns: u32) -> String {
    let base = resolve_placement(options, default_span_columns);
    let mut css = String::new();
    let _ = writeln!(css, "grid-column-start: {};", base.column_start);
    let _ = writeln!(css, "grid-row-start: {};", base.row_start);
    let _ = writeln!(css, "grid-column-end: span {};", base.column_span);
    let _ = writeln!(css, "grid-row-end: span {};", base.row_span);

    for bp in &options.responsive {
        let mut rules = Vec::new();
        if let Some(column_start) = bp.column_start {
            rules.push(format!("grid-column-start: {column_start};"));
        }
        if let Some(row_start) = bp.row_start {
            rules.push(format!("grid-row-start: {row_start};"));
        }
        if let Some(columns) = nonzero(bp.columns) {
            rules.push(format!("grid-column-end: span {columns};"));
        }
        if let Some(rows) = nonzero(bp.rows) {
            rules.push(format!("grid-row-end: span {rows};"));
        }
        write_media_block(&mut css, bp.breakpoint, &rules);
    }
    css
}

/// Renders the height rules of an input as CSS declarations.
///
/// Breakpoints that do not change the row span produce no rule, so the
/// cascade keeps the height of the base layout or an earlier breakpoint.
/// This differs from emitting a one-row height for every breakpoint, which
/// would shrink a multi-row input whenever a breakpoint only moves it.
pub fn height_css(options: &GridOptions, grid: &GridSettings) -> String {
    let mut css = String::new();
    let _ = writeln!(
        css,
        "height: {}px;",
        resolve_height(options.rows, grid.fields_height, grid.row_gap)
    );
    for bp in &options.responsive {
        if let Some(rows) = nonzero(bp.rows) {
            let height = resolve_height(Some(rows), grid.fields_height, grid.row_gap);
            write_media_block(&mut css, bp.breakpoint, &[format!("height: {height}px;")]);
        }
    }
    css
}

fn write_media_block(css: &mut String, max_width: u32, rules: &[String]) {
    if rules.is_empty() {
        return;
    }
    let _ = writeln!(css, "@media (max-width: {max_width}px) {{");
    for rule in rules {
        let _ = writeln!(css, "  {rule}");
    }
    css.push_str("}\n");
}

fn nonzero(value: Option<u32>) -> Option<u32> {
    value.filter(|&n| n > 0)
}
