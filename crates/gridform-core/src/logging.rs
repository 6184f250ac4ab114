//! Logging integration for gridform.
//!
//! Provides helpers for configuring [`tracing`]-based logging from
//! [`FormSettings`](crate::settings::FormSettings) and for creating
//! per-submission spans.

use tracing_subscriber::EnvFilter;

use crate::settings::FormSettings;

/// Installs the global tracing subscriber described by `settings`.
///
/// Debug mode logs compact lines for a terminal. Otherwise each event is one
/// flattened JSON object carrying its enclosing span, so a submission's
/// `form` field lands on every line it logged. Output goes to stderr, leaving
/// stdout to command reports.
///
/// Returns `false` if a subscriber was already installed, in which case
/// nothing changes.
pub fn setup_logging(settings: &FormSettings) -> bool {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(log_filter(&settings.log_level))
        .with_writer(std::io::stderr);

    let installed = if settings.debug {
        builder.compact().with_target(false).try_init().is_ok()
    } else {
        builder
            .json()
            .flatten_event(true)
            .with_current_span(true)
            .with_span_list(false)
            .try_init()
            .is_ok()
    };
    if installed {
        tracing::debug!(level = %settings.log_level, json = !settings.debug, "logging ready");
    }
    installed
}

/// Parses a level or filter directive, falling back to `info`.
fn log_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Creates a tracing span for one submit attempt.
///
/// Everything logged while validating, dispatching and resetting the form
/// carries the form title.
///
/// # Examples
///
/// ```
/// use gridform_core::logging::submission_span;
///
/// let span = submission_span("Contact");
/// let _guard = span.enter();
/// tracing::info!("submitting");
/// ```
pub fn submission_span(form_title: &str) -> tracing::Span {
    tracing::info_span!("submission", form = form_title)
}
