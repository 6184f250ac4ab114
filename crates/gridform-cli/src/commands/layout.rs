//! The `layout` command.
//!
//! Prints where every field lands in the grid and how tall it is, either
//! for the base layout or at a given viewport width.

use std::io::Write;

use async_trait::async_trait;
use gridform_core::FormError;
use gridform_forms::form::InlineForm;

use crate::command::{CommandStatus, FormCommand};

/// Prints the resolved layout of a form config.
pub struct LayoutCommand;

#[async_trait]
impl FormCommand for LayoutCommand {
    fn name(&self) -> &'static str {
        "layout"
    }

    fn help(&self) -> &'static str {
        "Print each field's grid placement and height"
    }

    fn add_arguments(&self, cmd: clap::Command) -> clap::Command {
        cmd.arg(
            clap::Arg::new("config")
                .required(true)
                .value_parser(clap::value_parser!(std::path::PathBuf))
                .help("Form config file (.toml or .json)"),
        )
        .arg(
            clap::Arg::new("width")
                .long("width")
                .short('w')
                .value_parser(clap::value_parser!(u32))
                .help("Viewport width in pixels; breakpoints are ignored when absent"),
        )
    }

    async fn handle(
        &self,
        matches: &clap::ArgMatches,
        out: &mut (dyn Write + Send),
    ) -> Result<CommandStatus, FormError> {
        let form = InlineForm::from_config(super::load_config(matches)?);
        let width = matches.get_one::<u32>("width").copied();

        match width {
            Some(w) => writeln!(out, "Layout of '{}' at {w}px", form.settings().title)?,
            None => writeln!(out, "Layout of '{}'", form.settings().title)?,
        }
        writeln!(out, "container: {}", form.container_style())?;
        writeln!(
            out,
            "{:<20} {:<10} {:>6} {:>4} {:>5} {:>5} {:>7}",
            "FIELD", "KIND", "COLUMN", "ROW", "SPANC", "SPANR", "HEIGHT"
        )?;

        for request in form.render_requests(width) {
            let p = request.placement;
            writeln!(
                out,
                "{:<20} {:<10} {:>6} {:>4} {:>5} {:>5} {:>5}px",
                request.name,
                request.kind,
                p.column_start,
                p.row_start,
                p.column_span,
                p.row_span,
                request.height
            )?;
        }

        let button = form.submit_button(width);
        match button.placement {
            Some(p) => writeln!(
                out,
                "submit '{}' at column {}, row {} (span {}x{})",
                button.text, p.column_start, p.row_start, p.column_span, p.row_span
            )?,
            None => writeln!(out, "submit '{}' placed automatically", button.text)?,
        }
        if !button.style.is_empty() {
            writeln!(out, "submit style: {}", button.style)?;
        }

        Ok(CommandStatus::Success)
    }
}
