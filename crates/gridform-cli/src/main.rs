use std::process::ExitCode;

use gridform_cli::command::CommandRegistry;
use gridform_cli::commands::register_builtin_commands;
use gridform_core::logging::setup_logging;
use gridform_core::settings_loader;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let mut registry = CommandRegistry::new();
    register_builtin_commands(&mut registry);
    let matches = registry.build_cli().get_matches();

    setup_logging(&settings_loader::from_env());

    let mut stdout = std::io::stdout();
    let status = registry.execute(&matches, &mut stdout).await?;
    Ok(status.into())
}
