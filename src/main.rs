//! Toolbox CLI entry point.

use std::process::ExitCode;

use toolbox::cli::{builtin_commands, report_error, CommandDispatcher};
use toolbox::shell::{is_ci, SystemShell};
use toolbox::ui::create_ui;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `TOOLBOX_DEBUG=1` sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
fn init_tracing() {
    let debug = std::env::var("TOOLBOX_DEBUG").is_ok_and(|v| v == "1");
    let filter = if debug {
        EnvFilter::new("toolbox=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("toolbox=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    init_tracing();

    let argv: Vec<String> = std::env::args().collect();
    tracing::debug!("Toolbox starting with args: {:?}", argv);

    let project_root = std::env::current_dir().unwrap_or_default();
    let shell = SystemShell::new(&project_root);
    let mut ui = create_ui(!is_ci());

    let commands = builtin_commands();
    let dispatcher = CommandDispatcher::new(&commands, project_root);

    match dispatcher.dispatch(&argv, &shell, ui.as_mut()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(&e, ui.as_mut());
            ExitCode::from(e.exit_code() as u8)
        }
    }
}
