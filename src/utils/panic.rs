use std::{panic, process};

use better_panic::Settings;
use color_eyre::{config::HookBuilder, eyre::Result};
use tracing::error;

use crate::infrastructure::tui::{real::RealTui, TuiLike};

/// Installs color-eyre hooks and a panic hook that restores the terminal
/// before anything is printed.
pub fn initialize_panic_handler() -> Result<()> {
    let (panic_hook, eyre_hook) = HookBuilder::default()
        .panic_section(format!(
            "This is a bug. Consider reporting it to the {} maintainers",
            env!("CARGO_PKG_NAME")
        ))
        .capture_span_trace_by_default(false)
        .display_location_section(false)
        .display_env_section(false)
        .into_hooks();
    eyre_hook.install()?;

    panic::set_hook(Box::new(move |panic_info| {
        match RealTui::new() {
            Ok(mut tui) => {
                if let Err(e) = tui.exit() {
                    error!("Unable to restore terminal: {e:?}");
                }
            }
            Err(e) => error!("Unable to open terminal for restore: {e:?}"),
        }

        #[cfg(not(debug_assertions))]
        {
            use human_panic::{handle_dump, print_msg, Metadata};
            let meta = Metadata::new(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
                .authors(env!("CARGO_PKG_AUTHORS").replace(':', ", "));

            let file_path = handle_dump(&meta, panic_info);
            if print_msg(file_path, &meta).is_err() {
                eprintln!("human-panic: printing error message to console failed");
            }
            eprintln!("{}", panic_hook.panic_report(panic_info));
        }

        let report = format!("{}", panic_hook.panic_report(panic_info));
        log::error!("Panic: {}", strip_ansi_escapes::strip_str(report));

        // Full backtrace only in debug builds
        #[cfg(debug_assertions)]
        {
            Settings::auto()
                .most_recent_first(false)
                .lineno_suffix(true)
                .verbosity(better_panic::Verbosity::Full)
                .create_panic_handler()(panic_info);
        }

        process::exit(libc::EXIT_FAILURE);
    }));
    Ok(())
}
