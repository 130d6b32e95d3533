//! CLI progress output using cliclack (Charm-style inline prompts)
//!
//! This module is optional and only available when the `tui` feature is enabled.

#[cfg(feature = "tui")]
mod progress;

#[cfg(feature = "tui")]
pub use progress::{resolve_root, run, SetupArgs};

/// Restore the terminal cursor on panic and exit cleanly on Ctrl+C
#[cfg(feature = "tui")]
pub fn install_terminal_guard() {
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore_cursor();
        default_panic(info);
    }));

    ctrlc::set_handler(move || {
        restore_cursor();
        std::process::exit(130);
    })
    .ok();
}

/// Make the cursor visible again (spinners hide it)
#[cfg(feature = "tui")]
pub fn restore_cursor() {
    let _ = console::Term::stderr().show_cursor();
}
