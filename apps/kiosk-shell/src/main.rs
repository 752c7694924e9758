//! # Kiosk Shell Entry Point
//!
//! ```text
//! $ kiosk-shell
//! > add ice cream
//! Shopping Cart: 1 total items.
//! Total: 5.00
//! > add donuts
//! Shopping Cart: 2 total items.
//! Total: 7.50
//! > quit
//! ```
//!
//! The actual setup is in lib.rs for better testability.

use std::process::ExitCode;

fn main() -> ExitCode {
    match kiosk_shell::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("kiosk-shell: {}", e);
            ExitCode::FAILURE
        }
    }
}
