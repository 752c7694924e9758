//! # Kiosk Shell Library
//!
//! Text-mode presentation layer for the kiosk cart.
//!
//! ## Module Organization
//! ```text
//! kiosk_shell/
//! ├── lib.rs          ◄─── You are here (logging setup & run)
//! ├── config.rs       ◄─── ShellConfig from KIOSK_* variables
//! ├── commands.rs     ◄─── Input line ──► Command
//! ├── session.rs      ◄─── Catalog + CartStore event loop
//! ├── view.rs         ◄─── Summary / catalog / help rendering
//! └── error.rs        ◄─── ShellError
//! ```
//!
//! stdout carries the cart display, stderr carries logs.

pub mod commands;
pub mod config;
pub mod error;
pub mod session;
pub mod view;

use std::io;

use tracing::info;
use tracing_subscriber::EnvFilter;

use kiosk_core::Catalog;

use config::ShellConfig;
use error::ShellResult;
use session::Session;

/// Runs the shell on stdin/stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Load ShellConfig (defaults + KIOSK_* variables)                    │
/// │  2. Initialize logging (RUST_LOG, else KIOSK_LOG, else default)        │
/// │  3. Build the standard catalog                                          │
/// │  4. Mount the cart and read commands until quit / EOF                  │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> ShellResult<()> {
    let config = ShellConfig::from_env()?;
    init_tracing(&config.log_filter);

    info!("Starting kiosk shell");

    let catalog = Catalog::standard();
    info!(products = catalog.len(), "Catalog loaded");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let cart = Session::new(catalog, config).run(stdin.lock(), &mut out)?;
    info!(lines = cart.len(), total = %cart.total(), "Session closed");

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=kiosk_core=trace` - Trace the cart store only
/// - Default: `fallback`, normally [`config::DEFAULT_LOG_FILTER`]
fn init_tracing(fallback: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
