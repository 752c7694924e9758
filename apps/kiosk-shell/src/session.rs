//! # Session
//!
//! One mounted cart plus the catalog and config it is shown with.
//!
//! ## Event Loop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  read line ──► Command::parse ──► Session::handle ──► write output     │
//! │      ▲                                   │                              │
//! │      └───────────── Flow::Continue ──────┘                              │
//! │                                                                         │
//! │  Flow::Quit or EOF ──► store.unmount()                                 │
//! │                                                                         │
//! │  Each line runs to completion before the next one is read.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use kiosk_core::{Cart, CartAction, CartStore, Catalog};

use crate::commands::{ActionRequest, Command};
use crate::config::ShellConfig;
use crate::error::ShellResult;
use crate::view::{render_catalog, render_help, render_summary};

/// What the loop does after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Session {
    catalog: Catalog,
    store: CartStore,
    config: ShellConfig,
}

impl Session {
    /// Mounts an empty cart.
    pub fn new(catalog: Catalog, config: ShellConfig) -> Self {
        Session {
            catalog,
            store: CartStore::mount(),
            config,
        }
    }

    pub fn store(&self) -> &CartStore {
        &self.store
    }

    /// Runs one input line.
    pub fn handle<W: Write>(&mut self, line: &str, out: &mut W) -> ShellResult<Flow> {
        let command = match Command::parse(line)? {
            Some(command) => command,
            None => return Ok(Flow::Continue),
        };
        debug!(?command, "command parsed");

        match command {
            Command::Add(name) => {
                let product = self.catalog.get(&name)?;
                self.store.add(product);
                self.print_summary(out)?;
            }
            Command::Remove(name) => {
                let product = self.catalog.get(&name)?;
                self.store.remove(product);
                self.print_summary(out)?;
            }
            Command::Action(json) => {
                let action = self.resolve(ActionRequest::from_json(&json)?)?;
                self.store.dispatch(&action);
                self.print_summary(out)?;
            }
            Command::Show => self.print_summary(out)?,
            Command::Catalog => render_catalog(out, &self.catalog, &self.config.currency)?,
            Command::Config => {
                serde_json::to_writer_pretty(&mut *out, &self.config).map_err(io::Error::from)?;
                writeln!(out)?;
            }
            Command::Help => render_help(out)?,
            Command::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }

    /// Reads lines from `input` until `quit` or EOF, then unmounts.
    ///
    /// Non-fatal errors are printed and the loop goes on. A line that is
    /// not UTF-8 is one of them; only a failing stream ends the loop.
    pub fn run<R: BufRead, W: Write>(mut self, mut input: R, out: &mut W) -> ShellResult<Cart> {
        self.prompt(out)?;

        let mut raw = Vec::new();
        loop {
            raw.clear();
            if input.read_until(b'\n', &mut raw)? == 0 {
                break;
            }

            let flow = match decode_line(&raw) {
                Ok(line) => self.handle(&line, out),
                Err(e) => Err(e),
            };
            match flow {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => {}
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => {
                    let text = String::from_utf8_lossy(&raw);
                    warn!(error = %e, input = %text.trim_end(), "command failed");
                    writeln!(out, "error: {}", e)?;
                }
            }
            self.prompt(out)?;
        }

        Ok(self.store.unmount())
    }

    /// Turns an action request into a `CartAction` carrying the catalog
    /// entry of the named product, so only catalog products reach the cart.
    fn resolve(&self, request: ActionRequest) -> ShellResult<CartAction> {
        let action = match request {
            ActionRequest::Add { product } => CartAction::add(self.catalog.get(&product.name)?),
            ActionRequest::Remove { product } => {
                CartAction::remove(self.catalog.get(&product.name)?)
            }
            ActionRequest::Unknown => CartAction::Unknown,
        };
        Ok(action)
    }

    fn print_summary<W: Write>(&self, out: &mut W) -> ShellResult<()> {
        render_summary(out, &self.store.summary(), &self.config.currency)?;
        Ok(())
    }

    fn prompt<W: Write>(&self, out: &mut W) -> ShellResult<()> {
        write!(out, "{}", self.config.prompt)?;
        out.flush()?;
        Ok(())
    }
}

/// Decodes one raw line and drops its `\n` or `\r\n` terminator.
fn decode_line(raw: &[u8]) -> ShellResult<String> {
    let mut line = String::from_utf8(raw.to_vec())?;
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}
