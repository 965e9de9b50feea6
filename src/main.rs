//! # Say hello
//!
//! Tiny greeting demo written in Rust.
//!
//! # Output:
//!
//! - `Hello, World!`
//! - `Hello, Alice!`
//!
//! Diagnostics go to stderr, tuned with **RUST_LOG** default: info.

use std::io;
use std::process;

use anyhow::{Context, Result};
use env_logger::{Builder, Env};
use log::{debug, error};

mod greeting;

use greeting::DEFAULT_NAME;

const GUEST_NAME: &str = "Alice";

/// Emits the two demo greetings on standard output.
///
/// Standard output stays locked for both writes, so the lines always land
/// in call order.
///
/// # Errors
///
/// Returns an error if either greeting cannot be written to standard output.
fn run() -> Result<()> {
    let stdout = io::stdout();
    let mut output = stdout.lock();

    debug!("Greeting {}.", DEFAULT_NAME);
    greeting::greet(&mut output, None).context("Default greeting failed!")?;

    debug!("Greeting {}.", GUEST_NAME);
    greeting::greet(&mut output, Some(GUEST_NAME))
        .with_context(|| format!("Greeting {GUEST_NAME} failed!"))?;

    Ok(())
}

fn logger_init() {
    let env = Env::default().filter_or("RUST_LOG", "info");
    Builder::from_env(env).init();
}

fn main() {
    logger_init();
    match run() {
        Ok(_) => (),
        Err(err_msg) => {
            error!("Error: {}", err_msg);
            process::exit(1);
        }
    }
}
