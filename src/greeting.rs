use std::io::Write;

use thiserror::Error;

/// Placeholder used when no display name is given.
pub const DEFAULT_NAME: &str = "World";

#[derive(Debug, Error)]
pub enum GreetingError {
    #[error("Writing greeting failed!")]
    Write(#[from] std::io::Error),
}

/// Builds the greeting line for `name`, falling back to [`DEFAULT_NAME`].
///
/// The name is taken verbatim, there is no validation or trimming.
pub fn greeting(name: Option<&str>) -> String {
    let name = name.unwrap_or(DEFAULT_NAME);
    format!("Hello, {name}!")
}

/// Writes the greeting for `name` to `output`, followed by a newline.
///
/// Each call emits exactly one line.
///
/// # Errors
///
/// Returns [`GreetingError::Write`] if the output stream rejects the write.
pub fn greet<W: Write>(output: &mut W, name: Option<&str>) -> Result<(), GreetingError> {
    writeln!(output, "{}", greeting(name))?;
    Ok(())
}
