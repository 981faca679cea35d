//! Narrative input from flags, files or stdin.

use crate::cli::InputArgs;
use crate::error::{CliError, Result};
use std::fs;
use std::io::Read;

/// Read the narrative named by `args`, falling back to `stdin`.
///
/// Blank text is rejected before any synthesis runs.
pub fn read_text<R: Read>(args: &InputArgs, mut stdin: R) -> Result<String> {
    let text = match (&args.text, &args.file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => fs::read_to_string(path)?,
        (None, None) => {
            let mut buffer = String::new();
            stdin.read_to_string(&mut buffer)?;
            buffer
        }
    };

    if text.trim().is_empty() {
        return Err(CliError::EmptyInput);
    }
    Ok(text)
}
