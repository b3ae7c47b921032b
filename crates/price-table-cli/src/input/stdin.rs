use price_table_core::types::LoanInputs;
use std::io::{self, Read};

/// Attempt to read loan inputs as JSON from stdin if data is being piped.
/// Returns None if stdin is a TTY (interactive).
pub fn read_stdin() -> Result<Option<LoanInputs>, Box<dyn std::error::Error>> {
    if atty::is(atty::Stream::Stdin) {
        return Ok(None);
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;

    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let inputs: LoanInputs = serde_json::from_str(trimmed)?;
    Ok(Some(inputs))
}
