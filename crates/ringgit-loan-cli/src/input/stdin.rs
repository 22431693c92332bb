use serde::de::DeserializeOwned;
use std::io::{self, Read};

/// Read loan fields piped as JSON, e.g.
/// `echo '{"loan_amount": "70000", "interest_rate": "3.5", "loan_term": "5"}' | rmloan car`.
///
/// Only consulted when no `--input` file or field flags were given. `None`
/// means nothing was piped (stdin is a terminal or the pipe is empty), in
/// which case every field is treated as blank.
pub fn read_stdin<T: DeserializeOwned>() -> Result<Option<T>, Box<dyn std::error::Error>> {
    if atty::is(atty::Stream::Stdin) {
        return Ok(None);
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;

    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    Ok(Some(serde_json::from_str(trimmed)?))
}
