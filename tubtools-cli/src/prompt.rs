//! Line-oriented prompt helpers. Generic over reader/writer so sessions
//! can be driven from tests with in-memory buffers.

use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::ops::RangeInclusive;

/// Write a prompt (no trailing newline) and read one trimmed line.
/// Returns `None` on end of input.
pub fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> Result<Option<String>> {
    write!(out, "{prompt}").context("Failed to write prompt")?;
    out.flush().context("Failed to flush prompt")?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("Failed to read input")?;
    if read == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

/// Prompt for a number with a default and a plausibility range.
///
/// Empty input (and end of input) accepts the default. An unparseable or
/// out-of-range value prints a field-level error and re-prompts this field
/// only; values are rejected, never clamped.
pub fn prompt_f64<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
    default: f64,
    range: &RangeInclusive<f64>,
) -> Result<f64> {
    let prompt = format!("{label} [default: {default}]: ");

    loop {
        let Some(line) = read_line(input, out, &prompt)? else {
            return Ok(default);
        };

        if line.is_empty() {
            return Ok(default);
        }

        match line.parse::<f64>() {
            Ok(value) if range.contains(&value) => return Ok(value),
            Ok(value) => writeln!(
                out,
                "Value {value} is outside the plausible range {}..{}.",
                range.start(),
                range.end()
            )?,
            Err(_) => writeln!(out, "'{line}' is not a number.")?,
        }
    }
}
