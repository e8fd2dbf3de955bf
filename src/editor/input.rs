//! Shared prompt-and-validate helpers for the interactive loop.
//!
//! Every prompt goes through one of these functions so that non-empty and
//! numeric-range validation live in a single place instead of being repeated
//! at each call site. `Ok(None)` uniformly means "no usable value": either
//! end of input or a validation failure that has already been reported.

use std::io::{self, BufRead, Write};

/// Prints `prompt` and reads one line, with the terminator stripped.
/// Returns `None` at end of input.
pub fn prompt_line(
    input: &mut impl BufRead,
    output: &mut impl Write,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(Some(line))
}

/// Prompts for a line that must be non-empty after trimming. An empty
/// answer is reported and yields `None`.
pub fn prompt_nonempty(
    input: &mut impl BufRead,
    output: &mut impl Write,
    prompt: &str,
) -> io::Result<Option<String>> {
    let Some(line) = prompt_line(input, output, prompt)? else {
        return Ok(None);
    };
    let trimmed = line.trim();
    if trimmed.is_empty() {
        writeln!(output, "Invalid input. A non-empty value is required.")?;
        return Ok(None);
    }
    Ok(Some(trimmed.to_string()))
}

/// Prompts for a 1-indexed position within `1..=max`. Non-numeric input and
/// out-of-range numbers are reported and yield `None`.
pub fn prompt_position(
    input: &mut impl BufRead,
    output: &mut impl Write,
    prompt: &str,
    max: usize,
) -> io::Result<Option<usize>> {
    let Some(line) = prompt_line(input, output, prompt)? else {
        return Ok(None);
    };
    let trimmed = line.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        writeln!(output, "Invalid input. Please enter a number.")?;
        return Ok(None);
    }
    match trimmed.parse::<usize>() {
        Ok(position) if (1..=max).contains(&position) => Ok(Some(position)),
        _ => {
            writeln!(output, "Invalid line number.")?;
            Ok(None)
        }
    }
}

/// Asks a yes/no question; `y` or `yes` (case-insensitive) means yes.
/// End of input counts as no.
pub fn confirm(
    input: &mut impl BufRead,
    output: &mut impl Write,
    prompt: &str,
) -> io::Result<bool> {
    let Some(line) = prompt_line(input, output, prompt)? else {
        return Ok(false);
    };
    let answer = line.trim();
    Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
}
