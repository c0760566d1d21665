//! Interactive field prompts
//!
//! Each prompt loops until the user supplies a valid value, printing a
//! diagnostic and asking again on bad input. The functions are generic over
//! the streams so tests can drive the loops with in-memory buffers; the
//! session binds them to locked stdin/stdout.

use gradebook_core::Category;
use std::io::{self, BufRead, Write};

/// Print the prompt, read one line, return it trimmed.
///
/// A closed input stream surfaces as `UnexpectedEof`: the re-prompt loops
/// are unbounded and cannot make progress without more input.
fn read_trimmed<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> io::Result<String> {
    write!(out, "{prompt}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed while waiting for a value",
        ));
    }
    Ok(line.trim().to_owned())
}

/// Prompt until a non-empty value is entered.
pub fn prompt_non_empty<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> io::Result<String> {
    loop {
        let value = read_trimmed(input, out, prompt)?;
        if !value.is_empty() {
            return Ok(value);
        }
        writeln!(out, "Value cannot be empty.")?;
    }
}

/// Prompt until the category code parses as FA or SA.
pub fn prompt_category<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<Category> {
    loop {
        let raw = read_trimmed(input, out, "Category (FA/SA): ")?;
        match raw.parse::<Category>() {
            Ok(category) => return Ok(category),
            Err(_) => writeln!(out, "Category must be 'FA' or 'SA'")?,
        }
    }
}

/// Prompt until a grade in [0, 100] is entered. Parse failures and range
/// failures share one diagnostic.
pub fn prompt_grade<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<f64> {
    loop {
        let raw = read_trimmed(input, out, "Grade (0-100): ")?;
        match raw.parse::<f64>() {
            Ok(grade) if (0.0..=100.0).contains(&grade) => return Ok(grade),
            _ => writeln!(out, "Grade must be between 0 and 100")?,
        }
    }
}

/// Prompt until a finite, strictly positive weight is entered.
pub fn prompt_weight<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<f64> {
    loop {
        let raw = read_trimmed(input, out, "Weight (> 0): ")?;
        match raw.parse::<f64>() {
            Ok(weight) if weight.is_finite() && weight > 0.0 => return Ok(weight),
            _ => writeln!(out, "Weight must be a positive number")?,
        }
    }
}

/// Ask whether to enter another record.
pub fn prompt_continue<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<bool> {
    loop {
        let raw = read_trimmed(input, out, "Add another assignment? (y/n): ")?;
        match raw.to_ascii_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => writeln!(out, "Please enter 'y' or 'n'.")?,
        }
    }
}
