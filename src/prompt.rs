//! Line-oriented console input helpers.
//!
//! Both session drivers speak a fixed prompt-then-read protocol over
//! generic `BufRead`/`Write` streams, which keeps them testable against
//! in-memory buffers. Numeric parse failures are fatal by contract: they
//! surface as [`TellerError::MalformedInput`] and abort the session.

use crate::error::{Result, TellerError};
use std::io::{BufRead, Write};
use std::str::FromStr;

/// Writes a prompt and flushes so it appears before the blocking read.
pub fn prompt<W: Write>(output: &mut W, text: &str) -> Result<()> {
    output.write_all(text.as_bytes())?;
    output.flush()?;
    Ok(())
}

/// Reads one line, stripping the trailing line terminator.
///
/// Returns [`TellerError::InputClosed`] if the stream is exhausted.
pub fn read_line<R: BufRead>(input: &mut R) -> Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(TellerError::InputClosed);
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(line)
}

/// Writes a prompt, then reads one line.
pub fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    text: &str,
) -> Result<String> {
    prompt(output, text)?;
    read_line(input)
}

/// Writes a prompt, reads one line, and parses it as `T`.
///
/// `expected` names the field in the fatal error ("menu choice",
/// "amount", "quantity").
pub fn prompt_parse<T, R, W>(
    input: &mut R,
    output: &mut W,
    text: &str,
    expected: &'static str,
) -> Result<T>
where
    T: FromStr,
    R: BufRead,
    W: Write,
{
    let line = prompt_line(input, output, text)?;
    line.trim()
        .parse()
        .map_err(|_| TellerError::MalformedInput {
            expected,
            input: line,
        })
}
