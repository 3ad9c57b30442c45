//! Prompting and line handling.

use std::io::{BufRead, Write};

use log::debug;
use zeroize::Zeroizing;

use crate::constants::{PROMPT, RESULT_LABEL};
use crate::errors::CliError;
use pwhash_core::PasswordEncoder;

/// Initial line buffer size; lines within it are read without reallocating.
const LINE_CAPACITY: usize = 4096;

/// Print the prompt and read one password line.
///
/// The line terminator (`\n` or `\r\n`) is stripped; everything else,
/// including leading and trailing spaces, is part of the password. Bytes
/// that are not valid UTF-8 become U+FFFD rather than failing the read.
pub fn prompt_password<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> anyhow::Result<Zeroizing<String>> {
    writeln!(output, "{}", PROMPT)?;
    output.flush()?;

    let mut line = Zeroizing::new(Vec::<u8>::with_capacity(LINE_CAPACITY));
    let read = input
        .read_until(b'\n', &mut line)
        .map_err(|e| anyhow::anyhow!("Failed to read password: {}", e))?;
    if read == 0 {
        return Err(CliError::invalid_input(
            "No password provided on standard input",
            "Hint: type the password and press Enter, or pipe one line into pwhash.",
        )
        .into());
    }

    strip_line_ending(&mut line);
    let password = Zeroizing::new(String::from_utf8_lossy(&line).into_owned());
    debug!("Read password ({} bytes)", password.len());
    Ok(password)
}

/// Prompt, read, encode and print the labelled result.
pub fn run<R: BufRead, W: Write>(
    encoder: &PasswordEncoder,
    input: &mut R,
    output: &mut W,
) -> anyhow::Result<()> {
    let password = prompt_password(input, output)?;
    let encoded = encoder.encode(&password).map_err(CliError::from)?;
    writeln!(output, "{} {}", RESULT_LABEL, encoded)?;
    output.flush()?;
    Ok(())
}

fn strip_line_ending(line: &mut Vec<u8>) {
    if line.last() == Some(&b'\n') {
        line.pop();
        if line.last() == Some(&b'\r') {
            line.pop();
        }
    }
}
