//! Console input: raw lines and the integer prompt.
//!
//! Reading stops at end of input instead of spinning on an empty stream:
//! callers see `None` and decide how to wind down.

use std::io::{self, BufRead, Write};
use std::num::ParseIntError;

use log::{debug, warn};

use crate::messages::NOT_AN_INTEGER;

/// Result of prompting for an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberReply {
    /// The accepted integer, or `None` if input ended first.
    pub value: Option<i32>,
    /// How many lines were rejected before the reply.
    pub rejected: usize,
}

/// Read one line, without its `\n` or `\r\n` terminator.
///
/// Returns `Ok(None)` at end of input.
///
/// # Errors
/// Returns an error if the reader fails.
pub fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(Some(line))
}

/// Parse a console line as a 32-bit integer.
///
/// Surrounding whitespace is ignored; anything else that is not a plain
/// integer in range ("3.5", "abc", "", "99999999999") is an error.
pub fn parse_number(text: &str) -> Result<i32, ParseIntError> {
    text.trim().parse::<i32>()
}

/// Prompt until a line parses as an integer.
///
/// Writes `prompt` before every attempt and [`NOT_AN_INTEGER`] after every
/// rejected line. Never gives up on malformed text; only end of input stops
/// it early.
///
/// # Errors
/// Returns an error if reading or writing fails.
pub fn prompt_number<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<NumberReply> {
    let mut rejected = 0;

    loop {
        writeln!(output, "{}", prompt)?;
        output.flush()?;

        let Some(line) = read_line(input)? else {
            warn!("Input closed while waiting for a number");
            return Ok(NumberReply {
                value: None,
                rejected,
            });
        };

        match parse_number(&line) {
            Ok(value) => {
                return Ok(NumberReply {
                    value: Some(value),
                    rejected,
                });
            }
            Err(e) => {
                debug!("Rejected {:?}: {}", line, e);
                rejected += 1;
                writeln!(output, "{}", NOT_AN_INTEGER)?;
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const PROMPT: &str = "¿De qué número desea las tablas?: ";

    fn prompt_with(input: &str) -> (NumberReply, String) {
        let mut output = Vec::new();
        let reply = prompt_number(&mut input.as_bytes(), &mut output, PROMPT).unwrap();
        (reply, String::from_utf8(output).unwrap())
    }

    #[test]
    fn read_line_strips_terminators() {
        let mut input = "uno\r\ndos\ntres".as_bytes();
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("uno"));
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("dos"));
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("tres"));
        assert_eq!(read_line(&mut input).unwrap(), None);
    }

    #[test]
    fn read_line_keeps_inner_whitespace() {
        let mut input = " s \n".as_bytes();
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some(" s "));
    }

    #[test]
    fn read_line_empty_line_is_not_eof() {
        let mut input = "\n".as_bytes();
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some(""));
    }

    #[rstest]
    #[case("7", 7)]
    #[case("0", 0)]
    #[case("-12", -12)]
    #[case("  42 ", 42)]
    #[case("+3", 3)]
    #[case("2147483647", i32::MAX)]
    fn parse_number_accepts_integers(#[case] text: &str, #[case] expected: i32) {
        assert_eq!(parse_number(text), Ok(expected));
    }

    #[rstest]
    #[case("abc")]
    #[case("3.5")]
    #[case("")]
    #[case("7a")]
    #[case("2147483648")]
    #[case("1 2")]
    fn parse_number_rejects_non_integers(#[case] text: &str) {
        assert!(parse_number(text).is_err());
    }

    #[test]
    fn prompt_retries_until_integer() {
        let (reply, output) = prompt_with("abc\n3.5\n7\n");

        assert_eq!(reply.value, Some(7));
        assert_eq!(reply.rejected, 2);
        assert_eq!(output.matches(NOT_AN_INTEGER).count(), 2);
        assert_eq!(output.matches(PROMPT).count(), 3);
    }

    #[test]
    fn prompt_interleaves_prompt_and_error() {
        let (_, output) = prompt_with("x\n1\n");
        let expected = format!("{PROMPT}\n{NOT_AN_INTEGER}\n{PROMPT}\n");
        assert_eq!(output, expected);
    }

    #[test]
    fn prompt_accepts_first_valid_line() {
        let (reply, output) = prompt_with("9\nabc\n");

        assert_eq!(reply.value, Some(9));
        assert_eq!(reply.rejected, 0);
        assert!(!output.contains(NOT_AN_INTEGER));
    }

    #[test]
    fn prompt_does_not_consume_past_answer() {
        let mut input = "4\nn\n".as_bytes();
        let mut output = Vec::new();
        prompt_number(&mut input, &mut output, PROMPT).unwrap();

        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("n"));
    }

    #[test]
    fn prompt_gives_up_at_end_of_input() {
        let (reply, output) = prompt_with("abc\n");

        assert_eq!(reply.value, None);
        assert_eq!(reply.rejected, 1);
        assert_eq!(output.matches(PROMPT).count(), 2);
    }
}
