//! Reads a `VALUES` payload back into its tuples.
//!
//! Accepts exactly the shape the builder writes: `('a','b'),('c','d')` with
//! single-quoted fields and `''` as an escaped quote. Anything else (bare
//! words, stray characters, an unterminated literal, a trailing comma) is
//! rejected, which is how the insert path catches a payload that was
//! tampered with or built without escaping.

use std::iter::Peekable;
use std::str::CharIndices;

use crate::shared::errors::{AppError, AppResult};

pub fn parse_payload(payload: &str) -> AppResult<Vec<Vec<String>>> {
    let mut parser = Parser {
        chars: payload.char_indices().peekable(),
    };
    let mut tuples = Vec::new();

    if payload.is_empty() {
        return Ok(tuples);
    }

    loop {
        tuples.push(parser.tuple()?);
        match parser.chars.next() {
            None => return Ok(tuples),
            Some((_, ',')) => continue,
            Some((at, c)) => return Err(malformed(at, &format!("expected ',' but found {c:?}"))),
        }
    }
}

/// Parse `payload` and confirm it holds `expected_tuples` tuples of `arity`
/// fields each
pub fn verify_payload(payload: &str, expected_tuples: usize, arity: usize) -> AppResult<()> {
    let tuples = parse_payload(payload)?;

    if tuples.len() != expected_tuples {
        return Err(AppError::InvalidInput(format!(
            "Payload holds {} tuples but {} records were composed",
            tuples.len(),
            expected_tuples
        )));
    }
    if let Some((index, tuple)) = tuples.iter().enumerate().find(|(_, t)| t.len() != arity) {
        return Err(AppError::InvalidInput(format!(
            "Tuple {} has {} fields, expected {}",
            index + 1,
            tuple.len(),
            arity
        )));
    }

    Ok(())
}

struct Parser<'a> {
    chars: Peekable<CharIndices<'a>>,
}

impl Parser<'_> {
    fn tuple(&mut self) -> AppResult<Vec<String>> {
        self.expect('(')?;
        let mut fields = vec![self.literal()?];

        loop {
            match self.chars.next() {
                Some((_, ',')) => fields.push(self.literal()?),
                Some((_, ')')) => return Ok(fields),
                Some((at, c)) => {
                    return Err(malformed(at, &format!("expected ',' or ')' but found {c:?}")))
                }
                None => return Err(malformed_end("unterminated tuple")),
            }
        }
    }

    fn literal(&mut self) -> AppResult<String> {
        self.expect('\'')?;
        let mut value = String::new();

        loop {
            match self.chars.next() {
                Some((_, '\'')) => {
                    if matches!(self.chars.peek(), Some((_, '\''))) {
                        self.chars.next();
                        value.push('\'');
                    } else {
                        return Ok(value);
                    }
                }
                Some((_, c)) => value.push(c),
                None => return Err(malformed_end("unterminated string literal")),
            }
        }
    }

    fn expect(&mut self, expected: char) -> AppResult<()> {
        match self.chars.next() {
            Some((_, c)) if c == expected => Ok(()),
            Some((at, c)) => Err(malformed(at, &format!("expected {expected:?} but found {c:?}"))),
            None => Err(malformed_end(&format!("expected {expected:?}"))),
        }
    }
}

fn malformed(at: usize, detail: &str) -> AppError {
    AppError::InvalidInput(format!("Malformed payload at byte {}: {}", at, detail))
}

fn malformed_end(detail: &str) -> AppError {
    AppError::InvalidInput(format!("Malformed payload at end of input: {}", detail))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_payload_has_no_tuples() {
        assert!(parse_payload("").unwrap().is_empty());
    }

    #[test]
    fn doubled_quotes_unescape() {
        let tuples = parse_payload("('O''Brien','x'),('a','')").unwrap();
        assert_eq!(tuples, vec![vec!["O'Brien", "x"], vec!["a", ""]]);
    }

    #[test]
    fn unescaped_quote_breaks_the_tuple() {
        // A raw O'Brien closes the literal early and leaves `Brien'` behind
        assert!(parse_payload("('O'Brien','x')").is_err());
    }

    #[test]
    fn verify_checks_count_and_arity() {
        assert!(verify_payload("('a','b'),('c','d')", 2, 2).is_ok());
        assert!(verify_payload("('a','b'),('c','d')", 1, 2).is_err());
        assert!(verify_payload("('a','b'),('c')", 2, 2).is_err());
        assert!(verify_payload("", 0, 3).is_ok());
    }

    #[test]
    fn rejects_trailing_separator_and_injected_statements() {
        assert!(parse_payload("('a','b'),").is_err());
        assert!(parse_payload("('a','b'); DROP TABLE students").is_err());
        assert!(parse_payload("(a,'b')").is_err());
        assert!(parse_payload("('a'").is_err());
    }
}
