//! `ziglight check`: fail on tokens the highlighter would mark as errors.

use std::io::Write;

use ziglight_lexer::{LineIndex, SourceBuffer, Token, Tokenizer};

use super::{quote, read_file};
use crate::CliError;

/// Report every invalid token in a file.
///
/// Returns [`CliError::InvalidTokens`] if there is at least one.
pub fn check_file(path: &str, out: &mut impl Write) -> Result<(), CliError> {
    let source = read_file(path)?;
    let lines = LineIndex::new(&source);
    let invalid = check_source(&source);

    for tok in &invalid {
        let (line, col) = lines.line_col(tok.start);
        writeln!(
            out,
            "{path}:{line}:{col}: {} {}",
            tok.tag.name(),
            quote(tok.bytes(&source))
        )?;
    }

    if invalid.is_empty() {
        writeln!(out, "{path}: ok")?;
        Ok(())
    } else {
        Err(CliError::InvalidTokens {
            path: path.to_owned(),
            count: invalid.len(),
        })
    }
}

/// The `invalid` and `invalid_periodasterisks` tokens of `source`, in order.
pub fn check_source(source: &[u8]) -> Vec<Token> {
    let buf = SourceBuffer::new(source);
    Tokenizer::new(&buf).filter(|tok| tok.tag.is_error()).collect()
}
