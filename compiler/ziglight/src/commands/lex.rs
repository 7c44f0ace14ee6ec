//! `ziglight lex`: dump the token stream.

use std::io::Write;

use ziglight_lexer::{LineIndex, SourceBuffer, Tag, Tokenizer};

use super::{quote, read_file};
use crate::CliError;

/// Lex a file and print one line per token, ending with `eof`.
pub fn lex_file(path: &str, out: &mut impl Write) -> Result<(), CliError> {
    let source = read_file(path)?;
    writeln!(out, "Tokens for '{path}':")?;
    lex_source(&source, out)?;
    Ok(())
}

/// Print the tokens of `source` as `line:col tag "text"`.
pub fn lex_source(source: &[u8], out: &mut impl Write) -> std::io::Result<()> {
    let buf = SourceBuffer::new(source);
    let lines = LineIndex::new(source);
    let mut tokenizer = Tokenizer::new(&buf);
    loop {
        let tok = tokenizer.next_token();
        let (line, col) = lines.line_col(tok.start);
        writeln!(
            out,
            "  {line}:{col} {} {}",
            tok.tag.name(),
            quote(tok.bytes(source))
        )?;
        if tok.tag == Tag::Eof {
            return Ok(());
        }
    }
}
