//! Grouping of `\\` multiline string lines into logical literals.
//!
//! The tokenizer emits one `MultilineStringLiteralLine` per physical line and
//! never marks continuation. A literal continues across lines when the only
//! tokens between two lines are indentation: whitespace with no newline in
//! it (each line token already ends with its own `\n`).

use std::ops::Range;

use crate::{Tag, Token};

/// Byte ranges of the logical multiline string literals in `tokens`.
///
/// Each range runs from the first `\\` of the literal to the end of its last
/// line. `source` is the buffer the tokens were produced from.
pub fn multiline_string_groups(tokens: &[Token], source: &[u8]) -> Vec<Range<u32>> {
    let mut groups = Vec::new();
    let mut open: Option<Range<u32>> = None;

    for (i, tok) in tokens.iter().enumerate() {
        match tok.tag {
            Tag::MultilineStringLiteralLine => {
                open.get_or_insert(tok.start..tok.end).end = tok.end;
            }
            Tag::Whitespace
                if open.is_some()
                    && !tok.bytes(source).contains(&b'\n')
                    && tokens
                        .get(i + 1)
                        .is_some_and(|next| next.tag == Tag::MultilineStringLiteralLine) => {}
            _ => {
                if let Some(group) = open.take() {
                    groups.push(group);
                }
            }
        }
    }

    if let Some(group) = open {
        groups.push(group);
    }
    groups
}
