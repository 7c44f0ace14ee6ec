//! `ziglight stats`: token counts per tag.

use std::collections::HashMap;
use std::io::Write;

use ziglight_lexer::{LineIndex, SourceBuffer, Tag, Tokenizer};

use super::read_file;
use crate::CliError;

/// Token counts for one source, ordered for display.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TagCounts {
    /// `(tag, count)`, invalid tags first, then by descending count, then
    /// by tag order.
    pub counts: Vec<(Tag, usize)>,
    /// Total tokens, excluding `eof`.
    pub total: usize,
    pub lines: usize,
}

impl TagCounts {
    pub fn from_source(source: &[u8]) -> Self {
        let buf = SourceBuffer::new(source);
        let mut by_tag: HashMap<Tag, usize> = HashMap::new();
        let mut total = 0;
        for tok in Tokenizer::new(&buf) {
            *by_tag.entry(tok.tag).or_default() += 1;
            total += 1;
        }

        let mut counts: Vec<(Tag, usize)> = by_tag.into_iter().collect();
        counts.sort_by(|(a_tag, a_count), (b_tag, b_count)| {
            b_tag
                .is_error()
                .cmp(&a_tag.is_error())
                .then(b_count.cmp(a_count))
                .then(a_tag.cmp(b_tag))
        });

        TagCounts {
            counts,
            total,
            lines: LineIndex::new(source).line_count(),
        }
    }

    /// Count for `tag`, zero if it never occurred.
    pub fn get(&self, tag: Tag) -> usize {
        self.counts
            .iter()
            .find(|(t, _)| *t == tag)
            .map_or(0, |(_, n)| *n)
    }
}

/// Lex a file and print a per-tag histogram.
pub fn stats_file(path: &str, out: &mut impl Write) -> Result<(), CliError> {
    let source = read_file(path)?;
    writeln!(out, "Stats for '{path}':")?;
    stats_source(&source, out)?;
    Ok(())
}

pub fn stats_source(source: &[u8], out: &mut impl Write) -> std::io::Result<()> {
    let stats = TagCounts::from_source(source);
    writeln!(out, "  Lines:  {}", stats.lines)?;
    writeln!(out, "  Tokens: {}", stats.total)?;
    writeln!(out)?;
    for (tag, count) in &stats.counts {
        writeln!(out, "  {count:>8}  {}", tag.name())?;
    }
    Ok(())
}
