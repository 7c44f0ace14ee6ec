//! Pull-based tokenizer driving the [`transition`](crate::state::transition)
//! automaton over a [`SourceBuffer`].
//!
//! Each call to [`Tokenizer::next_token`] starts in [`State::Start`] at the
//! current cursor position and feeds bytes through the transition function
//! until it emits. Identifier-shaped tokens are then checked against the
//! keyword table. Malformed input never fails: it surfaces as `Invalid`
//! tokens and scanning resumes at the first unconsumed byte.

use std::iter::FusedIterator;

use tracing::{error, trace};

use crate::cursor::Cursor;
use crate::keywords;
use crate::state::{transition, Action, State};
use crate::{SourceBuffer, Tag};

/// A classified byte range `[start, end)` of the source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    pub tag: Tag,
    pub start: u32,
    pub end: u32,
}

const _: () = assert!(std::mem::size_of::<Token>() == 12);

impl Token {
    /// Byte length of the token.
    #[inline]
    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    /// Returns `true` for zero-length tokens (only `Eof`).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The token's bytes within `source`.
    #[inline]
    pub fn bytes<'s>(&self, source: &'s [u8]) -> &'s [u8] {
        &source[self.start as usize..self.end as usize]
    }

    /// The token's text within `source`.
    ///
    /// Returns `None` if the range does not fall on UTF-8 boundaries, which
    /// can happen for `Invalid` tokens covering part of a multi-byte character.
    #[inline]
    pub fn text<'s>(&self, source: &'s str) -> Option<&'s str> {
        source.get(self.start as usize..self.end as usize)
    }
}

/// Forward-only token stream over one source buffer.
///
/// Not restartable: a second pass needs a fresh `Tokenizer`. Once the `Eof`
/// token has been returned, further calls keep returning `Eof`.
pub struct Tokenizer<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Tokenizer<'a> {
    /// Create a tokenizer positioned at the start of `source`.
    pub fn new(source: &'a SourceBuffer) -> Self {
        Self {
            cursor: source.cursor(),
        }
    }

    /// Current byte offset; the start of the next token.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.cursor.pos()
    }

    /// Produce the next token.
    ///
    /// # Panics
    ///
    /// Panics if the automaton runs for more than `2 * (len + 1)` steps on one
    /// token. Every token consumes at most `len` bytes plus one terminating
    /// look, so hitting the cap means a transition neither advances nor emits.
    pub fn next_token(&mut self) -> Token {
        let start = self.cursor.pos();
        let step_limit = 2 * (u64::from(self.cursor.source_len()) + 1);
        let mut state = State::Start;
        let mut steps: u64 = 0;

        loop {
            steps += 1;
            if steps > step_limit {
                error!(
                    start,
                    pos = self.cursor.pos(),
                    ?state,
                    "tokenizer exceeded its step limit"
                );
                panic!(
                    "tokenizer stalled in {state:?} at byte {} (token started at {start})",
                    self.cursor.pos()
                );
            }

            let (next, action) = transition(state, self.cursor.peek_input());
            match action {
                Action::Consume => {
                    self.cursor.advance();
                    state = next;
                }
                Action::ConsumeAndEmit(tag) => {
                    self.cursor.advance();
                    return self.emit(tag, start);
                }
                Action::EmitWithoutConsuming(tag) => return self.emit(tag, start),
                Action::GiveBack(tag) => {
                    self.cursor.retreat();
                    return self.emit(tag, start);
                }
            }
        }
    }

    fn emit(&self, tag: Tag, start: u32) -> Token {
        let end = self.cursor.pos();
        let tag = if tag == Tag::Identifier {
            keywords::lookup(self.cursor.slice(start, end)).unwrap_or(Tag::Identifier)
        } else {
            tag
        };
        trace!(tag = tag.name(), start, end, "token");
        Token { tag, start, end }
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Token;

    /// Yields tokens up to, but excluding, `Eof`.
    fn next(&mut self) -> Option<Token> {
        let tok = self.next_token();
        if tok.tag == Tag::Eof {
            None
        } else {
            Some(tok)
        }
    }
}

impl FusedIterator for Tokenizer<'_> {}

/// Tokenize a whole source and collect every token except the final `Eof`.
///
/// For streaming access construct a [`SourceBuffer`] and [`Tokenizer`]
/// directly.
pub fn tokenize(source: impl AsRef<[u8]>) -> Vec<Token> {
    let buf = SourceBuffer::new(source);
    Tokenizer::new(&buf).collect()
}

#[cfg(test)]
mod tests;
