//! Tokenizer for Zig source, built for syntax highlighting.
//!
//! Standalone crate with no compiler dependencies. Highlighters, editors and
//! the `ziglight` driver pull tokens from a [`Tokenizer`] and style them by
//! [`Tag`]. Every byte of the input lands in exactly one token; malformed
//! input becomes [`Tag::Invalid`] tokens rather than errors.
//!
//! # Architecture
//!
//! ```text
//! SourceBuffer (sentinel-terminated bytes)
//!     │
//!     ▼
//! Cursor ──► state::transition(State, Option<u8>) ──► Action
//!     │
//!     ▼
//! Tokenizer::next_token() ──► Token { tag, start, end }
//! ```
//!
//! The automaton is a pure function over `(State, input)`; the
//! [`Tokenizer`] only moves the cursor and records token boundaries.

mod classify;
mod cursor;
mod keywords;
mod line_index;
mod multiline;
mod source_buffer;
pub mod state;
mod tag;
mod tokenizer;

pub use classify::{is_int_type, is_simple_type};
pub(crate) use cursor::Cursor;
pub use keywords::lookup as keyword_lookup;
pub use line_index::LineIndex;
pub use multiline::multiline_string_groups;
pub use source_buffer::SourceBuffer;
pub use tag::Tag;
pub use tokenizer::{tokenize, Token, Tokenizer};
