//! The tokenizer automaton as a pure transition function.
//!
//! [`transition`] maps `(State, input)` to the next state and an [`Action`]
//! for the driver in [`Tokenizer`](crate::Tokenizer). The input is the byte
//! under the cursor, or `None` for the virtual terminator at the end of the
//! source. The terminator is never consumed: every state either emits on it
//! or treats it like a non-continuing byte.
//!
//! # Actions
//!
//! | action | cursor | token |
//! |--------|--------|-------|
//! | `Consume` | advance | keep scanning in the new state |
//! | `ConsumeAndEmit(tag)` | advance | ends after the current byte |
//! | `EmitWithoutConsuming(tag)` | stay | ends before the current byte |
//! | `GiveBack(tag)` | step back one | ends before the previous byte |
//!
//! `GiveBack` is used where a prefix byte (the `.` of `1.` or the `e` of
//! `1e`) turned out not to extend the token. The given-back byte starts the
//! next token.

use crate::Tag;

/// Automaton state within a single token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    Start,
    Whitespace,
    Identifier,
    SawAtSign,
    Builtin,
    /// Inside `"..."`. Carries the tag emitted on the closing quote:
    /// `StringLiteral`, or `Identifier` for the `@"..."` form.
    StringLiteral(Tag),
    StringLiteralBackslash(Tag),
    Backslash,
    MultilineStringLiteralLine,
    CharLiteral,
    CharLiteralBackslash,
    CharLiteralHexEscape { digits: u8 },
    CharLiteralUnicodeEscapeSawU,
    CharLiteralUnicodeEscape,
    CharLiteralUnicodeInvalid,
    /// Inside a multi-byte UTF-8 sequence in a char literal.
    CharLiteralUtf8 { remaining: u8 },
    CharLiteralEnd,
    Equal,
    Bang,
    Pipe,
    Minus,
    MinusPercent,
    MinusPipe,
    Asterisk,
    AsteriskPercent,
    AsteriskPipe,
    Slash,
    LineCommentStart,
    LineComment,
    DocCommentStart,
    DocComment,
    ContainerDocComment,
    /// A leading `0`, which may open a `0x` hex literal.
    Zero,
    Int,
    /// After `0x`: `e` is a digit here, only `p` marks an exponent.
    HexInt,
    IntExponent,
    IntPeriod,
    Float,
    FloatExponent,
    Ampersand,
    Caret,
    Percent,
    Plus,
    PlusPercent,
    PlusPipe,
    AngleBracketLeft,
    AngleBracketAngleBracketLeft,
    AngleBracketAngleBracketLeftPipe,
    AngleBracketRight,
    AngleBracketAngleBracketRight,
    Period,
    Period2,
    PeriodAsterisk,
}

/// What the driver does with the current input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Consume,
    ConsumeAndEmit(Tag),
    EmitWithoutConsuming(Tag),
    GiveBack(Tag),
}

use Action::{Consume, ConsumeAndEmit, EmitWithoutConsuming, GiveBack};

/// One automaton step.
///
/// From [`State::Start`] on the terminator this yields
/// `EmitWithoutConsuming(Tag::Eof)`. No state returns `Consume` or
/// `ConsumeAndEmit` for `None`.
#[allow(
    clippy::match_same_arms,
    reason = "one arm per (state, input class) mirrors the transition table"
)]
pub fn transition(state: State, input: Option<u8>) -> (State, Action) {
    match state {
        State::Start => start(input),

        State::Whitespace => match input {
            Some(c) if is_whitespace(c) => (State::Whitespace, Consume),
            _ => (State::Start, EmitWithoutConsuming(Tag::Whitespace)),
        },

        State::Identifier => match input {
            Some(c) if is_ident_continue(c) => (State::Identifier, Consume),
            _ => (State::Start, EmitWithoutConsuming(Tag::Identifier)),
        },

        State::SawAtSign => match input {
            Some(b'"') => (State::StringLiteral(Tag::Identifier), Consume),
            Some(c) if is_ident_start(c) => (State::Builtin, Consume),
            _ => (State::Start, EmitWithoutConsuming(Tag::Invalid)),
        },

        State::Builtin => match input {
            Some(c) if is_ident_continue(c) => (State::Builtin, Consume),
            _ => (State::Start, EmitWithoutConsuming(Tag::Builtin)),
        },

        // ─── Strings ─────────────────────────────────────────────────

        State::StringLiteral(tag) => match input {
            None | Some(b'\n') => (State::Start, EmitWithoutConsuming(Tag::Invalid)),
            Some(b'\\') => (State::StringLiteralBackslash(tag), Consume),
            Some(b'"') => (State::Start, ConsumeAndEmit(tag)),
            Some(_) => (State::StringLiteral(tag), Consume),
        },

        State::StringLiteralBackslash(tag) => match input {
            None | Some(b'\n') => (State::Start, EmitWithoutConsuming(Tag::Invalid)),
            Some(_) => (State::StringLiteral(tag), Consume),
        },

        State::Backslash => match input {
            Some(b'\\') => (State::MultilineStringLiteralLine, Consume),
            _ => (State::Start, EmitWithoutConsuming(Tag::Invalid)),
        },

        State::MultilineStringLiteralLine => match input {
            None => (
                State::Start,
                EmitWithoutConsuming(Tag::MultilineStringLiteralLine),
            ),
            Some(b'\n') => (State::Start, ConsumeAndEmit(Tag::MultilineStringLiteralLine)),
            Some(_) => (State::MultilineStringLiteralLine, Consume),
        },

        // ─── Char literals ───────────────────────────────────────────

        State::CharLiteral => match input {
            None | Some(b'\n') => (State::Start, EmitWithoutConsuming(Tag::Invalid)),
            Some(b'\\') => (State::CharLiteralBackslash, Consume),
            // Empty literal `''`: one invalid token covering both quotes.
            Some(b'\'') => (State::Start, ConsumeAndEmit(Tag::Invalid)),
            // Stray continuation byte or out-of-range lead byte.
            Some(0x80..=0xBF | 0xF8..=0xFF) => (State::Start, EmitWithoutConsuming(Tag::Invalid)),
            Some(0xC0..=0xDF) => (State::CharLiteralUtf8 { remaining: 1 }, Consume),
            Some(0xE0..=0xEF) => (State::CharLiteralUtf8 { remaining: 2 }, Consume),
            Some(0xF0..=0xF7) => (State::CharLiteralUtf8 { remaining: 3 }, Consume),
            Some(_) => (State::CharLiteralEnd, Consume),
        },

        State::CharLiteralUtf8 { remaining } => match input {
            Some(0x80..=0xBF) if remaining <= 1 => (State::CharLiteralEnd, Consume),
            Some(0x80..=0xBF) => (
                State::CharLiteralUtf8 {
                    remaining: remaining - 1,
                },
                Consume,
            ),
            _ => (State::Start, EmitWithoutConsuming(Tag::Invalid)),
        },

        State::CharLiteralBackslash => match input {
            None | Some(b'\n') => (State::Start, EmitWithoutConsuming(Tag::Invalid)),
            Some(b'x') => (State::CharLiteralHexEscape { digits: 0 }, Consume),
            Some(b'u') => (State::CharLiteralUnicodeEscapeSawU, Consume),
            Some(_) => (State::CharLiteralEnd, Consume),
        },

        State::CharLiteralHexEscape { digits } => match input {
            Some(c) if c.is_ascii_hexdigit() => {
                if digits + 1 == 2 {
                    (State::CharLiteralEnd, Consume)
                } else {
                    (State::CharLiteralHexEscape { digits: digits + 1 }, Consume)
                }
            }
            _ => (State::Start, EmitWithoutConsuming(Tag::Invalid)),
        },

        State::CharLiteralUnicodeEscapeSawU => match input {
            None | Some(b'\n') => (State::Start, EmitWithoutConsuming(Tag::Invalid)),
            Some(b'{') => (State::CharLiteralUnicodeEscape, Consume),
            Some(_) => (State::CharLiteralUnicodeInvalid, Consume),
        },

        State::CharLiteralUnicodeEscape => match input {
            None | Some(b'\n') => (State::Start, EmitWithoutConsuming(Tag::Invalid)),
            Some(c) if c.is_ascii_hexdigit() => (State::CharLiteralUnicodeEscape, Consume),
            // Digit count is not checked here; `'\u{}'` passes as a char literal.
            Some(b'}') => (State::CharLiteralEnd, Consume),
            Some(_) => (State::CharLiteralUnicodeInvalid, Consume),
        },

        // Consolidates e.g. `'\u{0ab1Q}'` into one invalid token instead of
        // the fragments `'\u{0ab1`, `Q`, `}`, `'`.
        State::CharLiteralUnicodeInvalid => match input {
            Some(c) if c.is_ascii_alphanumeric() || c == b'}' => {
                (State::CharLiteralUnicodeInvalid, Consume)
            }
            Some(b'\'') => (State::Start, ConsumeAndEmit(Tag::Invalid)),
            _ => (State::Start, EmitWithoutConsuming(Tag::Invalid)),
        },

        State::CharLiteralEnd => match input {
            Some(b'\'') => (State::Start, ConsumeAndEmit(Tag::CharLiteral)),
            _ => (State::Start, EmitWithoutConsuming(Tag::Invalid)),
        },

        // ─── Comments ────────────────────────────────────────────────

        State::Slash => match input {
            Some(b'/') => (State::LineCommentStart, Consume),
            Some(b'=') => (State::Start, ConsumeAndEmit(Tag::SlashEqual)),
            _ => (State::Start, EmitWithoutConsuming(Tag::Slash)),
        },

        State::LineCommentStart => match input {
            None => (State::Start, EmitWithoutConsuming(Tag::LineComment)),
            Some(b'/') => (State::DocCommentStart, Consume),
            Some(b'!') => (State::ContainerDocComment, Consume),
            // Empty comment: `//` and the newline become whitespace.
            Some(b'\n') => (State::Whitespace, Consume),
            Some(_) => (State::LineComment, Consume),
        },

        State::DocCommentStart => match input {
            None | Some(b'\n') => (State::Start, EmitWithoutConsuming(Tag::DocComment)),
            // Four or more slashes is an ordinary comment.
            Some(b'/') => (State::LineComment, Consume),
            Some(_) => (State::DocComment, Consume),
        },

        State::LineComment => match input {
            None | Some(b'\n') => (State::Start, EmitWithoutConsuming(Tag::LineComment)),
            Some(_) => (State::LineComment, Consume),
        },

        State::DocComment => match input {
            None | Some(b'\n') => (State::Start, EmitWithoutConsuming(Tag::DocComment)),
            Some(_) => (State::DocComment, Consume),
        },

        State::ContainerDocComment => match input {
            None | Some(b'\n') => (State::Start, EmitWithoutConsuming(Tag::ContainerDocComment)),
            Some(_) => (State::ContainerDocComment, Consume),
        },

        // ─── Numbers ─────────────────────────────────────────────────

        State::Zero => match input {
            Some(b'x' | b'X') => (State::HexInt, Consume),
            _ => transition(State::Int, input),
        },

        State::Int => match input {
            Some(b'.') => (State::IntPeriod, Consume),
            Some(c) if is_exponent_marker(c) => (State::IntExponent, Consume),
            Some(c) if is_ident_continue(c) => (State::Int, Consume),
            _ => (State::Start, EmitWithoutConsuming(Tag::NumberLiteral)),
        },

        State::HexInt => match input {
            Some(b'.') => (State::IntPeriod, Consume),
            Some(b'p' | b'P') => (State::IntExponent, Consume),
            Some(c) if is_ident_continue(c) => (State::HexInt, Consume),
            _ => (State::Start, EmitWithoutConsuming(Tag::NumberLiteral)),
        },

        // Only a sign or digit confirms the exponent; anything else (`1e;`,
        // `1ex`) ends the number before the marker.
        State::IntExponent => match input {
            Some(b'+' | b'-') => (State::Float, Consume),
            Some(c) if c.is_ascii_digit() => (State::Float, Consume),
            _ => (State::Start, GiveBack(Tag::NumberLiteral)),
        },

        State::IntPeriod => match input {
            Some(c) if is_exponent_marker(c) => (State::FloatExponent, Consume),
            Some(c) if is_ident_continue(c) => (State::Float, Consume),
            _ => (State::Start, GiveBack(Tag::NumberLiteral)),
        },

        State::Float => match input {
            Some(c) if is_exponent_marker(c) => (State::FloatExponent, Consume),
            Some(c) if is_ident_continue(c) => (State::Float, Consume),
            _ => (State::Start, EmitWithoutConsuming(Tag::NumberLiteral)),
        },

        State::FloatExponent => match input {
            Some(b'+' | b'-') => (State::Float, Consume),
            Some(c) if c.is_ascii_digit() => (State::Float, Consume),
            _ => (State::Start, GiveBack(Tag::NumberLiteral)),
        },

        // ─── Operators ───────────────────────────────────────────────

        State::Equal => match input {
            Some(b'=') => (State::Start, ConsumeAndEmit(Tag::EqualEqual)),
            Some(b'>') => (State::Start, ConsumeAndEmit(Tag::EqualAngleBracketRight)),
            _ => (State::Start, EmitWithoutConsuming(Tag::Equal)),
        },

        State::Bang => match input {
            Some(b'=') => (State::Start, ConsumeAndEmit(Tag::BangEqual)),
            _ => (State::Start, EmitWithoutConsuming(Tag::Bang)),
        },

        State::Pipe => match input {
            Some(b'=') => (State::Start, ConsumeAndEmit(Tag::PipeEqual)),
            Some(b'|') => (State::Start, ConsumeAndEmit(Tag::PipePipe)),
            _ => (State::Start, EmitWithoutConsuming(Tag::Pipe)),
        },

        State::Minus => match input {
            Some(b'>') => (State::Start, ConsumeAndEmit(Tag::Arrow)),
            Some(b'=') => (State::Start, ConsumeAndEmit(Tag::MinusEqual)),
            Some(b'%') => (State::MinusPercent, Consume),
            Some(b'|') => (State::MinusPipe, Consume),
            _ => (State::Start, EmitWithoutConsuming(Tag::Minus)),
        },

        State::MinusPercent => equal_or(input, Tag::MinusPercentEqual, Tag::MinusPercent),
        State::MinusPipe => equal_or(input, Tag::MinusPipeEqual, Tag::MinusPipe),

        State::Asterisk => match input {
            Some(b'=') => (State::Start, ConsumeAndEmit(Tag::AsteriskEqual)),
            Some(b'*') => (State::Start, ConsumeAndEmit(Tag::AsteriskAsterisk)),
            Some(b'%') => (State::AsteriskPercent, Consume),
            Some(b'|') => (State::AsteriskPipe, Consume),
            _ => (State::Start, EmitWithoutConsuming(Tag::Asterisk)),
        },

        State::AsteriskPercent => equal_or(input, Tag::AsteriskPercentEqual, Tag::AsteriskPercent),
        State::AsteriskPipe => equal_or(input, Tag::AsteriskPipeEqual, Tag::AsteriskPipe),

        State::Plus => match input {
            Some(b'=') => (State::Start, ConsumeAndEmit(Tag::PlusEqual)),
            Some(b'+') => (State::Start, ConsumeAndEmit(Tag::PlusPlus)),
            Some(b'%') => (State::PlusPercent, Consume),
            Some(b'|') => (State::PlusPipe, Consume),
            _ => (State::Start, EmitWithoutConsuming(Tag::Plus)),
        },

        State::PlusPercent => equal_or(input, Tag::PlusPercentEqual, Tag::PlusPercent),
        State::PlusPipe => equal_or(input, Tag::PlusPipeEqual, Tag::PlusPipe),

        State::Ampersand => equal_or(input, Tag::AmpersandEqual, Tag::Ampersand),
        State::Caret => equal_or(input, Tag::CaretEqual, Tag::Caret),
        State::Percent => equal_or(input, Tag::PercentEqual, Tag::Percent),

        State::AngleBracketLeft => match input {
            Some(b'<') => (State::AngleBracketAngleBracketLeft, Consume),
            Some(b'=') => (State::Start, ConsumeAndEmit(Tag::AngleBracketLeftEqual)),
            _ => (State::Start, EmitWithoutConsuming(Tag::AngleBracketLeft)),
        },

        State::AngleBracketAngleBracketLeft => match input {
            Some(b'=') => (
                State::Start,
                ConsumeAndEmit(Tag::AngleBracketAngleBracketLeftEqual),
            ),
            Some(b'|') => (State::AngleBracketAngleBracketLeftPipe, Consume),
            _ => (
                State::Start,
                EmitWithoutConsuming(Tag::AngleBracketAngleBracketLeft),
            ),
        },

        State::AngleBracketAngleBracketLeftPipe => equal_or(
            input,
            Tag::AngleBracketAngleBracketLeftPipeEqual,
            Tag::AngleBracketAngleBracketLeftPipe,
        ),

        State::AngleBracketRight => match input {
            Some(b'>') => (State::AngleBracketAngleBracketRight, Consume),
            Some(b'=') => (State::Start, ConsumeAndEmit(Tag::AngleBracketRightEqual)),
            _ => (State::Start, EmitWithoutConsuming(Tag::AngleBracketRight)),
        },

        State::AngleBracketAngleBracketRight => equal_or(
            input,
            Tag::AngleBracketAngleBracketRightEqual,
            Tag::AngleBracketAngleBracketRight,
        ),

        State::Period => match input {
            Some(b'.') => (State::Period2, Consume),
            Some(b'*') => (State::PeriodAsterisk, Consume),
            _ => (State::Start, EmitWithoutConsuming(Tag::Period)),
        },

        State::Period2 => match input {
            Some(b'.') => (State::Start, ConsumeAndEmit(Tag::Ellipsis3)),
            _ => (State::Start, EmitWithoutConsuming(Tag::Ellipsis2)),
        },

        // `.**` is flagged on the `.*` prefix; the second `*` starts the next token.
        State::PeriodAsterisk => match input {
            Some(b'*') => (State::Start, EmitWithoutConsuming(Tag::InvalidPeriodAsterisks)),
            _ => (State::Start, EmitWithoutConsuming(Tag::PeriodAsterisk)),
        },
    }
}

/// Dispatch on the first byte of a token.
fn start(input: Option<u8>) -> (State, Action) {
    let Some(c) = input else {
        return (State::Start, EmitWithoutConsuming(Tag::Eof));
    };
    let next = match c {
        b' ' | b'\n' | b'\t' | b'\r' => State::Whitespace,
        b'"' => State::StringLiteral(Tag::StringLiteral),
        b'\'' => State::CharLiteral,
        b'a'..=b'z' | b'A'..=b'Z' | b'_' => State::Identifier,
        b'0' => State::Zero,
        b'1'..=b'9' => State::Int,
        b'@' => State::SawAtSign,
        b'\\' => State::Backslash,
        b'=' => State::Equal,
        b'!' => State::Bang,
        b'|' => State::Pipe,
        b'%' => State::Percent,
        b'*' => State::Asterisk,
        b'+' => State::Plus,
        b'-' => State::Minus,
        b'<' => State::AngleBracketLeft,
        b'>' => State::AngleBracketRight,
        b'^' => State::Caret,
        b'.' => State::Period,
        b'/' => State::Slash,
        b'&' => State::Ampersand,
        _ => return (State::Start, ConsumeAndEmit(single_byte_tag(c))),
    };
    (next, Consume)
}

/// Tag for a byte that forms a complete token on its own.
///
/// Any byte not claimed by a multi-byte state (including interior NUL and
/// non-ASCII bytes) is a one-byte `Invalid`.
fn single_byte_tag(c: u8) -> Tag {
    match c {
        b'(' => Tag::LParen,
        b')' => Tag::RParen,
        b'{' => Tag::LBrace,
        b'}' => Tag::RBrace,
        b'[' => Tag::LBracket,
        b']' => Tag::RBracket,
        b';' => Tag::Semicolon,
        b',' => Tag::Comma,
        b':' => Tag::Colon,
        b'?' => Tag::QuestionMark,
        b'~' => Tag::Tilde,
        _ => Tag::Invalid,
    }
}

/// Shared shape of the `X` / `X=` operator states.
#[inline]
fn equal_or(input: Option<u8>, with_equal: Tag, alone: Tag) -> (State, Action) {
    match input {
        Some(b'=') => (State::Start, ConsumeAndEmit(with_equal)),
        _ => (State::Start, EmitWithoutConsuming(alone)),
    }
}

#[inline]
fn is_whitespace(c: u8) -> bool {
    matches!(c, b' ' | b'\n' | b'\t' | b'\r')
}

#[inline]
fn is_ident_start(c: u8) -> bool {
    c.is_ascii_alphabetic() || c == b'_'
}

/// `true` for a-z, A-Z, 0-9, and underscore.
#[inline]
pub(crate) fn is_ident_continue(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'_'
}

/// Decimal (`e`) and hexadecimal (`p`) exponent markers.
#[inline]
fn is_exponent_marker(c: u8) -> bool {
    matches!(c, b'e' | b'E' | b'p' | b'P')
}
