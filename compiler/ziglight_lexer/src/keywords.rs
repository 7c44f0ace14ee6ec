//! Reserved-word table.
//!
//! Keywords are resolved after an identifier-shaped run has been scanned; the
//! table never influences scanning itself. Lookup buckets by length first
//! (reserved words are 2-14 bytes) and then matches the exact spelling, so
//! `constant`, `_const`, and `const1` stay identifiers.

use crate::Tag;

/// Look up a reserved word by its exact spelling.
///
/// Returns the keyword tag, or `None` if `text` is an ordinary identifier.
#[inline]
pub fn lookup(text: &[u8]) -> Option<Tag> {
    let len = text.len();
    if !(2..=14).contains(&len) || !text[0].is_ascii_lowercase() {
        return None;
    }

    match len {
        2 => match text {
            b"fn" => Some(Tag::KeywordFn),
            b"if" => Some(Tag::KeywordIf),
            b"or" => Some(Tag::KeywordOr),
            _ => None,
        },
        3 => match text {
            b"and" => Some(Tag::KeywordAnd),
            b"asm" => Some(Tag::KeywordAsm),
            b"for" => Some(Tag::KeywordFor),
            b"pub" => Some(Tag::KeywordPub),
            b"try" => Some(Tag::KeywordTry),
            b"var" => Some(Tag::KeywordVar),
            _ => None,
        },
        4 => match text {
            b"else" => Some(Tag::KeywordElse),
            b"enum" => Some(Tag::KeywordEnum),
            b"test" => Some(Tag::KeywordTest),
            _ => None,
        },
        5 => match text {
            b"align" => Some(Tag::KeywordAlign),
            b"async" => Some(Tag::KeywordAsync),
            b"await" => Some(Tag::KeywordAwait),
            b"break" => Some(Tag::KeywordBreak),
            b"catch" => Some(Tag::KeywordCatch),
            b"const" => Some(Tag::KeywordConst),
            b"defer" => Some(Tag::KeywordDefer),
            b"error" => Some(Tag::KeywordError),
            b"union" => Some(Tag::KeywordUnion),
            b"while" => Some(Tag::KeywordWhile),
            _ => None,
        },
        6 => match text {
            b"export" => Some(Tag::KeywordExport),
            b"extern" => Some(Tag::KeywordExtern),
            b"inline" => Some(Tag::KeywordInline),
            b"opaque" => Some(Tag::KeywordOpaque),
            b"orelse" => Some(Tag::KeywordOrelse),
            b"packed" => Some(Tag::KeywordPacked),
            b"resume" => Some(Tag::KeywordResume),
            b"return" => Some(Tag::KeywordReturn),
            b"struct" => Some(Tag::KeywordStruct),
            b"switch" => Some(Tag::KeywordSwitch),
            _ => None,
        },
        7 => match text {
            b"anytype" => Some(Tag::KeywordAnytype),
            b"noalias" => Some(Tag::KeywordNoalias),
            b"suspend" => Some(Tag::KeywordSuspend),
            _ => None,
        },
        8 => match text {
            b"anyframe" => Some(Tag::KeywordAnyframe),
            b"callconv" => Some(Tag::KeywordCallconv),
            b"comptime" => Some(Tag::KeywordComptime),
            b"continue" => Some(Tag::KeywordContinue),
            b"errdefer" => Some(Tag::KeywordErrdefer),
            b"noinline" => Some(Tag::KeywordNoinline),
            b"volatile" => Some(Tag::KeywordVolatile),
            _ => None,
        },
        9 => match text {
            b"addrspace" => Some(Tag::KeywordAddrspace),
            b"allowzero" => Some(Tag::KeywordAllowzero),
            b"nosuspend" => Some(Tag::KeywordNosuspend),
            _ => None,
        },
        11 => match text {
            b"linksection" => Some(Tag::KeywordLinksection),
            b"threadlocal" => Some(Tag::KeywordThreadlocal),
            b"unreachable" => Some(Tag::KeywordUnreachable),
            _ => None,
        },
        14 => match text {
            b"usingnamespace" => Some(Tag::KeywordUsingnamespace),
            _ => None,
        },
        _ => None,
    }
}
