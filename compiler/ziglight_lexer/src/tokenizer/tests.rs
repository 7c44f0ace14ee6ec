use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

/// Helper: scan a source and return `(tag, text)` pairs, excluding `Eof`.
fn scan(source: &str) -> Vec<(Tag, &str)> {
    tokenize(source)
        .into_iter()
        .map(|t| (t.tag, &source[t.start as usize..t.end as usize]))
        .collect()
}

/// Helper: scan and return tags only, excluding `Eof`.
fn scan_tags(source: &str) -> Vec<Tag> {
    tokenize(source).iter().map(|t| t.tag).collect()
}

/// Helper: scan without whitespace tokens.
fn scan_significant(source: &str) -> Vec<(Tag, &str)> {
    scan(source)
        .into_iter()
        .filter(|(tag, _)| *tag != Tag::Whitespace)
        .collect()
}

// ─── Stream contract ───────────────────────────────────────────────

#[test]
fn empty_source_is_just_eof() {
    let buf = SourceBuffer::new("");
    let mut tokenizer = Tokenizer::new(&buf);
    assert_eq!(
        tokenizer.next_token(),
        Token {
            tag: Tag::Eof,
            start: 0,
            end: 0
        }
    );
}

#[test]
fn eof_has_canonical_range() {
    let buf = SourceBuffer::new("x y");
    let mut tokenizer = Tokenizer::new(&buf);
    let mut last = tokenizer.next_token();
    while last.tag != Tag::Eof {
        last = tokenizer.next_token();
    }
    assert_eq!((last.start, last.end), (3, 3));
    assert!(last.is_empty());
}

#[test]
fn repeated_eof_returns_eof() {
    let buf = SourceBuffer::new("x");
    let mut tokenizer = Tokenizer::new(&buf);
    assert_eq!(tokenizer.next_token().tag, Tag::Identifier);
    for _ in 0..3 {
        assert_eq!(tokenizer.next_token().tag, Tag::Eof);
    }
}

#[test]
fn iterator_yields_tokens_then_none() {
    let buf = SourceBuffer::new("a b");
    let mut tokenizer = Tokenizer::new(&buf);
    assert_eq!(tokenizer.next().map(|t| t.tag), Some(Tag::Identifier));
    assert_eq!(tokenizer.next().map(|t| t.tag), Some(Tag::Whitespace));
    assert_eq!(tokenizer.next().map(|t| t.tag), Some(Tag::Identifier));
    assert_eq!(tokenizer.next(), None);
    assert_eq!(tokenizer.next(), None);
}

#[test]
fn pos_tracks_next_token_start() {
    let buf = SourceBuffer::new("ab cd");
    let mut tokenizer = Tokenizer::new(&buf);
    assert_eq!(tokenizer.pos(), 0);
    tokenizer.next_token();
    assert_eq!(tokenizer.pos(), 2);
}

#[test]
fn token_text_and_len() {
    let source = "const";
    let tok = tokenize(source)[0];
    assert_eq!(tok.len(), 5);
    assert_eq!(tok.text(source), Some("const"));
    assert_eq!(tok.bytes(source.as_bytes()), b"const");
}

// ─── End-to-end ────────────────────────────────────────────────────

#[test]
fn const_declaration_with_comment() {
    let source = "const x: u8 = 1; // hi\n";
    assert_eq!(
        scan(source),
        vec![
            (Tag::KeywordConst, "const"),
            (Tag::Whitespace, " "),
            (Tag::Identifier, "x"),
            (Tag::Colon, ":"),
            (Tag::Whitespace, " "),
            (Tag::Identifier, "u8"),
            (Tag::Whitespace, " "),
            (Tag::Equal, "="),
            (Tag::Whitespace, " "),
            (Tag::NumberLiteral, "1"),
            (Tag::Semicolon, ";"),
            (Tag::Whitespace, " "),
            (Tag::LineComment, "// hi"),
            (Tag::Whitespace, "\n"),
        ]
    );
    assert!(crate::is_int_type("u8"));
}

#[test]
fn realistic_function() {
    let source = "pub fn main() !void {\n    std.debug.print(\"hi {d}\\n\", .{@as(u32, 1)});\n}\n";
    assert_eq!(
        scan_significant(source),
        vec![
            (Tag::KeywordPub, "pub"),
            (Tag::KeywordFn, "fn"),
            (Tag::Identifier, "main"),
            (Tag::LParen, "("),
            (Tag::RParen, ")"),
            (Tag::Bang, "!"),
            (Tag::Identifier, "void"),
            (Tag::LBrace, "{"),
            (Tag::Identifier, "std"),
            (Tag::Period, "."),
            (Tag::Identifier, "debug"),
            (Tag::Period, "."),
            (Tag::Identifier, "print"),
            (Tag::LParen, "("),
            (Tag::StringLiteral, "\"hi {d}\\n\""),
            (Tag::Comma, ","),
            (Tag::Period, "."),
            (Tag::LBrace, "{"),
            (Tag::Builtin, "@as"),
            (Tag::LParen, "("),
            (Tag::Identifier, "u32"),
            (Tag::Comma, ","),
            (Tag::NumberLiteral, "1"),
            (Tag::RParen, ")"),
            (Tag::RBrace, "}"),
            (Tag::RParen, ")"),
            (Tag::Semicolon, ";"),
            (Tag::RBrace, "}"),
        ]
    );
}

// ─── Whitespace ────────────────────────────────────────────────────

#[test]
fn whitespace_run_is_one_token() {
    assert_eq!(scan(" \t\r\n  x"), vec![(Tag::Whitespace, " \t\r\n  "), (Tag::Identifier, "x")]);
}

#[test]
fn trailing_whitespace_flushed_at_eof() {
    assert_eq!(scan("x  "), vec![(Tag::Identifier, "x"), (Tag::Whitespace, "  ")]);
}

// ─── Identifiers & keywords ────────────────────────────────────────

#[test]
fn keyword_exactness() {
    assert_eq!(
        scan_significant("const constant _const const1 var while_"),
        vec![
            (Tag::KeywordConst, "const"),
            (Tag::Identifier, "constant"),
            (Tag::Identifier, "_const"),
            (Tag::Identifier, "const1"),
            (Tag::KeywordVar, "var"),
            (Tag::Identifier, "while_"),
        ]
    );
}

#[test]
fn identifier_stops_at_non_identifier_byte() {
    assert_eq!(
        scan("foo.bar"),
        vec![
            (Tag::Identifier, "foo"),
            (Tag::Period, "."),
            (Tag::Identifier, "bar"),
        ]
    );
}

#[test]
fn builtins() {
    assert_eq!(
        scan("@import(\"std\")"),
        vec![
            (Tag::Builtin, "@import"),
            (Tag::LParen, "("),
            (Tag::StringLiteral, "\"std\""),
            (Tag::RParen, ")"),
        ]
    );
}

#[test]
fn quoted_identifier() {
    assert_eq!(scan("@\"while\""), vec![(Tag::Identifier, "@\"while\"")]);
}

#[test]
fn lone_at_sign_is_invalid() {
    assert_eq!(scan("@ x"), vec![(Tag::Invalid, "@"), (Tag::Whitespace, " "), (Tag::Identifier, "x")]);
    assert_eq!(scan("@"), vec![(Tag::Invalid, "@")]);
}

// ─── Operators ─────────────────────────────────────────────────────

#[test]
fn greedy_four_char_operator() {
    assert_eq!(
        scan("<<|="),
        vec![(Tag::AngleBracketAngleBracketLeftPipeEqual, "<<|=")]
    );
}

#[test]
fn operator_families() {
    let cases = [
        ("<", Tag::AngleBracketLeft),
        ("<=", Tag::AngleBracketLeftEqual),
        ("<<", Tag::AngleBracketAngleBracketLeft),
        ("<<=", Tag::AngleBracketAngleBracketLeftEqual),
        ("<<|", Tag::AngleBracketAngleBracketLeftPipe),
        (">", Tag::AngleBracketRight),
        (">=", Tag::AngleBracketRightEqual),
        (">>", Tag::AngleBracketAngleBracketRight),
        (">>=", Tag::AngleBracketAngleBracketRightEqual),
        ("+", Tag::Plus),
        ("++", Tag::PlusPlus),
        ("+=", Tag::PlusEqual),
        ("+%", Tag::PlusPercent),
        ("+%=", Tag::PlusPercentEqual),
        ("+|", Tag::PlusPipe),
        ("+|=", Tag::PlusPipeEqual),
        ("-", Tag::Minus),
        ("-=", Tag::MinusEqual),
        ("->", Tag::Arrow),
        ("-%=", Tag::MinusPercentEqual),
        ("-|", Tag::MinusPipe),
        ("*", Tag::Asterisk),
        ("**", Tag::AsteriskAsterisk),
        ("*%", Tag::AsteriskPercent),
        ("*|=", Tag::AsteriskPipeEqual),
        ("/", Tag::Slash),
        ("/=", Tag::SlashEqual),
        ("%", Tag::Percent),
        ("%=", Tag::PercentEqual),
        ("&", Tag::Ampersand),
        ("&=", Tag::AmpersandEqual),
        ("^", Tag::Caret),
        ("^=", Tag::CaretEqual),
        ("|", Tag::Pipe),
        ("||", Tag::PipePipe),
        ("|=", Tag::PipeEqual),
        ("!", Tag::Bang),
        ("!=", Tag::BangEqual),
        ("=", Tag::Equal),
        ("==", Tag::EqualEqual),
        ("=>", Tag::EqualAngleBracketRight),
        (".", Tag::Period),
        (".*", Tag::PeriodAsterisk),
        ("..", Tag::Ellipsis2),
        ("...", Tag::Ellipsis3),
        ("?", Tag::QuestionMark),
        ("~", Tag::Tilde),
    ];
    for (source, tag) in cases {
        assert_eq!(scan(source), vec![(tag, source)], "source {source:?}");
    }
}

#[test]
fn longest_match_then_restart() {
    assert_eq!(
        scan("<<<"),
        vec![
            (Tag::AngleBracketAngleBracketLeft, "<<"),
            (Tag::AngleBracketLeft, "<"),
        ]
    );
    assert_eq!(scan("==="), vec![(Tag::EqualEqual, "=="), (Tag::Equal, "=")]);
}

#[test]
fn period_asterisks() {
    assert_eq!(
        scan("x.**"),
        vec![
            (Tag::Identifier, "x"),
            (Tag::InvalidPeriodAsterisks, ".*"),
            (Tag::Asterisk, "*"),
        ]
    );
}

// ─── Numbers ───────────────────────────────────────────────────────

#[test]
fn integers_and_floats() {
    for source in ["0", "42", "1_000_000", "0xFF", "0xdeadbeef", "0o777", "0b1010", "3.14", "1e10", "1.5e-3", "0x1.8p3"] {
        assert_eq!(scan(source), vec![(Tag::NumberLiteral, source)], "source {source:?}");
    }
}

#[test]
fn int_period_without_digit_gives_back() {
    assert_eq!(
        scan("1.;"),
        vec![
            (Tag::NumberLiteral, "1"),
            (Tag::Period, "."),
            (Tag::Semicolon, ";"),
        ]
    );
}

#[test]
fn range_after_int() {
    assert_eq!(
        scan("0..10"),
        vec![
            (Tag::NumberLiteral, "0"),
            (Tag::Ellipsis2, ".."),
            (Tag::NumberLiteral, "10"),
        ]
    );
}

#[test]
fn signed_exponent_is_one_token() {
    assert_eq!(scan("1e+10"), vec![(Tag::NumberLiteral, "1e+10")]);
}

#[test]
fn bare_exponent_gives_back() {
    assert_eq!(
        scan("1e;"),
        vec![
            (Tag::NumberLiteral, "1"),
            (Tag::Identifier, "e"),
            (Tag::Semicolon, ";"),
        ]
    );
    assert_eq!(scan("1e"), vec![(Tag::NumberLiteral, "1"), (Tag::Identifier, "e")]);
    assert_eq!(scan("1ex"), vec![(Tag::NumberLiteral, "1"), (Tag::Identifier, "ex")]);
    assert_eq!(
        scan("2E_x"),
        vec![(Tag::NumberLiteral, "2"), (Tag::Identifier, "E_x")]
    );
}

#[test]
fn float_bare_exponent_gives_back() {
    assert_eq!(
        scan("1.5e)"),
        vec![
            (Tag::NumberLiteral, "1.5"),
            (Tag::Identifier, "e"),
            (Tag::RParen, ")"),
        ]
    );
    assert_eq!(
        scan("1.5ex"),
        vec![(Tag::NumberLiteral, "1.5"), (Tag::Identifier, "ex")]
    );
}

#[test]
fn hex_e_is_a_digit() {
    assert_eq!(scan("0x1e;"), vec![(Tag::NumberLiteral, "0x1e"), (Tag::Semicolon, ";")]);
}

// ─── Strings ───────────────────────────────────────────────────────

#[test]
fn simple_and_escaped_strings() {
    assert_eq!(scan("\"\""), vec![(Tag::StringLiteral, "\"\"")]);
    assert_eq!(scan("\"a\\\"b\""), vec![(Tag::StringLiteral, "\"a\\\"b\"")]);
    assert_eq!(scan("\"\\\\\""), vec![(Tag::StringLiteral, "\"\\\\\"")]);
}

#[test]
fn unterminated_string_at_eof() {
    assert_eq!(scan("\"abc"), vec![(Tag::Invalid, "\"abc")]);
}

#[test]
fn unterminated_string_at_newline_resumes() {
    assert_eq!(
        scan("\"ab\ncd\""),
        vec![
            (Tag::Invalid, "\"ab"),
            (Tag::Whitespace, "\n"),
            (Tag::Identifier, "cd"),
            (Tag::Invalid, "\""),
        ]
    );
}

#[test]
fn backslash_before_eof_in_string_is_invalid() {
    assert_eq!(scan("\"a\\"), vec![(Tag::Invalid, "\"a\\")]);
}

#[test]
fn string_bytes_are_not_validated() {
    let source = "\"caf\u{e9} \u{1F600}\"";
    assert_eq!(scan(source), vec![(Tag::StringLiteral, source)]);
}

// ─── Multiline strings ─────────────────────────────────────────────

#[test]
fn multiline_string_lines() {
    assert_eq!(
        scan("\\\\one\n  \\\\two"),
        vec![
            (Tag::MultilineStringLiteralLine, "\\\\one\n"),
            (Tag::Whitespace, "  "),
            (Tag::MultilineStringLiteralLine, "\\\\two"),
        ]
    );
}

#[test]
fn single_backslash_is_invalid() {
    assert_eq!(scan("\\n"), vec![(Tag::Invalid, "\\"), (Tag::Identifier, "n")]);
}

// ─── Char literals ─────────────────────────────────────────────────

#[test]
fn char_literals() {
    for source in ["'a'", "'\\n'", "'\\''", "'\\x41'", "'\\u{1F600}'", "'\u{e9}'", "'\u{1F600}'"] {
        assert_eq!(scan(source), vec![(Tag::CharLiteral, source)], "source {source:?}");
    }
}

#[test]
fn garbled_unicode_escape_is_one_invalid() {
    assert_eq!(scan("'\\u{ZZ}'"), vec![(Tag::Invalid, "'\\u{ZZ}'")]);
    assert_eq!(
        scan("'\\u{0ab1Q}';"),
        vec![(Tag::Invalid, "'\\u{0ab1Q}'"), (Tag::Semicolon, ";")]
    );
}

#[test]
fn bad_hex_escape_is_invalid() {
    assert_eq!(
        scan("'\\xZ1'"),
        vec![
            (Tag::Invalid, "'\\x"),
            (Tag::Identifier, "Z1"),
            (Tag::Invalid, "'"),
        ]
    );
}

#[test]
fn char_literal_needs_closing_quote() {
    assert_eq!(scan("'ab'")[0], (Tag::Invalid, "'a"));
    assert_eq!(scan("'a"), vec![(Tag::Invalid, "'a")]);
    assert_eq!(scan("'\n"), vec![(Tag::Invalid, "'"), (Tag::Whitespace, "\n")]);
}

#[test]
fn empty_char_literal_is_one_invalid() {
    assert_eq!(scan("''"), vec![(Tag::Invalid, "''")]);
}

// ─── Comments ──────────────────────────────────────────────────────

#[test]
fn comment_kinds() {
    assert_eq!(scan("// plain"), vec![(Tag::LineComment, "// plain")]);
    assert_eq!(scan("/// doc"), vec![(Tag::DocComment, "/// doc")]);
    assert_eq!(scan("//! top"), vec![(Tag::ContainerDocComment, "//! top")]);
    assert_eq!(scan("//// four"), vec![(Tag::LineComment, "//// four")]);
    assert_eq!(scan("///"), vec![(Tag::DocComment, "///")]);
    assert_eq!(scan("//"), vec![(Tag::LineComment, "//")]);
}

#[test]
fn comment_does_not_consume_newline() {
    assert_eq!(
        scan("/// doc\nx"),
        vec![
            (Tag::DocComment, "/// doc"),
            (Tag::Whitespace, "\n"),
            (Tag::Identifier, "x"),
        ]
    );
}

#[test]
fn empty_comment_becomes_whitespace() {
    assert_eq!(
        scan("x //\n  y"),
        vec![
            (Tag::Identifier, "x"),
            (Tag::Whitespace, " "),
            (Tag::Whitespace, "//\n  "),
            (Tag::Identifier, "y"),
        ]
    );
}

// ─── Invalid bytes ─────────────────────────────────────────────────

#[test]
fn interior_nul_is_single_invalid() {
    assert_eq!(
        scan("a\0b"),
        vec![
            (Tag::Identifier, "a"),
            (Tag::Invalid, "\0"),
            (Tag::Identifier, "b"),
        ]
    );
}

#[test]
fn non_ascii_outside_literals_is_invalid_per_byte() {
    assert_eq!(scan_tags("\u{e9}"), vec![Tag::Invalid, Tag::Invalid]);
}

#[test]
fn raw_non_utf8_bytes() {
    let tokens = tokenize([b'x', 0xFF, b'y']);
    let tags: Vec<Tag> = tokens.iter().map(|t| t.tag).collect();
    assert_eq!(tags, vec![Tag::Identifier, Tag::Invalid, Tag::Identifier]);
}

// ─── Properties ────────────────────────────────────────────────────

/// Coverage invariant: token ranges are contiguous and span the source.
fn assert_covers(source: &[u8]) {
    let buf = SourceBuffer::new(source);
    let mut tokenizer = Tokenizer::new(&buf);
    let mut expected_start = 0u32;
    let mut count = 0usize;
    loop {
        let tok = tokenizer.next_token();
        assert!(tok.start <= tok.end, "inverted range {tok:?}");
        if tok.tag == Tag::Eof {
            assert_eq!(tok.start, expected_start);
            assert_eq!(tok.end, buf.len());
            break;
        }
        assert_eq!(tok.start, expected_start, "gap or overlap before {tok:?}");
        assert!(tok.end > tok.start, "empty non-eof token {tok:?}");
        expected_start = tok.end;
        count += 1;
        assert!(count <= source.len(), "more tokens than bytes");
    }
}

#[test]
fn coverage_on_tricky_inputs() {
    let sources: [&[u8]; 14] = [
        b"",
        b"//\n//\n",
        b"'\\u{",
        b"'\\u",
        b"1.",
        b"1e",
        b"0x",
        b".**",
        b"@\"",
        b"\\",
        b"\"\\",
        b"'\xC3",
        b"\r\n\t",
        b"x\0\0y",
    ];
    for source in sources {
        assert_covers(source);
    }
}

#[test]
fn every_byte_value_tokenizes() {
    for b in 0..=255u8 {
        assert_covers(&[b]);
        assert_covers(&[b, b]);
        assert_covers(&[b'\'', b, b'\'']);
    }
}

proptest! {
    #[test]
    fn coverage_holds_for_arbitrary_bytes(source in proptest::collection::vec(any::<u8>(), 0..256)) {
        assert_covers(&source);
    }

    #[test]
    fn coverage_holds_for_token_soup(
        parts in proptest::collection::vec(
            prop_oneof![
                Just("const"), Just("x"), Just(" "), Just("\n"), Just("1"), Just("."),
                Just("e"), Just("+"), Just("\""), Just("'"), Just("\\"), Just("/"),
                Just("<"), Just("|"), Just("="), Just("@"), Just("u{"), Just("}"),
                Just("x"), Just("*"), Just("!"), Just("0x"), Just("p"),
            ],
            0..64,
        )
    ) {
        let source = parts.concat();
        assert_covers(source.as_bytes());
        let rebuilt: String = scan(&source).iter().map(|(_, text)| *text).collect();
        prop_assert_eq!(rebuilt, source);
    }
}
