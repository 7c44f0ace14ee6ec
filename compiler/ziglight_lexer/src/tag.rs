//! Token categories produced by the tokenizer.
//!
//! [`Tag`] is a closed, one-byte enumeration. Tags fall into six groups:
//! literals, punctuation/operators, comments, trivia, keywords, and the
//! sentinel/error tags (`Eof`, `Invalid`, `InvalidPeriodAsterisks`).
//!
//! Fixed-spelling tags (operators, delimiters, keywords) report their text via
//! [`Tag::lexeme`]. Variable-text tags (identifiers, literals, comments,
//! whitespace) return `None` there; their text lives in the source buffer.

/// Token category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Tag {
    // === Literals ===
    Identifier,
    Builtin,
    NumberLiteral,
    StringLiteral,
    MultilineStringLiteralLine,
    CharLiteral,

    // === Structural ===
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Semicolon,
    Comma,
    Colon,

    // === Operators ===
    Bang,
    BangEqual,
    Pipe,
    PipePipe,
    PipeEqual,
    Equal,
    EqualEqual,
    EqualAngleBracketRight,
    Percent,
    PercentEqual,
    Period,
    PeriodAsterisk,
    Ellipsis2,
    Ellipsis3,
    Caret,
    CaretEqual,
    Plus,
    PlusPlus,
    PlusEqual,
    PlusPercent,
    PlusPercentEqual,
    PlusPipe,
    PlusPipeEqual,
    Minus,
    MinusEqual,
    MinusPercent,
    MinusPercentEqual,
    MinusPipe,
    MinusPipeEqual,
    Asterisk,
    AsteriskEqual,
    AsteriskAsterisk,
    AsteriskPercent,
    AsteriskPercentEqual,
    AsteriskPipe,
    AsteriskPipeEqual,
    Arrow,
    Slash,
    SlashEqual,
    Ampersand,
    AmpersandEqual,
    QuestionMark,
    AngleBracketLeft,
    AngleBracketLeftEqual,
    AngleBracketAngleBracketLeft,
    AngleBracketAngleBracketLeftEqual,
    AngleBracketAngleBracketLeftPipe,
    AngleBracketAngleBracketLeftPipeEqual,
    AngleBracketRight,
    AngleBracketRightEqual,
    AngleBracketAngleBracketRight,
    AngleBracketAngleBracketRightEqual,
    Tilde,

    // === Comments ===
    LineComment,
    DocComment,
    ContainerDocComment,

    // === Trivia ===
    Whitespace,

    // === Keywords ===
    KeywordAddrspace,
    KeywordAlign,
    KeywordAllowzero,
    KeywordAnd,
    KeywordAnyframe,
    KeywordAnytype,
    KeywordAsm,
    KeywordAsync,
    KeywordAwait,
    KeywordBreak,
    KeywordCallconv,
    KeywordCatch,
    KeywordComptime,
    KeywordConst,
    KeywordContinue,
    KeywordDefer,
    KeywordElse,
    KeywordEnum,
    KeywordErrdefer,
    KeywordError,
    KeywordExport,
    KeywordExtern,
    KeywordFn,
    KeywordFor,
    KeywordIf,
    KeywordInline,
    KeywordLinksection,
    KeywordNoalias,
    KeywordNoinline,
    KeywordNosuspend,
    KeywordOpaque,
    KeywordOr,
    KeywordOrelse,
    KeywordPacked,
    KeywordPub,
    KeywordResume,
    KeywordReturn,
    KeywordStruct,
    KeywordSuspend,
    KeywordSwitch,
    KeywordTest,
    KeywordThreadlocal,
    KeywordTry,
    KeywordUnion,
    KeywordUnreachable,
    KeywordUsingnamespace,
    KeywordVar,
    KeywordVolatile,
    KeywordWhile,

    // === Errors ===
    Invalid,
    InvalidPeriodAsterisks,

    // === Control ===
    Eof,
}

const _: () = assert!(std::mem::size_of::<Tag>() == 1);

impl Tag {
    /// Fixed source text for this tag, or `None` for variable-text tags.
    pub fn lexeme(self) -> Option<&'static str> {
        match self {
            Tag::Identifier
            | Tag::Builtin
            | Tag::NumberLiteral
            | Tag::StringLiteral
            | Tag::MultilineStringLiteralLine
            | Tag::CharLiteral
            | Tag::LineComment
            | Tag::DocComment
            | Tag::ContainerDocComment
            | Tag::Whitespace
            | Tag::Invalid
            | Tag::InvalidPeriodAsterisks
            | Tag::Eof => None,
            _ => Some(self.symbol()),
        }
    }

    /// Human-readable description: the spelling for fixed tags, a short
    /// phrase for the rest. Used in CLI output and test failure messages.
    pub fn symbol(self) -> &'static str {
        match self {
            Tag::Identifier => "an identifier",
            Tag::Builtin => "a builtin function",
            Tag::NumberLiteral => "a number literal",
            Tag::StringLiteral | Tag::MultilineStringLiteralLine => "a string literal",
            Tag::CharLiteral => "a character literal",
            Tag::LineComment => "a comment",
            Tag::DocComment | Tag::ContainerDocComment => "a document comment",
            Tag::Whitespace => "whitespace",
            Tag::Invalid => "invalid bytes",
            Tag::Eof => "EOF",

            Tag::LParen => "(",
            Tag::RParen => ")",
            Tag::LBrace => "{",
            Tag::RBrace => "}",
            Tag::LBracket => "[",
            Tag::RBracket => "]",
            Tag::Semicolon => ";",
            Tag::Comma => ",",
            Tag::Colon => ":",

            Tag::Bang => "!",
            Tag::BangEqual => "!=",
            Tag::Pipe => "|",
            Tag::PipePipe => "||",
            Tag::PipeEqual => "|=",
            Tag::Equal => "=",
            Tag::EqualEqual => "==",
            Tag::EqualAngleBracketRight => "=>",
            Tag::Percent => "%",
            Tag::PercentEqual => "%=",
            Tag::Period => ".",
            Tag::PeriodAsterisk => ".*",
            Tag::Ellipsis2 => "..",
            Tag::Ellipsis3 => "...",
            Tag::Caret => "^",
            Tag::CaretEqual => "^=",
            Tag::Plus => "+",
            Tag::PlusPlus => "++",
            Tag::PlusEqual => "+=",
            Tag::PlusPercent => "+%",
            Tag::PlusPercentEqual => "+%=",
            Tag::PlusPipe => "+|",
            Tag::PlusPipeEqual => "+|=",
            Tag::Minus => "-",
            Tag::MinusEqual => "-=",
            Tag::MinusPercent => "-%",
            Tag::MinusPercentEqual => "-%=",
            Tag::MinusPipe => "-|",
            Tag::MinusPipeEqual => "-|=",
            Tag::Asterisk => "*",
            Tag::AsteriskEqual => "*=",
            Tag::AsteriskAsterisk => "**",
            Tag::AsteriskPercent => "*%",
            Tag::AsteriskPercentEqual => "*%=",
            Tag::AsteriskPipe => "*|",
            Tag::AsteriskPipeEqual => "*|=",
            Tag::Arrow => "->",
            Tag::Slash => "/",
            Tag::SlashEqual => "/=",
            Tag::Ampersand => "&",
            Tag::AmpersandEqual => "&=",
            Tag::QuestionMark => "?",
            Tag::AngleBracketLeft => "<",
            Tag::AngleBracketLeftEqual => "<=",
            Tag::AngleBracketAngleBracketLeft => "<<",
            Tag::AngleBracketAngleBracketLeftEqual => "<<=",
            Tag::AngleBracketAngleBracketLeftPipe => "<<|",
            Tag::AngleBracketAngleBracketLeftPipeEqual => "<<|=",
            Tag::AngleBracketRight => ">",
            Tag::AngleBracketRightEqual => ">=",
            Tag::AngleBracketAngleBracketRight => ">>",
            Tag::AngleBracketAngleBracketRightEqual => ">>=",
            Tag::Tilde => "~",
            Tag::InvalidPeriodAsterisks => ".**",

            Tag::KeywordAddrspace => "addrspace",
            Tag::KeywordAlign => "align",
            Tag::KeywordAllowzero => "allowzero",
            Tag::KeywordAnd => "and",
            Tag::KeywordAnyframe => "anyframe",
            Tag::KeywordAnytype => "anytype",
            Tag::KeywordAsm => "asm",
            Tag::KeywordAsync => "async",
            Tag::KeywordAwait => "await",
            Tag::KeywordBreak => "break",
            Tag::KeywordCallconv => "callconv",
            Tag::KeywordCatch => "catch",
            Tag::KeywordComptime => "comptime",
            Tag::KeywordConst => "const",
            Tag::KeywordContinue => "continue",
            Tag::KeywordDefer => "defer",
            Tag::KeywordElse => "else",
            Tag::KeywordEnum => "enum",
            Tag::KeywordErrdefer => "errdefer",
            Tag::KeywordError => "error",
            Tag::KeywordExport => "export",
            Tag::KeywordExtern => "extern",
            Tag::KeywordFn => "fn",
            Tag::KeywordFor => "for",
            Tag::KeywordIf => "if",
            Tag::KeywordInline => "inline",
            Tag::KeywordLinksection => "linksection",
            Tag::KeywordNoalias => "noalias",
            Tag::KeywordNoinline => "noinline",
            Tag::KeywordNosuspend => "nosuspend",
            Tag::KeywordOpaque => "opaque",
            Tag::KeywordOr => "or",
            Tag::KeywordOrelse => "orelse",
            Tag::KeywordPacked => "packed",
            Tag::KeywordPub => "pub",
            Tag::KeywordResume => "resume",
            Tag::KeywordReturn => "return",
            Tag::KeywordStruct => "struct",
            Tag::KeywordSuspend => "suspend",
            Tag::KeywordSwitch => "switch",
            Tag::KeywordTest => "test",
            Tag::KeywordThreadlocal => "threadlocal",
            Tag::KeywordTry => "try",
            Tag::KeywordUnion => "union",
            Tag::KeywordUnreachable => "unreachable",
            Tag::KeywordUsingnamespace => "usingnamespace",
            Tag::KeywordVar => "var",
            Tag::KeywordVolatile => "volatile",
            Tag::KeywordWhile => "while",
        }
    }

    /// Snake-case tag name, as printed by `ziglight lex`.
    ///
    /// Keywords render as `keyword_<word>`; everything else spells out the
    /// variant (`l_paren`, `angle_bracket_angle_bracket_left_pipe_equal`).
    pub fn name(self) -> &'static str {
        match self {
            Tag::Identifier => "identifier",
            Tag::Builtin => "builtin",
            Tag::NumberLiteral => "number_literal",
            Tag::StringLiteral => "string_literal",
            Tag::MultilineStringLiteralLine => "multiline_string_literal_line",
            Tag::CharLiteral => "char_literal",
            Tag::LParen => "l_paren",
            Tag::RParen => "r_paren",
            Tag::LBrace => "l_brace",
            Tag::RBrace => "r_brace",
            Tag::LBracket => "l_bracket",
            Tag::RBracket => "r_bracket",
            Tag::Semicolon => "semicolon",
            Tag::Comma => "comma",
            Tag::Colon => "colon",
            Tag::Bang => "bang",
            Tag::BangEqual => "bang_equal",
            Tag::Pipe => "pipe",
            Tag::PipePipe => "pipe_pipe",
            Tag::PipeEqual => "pipe_equal",
            Tag::Equal => "equal",
            Tag::EqualEqual => "equal_equal",
            Tag::EqualAngleBracketRight => "equal_angle_bracket_right",
            Tag::Percent => "percent",
            Tag::PercentEqual => "percent_equal",
            Tag::Period => "period",
            Tag::PeriodAsterisk => "period_asterisk",
            Tag::Ellipsis2 => "ellipsis2",
            Tag::Ellipsis3 => "ellipsis3",
            Tag::Caret => "caret",
            Tag::CaretEqual => "caret_equal",
            Tag::Plus => "plus",
            Tag::PlusPlus => "plus_plus",
            Tag::PlusEqual => "plus_equal",
            Tag::PlusPercent => "plus_percent",
            Tag::PlusPercentEqual => "plus_percent_equal",
            Tag::PlusPipe => "plus_pipe",
            Tag::PlusPipeEqual => "plus_pipe_equal",
            Tag::Minus => "minus",
            Tag::MinusEqual => "minus_equal",
            Tag::MinusPercent => "minus_percent",
            Tag::MinusPercentEqual => "minus_percent_equal",
            Tag::MinusPipe => "minus_pipe",
            Tag::MinusPipeEqual => "minus_pipe_equal",
            Tag::Asterisk => "asterisk",
            Tag::AsteriskEqual => "asterisk_equal",
            Tag::AsteriskAsterisk => "asterisk_asterisk",
            Tag::AsteriskPercent => "asterisk_percent",
            Tag::AsteriskPercentEqual => "asterisk_percent_equal",
            Tag::AsteriskPipe => "asterisk_pipe",
            Tag::AsteriskPipeEqual => "asterisk_pipe_equal",
            Tag::Arrow => "arrow",
            Tag::Slash => "slash",
            Tag::SlashEqual => "slash_equal",
            Tag::Ampersand => "ampersand",
            Tag::AmpersandEqual => "ampersand_equal",
            Tag::QuestionMark => "question_mark",
            Tag::AngleBracketLeft => "angle_bracket_left",
            Tag::AngleBracketLeftEqual => "angle_bracket_left_equal",
            Tag::AngleBracketAngleBracketLeft => "angle_bracket_angle_bracket_left",
            Tag::AngleBracketAngleBracketLeftEqual => "angle_bracket_angle_bracket_left_equal",
            Tag::AngleBracketAngleBracketLeftPipe => "angle_bracket_angle_bracket_left_pipe",
            Tag::AngleBracketAngleBracketLeftPipeEqual => {
                "angle_bracket_angle_bracket_left_pipe_equal"
            }
            Tag::AngleBracketRight => "angle_bracket_right",
            Tag::AngleBracketRightEqual => "angle_bracket_right_equal",
            Tag::AngleBracketAngleBracketRight => "angle_bracket_angle_bracket_right",
            Tag::AngleBracketAngleBracketRightEqual => "angle_bracket_angle_bracket_right_equal",
            Tag::Tilde => "tilde",
            Tag::LineComment => "line_comment",
            Tag::DocComment => "doc_comment",
            Tag::ContainerDocComment => "container_doc_comment",
            Tag::Whitespace => "whitespace",
            Tag::KeywordAddrspace => "keyword_addrspace",
            Tag::KeywordAlign => "keyword_align",
            Tag::KeywordAllowzero => "keyword_allowzero",
            Tag::KeywordAnd => "keyword_and",
            Tag::KeywordAnyframe => "keyword_anyframe",
            Tag::KeywordAnytype => "keyword_anytype",
            Tag::KeywordAsm => "keyword_asm",
            Tag::KeywordAsync => "keyword_async",
            Tag::KeywordAwait => "keyword_await",
            Tag::KeywordBreak => "keyword_break",
            Tag::KeywordCallconv => "keyword_callconv",
            Tag::KeywordCatch => "keyword_catch",
            Tag::KeywordComptime => "keyword_comptime",
            Tag::KeywordConst => "keyword_const",
            Tag::KeywordContinue => "keyword_continue",
            Tag::KeywordDefer => "keyword_defer",
            Tag::KeywordElse => "keyword_else",
            Tag::KeywordEnum => "keyword_enum",
            Tag::KeywordErrdefer => "keyword_errdefer",
            Tag::KeywordError => "keyword_error",
            Tag::KeywordExport => "keyword_export",
            Tag::KeywordExtern => "keyword_extern",
            Tag::KeywordFn => "keyword_fn",
            Tag::KeywordFor => "keyword_for",
            Tag::KeywordIf => "keyword_if",
            Tag::KeywordInline => "keyword_inline",
            Tag::KeywordLinksection => "keyword_linksection",
            Tag::KeywordNoalias => "keyword_noalias",
            Tag::KeywordNoinline => "keyword_noinline",
            Tag::KeywordNosuspend => "keyword_nosuspend",
            Tag::KeywordOpaque => "keyword_opaque",
            Tag::KeywordOr => "keyword_or",
            Tag::KeywordOrelse => "keyword_orelse",
            Tag::KeywordPacked => "keyword_packed",
            Tag::KeywordPub => "keyword_pub",
            Tag::KeywordResume => "keyword_resume",
            Tag::KeywordReturn => "keyword_return",
            Tag::KeywordStruct => "keyword_struct",
            Tag::KeywordSuspend => "keyword_suspend",
            Tag::KeywordSwitch => "keyword_switch",
            Tag::KeywordTest => "keyword_test",
            Tag::KeywordThreadlocal => "keyword_threadlocal",
            Tag::KeywordTry => "keyword_try",
            Tag::KeywordUnion => "keyword_union",
            Tag::KeywordUnreachable => "keyword_unreachable",
            Tag::KeywordUsingnamespace => "keyword_usingnamespace",
            Tag::KeywordVar => "keyword_var",
            Tag::KeywordVolatile => "keyword_volatile",
            Tag::KeywordWhile => "keyword_while",
            Tag::Invalid => "invalid",
            Tag::InvalidPeriodAsterisks => "invalid_periodasterisks",
            Tag::Eof => "eof",
        }
    }

    /// Returns `true` for reserved-word tags.
    #[inline]
    pub fn is_keyword(self) -> bool {
        (self as u8) >= (Tag::KeywordAddrspace as u8) && (self as u8) <= (Tag::KeywordWhile as u8)
    }

    /// Returns `true` for the three comment tags.
    #[inline]
    pub fn is_comment(self) -> bool {
        matches!(
            self,
            Tag::LineComment | Tag::DocComment | Tag::ContainerDocComment
        )
    }

    /// Returns `true` for number, string, and character literal tags.
    #[inline]
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            Tag::NumberLiteral
                | Tag::StringLiteral
                | Tag::MultilineStringLiteralLine
                | Tag::CharLiteral
        )
    }

    /// Returns `true` for tags a parser would skip: whitespace and plain
    /// line comments. Doc comments carry meaning and are not trivia.
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(self, Tag::Whitespace | Tag::LineComment)
    }

    /// Returns `true` for the error tags.
    #[inline]
    pub fn is_error(self) -> bool {
        matches!(self, Tag::Invalid | Tag::InvalidPeriodAsterisks)
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
