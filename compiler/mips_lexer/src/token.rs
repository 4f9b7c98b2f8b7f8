//! Classified tokens and per-line token lists.

use std::fmt;
use std::ops::Index;
use std::sync::Arc;

/// Kind of a token, as decided by a [`Classify`](crate::Classify) implementation.
///
/// `Invalid` is the single "not a language element" kind; it is the only
/// kind that produces a lexical diagnostic.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    /// `#` to end of line.
    Comment,
    /// Assembler directive such as `.text` or `.word`.
    Directive,
    /// Instruction mnemonic such as `lw` or `add.s`.
    Operator,
    /// Named general-purpose register such as `$t0`.
    RegisterName,
    /// Numbered general-purpose register such as `$8`.
    RegisterNumber,
    /// Coprocessor 1 register `$f0`..`$f31`.
    FpRegisterName,
    Identifier,
    LeftParen,
    RightParen,
    Colon,
    Plus,
    Minus,
    /// Integer in `0..=31`.
    Integer5,
    /// Integer in `-32768..=32767` (and not `Integer5`).
    Integer16,
    /// Integer in `0..=65535` (and not `Integer5`).
    Integer16U,
    /// Any other 32-bit integer.
    Integer32,
    RealNumber,
    QuotedString,
    Invalid,
}

impl TokenKind {
    pub fn is_invalid(self) -> bool {
        matches!(self, TokenKind::Invalid)
    }

    /// Whether this is one of the integer kinds.
    pub fn is_integer(self) -> bool {
        matches!(
            self,
            TokenKind::Integer5 | TokenKind::Integer16 | TokenKind::Integer16U | TokenKind::Integer32
        )
    }

    /// Human-readable name for messages.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Comment => "comment",
            TokenKind::Directive => "directive",
            TokenKind::Operator => "operator",
            TokenKind::RegisterName => "register name",
            TokenKind::RegisterNumber => "register number",
            TokenKind::FpRegisterName => "floating-point register",
            TokenKind::Identifier => "identifier",
            TokenKind::LeftParen => "`(`",
            TokenKind::RightParen => "`)`",
            TokenKind::Colon => "`:`",
            TokenKind::Plus => "`+`",
            TokenKind::Minus => "`-`",
            TokenKind::Integer5 => "5-bit integer",
            TokenKind::Integer16 => "16-bit integer",
            TokenKind::Integer16U => "unsigned 16-bit integer",
            TokenKind::Integer32 => "32-bit integer",
            TokenKind::RealNumber => "real number",
            TokenKind::QuotedString => "quoted string",
            TokenKind::Invalid => "invalid language element",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified, located unit of source text.
///
/// `text` is the token as seen by the classifier: for a character literal
/// that decoded successfully it is the decimal code (`'a'` becomes `97`).
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    /// Name of the source file (empty when tokenizing outside a program).
    pub file_name: Arc<str>,
    /// 1-based line; `0` for ad-hoc example lines.
    pub line: u32,
    /// 1-based column of the first source character of the token.
    pub column: u32,
}

impl Token {
    pub fn new(
        kind: TokenKind,
        text: impl Into<String>,
        file_name: Arc<str>,
        line: u32,
        column: u32,
    ) -> Self {
        Token {
            kind,
            text: text.into(),
            file_name,
            line,
            column,
        }
    }
}

/// Tokens of one source line, in left-to-right order.
#[derive(Clone, Default, Eq, PartialEq, Hash, Debug)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    /// Create a new empty token list.
    #[inline]
    pub fn new() -> Self {
        TokenList { tokens: Vec::new() }
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    #[inline]
    pub fn last(&self) -> Option<&Token> {
        self.tokens.last()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Kinds of every token, in order.
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|token| token.kind).collect()
    }

    /// Texts of every token, in order.
    pub fn texts(&self) -> Vec<&str> {
        self.tokens.iter().map(|token| token.text.as_str()).collect()
    }

    /// Consume into Vec.
    #[inline]
    pub fn into_vec(self) -> Vec<Token> {
        self.tokens
    }
}

impl Index<usize> for TokenList {
    type Output = Token;

    #[inline]
    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
