//! Lexer for a single line of `OpenQASM`.

use logos::Logos;
use std::ops::Range;

/// Tokens recognized on a line.
///
/// Only the tokens needed to recognize declarations and gate invocations are
/// distinguished. Parameter lists may contain arbitrary expressions; the
/// parser slices their raw text out of the line instead of interpreting them.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
#[logos(skip r"//[^\n]*")]
#[logos(skip r"/\*[^*]*\*+(?:[^/*][^*]*\*+)*/")]
pub enum Token {
    // Declarations
    #[token("qubit")]
    Qubit,

    #[token("qreg")]
    Qreg,

    #[token("creg")]
    Creg,

    // Statements that look like invocations but are not gates
    #[token("measure")]
    Measure,

    #[token("reset")]
    Reset,

    #[token("barrier")]
    Barrier,

    #[token("delay")]
    Delay,

    // Literals
    #[regex(r"[0-9]+\.[0-9]*([eE][+-]?[0-9]+)?", |lex| lex.slice().parse::<f64>().ok())]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+", |lex| lex.slice().parse::<f64>().ok())]
    FloatLiteral(f64),

    #[regex(r"[0-9]+", |lex| lex.slice().to_string())]
    IntLiteral(String),

    #[regex(r#""[^"]*""#)]
    StringLiteral,

    // Identifiers
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),

    // Punctuation
    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token("[")]
    LBracket,

    #[token("]")]
    RBracket,

    #[token(",")]
    Comma,

    #[token(";")]
    Semicolon,

    #[token("=")]
    Eq,

    #[token("->")]
    Arrow,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Qubit => write!(f, "qubit"),
            Token::Qreg => write!(f, "qreg"),
            Token::Creg => write!(f, "creg"),
            Token::Measure => write!(f, "measure"),
            Token::Reset => write!(f, "reset"),
            Token::Barrier => write!(f, "barrier"),
            Token::Delay => write!(f, "delay"),
            Token::FloatLiteral(v) => write!(f, "{v}"),
            Token::IntLiteral(s) => write!(f, "{s}"),
            Token::StringLiteral => write!(f, "<string>"),
            Token::Identifier(s) => write!(f, "{s}"),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
            Token::LBracket => write!(f, "["),
            Token::RBracket => write!(f, "]"),
            Token::Comma => write!(f, ","),
            Token::Semicolon => write!(f, ";"),
            Token::Eq => write!(f, "="),
            Token::Arrow => write!(f, "->"),
        }
    }
}

/// A lexed item with its byte span in the line.
///
/// `token` is `None` where the lexer found text it does not recognize.
#[derive(Debug, Clone)]
pub struct SpannedToken {
    pub token: Option<Token>,
    pub span: Range<usize>,
}

/// Tokenize one line of source.
pub fn tokenize(line: &str) -> Vec<SpannedToken> {
    let mut lexer = Token::lexer(line);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        tokens.push(SpannedToken {
            token: result.ok(),
            span: lexer.span(),
        });
    }

    tokens
}
