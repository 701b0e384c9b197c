//! Line-oriented gate extraction.

use qpgf_ir::{GateOp, IrError, QubitId};

use crate::error::{ParseError, ParseResult};
use crate::lexer::{SpannedToken, Token, tokenize};

/// Parse circuit text into gate operations, in source order.
///
/// Each line holds at most one statement; anything after the first `;` is
/// ignored. Qubit declarations and unrecognized lines produce nothing.
pub fn parse(source: &str) -> ParseResult<Vec<GateOp>> {
    let mut ops = Vec::new();

    for (idx, line) in source.lines().enumerate() {
        if let Line::Gate(op) = classify_line(line, idx + 1)? {
            ops.push(op);
        }
    }

    Ok(ops)
}

/// What a single line turned out to be.
#[derive(Debug, PartialEq)]
enum Line {
    Declaration,
    Gate(GateOp),
    Ignored,
}

fn classify_line(line: &str, line_no: usize) -> ParseResult<Line> {
    let tokens = tokenize(line);
    let mut cursor = Cursor {
        line,
        tokens: &tokens,
        pos: 0,
    };

    Ok(match cursor.peek() {
        Some(Token::Qubit | Token::Qreg) => {
            if cursor.declaration() {
                Line::Declaration
            } else {
                Line::Ignored
            }
        }
        Some(Token::Identifier(_)) => match cursor.invocation() {
            Some(raw) => Line::Gate(raw.into_gate(line_no)?),
            None => Line::Ignored,
        },
        _ => Line::Ignored,
    })
}

/// A gate invocation before validation.
#[derive(Debug)]
struct RawInvocation<'a> {
    name: String,
    param: Option<String>,
    indices: Vec<&'a str>,
}

impl RawInvocation<'_> {
    fn into_gate(self, line: usize) -> ParseResult<GateOp> {
        let mut qubits = Vec::with_capacity(self.indices.len());
        for index in self.indices {
            let id = index.parse::<u32>().map_err(|_| ParseError::IndexOutOfRange {
                line,
                index: index.to_string(),
            })?;
            qubits.push(QubitId(id));
        }

        let op = GateOp::new(&self.name, qubits).map_err(|e| match e {
            IrError::DuplicateQubit { qubit, gate_name } => ParseError::DuplicateQubit {
                line,
                gate: gate_name,
                qubit: qubit.0,
            },
            source => ParseError::InvalidOperation { line, source },
        })?;

        Ok(match self.param {
            Some(text) => op.with_raw_param(text),
            None => op,
        })
    }
}

struct Cursor<'a> {
    line: &'a str,
    tokens: &'a [SpannedToken],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn peek(&self) -> Option<&'a Token> {
        let tokens = self.tokens;
        tokens.get(self.pos).and_then(|t| t.token.as_ref())
    }

    fn advance(&mut self) -> Option<&'a Token> {
        let tokens = self.tokens;
        let token = tokens.get(self.pos).and_then(|t| t.token.as_ref());
        self.pos += 1;
        token
    }

    fn consume(&mut self, expected: &Token) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn identifier(&mut self) -> Option<String> {
        match self.advance() {
            Some(Token::Identifier(name)) => Some(name.clone()),
            _ => None,
        }
    }

    fn int(&mut self) -> Option<&'a str> {
        match self.advance() {
            Some(Token::IntLiteral(digits)) => Some(digits.as_str()),
            _ => None,
        }
    }

    /// `qubit[N] name;`, `qubit name;` or `qreg name[N];`
    fn declaration(&mut self) -> bool {
        match self.advance() {
            Some(Token::Qubit) => {
                if self.consume(&Token::LBracket) {
                    if self.int().is_none() || !self.consume(&Token::RBracket) {
                        return false;
                    }
                }
                self.identifier().is_some() && self.consume(&Token::Semicolon)
            }
            Some(Token::Qreg) => {
                self.identifier().is_some()
                    && self.consume(&Token::LBracket)
                    && self.int().is_some()
                    && self.consume(&Token::RBracket)
                    && self.consume(&Token::Semicolon)
            }
            _ => false,
        }
    }

    /// `name[(params)] reg[i][, reg[j]];`
    fn invocation(&mut self) -> Option<RawInvocation<'a>> {
        let name = self.identifier()?;
        let param = if self.peek() == Some(&Token::LParen) {
            Some(self.parameter_text()?)
        } else {
            None
        };

        let mut indices = vec![self.qubit_ref()?];
        if self.consume(&Token::Comma) {
            indices.push(self.qubit_ref()?);
        }
        if !self.consume(&Token::Semicolon) {
            return None;
        }

        Some(RawInvocation {
            name,
            param,
            indices,
        })
    }

    /// `reg[i]`
    fn qubit_ref(&mut self) -> Option<&'a str> {
        self.identifier()?;
        if !self.consume(&Token::LBracket) {
            return None;
        }
        let index = self.int()?;
        self.consume(&Token::RBracket).then_some(index)
    }

    /// Slice the raw text between a balanced pair of parentheses.
    ///
    /// Unrecognized characters are allowed inside; the text is not
    /// interpreted here.
    fn parameter_text(&mut self) -> Option<String> {
        let tokens = self.tokens;
        let open = tokens.get(self.pos)?.span.end;
        self.pos += 1;

        let mut depth = 1usize;
        while let Some(spanned) = tokens.get(self.pos) {
            self.pos += 1;
            match spanned.token {
                Some(Token::LParen) => depth += 1,
                Some(Token::RParen) => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(self.line[open..spanned.span.start].to_string());
                    }
                }
                _ => {}
            }
        }
        None
    }
}
