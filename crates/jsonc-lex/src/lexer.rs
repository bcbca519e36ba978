use crate::cursor::Cursor;
use crate::literal::match_literal;
use crate::number::{is_literal_terminator, recognize};
use crate::string::{scan_string, StringScan};
use crate::token::{Token, TokenKind};
use jsonc_util::{Error, ErrorCode, Result};

/// Converts raw input bytes into an ordered stream of tokens.
///
/// The lexer owns a `Vec<Token>` for the duration of tokenization; this
/// buffer stands in for the temporary scratch arena described by the
/// decoder's memory model (see the crate-level design notes) and is
/// dropped automatically when the `Lexer` goes out of scope.
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
    source: &'a [u8],
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a [u8]) -> Self {
        Lexer {
            cursor: Cursor::new(source),
            source,
            tokens: Vec::new(),
        }
    }

    /// Tokenize the entire input. On success, `self.tokens()` exposes the
    /// finished stream. On failure, whatever tokens were emitted so far are
    /// discarded along with `self` once it is dropped.
    pub fn tokenize(mut self) -> Result<Vec<Token>> {
        loop {
            self.cursor.skip_whitespace();
            if self.cursor.is_at_end() || self.cursor.current() == 0 {
                break;
            }
            self.next_token()?;
        }
        Ok(self.tokens)
    }

    fn push(&mut self, kind: TokenKind, start: usize, position: jsonc_util::Position) {
        let len = self.cursor.offset() - start;
        self.tokens.push(Token::new(kind, start, len, position));
    }

    fn next_token(&mut self) -> Result<()> {
        let start = self.cursor.offset();
        let position = self.cursor.position();
        let b = self.cursor.current();
        match b {
            b'{' => {
                self.cursor.advance();
                self.push(TokenKind::OpenBrace, start, position);
            }
            b'}' => {
                self.cursor.advance();
                self.push(TokenKind::CloseBrace, start, position);
            }
            b'[' => {
                self.cursor.advance();
                self.push(TokenKind::OpenBracket, start, position);
            }
            b']' => {
                self.cursor.advance();
                self.push(TokenKind::CloseBracket, start, position);
            }
            b':' => {
                self.cursor.advance();
                self.push(TokenKind::Colon, start, position);
            }
            b',' => {
                self.cursor.advance();
                self.push(TokenKind::Comma, start, position);
            }
            b'"' => self.lex_string(start, position)?,
            b't' => self.lex_literal(b"true", TokenKind::True, position)?,
            b'f' => self.lex_literal(b"false", TokenKind::False, position)?,
            b'n' => self.lex_literal(b"null", TokenKind::Null, position)?,
            b'-' | b'0'..=b'9' => self.lex_number(start, position)?,
            _ => {
                return Err(Error::new(
                    ErrorCode::Token,
                    format!("unexpected byte {:?}", b as char),
                    position,
                ))
            }
        }
        Ok(())
    }

    fn lex_string(&mut self, start: usize, position: jsonc_util::Position) -> Result<()> {
        self.cursor.advance(); // opening quote
        match scan_string(&mut self.cursor) {
            StringScan::Ok(_) => {
                self.push(TokenKind::String, start, position);
                Ok(())
            }
            StringScan::Unterminated => Err(Error::new(
                ErrorCode::String,
                "unterminated string literal",
                self.cursor.position(),
            )),
        }
    }

    fn lex_literal(
        &mut self,
        expected: &'static [u8],
        kind: TokenKind,
        position: jsonc_util::Position,
    ) -> Result<()> {
        let start = self.cursor.offset();
        if match_literal(&mut self.cursor, expected) {
            self.push(kind, start, position);
            Ok(())
        } else {
            Err(Error::new(
                ErrorCode::Literal,
                format!(
                    "invalid literal, expected {:?}",
                    std::str::from_utf8(expected).unwrap_or("?")
                ),
                position,
            ))
        }
    }

    fn lex_number(&mut self, start: usize, position: jsonc_util::Position) -> Result<()> {
        let mut end = start;
        while end < self.source.len() && !is_literal_terminator(self.source[end]) {
            end += 1;
        }
        let run = &self.source[start..end];
        let (consumed, accepted) = recognize(run);
        if !accepted {
            let _ = consumed;
            return Err(Error::new(
                ErrorCode::Number,
                "malformed number literal",
                position,
            ));
        }
        self.cursor.advance_n(run.len());
        self.push(TokenKind::Number, start, position);
        Ok(())
    }
}

/// Tokenize `source` into a flat token stream. Convenience entry point used
/// by the parser; equivalent to `Lexer::new(source).tokenize()`.
pub fn tokenize(source: &[u8]) -> Result<Vec<Token>> {
    Lexer::new(source).tokenize()
}
