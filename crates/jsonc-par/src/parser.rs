use crate::value::Value;
use bumpalo::collections::Vec as BumpVec;
use jsonc_lex::{Token, TokenKind};
use jsonc_util::{Arena, Error, ErrorCode, Position, Result};

/// Nesting depth beyond which an input is rejected with a structural error
/// rather than risking native call-stack exhaustion. Each descent into an
/// object or array value counts as one level.
pub const MAX_NESTING_DEPTH: usize = 512;

/// A recursive-descent parser over an already-lexed token stream, building
/// a [`Value`] tree directly into the caller-supplied arena.
pub struct Parser<'t, 'arena> {
    tokens: &'t [Token],
    source: &'t [u8],
    arena: &'arena Arena,
    position: usize,
    depth: usize,
}

impl<'t, 'arena> Parser<'t, 'arena> {
    pub fn new(tokens: &'t [Token], source: &'t [u8], arena: &'arena Arena) -> Self {
        Parser {
            tokens,
            source,
            arena,
            position: 0,
            depth: 0,
        }
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.tokens.len()
    }

    fn current(&self) -> Option<&'t Token> {
        self.tokens.get(self.position)
    }

    fn current_position(&self) -> Position {
        self.current()
            .map(|t| t.position)
            .or_else(|| self.tokens.last().map(|t| t.position))
            .unwrap_or(Position::START)
    }

    fn advance(&mut self) -> Option<&'t Token> {
        let tok = self.tokens.get(self.position);
        if tok.is_some() {
            self.position += 1;
        }
        tok
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.current().map(|t| t.kind) == Some(kind)
    }

    /// Parse the entire token stream as a single document: one value
    /// followed by end of input.
    pub fn parse_document(&mut self) -> Result<Value<'arena>> {
        if self.is_at_end() {
            return Err(Error::new(
                ErrorCode::Value,
                "empty input, expected a value",
                Position::START,
            ));
        }
        let value = self.parse_value()?;
        if !self.is_at_end() {
            return Err(Error::new(
                ErrorCode::Token,
                "unexpected trailing token after document",
                self.current_position(),
            ));
        }
        Ok(value)
    }

    fn parse_value(&mut self) -> Result<Value<'arena>> {
        let tok = self.current().ok_or_else(|| {
            Error::new(ErrorCode::Value, "expected a value", self.current_position())
        })?;
        match tok.kind {
            TokenKind::OpenBrace => self.parse_object(),
            TokenKind::OpenBracket => self.parse_array(),
            TokenKind::True => {
                self.advance();
                Ok(Value::Bool(true))
            }
            TokenKind::False => {
                self.advance();
                Ok(Value::Bool(false))
            }
            TokenKind::Null => {
                self.advance();
                Ok(Value::Null)
            }
            TokenKind::Number => {
                let lexeme = tok.lexeme(self.source);
                let position = tok.position;
                self.advance();
                let text = std::str::from_utf8(lexeme).map_err(|_| {
                    Error::new(ErrorCode::Number, "number lexeme was not valid UTF-8", position)
                })?;
                let n: f64 = text.parse().map_err(|_| {
                    Error::new(ErrorCode::Number, "could not convert number lexeme", position)
                })?;
                Ok(Value::Number(n))
            }
            TokenKind::String => {
                let lexeme = tok.lexeme(self.source);
                let position = tok.position;
                self.advance();
                let text = std::str::from_utf8(lexeme).map_err(|_| {
                    Error::new(ErrorCode::String, "string content was not valid UTF-8", position)
                })?;
                Ok(Value::String(self.arena.alloc_str(text)))
            }
            other => Err(Error::new(
                ErrorCode::Token,
                format!("unexpected {} where a value was expected", other.describe()),
                tok.position,
            )),
        }
    }

    fn enter_composite(&mut self, open_position: Position, code: ErrorCode) -> Result<()> {
        self.depth += 1;
        if self.depth > MAX_NESTING_DEPTH {
            return Err(Error::new(
                code,
                "maximum nesting depth exceeded",
                open_position,
            ));
        }
        Ok(())
    }

    fn parse_object(&mut self) -> Result<Value<'arena>> {
        let open_position = self.current_position();
        self.enter_composite(open_position, ErrorCode::Object)?;
        self.advance(); // consume '{'

        let mut entries = BumpVec::new_in(self.arena.bump());

        if self.check(TokenKind::CloseBrace) {
            self.advance();
            self.depth -= 1;
            return Ok(Value::Object(entries.into_bump_slice()));
        }

        loop {
            let key_tok = self.current().ok_or_else(|| {
                Error::new(
                    ErrorCode::Object,
                    "unexpected end of input, expected a string key",
                    self.current_position(),
                )
            })?;
            if key_tok.kind != TokenKind::String {
                return Err(Error::new(
                    ErrorCode::Object,
                    format!("expected a string key, found {}", key_tok.kind.describe()),
                    key_tok.position,
                ));
            }
            let key_lexeme = key_tok.lexeme(self.source);
            let key_text = std::str::from_utf8(key_lexeme).map_err(|_| {
                Error::new(ErrorCode::Object, "object key was not valid UTF-8", key_tok.position)
            })?;
            let key = self.arena.alloc_str(key_text);
            self.advance();

            if !self.check(TokenKind::Colon) {
                return Err(Error::new(
                    ErrorCode::Object,
                    "expected ':' after object key",
                    self.current_position(),
                ));
            }
            self.advance();

            let value = self.parse_value()?;
            entries.push((key, value));

            if self.check(TokenKind::Comma) {
                self.advance();
                continue;
            }
            break;
        }

        if !self.check(TokenKind::CloseBrace) {
            let message = if self.is_at_end() {
                "unexpected end of input, expected '}'".to_string()
            } else {
                "expected '}' at end of object".to_string()
            };
            return Err(Error::new(ErrorCode::Object, message, self.current_position()));
        }
        self.advance();
        self.depth -= 1;
        Ok(Value::Object(entries.into_bump_slice()))
    }

    fn parse_array(&mut self) -> Result<Value<'arena>> {
        let open_position = self.current_position();
        // Structural failures inside an array are reported under
        // `ErrorCode::Object`, matching the current revision's kept
        // behavior of not yet distinguishing an `Array` code (see the
        // open question on this in the decoder's design notes).
        self.enter_composite(open_position, ErrorCode::Object)?;
        self.advance(); // consume '['

        let mut elements = BumpVec::new_in(self.arena.bump());

        if self.check(TokenKind::CloseBracket) {
            self.advance();
            self.depth -= 1;
            return Ok(Value::Array(elements.into_bump_slice()));
        }

        loop {
            let value = self.parse_value()?;
            elements.push(value);

            if self.check(TokenKind::Comma) {
                self.advance();
                continue;
            }
            break;
        }

        if !self.check(TokenKind::CloseBracket) {
            let message = if self.is_at_end() {
                "unexpected end of input, expected ']'".to_string()
            } else {
                "expected ']' at end of array".to_string()
            };
            return Err(Error::new(ErrorCode::Object, message, self.current_position()));
        }
        self.advance();
        self.depth -= 1;
        Ok(Value::Array(elements.into_bump_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonc_lex::tokenize;

    fn parse<'arena>(arena: &'arena Arena, input: &[u8]) -> Result<Value<'arena>> {
        let tokens = tokenize(input)?;
        Parser::new(&tokens, input, arena).parse_document()
    }

    #[test]
    fn parses_null_root() {
        let arena = Arena::with_capacity(256);
        let v = parse(&arena, b"null").unwrap();
        assert!(v.is_null());
    }

    #[test]
    fn parses_object_with_number_and_bool() {
        let arena = Arena::with_capacity(256);
        let v = parse(&arena, br#"{"a":1,"b":true}"#).unwrap();
        assert_eq!(v.object_get("a").unwrap().as_number(), Some(1.0));
        assert_eq!(v.object_get("b").unwrap().as_bool(), Some(true));
    }

    #[test]
    fn parses_array_with_indexing() {
        let arena = Arena::with_capacity(256);
        let v = parse(&arena, b"[1,2,3]").unwrap();
        assert_eq!(v.array_size(), Some(3));
        assert_eq!(v.array_get(2).unwrap().as_number(), Some(3.0));
        assert!(v.array_get(3).is_none());
    }

    #[test]
    fn rejects_trailing_comma_in_object() {
        let arena = Arena::with_capacity(256);
        let err = parse(&arena, br#"{"a":1,}"#).unwrap_err();
        assert_eq!(err.code, ErrorCode::Object);
    }

    #[test]
    fn rejects_trailing_token_after_document() {
        let arena = Arena::with_capacity(256);
        let err = parse(&arena, b"[1,2] extra").unwrap_err();
        assert_eq!(err.code, ErrorCode::Token);
    }

    #[test]
    fn duplicate_keys_keep_first_match() {
        let arena = Arena::with_capacity(256);
        let v = parse(&arena, br#"{"a":1,"a":2}"#).unwrap();
        assert_eq!(v.object_get("a").unwrap().as_number(), Some(1.0));
    }

    #[test]
    fn nested_arrays_parse_successfully() {
        let arena = Arena::with_capacity(256);
        let v = parse(&arena, b"[1,[2,[3,[4]]]]").unwrap();
        let inner = v.array_get(1).unwrap();
        assert!(inner.is_array());
    }

    #[test]
    fn excessive_nesting_is_rejected() {
        let arena = Arena::with_capacity(1024 * 1024);
        let mut input = "[".repeat(MAX_NESTING_DEPTH + 10);
        input.push_str(&"]".repeat(MAX_NESTING_DEPTH + 10));
        let err = parse(&arena, input.as_bytes()).unwrap_err();
        assert_eq!(err.code, ErrorCode::Object);
    }

    #[test]
    fn array_structural_error_uses_object_code() {
        let arena = Arena::with_capacity(256);
        let err = parse(&arena, b"[1,2").unwrap_err();
        assert_eq!(err.code, ErrorCode::Object);
    }
}
