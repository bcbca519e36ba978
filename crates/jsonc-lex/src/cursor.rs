use jsonc_util::Position;

/// A byte cursor over the input buffer, tracking source position as it
/// advances. JSON input is treated as raw bytes rather than decoded UTF-8
/// scalar values: every grammar-significant character (`{ } [ ] : , " \`
/// digits, `true`/`false`/`null`) is ASCII, so a byte-at-a-time cursor is
/// both simpler and faster than a `char`-aware one, and string content is
/// passed through untouched regardless of its encoding.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    source: &'a [u8],
    offset: usize,
    position: Position,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a [u8]) -> Self {
        Cursor {
            source,
            offset: 0,
            position: Position::START,
        }
    }

    /// The byte at the current offset, or `\0` past the end of input —
    /// matching the original decoder's null-terminated-buffer convention
    /// without requiring the caller to actually null-terminate.
    pub fn current(&self) -> u8 {
        self.byte_at(0)
    }

    /// The byte `n` positions ahead of the current offset, or `\0` past the
    /// end of input.
    pub fn byte_at(&self, n: usize) -> u8 {
        self.source.get(self.offset + n).copied().unwrap_or(0)
    }

    pub fn is_at_end(&self) -> bool {
        self.offset >= self.source.len()
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Advance one byte, updating line/column per the `\n`-resets-column rule.
    pub fn advance(&mut self) -> u8 {
        let byte = self.current();
        if !self.is_at_end() {
            self.offset += 1;
            self.position.advance(byte);
        }
        byte
    }

    /// Advance `n` bytes without inspecting them individually; used after a
    /// literal/number run has already been validated byte-by-byte via
    /// `byte_at` peeks, to keep the hot scan loop free of position-tracking
    /// overhead until the final commit.
    pub fn advance_n(&mut self, n: usize) {
        for _ in 0..n {
            self.advance();
        }
    }

    /// Consume the current byte if it equals `expected`, returning whether
    /// it matched.
    pub fn match_byte(&mut self, expected: u8) -> bool {
        if self.current() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Skip a run of JSON whitespace (` \t \n \r`).
    pub fn skip_whitespace(&mut self) {
        while matches!(self.current(), b' ' | b'\t' | b'\n' | b'\r') && !self.is_at_end() {
            self.advance();
        }
    }

    /// The raw byte slice from `start_offset` (inclusive) to the current
    /// offset (exclusive) — the non-owning lexeme view for the token about
    /// to be emitted.
    pub fn slice_from(&self, start_offset: usize) -> &'a [u8] {
        &self.source[start_offset..self.offset]
    }
}
