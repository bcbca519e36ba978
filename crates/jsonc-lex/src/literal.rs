use crate::cursor::Cursor;
use crate::number::is_literal_terminator;

/// Match a bare literal (`true`, `false`, `null`) starting at the cursor's
/// current position. Requires a byte-identical match followed by a literal
/// terminator; rejects `truex`, `nullable`, and similar near-misses.
///
/// On success, advances the cursor past the literal and returns `true`.
pub fn match_literal(cursor: &mut Cursor<'_>, expected: &[u8]) -> bool {
    for (i, &want) in expected.iter().enumerate() {
        if cursor.byte_at(i) != want {
            return false;
        }
    }
    if !is_literal_terminator(cursor.byte_at(expected.len())) {
        return false;
    }
    cursor.advance_n(expected.len());
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_exact_literal_before_terminator() {
        let mut cursor = Cursor::new(b"true,");
        assert!(match_literal(&mut cursor, b"true"));
        assert_eq!(cursor.offset(), 4);
    }

    #[test]
    fn rejects_literal_with_trailing_garbage() {
        let mut cursor = Cursor::new(b"truex");
        assert!(!match_literal(&mut cursor, b"true"));
        assert_eq!(cursor.offset(), 0);
    }

    #[test]
    fn accepts_literal_at_end_of_input() {
        let mut cursor = Cursor::new(b"null");
        assert!(match_literal(&mut cursor, b"null"));
        assert_eq!(cursor.offset(), 4);
    }

    #[test]
    fn rejects_partial_literal() {
        let mut cursor = Cursor::new(b"tru ");
        assert!(!match_literal(&mut cursor, b"true"));
    }
}
