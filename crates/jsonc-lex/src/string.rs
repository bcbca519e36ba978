use crate::cursor::Cursor;

/// Outcome of scanning a string's content.
pub enum StringScan {
    /// Length in bytes of the content between the quotes (excluding both).
    Ok(usize),
    /// The string ran into a newline or end of input before a closing quote.
    Unterminated,
}

/// Scan string content starting just past the opening `"`. Tracks
/// backslash-escape state so that `\"` does not terminate the string, but
/// does not decode any escape sequence — escape content is passed through
/// verbatim to the parser (see the decoder's current-revision design notes
/// on why decoding is deferred).
///
/// On success, the cursor is left just past the closing `"`. On failure,
/// the cursor is left at the offending byte (the unescaped newline, or end
/// of input).
pub fn scan_string(cursor: &mut Cursor<'_>) -> StringScan {
    let content_start = cursor.offset();
    loop {
        let b = cursor.current();
        if b == b'"' {
            let len = cursor.offset() - content_start;
            cursor.advance();
            return StringScan::Ok(len);
        }
        if b == b'\n' || cursor.is_at_end() {
            return StringScan::Unterminated;
        }
        if b == b'\\' {
            cursor.advance();
            if cursor.current() == b'\n' || cursor.is_at_end() {
                return StringScan::Unterminated;
            }
            cursor.advance();
            continue;
        }
        cursor.advance();
    }
}
