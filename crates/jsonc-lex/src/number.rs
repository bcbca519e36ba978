/// States of the JSON number recognizer. Named after the grammar position
/// they represent rather than after an implementation detail, matching the
/// decoder's own state enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Start,         // Q0
    AfterSign,     // Q1
    LeadingZero,   // Q2 (accept)
    IntegerDigits, // Q3 (accept)
    AfterDot,      // Q4
    FractionDigits,// Q5 (accept)
    AfterExpSign,  // Q6 (note: exponent marker seen, sign not yet required)
    AfterExpMark,  // Q7 (sign consumed, digit required)
    ExponentDigits,// Q8 (accept)
    Fail,
}

impl State {
    fn is_accepting(self) -> bool {
        matches!(
            self,
            State::LeadingZero | State::IntegerDigits | State::FractionDigits | State::ExponentDigits
        )
    }
}

fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

fn is_one_nine(b: u8) -> bool {
    matches!(b, b'1'..=b'9')
}

/// True when `b` validly terminates a bare literal or number: the grammar's
/// "literal terminator" set.
pub fn is_literal_terminator(b: u8) -> bool {
    matches!(b, 0 | b'\t' | b'\n' | b'\r' | b' ' | b',' | b'}' | b']')
}

fn step(state: State, byte: u8) -> State {
    match (state, byte) {
        (State::Start, b'-') => State::AfterSign,
        (State::Start, b'0') => State::LeadingZero,
        (State::Start, b) if is_one_nine(b) => State::IntegerDigits,

        (State::AfterSign, b'0') => State::LeadingZero,
        (State::AfterSign, b) if is_one_nine(b) => State::IntegerDigits,

        (State::LeadingZero, b'.') => State::AfterDot,
        (State::LeadingZero, b'e') | (State::LeadingZero, b'E') => State::AfterExpSign,

        (State::IntegerDigits, b) if is_digit(b) => State::IntegerDigits,
        (State::IntegerDigits, b'.') => State::AfterDot,
        (State::IntegerDigits, b'e') | (State::IntegerDigits, b'E') => State::AfterExpSign,

        (State::AfterDot, b) if is_digit(b) => State::FractionDigits,

        (State::FractionDigits, b) if is_digit(b) => State::FractionDigits,
        (State::FractionDigits, b'e') | (State::FractionDigits, b'E') => State::AfterExpSign,

        (State::AfterExpSign, b'+') | (State::AfterExpSign, b'-') => State::AfterExpMark,
        (State::AfterExpSign, b) if is_digit(b) => State::ExponentDigits,

        (State::AfterExpMark, b) if is_digit(b) => State::ExponentDigits,

        (State::ExponentDigits, b) if is_digit(b) => State::ExponentDigits,

        _ => State::Fail,
    }
}

/// Drive the number DFA over `bytes` (the run of input up to, but not
/// including, the next literal terminator). Returns the byte length of the
/// longest prefix consumed and whether the automaton ended in an accepting
/// state for that exact prefix.
///
/// `bytes` need not itself stop at a terminator; the caller is expected to
/// have already sliced up to the next terminator byte, since the grammar
/// requires the *entire* run between terminators to form one valid number.
pub fn recognize(bytes: &[u8]) -> (usize, bool) {
    let mut state = State::Start;
    let mut consumed = 0;
    for &b in bytes {
        let next = step(state, b);
        if next == State::Fail {
            break;
        }
        state = next;
        consumed += 1;
    }
    (consumed, consumed == bytes.len() && state.is_accepting())
}
