//! Parser of the number of series terms entered by a user.

use crate::defs::Error;
use crate::defs::DEFAULT_NUM_TERMS;
use std::str::Chars;
use tracing::debug;

// Code points of the digit zero of every Unicode decimal digit range (general category Nd).
// Each range holds the digits 0 to 9 in order.
const DECIMAL_ZEROS: [u32; 68] = [
    0x0030, 0x0660, 0x06F0, 0x07C0, 0x0966, 0x09E6, 0x0A66, 0x0AE6,
    0x0B66, 0x0BE6, 0x0C66, 0x0CE6, 0x0D66, 0x0DE6, 0x0E50, 0x0ED0,
    0x0F20, 0x1040, 0x1090, 0x17E0, 0x1810, 0x1946, 0x19D0, 0x1A80,
    0x1A90, 0x1B50, 0x1BB0, 0x1C40, 0x1C50, 0xA620, 0xA8D0, 0xA900,
    0xA9D0, 0xA9F0, 0xAA50, 0xABF0, 0xFF10, 0x104A0, 0x10D30, 0x11066,
    0x110F0, 0x11136, 0x111D0, 0x112F0, 0x11450, 0x114D0, 0x11650, 0x116C0,
    0x11730, 0x118E0, 0x11950, 0x11C50, 0x11D50, 0x11DA0, 0x11F50, 0x16A60,
    0x16AC0, 0x16B50, 0x1D7CE, 0x1D7D8, 0x1D7E2, 0x1D7EC, 0x1D7F6, 0x1E140,
    0x1E2F0, 0x1E4F0, 0x1E950, 0x1FBF0,
];

/// Returns the value of a Unicode decimal digit.
fn decimal_digit(c: char) -> Option<u32> {
    let cp = c as u32;
    let i = DECIMAL_ZEROS.partition_point(|&z| z <= cp);
    if i == 0 {
        return None;
    }
    let d = cp - DECIMAL_ZEROS[i - 1];
    if d < 10 {
        Some(d)
    } else {
        None
    }
}

struct ParserState<'a> {
    chars: Chars<'a>,
    cur_ch: Option<char>,
    neg: bool,
    magnitude: usize,
    overflow: bool,
    digits: usize,
    valid: bool,
}

impl<'a> ParserState<'a> {
    fn new(s: &'a str) -> Self {
        ParserState {
            chars: s.chars(),
            cur_ch: None,
            neg: false,
            magnitude: 0,
            overflow: false,
            digits: 0,
            valid: false,
        }
    }

    /// Returns next character of a string, or None if string end reached.
    fn next_char(&mut self) -> Option<char> {
        self.cur_ch = self.chars.next();
        self.cur_ch
    }

    fn push_digit(&mut self, d: u32) {
        match self.magnitude.checked_mul(10).and_then(|m| m.checked_add(d as usize)) {
            Some(m) => self.magnitude = m,
            None => self.overflow = true,
        }
        self.digits += 1;
    }

    /// Number of terms: negative values mean zero terms, too large values saturate.
    fn num_terms(&self) -> usize {
        if self.neg {
            0
        } else if self.overflow {
            usize::MAX
        } else {
            self.magnitude
        }
    }
}

fn parse(s: &str) -> ParserState<'_> {
    let mut parser_state = ParserState::new(s);
    let mut ch = parser_state.next_char();

    // sign
    if let Some(c) = ch {
        match c {
            '+' => ch = parser_state.next_char(),
            '-' => {
                parser_state.neg = true;
                ch = parser_state.next_char()
            }
            _ => {}
        };
    }

    if ch.and_then(decimal_digit).is_some() {
        parse_digits(&mut parser_state);
    }

    parser_state
}

// Digits may be grouped with single underscores: `1_000_000`.
fn parse_digits(parser_state: &mut ParserState) {
    let mut ch = parser_state.cur_ch;
    let mut after_underscore = false;
    while let Some(c) = ch {
        if let Some(d) = decimal_digit(c) {
            parser_state.push_digit(d);
            after_underscore = false;
        } else if c == '_' && !after_underscore {
            after_underscore = true;
        } else {
            return;
        }
        ch = parser_state.next_char();
    }
    parser_state.valid = parser_state.digits > 0 && !after_underscore;
}

/// Parses the number of series terms from `input`.
/// Surrounding whitespace is ignored, the number can have a sign and underscores between digits.
/// Digits of any script are accepted, e.g. `٣` or `１０`.
/// Negative numbers are treated as zero terms. Numbers exceeding `usize::MAX` saturate.
///
/// ## Errors
///
///  - InvalidTermCount: `input` is not an integer.
pub fn parse_num_terms(input: &str) -> Result<usize, Error> {
    let ps = parse(input.trim());
    if ps.valid {
        Ok(ps.num_terms())
    } else {
        Err(Error::InvalidTermCount(input.to_owned()))
    }
}

/// Parses the number of series terms from `input`.
/// If `input` is not an integer, `DEFAULT_NUM_TERMS` is returned.
pub fn num_terms_or_default(input: &str) -> usize {
    match parse_num_terms(input) {
        Ok(n) => n,
        Err(e) => {
            debug!("{e}, using {DEFAULT_NUM_TERMS} terms");
            DEFAULT_NUM_TERMS
        }
    }
}
