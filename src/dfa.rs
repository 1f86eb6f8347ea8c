//! Table-driven UTF-8 decoding automaton
//!
//! Bytes are first mapped to one of twelve classes, then the class and the
//! current [`State`] select the next state. Overlong encodings, surrogates
//! and code points above U+10FFFF all end in [`State::Reject`].
//!
//! Based on Bjoern Hoehrmann's "Flexible and Economical UTF-8 Decoder".

// Byte classes
const ASCII: u8 = 0;
const CONT_80_8F: u8 = 1;
const LEAD_C2_DF: u8 = 2;
const LEAD_E1_EF: u8 = 3; // except ED
const LEAD_ED: u8 = 4;
const LEAD_F4: u8 = 5;
const LEAD_F1_F3: u8 = 6;
const CONT_A0_BF: u8 = 7;
const INVALID: u8 = 8; // C0, C1, F5..FF
const CONT_90_9F: u8 = 9;
const LEAD_E0: u8 = 10;
const LEAD_F0: u8 = 11;

/// Number of distinct byte classes
pub const CLASS_COUNT: usize = 12;

#[rustfmt::skip]
static CLASSES: [u8; 256] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,  // 0x00..0x0F
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,  // 0x10..0x1F
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,  // 0x20..0x2F
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,  // 0x30..0x3F
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,  // 0x40..0x4F
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,  // 0x50..0x5F
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,  // 0x60..0x6F
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,  // 0x70..0x7F
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,  // 0x80..0x8F
    9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9,  // 0x90..0x9F
    7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7,  // 0xA0..0xAF
    7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7,  // 0xB0..0xBF
    8, 8, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2,  // 0xC0..0xCF
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2,  // 0xD0..0xDF
   10, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 4, 3, 3,  // 0xE0..0xEF
   11, 6, 6, 6, 5, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8,  // 0xF0..0xFF
];

/// Classify a byte
#[inline]
pub fn classify(byte: u8) -> u8 {
    CLASSES[byte as usize]
}

/// Decoder state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum State {
    /// A complete code point has been decoded (also the initial state)
    #[default]
    Accept,
    /// The bytes seen so far can never form a valid sequence
    Reject,
    /// One continuation byte left, any of 0x80..0xBF
    Tail1,
    /// Two continuation bytes left, any of 0x80..0xBF
    Tail2,
    /// After 0xE0: next byte must be 0xA0..0xBF (rules out overlongs)
    Tail2AfterE0,
    /// After 0xED: next byte must be 0x80..0x9F (rules out surrogates)
    Tail2AfterED,
    /// After 0xF0: next byte must be 0x90..0xBF (rules out overlongs)
    Tail3AfterF0,
    /// Three continuation bytes left, any of 0x80..0xBF
    Tail3,
    /// After 0xF4: next byte must be 0x80..0x8F (caps at U+10FFFF)
    Tail3AfterF4,
}

impl State {
    /// Transition on a byte class
    pub const fn next(self, class: u8) -> State {
        use State::*;

        match (self, class) {
            (Accept, ASCII) => Accept,
            (Accept, LEAD_C2_DF) => Tail1,
            (Accept, LEAD_E1_EF) => Tail2,
            (Accept, LEAD_ED) => Tail2AfterED,
            (Accept, LEAD_F4) => Tail3AfterF4,
            (Accept, LEAD_F1_F3) => Tail3,
            (Accept, LEAD_E0) => Tail2AfterE0,
            (Accept, LEAD_F0) => Tail3AfterF0,
            (Accept, INVALID) => Reject,

            (Tail1, CONT_80_8F | CONT_90_9F | CONT_A0_BF) => Accept,
            (Tail2, CONT_80_8F | CONT_90_9F | CONT_A0_BF) => Tail1,
            (Tail2AfterE0, CONT_A0_BF) => Tail1,
            (Tail2AfterED, CONT_80_8F | CONT_90_9F) => Tail1,
            (Tail3AfterF0, CONT_90_9F | CONT_A0_BF) => Tail2,
            (Tail3, CONT_80_8F | CONT_90_9F | CONT_A0_BF) => Tail2,
            (Tail3AfterF4, CONT_80_8F) => Tail2,

            _ => Reject,
        }
    }

    /// Whether more continuation bytes are expected
    pub const fn is_pending(self) -> bool {
        !matches!(self, State::Accept | State::Reject)
    }
}

/// Incremental UTF-8 decoder: a [`State`] plus the partial code point
#[derive(Debug, Clone, Copy, Default)]
pub struct Utf8Dfa {
    state: State,
    codepoint: u32,
}

impl Utf8Dfa {
    /// Create a decoder in the accept state
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state
    pub fn state(&self) -> State {
        self.state
    }

    /// The code point assembled so far; complete when the state is `Accept`
    pub fn codepoint(&self) -> u32 {
        self.codepoint
    }

    /// Return to the accept state and drop the partial code point
    pub fn reset(&mut self) {
        self.state = State::Accept;
        self.codepoint = 0;
    }

    /// Feed one byte and return the new state
    ///
    /// Feeding a byte while in `Reject` keeps the decoder in `Reject`; call
    /// [`Utf8Dfa::reset`] to start over.
    #[inline]
    pub fn step(&mut self, byte: u8) -> State {
        let class = classify(byte);
        self.codepoint = if self.state == State::Accept {
            (0xFF >> class) & u32::from(byte)
        } else {
            (u32::from(byte) & 0x3F) | (self.codepoint << 6)
        };
        self.state = self.state.next(class);
        self.state
    }

    /// Reset, then feed `byte` as the first byte of a fresh sequence
    #[inline]
    pub fn restart(&mut self, byte: u8) -> State {
        self.reset();
        self.step(byte)
    }
}

/// Check whether `bytes` is complete, well-formed UTF-8
pub fn validate(bytes: &[u8]) -> bool {
    let mut dfa = Utf8Dfa::new();
    for &byte in bytes {
        if dfa.step(byte) == State::Reject {
            return false;
        }
    }
    dfa.state() == State::Accept
}
