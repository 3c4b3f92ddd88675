//! Human-readable output format.
//!
//! Wire format, newline-terminated:
//!
//! ```text
//! TOKEN (' ' TOKEN)* '\n' '\0'
//! TOKEN := '0' <raw-byte>                      literal
//!        | '1' '(' <decimal-pos> ',' <decimal-len> ')'   match
//! ```
//!
//! The literal byte is inserted raw, not escaped, and the final NUL is part
//! of the output. The separator goes *before* every token except the first.

use crate::codec::Sink;
use crate::engine::Match;

/// Codec emitting `0c` literals and `1(pos,len)` matches.
pub struct AsciiCodec<S> {
    sink: S,
    has_emitted: bool,
}

impl<S: Sink> AsciiCodec<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            has_emitted: false,
        }
    }

    /// Writes the inter-token space, except before the first token.
    fn separate(&mut self) -> bool {
        if self.has_emitted {
            return self.sink.write(b" ");
        }
        self.has_emitted = true;
        true
    }

    pub fn write_literal(&mut self, c: u8) -> bool {
        self.separate() && self.sink.write(&[b'0', c])
    }

    pub fn write_match(&mut self, m: Match) -> bool {
        if !self.separate() {
            return false;
        }
        let token = format!("1({},{})", m.pos, m.len);
        self.sink.write(token.as_bytes())
    }

    pub fn close(&mut self) -> bool {
        self.sink.write(b"\n\0")
    }
}
