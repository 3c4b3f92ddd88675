//! Output codecs: how literal and match tokens become bytes.
//!
//! The engine is format-agnostic; it talks to a [`Codec`], which formats
//! tokens and hands encoded spans to a [`Sink`]. Two formats exist: the
//! human-readable [`AsciiCodec`] and the bit-packed [`BinaryCodec`]. The
//! codec set is closed and the encode loop is hot, so dispatch is a small
//! tagged enum rather than a boxed trait object.

pub mod ascii;
pub mod binary;

pub use ascii::AsciiCodec;
pub use binary::BinaryCodec;

use crate::engine::Match;

/// Destination for encoded bytes.
///
/// Implemented for any `FnMut(&[u8]) -> bool` closure; captured state plays
/// the role of a user context pointer. The buffer is only valid for the
/// duration of the call. Returning `false` aborts the compression with an
/// I/O error; output already delivered is not rolled back.
pub trait Sink {
    /// Accepts one encoded span.
    fn write(&mut self, buf: &[u8]) -> bool;
}

impl<F: FnMut(&[u8]) -> bool> Sink for F {
    #[inline]
    fn write(&mut self, buf: &[u8]) -> bool {
        self(buf)
    }
}

/// An output codec, selected at creation time.
///
/// All operations return `false` when the sink rejects a write; the engine
/// propagates that as its I/O error and stops.
pub enum Codec<S> {
    /// Human-readable, space-separated tokens.
    Ascii(AsciiCodec<S>),
    /// MSB-first bit-packed tokens.
    Binary(BinaryCodec<S>),
}

impl<S: Sink> Codec<S> {
    /// Creates the ASCII codec writing into `sink`.
    pub fn ascii(sink: S) -> Self {
        Codec::Ascii(AsciiCodec::new(sink))
    }

    /// Creates the binary codec writing into `sink`.
    ///
    /// `max_pos` is the exclusive upper bound on match positions (the window
    /// size). Returns `None` on invalid parameters; see [`BinaryCodec::new`].
    pub fn binary(
        sink: S,
        min_match_len: usize,
        max_match_len: usize,
        max_pos: usize,
    ) -> Option<Self> {
        BinaryCodec::new(sink, min_match_len, max_match_len, max_pos).map(Codec::Binary)
    }

    /// Emits one raw literal byte.
    #[inline]
    pub fn write_literal(&mut self, b: u8) -> bool {
        match self {
            Codec::Ascii(c) => c.write_literal(b),
            Codec::Binary(c) => c.write_literal(b),
        }
    }

    /// Emits a back-reference token.
    #[inline]
    pub fn write_match(&mut self, m: Match) -> bool {
        match self {
            Codec::Ascii(c) => c.write_match(m),
            Codec::Binary(c) => c.write_match(m),
        }
    }

    /// Terminates the stream, flushing any buffered partial output.
    pub fn close(&mut self) -> bool {
        match self {
            Codec::Ascii(c) => c.close(),
            Codec::Binary(c) => c.close(),
        }
    }
}
