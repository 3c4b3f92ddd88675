//! The LZSS compression engine.
//!
//! The engine consumes input one byte at a time. It keeps every window
//! position that could still extend into a back-reference as a live
//! candidate in a [`MatchList`]; a candidate dies the moment the byte at its
//! tracked offset disagrees with the incoming byte. When the last candidate
//! dies the engine emits either the best match achieved (if it reached the
//! minimum length) or the buffered bytes as literals, then immediately tries
//! to seed fresh candidates from the new byte.
//!
//! Ordering is load-bearing throughout: candidates are probed against the
//! window *before* the incoming byte is appended, and a candidate's logical
//! offset stays fixed while the window slides underneath it.

use std::fmt;

use crate::codec::{Codec, Sink};
use crate::engine::match_list::{Match, MatchList};
use crate::engine::window::Window;

/// Error kinds reported by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LzssError {
    /// Engine buffers could not be set up; also covers invalid
    /// configurations, which fail at the same point.
    OutOfMemory,
    /// The codec's sink rejected a write.
    Io,
    /// An internal invariant was violated. This is a bug, not a user
    /// condition.
    Internal,
}

impl fmt::Display for LzssError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LzssError::OutOfMemory => "allocation failed",
            LzssError::Io => "codec sink rejected a write",
            LzssError::Internal => "internal invariant violated",
        };
        f.write_str(name)
    }
}

impl std::error::Error for LzssError {}

/// Compression parameters.
///
/// A configuration is valid when `window_size >= 2`, `min_match_len >= 2`
/// and `max_match_len >= min_match_len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressorConfig {
    /// Number of history bytes candidates are matched against.
    pub window_size: usize,
    /// Matches shorter than this are emitted as literals instead.
    pub min_match_len: usize,
    /// Upper cap on a single emitted match; longer runs split.
    pub max_match_len: usize,
}

impl CompressorConfig {
    /// Whether the parameter combination is accepted by [`Compressor::new`].
    pub fn is_valid(&self) -> bool {
        self.window_size >= 2 && self.min_match_len >= 2 && self.max_match_len >= self.min_match_len
    }
}

/// Streaming LZSS compressor.
///
/// Owns its window, candidate list and pending-literal buffer; borrows the
/// caller's codec for its whole lifetime (the caller gets the codec back
/// once the compressor is dropped). Feed input with
/// [`compress`](Self::compress) (any number of calls, any chunking) and
/// finish with [`end`](Self::end). Resources are released on drop.
pub struct Compressor<'c, S: Sink> {
    window: Window,
    matches: MatchList,
    /// Bytes of the live candidate that has not yet reached
    /// `min_match_len`; flushed as literals if the candidate dies early.
    pending: Vec<u8>,
    min_match_len: usize,
    max_match_len: usize,
    codec: &'c mut Codec<S>,
}

impl<'c, S: Sink> Compressor<'c, S> {
    /// Creates a compressor over `codec`.
    ///
    /// Fails with [`LzssError::OutOfMemory`] when the configuration is
    /// invalid (the window, candidate list and pending buffer cannot be
    /// sized from it).
    pub fn new(config: CompressorConfig, codec: &'c mut Codec<S>) -> Result<Self, LzssError> {
        if !config.is_valid() {
            return Err(LzssError::OutOfMemory);
        }
        let window = Window::new(config.window_size).ok_or(LzssError::OutOfMemory)?;
        Ok(Self {
            window,
            matches: MatchList::new(config.window_size),
            pending: Vec::with_capacity(config.min_match_len),
            min_match_len: config.min_match_len,
            max_match_len: config.max_match_len,
            codec,
        })
    }

    /// Consumes a chunk of input, emitting tokens through the codec as
    /// matches resolve.
    ///
    /// Returns the first error encountered; after an error the compressor
    /// should not be fed further.
    pub fn compress(&mut self, data: &[u8]) -> Result<(), LzssError> {
        for &b in data {
            self.compress_one(b)?;
        }
        Ok(())
    }

    /// Flushes the still-live candidate (as a match or as pending literals)
    /// and closes the codec.
    pub fn end(mut self) -> Result<(), LzssError> {
        if !self.matches.is_empty() {
            // any candidate will do, they share the length
            let best = self.matches.get(0).ok_or(LzssError::Internal)?;
            if best.len >= self.min_match_len {
                self.write_match(best)?;
            } else {
                self.flush_pending(best.len)?;
            }
        }
        if !self.codec.close() {
            return Err(LzssError::Io);
        }
        Ok(())
    }

    /// Runs the per-byte step: advance live candidates, re-seed when none
    /// remain, cap at the maximum length, then append `b` to the window.
    fn compress_one(&mut self, b: u8) -> Result<(), LzssError> {
        if !self.matches.is_empty() {
            // Snapshot before the update so the achieved length survives
            // the list draining.
            let best = self.matches.get(0).ok_or(LzssError::Internal)?;

            let window = &self.window;
            let mut bad_read = false;
            let survivors = self.matches.update(|m| match window.read(m.pos) {
                Some(w) if w == b => {
                    m.len += 1;
                    true
                }
                Some(_) => false,
                None => {
                    // a live candidate always points inside the window
                    bad_read = true;
                    false
                }
            });
            if bad_read {
                return Err(LzssError::Internal);
            }

            if survivors == 0 {
                if best.len >= self.min_match_len {
                    self.write_match(best)?;
                } else {
                    self.flush_pending(best.len)?;
                }
                self.pending.clear();
            } else if best.len < self.min_match_len {
                self.pending.push(b);
            }
        }

        if self.matches.is_empty() {
            // No pending bytes can be left over here: either nothing was
            // buffered, or the drained-candidate path above just flushed.
            if self.seed_candidates(b)? > 0 {
                self.pending.push(b);
            } else if !self.codec.write_literal(b) {
                return Err(LzssError::Io);
            }
        }

        if let Some(m) = self.matches.get(0) {
            if m.len == self.max_match_len {
                self.write_match(m)?;
                self.pending.clear();
                self.matches.reset();
            }
        }

        self.window.append(b);
        Ok(())
    }

    /// Seeds a candidate of length 1 at every window offset holding `b`,
    /// scanning from the newest byte outwards. Returns how many were found.
    fn seed_candidates(&mut self, b: u8) -> Result<usize, LzssError> {
        let mut found = 0;
        for i in 0..self.window.len() {
            match self.window.read(i) {
                Some(w) if w == b => {
                    if !self.matches.append(Match { pos: i, len: 1 }) {
                        return Err(LzssError::Internal);
                    }
                    found += 1;
                }
                Some(_) => {}
                None => return Err(LzssError::Internal),
            }
        }
        Ok(found)
    }

    fn write_match(&mut self, m: Match) -> Result<(), LzssError> {
        if !self.codec.write_match(m) {
            return Err(LzssError::Io);
        }
        Ok(())
    }

    /// Emits the first `n` buffered bytes as literals.
    fn flush_pending(&mut self, n: usize) -> Result<(), LzssError> {
        for i in 0..n {
            if !self.codec.write_literal(self.pending[i]) {
                return Err(LzssError::Io);
            }
        }
        self.pending.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_configs_are_rejected() {
        let bad = [
            CompressorConfig { window_size: 1, min_match_len: 2, max_match_len: 2 },
            CompressorConfig { window_size: 2, min_match_len: 1, max_match_len: 2 },
            CompressorConfig { window_size: 2, min_match_len: 3, max_match_len: 2 },
        ];
        for config in bad {
            assert!(!config.is_valid(), "{config:?}");
            let mut codec = Codec::ascii(|_: &[u8]| true);
            assert_eq!(
                Compressor::new(config, &mut codec).err(),
                Some(LzssError::OutOfMemory),
            );
        }
    }

    #[test]
    fn sink_failure_surfaces_as_io() {
        let mut codec = Codec::ascii(|_: &[u8]| false);
        let config = CompressorConfig { window_size: 8, min_match_len: 2, max_match_len: 16 };
        let mut lz = Compressor::new(config, &mut codec).unwrap();
        assert_eq!(lz.compress(b"x"), Err(LzssError::Io));
    }

    #[test]
    fn sink_failure_at_close_surfaces_as_io() {
        // accept token writes, reject the terminator
        let mut calls = 0;
        let sink = move |_buf: &[u8]| {
            calls += 1;
            calls == 1
        };
        let mut codec = Codec::ascii(sink);
        let config = CompressorConfig { window_size: 8, min_match_len: 2, max_match_len: 16 };
        let mut lz = Compressor::new(config, &mut codec).unwrap();
        lz.compress(b"x").unwrap();
        assert_eq!(lz.end(), Err(LzssError::Io));
    }
}
