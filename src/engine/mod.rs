//! LZSS compression core: sliding window, candidate tracking, and the
//! byte-at-a-time engine that drives them.

pub mod compress;
pub mod match_list;
pub mod ring_buffer;
pub mod window;

// Re-export the most important public API items at the module level.
pub use compress::{Compressor, CompressorConfig, LzssError};
pub use match_list::{Match, MatchList};
pub use ring_buffer::RingBuffer;
pub use window::Window;
