// LZSS 1.0.0: streaming sliding-window compressor

pub mod cli;
pub mod codec;
pub mod engine;
pub mod io;

// ─────────────────────────────────────────────────────────────────────────────
// Top-level convenience re-exports for the most common API entry points.
// ─────────────────────────────────────────────────────────────────────────────

/// Streaming compression engine. Feed it with `compress`, finish with `end`.
pub use engine::Compressor;
/// Engine parameters: window size and match-length bounds.
pub use engine::CompressorConfig;
/// Error type for engine operations.
pub use engine::LzssError;
/// A back-reference token: window offset plus matched length.
pub use engine::Match;

/// Output strategy selected at creation time (ASCII or binary).
pub use codec::Codec;
/// Destination for encoded byte spans.
pub use codec::Sink;

// ─────────────────────────────────────────────────────────────────────────────
// Version API
// ─────────────────────────────────────────────────────────────────────────────

pub const LZSS_VERSION_MAJOR: i32 = 1;
pub const LZSS_VERSION_MINOR: i32 = 0;
pub const LZSS_VERSION_RELEASE: i32 = 0;
pub const LZSS_VERSION_NUMBER: i32 =
    LZSS_VERSION_MAJOR * 100 * 100 + LZSS_VERSION_MINOR * 100 + LZSS_VERSION_RELEASE;

/// Returns the library version number (e.g. 10000 for v1.0.0).
pub fn version_number() -> i32 {
    LZSS_VERSION_NUMBER
}

/// Returns the library version string (e.g. `"1.0.0"`).
pub fn version_string() -> &'static str {
    cli::constants::VERSION_STRING
}
