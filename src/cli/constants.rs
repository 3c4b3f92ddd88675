//! Identity constants, the global display level, and output macros shared
//! by the CLI modules.

use std::sync::atomic::{AtomicU32, Ordering};

// ── String / identity constants ───────────────────────────────────────────────
pub const COMPRESSOR_NAME: &str = "LZSS";
pub const VERSION_STRING: &str = "1.0.0";

// ── Size multiplier constants ─────────────────────────────────────────────────
pub const KB: usize = 1 << 10;
pub const MB: usize = 1 << 20;

// ── Default compression parameters ────────────────────────────────────────────
/// Default window size: 10 MiB.
pub const DEFAULT_WINDOW_SIZE: usize = 10 * MB;
pub const DEFAULT_MIN_MATCH_LEN: usize = 8;
pub const DEFAULT_MAX_MATCH_LEN: usize = 100;

// ── Display level global ──────────────────────────────────────────────────────
//
// 0 = no output; 1 = errors only; 2 = normal; 3+ = verbose.
// Crate-level atomic so the I/O layer can emit progress without threading a
// verbosity value through every call.
pub static DISPLAY_LEVEL: AtomicU32 = AtomicU32::new(2);

/// Returns the current display level.
#[inline]
pub fn display_level() -> u32 {
    DISPLAY_LEVEL.load(Ordering::Relaxed)
}

/// Sets the display level.
#[inline]
pub fn set_display_level(level: u32) {
    DISPLAY_LEVEL.store(level, Ordering::Relaxed);
}

/// Print to stderr unconditionally.
#[macro_export]
macro_rules! display {
    ($($arg:tt)*) => { eprint!($($arg)*) };
}

/// Conditionally print to stderr at or above `level`.
#[macro_export]
macro_rules! displaylevel {
    ($level:expr, $($arg:tt)*) => {
        if $crate::cli::constants::display_level() >= $level {
            eprint!($($arg)*);
        }
    };
}

/// Print a bold-red `[ABORTED]` line with the failing source location and
/// exit with status 1.
///
/// Usage: `abort!("message {}", arg)`
#[macro_export]
macro_rules! abort {
    ($($arg:tt)*) => {{
        eprint!("\x1b[1;31m[ABORTED]\x1b[0m ");
        eprint!($($arg)*);
        eprintln!(" ({}:{})", file!(), line!());
        std::process::exit(1);
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_constants() {
        assert_eq!(COMPRESSOR_NAME, "LZSS");
        assert_eq!(VERSION_STRING, "1.0.0");
    }

    #[test]
    fn default_parameters() {
        assert_eq!(DEFAULT_WINDOW_SIZE, 10 * 1024 * 1024);
        assert_eq!(DEFAULT_MIN_MATCH_LEN, 8);
        assert_eq!(DEFAULT_MAX_MATCH_LEN, 100);
    }

    #[test]
    fn display_level_round_trips() {
        let prev = display_level();
        set_display_level(3);
        assert_eq!(display_level(), 3);
        set_display_level(prev);
    }
}
