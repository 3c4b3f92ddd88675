//! Usage and version output.

use crate::cli::constants::{COMPRESSOR_NAME, VERSION_STRING};

/// Prints the usage summary and option list to stdout.
pub fn print_usage(exe_name: &str) {
    println!("{} compressor", COMPRESSOR_NAME);
    println!();
    println!("Usage: {} [OPTIONS]", exe_name);
    println!();
    println!("Reads a byte stream and writes its LZSS-compressed form.");
    println!();
    println!("Options:");
    println!("  -v, --verbose             Produce verbose output (repeatable)");
    println!("  -q, --quiet               Suppress progress output (repeatable)");
    println!("  -a, --ascii               Output in ASCII format instead of binary");
    println!("  -i, --input FILE          Compress from FILE instead of stdin");
    println!("  -o, --output FILE         Output to FILE instead of standard output");
    println!("  -w, --window-size N       Sliding window size in bytes (default 10M)");
    println!("  -m, --min-match-len N     Minimum back-reference length (default 8)");
    println!("  -M, --max-match-len N     Maximum back-reference length (default 100)");
    println!("  -h, --help                Print this help and exit");
    println!("  -V, --version             Print the version string and exit");
    println!();
    println!("Sizes accept K and M binary suffixes (e.g. -w 64K).");
}

/// Prints the version line to stdout.
pub fn print_version() {
    println!("{} {}", COMPRESSOR_NAME, VERSION_STRING);
}
