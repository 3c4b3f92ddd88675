//! Binary entry point for the `lzss` command-line tool.
//!
//! Control flow: parse the arguments, honor help/version early exits, then
//! run the single-stream compression and map failures to a red `[ABORTED]`
//! line with exit code 1.

use lzss::cli::constants::{COMPRESSOR_NAME, VERSION_STRING};
use lzss::cli::parse_args;
use lzss::io::compress_filename;
use lzss::{abort, displaylevel};

fn main() {
    let args = match parse_args() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("lzss: {}", e);
            std::process::exit(1);
        }
    };

    // Help / version flags were already printed during the parse.
    if args.exit_early {
        std::process::exit(0);
    }

    displaylevel!(3, "*** {} v{} ***\n", COMPRESSOR_NAME, VERSION_STRING);
    displaylevel!(
        3,
        "input: {}, output: {}, format: {}, window: {}, match: {}..{}\n",
        args.input_filename,
        args.output_filename,
        if args.ascii { "ascii" } else { "binary" },
        args.config.window_size,
        args.config.min_match_len,
        args.config.max_match_len
    );

    if let Err(e) = compress_filename(
        &args.input_filename,
        &args.output_filename,
        args.config,
        args.ascii,
    ) {
        abort!("{}", e);
    }
}
