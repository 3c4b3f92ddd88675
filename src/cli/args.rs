//! Command-line argument parsing for the `lzss` binary.
//!
//! The entry points are [`parse_args`] (reads `std::env::args()`) and
//! [`parse_args_from`] (takes an explicit slice, suitable for unit-testing).
//! Both return a [`ParsedArgs`] value capturing every option discovered
//! during the parse.
//!
//! Short flags may be aggregated (e.g. `-va`); short options taking a value
//! accept it either attached (`-ifile`) or as the next argument. Long
//! options use `--option=VALUE` or `--option VALUE`. Size-valued options
//! accept `K`/`M` binary-multiplier suffixes.
//!
//! Bad or unrecognised options return an `Err` with a human-readable
//! message that begins with `"bad usage: "`.

use anyhow::anyhow;

use crate::cli::constants::{
    display_level, set_display_level, DEFAULT_MAX_MATCH_LEN, DEFAULT_MIN_MATCH_LEN,
    DEFAULT_WINDOW_SIZE, KB, MB,
};
use crate::cli::help::{print_usage, print_version};
use crate::engine::CompressorConfig;
use crate::io::{STDIN_MARK, STDOUT_MARK};

// ── Public output type ────────────────────────────────────────────────────────

/// Complete set of options produced by the argument parsing loop.
#[derive(Debug)]
pub struct ParsedArgs {
    /// Emit the human-readable format instead of the bit-packed one.
    pub ascii: bool,
    /// Input path; `"stdin"` reads standard input.
    pub input_filename: String,
    /// Output path; `"stdout"` writes standard output.
    pub output_filename: String,
    /// Engine parameters assembled from `-w`/`-m`/`-M`.
    pub config: CompressorConfig,
    /// When `true`, a `--version`/`--help` flag was processed; the caller
    /// should exit 0 without compressing anything.
    pub exit_early: bool,
    /// Program name (argv[0]), used by help output.
    pub exe_name: String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Parse `std::env::args()` (skipping argv[0]).
pub fn parse_args() -> anyhow::Result<ParsedArgs> {
    let exe_name = std::env::args().next().unwrap_or_else(|| "lzss".to_owned());
    let argv: Vec<String> = std::env::args().skip(1).collect();
    parse_args_from(&exe_name, &argv)
}

/// Parse an explicit argument list.
///
/// `exe_name` is argv[0] (used for help text), `argv` is argv[1..]. This
/// variant is callable from tests without touching `std::env`.
pub fn parse_args_from(exe_name: &str, argv: &[String]) -> anyhow::Result<ParsedArgs> {
    let mut args = ParsedArgs {
        ascii: false,
        input_filename: STDIN_MARK.to_owned(),
        output_filename: STDOUT_MARK.to_owned(),
        config: CompressorConfig {
            window_size: DEFAULT_WINDOW_SIZE,
            min_match_len: DEFAULT_MIN_MATCH_LEN,
            max_match_len: DEFAULT_MAX_MATCH_LEN,
        },
        exit_early: false,
        exe_name: exe_name.to_owned(),
    };

    let mut iter = argv.iter();
    while let Some(argument) = iter.next() {
        if let Some(long) = argument.strip_prefix("--") {
            // --option or --option=VALUE; a detached value comes from the
            // next argument.
            let (name, mut attached) = match long.split_once('=') {
                Some((n, v)) => (n, Some(v.to_owned())),
                None => (long, None),
            };
            let mut value = |opt: &str| -> anyhow::Result<String> {
                attached
                    .take()
                    .or_else(|| iter.next().cloned())
                    .ok_or_else(|| anyhow!("bad usage: --{} requires an argument", opt))
            };
            match name {
                "verbose" => set_display_level(display_level() + 1),
                "quiet" => set_display_level(display_level().saturating_sub(1)),
                "ascii" => args.ascii = true,
                "input" => args.input_filename = value("input")?,
                "output" => args.output_filename = value("output")?,
                "window-size" => args.config.window_size = read_size(&value("window-size")?)?,
                "min-match-len" => args.config.min_match_len = read_size(&value("min-match-len")?)?,
                "max-match-len" => args.config.max_match_len = read_size(&value("max-match-len")?)?,
                "help" => {
                    print_usage(exe_name);
                    args.exit_early = true;
                    return Ok(args);
                }
                "version" => {
                    print_version();
                    args.exit_early = true;
                    return Ok(args);
                }
                _ => return Err(anyhow!("bad usage: unknown option: {}", argument)),
            }
            if attached.is_some() {
                return Err(anyhow!("bad usage: --{} takes no argument", name));
            }
            continue;
        }

        if let Some(flags) = argument.strip_prefix('-') {
            if flags.is_empty() {
                return Err(anyhow!("bad usage: unexpected argument: {}", argument));
            }
            let mut chars = flags.char_indices();
            while let Some((idx, flag)) = chars.next() {
                // options taking a value consume the rest of the token, or
                // the next argument when the token ends here
                let mut value = |opt: char| -> anyhow::Result<String> {
                    let rest = &flags[idx + flag.len_utf8()..];
                    if !rest.is_empty() {
                        return Ok(rest.to_owned());
                    }
                    iter.next()
                        .cloned()
                        .ok_or_else(|| anyhow!("bad usage: -{} requires an argument", opt))
                };
                match flag {
                    'v' => set_display_level(display_level() + 1),
                    'q' => set_display_level(display_level().saturating_sub(1)),
                    'a' => args.ascii = true,
                    'i' => {
                        args.input_filename = value('i')?;
                        break;
                    }
                    'o' => {
                        args.output_filename = value('o')?;
                        break;
                    }
                    'w' => {
                        args.config.window_size = read_size(&value('w')?)?;
                        break;
                    }
                    'm' => {
                        args.config.min_match_len = read_size(&value('m')?)?;
                        break;
                    }
                    'M' => {
                        args.config.max_match_len = read_size(&value('M')?)?;
                        break;
                    }
                    'h' => {
                        print_usage(exe_name);
                        args.exit_early = true;
                        return Ok(args);
                    }
                    'V' => {
                        print_version();
                        args.exit_early = true;
                        return Ok(args);
                    }
                    _ => return Err(anyhow!("bad usage: unknown option: -{}", flag)),
                }
            }
            continue;
        }

        // the compressor reads a single stream; no positional arguments
        return Err(anyhow!("bad usage: unexpected argument: {}", argument));
    }

    validate_config(&args.config)?;
    Ok(args)
}

/// Rejects parameter combinations the engine would refuse, with a usable
/// message instead of the engine's opaque init failure.
fn validate_config(config: &CompressorConfig) -> anyhow::Result<()> {
    if config.window_size < 2 {
        return Err(anyhow!("bad usage: --window-size must be at least 2"));
    }
    if config.min_match_len < 2 {
        return Err(anyhow!("bad usage: --min-match-len must be at least 2"));
    }
    if config.max_match_len < config.min_match_len {
        return Err(anyhow!(
            "bad usage: --max-match-len must be >= --min-match-len"
        ));
    }
    Ok(())
}

/// Parses a decimal size with an optional `K`/`M` binary-multiplier suffix.
fn read_size(s: &str) -> anyhow::Result<usize> {
    let (digits, multiplier) = match s.as_bytes().last() {
        Some(b'K') => (&s[..s.len() - 1], KB),
        Some(b'M') => (&s[..s.len() - 1], MB),
        _ => (s, 1),
    };
    let n: usize = digits
        .parse()
        .map_err(|_| anyhow!("bad usage: expected a numeric value, got: {}", s))?;
    n.checked_mul(multiplier)
        .ok_or_else(|| anyhow!("bad usage: value out of range: {}", s))
}
