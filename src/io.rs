//! Stream plumbing for the `lzss` CLI.
//!
//! Resolves input/output path strings (with the `"stdin"`/`"stdout"`
//! sentinels) to boxed reader/writer trait objects and drives a full
//! compression end to end: open, build the codec and compressor, pump the
//! input through in fixed-size chunks, report totals.

use std::cell::Cell;
use std::fs::File;
use std::io::{self, BufReader, Read, Write};

use anyhow::{anyhow, Context};

use crate::codec::Codec;
use crate::displaylevel;
use crate::engine::{Compressor, CompressorConfig};

// ── Special I/O sentinels ─────────────────────────────────────────────────────

/// Sentinel: read from standard input.
pub const STDIN_MARK: &str = "stdin";

/// Sentinel: write to standard output.
pub const STDOUT_MARK: &str = "stdout";

/// Input is consumed in chunks of this size.
const CHUNK_SIZE: usize = 64 * 1024;

// ── Path resolution ───────────────────────────────────────────────────────────

/// Resolves `path` to a reader, honoring the [`STDIN_MARK`] sentinel.
pub fn open_src_file(path: &str) -> anyhow::Result<Box<dyn Read>> {
    if path == STDIN_MARK {
        return Ok(Box::new(io::stdin()));
    }
    let file = File::open(path).with_context(|| format!("cannot open input file: {path}"))?;
    Ok(Box::new(file))
}

/// Resolves `path` to a writer, honoring the [`STDOUT_MARK`] sentinel.
pub fn open_dst_file(path: &str) -> anyhow::Result<Box<dyn Write>> {
    if path == STDOUT_MARK {
        return Ok(Box::new(io::stdout()));
    }
    let file = File::create(path).with_context(|| format!("cannot open output file: {path}"))?;
    Ok(Box::new(file))
}

// ── End-to-end compression ────────────────────────────────────────────────────

/// Byte totals of one finished compression.
#[derive(Debug, Clone, Copy)]
pub struct CompressStats {
    pub bytes_read: u64,
    pub bytes_written: u64,
}

impl CompressStats {
    /// Output size as a percentage of the input size (100.0 for empty input).
    pub fn ratio(&self) -> f64 {
        if self.bytes_read == 0 {
            return 100.0;
        }
        self.bytes_written as f64 / self.bytes_read as f64 * 100.0
    }
}

/// Compresses `input` into `output` with the given parameters and format.
///
/// At display level >= 2 a summary line with the achieved ratio is printed
/// to stderr on success.
pub fn compress_filename(
    input: &str,
    output: &str,
    config: CompressorConfig,
    ascii: bool,
) -> anyhow::Result<CompressStats> {
    let mut reader = BufReader::new(open_src_file(input)?);
    let mut writer = open_dst_file(output)?;

    let written = Cell::new(0u64);
    let mut bytes_read = 0u64;
    {
        let sink = |buf: &[u8]| match writer.write_all(buf) {
            Ok(()) => {
                written.set(written.get() + buf.len() as u64);
                true
            }
            Err(e) => {
                displaylevel!(1, "{}: write error: {}\n", output, e);
                false
            }
        };

        let mut codec = if ascii {
            Codec::ascii(sink)
        } else {
            Codec::binary(
                sink,
                config.min_match_len,
                config.max_match_len,
                config.window_size,
            )
            .ok_or_else(|| anyhow!("invalid binary codec parameters"))?
        };

        let mut lz = Compressor::new(config, &mut codec)
            .map_err(|e| anyhow!("cannot initialize the compressor: {e}"))?;

        let mut chunk = vec![0u8; CHUNK_SIZE];
        loop {
            let n = reader
                .read(&mut chunk)
                .with_context(|| format!("cannot read input file: {input}"))?;
            if n == 0 {
                break;
            }
            bytes_read += n as u64;
            lz.compress(&chunk[..n])
                .map_err(|e| anyhow!("compression failed: {e}"))?;
        }
        lz.end().map_err(|e| anyhow!("compression failed: {e}"))?;
    }
    writer
        .flush()
        .with_context(|| format!("cannot flush output file: {output}"))?;

    let stats = CompressStats {
        bytes_read,
        bytes_written: written.get(),
    };
    displaylevel!(
        2,
        "Compressed {} bytes into {} bytes ==> {:.2}%\n",
        stats.bytes_read,
        stats.bytes_written,
        stats.ratio()
    );
    Ok(stats)
}
