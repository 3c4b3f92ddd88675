//! End-to-end compression tests through the public library API, using the
//! ASCII codec so expectations stay readable.
//!
//! Every expected string carries an implicit trailing NUL after the newline;
//! the helper appends it so the literals below stay printable.

use std::cell::RefCell;

use lzss::{Codec, Compressor, CompressorConfig};

/// Compresses `data` with the ASCII codec and returns the captured output.
fn compress_ascii(
    data: &[u8],
    window_size: usize,
    min_match_len: usize,
    max_match_len: usize,
) -> Vec<u8> {
    let out = RefCell::new(Vec::new());
    {
        let sink = |buf: &[u8]| {
            out.borrow_mut().extend_from_slice(buf);
            true
        };
        let mut codec = Codec::ascii(sink);
        let config = CompressorConfig {
            window_size,
            min_match_len,
            max_match_len,
        };
        let mut lz = Compressor::new(config, &mut codec).expect("valid config");
        lz.compress(data).expect("compress");
        lz.end().expect("end");
    }
    out.into_inner()
}

/// Feeds `data` through an ASCII-codec compressor and asserts the output is
/// exactly `expected` plus the terminating NUL.
fn assert_compressed(
    expected: &str,
    data: &str,
    window_size: usize,
    min_match_len: usize,
    max_match_len: usize,
) {
    let obtained = compress_ascii(data.as_bytes(), window_size, min_match_len, max_match_len);
    let mut expected_bytes = expected.as_bytes().to_vec();
    expected_bytes.push(0);
    assert_eq!(
        obtained,
        expected_bytes,
        "\ninput:    {:?}\nexpected: {:?}\nobtained: {:?}",
        data,
        expected,
        String::from_utf8_lossy(&obtained),
    );
}

// ── Basic compression ─────────────────────────────────────────────────────────

#[test]
fn run_collapses_into_one_match() {
    // a literal 'a' followed by a match from pos 0 of len 9
    assert_compressed("0a 1(0,9)\n", "aaaaaaaaaa", 10, 4, 1024);
}

#[test]
fn two_runs_collapse_into_two_matches() {
    // the second match starts over at pos 0 because by then the window
    // front is an 'a'
    assert_compressed("0b 1(0,4) 0a 1(0,9)\n", "bbbbbaaaaaaaaaa", 10, 4, 1024);
}

// ── Minimum match length ──────────────────────────────────────────────────────

#[test]
fn run_below_min_length_stays_literal() {
    assert_compressed(
        "0a 0a 0a 0a 0a 0a 0a 0a 0a 0a\n",
        "aaaaaaaaaa",
        1024,
        10,
        1024,
    );
}

#[test]
fn run_reaching_min_length_exactly_becomes_a_match() {
    // one more 'a' than the case above
    assert_compressed("0a 1(0,10)\n", "aaaaaaaaaaa", 1024, 10, 1024);
}

#[test]
fn match_survives_between_differing_runs() {
    assert_compressed(
        "0a 0a 0a 0a 0a 0a 0a 0a 0b 0b 0b 0b 0b 0b 0b 0b 1(15,8) 0a 0a 0a\n",
        "aaaaaaaabbbbbbbbaaaaaaaaaaa",
        1024,
        8,
        1024,
    );
}

#[test]
fn input_shorter_than_min_match_is_all_literals() {
    assert_compressed("0a 0b 0c\n", "abc", 1024, 8, 1024);
}

// ── Maximum match length ──────────────────────────────────────────────────────

#[test]
fn long_run_is_capped_at_max_length() {
    assert_compressed("0a 1(0,15) 0a 0a\n", "aaaaaaaaaaaaaaaaaa", 256, 8, 15);
}

#[test]
fn periodic_input_splits_at_max_length() {
    assert_compressed(
        "01 02 03 04 05 06 07 08 09 1(8,15) 1(8,3)\n",
        "123456789123456789123456789",
        256,
        3,
        15,
    );
}

// ── Complex strings ───────────────────────────────────────────────────────────

#[test]
fn overlapping_period_extends_past_its_source() {
    assert_compressed("0a 0b 0c 1(2,15)\n", "abcabcabcabcabcabc", 1024, 8, 1024);
}

#[test]
fn repeated_pattern_with_changed_tail() {
    assert_compressed(
        "0a 0b 0b 0b 0b 0c 0a 0b 1(2,12) 0d\n",
        "abbbbcabcabcabcabcabd",
        1024,
        8,
        1024,
    );
}

#[test]
fn spaces_are_ordinary_literals() {
    assert_compressed(
        "0a 0b 0c 0d 0  01 0  02 0  03 0  04 0  05 0  06 0  1(16,4) 0a 0a\n",
        "abcd 1 2 3 4 5 6 abcdaa",
        1024,
        4,
        1024,
    );
}

#[test]
fn tiny_window_tracks_aging_positions() {
    assert_compressed(
        "0A 0B 0C 0D 0A 1(1,4) 0A 0B 1(3,3)\n",
        "ABCDADADAABDAA",
        4,
        2,
        1024,
    );
}

#[test]
fn tiny_window_final_match_shrinks_with_history() {
    assert_compressed(
        "0A 0B 0C 0D 0A 1(1,4) 0A 0B 0C 1(3,2)\n",
        "ABCDADADAABCAA",
        4,
        2,
        1024,
    );
}

// ── Short windows ─────────────────────────────────────────────────────────────

#[test]
fn self_referential_match_outgrows_the_window() {
    // the candidate keeps re-reading the newest byte, so the match length
    // may exceed the window size
    assert_compressed("0a 1(0,19)\n", "aaaaaaaaaaaaaaaaaaaa", 16, 4, 1024);
}

#[test]
fn english_sentence_with_64_byte_window() {
    assert_compressed(
        "0t 0h 0e 0r 0e 0  0a 0r 0e 0  01 00 0  0t 0y 0p 0e 0s 0  0o 0f 0  0p 0e\
         \u{20}0o 0p 0l 0e 0  0i 0n 0  0t 0h 0e 0  0w 0o 0r 0l 0d 0: 0  0t 0h 0o 0s 0e\
         \u{20}0  0w 0h 0o 0  0u 0n 0d 0e 0r 0s 0t 0a 0n 0d 0  0b 0i 0n 0a 0r 0y 0, 0 \
         \u{20}1(11,4) 1(32,10) 0d 0o 0n 0' 0t 0.\n",
        "there are 10 types of people in the world: those who understand binary, \
         and those who don't.",
        64,
        4,
        1024,
    );
}

#[test]
fn tongue_twister_with_32_byte_window() {
    assert_compressed(
        "0s 0i 0x 0  0s 0i 0c 0k 0  0h 0i 0c 0k 0s 0  0n 1(10,4) 1(19,5) 0l \
         1(20,4) 0b 0r 1(21,5) 0w 0i 0t 0h 0  0p 1(10,5) 0a 0n 0d 0  0s 0t \
         1(10,4) 0.\n",
        "six sick hicks nick six slick bricks with picks and sticks.",
        32,
        4,
        1024,
    );
}

// ── Boundaries ────────────────────────────────────────────────────────────────

#[test]
fn empty_input_is_just_the_terminator() {
    assert_compressed("\n", "", 1024, 8, 1024);
}

#[test]
fn chunked_and_oneshot_feeding_agree() {
    let data = b"abcabcabcabcabcabc";
    let oneshot = compress_ascii(data, 1024, 8, 1024);

    let out = RefCell::new(Vec::new());
    {
        let sink = |buf: &[u8]| {
            out.borrow_mut().extend_from_slice(buf);
            true
        };
        let mut codec = Codec::ascii(sink);
        let config = CompressorConfig {
            window_size: 1024,
            min_match_len: 8,
            max_match_len: 1024,
        };
        let mut lz = Compressor::new(config, &mut codec).unwrap();
        for chunk in data.chunks(5) {
            lz.compress(chunk).unwrap();
        }
        lz.end().unwrap();
    }
    assert_eq!(out.into_inner(), oneshot);
}
