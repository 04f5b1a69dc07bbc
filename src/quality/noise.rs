//! Repetitive-noise detection.
//!
//! Flags content such as `aaaaaaaaaa` or `testtesttesttesttest` that pads a
//! section without saying anything.

/// A whole section made of one character repeated at least this many times is noise.
pub const SINGLE_CHAR_REPEAT_MIN: usize = 10;

/// A block of two or more characters occurring this many times back to back is noise.
pub const BLOCK_REPEAT_MIN: usize = 5;

/// Longest block considered by the repeated-block check.
///
/// Bounds the scan at `MAX_BLOCK_LEN` linear passes so long descriptions stay
/// cheap to check.
pub const MAX_BLOCK_LEN: usize = 64;

/// Check whether `text` is repetitive noise.
///
/// Whitespace is ignored entirely and no case folding is applied.
///
/// # Examples
///
/// ```
/// use prgate::quality::noise::is_repetitive_noise;
///
/// assert!(is_repetitive_noise("zzzzzzzzzz"));
/// assert!(is_repetitive_noise("ha ha ha ha ha"));
/// assert!(!is_repetitive_noise("Adds retry support to the uploader"));
/// ```
pub fn is_repetitive_noise(text: &str) -> bool {
    let chars: Vec<char> = text.chars().filter(|c| !c.is_whitespace()).collect();
    is_single_char_run(&chars) || has_repeated_block(&chars)
}

fn is_single_char_run(chars: &[char]) -> bool {
    match chars.first() {
        Some(first) => chars.len() >= SINGLE_CHAR_REPEAT_MIN && chars.iter().all(|c| c == first),
        None => false,
    }
}

/// Look for a block of length `2..=MAX_BLOCK_LEN` repeated `BLOCK_REPEAT_MIN` times.
///
/// A span is `BLOCK_REPEAT_MIN` copies of a block of length `len` exactly
/// when `chars[j] == chars[j + len]` holds for `len * (BLOCK_REPEAT_MIN - 1)`
/// consecutive positions, so each block length needs a single linear scan.
fn has_repeated_block(chars: &[char]) -> bool {
    let max_len = (chars.len() / BLOCK_REPEAT_MIN).min(MAX_BLOCK_LEN);

    (2..=max_len).any(|len| {
        let needed = len * (BLOCK_REPEAT_MIN - 1);
        let mut run = 0;
        for j in 0..chars.len() - len {
            if chars[j] == chars[j + len] {
                run += 1;
                if run >= needed {
                    return true;
                }
            } else {
                run = 0;
            }
        }
        false
    })
}
