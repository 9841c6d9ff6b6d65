use rand::TryRngCore;

use crate::errors::PasswordError;

pub const LETTERS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const NUMBERS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()-_=+[]{}|;:,.<>?/";

/// Builds the candidate alphabet: letters, then numbers, then symbols.
pub fn alphabet(numbers: bool, symbols: bool) -> String {
    let mut chars = String::from(LETTERS);

    if numbers {
        chars.push_str(NUMBERS);
    }

    if symbols {
        chars.push_str(SYMBOLS);
    }

    chars
}

/// Draws an index uniformly from `0..bound`.
///
/// 32-bit draws at or above the largest multiple of `bound` that fits in
/// 2^32 are rejected and redrawn, so every index has exactly the same
/// probability. Errors from the source are returned as-is, never retried.
pub fn uniform_index<R>(rng: &mut R, bound: usize) -> Result<usize, PasswordError>
where
    R: TryRngCore + ?Sized,
{
    debug_assert!(bound > 0 && bound as u64 <= u32::MAX as u64);

    let bound = bound as u64;
    let zone = ((1u64 << 32) / bound) * bound;

    loop {
        let draw = rng
            .try_next_u32()
            .map_err(|e| PasswordError::RandomSource(e.to_string()))? as u64;

        if draw < zone {
            return Ok((draw % bound) as usize);
        }
    }
}
