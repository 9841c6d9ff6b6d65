use crate::errors::PasswordError;
use crate::generators::{alphabet, uniform_index};

use rand::TryRngCore;
use rand::rngs::OsRng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordRequest {
    pub length: i64,
    pub numbers: bool,
    pub specials: bool,
}

impl PasswordRequest {
    pub fn new(length: i64, numbers: bool, specials: bool) -> Self {
        Self {
            length,
            numbers,
            specials,
        }
    }
}

/// Generates a password from the operating system's secure random source.
///
/// Letters are always included; `include_numbers` and `include_symbols`
/// extend the alphabet. A zero length yields an empty string and a negative
/// one is rejected with [`PasswordError::InvalidLength`]. A length that
/// cannot be allocated is rejected with [`PasswordError::TooLong`].
pub fn generate(
    length: i64,
    include_numbers: bool,
    include_symbols: bool,
) -> Result<String, PasswordError> {
    let request = PasswordRequest::new(length, include_numbers, include_symbols);
    generate_with(&mut OsRng, &request)
}

/// Same as [`generate`] but drawing from the given source.
pub fn generate_with<R>(rng: &mut R, request: &PasswordRequest) -> Result<String, PasswordError>
where
    R: TryRngCore + ?Sized,
{
    let length =
        usize::try_from(request.length).map_err(|_| PasswordError::InvalidLength(request.length))?;

    let chars: Vec<char> = alphabet(request.numbers, request.specials).chars().collect();

    let mut password = String::new();
    password
        .try_reserve(length)
        .map_err(|_| PasswordError::TooLong(request.length))?;

    for _ in 0..length {
        let index = uniform_index(rng, chars.len())?;
        password.push(chars[index]);
    }

    tracing::debug!(
        length,
        alphabet_size = chars.len(),
        "generated password"
    );

    Ok(password)
}
