//! Additive shift transform over the full byte space (0-255)
//!
//! Printable units are shifted by the key modulo 256; everything else passes
//! through unchanged. Decryption is encryption with the negated key.

use crate::error::{CaesarError, Result};

/// Number of distinct byte values the transform wraps around.
pub const BYTE_SPACE: u32 = 256;

/// Largest magnitude accepted for a user-supplied key.
pub const MAX_KEY: i32 = 255;

/// Checks whether a character belongs to the transformable alphabet.
///
/// A unit is printable when its scalar value lies inside the modeled byte
/// space and is not a control character, the no-break space, or the soft
/// hyphen. Characters above U+00FF are outside the byte space and are never
/// transformed.
pub fn is_printable(c: char) -> bool {
    let code = c as u32;
    matches!(code, 0x20..=0x7E | 0xA1..=0xFF) && code != 0xAD
}

/// Validates a user-supplied key and normalizes it into `0..=255`.
///
/// # Arguments
///
/// * `key` - The signed shift value entered by the caller.
///
/// # Returns
///
/// The equivalent non-negative shift offset, or `InvalidKey` if the key
/// lies outside `-255..=255`.
pub fn validate_key(key: i32) -> Result<u8> {
    if !(-MAX_KEY..=MAX_KEY).contains(&key) {
        return Err(CaesarError::InvalidKey(key));
    }
    Ok(key.rem_euclid(BYTE_SPACE as i32) as u8)
}

/// Shifts a single unit by `offset` positions with mod-256 wraparound.
///
/// Non-printable units are returned unchanged.
pub fn shift_char(c: char, offset: u8) -> char {
    if is_printable(c) {
        let shifted: u32 = (c as u32 + offset as u32) % BYTE_SPACE;
        // Values below 0x100 are always valid scalar values.
        char::from_u32(shifted).unwrap_or(c)
    } else {
        c
    }
}

/// Applies the shift to every unit of `text`, left to right.
///
/// This is the raw transform: it performs no key or input validation and
/// accepts empty text. Brute-force scoring and file processing build on it.
pub fn shift_text(text: &str, offset: u8) -> String {
    text.chars().map(|c| shift_char(c, offset)).collect()
}

/// Encrypts `text` with the given shift key.
///
/// # Arguments
///
/// * `text` - The plaintext; must not be empty.
/// * `key` - The shift value in `-255..=255`.
///
/// # Returns
///
/// The ciphertext, or `InvalidInput` / `InvalidKey` on validation failure.
pub fn encrypt(text: &str, key: i32) -> Result<String> {
    let offset: u8 = validate_key(key)?;
    if text.is_empty() {
        return Err(CaesarError::InvalidInput);
    }
    Ok(shift_text(text, offset))
}

/// Decrypts `text` with the given shift key.
///
/// Defined as encryption with the negated key, so the transform is its own
/// inverse under key negation.
pub fn decrypt(text: &str, key: i32) -> Result<String> {
    let offset: u8 = validate_key(key)?;
    if text.is_empty() {
        return Err(CaesarError::InvalidInput);
    }
    Ok(shift_text(text, offset.wrapping_neg()))
}
