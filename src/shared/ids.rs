//! Short URL-safe codes for object ids.
//!
//! An id is written as 4 little-endian bytes, base64url-encoded, with the
//! trailing `=` padding and `A` (zero) digits stripped. `1` becomes `"AQ"`,
//! `0` becomes the empty string.

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;
use thiserror::Error;

/// Max length of a short code: 4 bytes need 6 base64 digits.
const SHORT_ID_LEN: usize = 6;

/// URL-safe alphabet that ignores the unused low bits of the last digit,
/// so `"AAAAAB"` decodes like `"AAAAAA"`.
const ID_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_decode_allow_trailing_bits(true)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ShortIdError {
    #[error("Short id {0:?} is longer than 6 characters")]
    TooLong(String),

    #[error("Short id is not valid base64url: {0}")]
    Base64(#[from] base64::DecodeError),
}

/// Encode an id. Ids are non-negative; the value is reinterpreted as `u32`.
pub fn encode_id_b64(id: i32) -> String {
    let bytes = (id as u32).to_le_bytes();
    ID_ENGINE
        .encode(bytes)
        .trim_end_matches(['=', 'A'])
        .to_string()
}

/// Decode a short code produced by [`encode_id_b64`].
pub fn decode_id_b64(code: &str) -> Result<i32, ShortIdError> {
    if code.len() > SHORT_ID_LEN {
        return Err(ShortIdError::TooLong(code.to_string()));
    }
    let padded = format!("{:A<6}==", code);
    let bytes = ID_ENGINE.decode(padded)?;
    let mut le = [0u8; 4];
    le.copy_from_slice(&bytes[..4]);
    Ok(u32::from_le_bytes(le) as i32)
}
