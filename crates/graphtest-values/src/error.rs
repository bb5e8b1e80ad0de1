use thiserror::Error;

/// Errors raised while building typed operands from text or raw bytes
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// Input was not valid hexadecimal
    #[error("Invalid hex string: {0}")]
    InvalidHex(String),

    /// Input decoded to the wrong number of bytes
    #[error("Invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// Input was not a decimal integer
    #[error("Invalid big integer: {0}")]
    InvalidBigInt(String),
}

pub type ValueResult<T> = Result<T, ValueError>;

fn strip_hex_prefix(input: &str) -> &str {
    input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .unwrap_or(input)
}

/// Decodes a hex string with an optional `0x` prefix.
///
/// An odd number of digits is an error.
pub(crate) fn decode_hex(input: &str) -> ValueResult<Vec<u8>> {
    hex::decode(strip_hex_prefix(input)).map_err(|_| ValueError::InvalidHex(input.to_string()))
}

/// Like [`decode_hex`], but an odd number of digits is padded on the left,
/// as the runtime does for byte strings.
pub(crate) fn decode_hex_padded(input: &str) -> ValueResult<Vec<u8>> {
    let digits = strip_hex_prefix(input);
    if digits.len() % 2 == 1 {
        return decode_hex(&format!("0{}", digits)).map_err(|_| ValueError::InvalidHex(input.to_string()));
    }
    decode_hex(digits).map_err(|_| ValueError::InvalidHex(input.to_string()))
}
