//! Arbitrary-precision signed integers.
//!
//! A [`BigInt`] is kept as little-endian two's-complement bytes, the same
//! layout the subgraph runtime hands to the host. The byte vector is always
//! minimal (no redundant sign-extension bytes), which makes derived equality
//! numeric equality.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// A signed integer of unbounded width
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct BigInt(Vec<u8>);

impl BigInt {
    pub fn zero() -> Self {
        Self(vec![0])
    }

    pub fn from_i32(value: i32) -> Self {
        Self::from_i128(value as i128)
    }

    pub fn from_i64(value: i64) -> Self {
        Self::from_i128(value as i128)
    }

    pub fn from_u64(value: u64) -> Self {
        Self::from_i128(value as i128)
    }

    pub fn from_i128(value: i128) -> Self {
        Self::from_signed_bytes_le(&value.to_le_bytes())
    }

    /// Interprets `bytes` as little-endian two's complement.
    pub fn from_signed_bytes_le(bytes: &[u8]) -> Self {
        Self(normalize(bytes.to_vec()))
    }

    /// Interprets `bytes` as a little-endian unsigned magnitude.
    pub fn from_unsigned_bytes_le(bytes: &[u8]) -> Self {
        let mut raw = bytes.to_vec();
        raw.push(0);
        Self(normalize(raw))
    }

    pub fn to_signed_bytes_le(&self) -> &[u8] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0]
    }

    pub fn is_negative(&self) -> bool {
        self.0.last().map_or(false, |top| top & 0x80 != 0)
    }

    /// Returns `None` when the value does not fit.
    pub fn to_i128(&self) -> Option<i128> {
        if self.0.len() > 16 {
            return None;
        }
        let fill = if self.is_negative() { 0xff } else { 0x00 };
        let mut raw = [fill; 16];
        raw[..self.0.len()].copy_from_slice(&self.0);
        Some(i128::from_le_bytes(raw))
    }

    pub fn to_i64(&self) -> Option<i64> {
        self.to_i128().and_then(|v| i64::try_from(v).ok())
    }

    pub fn to_i32(&self) -> Option<i32> {
        self.to_i128().and_then(|v| i32::try_from(v).ok())
    }

    /// Unsigned little-endian magnitude of the value.
    fn magnitude(&self) -> Vec<u8> {
        let mut raw = self.0.clone();
        if self.is_negative() {
            negate(&mut raw);
        }
        raw
    }

    fn from_magnitude(mut magnitude: Vec<u8>, negative: bool) -> Self {
        magnitude.push(0);
        if negative {
            negate(&mut magnitude);
        }
        Self(normalize(magnitude))
    }
}

impl Default for BigInt {
    fn default() -> Self {
        Self::zero()
    }
}

/// Drops sign-extension bytes that do not change the value.
fn normalize(mut bytes: Vec<u8>) -> Vec<u8> {
    if bytes.is_empty() {
        return vec![0];
    }
    while bytes.len() > 1 {
        let top = bytes[bytes.len() - 1];
        let next_sign = bytes[bytes.len() - 2] & 0x80;
        let redundant = (top == 0x00 && next_sign == 0) || (top == 0xff && next_sign != 0);
        if !redundant {
            break;
        }
        bytes.pop();
    }
    bytes
}

/// Two's-complement negation in place, within the current width.
fn negate(bytes: &mut [u8]) {
    let mut carry = true;
    for byte in bytes.iter_mut() {
        let (sum, overflow) = (!*byte).overflowing_add(carry as u8);
        *byte = sum;
        carry = overflow;
    }
}

/// `magnitude = magnitude * mul + add`
fn mul_add_small(magnitude: &mut Vec<u8>, mul: u8, add: u8) {
    let mut carry = add as u16;
    for byte in magnitude.iter_mut() {
        let product = (*byte as u16) * (mul as u16) + carry;
        *byte = (product & 0xff) as u8;
        carry = product >> 8;
    }
    if carry > 0 {
        magnitude.push(carry as u8);
    }
}

/// `magnitude /= div`, returning the remainder.
fn div_rem_small(magnitude: &mut [u8], div: u8) -> u8 {
    let mut rem = 0u16;
    for byte in magnitude.iter_mut().rev() {
        let acc = (rem << 8) | (*byte as u16);
        *byte = (acc / div as u16) as u8;
        rem = acc % div as u16;
    }
    rem as u8
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(small) = self.to_i128() {
            return write!(f, "{}", small);
        }

        let mut magnitude = self.magnitude();
        let mut digits = Vec::new();
        while magnitude.iter().any(|b| *b != 0) {
            digits.push(b'0' + div_rem_small(&mut magnitude, 10));
        }
        if self.is_negative() {
            f.write_str("-")?;
        }
        digits.reverse();
        // Digits are ASCII by construction.
        f.write_str(std::str::from_utf8(&digits).map_err(|_| fmt::Error)?)
    }
}

impl FromStr for BigInt {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (negative, digits) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValueError::InvalidBigInt(s.to_string()));
        }

        let mut magnitude = vec![0u8];
        for digit in digits.bytes() {
            mul_add_small(&mut magnitude, 10, digit - b'0');
        }
        Ok(Self::from_magnitude(magnitude, negative))
    }
}

impl From<i32> for BigInt {
    fn from(value: i32) -> Self {
        Self::from_i32(value)
    }
}

impl From<i64> for BigInt {
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

impl From<u64> for BigInt {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl From<i128> for BigInt {
    fn from(value: i128) -> Self {
        Self::from_i128(value)
    }
}

impl From<BigInt> for String {
    fn from(value: BigInt) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for BigInt {
    type Error = ValueError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
