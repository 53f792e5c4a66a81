use core::fmt;
use core::str::FromStr;

use num_bigint::BigUint;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ErrorCode, ParamsError};

const fn hex_val(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        b'A'..=b'F' => c - b'A' + 10,
        _ => panic!("invalid hex digit"),
    }
}

/// Decodes 64 hex digits into 32 bytes in the order written. Intended for
/// `const` items, where a malformed literal fails the build.
pub const fn hex32(s: &str) -> [u8; 32] {
    let b = s.as_bytes();
    if b.len() != 64 {
        panic!("hex32: expected 64 hex digits");
    }
    let mut out = [0u8; 32];
    let mut i = 0;
    while i < 32 {
        out[i] = (hex_val(b[2 * i]) << 4) | hex_val(b[2 * i + 1]);
        i += 1;
    }
    out
}

/// 256-bit hash or number stored in serialization (little-endian) order.
/// Hex rendering is byte-reversed, matching how block explorers and the
/// reference node print hashes.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Uint256([u8; 32]);

impl Uint256 {
    pub const ZERO: Uint256 = Uint256([0u8; 32]);

    pub const fn from_bytes(b: [u8; 32]) -> Self {
        Self(b)
    }

    /// `const` counterpart of [`Uint256::from_hex`] for literals.
    pub const fn from_display_hex(s: &str) -> Self {
        let raw = hex32(s);
        let mut out = [0u8; 32];
        let mut i = 0;
        while i < 32 {
            out[i] = raw[31 - i];
            i += 1;
        }
        Self(out)
    }

    pub fn from_hex(s: &str) -> Result<Self, ParamsError> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        let b = hex::decode(s)
            .map_err(|e| ParamsError::new(ErrorCode::ParamsErrHex, format!("uint256 {s:?}: {e}")))?;
        if b.len() != 32 {
            return Err(ParamsError::new(
                ErrorCode::ParamsErrHex,
                format!("uint256 must be 32 bytes, got {}", b.len()),
            ));
        }
        let mut out = [0u8; 32];
        for (i, v) in b.iter().rev().enumerate() {
            out[i] = *v;
        }
        Ok(Self(out))
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|v| *v == 0)
    }

    pub fn to_hex(&self) -> String {
        let mut rev = self.0;
        rev.reverse();
        hex::encode(rev)
    }

    pub fn to_biguint(&self) -> BigUint {
        BigUint::from_bytes_le(&self.0)
    }
}

impl fmt::Display for Uint256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Uint256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Uint256({})", self.to_hex())
    }
}

impl FromStr for Uint256 {
    type Err = ParamsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for Uint256 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Uint256 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Uint256::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_byte_reversed() {
        let h = Uint256::from_display_hex(
            "00001c36f9d373fc33a72dd97d641efcc98ea8fa554986287a0e1bcbbd5d5ff6",
        );
        assert_eq!(h.as_bytes()[31], 0x00);
        assert_eq!(h.as_bytes()[0], 0xf6);
        assert_eq!(
            h.to_string(),
            "00001c36f9d373fc33a72dd97d641efcc98ea8fa554986287a0e1bcbbd5d5ff6"
        );
    }

    #[test]
    fn runtime_and_const_parsing_agree() {
        let s = "53a03015f0999d21d730c4427339904a299d0c1cc880a122a1abfa3f49a05e6e";
        assert_eq!(Uint256::from_hex(s).unwrap(), Uint256::from_display_hex(s));
        assert_eq!(
            Uint256::from_hex(&format!("0x{s}")).unwrap(),
            Uint256::from_display_hex(s)
        );
    }

    #[test]
    fn from_hex_rejects_bad_input() {
        let err = Uint256::from_hex("zz").unwrap_err();
        assert_eq!(err.code, ErrorCode::ParamsErrHex);
        let err = Uint256::from_hex("00ff").unwrap_err();
        assert!(err.msg.contains("32 bytes"));
    }
}
