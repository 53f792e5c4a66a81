use serde::Serialize;

use crate::compactsize::encode_var_bytes;
use crate::error::{ErrorCode, ParamsError};
use crate::hash::sha256d;
use crate::script::Script;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Base58Prefixes {
    pub pubkey_address: u8,
    pub script_address: u8,
    pub secret_key: u8,
    pub ext_public_key: [u8; 4],
    pub ext_secret_key: [u8; 4],
}

/// Production prefixes: addresses start with `D` (key) and `A` (script).
pub const MAIN_BASE58_PREFIXES: Base58Prefixes = Base58Prefixes {
    pubkey_address: 30,
    script_address: 23,
    secret_key: 53,
    ext_public_key: [0x04, 0x88, 0xb2, 0x1e],
    ext_secret_key: [0x04, 0x88, 0xad, 0xe4],
};

/// Shared by every test network: `o` / `d` addresses.
pub const TEST_BASE58_PREFIXES: Base58Prefixes = Base58Prefixes {
    pubkey_address: 115,
    script_address: 90,
    secret_key: 112,
    ext_public_key: [0x04, 0x35, 0x87, 0xcf],
    ext_secret_key: [0x04, 0x35, 0x83, 0x94],
};

/// Byte-level constants that tell networks apart on the wire and in
/// addresses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChainIdentity {
    #[serde(serialize_with = "serialize_magic")]
    pub message_start: [u8; 4],
    pub default_port: u16,
    pub base58_prefixes: Base58Prefixes,
    pub bech32_hrp: String,
}

fn serialize_magic<S: serde::Serializer>(m: &[u8; 4], s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&hex::encode(m))
}

/// Signet magic: the first four bytes of sha256d over the length-prefixed
/// challenge, so distinct challenges never share a wire prefix.
pub fn signet_message_start(challenge: &[u8]) -> [u8; 4] {
    let mut preimage = Vec::with_capacity(challenge.len() + 9);
    encode_var_bytes(challenge, &mut preimage);
    let h = sha256d(&preimage);
    [h[0], h[1], h[2], h[3]]
}

/// A signet challenge must be a non-empty script whose pushes are all
/// complete.
pub fn check_signet_challenge(challenge: &[u8]) -> Result<(), ParamsError> {
    if challenge.is_empty() {
        return Err(ParamsError::new(
            ErrorCode::ParamsErrSignetChallenge,
            "signet challenge is empty",
        ));
    }
    Script::from_bytes(challenge.to_vec())
        .instructions()
        .map_err(|e| {
            ParamsError::new(
                ErrorCode::ParamsErrSignetChallenge,
                format!("signet challenge is not a valid script: {}", e.msg),
            )
        })?;
    Ok(())
}

pub fn parse_signet_challenge(hex_str: &str) -> Result<Vec<u8>, ParamsError> {
    let bytes = hex::decode(hex_str.trim()).map_err(|e| {
        ParamsError::new(
            ErrorCode::ParamsErrSignetChallenge,
            format!("signet challenge is not hex: {e}"),
        )
    })?;
    check_signet_challenge(&bytes)?;
    Ok(bytes)
}
