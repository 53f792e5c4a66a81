use sha2::{Digest, Sha256};
use sha3::Keccak256;

pub fn sha256d(b: &[u8]) -> [u8; 32] {
    let first = Sha256::digest(b);
    let second = Sha256::digest(first);
    let mut r = [0u8; 32];
    r.copy_from_slice(&second);
    r
}

/// Ethereum-flavoured Keccak-256 (pre-NIST padding), used for the contract
/// layer's trie roots.
pub fn keccak256(b: &[u8]) -> [u8; 32] {
    let mut h = Keccak256::new();
    h.update(b);
    let out = h.finalize();
    let mut r = [0u8; 32];
    r.copy_from_slice(&out);
    r
}
