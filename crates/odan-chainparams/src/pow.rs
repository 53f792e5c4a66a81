use num_bigint::BigUint;
use num_traits::Zero;

use crate::uint256::Uint256;

/// Expands compact `bits` into a 256-bit target. Returns `None` for negative
/// or overflowing encodings, which no valid block may carry.
pub fn compact_to_target(bits: u32) -> Option<BigUint> {
    let size = bits >> 24;
    let mut word = bits & 0x007f_ffff;
    let negative = word != 0 && (bits & 0x0080_0000) != 0;
    let overflow = word != 0
        && (size > 34 || (word > 0xff && size > 33) || (word > 0xffff && size > 32));
    if negative || overflow {
        return None;
    }
    let target = if size <= 3 {
        word >>= 8 * (3 - size);
        BigUint::from(word)
    } else {
        BigUint::from(word) << (8 * (size - 3)) as usize
    };
    Some(target)
}

pub fn hash_meets_target(hash: &Uint256, target: &BigUint) -> bool {
    &hash.to_biguint() <= target
}

/// True when `hash` satisfies `bits` and `bits` is no easier than
/// `pow_limit`.
pub fn check_proof_of_work(hash: &Uint256, bits: u32, pow_limit: &Uint256) -> bool {
    let Some(target) = compact_to_target(bits) else {
        return false;
    };
    if target.is_zero() || target > pow_limit.to_biguint() {
        return false;
    }
    hash_meets_target(hash, &target)
}
