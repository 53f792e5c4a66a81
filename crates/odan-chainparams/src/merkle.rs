use crate::error::{ErrorCode, ParamsError};
use crate::hash::sha256d;
use crate::tx::Transaction;
use crate::uint256::Uint256;

/// Bitcoin merkle root: leaves are txids, an odd node is paired with itself.
/// The flag reports a duplicated adjacent pair (CVE-2012-2459 mutation).
pub fn merkle_root(txids: &[Uint256]) -> Result<(Uint256, bool), ParamsError> {
    if txids.is_empty() {
        return Err(ParamsError::new(
            ErrorCode::ParamsErrMerkleEmpty,
            "merkle: empty txid list",
        ));
    }

    let mut level: Vec<[u8; 32]> = txids.iter().map(|id| *id.as_bytes()).collect();
    let mut mutated = false;

    let mut node_preimage = [0u8; 64];
    while level.len() > 1 {
        let mut next: Vec<[u8; 32]> = Vec::with_capacity((level.len() + 1) / 2);
        let mut i = 0usize;
        while i < level.len() {
            let left = level[i];
            let right = if i + 1 < level.len() {
                if level[i + 1] == left {
                    mutated = true;
                }
                level[i + 1]
            } else {
                // Odd count: duplicate the last node.
                left
            };
            node_preimage[..32].copy_from_slice(&left);
            node_preimage[32..].copy_from_slice(&right);
            next.push(sha256d(&node_preimage));
            i += 2;
        }
        level = next;
    }

    Ok((Uint256::from_bytes(level[0]), mutated))
}

pub fn block_merkle_root(txs: &[Transaction]) -> Result<Uint256, ParamsError> {
    let txids: Vec<Uint256> = txs.iter().map(Transaction::txid).collect();
    let (root, _) = merkle_root(&txids)?;
    Ok(root)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(b: u8) -> Uint256 {
        Uint256::from_bytes([b; 32])
    }

    #[test]
    fn single_leaf_is_root() {
        let (root, mutated) = merkle_root(&[id(7)]).unwrap();
        assert_eq!(root, id(7));
        assert!(!mutated);
    }

    #[test]
    fn odd_leaf_is_duplicated() {
        let (three, _) = merkle_root(&[id(1), id(2), id(3)]).unwrap();
        let (four, mutated) = merkle_root(&[id(1), id(2), id(3), id(3)]).unwrap();
        assert_eq!(three, four);
        assert!(mutated);
    }

    #[test]
    fn pair_hash_is_sha256d_of_concat() {
        let (root, _) = merkle_root(&[id(1), id(2)]).unwrap();
        let mut pre = [0u8; 64];
        pre[..32].copy_from_slice(&[1u8; 32]);
        pre[32..].copy_from_slice(&[2u8; 32]);
        assert_eq!(root, Uint256::from_bytes(sha256d(&pre)));
    }

    #[test]
    fn empty_list_rejected() {
        let err = merkle_root(&[]).unwrap_err();
        assert_eq!(err.code, ErrorCode::ParamsErrMerkleEmpty);
    }
}
