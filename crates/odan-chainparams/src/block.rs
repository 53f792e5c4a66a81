use crate::compactsize::encode_var_bytes;
use crate::hash::sha256d;
use crate::tx::{OutPoint, Transaction};
use crate::uint256::Uint256;

/// Header of a block on the smart-contract chain: the Bitcoin fields plus
/// the contract state root, the account (UTXO) index root, the stake
/// outpoint and the block signature of proof-of-stake blocks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockHeader {
    pub version: i32,
    pub prev_block_hash: Uint256,
    pub merkle_root: Uint256,
    pub time: u32,
    pub bits: u32,
    pub nonce: u32,
    pub state_root: Uint256,
    pub utxo_root: Uint256,
    pub prevout_stake: OutPoint,
    pub block_sig: Vec<u8>,
}

/// Serialized size of a header with an empty block signature.
pub const BLOCK_HEADER_BASE_BYTES: usize = 181;

impl BlockHeader {
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(BLOCK_HEADER_BASE_BYTES + self.block_sig.len());
        out.extend_from_slice(&self.version.to_le_bytes());
        out.extend_from_slice(self.prev_block_hash.as_bytes());
        out.extend_from_slice(self.merkle_root.as_bytes());
        out.extend_from_slice(&self.time.to_le_bytes());
        out.extend_from_slice(&self.bits.to_le_bytes());
        out.extend_from_slice(&self.nonce.to_le_bytes());
        out.extend_from_slice(self.state_root.as_bytes());
        out.extend_from_slice(self.utxo_root.as_bytes());
        self.prevout_stake.encode(&mut out);
        encode_var_bytes(&self.block_sig, &mut out);
        out
    }

    pub fn hash(&self) -> Uint256 {
        Uint256::from_bytes(sha256d(&self.to_bytes()))
    }

    pub fn is_proof_of_stake(&self) -> bool {
        !self.prevout_stake.is_null()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block {
    pub header: BlockHeader,
    pub txs: Vec<Transaction>,
}

impl Block {
    pub fn hash(&self) -> Uint256 {
        self.header.hash()
    }
}
