use crate::compactsize::{encode_compact_size, encode_var_bytes};
use crate::hash::sha256d;
use crate::script::Script;
use crate::uint256::Uint256;

pub const SEQUENCE_FINAL: u32 = 0xffff_ffff;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct OutPoint {
    pub txid: Uint256,
    pub vout: u32,
}

impl OutPoint {
    /// The outpoint a coinbase input spends, and the stake outpoint of a
    /// proof-of-work block.
    pub const NULL: OutPoint = OutPoint {
        txid: Uint256::ZERO,
        vout: u32::MAX,
    };

    pub fn is_null(&self) -> bool {
        self.txid.is_zero() && self.vout == u32::MAX
    }

    pub fn encode(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(self.txid.as_bytes());
        out.extend_from_slice(&self.vout.to_le_bytes());
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TxIn {
    pub prevout: OutPoint,
    pub script_sig: Script,
    pub sequence: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TxOut {
    pub value: u64,
    pub script_pubkey: Script,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transaction {
    pub version: i32,
    pub inputs: Vec<TxIn>,
    pub outputs: Vec<TxOut>,
    pub lock_time: u32,
}

impl Transaction {
    pub fn is_coinbase(&self) -> bool {
        self.inputs.len() == 1 && self.inputs[0].prevout.is_null()
    }

    /// Serialization without witness data; this is what the txid commits to.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&self.version.to_le_bytes());
        encode_compact_size(self.inputs.len() as u64, &mut out);
        for input in &self.inputs {
            input.prevout.encode(&mut out);
            encode_var_bytes(input.script_sig.as_bytes(), &mut out);
            out.extend_from_slice(&input.sequence.to_le_bytes());
        }
        encode_compact_size(self.outputs.len() as u64, &mut out);
        for output in &self.outputs {
            out.extend_from_slice(&output.value.to_le_bytes());
            encode_var_bytes(output.script_pubkey.as_bytes(), &mut out);
        }
        out.extend_from_slice(&self.lock_time.to_le_bytes());
        out
    }

    pub fn txid(&self) -> Uint256 {
        Uint256::from_bytes(sha256d(&self.to_bytes()))
    }
}
