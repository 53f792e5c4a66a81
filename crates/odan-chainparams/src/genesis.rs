use crate::block::{Block, BlockHeader};
use crate::constants::{
    GENESIS_COINBASE_EXTRA_NONCE, GENESIS_COINBASE_TAG, GENESIS_OUTPUT_PUBKEY, GENESIS_STATE_ROOT,
    GENESIS_TIMESTAMP, RLP_EMPTY_STRING,
};
use crate::error::{ErrorCode, ParamsError};
use crate::hash::keccak256;
use crate::merkle::block_merkle_root;
use crate::pow::check_proof_of_work;
use crate::script::{Script, OP_CHECKSIG};
use crate::tx::{OutPoint, Transaction, TxIn, TxOut, SEQUENCE_FINAL};
use crate::uint256::Uint256;

/// Header fields found offline by the network's designers. The builder never
/// searches for a nonce.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenesisInputs {
    pub time: u32,
    pub nonce: u32,
    pub bits: u32,
    pub version: i32,
    pub reward: u64,
}

/// Hard-coded identity of a network's first block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenesisExpectation {
    pub hash: Uint256,
    pub merkle_root: Uint256,
}

pub fn empty_utxo_root() -> Uint256 {
    Uint256::from_bytes(keccak256(&RLP_EMPTY_STRING))
}

pub fn genesis_output_script() -> Result<Script, ParamsError> {
    let pubkey = hex::decode(GENESIS_OUTPUT_PUBKEY)
        .map_err(|e| ParamsError::new(ErrorCode::ParamsErrHex, format!("genesis pubkey: {e}")))?;
    Ok(Script::new().push_slice(&pubkey).push_opcode(OP_CHECKSIG))
}

/// Assembles the height-0 block: one coinbase paying `inputs.reward` to
/// `output_script`, with `timestamp` embedded in the coinbase script.
pub fn create_genesis_block(
    timestamp: &str,
    output_script: &Script,
    inputs: &GenesisInputs,
) -> Result<Block, ParamsError> {
    let script_sig = Script::new()
        .push_int(0)
        .push_int(GENESIS_COINBASE_TAG)
        .push_script_num(GENESIS_COINBASE_EXTRA_NONCE)
        .push_slice(timestamp.as_bytes());

    let coinbase = Transaction {
        version: 1,
        inputs: vec![TxIn {
            prevout: OutPoint::NULL,
            script_sig,
            sequence: SEQUENCE_FINAL,
        }],
        outputs: vec![TxOut {
            value: inputs.reward,
            script_pubkey: output_script.clone(),
        }],
        lock_time: 0,
    };
    let txs = vec![coinbase];
    let merkle_root = block_merkle_root(&txs)?;

    let header = BlockHeader {
        version: inputs.version,
        prev_block_hash: Uint256::ZERO,
        merkle_root,
        time: inputs.time,
        bits: inputs.bits,
        nonce: inputs.nonce,
        state_root: GENESIS_STATE_ROOT,
        utxo_root: empty_utxo_root(),
        prevout_stake: OutPoint::NULL,
        block_sig: Vec::new(),
    };
    Ok(Block { header, txs })
}

/// Genesis block with the chain's published coinbase text and output key.
pub fn odan_genesis_block(inputs: &GenesisInputs) -> Result<Block, ParamsError> {
    create_genesis_block(GENESIS_TIMESTAMP, &genesis_output_script()?, inputs)
}

/// Checks a freshly built genesis block against the network's hard-coded
/// hash and merkle root, and that its header meets its own difficulty.
/// Returns the block hash.
pub fn verify_genesis(
    block: &Block,
    expected: &GenesisExpectation,
    pow_limit: &Uint256,
) -> Result<Uint256, ParamsError> {
    let hash = block.hash();
    if hash != expected.hash {
        return Err(ParamsError::new(
            ErrorCode::ParamsErrGenesisHash,
            format!("genesis hash {hash} does not match expected {}", expected.hash),
        ));
    }
    if block.header.merkle_root != expected.merkle_root {
        return Err(ParamsError::new(
            ErrorCode::ParamsErrGenesisMerkle,
            format!(
                "genesis merkle root {} does not match expected {}",
                block.header.merkle_root, expected.merkle_root
            ),
        ));
    }
    if !check_proof_of_work(&hash, block.header.bits, pow_limit) {
        return Err(ParamsError::new(
            ErrorCode::ParamsErrGenesisPow,
            format!(
                "genesis hash {hash} does not meet bits {:#010x}",
                block.header.bits
            ),
        ));
    }
    Ok(hash)
}

pub fn build_verified_genesis(
    inputs: &GenesisInputs,
    expected: &GenesisExpectation,
    pow_limit: &Uint256,
) -> Result<Block, ParamsError> {
    let block = odan_genesis_block(inputs)?;
    verify_genesis(&block, expected, pow_limit)?;
    Ok(block)
}
