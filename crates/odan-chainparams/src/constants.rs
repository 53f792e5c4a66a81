use crate::uint256::{hex32, Uint256};

pub const COIN: u64 = 100_000_000;

/// Fixed-point scale of the subsidy decay factor.
pub const FP_SCALE: u64 = 100_000_000;
/// Epochs past the first one held in the precomputed subsidy table.
pub const SUBSIDY_LOOKAHEAD: usize = 10;

/// Baseline schedule shared by every network.
pub const INITIAL_SUBSIDY: u64 = 10 * COIN;
/// 1.1149 in `FP_SCALE` units.
pub const SUBSIDY_DECAY_FP: u64 = 111_490_000;
/// Flat reward of the bootstrap window.
pub const HIGH_SUBSIDY: u64 = 1200 * COIN;

pub const GENESIS_REWARD: u64 = 50 * COIN;
pub const GENESIS_TIMESTAMP: &str =
    "The Guardian: Real estate tech future, 21 Oct 2024: vent on 20/08/2025";
pub const GENESIS_OUTPUT_PUBKEY: &str = "040d61d8653448c98731ee5fffd303c15e71ec2057b77f11ab3601979728cdaff2d68afbba14e4fa0bc44f2072b0b23ef63717f8cdfbe58dcd33f32b6afe98741a";
pub const GENESIS_COINBASE_TAG: i64 = 488_804_799;
pub const GENESIS_COINBASE_EXTRA_NONCE: i64 = 4;

/// Contract state root the genesis block commits to.
pub const GENESIS_STATE_ROOT: Uint256 = Uint256::from_bytes(hex32(
    "e965ffd002cd6ad0e2dc402b8044de833e06b23127ea8c3d80aec91410771495",
));
/// RLP encoding of the empty byte string; its keccak is the empty account
/// index root.
pub const RLP_EMPTY_STRING: [u8; 1] = [0x80];

/// Merkle root shared by every network's genesis block (same coinbase).
pub const GENESIS_MERKLE_ROOT: Uint256 = Uint256::from_display_hex(
    "a34f76ed934e390c6fdc839d1bf56b3341a476324db876ff06954997d30380fb",
);

pub const VERSIONBITS_TOP_BITS: i32 = 0x2000_0000;
pub const VERSIONBITS_TOP_MASK: u32 = 0xe000_0000;
pub const VERSIONBITS_NUM_BITS: u8 = 29;

pub const SCRIPT_VERIFY_NONE: u32 = 0;

/// Offline-staking delegations contract.
pub const DELEGATIONS_ADDRESS: [u8; 20] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x86,
];

pub const DEFAULT_SIGNET_CHALLENGE: &str = "51210276aa67f74d27c3dcd4be86ca8375a4d70b1e00f7787451d8445c647a3c099ee7210276aa67f74d27c3dcd4be86ca8375a4d70b1e00f7787451d8445c647a3c099ee752ae";
