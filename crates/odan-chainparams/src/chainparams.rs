use std::collections::BTreeMap;

use serde::Serialize;
use tracing::info;

use crate::block::Block;
use crate::chaintype::ChainType;
use crate::checkpoints::{AssumeUtxoData, ChainTxData, CheckpointData, SnapshotAnchors};
use crate::constants::{
    DEFAULT_SIGNET_CHALLENGE, DELEGATIONS_ADDRESS, GENESIS_MERKLE_ROOT, GENESIS_REWARD,
    HIGH_SUBSIDY, INITIAL_SUBSIDY, SCRIPT_VERIFY_NONE, SUBSIDY_DECAY_FP,
};
use crate::deployments::{
    check_deployment_bits, Bip9Deployment, Deployment, DeploymentPos, DeploymentStart,
    DeploymentTimeout,
};
use crate::error::{ErrorCode, ParamsError};
use crate::genesis::{build_verified_genesis, GenesisExpectation, GenesisInputs};
use crate::identity::{
    check_signet_challenge, parse_signet_challenge, signet_message_start, Base58Prefixes,
    ChainIdentity, MAIN_BASE58_PREFIXES, TEST_BASE58_PREFIXES,
};
use crate::options::{ChainOptions, RegTestOptions, SigNetOptions};
use crate::params::{BuriedHeights, ConsensusParams, UpgradeHeights};
use crate::seeds::SeedList;
use crate::subsidy::{HighSubsidy, SubsidyPolicy};
use crate::uint256::Uint256;
use crate::versionbits::BlockSignal;

const POW_LIMIT: Uint256 = Uint256::from_display_hex(
    "0000ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
);
const POS_LIMIT: Uint256 = Uint256::from_display_hex(
    "0000000000003fffffffffffffffffffffffffffffffffffffffffffffffffff",
);
const REGTEST_LIMIT: Uint256 = Uint256::from_display_hex(
    "7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
);

/// Test networks never switch to proof of stake by height.
const NO_POW_CUTOFF: u64 = 0x7fff_ffff;

const TESTDUMMY_BIT: u8 = 28;
const TAPROOT_BIT: u8 = 2;

/// Literal genesis header fields of a network and the identity they must
/// produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NetworkGenesis {
    pub inputs: GenesisInputs,
    pub expected: GenesisExpectation,
}

const fn genesis_at(time: u32, nonce: u32, bits: u32, hash: &str) -> NetworkGenesis {
    NetworkGenesis {
        inputs: GenesisInputs {
            time,
            nonce,
            bits,
            version: 1,
            reward: GENESIS_REWARD,
        },
        expected: GenesisExpectation {
            hash: Uint256::from_display_hex(hash),
            merkle_root: GENESIS_MERKLE_ROOT,
        },
    }
}

pub const MAIN_GENESIS: NetworkGenesis = genesis_at(
    1_755_724_326,
    105_307,
    0x1f00_ffff,
    "00001c36f9d373fc33a72dd97d641efcc98ea8fa554986287a0e1bcbbd5d5ff6",
);
pub const TESTNET_GENESIS: NetworkGenesis = genesis_at(
    1_755_835_568,
    38_132,
    0x1f00_ffff,
    "00006cbacc2055f32f8e9a412f0d7598aca8504ceb3d437828887d136663816a",
);
pub const SIGNET_GENESIS: NetworkGenesis = genesis_at(
    1_755_836_506,
    61_079,
    0x1f00_ffff,
    "00006330c7771dcacdeff26c2cf90b1e32e6df72eaa1e1bc196d02a47688e63c",
);
pub const REGTEST_GENESIS: NetworkGenesis = genesis_at(
    1_755_836_977,
    1,
    0x207f_ffff,
    "53a03015f0999d21d730c4427339904a299d0c1cc880a122a1abfa3f49a05e6e",
);

pub fn network_genesis(chain: ChainType) -> NetworkGenesis {
    match chain {
        ChainType::Main => MAIN_GENESIS,
        ChainType::Testnet => TESTNET_GENESIS,
        ChainType::Signet => SIGNET_GENESIS,
        ChainType::Regtest | ChainType::UnitTest => REGTEST_GENESIS,
    }
}

/// Node-side defaults that are not consensus rules.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct NodePolicy {
    pub prune_after_height: u64,
    /// Estimated on-disk size in GB.
    pub assumed_blockchain_size: u64,
    pub assumed_chain_state_size: u64,
    pub default_consistency_checks: bool,
    pub mine_blocks_on_demand: bool,
    pub is_mockable_chain: bool,
    pub has_hardware_wallet_support: bool,
}

/// Complete parameter set of one network.
#[derive(Clone, Debug, PartialEq)]
pub struct ChainParams {
    chain_type: ChainType,
    consensus: ConsensusParams,
    identity: ChainIdentity,
    seeds: SeedList,
    genesis: Block,
    checkpoints: CheckpointData,
    assumeutxo: SnapshotAnchors,
    chain_tx_data: ChainTxData,
    policy: NodePolicy,
}

fn deployments(
    testdummy_start: DeploymentStart,
    taproot_start: DeploymentStart,
    taproot_min_activation_height: u64,
) -> [Bip9Deployment; 2] {
    [
        Bip9Deployment {
            bit: TESTDUMMY_BIT,
            start: testdummy_start,
            timeout: DeploymentTimeout::NoTimeout,
            min_activation_height: 0,
        },
        Bip9Deployment {
            bit: TAPROOT_BIT,
            start: taproot_start,
            timeout: DeploymentTimeout::NoTimeout,
            min_activation_height: taproot_min_activation_height,
        },
    ]
}

fn subsidy(halving_interval: u64, last_big_reward: u64) -> Result<SubsidyPolicy, ParamsError> {
    SubsidyPolicy::new(
        INITIAL_SUBSIDY,
        SUBSIDY_DECAY_FP,
        halving_interval,
        Some(HighSubsidy {
            amount: HIGH_SUBSIDY,
            last_height: last_big_reward,
        }),
    )
}

fn genesis_exceptions(hash: Uint256) -> BTreeMap<Uint256, u32> {
    BTreeMap::from([(hash, SCRIPT_VERIFY_NONE)])
}

impl ChainParams {
    pub fn main() -> Result<Self, ParamsError> {
        let genesis = build_verified_genesis(
            &MAIN_GENESIS.inputs,
            &MAIN_GENESIS.expected,
            &POW_LIMIT,
        )?;
        let genesis_hash = genesis.hash();

        let consensus = ConsensusParams {
            hash_genesis_block: genesis_hash,
            subsidy: subsidy(210_240, 3750)?,
            buried: BuriedHeights::default(),
            bip34_hash: genesis_hash,
            min_bip9_warning_height: 0,
            script_flag_exceptions: genesis_exceptions(genesis_hash),
            upgrades: UpgradeHeights {
                qip5: 0,
                qip6: 0,
                qip7: 0,
                qip9: 0,
                offline_stake: 3749,
                muir_glacier: 3750,
                london: 3700,
                shanghai: 3700,
                cancun: 3700,
            },
            pow_limit: POW_LIMIT,
            pos_limit: POS_LIMIT,
            pow_target_timespan: 4000,
            pow_target_spacing: 60,
            pow_allow_min_difficulty_blocks: false,
            pow_no_retargeting: true,
            pos_no_retargeting: false,
            rule_change_activation_threshold: 1815,
            miner_confirmation_window: 2016,
            deployments: deployments(DeploymentStart::NeverActive, DeploymentStart::Time(0), 12),
            minimum_chain_work: genesis_hash,
            default_assume_valid: GENESIS_MERKLE_ROOT,
            signet_blocks: false,
            signet_challenge: Vec::new(),
            coinbase_maturity: 300,
            last_pow_block: 3750,
            last_big_reward: 3750,
            mpos_reward_recipients: 10,
            first_mpos_block: 3749,
            fix_utxo_cache_hf_height: 100_000,
            enable_header_signature_height: 399_100,
            checkpoint_span: 300,
            delegations_address: DELEGATIONS_ADDRESS,
            stake_timestamp_mask: 15,
        };

        Self::assemble(ChainParams {
            chain_type: ChainType::Main,
            consensus,
            identity: ChainIdentity {
                message_start: [0x5e, 0xc9, 0x17, 0x5c],
                default_port: 3691,
                base58_prefixes: MAIN_BASE58_PREFIXES,
                bech32_hrp: "odn".to_string(),
            },
            seeds: SeedList::default(),
            checkpoints: CheckpointData::new([(0, genesis_hash)]),
            assumeutxo: SnapshotAnchors::default(),
            chain_tx_data: ChainTxData {
                time: 1_730_324_440,
                tx_count: 12_952_860,
                tx_rate: 0.06440551300874305,
            },
            policy: NodePolicy {
                prune_after_height: 100_000,
                assumed_blockchain_size: 24,
                assumed_chain_state_size: 1,
                has_hardware_wallet_support: true,
                ..NodePolicy::default()
            },
            genesis,
        })
    }

    pub fn testnet() -> Result<Self, ParamsError> {
        let genesis = build_verified_genesis(
            &TESTNET_GENESIS.inputs,
            &TESTNET_GENESIS.expected,
            &POW_LIMIT,
        )?;
        let genesis_hash = genesis.hash();
        let coinbase_maturity = 500;
        let last_pow_block = 5000;
        let mpos_reward_recipients = 10;

        let consensus = ConsensusParams {
            hash_genesis_block: genesis_hash,
            subsidy: subsidy(240_250, 5000)?,
            buried: BuriedHeights {
                bip34: 0,
                bip65: 0,
                bip66: 0,
                csv: 6,
                segwit: 6,
            },
            bip34_hash: genesis_hash,
            min_bip9_warning_height: 8,
            script_flag_exceptions: genesis_exceptions(genesis_hash),
            upgrades: UpgradeHeights {
                qip5: 446_320,
                qip6: 446_320,
                qip7: 446_320,
                qip9: 446_320,
                offline_stake: 625_000,
                muir_glacier: 806_600,
                london: 1_967_616,
                shanghai: 3_298_892,
                cancun: 4_510_000,
            },
            pow_limit: POW_LIMIT,
            pos_limit: POS_LIMIT,
            pow_target_timespan: 16 * 60,
            pow_target_spacing: 60,
            pow_allow_min_difficulty_blocks: false,
            pow_no_retargeting: true,
            pos_no_retargeting: false,
            rule_change_activation_threshold: 1512,
            miner_confirmation_window: 2016,
            deployments: deployments(
                DeploymentStart::NeverActive,
                DeploymentStart::Time(0),
                1_967_616,
            ),
            minimum_chain_work: genesis_hash,
            default_assume_valid: GENESIS_MERKLE_ROOT,
            signet_blocks: false,
            signet_challenge: Vec::new(),
            coinbase_maturity,
            last_pow_block,
            last_big_reward: 5000,
            mpos_reward_recipients,
            first_mpos_block: last_pow_block + mpos_reward_recipients + coinbase_maturity,
            fix_utxo_cache_hf_height: 84_500,
            enable_header_signature_height: 391_993,
            checkpoint_span: coinbase_maturity,
            delegations_address: DELEGATIONS_ADDRESS,
            stake_timestamp_mask: 15,
        };

        Self::assemble(ChainParams {
            chain_type: ChainType::Testnet,
            consensus,
            identity: ChainIdentity {
                message_start: [0x16, 0xfb, 0x6b, 0x47],
                default_port: 13691,
                base58_prefixes: TEST_BASE58_PREFIXES,
                bech32_hrp: "odnt".to_string(),
            },
            seeds: SeedList::dns(&["odan4.dynu.net"]),
            checkpoints: CheckpointData::new([(0, genesis_hash)]),
            assumeutxo: SnapshotAnchors::default(),
            chain_tx_data: ChainTxData {
                time: 1_729_896_232,
                tx_count: 8_867_945,
                tx_rate: 0.06233193794631864,
            },
            policy: NodePolicy {
                prune_after_height: 1000,
                assumed_blockchain_size: 10,
                assumed_chain_state_size: 1,
                has_hardware_wallet_support: true,
                ..NodePolicy::default()
            },
            genesis,
        })
    }

    /// Signet with the default challenge, or with `opts.challenge`. The wire
    /// magic is derived from whichever challenge is in force.
    pub fn signet(opts: &SigNetOptions) -> Result<Self, ParamsError> {
        let (challenge, assumed_blockchain_size) = match &opts.challenge {
            None => (parse_signet_challenge(DEFAULT_SIGNET_CHALLENGE)?, 1),
            Some(custom) => {
                check_signet_challenge(custom)?;
                info!("signet with challenge {}", hex::encode(custom));
                (custom.clone(), 0)
            }
        };
        let seeds = match &opts.seeds {
            Some(hosts) => SeedList {
                dns_seeds: hosts.clone(),
                fixed_seeds: Vec::new(),
            },
            None => SeedList::default(),
        };

        let genesis = build_verified_genesis(
            &SIGNET_GENESIS.inputs,
            &SIGNET_GENESIS.expected,
            &POW_LIMIT,
        )?;

        let consensus = ConsensusParams {
            hash_genesis_block: genesis.hash(),
            subsidy: subsidy(985_500, 5000)?,
            buried: BuriedHeights {
                bip34: 1,
                bip65: 1,
                bip66: 1,
                csv: 1,
                segwit: 1,
            },
            bip34_hash: Uint256::ZERO,
            min_bip9_warning_height: 0,
            script_flag_exceptions: BTreeMap::new(),
            upgrades: UpgradeHeights {
                offline_stake: 1,
                ..UpgradeHeights::default()
            },
            pow_limit: POW_LIMIT,
            pos_limit: POS_LIMIT,
            pow_target_timespan: 16 * 60,
            pow_target_spacing: 60,
            pow_allow_min_difficulty_blocks: false,
            pow_no_retargeting: true,
            pos_no_retargeting: false,
            rule_change_activation_threshold: 1815,
            miner_confirmation_window: 2016,
            deployments: deployments(
                DeploymentStart::NeverActive,
                DeploymentStart::AlwaysActive,
                0,
            ),
            minimum_chain_work: Uint256::ZERO,
            default_assume_valid: Uint256::ZERO,
            signet_blocks: true,
            signet_challenge: challenge.clone(),
            coinbase_maturity: 500,
            last_pow_block: NO_POW_CUTOFF,
            last_big_reward: 5000,
            mpos_reward_recipients: 10,
            first_mpos_block: 5000,
            fix_utxo_cache_hf_height: 0,
            enable_header_signature_height: 0,
            checkpoint_span: 500,
            delegations_address: DELEGATIONS_ADDRESS,
            stake_timestamp_mask: 15,
        };

        Self::assemble(ChainParams {
            chain_type: ChainType::Signet,
            consensus,
            identity: ChainIdentity {
                message_start: signet_message_start(&challenge),
                default_port: 33691,
                base58_prefixes: TEST_BASE58_PREFIXES,
                bech32_hrp: "odnt".to_string(),
            },
            seeds,
            checkpoints: CheckpointData::default(),
            assumeutxo: SnapshotAnchors::default(),
            chain_tx_data: ChainTxData::default(),
            policy: NodePolicy {
                prune_after_height: 1000,
                assumed_blockchain_size,
                assumed_chain_state_size: 0,
                ..NodePolicy::default()
            },
            genesis,
        })
    }

    /// Regression-test network. Buried-height overrides are applied first,
    /// then versionbits overrides.
    pub fn regtest(opts: &RegTestOptions) -> Result<Self, ParamsError> {
        let genesis = build_verified_genesis(
            &REGTEST_GENESIS.inputs,
            &REGTEST_GENESIS.expected,
            &REGTEST_LIMIT,
        )?;
        let genesis_hash = genesis.hash();

        let mut consensus = ConsensusParams {
            hash_genesis_block: genesis_hash,
            subsidy: subsidy(985_500, 5000)?,
            buried: BuriedHeights {
                bip34: 1,
                bip65: 1,
                bip66: 1,
                csv: 1,
                segwit: 0,
            },
            bip34_hash: Uint256::ZERO,
            min_bip9_warning_height: 0,
            script_flag_exceptions: BTreeMap::new(),
            upgrades: UpgradeHeights {
                offline_stake: 1,
                ..UpgradeHeights::default()
            },
            pow_limit: REGTEST_LIMIT,
            pos_limit: REGTEST_LIMIT,
            pow_target_timespan: 16 * 60,
            pow_target_spacing: 60,
            pow_allow_min_difficulty_blocks: true,
            pow_no_retargeting: true,
            pos_no_retargeting: true,
            rule_change_activation_threshold: 108,
            miner_confirmation_window: 144,
            deployments: deployments(
                DeploymentStart::Time(0),
                DeploymentStart::AlwaysActive,
                0,
            ),
            minimum_chain_work: Uint256::ZERO,
            default_assume_valid: Uint256::ZERO,
            signet_blocks: false,
            signet_challenge: Vec::new(),
            coinbase_maturity: 500,
            last_pow_block: NO_POW_CUTOFF,
            last_big_reward: 5000,
            mpos_reward_recipients: 10,
            first_mpos_block: 5000,
            fix_utxo_cache_hf_height: 0,
            enable_header_signature_height: 0,
            checkpoint_span: 500,
            delegations_address: DELEGATIONS_ADDRESS,
            stake_timestamp_mask: 15,
        };
        apply_regtest_overrides(&mut consensus, opts)?;

        Self::assemble(ChainParams {
            chain_type: ChainType::Regtest,
            consensus,
            identity: ChainIdentity {
                message_start: [0xf6, 0x70, 0x3c, 0x24],
                default_port: 23691,
                base58_prefixes: TEST_BASE58_PREFIXES,
                bech32_hrp: "odnrt".to_string(),
            },
            seeds: SeedList::dns(&["dummySeed.invalid."]),
            checkpoints: CheckpointData::new([(0, genesis_hash)]),
            assumeutxo: SnapshotAnchors::new(vec![AssumeUtxoData {
                height: 4099,
                hash_serialized: Uint256::from_display_hex(
                    "73200c9ce4eb500fb90dc57599ed084a1351eb0bf5de133c8a8ed4662e7e8162",
                ),
                chain_tx_count: 4767,
                blockhash: Uint256::from_display_hex(
                    "05487442d7c76a7c64070cca8a52742fa7be67566802c55cc4499b15ff8acc0b",
                ),
            }]),
            chain_tx_data: ChainTxData::default(),
            policy: NodePolicy {
                prune_after_height: if opts.fastprune { 100 } else { 1000 },
                assumed_blockchain_size: 0,
                assumed_chain_state_size: 0,
                default_consistency_checks: true,
                mine_blocks_on_demand: true,
                is_mockable_chain: true,
                has_hardware_wallet_support: true,
            },
            genesis,
        })
    }

    /// Regtest with `opts` applied, then the unit-test patch.
    pub fn unit_test(opts: &RegTestOptions) -> Result<Self, ParamsError> {
        apply_unit_test_patch(Self::regtest(opts)?)
    }

    fn assemble(params: ChainParams) -> Result<Self, ParamsError> {
        check_deployment_bits(&params.consensus.deployments)?;
        Ok(params)
    }

    /// Replaces the seed list, e.g. with one loaded by [`SeedList::from_json`].
    pub fn with_seed_list(mut self, seeds: SeedList) -> Self {
        self.seeds = seeds;
        self
    }

    pub fn chain_type(&self) -> ChainType {
        self.chain_type
    }

    pub fn consensus(&self) -> &ConsensusParams {
        &self.consensus
    }

    pub fn identity(&self) -> &ChainIdentity {
        &self.identity
    }

    pub fn message_start(&self) -> [u8; 4] {
        self.identity.message_start
    }

    pub fn default_port(&self) -> u16 {
        self.identity.default_port
    }

    pub fn base58_prefixes(&self) -> &Base58Prefixes {
        &self.identity.base58_prefixes
    }

    pub fn bech32_hrp(&self) -> &str {
        &self.identity.bech32_hrp
    }

    pub fn seeds(&self) -> &SeedList {
        &self.seeds
    }

    pub fn genesis_block(&self) -> &Block {
        &self.genesis
    }

    pub fn genesis_hash(&self) -> Uint256 {
        self.consensus.hash_genesis_block
    }

    pub fn checkpoints(&self) -> &CheckpointData {
        &self.checkpoints
    }

    pub fn checkpoint(&self, height: u64) -> Option<&Uint256> {
        self.checkpoints.get(height)
    }

    pub fn last_checkpoint(&self) -> Option<(u64, &Uint256)> {
        self.checkpoints.last()
    }

    pub fn assumeutxo(&self) -> &SnapshotAnchors {
        &self.assumeutxo
    }

    pub fn assumeutxo_for_height(&self, height: u64) -> Option<&AssumeUtxoData> {
        self.assumeutxo.for_height(height)
    }

    pub fn assumeutxo_for_blockhash(&self, blockhash: &Uint256) -> Option<&AssumeUtxoData> {
        self.assumeutxo.for_blockhash(blockhash)
    }

    pub fn available_snapshot_heights(&self) -> Vec<u64> {
        self.assumeutxo.available_heights()
    }

    pub fn chain_tx_data(&self) -> &ChainTxData {
        &self.chain_tx_data
    }

    pub fn policy(&self) -> &NodePolicy {
        &self.policy
    }

    pub fn block_subsidy(&self, height: u64) -> u64 {
        self.consensus.block_subsidy(height)
    }

    pub fn is_active(
        &self,
        deployment: Deployment,
        height: u64,
        history: &[BlockSignal],
    ) -> Result<bool, ParamsError> {
        self.consensus.is_active(deployment, height, history)
    }
}

fn negative_height(what: String, height: i64) -> ParamsError {
    ParamsError::new(
        ErrorCode::ParamsErrNegativeHeight,
        format!("{what}: height {height} is negative"),
    )
}

fn check_override_time(what: String, t: i64) -> Result<(), ParamsError> {
    if t < 0 {
        return Err(ParamsError::new(
            ErrorCode::ParamsErrMalformedOverride,
            format!("{what}: time {t} is negative"),
        ));
    }
    Ok(())
}

fn apply_regtest_overrides(
    consensus: &mut ConsensusParams,
    opts: &RegTestOptions,
) -> Result<(), ParamsError> {
    for &(deployment, height) in &opts.activation_heights {
        if height < 0 {
            return Err(negative_height(format!("{deployment}@{height}"), height));
        }
        consensus.buried.set(deployment, height as u64);
    }

    for (pos, p) in &opts.version_bits_parameters {
        if p.min_activation_height < 0 {
            return Err(negative_height(
                format!("{pos} min_activation_height"),
                p.min_activation_height,
            ));
        }
        if let DeploymentStart::Time(t) = p.start {
            check_override_time(format!("{pos} start"), t)?;
        }
        if let DeploymentTimeout::Time(t) = p.timeout {
            check_override_time(format!("{pos} timeout"), t)?;
        }
        let d = &mut consensus.deployments[pos.index()];
        d.start = p.start;
        d.timeout = p.timeout;
        d.min_activation_height = p.min_activation_height as u64;
    }
    Ok(())
}

/// Turns a regtest parameter set into the unit-test network: later BIP
/// heights, a short halving interval and window, taproot always active and
/// the unit-test snapshot anchors. Any other network is rejected.
pub(crate) fn apply_unit_test_patch(
    mut params: ChainParams,
) -> Result<ChainParams, ParamsError> {
    if params.chain_type != ChainType::Regtest {
        return Err(ParamsError::new(
            ErrorCode::ParamsErrUnknownChain,
            format!("unit-test patch needs regtest parameters, got {}", params.chain_type),
        ));
    }
    let c = &mut params.consensus;
    c.buried.bip34 = 100_000_000;
    c.bip34_hash = Uint256::ZERO;
    c.buried.bip65 = 500 + 851;
    c.buried.bip66 = 500 + 751;
    c.upgrades.qip6 = 500 + 500;
    c.upgrades.qip7 = 0;

    c.subsidy = c.subsidy.with_halving_interval(750)?;
    c.rule_change_activation_threshold = 558;
    c.miner_confirmation_window = 744;
    c.coinbase_maturity = 500;
    c.checkpoint_span = c.coinbase_maturity * 2;

    let taproot = &mut c.deployments[DeploymentPos::Taproot.index()];
    taproot.bit = TAPROOT_BIT;
    taproot.start = DeploymentStart::AlwaysActive;
    taproot.timeout = DeploymentTimeout::NoTimeout;
    taproot.min_activation_height = 0;

    params.assumeutxo = SnapshotAnchors::new(vec![AssumeUtxoData {
        height: 2010,
        hash_serialized: Uint256::from_display_hex(
            "62528c92991cbedf47bdf3f0f5a0ad1e07bce4b2a35500beabe3f87fa5cca44f",
        ),
        chain_tx_count: 2011,
        blockhash: Uint256::from_display_hex(
            "292911929ab59409569a86bae416da0ba697fd7086b107ddd0a8eeaddba91b4d",
        ),
    }]);
    params.chain_type = ChainType::UnitTest;
    ChainParams::assemble(params)
}

/// Builds the parameter set of `chain`. Options for other networks are
/// ignored.
pub fn create_chain_params(
    chain: ChainType,
    opts: &ChainOptions,
) -> Result<ChainParams, ParamsError> {
    match chain {
        ChainType::Main => ChainParams::main(),
        ChainType::Testnet => ChainParams::testnet(),
        ChainType::Signet => ChainParams::signet(&opts.signet),
        ChainType::Regtest => ChainParams::regtest(&opts.regtest),
        ChainType::UnitTest => ChainParams::unit_test(&opts.regtest),
    }
}
