use crate::block::BLOCK_HEADER_BASE_BYTES;
use crate::chainparams::{apply_unit_test_patch, network_genesis, ChainParams, MAIN_GENESIS};
use crate::chaintype::ChainType;
use crate::constants::*;
use crate::deployments::{BuriedDeployment, DeploymentPos, DeploymentStart, DeploymentTimeout};
use crate::error::ErrorCode;
use crate::genesis::{empty_utxo_root, odan_genesis_block, verify_genesis, GenesisExpectation};
use crate::options::{RegTestOptions, SigNetOptions, VersionBitsParameters};
use crate::uint256::Uint256;

const MAIN_POW_LIMIT: Uint256 = Uint256::from_display_hex(
    "0000ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
);

#[test]
fn genesis_coinbase_layout() {
    let block = odan_genesis_block(&MAIN_GENESIS.inputs).expect("genesis");
    assert_eq!(block.txs.len(), 1);
    let cb = &block.txs[0];
    assert!(cb.is_coinbase());
    assert_eq!(cb.outputs[0].value, 50 * COIN);

    let sig = cb.inputs[0].script_sig.as_bytes();
    // OP_0, push(bf91221d), push(04), push(timestamp).
    assert_eq!(&sig[..8], &[0x00, 0x04, 0xbf, 0x91, 0x22, 0x1d, 0x01, 0x04]);
    assert_eq!(sig[8] as usize, GENESIS_TIMESTAMP.len());
    assert_eq!(&sig[9..], GENESIS_TIMESTAMP.as_bytes());

    let spk = cb.outputs[0].script_pubkey.as_bytes();
    assert_eq!(spk.len(), 67);
    assert_eq!(spk[0], 65);
    assert_eq!(spk[66], 0xac);
}

#[test]
fn genesis_merkle_root_is_coinbase_txid() {
    let block = odan_genesis_block(&MAIN_GENESIS.inputs).expect("genesis");
    assert_eq!(block.header.merkle_root, block.txs[0].txid());
    assert_eq!(block.header.merkle_root, GENESIS_MERKLE_ROOT);
}

#[test]
fn genesis_header_roots() {
    let block = odan_genesis_block(&MAIN_GENESIS.inputs).expect("genesis");
    assert_eq!(block.header.to_bytes().len(), BLOCK_HEADER_BASE_BYTES);
    assert_eq!(block.header.state_root, GENESIS_STATE_ROOT);
    assert_eq!(
        hex::encode(empty_utxo_root().as_bytes()),
        "56e81f171bcc55a6ff8345e692c0f86e5b48e01b996cadc001622fb5e363b421"
    );
    assert!(block.header.prev_block_hash.is_zero());
    assert!(!block.header.is_proof_of_stake());
}

#[test]
fn verify_genesis_reports_each_mismatch() {
    let block = odan_genesis_block(&MAIN_GENESIS.inputs).expect("genesis");
    let good = MAIN_GENESIS.expected;
    assert_eq!(
        verify_genesis(&block, &good, &MAIN_POW_LIMIT).unwrap(),
        good.hash
    );

    let bad_hash = GenesisExpectation {
        hash: Uint256::ZERO,
        ..good
    };
    let err = verify_genesis(&block, &bad_hash, &MAIN_POW_LIMIT).unwrap_err();
    assert_eq!(err.code, ErrorCode::ParamsErrGenesisHash);
    assert!(err.code.is_configuration_fatal());

    let bad_merkle = GenesisExpectation {
        merkle_root: Uint256::ZERO,
        ..good
    };
    let err = verify_genesis(&block, &bad_merkle, &MAIN_POW_LIMIT).unwrap_err();
    assert_eq!(err.code, ErrorCode::ParamsErrGenesisMerkle);

    let tight = Uint256::from_display_hex(
        "00000000ffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
    );
    let err = verify_genesis(&block, &good, &tight).unwrap_err();
    assert_eq!(err.code, ErrorCode::ParamsErrGenesisPow);
}

#[test]
fn every_network_genesis_verifies() {
    for chain in ChainType::ALL {
        let g = network_genesis(chain);
        let block = odan_genesis_block(&g.inputs).expect("genesis");
        assert_eq!(block.hash(), g.expected.hash, "{chain}");
    }
}

#[test]
fn regtest_overrides_apply_in_order() {
    let opts = RegTestOptions {
        activation_heights: vec![
            (BuriedDeployment::Segwit, 10),
            (BuriedDeployment::Segwit, 20),
            (BuriedDeployment::Csv, 0),
        ],
        version_bits_parameters: vec![(
            DeploymentPos::TestDummy,
            VersionBitsParameters {
                start: DeploymentStart::NeverActive,
                timeout: DeploymentTimeout::NoTimeout,
                min_activation_height: 288,
            },
        )],
        fastprune: true,
    };
    let p = ChainParams::regtest(&opts).expect("regtest");
    let c = p.consensus();
    assert_eq!(c.deployment_height(BuriedDeployment::Segwit), 20);
    assert_eq!(c.deployment_height(BuriedDeployment::Csv), 0);
    assert_eq!(c.deployment_height(BuriedDeployment::HeightInCb), 1);
    let d = c.deployment(DeploymentPos::TestDummy);
    assert_eq!(d.start, DeploymentStart::NeverActive);
    assert_eq!(d.min_activation_height, 288);
    assert_eq!(p.policy().prune_after_height, 100);
}

#[test]
fn regtest_override_errors_name_the_entry() {
    let opts = RegTestOptions {
        activation_heights: vec![(BuriedDeployment::DerSig, -3)],
        ..RegTestOptions::default()
    };
    let err = ChainParams::regtest(&opts).unwrap_err();
    assert_eq!(err.code, ErrorCode::ParamsErrNegativeHeight);
    assert!(err.msg.contains("dersig@-3"));

    let opts = RegTestOptions {
        version_bits_parameters: vec![(
            DeploymentPos::Taproot,
            VersionBitsParameters {
                start: DeploymentStart::Time(0),
                timeout: DeploymentTimeout::NoTimeout,
                min_activation_height: -1,
            },
        )],
        ..RegTestOptions::default()
    };
    let err = ChainParams::regtest(&opts).unwrap_err();
    assert_eq!(err.code, ErrorCode::ParamsErrNegativeHeight);
    assert!(err.msg.contains("taproot"));
}

#[test]
fn unit_test_patch_is_applied_after_overrides() {
    let opts = RegTestOptions {
        activation_heights: vec![(BuriedDeployment::HeightInCb, 5)],
        version_bits_parameters: vec![(
            DeploymentPos::Taproot,
            VersionBitsParameters {
                start: DeploymentStart::NeverActive,
                timeout: DeploymentTimeout::NoTimeout,
                min_activation_height: 0,
            },
        )],
        fastprune: false,
    };
    let p = ChainParams::unit_test(&opts).expect("unittest");
    let c = p.consensus();
    assert_eq!(p.chain_type(), ChainType::UnitTest);
    assert_eq!(c.deployment_height(BuriedDeployment::HeightInCb), 100_000_000);
    assert_eq!(c.deployment_height(BuriedDeployment::Cltv), 1351);
    assert_eq!(c.deployment_height(BuriedDeployment::DerSig), 1251);
    assert_eq!(
        c.deployment(DeploymentPos::Taproot).start,
        DeploymentStart::AlwaysActive
    );
    assert_eq!(c.subsidy.halving_interval(), 750);
    assert_eq!(c.miner_confirmation_window, 744);
    assert_eq!(c.rule_change_activation_threshold, 558);
    assert_eq!(c.checkpoint_span, 1000);
    assert_eq!(c.upgrades.qip6, 1000);
    assert_eq!(p.available_snapshot_heights(), vec![2010]);
    // Regtest identity and genesis are kept.
    assert_eq!(p.bech32_hrp(), "odnrt");
    assert_eq!(p.genesis_hash(), network_genesis(ChainType::Regtest).expected.hash);
}

#[test]
fn unit_test_patch_leaves_input_untouched() {
    let regtest = ChainParams::regtest(&RegTestOptions::default()).expect("regtest");
    let before = regtest.clone();
    let patched = apply_unit_test_patch(regtest.clone()).expect("patch");
    assert_eq!(regtest, before);
    assert_ne!(patched.consensus(), regtest.consensus());
    assert_eq!(regtest.available_snapshot_heights(), vec![4099]);
}

#[test]
fn unit_test_patch_only_accepts_regtest() {
    for params in [
        ChainParams::main().expect("main"),
        ChainParams::testnet().expect("testnet"),
        ChainParams::unit_test(&RegTestOptions::default()).expect("unittest"),
    ] {
        let chain = params.chain_type();
        let err = apply_unit_test_patch(params).unwrap_err();
        assert_eq!(err.code, ErrorCode::ParamsErrUnknownChain);
        assert!(err.msg.contains(chain.as_str()), "{chain}");
    }
}

#[test]
fn signet_custom_challenge_changes_magic() {
    let default = ChainParams::signet(&SigNetOptions::default()).expect("signet");
    assert_eq!(default.message_start(), [0x7a, 0xf9, 0x82, 0x59]);
    assert_eq!(default.policy().assumed_blockchain_size, 1);
    assert!(default.consensus().signet_blocks);

    let custom = ChainParams::signet(&SigNetOptions {
        challenge: Some(vec![0x51]),
        seeds: Some(vec!["seed.example.org".to_string()]),
    })
    .expect("signet");
    assert_ne!(custom.message_start(), default.message_start());
    assert_eq!(custom.consensus().signet_challenge, vec![0x51]);
    assert_eq!(custom.seeds().dns_seeds, vec!["seed.example.org".to_string()]);
    assert_eq!(custom.policy().assumed_blockchain_size, 0);
    // Same genesis either way.
    assert_eq!(custom.genesis_hash(), default.genesis_hash());

    let err = ChainParams::signet(&SigNetOptions {
        challenge: Some(Vec::new()),
        seeds: None,
    })
    .unwrap_err();
    assert_eq!(err.code, ErrorCode::ParamsErrSignetChallenge);
}

#[test]
fn mpos_start_follows_maturity_on_testnet() {
    let p = ChainParams::testnet().expect("testnet");
    let c = p.consensus();
    assert_eq!(
        c.first_mpos_block,
        c.last_pow_block + c.mpos_reward_recipients + c.coinbase_maturity
    );
    assert_eq!(c.first_mpos_block, 5510);
    assert!(!c.is_proof_of_stake_height(5000));
    assert!(c.is_proof_of_stake_height(5001));
}

#[test]
fn difficulty_interval_from_timing() {
    let main = ChainParams::main().expect("main");
    assert_eq!(main.consensus().difficulty_adjustment_interval(), 66);
    let test = ChainParams::testnet().expect("testnet");
    assert_eq!(test.consensus().difficulty_adjustment_interval(), 16);
}
