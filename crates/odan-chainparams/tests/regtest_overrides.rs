use odan_chainparams::{
    create_chain_params, BuriedDeployment, ChainOptions, ChainParams, ChainType, Deployment,
    DeploymentPos, ErrorCode, NetworkConfig, ParamsError, RegTestOptions,
};

fn regtest_with(cfg_json: &str) -> Result<ChainParams, ParamsError> {
    let cfg = NetworkConfig::from_json(cfg_json)?;
    create_chain_params(cfg.chain, &cfg.chain_options()?)
}

#[test]
fn segwit_height_override() {
    let p = regtest_with(r#"{"chain":"regtest","test_activation_heights":["segwit@10"]}"#)
        .expect("regtest");
    let segwit = Deployment::Buried(BuriedDeployment::Segwit);
    assert!(!p.is_active(segwit, 9, &[]).unwrap());
    assert!(p.is_active(segwit, 10, &[]).unwrap());
    assert!(p.is_active(segwit, 11, &[]).unwrap());
}

#[test]
fn default_regtest_heights() {
    let p = create_chain_params(ChainType::Regtest, &ChainOptions::default()).unwrap();
    let c = p.consensus();
    assert_eq!(c.deployment_height(BuriedDeployment::Segwit), 0);
    assert_eq!(c.deployment_height(BuriedDeployment::HeightInCb), 1);
    assert!(!c.deployment_active_at(BuriedDeployment::Csv, 0));
    assert!(c.deployment_active_at(BuriedDeployment::Csv, 1));
    assert_eq!(p.policy().prune_after_height, 1000);
}

#[test]
fn vbparams_override_makes_taproot_signal() {
    let p = regtest_with(
        r#"{"chain":"regtest","fastprune":true,"vbparams":["taproot:0:no_timeout"]}"#,
    )
    .expect("regtest");
    assert_eq!(p.policy().prune_after_height, 100);
    let taproot = Deployment::Signaled(DeploymentPos::Taproot);
    // No longer always active: the first window is Defined.
    assert!(!p.is_active(taproot, 0, &[]).unwrap());
}

#[test]
fn unknown_deployment_override_rejected() {
    let err = regtest_with(r#"{"chain":"regtest","test_activation_heights":["qip9@5"]}"#)
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ParamsErrUnknownDeployment);
    assert!(err.msg.contains("qip9@5"));

    let err = regtest_with(r#"{"chain":"regtest","vbparams":["segwit:0:1"]}"#).unwrap_err();
    assert_eq!(err.code, ErrorCode::ParamsErrUnknownDeployment);
}

#[test]
fn negative_override_rejected() {
    let err = regtest_with(r#"{"chain":"regtest","test_activation_heights":["csv@-5"]}"#)
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ParamsErrNegativeHeight);
    assert!(err.msg.contains("csv@-5"));

    let opts = ChainOptions {
        regtest: RegTestOptions {
            activation_heights: vec![(BuriedDeployment::Cltv, -1)],
            ..RegTestOptions::default()
        },
        ..ChainOptions::default()
    };
    let err = create_chain_params(ChainType::Regtest, &opts).unwrap_err();
    assert_eq!(err.code, ErrorCode::ParamsErrNegativeHeight);
}

#[test]
fn regtest_options_ignored_elsewhere() {
    let opts = ChainOptions {
        regtest: RegTestOptions {
            activation_heights: vec![(BuriedDeployment::Segwit, 500)],
            ..RegTestOptions::default()
        },
        ..ChainOptions::default()
    };
    let p = create_chain_params(ChainType::Main, &opts).unwrap();
    assert_eq!(p.consensus().deployment_height(BuriedDeployment::Segwit), 0);
}

#[test]
fn unittest_inherits_overrides() {
    let p = regtest_with(r#"{"chain":"unittest","test_activation_heights":["segwit@10"]}"#)
        .expect("unittest");
    assert_eq!(p.consensus().deployment_height(BuriedDeployment::Segwit), 10);
    // The patch still wins for the heights it sets.
    assert_eq!(
        p.consensus().deployment_height(BuriedDeployment::HeightInCb),
        100_000_000
    );
}
