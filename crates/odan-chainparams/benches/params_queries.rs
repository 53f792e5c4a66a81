use criterion::{black_box, criterion_group, criterion_main, Criterion};

use odan_chainparams::constants::VERSIONBITS_TOP_BITS;
use odan_chainparams::{
    create_chain_params, BlockSignal, ChainOptions, ChainType, Deployment, DeploymentPos,
    NetworkConfig,
};

fn bench_subsidy(c: &mut Criterion) {
    let p = create_chain_params(ChainType::Main, &ChainOptions::default()).expect("main");
    c.bench_function("block_subsidy_table", |b| {
        b.iter(|| p.block_subsidy(black_box(1_000_000)))
    });
    c.bench_function("block_subsidy_beyond_table", |b| {
        b.iter(|| p.block_subsidy(black_box(210_240 * 150)))
    });
}

fn bench_versionbits(c: &mut Criterion) {
    let cfg = NetworkConfig::from_json(r#"{"chain":"regtest","vbparams":["taproot:0:no_timeout"]}"#)
        .expect("config");
    let p = create_chain_params(cfg.chain, &cfg.chain_options().expect("options")).expect("regtest");
    let history: Vec<BlockSignal> = (0..144 * 20)
        .map(|h| BlockSignal {
            version: VERSIONBITS_TOP_BITS | (1 << 2),
            median_time_past: 1_000 + h,
        })
        .collect();
    let taproot = Deployment::Signaled(DeploymentPos::Taproot);
    c.bench_function("is_active_signaled_20_windows", |b| {
        b.iter(|| p.is_active(taproot, black_box(144 * 20), &history))
    });
}

fn bench_construction(c: &mut Criterion) {
    c.bench_function("create_chain_params_main", |b| {
        b.iter(|| create_chain_params(black_box(ChainType::Main), &ChainOptions::default()))
    });
}

criterion_group!(benches, bench_subsidy, bench_versionbits, bench_construction);
criterion_main!(benches);
