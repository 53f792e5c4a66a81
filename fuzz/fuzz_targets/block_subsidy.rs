#![no_main]

use libfuzzer_sys::fuzz_target;
use odan_chainparams::subsidy::{compute_fixed_point_decay, SubsidyPolicy};

// Table lookup and on-demand decay must agree, and the schedule must never
// grow from one epoch to the next.
fuzz_target!(|data: &[u8]| {
    if data.len() < 24 {
        return;
    }

    let initial = u64::from_le_bytes(data[..8].try_into().unwrap()) % (1u64 << 50);
    let decay = 100_000_000 + u64::from_le_bytes(data[8..16].try_into().unwrap()) % 100_000_000;
    let epoch = u64::from_le_bytes(data[16..24].try_into().unwrap()) % 256;

    let policy = SubsidyPolicy::new(initial, decay, 1, None).unwrap();
    let a = policy.epoch_subsidy(epoch);
    let b = compute_fixed_point_decay(initial, decay, epoch);
    if a != b {
        panic!("epoch {epoch}: table {a} != iterative {b}");
    }
    let next = policy.epoch_subsidy(epoch + 1);
    if next > a {
        panic!("epoch {epoch}: subsidy grew {a} -> {next}");
    }
});
