#![no_main]

use libfuzzer_sys::fuzz_target;
use odan_chainparams::versionbits::{threshold_state, BlockSignal, SignalWindow, ThresholdState};
use odan_chainparams::{Bip9Deployment, DeploymentStart, DeploymentTimeout};

fn rank(s: ThresholdState) -> u8 {
    match s {
        ThresholdState::Defined => 0,
        ThresholdState::Started => 1,
        ThresholdState::LockedIn => 2,
        ThresholdState::Active | ThresholdState::Failed => 3,
    }
}

// Each byte is one block: low bit signals, the rest advances MTP. The state
// seen at successive window boundaries must only move forward.
fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }
    let period = 1 + (data[0] % 16) as u64;
    let threshold = (data[1] as u64) % (period + 1);
    let d = Bip9Deployment {
        bit: 28,
        start: DeploymentStart::Time(data[2] as i64 * 4),
        timeout: if data[3] & 1 == 0 {
            DeploymentTimeout::NoTimeout
        } else {
            DeploymentTimeout::Time(data[3] as i64 * 8)
        },
        min_activation_height: (data[3] >> 1) as u64,
    };
    let window = SignalWindow { period, threshold };

    let mut mtp = 0i64;
    let history: Vec<BlockSignal> = data[4..]
        .iter()
        .map(|b| {
            mtp += (b >> 1) as i64;
            BlockSignal {
                version: if b & 1 == 1 { 0x3000_0000 } else { 0x2000_0000 },
                median_time_past: mtp,
            }
        })
        .collect();

    let mut prev: Option<ThresholdState> = None;
    let mut height = 0u64;
    while height <= history.len() as u64 {
        let ev = threshold_state(&d, &window, height, &history).unwrap();
        if let Some(p) = prev {
            if rank(ev.state) < rank(p) || (p.is_terminal() && ev.state != p) {
                panic!("state went {p:?} -> {:?} at {height}", ev.state);
            }
        }
        prev = Some(ev.state);
        height += period;
    }
});
