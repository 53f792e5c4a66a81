#![no_main]

use libfuzzer_sys::fuzz_target;
use odan_chainparams::identity::{check_signet_challenge, signet_message_start};
use odan_chainparams::{ChainParams, SigNetOptions};

// Arbitrary challenge bytes either build a signet whose magic is derived
// from them, or fail with a signet-challenge error. Never panic.
fuzz_target!(|data: &[u8]| {
    let opts = SigNetOptions {
        challenge: Some(data.to_vec()),
        seeds: None,
    };
    match ChainParams::signet(&opts) {
        Ok(p) => {
            if p.message_start() != signet_message_start(data) {
                panic!("magic not derived from challenge");
            }
        }
        Err(e) => {
            if check_signet_challenge(data).is_ok() {
                panic!("valid challenge rejected: {e}");
            }
        }
    }
});
