#![no_main]

use libfuzzer_sys::fuzz_target;
use odan_chainparams::options::{parse_activation_height, parse_vbparams};

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok((_, height)) = parse_activation_height(s) {
        if height < 0 {
            panic!("negative height accepted: {s:?}");
        }
    }
    if let Ok((_, p)) = parse_vbparams(s) {
        if p.min_activation_height < 0 {
            panic!("negative min_activation_height accepted: {s:?}");
        }
    }
});
