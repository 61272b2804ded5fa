#![no_main]
use libfuzzer_sys::fuzz_target;
use keyflat::{Error, Options, flatten_slice, unflatten};

fuzz_target!(|data: &[u8]| {
    let opts = Options::default();
    if let Ok(flat) = flatten_slice(data, &opts) {
        // Non-strict unflatten only refuses keys with too many segments
        match unflatten(&flat, &opts) {
            Ok(_) | Err(Error::PathTooDeep { .. }) => {}
            Err(e) => panic!("unflatten failed on flattened input: {}", e),
        }
    }
});
