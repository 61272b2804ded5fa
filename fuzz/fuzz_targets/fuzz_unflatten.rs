#![no_main]
use libfuzzer_sys::fuzz_target;
use keyflat::{Error, FlatMap, Options, unflatten};
use serde_json::Value;

fuzz_target!(|entries: Vec<(String, Option<i64>)>| {
    let mut flat = FlatMap::new();
    for (k, v) in entries {
        flat.insert(k, v.map(Value::from).unwrap_or(Value::Null));
    }

    let lenient = Options::default();
    match unflatten(&flat, &lenient) {
        Ok(Value::Object(_)) => {}
        Ok(other) => panic!("root must be an object, got {}", other),
        Err(Error::PathTooDeep { .. }) => {}
        Err(e) => panic!("non-strict unflatten failed: {}", e),
    }

    // Strict mode may report conflicts but must not panic
    let _ = unflatten(&flat, &lenient.clone().strict(true));
});
