#![no_main]
use libfuzzer_sys::{arbitrary, fuzz_target};
use keyflat::{IndexStyle, Options, flatten_value, unflatten};
use serde_json::{Number, Value};
use arbitrary::Arbitrary;

const MAX_DEPTH: usize = 6;
const MAX_ARRAY_SIZE: usize = 12;
const MAX_OBJECT_SIZE: usize = 12;

#[derive(Arbitrary, Debug)]
struct FuzzValue {
    choice: u8,
}

impl FuzzValue {
    // Keys never contain the delimiter or look like index tokens, and
    // containers are never empty, so every tree must survive a round trip.
    fn to_json_value(&self, u: &mut arbitrary::Unstructured, depth: usize) -> arbitrary::Result<Value> {
        if depth >= MAX_DEPTH {
            return Ok(Value::Null);
        }

        Ok(match self.choice % 8 {
            0 => Value::Null,
            1 => Value::Bool(u.arbitrary()?),
            2 => Value::Number(Number::from(u.arbitrary::<i64>()?)),
            3 => Value::String(u.arbitrary()?),
            4 | 5 => {
                let size = u.int_in_range(1..=MAX_ARRAY_SIZE)?;
                let mut arr = Vec::with_capacity(size);
                for _ in 0..size {
                    let fv: FuzzValue = u.arbitrary()?;
                    arr.push(fv.to_json_value(u, depth + 1)?);
                }
                Value::Array(arr)
            }
            _ => object(u, depth)?,
        })
    }
}

fn object(u: &mut arbitrary::Unstructured, depth: usize) -> arbitrary::Result<Value> {
    let size = u.int_in_range(1..=MAX_OBJECT_SIZE)?;
    let mut obj = serde_json::Map::new();
    for _ in 0..size {
        let key = format!("k{}", u.arbitrary::<u8>()?);
        let fv: FuzzValue = u.arbitrary()?;
        obj.insert(key, fv.to_json_value(u, depth + 1)?);
    }
    Ok(Value::Object(obj))
}

fuzz_target!(|data: &[u8]| {
    let mut u = arbitrary::Unstructured::new(data);
    let Ok(value) = object(&mut u, 0) else { return };
    let bare: bool = u.arbitrary().unwrap_or(false);
    let max_depth: Option<u8> = u.arbitrary().unwrap_or(None);

    let opts = Options::default()
        .with_index_style(if bare { IndexStyle::Bare } else { IndexStyle::Bracketed })
        .with_max_depth(max_depth.map(usize::from));

    let flat = flatten_value(&value, &opts).unwrap();
    let back = unflatten(&flat, &opts).unwrap();
    if back != value {
        panic!(
            "Roundtrip mismatch!\nOriginal: {}\nFlat: {}\nUnflattened: {}",
            serde_json::to_string_pretty(&value).unwrap(),
            serde_json::to_string_pretty(&Value::Object(flat)).unwrap(),
            serde_json::to_string_pretty(&back).unwrap()
        );
    }
});
