use criterion::{BatchSize, Criterion, Throughput, criterion_group, criterion_main};
use serde_json::Value;
use std::hint::black_box;

fn json_small() -> Value {
    serde_json::json!({"name": "John", "age": 30, "address": {"city": "New York"}, "hobbies": ["reading", "gaming"]})
}

fn json_rows(rows: usize, keys: usize) -> Value {
    let mut arr = Vec::with_capacity(rows);
    for i in 0..rows {
        let mut obj = serde_json::Map::with_capacity(keys);
        for k in 0..keys {
            obj.insert(format!("k{}", k), Value::from((i + k) as i64));
        }
        arr.push(Value::Object(obj));
    }
    Value::Object(serde_json::Map::from_iter([(String::from("rows"), Value::Array(arr))]))
}

fn json_nested(depth: usize, breadth: usize) -> Value {
    fn rec(d: usize, b: usize) -> Value {
        if d == 0 {
            return Value::from(1);
        }
        let mut m = serde_json::Map::new();
        for i in 0..b {
            m.insert(format!("k{}", i), rec(d - 1, b));
        }
        Value::Object(m)
    }
    rec(depth, breadth)
}

fn datasets() -> Vec<(&'static str, Value)> {
    vec![
        ("small_obj", json_small()),
        ("rows_1k", json_rows(1000, 4)),
        ("nested", json_nested(5, 5)),
    ]
}

pub fn flatten_benchmarks(c: &mut Criterion) {
    let opts = keyflat::Options::default();
    let mut group = c.benchmark_group("flatten");
    for (name, value) in datasets() {
        let bytes = serde_json::to_vec(&value).unwrap();
        group.throughput(Throughput::Bytes(bytes.len() as u64));
        group.bench_function(format!("value::{name}"), |b| {
            b.iter(|| black_box(keyflat::flatten_value(black_box(&value), &opts).unwrap()))
        });
        group.bench_function(format!("slice::{name}"), |b| {
            b.iter(|| black_box(keyflat::flatten_slice(black_box(&bytes), &opts).unwrap()))
        });
    }
    group.finish();
}

pub fn unflatten_benchmarks(c: &mut Criterion) {
    let opts = keyflat::Options::default();
    let mut group = c.benchmark_group("unflatten");
    for (name, value) in datasets() {
        let flat = keyflat::flatten_value(&value, &opts).unwrap();
        group.throughput(Throughput::Elements(flat.len() as u64));
        group.bench_function(format!("map::{name}"), |b| {
            b.iter_batched(
                || flat.clone(),
                |f| black_box(keyflat::unflatten(&f, &opts).unwrap()),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, flatten_benchmarks, unflatten_benchmarks);
criterion_main!(benches);
