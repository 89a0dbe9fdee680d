use criterion::{criterion_group, criterion_main, Criterion};
use treeson::parser::parse;
use treeson::stringify::stringify;
use treeson::value::{Array, Object, Value};

fn create_json() -> String {
    let mut root = Object::new();
    for i in 0..100i64 {
        let entry = root
            .insert(format!("entry {i}"), Value::from(Object::new()))
            .object_mut();
        entry.insert("index", Value::Integer(i));
        entry.insert("weight", Value::Number(i as f64 + 0.5));
        entry.insert("label", Value::from("text with \"quotes\" and \u{20AC}"));

        let tags = entry.insert("tags", Value::from(Array::new())).array_mut();
        for tag in 0..10 {
            tags.push(Value::from(format!("tag-{tag}")));
        }
    }
    stringify(&Value::from(root))
}

fn bench_parse(c: &mut Criterion) {
    let json = create_json();
    c.bench_function("parse", |b| {
        b.iter(|| parse(&json).unwrap());
    });
}

fn bench_stringify(c: &mut Criterion) {
    let value = parse(&create_json()).unwrap();
    c.bench_function("stringify", |b| {
        b.iter(|| stringify(&value));
    });
}

fn bench_round_trip(c: &mut Criterion) {
    let json = create_json();
    c.bench_function("round-trip", |b| {
        b.iter(|| stringify(&parse(&json).unwrap()));
    });
}

criterion_group!(benches, bench_parse, bench_stringify, bench_round_trip);
criterion_main!(benches);
