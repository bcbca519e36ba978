use criterion::{black_box, criterion_group, criterion_main, Criterion};
use jsonc_par::parse_owned;

fn bench_parse(c: &mut Criterion) {
    let input = br#"{"name":"widget","count":42,"tags":["a","b","c"],"price":19.99,"active":true}"#;
    c.bench_function("parse_small_object", |b| {
        b.iter(|| parse_owned(black_box(input)).unwrap())
    });
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
