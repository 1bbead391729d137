//! Sorting a large generated set of records by date and by plate letter.

#![allow(missing_docs)]

use carlog::RecordCollection;
use criterion::{criterion_group, criterion_main, BatchSize, Criterion};

/// Generates records with scattered dates and plates
fn generate_lines(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            let year = 1990 + (i * 7919) % 35;
            let month = 1 + (i * 31) % 12;
            let day = 1 + (i * 17) % 28;
            let letter = char::from(b'A' + u8::try_from((i * 13) % 26).unwrap());
            format!("{year:04}-{month:02}-{day:02} {letter}{:03}BC", i % 1000)
        })
        .collect()
}

fn sort_records(c: &mut Criterion) {
    let mut records = RecordCollection::new();
    records.extract(generate_lines(10_000));

    c.bench_function("sort by date", |b| {
        b.iter_batched(
            || records.clone(),
            |mut records| records.sort_by_date(),
            BatchSize::SmallInput,
        );
    });

    c.bench_function("sort by plate letter", |b| {
        b.iter_batched(
            || records.clone(),
            |mut records| records.sort_by_plate_letter(),
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, sort_records);
criterion_main!(benches);
