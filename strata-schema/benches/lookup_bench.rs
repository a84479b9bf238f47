//! Lookup cost on a wide table: by name, by id, and through a reload.

#![forbid(unsafe_code)]

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use rand::{Rng, SeedableRng, rngs::StdRng};

use strata_schema::TableDescriptor;

const N_GROUPS: usize = 16;
const N_FAMILIES: usize = 4_096;

fn wide_table() -> TableDescriptor {
    let mut table = TableDescriptor::new("wide", false).expect("table");
    for g in 0..N_GROUPS {
        table.add_locality_group(&format!("lg_{g}")).expect("lg");
    }
    for f in 0..N_FAMILIES {
        let lg = format!("lg_{}", f % N_GROUPS);
        table.add_column_family(&format!("cf_{f}"), &lg).expect("cf");
    }
    table
}

fn bench_lookups(c: &mut Criterion) {
    let table = wide_table();
    let mut rng = StdRng::seed_from_u64(0xC0FF_EE00_DADA_BEEF);
    let names: Vec<String> = (0..1_024)
        .map(|_| format!("cf_{}", rng.random_range(0..N_FAMILIES)))
        .collect();
    let ids: Vec<u32> = (0..1_024)
        .map(|_| rng.random_range(0..N_FAMILIES as u32))
        .collect();

    c.bench_function("column_family/by_name", |b| {
        b.iter(|| {
            for name in &names {
                black_box(table.column_family_by_name(black_box(name)));
            }
        })
    });

    c.bench_function("column_family/by_id", |b| {
        b.iter(|| {
            for id in &ids {
                black_box(table.column_family(black_box(*id)));
            }
        })
    });

    let bytes = table.encode();
    c.bench_function("table/decode", |b| {
        b.iter(|| black_box(TableDescriptor::decode(black_box(&bytes)).expect("decode")))
    });
}

criterion_group!(benches, bench_lookups);
criterion_main!(benches);
