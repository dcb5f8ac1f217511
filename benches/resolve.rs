//! Name resolution benchmarks.
//!
//! Instance OIDs resolve by stripping trailing arcs until a registered
//! prefix is found, so cost grows with the depth of the unregistered
//! suffix. Misses walk the whole prefix chain and then both fallbacks.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use snmp_inspect::mib::{ModuleStore, Resolver};
use snmp_inspect::table::{RawRow, RawTable, reconstruct};
use snmp_inspect::{MibDatabase, Oid, Value, oid};

/// sysDescr followed by `depth` instance arcs.
fn instance_oid(depth: usize) -> Oid {
    let suffix: Vec<u32> = (0..depth as u32).collect();
    oid!(1, 3, 6, 1, 2, 1, 1, 1).join(&suffix)
}

fn bench_resolve_instances(c: &mut Criterion) {
    let resolver = Resolver::standard();
    let mut group = c.benchmark_group("resolve_instance");

    for depth in [0, 1, 4, 8, 16] {
        let oid = instance_oid(depth);
        group.bench_with_input(BenchmarkId::new("sysDescr", depth), &oid, |b, oid| {
            b.iter(|| black_box(resolver.resolve(oid)))
        });
    }

    group.finish();
}

fn bench_resolve_miss(c: &mut Criterion) {
    let store = ModuleStore::builder()
        .module("EMPTY-MIB", &[("acme", "1.3.6.1.4.1", 99999)])
        .build()
        .unwrap();
    let resolver = Resolver::new(std::sync::Arc::new(store));
    let oid = oid!(1, 3, 6, 1, 2, 1, 2, 2, 1, 10, 42);

    c.bench_function("resolve_miss", |b| {
        b.iter(|| black_box(resolver.display_name(&oid)))
    });
}

fn bench_translate(c: &mut Criterion) {
    let store = ModuleStore::standard();
    let mut group = c.benchmark_group("translate");

    let oid = oid!(1, 3, 6, 1, 2, 1, 2, 2, 1, 10);
    group.bench_function("oid", |b| b.iter(|| black_box(store.translate_oid(&oid))));
    group.bench_function("qualified_path", |b| {
        b.iter(|| black_box(store.translate_path("IF-MIB::ifInOctets.3")))
    });
    group.bench_function("dotted_path", |b| {
        b.iter(|| {
            black_box(store.translate_path(
                "iso.org.dod.internet.mgmt.mib-2.interfaces.ifTable.ifEntry.ifInOctets",
            ))
        })
    });

    group.finish();
}

fn bench_reconstruct(c: &mut Criterion) {
    let resolver = Resolver::standard();
    let base = oid!(1, 3, 6, 1, 2, 1, 2, 2);
    let mut group = c.benchmark_group("reconstruct");

    for rows in [10, 100, 1000] {
        let raw: RawTable = (1..=rows)
            .map(|i| {
                RawRow::new(i.to_string())
                    .with(1, Value::Integer(i))
                    .with(2, format!("eth{i}"))
                    .with(5, Value::Gauge32(1_000_000_000))
                    .with(10, Value::Counter32(i as u32 * 1000))
            })
            .collect();

        group.bench_with_input(BenchmarkId::new("if_table", rows), &raw, |b, raw| {
            b.iter(|| black_box(reconstruct(raw, &base, &resolver)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_resolve_instances,
    bench_resolve_miss,
    bench_translate,
    bench_reconstruct
);
criterion_main!(benches);
