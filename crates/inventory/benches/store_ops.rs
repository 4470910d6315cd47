use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use inquisitor_inventory::{FieldSelector, FieldValue, InventoryStore};

fn bench_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("append");

    for size in [100usize, 1_000, 10_000] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                let mut store = InventoryStore::new();
                for i in 0..size {
                    store
                        .append(black_box("12345"), black_box(i as i64), black_box(9.99))
                        .unwrap();
                }
                store
            });
        });
    }

    group.finish();
}

fn bench_append_then_remove(c: &mut Criterion) {
    c.bench_function("append_then_remove_last", |b| {
        let mut store = InventoryStore::new();
        for i in 0..1_000 {
            store.append("54321", i, 1.0).unwrap();
        }
        b.iter(|| {
            store.append(black_box("00001"), 1, 1.0).unwrap();
            store.remove_last().unwrap();
        });
    });
}

fn bench_edit(c: &mut Criterion) {
    c.bench_function("edit_quantity", |b| {
        let mut store = InventoryStore::new();
        for i in 0..1_000 {
            store.append("54321", i, 1.0).unwrap();
        }
        let mut n = 0i64;
        b.iter(|| {
            n += 1;
            store
                .edit_field(
                    black_box(500),
                    FieldSelector::QuantityOnHand,
                    FieldValue::Quantity(n),
                )
                .unwrap();
        });
    });
}

criterion_group!(benches, bench_append, bench_append_then_remove, bench_edit);
criterion_main!(benches);
