// Benchmark for time-slot generation and store reconciliation
// Measures the per-frame work the week grid does

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fuzzy_planner::models::activity::{Activity, SWATCHES};
use fuzzy_planner::models::assignment::Assignment;
use fuzzy_planner::models::schedule::{BlockSize, Day};
use fuzzy_planner::services::assignment::AssignmentStore;
use fuzzy_planner::services::time_slots::time_slots;

fn full_store(block: BlockSize) -> AssignmentStore {
    let mut store = AssignmentStore::new();
    for day in Day::ALL {
        for (i, slot) in time_slots(0, block).enumerate() {
            let color = SWATCHES[i % SWATCHES.len()];
            let name = format!("Activity {}", i % SWATCHES.len());
            store.assign(
                fuzzy_planner::models::assignment::CellKey::new(day, slot.label),
                Assignment::new(name, color, 0),
            );
        }
    }
    store
}

fn catalog() -> Vec<Activity> {
    SWATCHES
        .iter()
        .enumerate()
        .map(|(i, color)| Activity::new(format!("Activity {}", i), color.to_lowercase()))
        .collect()
}

fn bench_slot_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("time_slots");
    for block in BlockSize::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(block.label()), &block, |b, block| {
            b.iter(|| time_slots(black_box(480), *block).count())
        });
    }
    group.finish();
}

fn bench_reconciliation(c: &mut Criterion) {
    let activities = catalog();
    c.bench_function("reconcile_with_catalog_full_week", |b| {
        b.iter_batched(
            || full_store(BlockSize::ThirtyMinutes),
            |mut store| store.reconcile_with_catalog(black_box(&activities)),
            criterion::BatchSize::SmallInput,
        )
    });
    c.bench_function("reconcile_with_fuzziness_full_week", |b| {
        b.iter_batched(
            || full_store(BlockSize::ThirtyMinutes),
            |mut store| store.reconcile_with_fuzziness(black_box(7)),
            criterion::BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_slot_generation, bench_reconciliation);
criterion_main!(benches);
