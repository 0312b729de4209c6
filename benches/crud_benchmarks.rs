use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use osavl_tree::OSAvlSet;
use std::collections::BTreeSet;

const N: usize = 10_000;

// ─── Helper functions to generate key sequences ─────────────────────────────

fn ordered_keys(n: usize) -> Vec<i64> {
    (0..n as i64).collect()
}

fn reverse_ordered_keys(n: usize) -> Vec<i64> {
    (0..n as i64).rev().collect()
}

fn random_keys(n: usize) -> Vec<i64> {
    // Use a simple LCG for deterministic pseudo-random sequence
    let mut keys = Vec::with_capacity(n);
    let mut x: u64 = 12345;
    for _ in 0..n {
        x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
        keys.push((x >> 33) as i64);
    }
    keys
}

// ─── Insert Benchmarks ──────────────────────────────────────────────────────

fn bench_set_insert_ordered(c: &mut Criterion) {
    let mut group = c.benchmark_group("set_insert_ordered");

    group.bench_function(BenchmarkId::new("OSAvlSet", N), |b| {
        b.iter(|| {
            let mut set = OSAvlSet::new();
            for i in 0..N as i64 {
                let _ = set.insert(i);
            }
            set
        });
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter(|| {
            let mut set = BTreeSet::new();
            for i in 0..N as i64 {
                set.insert(i);
            }
            set
        });
    });

    group.finish();
}

fn bench_set_insert_reverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("set_insert_reverse");

    group.bench_function(BenchmarkId::new("OSAvlSet", N), |b| {
        b.iter(|| {
            let mut set = OSAvlSet::new();
            for i in (0..N as i64).rev() {
                let _ = set.insert(i);
            }
            set
        });
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter(|| {
            let mut set = BTreeSet::new();
            for i in (0..N as i64).rev() {
                set.insert(i);
            }
            set
        });
    });

    group.finish();
}

fn bench_set_insert_random(c: &mut Criterion) {
    let keys = random_keys(N);
    let mut group = c.benchmark_group("set_insert_random");

    group.bench_function(BenchmarkId::new("OSAvlSet", N), |b| {
        b.iter(|| {
            let mut set = OSAvlSet::new();
            for &k in &keys {
                let _ = set.insert(k);
            }
            set
        });
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter(|| {
            let mut set = BTreeSet::new();
            for &k in &keys {
                set.insert(k);
            }
            set
        });
    });

    group.finish();
}

// ─── Contains Benchmarks ────────────────────────────────────────────────────

fn bench_set_contains_ordered(c: &mut Criterion) {
    let keys = ordered_keys(N);
    let os_set: OSAvlSet<i64> = keys.iter().copied().collect();
    let bt_set: BTreeSet<i64> = keys.iter().copied().collect();

    let mut group = c.benchmark_group("set_contains_ordered");

    group.bench_function(BenchmarkId::new("OSAvlSet", N), |b| {
        b.iter(|| {
            let mut count = 0usize;
            for &k in &keys {
                if os_set.contains(&k) {
                    count += 1;
                }
            }
            count
        });
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter(|| {
            let mut count = 0usize;
            for &k in &keys {
                if bt_set.contains(&k) {
                    count += 1;
                }
            }
            count
        });
    });

    group.finish();
}

fn bench_set_contains_reverse(c: &mut Criterion) {
    let keys = ordered_keys(N);
    let os_set: OSAvlSet<i64> = keys.iter().copied().collect();
    let bt_set: BTreeSet<i64> = keys.iter().copied().collect();
    let reverse_keys = reverse_ordered_keys(N);

    let mut group = c.benchmark_group("set_contains_reverse");

    group.bench_function(BenchmarkId::new("OSAvlSet", N), |b| {
        b.iter(|| {
            let mut count = 0usize;
            for &k in &reverse_keys {
                if os_set.contains(&k) {
                    count += 1;
                }
            }
            count
        });
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter(|| {
            let mut count = 0usize;
            for &k in &reverse_keys {
                if bt_set.contains(&k) {
                    count += 1;
                }
            }
            count
        });
    });

    group.finish();
}

fn bench_set_contains_random(c: &mut Criterion) {
    let keys = random_keys(N);
    let os_set: OSAvlSet<i64> = keys.iter().copied().collect();
    let bt_set: BTreeSet<i64> = keys.iter().copied().collect();

    let mut group = c.benchmark_group("set_contains_random");

    group.bench_function(BenchmarkId::new("OSAvlSet", N), |b| {
        b.iter(|| {
            let mut count = 0usize;
            for &k in &keys {
                if os_set.contains(&k) {
                    count += 1;
                }
            }
            count
        });
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter(|| {
            let mut count = 0usize;
            for &k in &keys {
                if bt_set.contains(&k) {
                    count += 1;
                }
            }
            count
        });
    });

    group.finish();
}

// ─── Remove Benchmarks ──────────────────────────────────────────────────────

fn bench_set_remove_ordered(c: &mut Criterion) {
    let keys = ordered_keys(N);

    let mut group = c.benchmark_group("set_remove_ordered");

    group.bench_function(BenchmarkId::new("OSAvlSet", N), |b| {
        b.iter_batched(
            || keys.iter().copied().collect::<OSAvlSet<i64>>(),
            |mut set| {
                for &k in &keys {
                    let _ = set.remove(&k);
                }
                set
            },
            criterion::BatchSize::SmallInput,
        );
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter_batched(
            || keys.iter().copied().collect::<BTreeSet<i64>>(),
            |mut set| {
                for &k in &keys {
                    set.remove(&k);
                }
                set
            },
            criterion::BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_set_remove_reverse(c: &mut Criterion) {
    let keys = ordered_keys(N);
    let reverse_keys = reverse_ordered_keys(N);

    let mut group = c.benchmark_group("set_remove_reverse");

    group.bench_function(BenchmarkId::new("OSAvlSet", N), |b| {
        b.iter_batched(
            || keys.iter().copied().collect::<OSAvlSet<i64>>(),
            |mut set| {
                for &k in &reverse_keys {
                    let _ = set.remove(&k);
                }
                set
            },
            criterion::BatchSize::SmallInput,
        );
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter_batched(
            || keys.iter().copied().collect::<BTreeSet<i64>>(),
            |mut set| {
                for &k in &reverse_keys {
                    set.remove(&k);
                }
                set
            },
            criterion::BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_set_remove_random(c: &mut Criterion) {
    let keys = random_keys(N);

    let mut group = c.benchmark_group("set_remove_random");

    group.bench_function(BenchmarkId::new("OSAvlSet", N), |b| {
        b.iter_batched(
            || keys.iter().copied().collect::<OSAvlSet<i64>>(),
            |mut set| {
                for &k in &keys {
                    let _ = set.remove(&k);
                }
                set
            },
            criterion::BatchSize::SmallInput,
        );
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter_batched(
            || keys.iter().copied().collect::<BTreeSet<i64>>(),
            |mut set| {
                for &k in &keys {
                    set.remove(&k);
                }
                set
            },
            criterion::BatchSize::SmallInput,
        );
    });

    group.finish();
}

// ─── Rank Query Benchmarks ──────────────────────────────────────────────────

fn bench_set_kth_order_statistic(c: &mut Criterion) {
    let keys = random_keys(N);
    let os_set: OSAvlSet<i64> = keys.iter().copied().collect();
    let bt_set: BTreeSet<i64> = keys.iter().copied().collect();
    let len = os_set.len();

    let mut group = c.benchmark_group("set_kth_order_statistic");

    group.bench_function(BenchmarkId::new("OSAvlSet", N), |b| {
        b.iter(|| {
            let mut sum = 0i64;
            for rank in (1..=len).step_by(97) {
                if let Ok(&v) = os_set.kth_order_statistic(rank) {
                    sum = sum.wrapping_add(v);
                }
            }
            sum
        });
    });

    // BTreeSet has no rank support; a linear scan is the closest equivalent.
    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter(|| {
            let mut sum = 0i64;
            for rank in (1..=len).step_by(97) {
                if let Some(&v) = bt_set.iter().nth(rank - 1) {
                    sum = sum.wrapping_add(v);
                }
            }
            sum
        });
    });

    group.finish();
}

fn bench_set_count_less_than(c: &mut Criterion) {
    let keys = random_keys(N);
    let os_set: OSAvlSet<i64> = keys.iter().copied().collect();
    let bt_set: BTreeSet<i64> = keys.iter().copied().collect();
    let probes: Vec<i64> = keys.iter().copied().step_by(97).collect();

    let mut group = c.benchmark_group("set_count_less_than");

    group.bench_function(BenchmarkId::new("OSAvlSet", N), |b| {
        b.iter(|| {
            let mut total = 0usize;
            for p in &probes {
                total += os_set.count_less_than(p);
            }
            total
        });
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter(|| {
            let mut total = 0usize;
            for p in &probes {
                total += bt_set.range(..*p).count();
            }
            total
        });
    });

    group.finish();
}

// ─── Criterion Groups ───────────────────────────────────────────────────────

criterion_group!(set_insert_benches, bench_set_insert_ordered, bench_set_insert_reverse, bench_set_insert_random,);

criterion_group!(
    set_contains_benches,
    bench_set_contains_ordered,
    bench_set_contains_reverse,
    bench_set_contains_random,
);

criterion_group!(set_remove_benches, bench_set_remove_ordered, bench_set_remove_reverse, bench_set_remove_random,);

criterion_group!(set_rank_benches, bench_set_kth_order_statistic, bench_set_count_less_than,);

criterion_main!(set_insert_benches, set_contains_benches, set_remove_benches, set_rank_benches,);
