/*!
 * Scheduler Benchmarks
 *
 * Compare FCFS and round-robin run cost across table sizes and quanta
 */

use cpu_sched_sim::{Policy, ProcessTable};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn make_bursts(n: usize) -> Vec<i64> {
    (0..n).map(|i| (i as i64 * 7919) % 97 + 1).collect()
}

fn bench_fcfs(c: &mut Criterion) {
    let mut group = c.benchmark_group("fcfs");

    for n in [8usize, 64, 512] {
        let bursts = make_bursts(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &bursts, |b, bursts| {
            b.iter(|| {
                let mut table = ProcessTable::from_bursts(bursts).unwrap();
                black_box(Policy::Fcfs.run(&mut table))
            });
        });
    }

    group.finish();
}

fn bench_round_robin(c: &mut Criterion) {
    let mut group = c.benchmark_group("round_robin");
    let bursts = make_bursts(64);

    for quantum in [1i64, 4, 16] {
        let policy = Policy::round_robin(quantum).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(quantum), &policy, |b, policy| {
            b.iter(|| {
                let mut table = ProcessTable::from_bursts(&bursts).unwrap();
                black_box(policy.run(&mut table))
            });
        });
    }

    group.finish();
}

fn bench_simulate_timeline(c: &mut Criterion) {
    let bursts = make_bursts(64);
    let policy = Policy::round_robin(2).unwrap();

    c.bench_function("simulate_with_timeline", |b| {
        b.iter(|| {
            let mut table = ProcessTable::from_bursts(&bursts).unwrap();
            black_box(policy.simulate(&mut table))
        });
    });
}

criterion_group!(benches, bench_fcfs, bench_round_robin, bench_simulate_timeline);

criterion_main!(benches);
