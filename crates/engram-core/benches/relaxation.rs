//! Benchmarks for relaxation
//!
//! Tests performance of:
//! - `run_until_stable` on corrupted probes at increasing network sizes
//! - A single energy evaluation

#![allow(clippy::expect_used)] // Fine in benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use engram_core::{AssociativeMemory, StorkeyTrainer};
use rand::Rng;

/// Generate random bipolar patterns for testing
fn generate_patterns(count: usize, size: usize) -> Vec<Vec<f64>> {
	let mut rng = rand::thread_rng();
	(0..count)
		.map(|_| {
			(0..size)
				.map(|_| if rng.gen::<bool>() { 1.0 } else { -1.0 })
				.collect()
		})
		.collect()
}

/// Flip a handful of units to simulate a noisy probe
fn corrupt(pattern: &[f64], flips: usize) -> Vec<f64> {
	let mut rng = rand::thread_rng();
	let mut probe = pattern.to_vec();
	for _ in 0..flips {
		let unit = rng.gen_range(0..probe.len());
		probe[unit] = -probe[unit];
	}
	probe
}

/// Train a fresh network on the given patterns
fn trained_memory(size: usize, patterns: &[Vec<f64>]) -> AssociativeMemory {
	let mut memory = AssociativeMemory::new(size);
	let mut trainer = StorkeyTrainer::new(&mut memory);
	for pattern in patterns {
		trainer
			.add_pattern(pattern)
			.expect("pattern length matches the network");
	}
	trainer.compute_weights();
	memory
}

fn bench_run_until_stable(c: &mut Criterion) {
	let mut group = c.benchmark_group("run_until_stable");

	for &size in &[64_usize, 128, 256] {
		let patterns = generate_patterns(3, size);
		let mut memory = trained_memory(size, &patterns);
		let probe = corrupt(&patterns[0], size / 10);

		let _ = group.throughput(Throughput::Elements(size as u64));
		let _ = group.bench_with_input(BenchmarkId::from_parameter(size), &size, |bench, _| {
			bench.iter(|| {
				memory
					.set_current_state(black_box(&probe))
					.expect("probe length matches the network");
				memory.run_until_stable(black_box(100)).expect("nonzero budget")
			});
		});
	}

	group.finish();
}

fn bench_energy(c: &mut Criterion) {
	let mut group = c.benchmark_group("energy");

	for &size in &[64_usize, 256] {
		let patterns = generate_patterns(3, size);
		let mut memory = trained_memory(size, &patterns);
		memory
			.set_current_state(&patterns[0])
			.expect("pattern length matches the network");

		let _ = group.bench_with_input(BenchmarkId::from_parameter(size), &size, |bench, _| {
			bench.iter(|| black_box(&memory).energy());
		});
	}

	group.finish();
}

criterion_group!(benches, bench_run_until_stable, bench_energy);
criterion_main!(benches);
