//! Glyph Pattern Recall Example
//!
//! Stores five 10×10 glyph grids, then probes the network twice: once with
//! the stored grids themselves and once with corrupted or partial versions,
//! printing each probe next to the state the network settles into.
//!
//! Glyph handling lives here, not in the core: the engine only ever sees
//! bipolar vectors.
//!
//! Run with: `cargo run --example pattern_recall`

#![allow(clippy::expect_used)] // Fine in examples

use engram_core::{AssociativeMemory, StorkeyTrainer};

const SIDE: usize = 10;

/// The network will learn these grids.
const STORED: [[&str; SIDE]; 5] = [
	[
		"O O O O O ",
		" O O O O O",
		"O O O O O ",
		" O O O O O",
		"O O O O O ",
		" O O O O O",
		"O O O O O ",
		" O O O O O",
		"O O O O O ",
		" O O O O O",
	],
	[
		"OO  OO  OO",
		"OO  OO  OO",
		"  OO  OO  ",
		"  OO  OO  ",
		"OO  OO  OO",
		"OO  OO  OO",
		"  OO  OO  ",
		"  OO  OO  ",
		"OO  OO  OO",
		"OO  OO  OO",
	],
	[
		"OOOOO     ",
		"OOOOO     ",
		"OOOOO     ",
		"OOOOO     ",
		"OOOOO     ",
		"     OOOOO",
		"     OOOOO",
		"     OOOOO",
		"     OOOOO",
		"     OOOOO",
	],
	[
		"O  O  O  O",
		" O  O  O  ",
		"  O  O  O ",
		"O  O  O  O",
		" O  O  O  ",
		"  O  O  O ",
		"O  O  O  O",
		" O  O  O  ",
		"  O  O  O ",
		"O  O  O  O",
	],
	[
		"OOOOOOOOOO",
		"O        O",
		"O OOOOOO O",
		"O O    O O",
		"O O OO O O",
		"O O OO O O",
		"O O    O O",
		"O OOOOOO O",
		"O        O",
		"OOOOOOOOOO",
	],
];

/// Corrupted and partial versions of the stored grids, to see which basin
/// each one falls into.
const PROBES: [[&str; SIDE]; 5] = [
	[
		"          ",
		"          ",
		"          ",
		"          ",
		"          ",
		" O O O O O",
		"O O O O O ",
		" O O O O O",
		"O O O O O ",
		" O O O O O",
	],
	[
		"OOO O    O",
		" O  OOO OO",
		"  O O OO O",
		" OOO   O  ",
		"OO  O  OOO",
		" O OOO   O",
		"O OO  O  O",
		"   O OOO  ",
		"OO OOO  O ",
		" O  O  OOO",
	],
	[
		"OOOOO     ",
		"O   O OOO ",
		"O   O OOO ",
		"O   O OOO ",
		"OOOOO     ",
		"     OOOOO",
		" OOO O   O",
		" OOO O   O",
		" OOO O   O",
		"     OOOOO",
	],
	[
		"O  OOOO  O",
		"OO  OOOO  ",
		"OOO  OOOO ",
		"OOOO  OOOO",
		" OOOO  OOO",
		"  OOOO  OO",
		"O  OOOO  O",
		"OO  OOOO  ",
		"OOO  OOOO ",
		"OOOO  OOOO",
	],
	[
		"OOOOOOOOOO",
		"O        O",
		"O        O",
		"O        O",
		"O   OO   O",
		"O   OO   O",
		"O        O",
		"O        O",
		"O        O",
		"OOOOOOOOOO",
	],
];

/// Flatten a glyph grid into a bipolar vector: `O` is on, space is off.
fn convert(grid: &[&str; SIDE]) -> Vec<f64> {
	grid.iter()
		.flat_map(|row| {
			row.chars()
				.map(|glyph| if glyph == ' ' { -1.0 } else { 1.0 })
		})
		.collect()
}

/// Print two states side by side as glyph grids.
fn display(before: &[f64], after: &[f64]) {
	for row in 0..SIDE {
		let mut line = String::new();
		for col in 0..SIDE {
			line.push(if before[row * SIDE + col] > 0.0 { 'O' } else { ' ' });
		}
		line.push_str("   ->   ");
		for col in 0..SIDE {
			line.push(if after[row * SIDE + col] > 0.0 { 'O' } else { ' ' });
		}
		println!("{line}");
	}
}

/// Probe the network with each grid and show where it settles.
fn evaluate(memory: &mut AssociativeMemory, grids: &[[&str; SIDE]]) {
	for grid in grids {
		let probe = convert(grid);
		memory
			.set_current_state(&probe)
			.expect("probe length matches the network");
		let relaxation = memory
			.run_until_stable(100)
			.expect("budget is nonzero");

		println!(
			"Cycles until stable (max 100): {}, converged: {}",
			relaxation.cycles,
			relaxation.converged()
		);
		display(&probe, memory.current_state());
		println!("----------------------");
	}
}

fn main() {
	println!("=== Glyph Pattern Recall ===\n");

	let mut memory = AssociativeMemory::new(SIDE * SIDE);

	let mut trainer = StorkeyTrainer::new(&mut memory);
	for grid in &STORED {
		trainer
			.add_pattern(&convert(grid))
			.expect("grid is 10x10");
	}
	trainer.compute_weights();

	println!("Stored {} patterns on {} units.\n", STORED.len(), SIDE * SIDE);

	println!("--- Probing with the stored grids ---\n");
	evaluate(&mut memory, &STORED);

	println!("--- Probing with corrupted grids ---\n");
	evaluate(&mut memory, &PROBES);
}
