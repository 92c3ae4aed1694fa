//! Storkey Learning
//!
//! The Storkey rule folds patterns into the weight matrix one at a time,
//! correcting the plain outer-product term by each unit's local field under
//! the weights accumulated so far:
//!
//! `w_ij += (1/n) (p_i p_j - p_i h_j - h_i p_j)`
//!
//! `h_i = Σ_{k≠i,j} w_ik p_k`
//!
//! Subtracting the field terms cancels crosstalk between the new pattern
//! and everything already stored, which buys roughly `n/√(2 ln n)` usable
//! patterns against the outer-product rule's `n/(2 ln n)`.
//!
//! The fold is sequential: pattern p's field terms see the weights left by
//! every previously folded pattern, never p's own update in progress. One
//! consequence is that the final matrix depends on insertion order once
//! three or more patterns are stored (any two patterns folded into a zero
//! matrix commute).
//!
//! ## References
//!
//! - Storkey, A. (1997). *Increasing the capacity of a Hopfield network
//!   without sacrificing functionality*

use crate::error::{EngramError, Result};
use crate::network::{to_bipolar, AssociativeMemory};

/// Trainer that (re)computes a network's weights with the Storkey rule.
///
/// The trainer borrows its network for the duration of training: patterns
/// are accumulated with [`add_pattern`](Self::add_pattern), then
/// [`compute_weights`](Self::compute_weights) rebuilds the whole matrix
/// from the accumulated set. Dropping the trainer releases the network for
/// probing.
pub struct StorkeyTrainer<'a> {
	memory: &'a mut AssociativeMemory,
	/// Accumulated training patterns, in insertion order
	patterns: Vec<Vec<f64>>,
}

impl<'a> StorkeyTrainer<'a> {
	/// Bind a trainer to a network.
	#[must_use]
	pub fn new(memory: &'a mut AssociativeMemory) -> Self {
		Self {
			memory,
			patterns: Vec::new(),
		}
	}

	/// Append a pattern to the training set.
	///
	/// Pure bookkeeping: the weight matrix is untouched until
	/// [`compute_weights`](Self::compute_weights) runs. Input values are
	/// coerced by the bipolar convention (above zero maps to `+1`,
	/// everything else to `-1`).
	///
	/// # Errors
	///
	/// Returns [`EngramError::PatternLength`] if the pattern length does
	/// not match the network size.
	pub fn add_pattern(&mut self, pattern: &[f64]) -> Result<()> {
		if pattern.len() != self.memory.size() {
			return Err(EngramError::PatternLength {
				expected: self.memory.size(),
				actual: pattern.len(),
			});
		}

		self.patterns.push(to_bipolar(pattern));
		Ok(())
	}

	/// Number of accumulated patterns.
	#[must_use]
	pub fn pattern_count(&self) -> usize {
		self.patterns.len()
	}

	/// Recompute the entire weight matrix from the accumulated pattern set.
	///
	/// The matrix is zeroed and every pattern is folded back in, in
	/// insertion order, so calling this twice with the same pattern set
	/// yields the same matrix. The result is symmetric with a zero
	/// diagonal.
	pub fn compute_weights(&mut self) {
		self.memory.clear_weights();
		for pattern in &self.patterns {
			fold_pattern(&mut *self.memory, pattern);
		}
	}
}

/// Fold one pattern into the weight matrix.
///
/// Local fields are taken against the matrix as it stood before this fold.
/// Each unordered pair's entry is written exactly once and its pair field
/// reads only precomputed full fields plus that entry, so updating in
/// place is equivalent to accumulating a delta matrix and applying it.
fn fold_pattern(memory: &mut AssociativeMemory, pattern: &[f64]) {
	let n = memory.size();
	#[allow(clippy::cast_precision_loss)]
	let scale = 1.0 / n as f64;

	// Full field of every unit, diagonal included (it is zero). The
	// pair-local field then drops the partner's contribution:
	// h_i^(j) = field_i - w_ij p_j.
	let fields: Vec<f64> = (0..n)
		.map(|i| {
			memory
				.weight_row(i)
				.iter()
				.zip(pattern.iter())
				.fold(0.0, |acc, (&w, &p)| w.mul_add(p, acc))
		})
		.collect();

	for i in 0..n {
		for j in (i + 1)..n {
			let w = memory.weight(i, j);
			let h_i = w.mul_add(-pattern[j], fields[i]);
			let h_j = w.mul_add(-pattern[i], fields[j]);

			let hebbian = pattern[i] * pattern[j];
			let crosstalk = pattern[i].mul_add(h_j, h_i * pattern[j]);
			let updated = scale.mul_add(hebbian - crosstalk, w);

			memory.set_weight(i, j, updated);
			memory.set_weight(j, i, updated);
		}
	}
}
