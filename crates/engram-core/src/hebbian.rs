//! Hebbian Learning
//!
//! The outer-product baseline the Storkey rule improves on:
//!
//! `w_ij = (1/P) Σ_μ p_i^μ p_j^μ`
//!
//! Cheap and order-independent, but crosstalk between patterns erodes
//! recall well before the Storkey rule's capacity limit.

use crate::error::{EngramError, Result};
use crate::network::{to_bipolar, AssociativeMemory};

/// Trainer that (re)computes a network's weights with the Hebbian rule.
///
/// Same surface as [`StorkeyTrainer`](crate::StorkeyTrainer): accumulate
/// patterns, then rebuild the matrix on demand.
pub struct HebbianTrainer<'a> {
	memory: &'a mut AssociativeMemory,
	patterns: Vec<Vec<f64>>,
}

impl<'a> HebbianTrainer<'a> {
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
	pub fn compute_weights(&mut self) {
		self.memory.clear_weights();
		if self.patterns.is_empty() {
			return;
		}

		let n = self.memory.size();
		#[allow(clippy::cast_precision_loss)]
		let scale = 1.0 / self.patterns.len() as f64;

		for i in 0..n {
			for j in (i + 1)..n {
				let sum: f64 = self.patterns.iter().map(|p| p[i] * p[j]).sum();
				let w = sum * scale;
				self.memory.set_weight(i, j, w);
				self.memory.set_weight(j, i, w);
			}
		}
	}
}

#[cfg(test)]
#[allow(clippy::float_cmp, clippy::unwrap_used)]
mod tests {
	use super::*;

	#[test]
	fn test_single_pattern_is_outer_product() {
		let pattern = [1.0, -1.0, 1.0, -1.0];
		let mut memory = AssociativeMemory::new(4);
		let mut trainer = HebbianTrainer::new(&mut memory);
		trainer.add_pattern(&pattern).unwrap();
		trainer.compute_weights();

		for i in 0..4 {
			assert_eq!(memory.weight(i, i), 0.0);
			for j in 0..4 {
				if i != j {
					assert_eq!(memory.weight(i, j), pattern[i] * pattern[j]);
				}
			}
		}
	}

	#[test]
	fn test_two_patterns_average() {
		let mut memory = AssociativeMemory::new(4);
		let mut trainer = HebbianTrainer::new(&mut memory);
		trainer.add_pattern(&[1.0, 1.0, -1.0, -1.0]).unwrap();
		trainer.add_pattern(&[1.0, -1.0, 1.0, -1.0]).unwrap();
		trainer.compute_weights();

		// Agreeing pairs average to ±1, disagreeing pairs cancel to 0.
		assert_eq!(memory.weight(0, 1), 0.0);
		assert_eq!(memory.weight(0, 3), -1.0);
		assert_eq!(memory.weight(1, 2), -1.0);
	}

	#[test]
	fn test_corrupted_probe_restored() {
		let pattern = [1.0, -1.0, 1.0, -1.0];
		let mut memory = AssociativeMemory::new(4);
		let mut trainer = HebbianTrainer::new(&mut memory);
		trainer.add_pattern(&pattern).unwrap();
		trainer.compute_weights();

		memory.set_current_state(&[1.0, 1.0, 1.0, -1.0]).unwrap();
		let relaxation = memory.run_until_stable(10).unwrap();

		assert!(relaxation.converged());
		assert_eq!(memory.current_state(), &pattern[..]);
	}

	#[test]
	fn test_add_pattern_length_mismatch() {
		let mut memory = AssociativeMemory::new(4);
		let mut trainer = HebbianTrainer::new(&mut memory);
		assert!(matches!(
			trainer.add_pattern(&[1.0]),
			Err(EngramError::PatternLength { .. })
		));
	}
}
