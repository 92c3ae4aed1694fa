//! Network State and Relaxation
//!
//! A fully-connected recurrent network over bipolar units. Stored patterns
//! live in a symmetric weight matrix with a zero diagonal; recall walks the
//! state downhill in the energy landscape
//!
//! `E(s) = -½ Σ_i Σ_j w_ij s_i s_j`
//!
//! until a full sweep changes no unit (a fixed point) or the sweep budget
//! runs out.
//!
//! Relaxation is asynchronous and deterministic: units are visited in
//! ascending index order, each unit takes the sign of its local field
//!
//! `s_i ← sign(Σ_j w_ij s_j)`
//!
//! and a zero field keeps the unit's previous value. Both choices affect
//! which fixed point an ambiguous probe falls into, so they are fixed
//! rather than left to chance.

use serde::{Deserialize, Serialize};

use crate::error::{EngramError, Result};

/// How a relaxation run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RelaxationOutcome {
	/// A full sweep changed no unit; the state is a fixed point.
	Converged,
	/// The sweep budget ran out before a fixed point was reached.
	///
	/// The last (possibly oscillating) state is left in place. Whether this
	/// counts as failure is the caller's call.
	BudgetExhausted,
}

/// Result of a relaxation run.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Relaxation {
	/// Number of full sweeps performed (1..=`max_cycles`)
	pub cycles: usize,
	/// Whether the run reached a fixed point
	pub outcome: RelaxationOutcome,
}

impl Relaxation {
	/// True if the run ended on a fixed point.
	#[inline]
	#[must_use]
	pub fn converged(&self) -> bool {
		self.outcome == RelaxationOutcome::Converged
	}
}

/// Coerce a sequence of values to the bipolar convention.
///
/// Anything above zero maps to `+1.0`, everything else to `-1.0`. This is
/// the single interpretation of "on"/"off" used throughout the crate.
#[must_use]
pub fn to_bipolar(values: &[f64]) -> Vec<f64> {
	values
		.iter()
		.map(|&v| if v > 0.0 { 1.0 } else { -1.0 })
		.collect()
}

/// A fully-connected associative memory over bipolar units.
///
/// The network owns its weight matrix and state vector exclusively. Weights
/// change only through a trainer's recomputation or explicit
/// [`set_weight`](Self::set_weight) calls; state changes only through
/// [`set_current_state`](Self::set_current_state) and relaxation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AssociativeMemory {
	/// Number of units, fixed at construction
	size: usize,
	/// Row-major `size × size` weight matrix
	weights: Vec<f64>,
	/// Unit states, each exactly ±1 between relaxation steps
	state: Vec<f64>,
}

impl AssociativeMemory {
	/// Create a network of `size` units with zero weights.
	///
	/// All units start at `-1`.
	#[must_use]
	pub fn new(size: usize) -> Self {
		Self {
			size,
			weights: vec![0.0; size * size],
			state: vec![-1.0; size],
		}
	}

	/// Number of units.
	#[inline]
	#[must_use]
	pub const fn size(&self) -> usize {
		self.size
	}

	/// Weight between two units.
	///
	/// # Panics
	///
	/// Panics if either index is out of bounds.
	#[inline]
	#[must_use]
	pub fn weight(&self, from: usize, to: usize) -> f64 {
		self.weights[from * self.size + to]
	}

	/// Assign a single weight.
	///
	/// Trainers recompute the whole matrix; this is the escape hatch for
	/// callers that bring their own weights. Nothing here enforces symmetry,
	/// and an asymmetric matrix can oscillate forever under relaxation,
	/// which is exactly what the sweep budget is for.
	///
	/// # Panics
	///
	/// Panics if either index is out of bounds.
	#[inline]
	pub fn set_weight(&mut self, from: usize, to: usize, value: f64) {
		self.weights[from * self.size + to] = value;
	}

	/// One row of the weight matrix: every weight feeding `neuron`.
	///
	/// # Panics
	///
	/// Panics if `neuron` is out of bounds.
	#[must_use]
	pub fn weight_row(&self, neuron: usize) -> &[f64] {
		&self.weights[neuron * self.size..(neuron + 1) * self.size]
	}

	/// The full weight matrix, row-major.
	#[must_use]
	pub fn weights(&self) -> &[f64] {
		&self.weights
	}

	/// Zero every weight.
	pub fn clear_weights(&mut self) {
		self.weights.fill(0.0);
	}

	/// The current state vector. Entries are exactly ±1.
	#[must_use]
	pub fn current_state(&self) -> &[f64] {
		&self.state
	}

	/// Replace the state wholesale with a probe pattern.
	///
	/// Input values are coerced by the bipolar convention: above zero maps
	/// to `+1`, everything else to `-1`.
	///
	/// # Errors
	///
	/// Returns [`EngramError::PatternLength`] if the pattern length does not
	/// match the network size.
	pub fn set_current_state(&mut self, pattern: &[f64]) -> Result<()> {
		if pattern.len() != self.size {
			return Err(EngramError::PatternLength {
				expected: self.size,
				actual: pattern.len(),
			});
		}

		for (unit, &value) in self.state.iter_mut().zip(pattern.iter()) {
			*unit = if value > 0.0 { 1.0 } else { -1.0 };
		}

		Ok(())
	}

	/// Relax the network until it reaches a fixed point or the sweep budget
	/// runs out.
	///
	/// Each cycle is one full asynchronous sweep: units are updated in
	/// ascending index order and later units in the same sweep see the
	/// earlier updates. A sweep that changes nothing means no single-unit
	/// update can lower the energy further, so the loop stops there.
	///
	/// Returns the number of sweeps performed and whether the run converged.
	/// Intermediate states are not observable; only the final state remains.
	///
	/// # Errors
	///
	/// Returns [`EngramError::ZeroCycleBudget`] if `max_cycles` is zero.
	pub fn run_until_stable(&mut self, max_cycles: usize) -> Result<Relaxation> {
		if max_cycles == 0 {
			return Err(EngramError::ZeroCycleBudget);
		}

		let mut previous = self.state.clone();

		for cycle in 1..=max_cycles {
			self.sweep();

			// Entries are exactly ±1, so equality is exact.
			if self.state == previous {
				return Ok(Relaxation {
					cycles: cycle,
					outcome: RelaxationOutcome::Converged,
				});
			}

			previous.copy_from_slice(&self.state);
		}

		Ok(Relaxation {
			cycles: max_cycles,
			outcome: RelaxationOutcome::BudgetExhausted,
		})
	}

	/// Energy of the current state.
	///
	/// `E(s) = -½ Σ_i Σ_j w_ij s_i s_j`
	///
	/// Stored patterns sit at minima of this landscape; relaxation never
	/// increases it while the matrix is symmetric with a zero diagonal.
	#[must_use]
	pub fn energy(&self) -> f64 {
		let mut quadratic = 0.0;
		for (i, &unit) in self.state.iter().enumerate() {
			let field = self.local_field(i);
			quadratic = unit.mul_add(field, quadratic);
		}
		-0.5 * quadratic
	}

	/// Weighted input to one unit from every other unit.
	#[inline]
	fn local_field(&self, neuron: usize) -> f64 {
		self.weights[neuron * self.size..(neuron + 1) * self.size]
			.iter()
			.zip(self.state.iter())
			.fold(0.0, |acc, (&w, &s)| w.mul_add(s, acc))
	}

	/// One asynchronous pass over all units in ascending index order.
	fn sweep(&mut self) {
		for i in 0..self.size {
			let field = self.local_field(i);
			if field > 0.0 {
				self.state[i] = 1.0;
			} else if field < 0.0 {
				self.state[i] = -1.0;
			}
			// A zero field keeps the unit's previous value.
		}
	}
}
