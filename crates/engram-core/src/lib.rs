//! # Engram Core
//!
//! An associative-memory engine: a fully-connected recurrent network that
//! stores bipolar patterns in a weight matrix and, given a noisy or partial
//! probe, relaxes toward the stored pattern whose energy basin it falls
//! into.
//!
//! ## Why an Energy-Based Memory?
//!
//! Lookup tables retrieve by address. An associative memory retrieves by
//! *content*: hand it a corrupted or incomplete pattern and the dynamics
//! pull the state toward the closest stored attractor. There is no search
//! step; recall *is* the physics of the network.
//!
//! ## Core Concepts
//!
//! ### Storage (Storkey rule)
//!
//! Patterns are folded into the weight matrix one at a time. Each fold adds
//! the outer-product term and subtracts local-field corrections that cancel
//! crosstalk with previously stored patterns:
//!
//! ```text
//! w_ij += (1/n) (p_i p_j - p_i h_j - h_i p_j)
//! ```
//!
//! The correction buys noticeably more usable capacity than the plain
//! Hebbian rule, which this crate also ships as a baseline.
//!
//! ### Recall (asynchronous relaxation)
//!
//! A probe replaces the state, then full sweeps update every unit in
//! ascending index order:
//!
//! ```text
//! s_i ← sign(Σ_j w_ij s_j)
//! ```
//!
//! A zero field keeps the unit's previous value. The loop stops at the
//! first sweep that changes nothing (a fixed point) or when the sweep
//! budget runs out; the budget is the only guard against non-converging
//! (overloaded or hand-crafted asymmetric) matrices.
//!
//! ## Example
//!
//! ```rust
//! use engram_core::{AssociativeMemory, StorkeyTrainer};
//!
//! # fn main() -> Result<(), engram_core::EngramError> {
//! // A four-unit network storing one alternating pattern.
//! let mut memory = AssociativeMemory::new(4);
//!
//! let mut trainer = StorkeyTrainer::new(&mut memory);
//! trainer.add_pattern(&[1.0, -1.0, 1.0, -1.0])?;
//! trainer.compute_weights();
//!
//! // Probe with one unit corrupted; relaxation restores the pattern.
//! memory.set_current_state(&[1.0, 1.0, 1.0, -1.0])?;
//! let relaxation = memory.run_until_stable(10)?;
//!
//! assert!(relaxation.converged());
//! assert_eq!(memory.current_state(), &[1.0, -1.0, 1.0, -1.0]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Scope
//!
//! Single-threaded, synchronous, pure in-memory numerics. Training is
//! single-shot: trainers rebuild the whole matrix from their accumulated
//! pattern set on demand, there is no incremental update after the fact.
//! Callers sharing one memory across threads must serialize access
//! themselves.
//!
//! ## References
//!
//! - Hopfield, J. J. (1982). *Neural networks and physical systems with
//!   emergent collective computational abilities*
//! - Storkey, A. (1997). *Increasing the capacity of a Hopfield network
//!   without sacrificing functionality*
//! - Hertz, J., Krogh, A., Palmer, R. (1991). *Introduction to the Theory
//!   of Neural Computation*

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::needless_return)]

pub mod error;
pub mod hebbian;
pub mod network;
pub mod storkey;

pub use error::{EngramError, Result};
pub use hebbian::HebbianTrainer;
pub use network::{to_bipolar, AssociativeMemory, Relaxation, RelaxationOutcome};
pub use storkey::StorkeyTrainer;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
	use super::*;

	#[test]
	fn test_store_and_recall_two_patterns() {
		let uniform = [1.0; 8];
		let blocks = [1.0, 1.0, 1.0, 1.0, -1.0, -1.0, -1.0, -1.0];

		let mut memory = AssociativeMemory::new(8);
		let mut trainer = StorkeyTrainer::new(&mut memory);
		trainer.add_pattern(&uniform).unwrap();
		trainer.add_pattern(&blocks).unwrap();
		trainer.compute_weights();

		// One corrupted unit on the second pattern.
		let mut probe = blocks;
		probe[0] = -1.0;
		memory.set_current_state(&probe).unwrap();

		let relaxation = memory.run_until_stable(100).unwrap();
		assert!(relaxation.converged());
		assert_eq!(memory.current_state(), &blocks[..]);
	}
}
