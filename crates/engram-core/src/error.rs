//! Error types for memory operations.

/// Errors that can occur when training or driving an associative memory.
///
/// Both variants are precondition violations and are surfaced to the caller
/// immediately. Exhausting the relaxation budget is not an error; it is
/// reported structurally via
/// [`RelaxationOutcome::BudgetExhausted`](crate::RelaxationOutcome).
#[derive(Debug, thiserror::Error)]
pub enum EngramError {
	/// A pattern's length does not match the network size.
	#[error("pattern length {actual} does not match network size {expected}")]
	PatternLength {
		/// Network size the pattern must match
		expected: usize,
		/// Length of the offending pattern
		actual: usize,
	},

	/// A relaxation was requested with a cycle budget of zero.
	#[error("cycle budget must be at least 1")]
	ZeroCycleBudget,
}

/// Result type alias for memory operations.
pub type Result<T> = std::result::Result<T, EngramError>;
