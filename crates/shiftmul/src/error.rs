// Copyright 2025 Irreducible Inc.

use crate::step::Operand;

#[derive(Debug, thiserror::Error)]
pub enum SequenceError {
	#[error("sequence has no steps")]
	Empty,

	#[error("step {step} reads {operand} before it is written")]
	UndefinedOperand { step: usize, operand: Operand },

	#[error("step {step} writes to the input operand")]
	InputOverwritten { step: usize },

	#[error("step {step} shifts by {amount}, but the word is only {bits} bits wide")]
	ShiftOutOfRange { step: usize, amount: u32, bits: u32 },

	#[error("sequence computes n * {found}, expected n * {expected}")]
	FactorMismatch { expected: i64, found: i128 },
}

#[derive(Debug, thiserror::Error)]
pub enum EmitError {
	#[error("cannot emit an invalid sequence: {0}")]
	Sequence(#[from] SequenceError),

	#[error("invalid input symbol {symbol:?}: {reason}")]
	InvalidSymbol { symbol: String, reason: String },

	#[error("failed to write generated source: {0}")]
	Io(#[from] std::io::Error),
}

pub type Result<T, E = SequenceError> = std::result::Result<T, E>;
