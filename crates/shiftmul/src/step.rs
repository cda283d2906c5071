// Copyright 2025 Irreducible Inc.

//! The shift/subtract sequence as data.
//!
//! [`multiply`](crate::multiply::multiply) hardcodes the steps. This module holds the same steps
//! as a [`Sequence`] so they can be interpreted at any width, checked symbolically, costed and
//! printed as source code.

use std::{borrow::Cow, fmt};

use crate::{
	error::{Result, SequenceError},
	multiply::MULTIPLIER,
	word::SignedWord,
};

/// A value a step reads or writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operand {
	/// The routine's argument `n`.
	Input,
	/// A temporary, printed as `t{k}`.
	Temp(u8),
}

impl Operand {
	/// Index of the operand in a register file where slot 0 holds the input.
	fn slot(self) -> usize {
		match self {
			Operand::Input => 0,
			Operand::Temp(k) => k as usize + 1,
		}
	}
}

impl fmt::Display for Operand {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Operand::Input => write!(f, "n"),
			Operand::Temp(k) => write!(f, "t{k}"),
		}
	}
}

/// One straight-line operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
	/// `dst = src << amount`
	Shl {
		dst: Operand,
		src: Operand,
		amount: u32,
	},
	/// `dst = lhs - rhs`
	Sub {
		dst: Operand,
		lhs: Operand,
		rhs: Operand,
	},
}

impl Step {
	pub fn dst(&self) -> Operand {
		match *self {
			Step::Shl { dst, .. } | Step::Sub { dst, .. } => dst,
		}
	}

	/// Operands read by this step, in evaluation order.
	pub fn reads(&self) -> impl Iterator<Item = Operand> {
		let (a, b) = match *self {
			Step::Shl { src, .. } => (src, None),
			Step::Sub { lhs, rhs, .. } => (lhs, Some(rhs)),
		};
		std::iter::once(a).chain(b)
	}

	fn apply<W: SignedWord>(&self, regs: &[Option<W>]) -> W {
		let read = |op: Operand| regs[op.slot()].unwrap_or(W::ZERO);
		match *self {
			Step::Shl { src, amount, .. } => read(src).shl(amount),
			Step::Sub { lhs, rhs, .. } => read(lhs).wrapping_sub(read(rhs)),
		}
	}
}

impl fmt::Display for Step {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Step::Shl { dst, src, amount } => write!(f, "{dst} = {src} << {amount}"),
			Step::Sub { dst, lhs, rhs } => write!(f, "{dst} = {lhs} - {rhs}"),
		}
	}
}

const fn shl(dst: u8, src: Operand, amount: u32) -> Step {
	Step::Shl {
		dst: Operand::Temp(dst),
		src,
		amount,
	}
}

const fn sub(dst: u8, lhs: Operand, rhs: Operand) -> Step {
	Step::Sub {
		dst: Operand::Temp(dst),
		lhs,
		rhs,
	}
}

const N: Operand = Operand::Input;
const fn t(k: u8) -> Operand {
	Operand::Temp(k)
}

#[rustfmt::skip]
const NEG_82_STEPS: [Step; 7] = [
	shl(1, N, 3),       // n * 8
	sub(2, t(1), N),    // n * 7
	shl(3, t(2), 2),    // n * 28
	sub(4, t(3), t(2)), // n * 21
	shl(5, t(4), 1),    // n * 42
	sub(6, N, t(5)),    // n * -41
	shl(7, t(6), 1),    // n * -82
];

/// Widest word a sequence can run on.
const MAX_BITS: u32 = i128::BITS;

/// An ordered list of steps whose last destination is the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
	steps: Cow<'static, [Step]>,
}

impl Sequence {
	/// The seven-step decomposition of `n * -82`.
	pub const NEG_82: Sequence = Sequence {
		steps: Cow::Borrowed(&NEG_82_STEPS),
	};

	/// Builds a sequence, rejecting steps that read undefined operands or overwrite the input.
	pub fn new(steps: Vec<Step>) -> Result<Self> {
		let sequence = Self {
			steps: Cow::Owned(steps),
		};
		sequence.check_dataflow()?;
		Ok(sequence)
	}

	pub fn steps(&self) -> &[Step] {
		&self.steps
	}

	pub fn len(&self) -> usize {
		self.steps.len()
	}

	pub fn is_empty(&self) -> bool {
		self.steps.is_empty()
	}

	/// The operand holding the result, i.e. the destination of the last step.
	pub fn output(&self) -> Option<Operand> {
		self.steps.last().map(Step::dst)
	}

	/// Distinct temporaries in order of first definition.
	pub fn temporaries(&self) -> Vec<Operand> {
		let mut temps = Vec::new();
		for step in self.steps.iter() {
			let dst = step.dst();
			if !temps.contains(&dst) {
				temps.push(dst);
			}
		}
		temps
	}

	fn register_count(&self) -> usize {
		self.steps
			.iter()
			.flat_map(|step| step.reads().chain(std::iter::once(step.dst())))
			.map(Operand::slot)
			.max()
			.unwrap_or(0)
			+ 1
	}

	fn check_dataflow(&self) -> Result<()> {
		if self.steps.is_empty() {
			return Err(SequenceError::Empty);
		}
		let mut defined = vec![false; self.register_count()];
		defined[Operand::Input.slot()] = true;
		for (index, step) in self.steps.iter().enumerate() {
			if let Some(operand) = step.reads().find(|op| !defined[op.slot()]) {
				return Err(SequenceError::UndefinedOperand {
					step: index,
					operand,
				});
			}
			let dst = step.dst();
			if dst == Operand::Input {
				return Err(SequenceError::InputOverwritten { step: index });
			}
			defined[dst.slot()] = true;
		}
		self.check_width(MAX_BITS)
	}

	/// Checks that every shift amount fits a word of `bits` bits.
	pub fn check_width(&self, bits: u32) -> Result<()> {
		for (index, step) in self.steps.iter().enumerate() {
			match *step {
				Step::Shl { amount, .. } if amount >= bits => {
					return Err(SequenceError::ShiftOutOfRange {
						step: index,
						amount,
						bits,
					});
				}
				_ => {}
			}
		}
		Ok(())
	}

	/// Full validation: dataflow, shift widths, and that the sequence multiplies by `expected`.
	pub fn validate(&self, bits: u32, expected: i64) -> Result<()> {
		self.check_dataflow()?;
		self.check_width(bits)?;
		let found = self.constant();
		if found != i128::from(expected) {
			return Err(SequenceError::FactorMismatch { expected, found });
		}
		Ok(())
	}

	/// [`Self::validate`] against -82.
	pub fn validate_neg_82(&self, bits: u32) -> Result<()> {
		self.validate(bits, MULTIPLIER)
	}

	/// Multiplier of `n` held by each step's destination, in step order.
	pub fn factors(&self) -> Vec<i128> {
		let mut regs = vec![None; self.register_count()];
		regs[Operand::Input.slot()] = Some(1i128);
		self.steps
			.iter()
			.map(|step| {
				let factor = step.apply(&regs);
				regs[step.dst().slot()] = Some(factor);
				factor
			})
			.collect()
	}

	/// The constant this sequence multiplies by.
	pub fn constant(&self) -> i128 {
		self.factors().last().copied().unwrap_or(1)
	}

	/// Runs the sequence on `n` at the width of `W`.
	pub fn eval<W: SignedWord>(&self, n: W) -> Result<W> {
		let _span = tracing::debug_span!("eval sequence", bits = W::BITS).entered();
		self.check_dataflow()?;
		self.check_width(W::BITS)?;

		let mut regs = vec![None; self.register_count()];
		regs[Operand::Input.slot()] = Some(n);
		let mut result = n;
		for step in self.steps.iter() {
			result = step.apply(&regs);
			tracing::trace!(%step, %result);
			regs[step.dst().slot()] = Some(result);
		}
		Ok(result)
	}
}

impl Default for Sequence {
	fn default() -> Self {
		Self::NEG_82
	}
}

impl fmt::Display for Sequence {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for step in self.steps.iter() {
			writeln!(f, "{step}")?;
		}
		Ok(())
	}
}
