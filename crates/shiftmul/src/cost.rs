// Copyright 2025 Irreducible Inc.

//! Machine cost model for deciding whether a shift/subtract sequence beats a multiply.

use crate::step::{Sequence, Step};

/// Cycle costs of the operations a sequence may use.
///
/// The defaults describe a small microcontroller core: single-cycle ALU operations and a
/// 30-cycle multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CostModel {
	pub add: u32,
	pub sub: u32,
	pub neg: u32,
	pub shift: u32,
	pub mult: u32,
}

impl Default for CostModel {
	fn default() -> Self {
		Self {
			add: 1,
			sub: 1,
			neg: 1,
			shift: 1,
			mult: 30,
		}
	}
}

impl CostModel {
	/// Cost of a single step.
	pub fn step_cost(&self, step: &Step) -> u32 {
		match step {
			Step::Shl { .. } => self.shift,
			Step::Sub { .. } => self.sub,
		}
	}

	/// Total cost of running `sequence` once.
	pub fn sequence_cost(&self, sequence: &Sequence) -> u32 {
		sequence
			.steps()
			.iter()
			.map(|step| self.step_cost(step))
			.sum()
	}

	/// Whether `sequence` is strictly cheaper than one multiply instruction.
	pub fn is_profitable(&self, sequence: &Sequence) -> bool {
		self.sequence_cost(sequence) < self.mult
	}
}

impl Sequence {
	/// Cost under the default [`CostModel`].
	pub fn cost(&self) -> u32 {
		CostModel::default().sequence_cost(self)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn neg_82_costs_seven() {
		assert_eq!(Sequence::NEG_82.cost(), 7);
		assert!(CostModel::default().is_profitable(&Sequence::NEG_82));
	}

	#[test]
	fn cheap_multiplier_is_not_beaten() {
		let model = CostModel {
			mult: 3,
			..CostModel::default()
		};
		assert!(!model.is_profitable(&Sequence::NEG_82));
	}

	#[test]
	fn weights_shift_and_sub_separately() {
		let model = CostModel {
			shift: 2,
			sub: 5,
			..CostModel::default()
		};
		// four shifts, three subtractions
		assert_eq!(model.sequence_cost(&Sequence::NEG_82), 4 * 2 + 3 * 5);
	}
}
