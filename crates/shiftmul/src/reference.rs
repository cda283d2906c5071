// Copyright 2025 Irreducible Inc.

//! Reference implementation used to check the shift/subtract routines.

use crate::{multiply::MULTIPLIER, word::SignedWord};

/// Returns `n * -82` using a single wrapping multiply.
pub fn multiply_direct<W: SignedWord>(n: W) -> W {
	n.wrapping_mul(W::from_i64(MULTIPLIER))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn direct_matches_literal() {
		assert_eq!(multiply_direct(1i32), -82);
		assert_eq!(multiply_direct(-3i64), 246);
		assert_eq!(multiply_direct(2i8), -164i16 as i8);
	}
}
