// Copyright 2025 Irreducible Inc.

//! Multiplication by the constant -82 without a multiply instruction.
//!
//! The constant is decomposed as
//!
//! ```text
//!     -82 = 2 * (1 - 2 * (4 * (8 - 1) - (8 - 1)))
//! ```
//!
//! which needs four shifts and three subtractions.

use crate::word::SignedWord;

/// The constant every routine in this crate multiplies by.
pub const MULTIPLIER: i64 = -82;

/// Returns `n * -82`, wrapping on overflow exactly like `n.wrapping_mul(-82)`.
#[inline]
pub const fn multiply(n: i32) -> i32 {
	let t1 = n << 3; // n * 8
	let t2 = t1.wrapping_sub(n); // n * 7
	let t3 = t2 << 2; // n * 28
	let t4 = t3.wrapping_sub(t2); // n * 21
	let t5 = t4 << 1; // n * 42
	let t6 = n.wrapping_sub(t5); // n * -41
	t6 << 1 // n * -82
}

const _: () = assert!(multiply(1) == -82);

/// Width-generic form of [`multiply`].
#[inline]
pub fn multiply_word<W: SignedWord>(n: W) -> W {
	let t1 = n.shl(3);
	let t2 = t1.wrapping_sub(n);
	let t3 = t2.shl(2);
	let t4 = t3.wrapping_sub(t2);
	let t5 = t4.shl(1);
	let t6 = n.wrapping_sub(t5);
	t6.shl(1)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_small_inputs() {
		assert_eq!(multiply(1), -82);
		assert_eq!(multiply(2), -164);
		assert_eq!(multiply(3), -246);
		assert_eq!(multiply(4), -328);
		assert_eq!(multiply(5), -410);
		assert_eq!(multiply(6), -492);
	}

	#[test]
	fn test_zero_and_negative() {
		assert_eq!(multiply(0), 0);
		assert_eq!(multiply(-1), 82);
		assert_eq!(multiply(-100), 8200);
	}

	#[test]
	fn test_limits_wrap_like_direct_multiply() {
		for n in [i32::MIN, i32::MIN + 1, i32::MAX, i32::MAX / 82, i32::MAX / 82 + 1] {
			assert_eq!(multiply(n), n.wrapping_mul(-82), "n = {n}");
		}
	}

	#[test]
	fn test_generic_matches_i32() {
		for n in -1000..=1000 {
			assert_eq!(multiply_word(n), multiply(n));
		}
		assert_eq!(multiply_word(3i8), -246i16 as i8);
		assert_eq!(multiply_word(1i128), -82i128);
	}
}
