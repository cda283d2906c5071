// Copyright 2025 Irreducible Inc.

//! Fixed-width signed words.
//!
//! The shift/subtract sequence only needs three primitive operations on a two's-complement word:
//! a left shift, a subtraction and (for comparison purposes) a multiplication. All three wrap on
//! overflow, so that the sequence and a single multiply agree bit-for-bit at every width.

use std::fmt;

/// A two's-complement signed integer of fixed width.
pub trait SignedWord: Copy + Eq + fmt::Debug + fmt::Display + 'static {
	/// Width of the word in bits.
	const BITS: u32;

	const ZERO: Self;

	/// Left shift by `amount` bits, discarding bits shifted past the sign bit.
	///
	/// `amount` must be less than [`Self::BITS`].
	fn shl(self, amount: u32) -> Self;

	fn wrapping_sub(self, rhs: Self) -> Self;

	fn wrapping_mul(self, rhs: Self) -> Self;

	/// Truncates an `i64` constant to this width.
	fn from_i64(value: i64) -> Self;
}

macro_rules! impl_signed_word {
	($($ty:ty),* $(,)?) => {
		$(
			impl SignedWord for $ty {
				const BITS: u32 = <$ty>::BITS;
				const ZERO: Self = 0;

				#[inline(always)]
				fn shl(self, amount: u32) -> Self {
					debug_assert!(amount < Self::BITS, "shift amount {amount} out of range");
					self << amount
				}

				#[inline(always)]
				fn wrapping_sub(self, rhs: Self) -> Self {
					<$ty>::wrapping_sub(self, rhs)
				}

				#[inline(always)]
				fn wrapping_mul(self, rhs: Self) -> Self {
					<$ty>::wrapping_mul(self, rhs)
				}

				#[inline(always)]
				fn from_i64(value: i64) -> Self {
					value as $ty
				}
			}
		)*
	};
}

impl_signed_word!(i8, i16, i32, i64, i128, isize);
