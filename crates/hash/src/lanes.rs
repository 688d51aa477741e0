// Copyright 2025 Irreducible Inc.

//! Lane-packed words: `LANES` independent machine words processed by one set of operations.

use std::{
	array,
	ops::{BitAnd, BitOr, BitXor, Not},
};

use crate::word::{Word, WordOps};

/// Upper bound on `Packed::LANES` for every packed type in this crate.
pub const MAX_LANES: usize = 16;

/// A word holding `LANES` independent scalar words.
///
/// Each lane belongs to a different message, so a round engine running over packed words computes
/// `LANES` hashes at once. A scalar word is the degenerate one lane case.
pub trait Packed: WordOps {
	const LANES: usize;

	/// Loads lane `i` from `words[i]`. `words` must hold at least `LANES` words.
	fn gather(words: &[Self::Scalar]) -> Self;

	/// Stores lane `i` to `out[i]`. `out` must hold at least `LANES` words.
	fn scatter(self, out: &mut [Self::Scalar]);
}

impl<W: Word> Packed for W {
	const LANES: usize = 1;

	#[inline(always)]
	fn gather(words: &[W]) -> Self {
		words[0]
	}

	#[inline(always)]
	fn scatter(self, out: &mut [W]) {
		out[0] = self;
	}
}

/// Portable packed word. Every operation is a plain loop over the lanes, which the compiler
/// turns into vector instructions whenever the target has registers wide enough.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(transparent)]
pub struct Lanes<W, const N: usize>(pub [W; N]);

impl<W: Word, const N: usize> Lanes<W, N> {
	#[inline(always)]
	fn zip_with(self, rhs: Self, f: impl Fn(W, W) -> W) -> Self {
		Self(array::from_fn(|i| f(self.0[i], rhs.0[i])))
	}

	#[inline(always)]
	fn map(self, f: impl Fn(W) -> W) -> Self {
		Self(array::from_fn(|i| f(self.0[i])))
	}
}

impl<W: Word, const N: usize> BitAnd for Lanes<W, N> {
	type Output = Self;

	#[inline(always)]
	fn bitand(self, rhs: Self) -> Self {
		self.zip_with(rhs, |a, b| a & b)
	}
}

impl<W: Word, const N: usize> BitOr for Lanes<W, N> {
	type Output = Self;

	#[inline(always)]
	fn bitor(self, rhs: Self) -> Self {
		self.zip_with(rhs, |a, b| a | b)
	}
}

impl<W: Word, const N: usize> BitXor for Lanes<W, N> {
	type Output = Self;

	#[inline(always)]
	fn bitxor(self, rhs: Self) -> Self {
		self.zip_with(rhs, |a, b| a ^ b)
	}
}

impl<W: Word, const N: usize> Not for Lanes<W, N> {
	type Output = Self;

	#[inline(always)]
	fn not(self) -> Self {
		self.map(|a| !a)
	}
}

impl<W: Word, const N: usize> WordOps for Lanes<W, N> {
	type Scalar = W;

	#[inline(always)]
	fn splat(value: W) -> Self {
		Self([value; N])
	}

	#[inline(always)]
	fn wrapping_add(self, rhs: Self) -> Self {
		self.zip_with(rhs, |a, b| a.wrapping_add(b))
	}

	#[inline(always)]
	fn rotate_right(self, n: u32) -> Self {
		self.map(|a| a.rotate_right(n))
	}

	#[inline(always)]
	fn rotate_left(self, n: u32) -> Self {
		self.map(|a| a.rotate_left(n))
	}

	#[inline(always)]
	fn shift_right(self, n: u32) -> Self {
		self.map(|a| a.shift_right(n))
	}
}

impl<W: Word, const N: usize> Packed for Lanes<W, N> {
	const LANES: usize = N;

	#[inline(always)]
	fn gather(words: &[W]) -> Self {
		Self(array::from_fn(|i| words[i]))
	}

	#[inline(always)]
	fn scatter(self, out: &mut [W]) {
		out[..N].copy_from_slice(&self.0);
	}
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;

	use super::*;

	fn check_lanes<P: Packed<Scalar = u32>>(a: [u32; 16], b: [u32; 16], n: u32) {
		let pa = P::gather(&a);
		let pb = P::gather(&b);

		let mut out = [0u32; 16];
		(pa.wrapping_add(pb) ^ !pa.rotate_right(n)).scatter(&mut out);
		for i in 0..P::LANES {
			assert_eq!(out[i], a[i].wrapping_add(b[i]) ^ !a[i].rotate_right(n));
		}

		(pa.rotate_left(n) | pb.shift_right(n) & P::splat(0x0f0f_0f0f)).scatter(&mut out);
		for i in 0..P::LANES {
			assert_eq!(out[i], a[i].rotate_left(n) | (b[i] >> n) & 0x0f0f_0f0f);
		}
	}

	proptest! {
		#[test]
		fn test_lanes_match_scalar(
			a in prop::array::uniform16(any::<u32>()),
			b in prop::array::uniform16(any::<u32>()),
			n in 0u32..32,
		) {
			check_lanes::<u32>(a, b, n);
			check_lanes::<Lanes<u32, 2>>(a, b, n);
			check_lanes::<Lanes<u32, 4>>(a, b, n);
			check_lanes::<Lanes<u32, 8>>(a, b, n);
			check_lanes::<Lanes<u32, 16>>(a, b, n);
			check_lanes::<<u32 as Word>::Wide>(a, b, n);
		}
	}
}
