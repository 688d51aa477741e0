// Copyright 2025 Irreducible Inc.

use std::{
	arch::x86_64::*,
	ops::{BitAnd, BitOr, BitXor, Not},
};

use crate::{lanes::Packed, word::WordOps};

/// Eight `u32` lanes in one AVX2 register.
#[derive(Clone, Copy, Debug)]
#[repr(transparent)]
pub struct U32x8(__m256i);

/// Four `u64` lanes in one AVX2 register.
#[derive(Clone, Copy, Debug)]
#[repr(transparent)]
pub struct U64x4(__m256i);

macro_rules! impl_bit_ops {
	($name:ident) => {
		impl BitAnd for $name {
			type Output = Self;

			#[inline(always)]
			fn bitand(self, rhs: Self) -> Self {
				Self(unsafe { _mm256_and_si256(self.0, rhs.0) })
			}
		}

		impl BitOr for $name {
			type Output = Self;

			#[inline(always)]
			fn bitor(self, rhs: Self) -> Self {
				Self(unsafe { _mm256_or_si256(self.0, rhs.0) })
			}
		}

		impl BitXor for $name {
			type Output = Self;

			#[inline(always)]
			fn bitxor(self, rhs: Self) -> Self {
				Self(unsafe { _mm256_xor_si256(self.0, rhs.0) })
			}
		}

		impl Not for $name {
			type Output = Self;

			#[inline(always)]
			fn not(self) -> Self {
				Self(unsafe { _mm256_xor_si256(self.0, _mm256_set1_epi32(-1)) })
			}
		}
	};
}

impl_bit_ops!(U32x8);
impl_bit_ops!(U64x4);

#[inline(always)]
fn count(n: u32) -> __m128i {
	unsafe { _mm_cvtsi32_si128(n as i32) }
}

impl WordOps for U32x8 {
	type Scalar = u32;

	#[inline(always)]
	fn splat(value: u32) -> Self {
		Self(unsafe { _mm256_set1_epi32(value as i32) })
	}

	#[inline(always)]
	fn wrapping_add(self, rhs: Self) -> Self {
		Self(unsafe { _mm256_add_epi32(self.0, rhs.0) })
	}

	#[inline(always)]
	fn rotate_right(self, n: u32) -> Self {
		Self(unsafe {
			_mm256_or_si256(
				_mm256_srl_epi32(self.0, count(n)),
				_mm256_sll_epi32(self.0, count(32 - n)),
			)
		})
	}

	#[inline(always)]
	fn rotate_left(self, n: u32) -> Self {
		Self(unsafe {
			_mm256_or_si256(
				_mm256_sll_epi32(self.0, count(n)),
				_mm256_srl_epi32(self.0, count(32 - n)),
			)
		})
	}

	#[inline(always)]
	fn shift_right(self, n: u32) -> Self {
		Self(unsafe { _mm256_srl_epi32(self.0, count(n)) })
	}
}

impl Packed for U32x8 {
	const LANES: usize = 8;

	#[inline(always)]
	fn gather(words: &[u32]) -> Self {
		assert!(words.len() >= Self::LANES);
		// Safety: the assertion above keeps the unaligned load in bounds.
		Self(unsafe { _mm256_loadu_si256(words.as_ptr() as *const __m256i) })
	}

	#[inline(always)]
	fn scatter(self, out: &mut [u32]) {
		assert!(out.len() >= Self::LANES);
		// Safety: the assertion above keeps the unaligned store in bounds.
		unsafe { _mm256_storeu_si256(out.as_mut_ptr() as *mut __m256i, self.0) }
	}
}

impl WordOps for U64x4 {
	type Scalar = u64;

	#[inline(always)]
	fn splat(value: u64) -> Self {
		Self(unsafe { _mm256_set1_epi64x(value as i64) })
	}

	#[inline(always)]
	fn wrapping_add(self, rhs: Self) -> Self {
		Self(unsafe { _mm256_add_epi64(self.0, rhs.0) })
	}

	#[inline(always)]
	fn rotate_right(self, n: u32) -> Self {
		Self(unsafe {
			_mm256_or_si256(
				_mm256_srl_epi64(self.0, count(n)),
				_mm256_sll_epi64(self.0, count(64 - n)),
			)
		})
	}

	#[inline(always)]
	fn rotate_left(self, n: u32) -> Self {
		Self(unsafe {
			_mm256_or_si256(
				_mm256_sll_epi64(self.0, count(n)),
				_mm256_srl_epi64(self.0, count(64 - n)),
			)
		})
	}

	#[inline(always)]
	fn shift_right(self, n: u32) -> Self {
		Self(unsafe { _mm256_srl_epi64(self.0, count(n)) })
	}
}

impl Packed for U64x4 {
	const LANES: usize = 4;

	#[inline(always)]
	fn gather(words: &[u64]) -> Self {
		assert!(words.len() >= Self::LANES);
		// Safety: the assertion above keeps the unaligned load in bounds.
		Self(unsafe { _mm256_loadu_si256(words.as_ptr() as *const __m256i) })
	}

	#[inline(always)]
	fn scatter(self, out: &mut [u64]) {
		assert!(out.len() >= Self::LANES);
		// Safety: the assertion above keeps the unaligned store in bounds.
		unsafe { _mm256_storeu_si256(out.as_mut_ptr() as *mut __m256i, self.0) }
	}
}
