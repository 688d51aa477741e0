// Copyright 2025 Irreducible Inc.

//! Boolean mixing functions shared by the SHA and RIPEMD round engines.

use crate::word::WordOps;

/// `x` chooses between `y` and `z` bit by bit.
#[inline(always)]
pub fn choice<T: WordOps>(x: T, y: T, z: T) -> T {
	(x & y) ^ (!x & z)
}

/// Bitwise majority vote of three words.
#[inline(always)]
pub fn majority<T: WordOps>(x: T, y: T, z: T) -> T {
	(x & y) | (z & (x | y))
}

#[inline(always)]
pub fn parity<T: WordOps>(x: T, y: T, z: T) -> T {
	x ^ y ^ z
}

/// SHA-2 Σ: three rotations combined by XOR.
#[inline(always)]
pub fn big_sigma<T: WordOps>(x: T, [r0, r1, r2]: [u32; 3]) -> T {
	x.rotate_right(r0) ^ x.rotate_right(r1) ^ x.rotate_right(r2)
}

/// SHA-2 σ: two rotations and a shift combined by XOR.
#[inline(always)]
pub fn small_sigma<T: WordOps>(x: T, [r0, r1, s]: [u32; 3]) -> T {
	x.rotate_right(r0) ^ x.rotate_right(r1) ^ x.shift_right(s)
}

/// The five RIPEMD boolean functions, by index.
#[inline(always)]
pub fn ripemd_f<T: WordOps>(index: usize, x: T, y: T, z: T) -> T {
	match index {
		0 => parity(x, y, z),
		1 => choice(x, y, z),
		2 => (x | !y) ^ z,
		3 => choice(z, x, y),
		_ => x ^ (y | !z),
	}
}
