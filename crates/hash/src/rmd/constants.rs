// Copyright 2025 Irreducible Inc.

use digest::consts::{U16, U20};
use static_assertions::const_assert_eq;

use super::{Rmd, GROUP_ROUNDS};

pub const K128: [u32; 8] = [
	0x00000000, 0x5a827999, 0x6ed9eba1, 0x8f1bbcdc, 0x50a28be6, 0x5c4dd124, 0x6d703ef3, 0x00000000,
];

pub const K160: [u32; 10] = [
	0x00000000, 0x5a827999, 0x6ed9eba1, 0x8f1bbcdc, 0xa953fd4e, 0x50a28be6, 0x5c4dd124, 0x6d703ef3,
	0x7a6d76e9, 0x00000000,
];

#[rustfmt::skip]
pub const WORD160: [usize; 160] = [
	0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15,
	7, 4, 13, 1, 10, 6, 15, 3, 12, 0, 9, 5, 2, 14, 11, 8,
	3, 10, 14, 4, 9, 15, 8, 1, 2, 7, 0, 6, 13, 11, 5, 12,
	1, 9, 11, 10, 0, 8, 12, 4, 13, 3, 7, 15, 14, 5, 6, 2,
	4, 0, 5, 9, 7, 12, 2, 10, 14, 1, 3, 8, 11, 6, 15, 13,

	5, 14, 7, 0, 9, 2, 11, 4, 13, 6, 15, 8, 1, 10, 3, 12,
	6, 11, 3, 7, 0, 13, 5, 10, 14, 15, 8, 12, 4, 9, 1, 2,
	15, 5, 1, 3, 7, 14, 6, 9, 11, 8, 12, 2, 10, 0, 4, 13,
	8, 6, 4, 1, 3, 11, 15, 0, 5, 12, 2, 13, 9, 7, 10, 14,
	12, 15, 10, 4, 1, 5, 8, 7, 6, 2, 13, 14, 0, 3, 9, 11,
];

#[rustfmt::skip]
pub const ROT160: [u32; 160] = [
	11, 14, 15, 12, 5, 8, 7, 9, 11, 13, 14, 15, 6, 7, 9, 8,
	7, 6, 8, 13, 11, 9, 7, 15, 7, 12, 15, 9, 11, 7, 13, 12,
	11, 13, 6, 7, 14, 9, 13, 15, 14, 8, 13, 6, 5, 12, 7, 5,
	11, 12, 14, 15, 14, 15, 9, 8, 9, 14, 5, 6, 8, 6, 5, 12,
	9, 15, 5, 11, 6, 8, 13, 12, 5, 12, 13, 14, 11, 8, 5, 6,

	8, 9, 9, 11, 13, 15, 15, 5, 7, 7, 8, 11, 14, 14, 12, 6,
	9, 13, 15, 7, 12, 8, 9, 11, 7, 7, 12, 7, 6, 15, 13, 11,
	9, 7, 15, 11, 8, 6, 6, 14, 12, 13, 5, 14, 13, 13, 7, 5,
	15, 5, 8, 11, 14, 14, 6, 14, 6, 9, 12, 9, 12, 5, 15, 8,
	8, 5, 12, 9, 12, 5, 14, 6, 8, 13, 6, 5, 15, 13, 11, 11,
];

/// The first four groups of each RIPEMD-160 line, which RIPEMD-128 shares.
macro_rules! rmd128_table {
	($full:expr, $ty:ty) => {{
		let mut out: [$ty; 128] = [0; 128];
		let mut i = 0;
		while i < 64 {
			out[i] = $full[i];
			out[64 + i] = $full[80 + i];
			i += 1;
		}
		out
	}};
}

pub const WORD128: [usize; 128] = rmd128_table!(WORD160, usize);
pub const ROT128: [u32; 128] = rmd128_table!(ROT160, u32);

pub const IV128: [u32; 4] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476];
pub const IV160: [u32; 5] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476, 0xc3d2e1f0];

/// RIPEMD-128.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct H128;

impl Rmd for H128 {
	type State = [u32; 4];
	type Digest = [u8; 16];
	type OutputSize = U16;

	const NAME: &'static str = "RIPEMD-128";
	const ROUNDS: usize = 64;
	const STATE_WORDS: usize = 4;
	const K: &'static [u32] = &K128;
	const WORD: &'static [usize] = &WORD128;
	const ROT: &'static [u32] = &ROT128;
	const H: [u32; 4] = IV128;
}

/// RIPEMD-160.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct H160;

impl Rmd for H160 {
	type State = [u32; 5];
	type Digest = [u8; 20];
	type OutputSize = U20;

	const NAME: &'static str = "RIPEMD-160";
	const ROUNDS: usize = 80;
	const STATE_WORDS: usize = 5;
	const K: &'static [u32] = &K160;
	const WORD: &'static [usize] = &WORD160;
	const ROT: &'static [u32] = &ROT160;
	const H: [u32; 5] = IV160;
}

const_assert_eq!(K128.len() * GROUP_ROUNDS, WORD128.len());
const_assert_eq!(K160.len() * GROUP_ROUNDS, WORD160.len());
