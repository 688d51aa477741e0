// Copyright 2025 Irreducible Inc.

//! Round constants, initialization vectors and the descriptor of every SHA variant.

use digest::consts::{U128, U20, U28, U32, U48, U64};
use lazy_static::lazy_static;
use static_assertions::const_assert;

use super::{Family, Pads, Rotations, Sha};
use crate::{arch, dispatch, word::WordOps};

const fn sha1_round_constants() -> [u32; 80] {
	const GROUPS: [u32; 4] = [0x5a827999, 0x6ed9eba1, 0x8f1bbcdc, 0xca62c1d6];

	let mut k = [0; 80];
	let mut round = 0;
	while round < 80 {
		k[round] = GROUPS[round / 20];
		round += 1;
	}
	k
}

/// SHA-1 round constants, repeated per round.
pub const K160: [u32; 80] = sha1_round_constants();

/// SHA-224/256 round constants.
pub const K256: [u32; 64] = [
	0x428a2f98, 0x71374491, 0xb5c0fbcf, 0xe9b5dba5, 0x3956c25b, 0x59f111f1, 0x923f82a4, 0xab1c5ed5,
	0xd807aa98, 0x12835b01, 0x243185be, 0x550c7dc3, 0x72be5d74, 0x80deb1fe, 0x9bdc06a7, 0xc19bf174,
	0xe49b69c1, 0xefbe4786, 0x0fc19dc6, 0x240ca1cc, 0x2de92c6f, 0x4a7484aa, 0x5cb0a9dc, 0x76f988da,
	0x983e5152, 0xa831c66d, 0xb00327c8, 0xbf597fc7, 0xc6e00bf3, 0xd5a79147, 0x06ca6351, 0x14292967,
	0x27b70a85, 0x2e1b2138, 0x4d2c6dfc, 0x53380d13, 0x650a7354, 0x766a0abb, 0x81c2c92e, 0x92722c85,
	0xa2bfe8a1, 0xa81a664b, 0xc24b8b70, 0xc76c51a3, 0xd192e819, 0xd6990624, 0xf40e3585, 0x106aa070,
	0x19a4c116, 0x1e376c08, 0x2748774c, 0x34b0bcb5, 0x391c0cb3, 0x4ed8aa4a, 0x5b9cca4f, 0x682e6ff3,
	0x748f82ee, 0x78a5636f, 0x84c87814, 0x8cc70208, 0x90befffa, 0xa4506ceb, 0xbef9a3f7, 0xc67178f2,
];

/// SHA-384/512 round constants.
pub const K512: [u64; 80] = [
	0x428a2f98d728ae22, 0x7137449123ef65cd, 0xb5c0fbcfec4d3b2f, 0xe9b5dba58189dbbc,
	0x3956c25bf348b538, 0x59f111f1b605d019, 0x923f82a4af194f9b, 0xab1c5ed5da6d8118,
	0xd807aa98a3030242, 0x12835b0145706fbe, 0x243185be4ee4b28c, 0x550c7dc3d5ffb4e2,
	0x72be5d74f27b896f, 0x80deb1fe3b1696b1, 0x9bdc06a725c71235, 0xc19bf174cf692694,
	0xe49b69c19ef14ad2, 0xefbe4786384f25e3, 0x0fc19dc68b8cd5b5, 0x240ca1cc77ac9c65,
	0x2de92c6f592b0275, 0x4a7484aa6ea6e483, 0x5cb0a9dcbd41fbd4, 0x76f988da831153b5,
	0x983e5152ee66dfab, 0xa831c66d2db43210, 0xb00327c898fb213f, 0xbf597fc7beef0ee4,
	0xc6e00bf33da88fc2, 0xd5a79147930aa725, 0x06ca6351e003826f, 0x142929670a0e6e70,
	0x27b70a8546d22ffc, 0x2e1b21385c26c926, 0x4d2c6dfc5ac42aed, 0x53380d139d95b3df,
	0x650a73548baf63de, 0x766a0abb3c77b2a8, 0x81c2c92e47edaee6, 0x92722c851482353b,
	0xa2bfe8a14cf10364, 0xa81a664bbc423001, 0xc24b8b70d0f89791, 0xc76c51a30654be30,
	0xd192e819d6ef5218, 0xd69906245565a910, 0xf40e35855771202a, 0x106aa07032bbd1b8,
	0x19a4c116b8d2d0c8, 0x1e376c085141ab53, 0x2748774cdf8eeb99, 0x34b0bcb5e19b48a8,
	0x391c0cb3c5c95a63, 0x4ed8aa4ae3418acb, 0x5b9cca4f7763e373, 0x682e6ff3d6b2b8a3,
	0x748f82ee5defb2fc, 0x78a5636f43172f60, 0x84c87814a1f0ab72, 0x8cc702081a6439ec,
	0x90befffa23631e28, 0xa4506cebde82bde9, 0xbef9a3f7b2c67915, 0xc67178f2e372532b,
	0xca273eceea26619c, 0xd186b8c721c0c207, 0xeada7dd6cde0eb1e, 0xf57d4f7fee6ed178,
	0x06f067aa72176fba, 0x0a637dc5a2c898a6, 0x113f9804bef90dae, 0x1b710b35131c471b,
	0x28db77f523047d84, 0x32caab7b40c72493, 0x3c9ebe0a15c9bebc, 0x431d67c49c100d4c,
	0x4cc5d4becb3e42b6, 0x597f299cfc657e2a, 0x5fcb6fab3ad6faec, 0x6c44198c4a475817,
];

pub const IV160: [u32; 5] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476, 0xc3d2e1f0];

pub const IV224: [u32; 8] = [
	0xc1059ed8, 0x367cd507, 0x3070dd17, 0xf70e5939, 0xffc00b31, 0x68581511, 0x64f98fa7, 0xbefa4fa4,
];

pub const IV256: [u32; 8] = [
	0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a, 0x510e527f, 0x9b05688c, 0x1f83d9ab, 0x5be0cd19,
];

pub const IV384: [u64; 8] = [
	0xcbbb9d5dc1059ed8, 0x629a292a367cd507, 0x9159015a3070dd17, 0x152fecd8f70e5939,
	0x67332667ffc00b31, 0x8eb44a8768581511, 0xdb0c2e0d64f98fa7, 0x47b5481dbefa4fa4,
];

pub const IV512: [u64; 8] = [
	0x6a09e667f3bcc908, 0xbb67ae8584caa73b, 0x3c6ef372fe94f82b, 0xa54ff53a5f1d36f1,
	0x510e527fade682d1, 0x9b05688c2b3e6c1f, 0x1f83d9abfb41bd6b, 0x5be0cd19137e2179,
];

pub const IV512_224: [u64; 8] = [
	0x8c3d37c819544da2, 0x73e1996689dcd4d6, 0x1dfab7ae32ff9c82, 0x679dd514582f9fcf,
	0x0f6d2b697bd44da8, 0x77e36f7304c48942, 0x3f9d85a86a1d36c8, 0x1112e6ad91d692a1,
];

pub const IV512_256: [u64; 8] = [
	0x22312194fc2bf72c, 0x9f555fa3c84c64c2, 0x2393b86b6f53b151, 0x963877195940eabd,
	0x96283ee2a88effe3, 0xbe5e1e2553863992, 0x2b0199fc2c85b8aa, 0x0eb72ddc81c52ca2,
];

const SHA1_ROTATIONS: Rotations = Rotations {
	big0: [0; 3],
	big1: [0; 3],
	small0: [0; 3],
	small1: [0; 3],
};

const SHA256_ROTATIONS: Rotations = Rotations {
	big0: [2, 13, 22],
	big1: [6, 11, 25],
	small0: [7, 18, 3],
	small1: [17, 19, 10],
};

const SHA512_ROTATIONS: Rotations = Rotations {
	big0: [28, 34, 39],
	big1: [14, 18, 41],
	small0: [1, 8, 7],
	small1: [19, 61, 6],
};

fn native_sha256(state: &mut [u32; 8], blocks: &[[u8; 64]]) -> bool {
	dispatch::capabilities().native_sha256 && arch::compress_sha256(state, blocks)
}

macro_rules! sha_descriptor {
	(
		$(#[$attr:meta])*
		$name:ident {
			name: $label:literal,
			family: $family:expr,
			word: $word:ty,
			rounds: $rounds:literal,
			state: $state:literal,
			block: $block:literal,
			digest: $digest:literal,
			output_size: $output_size:ty,
			block_size: $block_size:ty,
			k: $k:expr,
			h: $h:expr,
			rotations: $rotations:expr,
			$(native: $native:path,)?
		}
	) => {
		$(#[$attr])*
		#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
		pub struct $name;

		impl Sha for $name {
			type Word = $word;
			type Buffer<T: WordOps> = [T; $rounds];
			type State<T: WordOps> = [T; $state];
			type Block = [u8; $block];
			type Half = [u8; $block / 2];
			type Digest = [u8; $digest];
			type OutputSize = $output_size;
			type BlockSize = $block_size;

			const NAME: &'static str = $label;
			const FAMILY: Family = $family;
			const ROUNDS: usize = $rounds;
			const STATE_WORDS: usize = $state;
			const DIGEST_BYTES: usize = $digest;
			const K: [$word; $rounds] = $k;
			const H: [$word; $state] = $h;
			const ROTATIONS: Rotations = $rotations;

			fn pads() -> &'static Pads<Self> {
				lazy_static! {
					static ref PADS: Pads<$name> = Pads::new();
				}
				&PADS
			}

			$(
				#[inline]
				fn compress_native(state: &mut [$word; $state], blocks: &[[u8; $block]]) -> bool {
					$native(state, blocks)
				}
			)?
		}

		const_assert!($digest <= $state * std::mem::size_of::<$word>());
		const_assert!($block == 16 * std::mem::size_of::<$word>());
	};
}

sha_descriptor! {
	/// SHA-1.
	H160 {
		name: "SHA-1",
		family: Family::Sha1,
		word: u32,
		rounds: 80,
		state: 5,
		block: 64,
		digest: 20,
		output_size: U20,
		block_size: U64,
		k: K160,
		h: IV160,
		rotations: SHA1_ROTATIONS,
	}
}

sha_descriptor! {
	/// SHA-224: SHA-256 rounds from a distinct IV, truncated to seven words.
	H224 {
		name: "SHA-224",
		family: Family::Sha2,
		word: u32,
		rounds: 64,
		state: 8,
		block: 64,
		digest: 28,
		output_size: U28,
		block_size: U64,
		k: K256,
		h: IV224,
		rotations: SHA256_ROTATIONS,
		native: native_sha256,
	}
}

sha_descriptor! {
	/// SHA-256.
	H256 {
		name: "SHA-256",
		family: Family::Sha2,
		word: u32,
		rounds: 64,
		state: 8,
		block: 64,
		digest: 32,
		output_size: U32,
		block_size: U64,
		k: K256,
		h: IV256,
		rotations: SHA256_ROTATIONS,
		native: native_sha256,
	}
}

sha_descriptor! {
	/// SHA-384: SHA-512 rounds from a distinct IV, truncated to six words.
	H384 {
		name: "SHA-384",
		family: Family::Sha2,
		word: u64,
		rounds: 80,
		state: 8,
		block: 128,
		digest: 48,
		output_size: U48,
		block_size: U128,
		k: K512,
		h: IV384,
		rotations: SHA512_ROTATIONS,
	}
}

sha_descriptor! {
	/// SHA-512.
	H512 {
		name: "SHA-512",
		family: Family::Sha2,
		word: u64,
		rounds: 80,
		state: 8,
		block: 128,
		digest: 64,
		output_size: U64,
		block_size: U128,
		k: K512,
		h: IV512,
		rotations: SHA512_ROTATIONS,
	}
}

sha_descriptor! {
	/// SHA-512/224. The digest ends in the middle of the fourth word.
	H512_224 {
		name: "SHA-512/224",
		family: Family::Sha2,
		word: u64,
		rounds: 80,
		state: 8,
		block: 128,
		digest: 28,
		output_size: U28,
		block_size: U128,
		k: K512,
		h: IV512_224,
		rotations: SHA512_ROTATIONS,
	}
}

sha_descriptor! {
	/// SHA-512/256.
	H512_256 {
		name: "SHA-512/256",
		family: Family::Sha2,
		word: u64,
		rounds: 80,
		state: 8,
		block: 128,
		digest: 32,
		output_size: U32,
		block_size: U128,
		k: K512,
		h: IV512_256,
		rotations: SHA512_ROTATIONS,
	}
}
