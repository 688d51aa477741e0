// Copyright 2025 Irreducible Inc.

//! The round engine.
//!
//! Rounds never move the working variables around: each unrolled round is called with its
//! arguments permuted, so the physical slot holding a logical variable rotates by one position per
//! round exactly as the textbook reassignment would.

use super::{Family, Sha};
use crate::{
	primitives::{big_sigma, choice, majority, parity},
	word::WordOps,
};

/// Runs all rounds over `buffer` and adds the result into `state`.
#[inline]
pub fn compress<H: Sha, T: WordOps<Scalar = H::Word>>(
	state: &mut H::State<T>,
	buffer: &H::Buffer<T>,
) {
	let mut working = *state;
	rounds::<H, T>(&mut working, buffer);
	summarize::<H, T>(state, &working);
}

/// Davies-Meyer feed-forward: adds the post-round working variables into the state.
#[inline(always)]
pub fn summarize<H: Sha, T: WordOps<Scalar = H::Word>>(
	state: &mut H::State<T>,
	working: &H::State<T>,
) {
	for i in 0..H::STATE_WORDS {
		state[i] = state[i].wrapping_add(working[i]);
	}
}

#[inline]
pub fn rounds<H: Sha, T: WordOps<Scalar = H::Word>>(
	working: &mut H::State<T>,
	buffer: &H::Buffer<T>,
) {
	match H::FAMILY {
		Family::Sha1 => sha1_rounds::<H, T>(working, buffer),
		Family::Sha2 => sha2_rounds::<H, T>(working, buffer),
	}
}

#[allow(clippy::too_many_arguments)]
#[inline(always)]
fn sha2_round<H: Sha, T: WordOps<Scalar = H::Word>>(
	a: T,
	b: T,
	c: T,
	d: &mut T,
	e: T,
	f: T,
	g: T,
	h: &mut T,
	k: H::Word,
	w: T,
) {
	let rotations = H::ROTATIONS;
	let t1 = h
		.wrapping_add(big_sigma(e, rotations.big1))
		.wrapping_add(choice(e, f, g))
		.wrapping_add(T::splat(k))
		.wrapping_add(w);
	let t2 = big_sigma(a, rotations.big0).wrapping_add(majority(a, b, c));
	*d = d.wrapping_add(t1);
	*h = t1.wrapping_add(t2);
}

fn sha2_rounds<H: Sha, T: WordOps<Scalar = H::Word>>(
	working: &mut H::State<T>,
	buffer: &H::Buffer<T>,
) {
	let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] =
		[0, 1, 2, 3, 4, 5, 6, 7].map(|i| working[i]);
	let k = &H::K;

	for r in (0..H::ROUNDS).step_by(8) {
		sha2_round::<H, T>(a, b, c, &mut d, e, f, g, &mut h, k[r], buffer[r]);
		sha2_round::<H, T>(h, a, b, &mut c, d, e, f, &mut g, k[r + 1], buffer[r + 1]);
		sha2_round::<H, T>(g, h, a, &mut b, c, d, e, &mut f, k[r + 2], buffer[r + 2]);
		sha2_round::<H, T>(f, g, h, &mut a, b, c, d, &mut e, k[r + 3], buffer[r + 3]);
		sha2_round::<H, T>(e, f, g, &mut h, a, b, c, &mut d, k[r + 4], buffer[r + 4]);
		sha2_round::<H, T>(d, e, f, &mut g, h, a, b, &mut c, k[r + 5], buffer[r + 5]);
		sha2_round::<H, T>(c, d, e, &mut f, g, h, a, &mut b, k[r + 6], buffer[r + 6]);
		sha2_round::<H, T>(b, c, d, &mut e, f, g, h, &mut a, k[r + 7], buffer[r + 7]);
	}

	for (i, value) in [a, b, c, d, e, f, g, h].into_iter().enumerate() {
		working[i] = value;
	}
}

#[inline(always)]
fn sha1_round<H: Sha, T: WordOps<Scalar = H::Word>>(
	a: T,
	b: &mut T,
	c: T,
	d: T,
	e: &mut T,
	round: usize,
	w: T,
) {
	let f = match round / 20 {
		0 => choice(*b, c, d),
		2 => majority(*b, c, d),
		_ => parity(*b, c, d),
	};
	*e = e
		.wrapping_add(a.rotate_left(5))
		.wrapping_add(f)
		.wrapping_add(T::splat(H::K[round]))
		.wrapping_add(w);
	*b = b.rotate_left(30);
}

fn sha1_rounds<H: Sha, T: WordOps<Scalar = H::Word>>(
	working: &mut H::State<T>,
	buffer: &H::Buffer<T>,
) {
	let [mut a, mut b, mut c, mut d, mut e] = [0, 1, 2, 3, 4].map(|i| working[i]);

	for r in (0..H::ROUNDS).step_by(5) {
		sha1_round::<H, T>(a, &mut b, c, d, &mut e, r, buffer[r]);
		sha1_round::<H, T>(e, &mut a, b, c, &mut d, r + 1, buffer[r + 1]);
		sha1_round::<H, T>(d, &mut e, a, b, &mut c, r + 2, buffer[r + 2]);
		sha1_round::<H, T>(c, &mut d, e, a, &mut b, r + 3, buffer[r + 3]);
		sha1_round::<H, T>(b, &mut c, d, e, &mut a, r + 4, buffer[r + 4]);
	}

	for (i, value) in [a, b, c, d, e].into_iter().enumerate() {
		working[i] = value;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::sha::{schedule::schedule, H160, H256};

	#[test]
	fn test_sha256_single_block_of_abc() {
		let mut buffer = [0u32; 64];
		buffer[0] = 0x61626380;
		buffer[15] = 0x00000018;
		schedule::<H256, u32>(&mut buffer);

		let mut state = H256::H;
		compress::<H256, u32>(&mut state, &buffer);
		assert_eq!(
			state,
			[
				0xba7816bf, 0x8f01cfea, 0x414140de, 0x5dae2223, 0xb00361a3, 0x96177a9c, 0xb410ff61,
				0xf20015ad
			]
		);
	}

	#[test]
	fn test_sha1_single_block_of_abc() {
		let mut buffer = [0u32; 80];
		buffer[0] = 0x61626380;
		buffer[15] = 0x00000018;
		schedule::<H160, u32>(&mut buffer);

		let mut state = H160::H;
		compress::<H160, u32>(&mut state, &buffer);
		assert_eq!(state, [0xa9993e36, 0x4706816a, 0xba3e2571, 0x7850c26c, 0x9cd0d89d]);
	}
}
