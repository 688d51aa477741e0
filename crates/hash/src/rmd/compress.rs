// Copyright 2025 Irreducible Inc.

use bitsys_utils::checked_arithmetics::checked_int_div;

use super::{Rmd, BLOCK_WORDS, GROUP_ROUNDS};
use crate::primitives::ripemd_f;

/// Runs both lines over `words` and merges them into `state`.
///
/// With `CONCURRENT` the two lines run as a `rayon::join`; they share nothing but their inputs.
#[inline]
pub fn compress<H: Rmd, const CONCURRENT: bool>(
	state: &mut H::State,
	words: &[u32; BLOCK_WORDS],
) {
	let initial: &H::State = state;
	let (left, right) = if CONCURRENT {
		rayon::join(
			|| line::<H>(initial, words, Line::Left),
			|| line::<H>(initial, words, Line::Right),
		)
	} else {
		(line::<H>(initial, words, Line::Left), line::<H>(initial, words, Line::Right))
	};
	summarize::<H>(state, &left, &right);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
	Left,
	Right,
}

/// The rounds of one line, from a copy of `state`.
pub fn line<H: Rmd>(state: &H::State, words: &[u32; BLOCK_WORDS], side: Line) -> H::State {
	let groups = checked_int_div(H::ROUNDS, GROUP_ROUNDS);
	let rounds = match side {
		Line::Left => 0..H::ROUNDS,
		Line::Right => H::ROUNDS..2 * H::ROUNDS,
	};

	let mut working = *state;
	for round in rounds {
		let group = round / GROUP_ROUNDS;
		let function = match side {
			Line::Left => group,
			Line::Right => 2 * groups - 1 - group,
		};
		let x = words[H::WORD[round]].wrapping_add(H::K[group]);
		step::<H>(&mut working, function, x, H::ROT[round]);
	}
	working
}

#[inline(always)]
fn step<H: Rmd>(working: &mut H::State, function: usize, x: u32, rotation: u32) {
	let [a, b, c, d] = [0, 1, 2, 3].map(|i| working[i]);
	let mixed = a
		.wrapping_add(ripemd_f(function, b, c, d))
		.wrapping_add(x)
		.rotate_left(rotation);

	if H::STATE_WORDS == 5 {
		let e = working[4];
		let t = mixed.wrapping_add(e);
		working[0] = e;
		working[4] = d;
		working[3] = c.rotate_left(10);
		working[2] = b;
		working[1] = t;
	} else {
		working[0] = d;
		working[3] = c;
		working[2] = b;
		working[1] = mixed;
	}
}

/// Merges the two lines into the state, each word crossing over from different positions.
#[inline]
pub fn summarize<H: Rmd>(state: &mut H::State, left: &H::State, right: &H::State) {
	let n = H::STATE_WORDS;
	let previous = *state;
	for i in 0..n {
		state[i] = previous[(i + 1) % n]
			.wrapping_add(left[(i + 2) % n])
			.wrapping_add(right[(i + 3) % n]);
	}
}
