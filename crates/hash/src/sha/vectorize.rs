// Copyright 2025 Irreducible Inc.

//! Lane-packed hashing of independent blocks.
//!
//! Word `i` of every block in a group is packed into one word, the schedule and the rounds run once
//! over the packed words, and the results are unpacked lane by lane. A batch is cut into groups of
//! the widest packed word first and the remainder is handed down to narrower ones.

use super::{
	algorithm::Algorithm, compress::compress, schedule::schedule, zeroed_buffer, Pads, Params,
	Sha, BLOCK_WORDS,
};
use crate::{
	dispatch::Strategy,
	lanes::{Lanes, Packed, MAX_LANES},
	word::{Word, WordArray},
};

/// What a batch computes for each block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BatchKind {
	Hash,
	/// The hash of the hash, which on a block of two sibling digests is one merkle node.
	DoubleHash,
}

/// Work over `P::LANES` consecutive items of a batch.
trait LaneKernel<W: Word> {
	fn run<P: Packed<Scalar = W>>(&mut self, offset: usize);
}

fn cascade<W: Word, K: LaneKernel<W>>(kernel: &mut K, count: usize, strategy: Strategy) {
	let mut offset = 0;
	if strategy == Strategy::Vectorized {
		offset = step::<W, W::Wide, K>(kernel, offset, count);
		offset = step::<W, Lanes<W, 4>, K>(kernel, offset, count);
		offset = step::<W, Lanes<W, 2>, K>(kernel, offset, count);
	}
	step::<W, W, K>(kernel, offset, count);
}

#[inline]
fn step<W: Word, P: Packed<Scalar = W>, K: LaneKernel<W>>(
	kernel: &mut K,
	mut offset: usize,
	count: usize,
) -> usize {
	while count - offset >= P::LANES {
		kernel.run::<P>(offset);
		offset += P::LANES;
	}
	offset
}

/// Packs the first sixteen words of every block into `buffer`.
#[inline]
fn input_lanes<H: Sha, P: Packed<Scalar = H::Word>>(
	buffer: &mut H::Buffer<P>,
	blocks: &[H::Block],
) {
	debug_assert_eq!(blocks.len(), P::LANES);

	let word_bytes = Params::<H>::WORD_BYTES;
	let mut words = [H::Word::default(); MAX_LANES];
	for i in 0..BLOCK_WORDS {
		for (word, block) in words.iter_mut().zip(blocks) {
			*word = H::Word::from_be_slice(&block.as_ref()[i * word_bytes..(i + 1) * word_bytes]);
		}
		buffer[i] = P::gather(&words);
	}
}

/// Unpacks a packed state into one scalar state per lane.
#[inline]
fn output_lanes<H: Sha, P: Packed<Scalar = H::Word>>(
	state: &H::State<P>,
	states: &mut [H::State<H::Word>],
) {
	let mut words = [H::Word::default(); MAX_LANES];
	for i in 0..H::STATE_WORDS {
		state[i].scatter(&mut words);
		for (lane, word) in states.iter_mut().zip(words) {
			lane[i] = word;
		}
	}
}

fn hash_lanes<H: Sha, P: Packed<Scalar = H::Word>>(
	blocks: &[H::Block],
	out: &mut [H::Digest],
	kind: BatchKind,
) {
	let pads = H::pads();

	let mut buffer = zeroed_buffer::<H, P>();
	input_lanes::<H, P>(&mut buffer, blocks);
	schedule::<H, P>(&mut buffer);

	let initial = <H::State<P> as WordArray<P>>::from_fn(|i| P::splat(H::H[i]));
	let mut state = initial;
	compress::<H, P>(&mut state, &buffer);
	compress::<H, P>(&mut state, &pads.block_pad_lanes::<P>());

	let rehash_lanes = kind == BatchKind::DoubleHash && Params::<H>::DIGEST_ALIGNED;
	if rehash_lanes {
		let mut buffer = zeroed_buffer::<H, P>();
		buffer.as_mut()[..Params::<H>::DIGEST_WORDS]
			.copy_from_slice(&state.as_ref()[..Params::<H>::DIGEST_WORDS]);
		Pads::<H>::load(&mut buffer, pads.digest_pad());
		schedule::<H, P>(&mut buffer);

		state = initial;
		compress::<H, P>(&mut state, &buffer);
	}

	let mut states = [H::H; MAX_LANES];
	output_lanes::<H, P>(&state, &mut states[..P::LANES]);
	for (digest, lane) in out.iter_mut().zip(&states[..P::LANES]) {
		*digest = if kind == BatchKind::DoubleHash && !rehash_lanes {
			Algorithm::<H>::hash_state(lane)
		} else {
			Algorithm::<H>::normalize(lane)
		};
	}
}

/// Expands the schedule of every block, one buffer per block.
fn schedule_lanes<H: Sha, P: Packed<Scalar = H::Word>>(
	blocks: &[H::Block],
	buffers: &mut [H::Buffer<H::Word>],
) {
	let mut buffer = zeroed_buffer::<H, P>();
	input_lanes::<H, P>(&mut buffer, blocks);
	schedule::<H, P>(&mut buffer);

	let mut words = [H::Word::default(); MAX_LANES];
	for round in 0..H::ROUNDS {
		buffer[round].scatter(&mut words);
		for (lane, word) in buffers.iter_mut().zip(words) {
			lane[round] = word;
		}
	}
}

struct HashKernel<'a, H: Sha> {
	blocks: &'a [H::Block],
	out: &'a mut [H::Digest],
	kind: BatchKind,
}

impl<H: Sha> LaneKernel<H::Word> for HashKernel<'_, H> {
	#[inline]
	fn run<P: Packed<Scalar = H::Word>>(&mut self, offset: usize) {
		let range = offset..offset + P::LANES;
		hash_lanes::<H, P>(&self.blocks[range.clone()], &mut self.out[range], self.kind);
	}
}

struct ScheduleKernel<'a, H: Sha> {
	blocks: &'a [H::Block],
	buffers: &'a mut [H::Buffer<H::Word>],
}

impl<H: Sha> LaneKernel<H::Word> for ScheduleKernel<'_, H> {
	#[inline]
	fn run<P: Packed<Scalar = H::Word>>(&mut self, offset: usize) {
		let range = offset..offset + P::LANES;
		schedule_lanes::<H, P>(&self.blocks[range.clone()], &mut self.buffers[range]);
	}
}

/// Compresses `blocks[i]` into `states[i]` for every lane at once.
fn accumulate_lanes<H: Sha, P: Packed<Scalar = H::Word>>(
	states: &mut [H::State<H::Word>],
	blocks: &[H::Block],
) {
	let mut buffer = zeroed_buffer::<H, P>();
	input_lanes::<H, P>(&mut buffer, blocks);
	schedule::<H, P>(&mut buffer);

	let mut words = [H::Word::default(); MAX_LANES];
	let mut state = <H::State<P> as WordArray<P>>::from_fn(|i| {
		for (word, lane) in words.iter_mut().zip(states.iter()) {
			*word = lane[i];
		}
		P::gather(&words)
	});
	compress::<H, P>(&mut state, &buffer);
	output_lanes::<H, P>(&state, states);
}

struct AccumulateKernel<'a, H: Sha> {
	states: &'a mut [H::State<H::Word>],
	blocks: &'a [H::Block],
}

impl<H: Sha> LaneKernel<H::Word> for AccumulateKernel<'_, H> {
	#[inline]
	fn run<P: Packed<Scalar = H::Word>>(&mut self, offset: usize) {
		let range = offset..offset + P::LANES;
		accumulate_lanes::<H, P>(&mut self.states[range.clone()], &self.blocks[range]);
	}
}

/// Hashes every block of `blocks` independently into the matching slot of `out`.
pub(crate) fn hash_batch<H: Sha>(
	blocks: &[H::Block],
	out: &mut [H::Digest],
	kind: BatchKind,
	strategy: Strategy,
) {
	assert_eq!(blocks.len(), out.len());

	let mut kernel = HashKernel::<H> { blocks, out, kind };
	cascade::<H::Word, _>(&mut kernel, blocks.len(), strategy);
}

/// Compresses `blocks[i]` into `states[i]`, each state belonging to a different message.
pub(crate) fn accumulate_batch<H: Sha>(
	states: &mut [H::State<H::Word>],
	blocks: &[H::Block],
	strategy: Strategy,
) {
	assert_eq!(states.len(), blocks.len());

	let count = blocks.len();
	let mut kernel = AccumulateKernel::<H> { states, blocks };
	cascade::<H::Word, _>(&mut kernel, count, strategy);
}

/// Accumulates `blocks` in order, expanding the schedules of up to [`MAX_LANES`] blocks at once.
pub(crate) fn accumulate_scheduled<H: Sha>(
	state: &mut H::State<H::Word>,
	blocks: &[H::Block],
	strategy: Strategy,
) {
	let mut buffers = [zeroed_buffer::<H, H::Word>(); MAX_LANES];
	for group in blocks.chunks(MAX_LANES) {
		let buffers = &mut buffers[..group.len()];
		let mut kernel = ScheduleKernel::<H> {
			blocks: group,
			buffers,
		};
		cascade::<H::Word, _>(&mut kernel, group.len(), strategy);

		for buffer in kernel.buffers.iter() {
			compress::<H, H::Word>(state, buffer);
		}
	}
}
