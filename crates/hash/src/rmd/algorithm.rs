// Copyright 2025 Irreducible Inc.

use std::marker::PhantomData;

use bytemuck::Zeroable;
use digest::consts::U64;

use super::{compress::compress, Rmd, BLOCK_WORDS};
use crate::{
	codec::{decode, encode, Endian},
	hasher::Hasher,
};

const CHUNK_WORDS: usize = BLOCK_WORDS / 2;

/// A final block of `data_words` message words (left zero) and a message of `bits` bits.
const fn pad(data_words: usize, bits: u64) -> [u32; BLOCK_WORDS] {
	let mut words = [0u32; BLOCK_WORDS];
	if data_words < BLOCK_WORDS - 2 {
		words[data_words] = 0x80;
	}
	words[BLOCK_WORDS - 2] = bits as u32;
	words[BLOCK_WORDS - 1] = (bits >> 32) as u32;
	words
}

/// Completes a half block of message data.
const CHUNK_PAD: [u32; BLOCK_WORDS] = pad(CHUNK_WORDS, 256);

/// The hashing API of the RIPEMD variant `H`.
///
/// With `CONCURRENT` set, the two lines of every compression run on the rayon pool.
#[derive(Debug, Clone, Copy, Default)]
pub struct Algorithm<H, const CONCURRENT: bool = false>(PhantomData<H>);

impl<H: Rmd, const CONCURRENT: bool> Algorithm<H, CONCURRENT> {
	#[inline]
	pub fn initial() -> H::State {
		H::H
	}

	pub fn accumulate(state: &mut H::State, block: &[u8; 64]) {
		let mut words = [0u32; BLOCK_WORDS];
		decode(Endian::Little, block, &mut words);
		compress::<H, CONCURRENT>(state, &words);
	}

	pub fn accumulate_blocks(state: &mut H::State, blocks: &[[u8; 64]]) {
		for block in blocks {
			Self::accumulate(state, block);
		}
	}

	pub fn accumulate_block_refs(state: &mut H::State, blocks: &[&[u8; 64]]) {
		for block in blocks {
			Self::accumulate(state, block);
		}
	}

	/// Finalizes a message of `blocks` whole blocks.
	pub fn finalize(mut state: H::State, blocks: u64) -> H::Digest {
		compress::<H, CONCURRENT>(&mut state, &pad(0, blocks.wrapping_mul(512)));
		Self::normalize(&state)
	}

	pub fn normalize(state: &H::State) -> H::Digest {
		let mut digest = H::Digest::zeroed();
		encode(Endian::Little, state.as_ref(), digest.as_mut());
		digest
	}

	pub fn hash_block(block: &[u8; 64]) -> H::Digest {
		let mut state = H::H;
		Self::accumulate(&mut state, block);
		Self::finalize(state, 1)
	}

	pub fn hash_half(half: &[u8; 32]) -> H::Digest {
		let mut words = CHUNK_PAD;
		decode(Endian::Little, half, &mut words[..CHUNK_WORDS]);

		let mut state = H::H;
		compress::<H, CONCURRENT>(&mut state, &words);
		Self::normalize(&state)
	}

	pub fn hash_pair(left: &[u8; 32], right: &[u8; 32]) -> H::Digest {
		let mut block = [0u8; 64];
		block[..32].copy_from_slice(left);
		block[32..].copy_from_slice(right);
		Self::hash_block(&block)
	}

	pub fn hash_blocks(blocks: &[[u8; 64]]) -> H::Digest {
		let mut state = H::H;
		Self::accumulate_blocks(&mut state, blocks);
		Self::finalize(state, blocks.len() as u64)
	}

	pub fn hash_block_refs(blocks: &[&[u8; 64]]) -> H::Digest {
		let mut state = H::H;
		Self::accumulate_block_refs(&mut state, blocks);
		Self::finalize(state, blocks.len() as u64)
	}

	/// Hashes a message of any length.
	pub fn hash_bytes(data: &[u8]) -> H::Digest {
		<Self as Hasher>::hash_bytes(data)
	}
}

impl<H: Rmd, const CONCURRENT: bool> Hasher for Algorithm<H, CONCURRENT> {
	type State = H::State;
	type Block = [u8; 64];
	type Digest = H::Digest;
	type OutputSize = H::OutputSize;
	type BlockSize = U64;

	const NAME: &'static str = H::NAME;
	const COUNT_BYTES: usize = 8;
	const COUNT_ENDIAN: Endian = Endian::Little;
	const LIMIT_BYTES: u64 = u64::MAX / 8;

	#[inline]
	fn initial() -> Self::State {
		H::H
	}

	#[inline]
	fn accumulate(state: &mut Self::State, block: &Self::Block) {
		Algorithm::<H, CONCURRENT>::accumulate(state, block)
	}

	#[inline]
	fn accumulate_blocks(state: &mut Self::State, blocks: &[Self::Block]) {
		Algorithm::<H, CONCURRENT>::accumulate_blocks(state, blocks)
	}

	#[inline]
	fn finalize(state: Self::State, blocks: u64) -> Self::Digest {
		Algorithm::<H, CONCURRENT>::finalize(state, blocks)
	}

	#[inline]
	fn normalize(state: &Self::State) -> Self::Digest {
		Algorithm::<H, CONCURRENT>::normalize(state)
	}
}
