// Copyright 2025 Irreducible Inc.

//! The SHA-1 and SHA-2 family on one generic engine.
//!
//! Every variant is a zero-sized descriptor implementing [`Sha`], carrying word width, round
//! count, state size and constant tables. [`Algorithm`] turns a descriptor into the single-shot,
//! streaming and merkle hashing API.

mod algorithm;
mod compress;
pub mod constants;
mod merkle;
mod pad;
mod schedule;
mod vectorize;

pub use algorithm::Algorithm;
pub use constants::{H160, H224, H256, H384, H512, H512_224, H512_256};
pub use merkle::{Merkle, MerkleCompression};
pub use pad::Pads;

use bitsys_utils::checked_arithmetics::checked_int_div;
use digest::generic_array::ArrayLength;

use crate::word::{ByteArray, Word, WordArray, WordOps};

/// Which round structure a descriptor uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
	/// 80 rounds over five words, one boolean function per group of twenty rounds.
	Sha1,
	/// 64 or 80 rounds over eight words with the Σ/σ functions.
	Sha2,
}

/// Rotate and shift amounts of the SHA-2 Σ0, Σ1, σ0 and σ1 functions.
///
/// The last entry of `small0`/`small1` is a right shift, all others are right rotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotations {
	pub big0: [u32; 3],
	pub big1: [u32; 3],
	pub small0: [u32; 3],
	pub small1: [u32; 3],
}

/// Words in a message block, for every variant.
pub const BLOCK_WORDS: usize = 16;

/// Words in the length field at the end of the final block, for every variant.
pub const COUNT_WORDS: usize = 2;

/// An algorithm descriptor of the SHA family.
pub trait Sha: Sized + Send + Sync + 'static {
	type Word: Word;

	/// The message schedule, one word per round.
	type Buffer<T: WordOps>: WordArray<T>;
	type State<T: WordOps>: WordArray<T>;

	type Block: ByteArray;
	type Half: ByteArray;
	type Digest: ByteArray;

	type OutputSize: ArrayLength<u8> + 'static;
	type BlockSize: ArrayLength<u8> + 'static;

	const NAME: &'static str;
	const FAMILY: Family;
	const ROUNDS: usize;
	const STATE_WORDS: usize;
	const DIGEST_BYTES: usize;

	/// Round constants, one per round.
	const K: Self::Buffer<Self::Word>;
	/// Initialization vector.
	const H: Self::State<Self::Word>;
	/// Ignored by [`Family::Sha1`].
	const ROTATIONS: Rotations;

	/// Padding templates, built on first use.
	fn pads() -> &'static Pads<Self>;

	/// Compress `blocks` into `state` on dedicated hardware, if there is any.
	///
	/// Returns `false` without touching `state` when no native implementation applies.
	#[inline]
	fn compress_native(_state: &mut Self::State<Self::Word>, _blocks: &[Self::Block]) -> bool {
		false
	}
}

/// Parameters derived from a descriptor.
pub(crate) struct Params<H>(std::marker::PhantomData<H>);

impl<H: Sha> Params<H> {
	pub const WORD_BYTES: usize = <H::Word as Word>::BYTES;
	pub const BLOCK_BYTES: usize = BLOCK_WORDS * Self::WORD_BYTES;
	pub const CHUNK_WORDS: usize = BLOCK_WORDS / 2;
	pub const CHUNK_BYTES: usize = checked_int_div(Self::BLOCK_BYTES, 2);
	pub const COUNT_BYTES: usize = COUNT_WORDS * Self::WORD_BYTES;
	pub const BLOCK_BITS: u128 = (Self::BLOCK_BYTES * 8) as u128;

	/// Whether the digest consists of whole words, so that a state can be rehashed without
	/// serializing it.
	pub const DIGEST_ALIGNED: bool = H::DIGEST_BYTES % Self::WORD_BYTES == 0;
	/// Whole words in the digest.
	pub const DIGEST_WORDS: usize = H::DIGEST_BYTES / Self::WORD_BYTES;
}

/// A message schedule buffer with every word zero.
#[inline(always)]
pub(crate) fn zeroed_buffer<H: Sha, T: WordOps<Scalar = H::Word>>() -> H::Buffer<T> {
	<H::Buffer<T> as WordArray<T>>::filled(T::splat(H::Word::default()))
}
