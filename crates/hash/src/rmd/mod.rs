// Copyright 2025 Irreducible Inc.

//! RIPEMD-128 and RIPEMD-160.
//!
//! Both run two independent lines of rounds over the same block and merge them into the state.
//! Words and the length field are little-endian.

mod algorithm;
mod compress;
pub mod constants;

pub use algorithm::Algorithm;
pub use constants::{H128, H160};

use digest::generic_array::ArrayLength;

use crate::word::{ByteArray, WordArray};

/// Words in a message block.
pub const BLOCK_WORDS: usize = 16;
/// Rounds in one group, which share a boolean function and a constant.
pub const GROUP_ROUNDS: usize = 16;

/// An algorithm descriptor of the RIPEMD family.
pub trait Rmd: Sized + Send + Sync + 'static {
	type State: WordArray<u32>;
	type Digest: ByteArray;
	type OutputSize: ArrayLength<u8> + 'static;

	const NAME: &'static str;
	/// Rounds per line.
	const ROUNDS: usize;
	const STATE_WORDS: usize;

	/// One constant per group, left line groups first.
	const K: &'static [u32];
	/// Message word selected by each round, left line first.
	const WORD: &'static [usize];
	/// Left rotation applied by each round, left line first.
	const ROT: &'static [u32];
	/// Initialization vector.
	const H: Self::State;
}
