// Copyright 2025 Irreducible Inc.

//! Bitcoin merkle trees.
//!
//! Two sibling digests fill exactly one block, so a tree level is a batch of independent double
//! hashed blocks. The intermediate state of each node never leaves the round engine in byte form.

use std::marker::PhantomData;

use bytemuck::Zeroable;
use static_assertions::const_assert_eq;
use tracing::instrument;

use super::{
	algorithm::Algorithm,
	constants::{H256, H512},
	vectorize::{hash_batch, BatchKind},
	Params, Sha,
};
use crate::{compression::PseudoCompressionFunction, dispatch::Strategy, lanes::MAX_LANES};

/// A variant whose digest is exactly half a block, so that two digests form one block.
pub trait Merkle: Sha {}

impl Merkle for H256 {}
impl Merkle for H512 {}

const_assert_eq!(<H256 as Sha>::DIGEST_BYTES * 2, Params::<H256>::BLOCK_BYTES);
const_assert_eq!(<H512 as Sha>::DIGEST_BYTES * 2, Params::<H512>::BLOCK_BYTES);

impl<H: Merkle> Algorithm<H> {
	/// Replaces `digests` with the next level of the tree.
	///
	/// An odd level is completed by duplicating its last digest. The level is reduced in place.
	pub fn merkle_hash(digests: &mut Vec<H::Digest>) {
		Self::merkle_hash_with(digests, Strategy::detected());
	}

	/// [`Algorithm::merkle_hash`] with an explicit batch strategy.
	pub fn merkle_hash_with(digests: &mut Vec<H::Digest>, strategy: Strategy) {
		if let Some(&last) = digests.last() {
			if digests.len() % 2 == 1 {
				digests.push(last);
			}
		}

		let pairs = digests.len() / 2;
		let mut nodes = [H::Digest::zeroed(); MAX_LANES];
		let mut start = 0;
		while start < pairs {
			let count = MAX_LANES.min(pairs - start);
			let blocks: &[H::Block] = bytemuck::cast_slice(digests.as_slice());
			hash_batch::<H>(
				&blocks[start..start + count],
				&mut nodes[..count],
				BatchKind::DoubleHash,
				strategy,
			);

			// Node `i` overwrites the bytes of block `i / 2`, which has already been read.
			digests[start..start + count].copy_from_slice(&nodes[..count]);
			start += count;
		}
		digests.truncate(pairs);
	}

	/// Reduces `digests` to the root of their tree.
	///
	/// No digests give the zero digest, and a single digest is its own root.
	#[instrument(skip_all, level = "debug", fields(algorithm = H::NAME, leaves = digests.len()))]
	pub fn merkle_root(mut digests: Vec<H::Digest>) -> H::Digest {
		if digests.is_empty() {
			return H::Digest::zeroed();
		}

		while digests.len() > 1 {
			Self::merkle_hash(&mut digests);
		}
		digests[0]
	}
}

/// Compresses two sibling digests into their parent node.
#[derive(Debug)]
pub struct MerkleCompression<H>(PhantomData<H>);

impl<H> MerkleCompression<H> {
	pub fn new() -> Self {
		Self(PhantomData)
	}
}

impl<H> Clone for MerkleCompression<H> {
	fn clone(&self) -> Self {
		Self::new()
	}
}

impl<H> Default for MerkleCompression<H> {
	fn default() -> Self {
		Self::new()
	}
}

impl<H: Merkle> PseudoCompressionFunction<H::Digest, 2> for MerkleCompression<H> {
	fn compress(&self, [left, right]: [H::Digest; 2]) -> H::Digest {
		let mut block = H::Block::zeroed();
		let (first, second) = block.as_mut().split_at_mut(H::DIGEST_BYTES);
		first.copy_from_slice(left.as_ref());
		second.copy_from_slice(right.as_ref());
		Algorithm::<H>::double_hash_block(&block)
	}
}
