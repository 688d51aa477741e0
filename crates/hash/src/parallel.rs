// Copyright 2025 Irreducible Inc.

//! Batch hashing spread over the rayon pool.
//!
//! Inputs are split into one chunk per thread, rounded to whole lane groups, and every chunk
//! runs through the lane kernels on its own.

use bitsys_utils::rayon::get_log_max_threads;
use bytemuck::Zeroable;
use rayon::{
	iter::{IndexedParallelIterator, ParallelIterator},
	slice::{ParallelSlice, ParallelSliceMut},
};
use tracing::instrument;

use crate::{
	lanes::MAX_LANES,
	sha::{Algorithm, Merkle, Sha},
};

/// Levels below this many nodes are cheaper to reduce on the calling thread.
const PARALLEL_THRESHOLD: usize = 8 * MAX_LANES;

fn chunk_size(len: usize) -> usize {
	let per_thread = len.div_ceil(1 << get_log_max_threads());
	per_thread.next_multiple_of(MAX_LANES).max(MAX_LANES)
}

/// Hashes every block of `blocks` into the matching slot of `out`.
///
/// # Panics
/// Panics if `blocks` and `out` differ in length.
#[instrument(skip_all, level = "debug", fields(algorithm = H::NAME, blocks = blocks.len()))]
pub fn par_hash_blocks<H: Sha>(blocks: &[H::Block], out: &mut [H::Digest]) {
	assert_eq!(blocks.len(), out.len(), "one digest per block");

	let chunk = chunk_size(blocks.len());
	blocks
		.par_chunks(chunk)
		.zip(out.par_chunks_mut(chunk))
		.for_each(|(blocks, out)| Algorithm::<H>::batch_hash(blocks, out));
}

/// Reduces `digests` to the root of their bitcoin merkle tree, hashing each wide level in
/// parallel.
///
/// Agrees with [`Algorithm::merkle_root`].
#[instrument(skip_all, level = "debug", fields(algorithm = H::NAME, leaves = digests.len()))]
pub fn par_merkle_root<H: Merkle>(mut digests: Vec<H::Digest>) -> H::Digest {
	while digests.len() >= PARALLEL_THRESHOLD {
		if let Some(&last) = digests.last() {
			if digests.len() % 2 == 1 {
				digests.push(last);
			}
		}

		let blocks: &[H::Block] = bytemuck::cast_slice(digests.as_slice());
		let mut level = vec![H::Digest::zeroed(); blocks.len()];
		let chunk = chunk_size(blocks.len());
		blocks
			.par_chunks(chunk)
			.zip(level.par_chunks_mut(chunk))
			.for_each(|(blocks, out)| Algorithm::<H>::batch_double_hash(blocks, out));
		digests = level;
	}
	Algorithm::<H>::merkle_root(digests)
}

#[cfg(test)]
mod tests {
	use rand::{rngs::StdRng, RngCore, SeedableRng};

	use super::*;
	use crate::sha::{H160, H256, H512};

	fn random_digests<H: Sha>(rng: &mut StdRng, count: usize) -> Vec<H::Digest> {
		(0..count)
			.map(|_| {
				let mut digest = H::Digest::zeroed();
				rng.fill_bytes(digest.as_mut());
				digest
			})
			.collect()
	}

	#[test]
	fn test_par_hash_blocks_matches_single() {
		let mut rng = StdRng::seed_from_u64(7);
		let mut blocks = vec![[0u8; 64]; 3 * MAX_LANES + 5];
		for block in &mut blocks {
			rng.fill_bytes(block);
		}

		let mut out = vec![[0u8; 20]; blocks.len()];
		par_hash_blocks::<H160>(&blocks, &mut out);
		for (block, digest) in blocks.iter().zip(&out) {
			assert_eq!(*digest, Algorithm::<H160>::hash_block(block));
		}
	}

	#[test]
	fn test_par_merkle_root_matches_sequential() {
		let mut rng = StdRng::seed_from_u64(11);
		for count in [0, 1, 2, PARALLEL_THRESHOLD - 1, PARALLEL_THRESHOLD, 1001] {
			let leaves = random_digests::<H256>(&mut rng, count);
			assert_eq!(
				par_merkle_root::<H256>(leaves.clone()),
				Algorithm::<H256>::merkle_root(leaves),
				"{count} leaves"
			);
		}

		let leaves = random_digests::<H512>(&mut rng, 3 * PARALLEL_THRESHOLD + 1);
		assert_eq!(par_merkle_root::<H512>(leaves.clone()), Algorithm::<H512>::merkle_root(leaves));
	}
}
