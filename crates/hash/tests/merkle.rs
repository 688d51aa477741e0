// Copyright 2025 Irreducible Inc.

use bitsys_hash::{
	bitcoin_hash_pair, compress_tree, merkle_root,
	parallel::par_merkle_root,
	sha::{MerkleCompression, H256, H512},
	HashDigest, PseudoCompressionFunction, Sha256, Sha512,
};
use bitsys_utils::tracing::init_tracing;
use digest::Digest;
use rand::{rngs::StdRng, RngCore, SeedableRng};

fn random_hashes(rng: &mut StdRng, count: usize) -> Vec<HashDigest> {
	(0..count)
		.map(|_| {
			let mut hash = HashDigest::default();
			rng.fill_bytes(&mut hash);
			hash
		})
		.collect()
}

/// The tree built level by level with the reference double SHA-256.
fn reference_root(mut level: Vec<HashDigest>) -> HashDigest {
	if level.is_empty() {
		return HashDigest::default();
	}
	while level.len() > 1 {
		if level.len() % 2 == 1 {
			level.push(level[level.len() - 1]);
		}
		level = level
			.chunks(2)
			.map(|pair| sha2::Sha256::digest(sha2::Sha256::digest(pair.concat())).into())
			.collect();
	}
	level[0]
}

#[test]
fn test_roots_match_reference() {
	init_tracing();

	let mut rng = StdRng::seed_from_u64(0);
	for count in [0, 1, 2, 3, 5, 16, 17, 31, 33, 100, 257, 1000] {
		let hashes = random_hashes(&mut rng, count);
		let expected = reference_root(hashes.clone());
		assert_eq!(merkle_root(hashes.clone()), expected, "{count} leaves");
		assert_eq!(par_merkle_root::<H256>(hashes), expected, "{count} leaves in parallel");
	}
}

#[test]
fn test_compression_is_one_node() {
	let mut rng = StdRng::seed_from_u64(1);
	let hashes = random_hashes(&mut rng, 2);

	let compression = MerkleCompression::<H256>::new();
	let node = compression.compress([hashes[0], hashes[1]]);
	assert_eq!(node, bitcoin_hash_pair(&hashes[0], &hashes[1]));
	assert_eq!(node, Sha256::merkle_root(hashes.clone()));
	assert_eq!(compression.clone().compress([hashes[0], hashes[1]]), node);

	// Power of two trees never duplicate, so the generic tree builder agrees.
	let leaves = random_hashes(&mut rng, 64);
	assert_eq!(compress_tree(&compression, leaves.clone()), Some(Sha256::merkle_root(leaves)));
}

#[test]
fn test_sha512_tree() {
	let leaves = (0..9u8).map(|i| [i; 64]).collect::<Vec<_>>();
	assert_eq!(par_merkle_root::<H512>(leaves.clone()), Sha512::merkle_root(leaves));
}
