// Copyright 2025 Irreducible Inc.

//! Hash functions of the bitcoin protocol over plain byte slices.

use digest::Digest;

use crate::{accumulator::Accumulator, Rmd128, Rmd160, Sha1, Sha256, Sha512};

/// A RIPEMD-128 digest.
pub type HalfHash = [u8; 16];
/// A SHA-1 or RIPEMD-160 digest.
pub type ShortHash = [u8; 20];
/// A SHA-256 digest.
pub type HashDigest = [u8; 32];
/// A SHA-512 digest.
pub type LongHash = [u8; 64];

pub const NULL_HALF_HASH: HalfHash = [0; 16];
pub const NULL_SHORT_HASH: ShortHash = [0; 20];
pub const NULL_HASH: HashDigest = [0; 32];
pub const NULL_LONG_HASH: LongHash = [0; 64];

/// The number one as a little endian 256 bit integer.
pub const ONE_HASH: HashDigest = {
	let mut hash = NULL_HASH;
	hash[0] = 1;
	hash
};

pub fn sha1_hash(data: &[u8]) -> ShortHash {
	Sha1::hash_bytes(data)
}

pub fn sha1_chunk(data: &[u8]) -> Vec<u8> {
	sha1_hash(data).to_vec()
}

pub fn sha256_hash(data: &[u8]) -> HashDigest {
	Sha256::hash_bytes(data)
}

pub fn sha256_chunk(data: &[u8]) -> Vec<u8> {
	sha256_hash(data).to_vec()
}

/// SHA-256 of the concatenation of two digests, a single block.
pub fn sha256_hash_pair(left: &HashDigest, right: &HashDigest) -> HashDigest {
	Sha256::hash_pair(left, right)
}

/// SHA-256 of `left || right`, for slices of any length.
pub fn sha256_hash2(left: &[u8], right: &[u8]) -> HashDigest {
	<Accumulator<Sha256> as Digest>::new()
		.chain_update(left)
		.chain_update(right)
		.finalize()
}

pub fn sha512_hash(data: &[u8]) -> LongHash {
	Sha512::hash_bytes(data)
}

pub fn sha512_chunk(data: &[u8]) -> Vec<u8> {
	sha512_hash(data).to_vec()
}

pub fn rmd128_hash(data: &[u8]) -> HalfHash {
	Rmd128::hash_bytes(data)
}

pub fn rmd128_chunk(data: &[u8]) -> Vec<u8> {
	rmd128_hash(data).to_vec()
}

pub fn rmd160_hash(data: &[u8]) -> ShortHash {
	Rmd160::hash_bytes(data)
}

pub fn rmd160_chunk(data: &[u8]) -> Vec<u8> {
	rmd160_hash(data).to_vec()
}

/// Double SHA-256, the hash of blocks, transactions and checksums.
pub fn bitcoin_hash(data: &[u8]) -> HashDigest {
	Sha256::double_hash_bytes(data)
}

pub fn bitcoin_chunk(data: &[u8]) -> Vec<u8> {
	bitcoin_hash(data).to_vec()
}

/// Double SHA-256 of `left || right`, for slices of any length.
pub fn bitcoin_hash2(left: &[u8], right: &[u8]) -> HashDigest {
	Sha256::hash_half(&sha256_hash2(left, right))
}

/// Double SHA-256 of two concatenated digests, one merkle tree node.
pub fn bitcoin_hash_pair(left: &HashDigest, right: &HashDigest) -> HashDigest {
	Sha256::double_hash_pair(left, right)
}

/// RIPEMD-160 of SHA-256, the hash behind addresses.
pub fn bitcoin_short_hash(data: &[u8]) -> ShortHash {
	Rmd160::hash_half(&Sha256::hash_bytes(data))
}

pub fn bitcoin_short_chunk(data: &[u8]) -> Vec<u8> {
	bitcoin_short_hash(data).to_vec()
}

/// The BIP340 tagged hash: `sha256(sha256(tag) || sha256(tag) || data)`.
pub fn tagged_hash(tag: &str, data: &[u8]) -> HashDigest {
	let tag = Sha256::hash_bytes(tag.as_bytes());

	<Accumulator<Sha256> as Digest>::new()
		.chain_update(tag)
		.chain_update(tag)
		.chain_update(data)
		.finalize()
		.into()
}

/// The merkle root of transaction hashes, `NULL_HASH` when there are none.
pub fn merkle_root(hashes: Vec<HashDigest>) -> HashDigest {
	Sha256::merkle_root(hashes)
}

/// Table key of a digest: its low eight bytes, read as a little endian integer.
///
/// Digests are uniformly distributed, so no further mixing is needed. Keys shorter than eight
/// bytes are zero extended.
pub fn unique_hash<const N: usize>(key: &[u8; N]) -> u64 {
	let mut low = [0u8; 8];
	let len = N.min(low.len());
	low[..len].copy_from_slice(&key[..len]);
	u64::from_le_bytes(low)
}

/// The djb2 string hash (`hash * 33 + byte`), for hash table keys.
pub const fn djb2_hash(data: &[u8]) -> u64 {
	let mut hash = 5381u64;
	let mut i = 0;
	while i < data.len() {
		hash = (hash << 5).wrapping_add(hash).wrapping_add(data[i] as u64);
		i += 1;
	}
	hash
}

/// Combines two table keys, such as a pair of [`djb2_hash`] values.
pub const fn hash_combine(left: u64, right: u64) -> u64 {
	left ^ (right << 1)
}
