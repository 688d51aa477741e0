// Copyright 2025 Irreducible Inc.

//! Every algorithm against the RustCrypto implementations.

use bitsys_hash::{
	sha::{self, Sha},
	word::ByteArray,
	Accumulator, Hasher, Rmd128, Rmd160, Sha1, Sha224, Sha256, Sha384, Sha512, Sha512_224,
	Sha512_256,
};
use digest::Digest;
use proptest::prelude::*;

fn check_bytes<A: Hasher, R: Digest>(data: &[u8], split: usize) {
	let expected = R::digest(data);
	assert_eq!(A::hash_bytes(data).as_ref(), &expected[..], "{}", A::NAME);
	assert_eq!(A::double_hash_bytes(data).as_ref(), &R::digest(&expected)[..], "{}", A::NAME);

	let split = split.min(data.len());
	let mut accumulator = Accumulator::<A>::new();
	accumulator.write(&data[..split]).unwrap();
	accumulator.write(&data[split..]).unwrap();
	assert_eq!(accumulator.flush().as_ref(), &expected[..], "{} streamed", A::NAME);
}

fn check_blocks<H: Sha, R: Digest>(data: &[u8]) {
	let whole = data.len() - data.len() % H::Block::SIZE;
	let blocks: &[H::Block] = bytemuck::cast_slice(&data[..whole]);
	let bytes: &[u8] = bytemuck::cast_slice(blocks);
	let expected = R::digest(bytes);

	assert_eq!(sha::Algorithm::<H>::hash_blocks(blocks).as_ref(), &expected[..], "{}", H::NAME);
	let refs = blocks.iter().collect::<Vec<_>>();
	assert_eq!(sha::Algorithm::<H>::hash_block_refs(&refs).as_ref(), &expected[..], "{}", H::NAME);
	assert_eq!(
		sha::Algorithm::<H>::double_hash_blocks(blocks).as_ref(),
		&R::digest(&expected)[..],
		"{}",
		H::NAME
	);

	if let Some(block) = blocks.first() {
		let expected = R::digest(block.as_ref());
		assert_eq!(sha::Algorithm::<H>::hash_block(block).as_ref(), &expected[..]);
		assert_eq!(
			sha::Algorithm::<H>::double_hash_block(block).as_ref(),
			&R::digest(&expected)[..]
		);
	}
}

proptest! {
	#![proptest_config(ProptestConfig::with_cases(64))]

	#[test]
	fn test_sha_bytes(data in prop::collection::vec(any::<u8>(), 0..600), split in 0usize..600) {
		check_bytes::<Sha1, sha1::Sha1>(&data, split);
		check_bytes::<Sha224, sha2::Sha224>(&data, split);
		check_bytes::<Sha256, sha2::Sha256>(&data, split);
		check_bytes::<Sha384, sha2::Sha384>(&data, split);
		check_bytes::<Sha512, sha2::Sha512>(&data, split);
		check_bytes::<Sha512_224, sha2::Sha512_224>(&data, split);
		check_bytes::<Sha512_256, sha2::Sha512_256>(&data, split);
	}

	#[test]
	fn test_ripemd_bytes(data in prop::collection::vec(any::<u8>(), 0..600), split in 0usize..600) {
		check_bytes::<Rmd128, ripemd::Ripemd128>(&data, split);
		check_bytes::<Rmd160, ripemd::Ripemd160>(&data, split);
	}

	#[test]
	fn test_sha_blocks(data in prop::collection::vec(any::<u8>(), 0..1024)) {
		check_blocks::<sha::H160, sha1::Sha1>(&data);
		check_blocks::<sha::H256, sha2::Sha256>(&data);
		check_blocks::<sha::H384, sha2::Sha384>(&data);
		check_blocks::<sha::H512, sha2::Sha512>(&data);
		check_blocks::<sha::H512_224, sha2::Sha512_224>(&data);
	}

	#[test]
	fn test_half_and_pair(left in any::<[u8; 32]>(), right in any::<[u8; 32]>()) {
		let expected = sha2::Sha256::digest([left, right].concat());
		prop_assert_eq!(&Sha256::hash_pair(&left, &right)[..], &expected[..]);
		prop_assert_eq!(
			&Sha256::double_hash_pair(&left, &right)[..],
			&sha2::Sha256::digest(expected)[..]
		);
		prop_assert_eq!(&Sha256::hash_half(&left)[..], &sha2::Sha256::digest(left)[..]);
		prop_assert_eq!(&Rmd160::hash_half(&left)[..], &ripemd::Ripemd160::digest(left)[..]);
		prop_assert_eq!(&Sha1::hash_half(&left)[..], &sha1::Sha1::digest(left)[..]);
	}
}
