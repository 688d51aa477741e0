// Copyright 2025 Irreducible Inc.

use bitsys_hash::{
	Accumulator, Hasher, Rmd128, Rmd160, Sha1, Sha224, Sha256, Sha384, Sha512, Sha512_224,
	Sha512_256,
};
use hex_literal::hex;

const ABC: &[u8] = b"abc";
const TWO_BLOCKS: &[u8] = b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq";

fn check<A: Hasher>(data: &[u8], expected: &[u8]) {
	assert_eq!(A::hash_bytes(data).as_ref(), expected, "{} of {} bytes", A::NAME, data.len());

	let mut accumulator = Accumulator::<A>::new();
	for chunk in data.chunks(7) {
		accumulator.write(chunk).unwrap();
	}
	assert_eq!(accumulator.flush().as_ref(), expected, "{} streamed", A::NAME);
}

#[test]
fn test_sha1() {
	check::<Sha1>(b"", &hex!("da39a3ee5e6b4b0d3255bfef95601890afd80709"));
	check::<Sha1>(ABC, &hex!("a9993e364706816aba3e25717850c26c9cd0d89d"));
	check::<Sha1>(TWO_BLOCKS, &hex!("84983e441c3bd26ebaae4aa1f95129e5e54670f1"));
}

#[test]
fn test_sha224() {
	check::<Sha224>(b"", &hex!("d14a028c2a3a2bc9476102bb288234c415a2b01f828ea62ac5b3e42f"));
	check::<Sha224>(ABC, &hex!("23097d223405d8228642a477bda255b32aadbce4bda0b3f7e36c9da7"));
	check::<Sha224>(
		TWO_BLOCKS,
		&hex!("75388b16512776cc5dba5da1fd890150b0c6455cb4f58b1952522525"),
	);
}

#[test]
fn test_sha256() {
	check::<Sha256>(
		b"",
		&hex!("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"),
	);
	check::<Sha256>(ABC, &hex!("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"));
	check::<Sha256>(
		TWO_BLOCKS,
		&hex!("248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1"),
	);
}

#[test]
fn test_sha256_million_a() {
	let data = vec![b'a'; 1_000_000];
	check::<Sha256>(
		&data,
		&hex!("cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0"),
	);
	check::<Sha1>(&data, &hex!("34aa973cd4c4daa4f61eeb2bdbad27316534016f"));
}

#[test]
fn test_sha384() {
	check::<Sha384>(
		b"",
		&hex!(
			"38b060a751ac96384cd9327eb1b1e36a21fdb71114be07434c0cc7bf63f6e1da"
			"274edebfe76f65fbd51ad2f14898b95b"
		),
	);
	check::<Sha384>(
		ABC,
		&hex!(
			"cb00753f45a35e8bb5a03d699ac65007272c32ab0eded1631a8b605a43ff5bed"
			"8086072ba1e7cc2358baeca134c825a7"
		),
	);
}

#[test]
fn test_sha512() {
	check::<Sha512>(
		b"",
		&hex!(
			"cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce"
			"47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e"
		),
	);
	check::<Sha512>(
		ABC,
		&hex!(
			"ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a"
			"2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f"
		),
	);
}

#[test]
fn test_sha512_truncated() {
	check::<Sha512_224>(b"", &hex!("6ed0dd02806fa89e25de060c19d3ac86cabb87d6a0ddd05c333b84f4"));
	check::<Sha512_224>(ABC, &hex!("4634270f707b6a54daae7530460842e20e37ed265ceee9a43e8924aa"));
	check::<Sha512_256>(
		b"",
		&hex!("c672b8d1ef56ed28ab87c3622c5114069bdd3ad7b8f9737498d0c01ecef0967a"),
	);
	check::<Sha512_256>(
		ABC,
		&hex!("53048e2681941ef99b2e29b76b4c7dabe4c2d0c634fc6d46e0e2f13107e7af23"),
	);
}

#[test]
fn test_ripemd() {
	check::<Rmd160>(b"a", &hex!("0bdc9d2d256b3ee9daae347be6f4dc835a467ffe"));
	check::<Rmd160>(b"message digest", &hex!("5d0689ef49d2fae572b881b123a85ffa21595f36"));
	check::<Rmd128>(b"a", &hex!("86be7afa339d0fc7cfc785e72f578d33"));
	check::<Rmd128>(b"message digest", &hex!("9e327b3d6e523062afc1132d7df9d1b8"));
}

#[test]
fn test_double_hash_of_abc() {
	assert_eq!(
		Sha256::double_hash_bytes(ABC),
		hex!("4f8b42c22dd3729b519ba6f68d2da7cc5b2d606d05daed5ad5128cc03e6c6358")
	);
	assert_eq!(Sha256::double_hash_bytes(ABC), Sha256::hash_bytes(&Sha256::hash_bytes(ABC)));
	assert_eq!(Sha1::double_hash_bytes(ABC), Sha1::hash_bytes(&Sha1::hash_bytes(ABC)));
	assert_eq!(
		Sha512_224::double_hash_bytes(ABC),
		Sha512_224::hash_bytes(&Sha512_224::hash_bytes(ABC))
	);
}

#[test]
fn test_short_messages_agree_across_entry_points() {
	check::<Sha256>(
		b"data",
		&hex!("3a6eb0790f39ac87c94f3856b2dd2c5d110e6811602261a9a923d3bb23adc8b7"),
	);

	let expected = hex!("c3ab8ff13720e8ad9047dd39466b3c8974e592c2fa383d4a3960714caef0c4f2");
	check::<Sha256>(b"foobar", &expected);

	let mut accumulator = Accumulator::<Sha256>::new();
	for byte in b"foobar" {
		accumulator.write(&[*byte]).unwrap();
	}
	assert_eq!(accumulator.flush(), expected);
	assert_eq!(<Accumulator<Sha256> as digest::Digest>::digest(b"foobar")[..], expected[..]);
}
