// Copyright 2025 Irreducible Inc.

use bytemuck::Zeroable;
use digest::Update;

use crate::{
	accumulator::Accumulator,
	hasher::{HashError, Hasher},
};

const INNER_PAD: u8 = 0x36;
const OUTER_PAD: u8 = 0x5c;

/// Keyed message authentication over the hash function `A` (RFC 2104).
///
/// Both accumulators are keyed on construction, so a clone of a fresh `Hmac` authenticates
/// further messages under the same key without rehashing it.
#[derive(Debug)]
pub struct Hmac<A: Hasher> {
	inner: Accumulator<A>,
	outer: Accumulator<A>,
}

impl<A: Hasher> Clone for Hmac<A> {
	fn clone(&self) -> Self {
		Self {
			inner: self.inner.clone(),
			outer: self.outer.clone(),
		}
	}
}

impl<A: Hasher> Hmac<A> {
	pub fn new(key: &[u8]) -> Self {
		let mut block = <A::Block as Zeroable>::zeroed();
		if key.len() > A::BLOCK_BYTES {
			let digest = A::hash_bytes(key);
			block.as_mut()[..A::DIGEST_BYTES].copy_from_slice(digest.as_ref());
		} else {
			block.as_mut()[..key.len()].copy_from_slice(key);
		}

		Self {
			inner: Accumulator::with_block(&xor_pad::<A>(&block, INNER_PAD)),
			outer: Accumulator::with_block(&xor_pad::<A>(&block, OUTER_PAD)),
		}
	}

	pub fn update(&mut self, data: &[u8]) -> Result<(), HashError> {
		self.inner.write(data)
	}

	pub fn finalize(mut self) -> A::Digest {
		let digest = self.inner.flush();
		// A block and a digest are far below the length limit of every algorithm.
		Update::update(&mut self.outer, digest.as_ref());
		self.outer.finalize()
	}

	/// The authentication code of `data` under `key`.
	pub fn code(key: &[u8], data: &[u8]) -> Result<A::Digest, HashError> {
		let mut hmac = Self::new(key);
		hmac.update(data)?;
		Ok(hmac.finalize())
	}
}

fn xor_pad<A: Hasher>(block: &A::Block, pad: u8) -> A::Block {
	let mut padded = *block;
	for byte in padded.as_mut() {
		*byte ^= pad;
	}
	padded
}

#[cfg(test)]
mod tests {
	use hex_literal::hex;

	use super::*;
	use crate::{Sha1, Sha256, Sha512};

	#[test]
	fn test_short_key() {
		let key = b"Jefe";
		let data = b"what do ya want for nothing?";
		assert_eq!(
			Hmac::<Sha256>::code(key, data).unwrap(),
			hex!("5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843")
		);
		assert_eq!(
			Hmac::<Sha1>::code(key, data).unwrap(),
			hex!("effcdf6ae5eb2fa2d27416d5f184df9c259a7c79")
		);
		assert_eq!(
			Hmac::<Sha512>::code(key, data).unwrap(),
			hex!(
				"164b7a7bfcf819e2e395fbe73b56e0a387bd64222e831fd610270cd7ea250554"
				"9758bf75c05a994a6d034f65f8f0e6fdcaeab1a34d4a6b4b636e070a38bce737"
			)
		);
	}

	#[test]
	fn test_key_longer_than_block() {
		let key = [0xaa; 131];
		let data = b"Test Using Larger Than Block-Size Key - Hash Key First";
		assert_eq!(
			Hmac::<Sha256>::code(&key, data).unwrap(),
			hex!("60e431591ee0b67f0d8a26aacbf5b77f8e0bc6213728c5140546040f0ee37f54")
		);
	}

	#[test]
	fn test_clone_keeps_the_key() {
		let keyed = Hmac::<Sha256>::new(b"key");
		let mut first = keyed.clone();
		let mut second = keyed.clone();
		first.update(b"first").unwrap();
		second.update(b"second").unwrap();

		assert_eq!(first.finalize(), Hmac::<Sha256>::code(b"key", b"first").unwrap());
		assert_eq!(second.finalize(), Hmac::<Sha256>::code(b"key", b"second").unwrap());
	}

	#[test]
	fn test_split_updates() {
		let mut hmac = Hmac::<Sha256>::new(b"key");
		hmac.update(b"The quick brown fox ").unwrap();
		hmac.update(b"jumps over the lazy dog").unwrap();
		assert_eq!(
			hmac.finalize(),
			hex!("f7bc83f430538424b13298e6aa6fb143ef4d59a14946175997479dbc2d1a3cd8")
		);
	}
}
