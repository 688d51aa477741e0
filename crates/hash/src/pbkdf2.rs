// Copyright 2025 Irreducible Inc.

//! Password based key derivation (PBKDF2, RFC 8018) with HMAC as the pseudorandom function.

use bitsys_utils::ensure;

use crate::{
	hasher::{HashError, Hasher},
	hmac::Hmac,
};

/// Fills `out` with key material derived from `passphrase` and `salt`.
///
/// Every output block runs `iterations` rounds of HMAC-`A`; zero iterations count as one.
/// Fails when `out` needs more than `2^32 - 1` blocks.
pub fn pbkdf2<A: Hasher>(
	passphrase: &[u8],
	salt: &[u8],
	iterations: usize,
	out: &mut [u8],
) -> Result<(), HashError> {
	let max_bytes = (u32::MAX as usize).saturating_mul(A::DIGEST_BYTES);
	ensure!(
		out.len() <= max_bytes,
		HashError::InvalidLength {
			expected: max_bytes,
			actual: out.len(),
		}
	);

	let keyed = Hmac::<A>::new(passphrase);
	for (index, chunk) in out.chunks_mut(A::DIGEST_BYTES).enumerate() {
		let mut hmac = keyed.clone();
		hmac.update(salt)?;
		hmac.update(&(index as u32 + 1).to_be_bytes())?;
		let mut block = hmac.finalize();

		let mut sum = block;
		for _ in 1..iterations {
			let mut hmac = keyed.clone();
			hmac.update(block.as_ref())?;
			block = hmac.finalize();

			for (sum, byte) in sum.as_mut().iter_mut().zip(block.as_ref()) {
				*sum ^= byte;
			}
		}

		chunk.copy_from_slice(&sum.as_ref()[..chunk.len()]);
	}

	Ok(())
}
