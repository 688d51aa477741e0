// Copyright 2025 Irreducible Inc.

//! Message schedule expansion.

use super::{Family, Sha, BLOCK_WORDS};
use crate::{
	primitives::small_sigma,
	word::{WordArray, WordOps},
};

/// Expands the sixteen block words at the front of `buffer` into one word per round.
#[inline]
pub fn schedule<H: Sha, T: WordOps<Scalar = H::Word>>(buffer: &mut H::Buffer<T>) {
	debug_assert_eq!(<H::Buffer<T> as WordArray<T>>::LEN, H::ROUNDS);

	match H::FAMILY {
		Family::Sha1 => {
			for i in BLOCK_WORDS..H::ROUNDS {
				buffer[i] = (buffer[i - 3] ^ buffer[i - 8] ^ buffer[i - 14] ^ buffer[i - 16])
					.rotate_left(1);
			}
		}
		Family::Sha2 => {
			let rotations = H::ROTATIONS;
			for i in BLOCK_WORDS..H::ROUNDS {
				buffer[i] = small_sigma(buffer[i - 2], rotations.small1)
					.wrapping_add(buffer[i - 7])
					.wrapping_add(small_sigma(buffer[i - 15], rotations.small0))
					.wrapping_add(buffer[i - 16]);
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::sha::{H160, H256};

	#[test]
	fn test_sha256_schedule_of_abc() {
		// "abc" followed by its padding, as one block.
		let mut buffer = [0u32; 64];
		buffer[0] = 0x61626380;
		buffer[15] = 0x00000018;
		schedule::<H256, u32>(&mut buffer);

		assert_eq!(buffer[16], 0x61626380);
		assert_eq!(buffer[17], 0x000f0000);
	}

	#[test]
	fn test_sha1_schedule_rotates_left() {
		let mut buffer = [0u32; 80];
		buffer[0] = 0x8000_0000;
		schedule::<H160, u32>(&mut buffer);

		// W[16] = rotl1(W[13] ^ W[8] ^ W[2] ^ W[0])
		assert_eq!(buffer[16], 1);
		assert_eq!(buffer[17], 0);
	}
}
