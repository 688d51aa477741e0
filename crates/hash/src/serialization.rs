// Copyright 2024-2025 Irreducible Inc.

use bytes::{buf::UninitSlice, BufMut};

use crate::{
	accumulator::Accumulator,
	hasher::{HashError, Hasher},
	multi_digest::Serializable,
};

/// Adapter that wraps an [`Accumulator`] reference and exposes the [`BufMut`] interface.
///
/// Serializers write straight into the block buffer of the accumulator, and every block is
/// compressed the moment it fills up.
#[derive(Debug)]
pub struct HashWriter<'a, A: Hasher> {
	accumulator: &'a mut Accumulator<A>,
}

impl<'a, A: Hasher> HashWriter<'a, A> {
	pub fn new(accumulator: &'a mut Accumulator<A>) -> Self {
		Self { accumulator }
	}
}

unsafe impl<A: Hasher> BufMut for HashWriter<'_, A> {
	/// Bytes left before the message outgrows the length field of the algorithm.
	fn remaining_mut(&self) -> usize {
		let remaining = A::LIMIT_BYTES - self.accumulator.size();
		remaining.try_into().unwrap_or(usize::MAX)
	}

	unsafe fn advance_mut(&mut self, mut cnt: usize) {
		let attempted = self.accumulator.size() as u128 + cnt as u128;
		assert!(
			attempted <= A::LIMIT_BYTES as u128,
			"{}",
			HashError::LimitExceeded {
				limit: A::LIMIT_BYTES,
				attempted,
			}
		);

		while cnt > 0 {
			let step = cnt.min(self.accumulator.spare_mut().len());
			self.accumulator.advance(step);
			cnt -= step;
		}
	}

	fn chunk_mut(&mut self) -> &mut UninitSlice {
		self.accumulator.spare_mut().into()
	}
}

/// Hashes a sequence of serializable items.
pub fn hash_serialize<A: Hasher>(items: impl IntoIterator<Item: Serializable>) -> A::Digest {
	let mut accumulator = Accumulator::<A>::new();
	{
		let mut writer = HashWriter::new(&mut accumulator);
		for item in items {
			item.serialize(&mut writer);
		}
	}
	accumulator.finalize()
}
