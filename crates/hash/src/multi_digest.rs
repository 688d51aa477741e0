// Copyright 2025 Irreducible Inc.

use std::{array, mem::MaybeUninit};

use bytes::{BufMut, BytesMut};
use digest::{Digest, FixedOutput, FixedOutputReset, Output, Update};
use rayon::{
	iter::{IndexedParallelIterator, IntoParallelRefMutIterator, ParallelIterator},
	slice::ParallelSliceMut,
};

use crate::{
	accumulator::Accumulator,
	hasher::Hasher,
	sha::{Algorithm, Sha},
};

/// An object that efficiently computes `N` instances of a cryptographic hash function
/// in parallel.
///
/// This trait is useful when there is a more efficient way of calculating multiple digests at once,
/// e.g. using SIMD instructions. It is supposed that this trait is implemented directly for some
/// digest and some fixed `N` and passed as an implementation of the `ParallelDigest` trait which
/// hides the `N` value.
pub trait MultiDigest<const N: usize>: Clone {
	/// The corresponding non-parallelized hash function.
	type Digest: Digest;

	/// Create new hasher instance with empty state.
	fn new() -> Self;

	/// Create new hasher instance which has processed the provided data.
	fn new_with_prefix(data: impl AsRef<[u8]>) -> Self {
		let mut hasher = Self::new();
		hasher.update([data.as_ref(); N]);
		hasher
	}

	/// Process data, updating the internal state.
	/// All slices in `data` must have the same length.
	fn update(&mut self, data: [&[u8]; N]);

	/// Process input data in a chained manner.
	#[must_use]
	fn chain_update(self, data: [&[u8]; N]) -> Self {
		let mut hasher = self;
		hasher.update(data);
		hasher
	}

	/// Write result into provided array and consume the hasher instance.
	fn finalize_into(self, out: &mut [MaybeUninit<Output<Self::Digest>>; N]);

	/// Write result into provided array and reset the hasher instance.
	fn finalize_into_reset(&mut self, out: &mut [MaybeUninit<Output<Self::Digest>>; N]);

	/// Reset hasher instance to its initial state.
	fn reset(&mut self);

	/// Compute hash of `data`.
	/// All slices in the `data` must have the same length.
	///
	/// # Panics
	/// Panics if data contains slices of different lengths.
	fn digest(data: [&[u8]; N], out: &mut [MaybeUninit<Output<Self::Digest>>; N]) {
		Self::new().chain_update(data).finalize_into(out);
	}
}

/// `N` SHA messages of equal length, whose whole blocks are compressed as one lane-packed batch.
#[derive(Debug)]
pub struct MultiSha<H: Sha, const N: usize> {
	lanes: [Accumulator<Algorithm<H>>; N],
}

impl<H: Sha, const N: usize> Clone for MultiSha<H, N> {
	fn clone(&self) -> Self {
		Self {
			lanes: self.lanes.clone(),
		}
	}
}

impl<H: Sha, const N: usize> MultiDigest<N> for MultiSha<H, N> {
	type Digest = Accumulator<Algorithm<H>>;

	fn new() -> Self {
		Self {
			lanes: array::from_fn(|_| Accumulator::new()),
		}
	}

	fn update(&mut self, data: [&[u8]; N]) {
		let Some(len) = data.first().map(|chunk| chunk.len()) else {
			return;
		};
		assert!(data.iter().all(|chunk| chunk.len() == len), "messages differ in length");

		let block_bytes = <Algorithm<H> as Hasher>::BLOCK_BYTES;
		let head = match self.lanes[0].pending() {
			0 => 0,
			pending => (block_bytes - pending).min(len),
		};
		for (lane, chunk) in self.lanes.iter_mut().zip(data) {
			Update::update(lane, &chunk[..head]);
		}

		let whole = (len - head) / block_bytes;
		if whole > 0 {
			let mut states: [<Algorithm<H> as Hasher>::State; N] = array::from_fn(|_| H::H);
			for (state, lane) in states.iter_mut().zip(&mut self.lanes) {
				*state = *lane.state_for_blocks(whole as u64);
			}

			for index in 0..whole {
				let start = head + index * block_bytes;
				let blocks: [H::Block; N] = array::from_fn(|lane| {
					*bytemuck::from_bytes(&data[lane][start..start + block_bytes])
				});
				Algorithm::<H>::batch_accumulate(&mut states, &blocks);
			}

			for (state, lane) in states.into_iter().zip(&mut self.lanes) {
				*lane.state_for_blocks(0) = state;
			}
		}

		let tail = head + whole * block_bytes;
		for (lane, chunk) in self.lanes.iter_mut().zip(data) {
			Update::update(lane, &chunk[tail..]);
		}
	}

	fn finalize_into(self, out: &mut [MaybeUninit<Output<Self::Digest>>; N]) {
		for (lane, out) in self.lanes.into_iter().zip(out.iter_mut()) {
			out.write(lane.finalize_fixed());
		}
	}

	fn finalize_into_reset(&mut self, out: &mut [MaybeUninit<Output<Self::Digest>>; N]) {
		for (lane, out) in self.lanes.iter_mut().zip(out.iter_mut()) {
			out.write(lane.finalize_fixed_reset());
		}
	}

	fn reset(&mut self) {
		for lane in &mut self.lanes {
			lane.reset();
		}
	}
}

pub trait Serializable {
	fn serialize(self, buffer: impl BufMut);
}

impl<T: AsRef<[u8]>> Serializable for T {
	fn serialize(self, mut buffer: impl BufMut) {
		buffer.put_slice(self.as_ref());
	}
}

pub trait ParallelDigest: Send {
	/// The corresponding non-parallelized hash function.
	type Digest: digest::Digest + Send;

	/// Create new hasher instance with empty state.
	fn new() -> Self;

	/// Create new hasher instance which has processed the provided data.
	fn new_with_prefix(data: impl AsRef<[u8]>) -> Self;

	/// Calculate the digest of multiple hashes where each of them is serialized into
	/// the same number of bytes.
	fn digest(
		&self,
		source: impl IndexedParallelIterator<Item: Serializable>,
		out: &mut [MaybeUninit<Output<Self::Digest>>],
	);
}

/// A wrapper that implements the `ParallelDigest` trait for a `MultiDigest` implementation.
#[derive(Clone)]
pub struct ParallelMultidigestImpl<D: MultiDigest<N>, const N: usize>(D);

impl<D: MultiDigest<N, Digest: Send> + Send + Sync, const N: usize> ParallelDigest
	for ParallelMultidigestImpl<D, N>
{
	type Digest = D::Digest;

	fn new() -> Self {
		Self(D::new())
	}

	fn new_with_prefix(data: impl AsRef<[u8]>) -> Self {
		Self(D::new_with_prefix(data.as_ref()))
	}

	fn digest(
		&self,
		source: impl IndexedParallelIterator<Item: Serializable>,
		out: &mut [MaybeUninit<Output<Self::Digest>>],
	) {
		let buffers = array::from_fn::<_, N, _>(|_| BytesMut::new());
		source.chunks(N).zip(out.par_chunks_mut(N)).for_each_with(
			buffers,
			|buffers, (data, out_chunk)| {
				let mut hasher = self.0.clone();
				for buf in buffers.iter_mut() {
					buf.clear();
				}
				let count = data.len();
				for (buf, chunk) in buffers.iter_mut().zip(data) {
					chunk.serialize(buf);
				}
				// Lanes past the end of a short final chunk repeat the first message.
				let data = array::from_fn(|i| buffers[if i < count { i } else { 0 }].as_ref());
				hasher.update(data);

				match <&mut [_; N]>::try_from(&mut *out_chunk) {
					Ok(out) => hasher.finalize_into_reset(out),
					Err(_) => {
						let mut result = array::from_fn::<_, N, _>(|_| MaybeUninit::uninit());
						hasher.finalize_into(&mut result);
						for (out, res) in out_chunk.iter_mut().zip(result) {
							*out = res;
						}
					}
				}
			},
		);
	}
}

impl<D: Digest + Send + Sync + Clone> ParallelDigest for D {
	type Digest = D;

	fn new() -> Self {
		Digest::new()
	}

	fn new_with_prefix(data: impl AsRef<[u8]>) -> Self {
		Digest::new_with_prefix(data)
	}

	fn digest(
		&self,
		source: impl IndexedParallelIterator<Item: Serializable>,
		out: &mut [MaybeUninit<Output<Self::Digest>>],
	) {
		source
			.zip(out.par_iter_mut())
			.for_each_with(BytesMut::new(), |buffer, (data, out)| {
				buffer.clear();
				data.serialize(&mut *buffer);

				let mut hasher = self.clone();
				Digest::update(&mut hasher, buffer.as_ref());
				out.write(hasher.finalize());
			});
	}
}
