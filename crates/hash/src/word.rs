// Copyright 2025 Irreducible Inc.

//! Machine words and fixed-size arrays the hash engines are generic over.

use std::{
	fmt::Debug,
	ops::{BitAnd, BitOr, BitXor, Index, IndexMut, Not},
};

use bytemuck::Pod;

use crate::{arch, lanes::Packed};

/// The arithmetic and bitwise operations used by the round functions.
///
/// Implemented by the machine words themselves and by lane-packed words, which apply every
/// operation to each lane independently. Addition is modular.
pub trait WordOps:
	Copy
	+ Debug
	+ Send
	+ Sync
	+ 'static
	+ BitAnd<Output = Self>
	+ BitOr<Output = Self>
	+ BitXor<Output = Self>
	+ Not<Output = Self>
{
	/// The word stored in every lane.
	type Scalar: Word;

	/// Broadcast `value` to all lanes.
	fn splat(value: Self::Scalar) -> Self;

	fn wrapping_add(self, rhs: Self) -> Self;

	fn rotate_right(self, n: u32) -> Self;

	fn rotate_left(self, n: u32) -> Self;

	fn shift_right(self, n: u32) -> Self;
}

/// A 32 or 64 bit machine word.
pub trait Word: WordOps<Scalar = Self> + Packed + Pod + Default + Eq {
	const BITS: u32;
	const BYTES: usize;

	/// The widest lane-packed word the target supports for this word size.
	type Wide: Packed<Scalar = Self>;

	/// Decodes a big-endian word. `bytes` must hold exactly `Self::BYTES` bytes.
	fn from_be_slice(bytes: &[u8]) -> Self;

	/// Decodes a little-endian word. `bytes` must hold exactly `Self::BYTES` bytes.
	fn from_le_slice(bytes: &[u8]) -> Self;

	/// Encodes the word big-endian into exactly `Self::BYTES` bytes.
	fn write_be(self, out: &mut [u8]);

	/// Encodes the word little-endian into exactly `Self::BYTES` bytes.
	fn write_le(self, out: &mut [u8]);

	/// The low `Self::BITS` bits of `value`.
	fn truncate(value: u128) -> Self;
}

macro_rules! impl_word {
	($word:ty, $wide:ty) => {
		impl WordOps for $word {
			type Scalar = Self;

			#[inline(always)]
			fn splat(value: Self) -> Self {
				value
			}

			#[inline(always)]
			fn wrapping_add(self, rhs: Self) -> Self {
				<$word>::wrapping_add(self, rhs)
			}

			#[inline(always)]
			fn rotate_right(self, n: u32) -> Self {
				<$word>::rotate_right(self, n)
			}

			#[inline(always)]
			fn rotate_left(self, n: u32) -> Self {
				<$word>::rotate_left(self, n)
			}

			#[inline(always)]
			fn shift_right(self, n: u32) -> Self {
				self >> n
			}
		}

		impl Word for $word {
			const BITS: u32 = <$word>::BITS;
			const BYTES: usize = std::mem::size_of::<$word>();

			type Wide = $wide;

			#[inline]
			fn from_be_slice(bytes: &[u8]) -> Self {
				let mut raw = [0u8; std::mem::size_of::<$word>()];
				raw.copy_from_slice(bytes);
				<$word>::from_be_bytes(raw)
			}

			#[inline]
			fn from_le_slice(bytes: &[u8]) -> Self {
				let mut raw = [0u8; std::mem::size_of::<$word>()];
				raw.copy_from_slice(bytes);
				<$word>::from_le_bytes(raw)
			}

			#[inline]
			fn write_be(self, out: &mut [u8]) {
				out.copy_from_slice(&self.to_be_bytes());
			}

			#[inline]
			fn write_le(self, out: &mut [u8]) {
				out.copy_from_slice(&self.to_le_bytes());
			}

			#[inline]
			fn truncate(value: u128) -> Self {
				value as $word
			}
		}
	};
}

impl_word!(u32, arch::WideU32);
impl_word!(u64, arch::WideU64);

/// A fixed-size array of words: a hash state or a message schedule buffer.
pub trait WordArray<T: Copy>:
	Copy
	+ Debug
	+ Send
	+ Sync
	+ Index<usize, Output = T>
	+ IndexMut<usize>
	+ AsRef<[T]>
	+ AsMut<[T]>
{
	const LEN: usize;

	fn filled(value: T) -> Self;

	fn from_fn(f: impl FnMut(usize) -> T) -> Self;
}

impl<T: Copy + Debug + Send + Sync, const N: usize> WordArray<T> for [T; N] {
	const LEN: usize = N;

	#[inline(always)]
	fn filled(value: T) -> Self {
		[value; N]
	}

	#[inline(always)]
	fn from_fn(f: impl FnMut(usize) -> T) -> Self {
		std::array::from_fn(f)
	}
}

/// A fixed-size byte array: a block, a half block or a digest.
///
/// The all-zero value comes from [`bytemuck::Zeroable::zeroed`].
pub trait ByteArray: Pod + Eq + Debug + Send + Sync + AsRef<[u8]> + AsMut<[u8]> {
	const SIZE: usize;
}

impl<const N: usize> ByteArray for [u8; N] {
	const SIZE: usize = N;
}
