// Copyright 2025 Irreducible Inc.

use cfg_if::cfg_if;

cfg_if! {
	if #[cfg(all(target_arch = "x86_64", target_feature = "avx512f"))] {
		pub type WideU32 = crate::lanes::Lanes<u32, 16>;
		pub type WideU64 = crate::lanes::Lanes<u64, 8>;
	} else if #[cfg(all(target_arch = "x86_64", target_feature = "avx2"))] {
		mod avx2;
		pub type WideU32 = avx2::U32x8;
		pub type WideU64 = avx2::U64x4;
	} else {
		pub type WideU32 = crate::lanes::Lanes<u32, 8>;
		pub type WideU64 = crate::lanes::Lanes<u64, 4>;
	}
}

cfg_if! {
	if #[cfg(target_arch = "x86_64")] {
		mod sha_ni;
		pub use sha_ni::{compress_sha256, sha256_available};
	} else {
		pub fn sha256_available() -> bool {
			false
		}

		/// No native SHA-256 on this target: always declines.
		pub fn compress_sha256(_state: &mut [u32; 8], _blocks: &[[u8; 64]]) -> bool {
			false
		}
	}
}
