// Copyright 2025 Irreducible Inc.

//! SHA-256 compression on the x86 SHA extensions.

use std::arch::x86_64::*;

use crate::sha::constants::K256;

/// Whether the running CPU has the SHA extensions and the SSE levels this kernel uses.
///
/// The standard library caches CPUID results, so this is cheap enough to call per block.
pub fn sha256_available() -> bool {
	is_x86_feature_detected!("sha")
		&& is_x86_feature_detected!("sse2")
		&& is_x86_feature_detected!("ssse3")
		&& is_x86_feature_detected!("sse4.1")
}

/// Compresses `blocks` into `state`, including the feed-forward addition.
///
/// Returns `false` without touching `state` if the CPU lacks the required extensions.
pub fn compress_sha256(state: &mut [u32; 8], blocks: &[[u8; 64]]) -> bool {
	if !sha256_available() {
		return false;
	}

	// Safety: the required target features were detected above.
	unsafe { compress_blocks(state, blocks) };
	true
}

#[inline]
#[target_feature(enable = "sha,sse2,ssse3,sse4.1")]
unsafe fn schedule(v0: __m128i, v1: __m128i, v2: __m128i, v3: __m128i) -> __m128i {
	let t1 = _mm_sha256msg1_epu32(v0, v1);
	let t2 = _mm_alignr_epi8(v3, v2, 4);
	_mm_sha256msg2_epu32(_mm_add_epi32(t1, t2), v3)
}

#[target_feature(enable = "sha,sse2,ssse3,sse4.1")]
unsafe fn compress_blocks(state: &mut [u32; 8], blocks: &[[u8; 64]]) {
	let mask = _mm_set_epi64x(0x0c0d_0e0f_0809_0a0bu64 as i64, 0x0405_0607_0001_0203u64 as i64);

	let state_ptr = state.as_ptr() as *const __m128i;
	let dcba = _mm_loadu_si128(state_ptr);
	let efgh = _mm_loadu_si128(state_ptr.add(1));

	let cdab = _mm_shuffle_epi32(dcba, 0xB1);
	let efgh = _mm_shuffle_epi32(efgh, 0x1B);
	let mut abef = _mm_alignr_epi8(cdab, efgh, 8);
	let mut cdgh = _mm_blend_epi16(efgh, cdab, 0xF0);

	let k_ptr = K256.as_ptr() as *const __m128i;

	for block in blocks {
		let abef_save = abef;
		let cdgh_save = cdgh;

		let data_ptr = block.as_ptr() as *const __m128i;
		let mut w = [
			_mm_shuffle_epi8(_mm_loadu_si128(data_ptr), mask),
			_mm_shuffle_epi8(_mm_loadu_si128(data_ptr.add(1)), mask),
			_mm_shuffle_epi8(_mm_loadu_si128(data_ptr.add(2)), mask),
			_mm_shuffle_epi8(_mm_loadu_si128(data_ptr.add(3)), mask),
		];

		for i in 0..16 {
			if i >= 4 {
				w[i % 4] = schedule(w[i % 4], w[(i + 1) % 4], w[(i + 2) % 4], w[(i + 3) % 4]);
			}

			let msg = _mm_add_epi32(w[i % 4], _mm_loadu_si128(k_ptr.add(i)));
			cdgh = _mm_sha256rnds2_epu32(cdgh, abef, msg);
			abef = _mm_sha256rnds2_epu32(abef, cdgh, _mm_shuffle_epi32(msg, 0x0E));
		}

		abef = _mm_add_epi32(abef, abef_save);
		cdgh = _mm_add_epi32(cdgh, cdgh_save);
	}

	let feba = _mm_shuffle_epi32(abef, 0x1B);
	let dchg = _mm_shuffle_epi32(cdgh, 0xB1);
	let dcba = _mm_blend_epi16(feba, dchg, 0xF0);
	let hgef = _mm_alignr_epi8(dchg, feba, 8);

	let state_ptr = state.as_mut_ptr() as *mut __m128i;
	_mm_storeu_si128(state_ptr, dcba);
	_mm_storeu_si128(state_ptr.add(1), hgef);
}
