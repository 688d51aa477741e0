// Copyright 2025 Irreducible Inc.

//! The four byte checksum trailing base58check and other bitcoin payloads.

use subtle::ConstantTimeEq;

use crate::functions::bitcoin_hash;

pub const CHECKSUM_BYTES: usize = 4;

/// The leading bytes of the double SHA-256 of `data`.
pub fn checksum(data: &[u8]) -> [u8; CHECKSUM_BYTES] {
	let hash = bitcoin_hash(data);
	let mut out = [0; CHECKSUM_BYTES];
	out.copy_from_slice(&hash[..CHECKSUM_BYTES]);
	out
}

/// Appends the checksum of `data` to it.
pub fn append_checksum(data: &mut Vec<u8>) {
	let sum = checksum(data);
	data.extend_from_slice(&sum);
}

/// Overwrites the trailing four bytes of `data` with the checksum of everything before them.
///
/// # Panics
/// Panics if `data` is shorter than a checksum.
pub fn insert_checksum(data: &mut [u8]) {
	assert!(data.len() >= CHECKSUM_BYTES, "no room for a checksum");
	let (payload, sum) = data.split_at_mut(data.len() - CHECKSUM_BYTES);
	sum.copy_from_slice(&checksum(payload));
}

/// Whether the trailing four bytes of `data` are the checksum of the rest.
pub fn verify_checksum(data: &[u8]) -> bool {
	let Some(split) = data.len().checked_sub(CHECKSUM_BYTES) else {
		return false;
	};
	let (payload, sum) = data.split_at(split);
	checksum(payload)[..].ct_eq(sum).into()
}
