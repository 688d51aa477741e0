// Copyright 2025 Irreducible Inc.

//! Selection of the execution strategy.
//!
//! The target's capabilities are probed once per process. Every strategy produces the same
//! digests, so the selection only affects speed.

use std::sync::OnceLock;

use bitsys_utils::env::boolean_env_flag_set;
use tracing::debug;

use crate::{arch, lanes::Packed, word::Word};

/// Set to disable lane-packed batch hashing.
pub const NO_VECTORIZE_ENV: &str = "BITSYS_HASH_NO_VECTORIZE";
/// Set to disable hardware SHA instructions.
pub const NO_NATIVE_ENV: &str = "BITSYS_HASH_NO_NATIVE";

/// How batches of independent blocks are hashed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
	/// One block at a time.
	Scalar,
	/// Widest packed word first, then 4, then 2 lanes, then one block at a time.
	Vectorized,
}

impl Strategy {
	/// The strategy selected for this process.
	pub fn detected() -> Self {
		if capabilities().vectorize {
			Self::Vectorized
		} else {
			Self::Scalar
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
	pub vectorize: bool,
	pub native_sha256: bool,
	/// Lanes of the widest packed 32 bit word.
	pub lanes32: usize,
	/// Lanes of the widest packed 64 bit word.
	pub lanes64: usize,
}

impl Capabilities {
	fn detect() -> Self {
		let capabilities = Self {
			vectorize: !boolean_env_flag_set(NO_VECTORIZE_ENV),
			native_sha256: !boolean_env_flag_set(NO_NATIVE_ENV) && arch::sha256_available(),
			lanes32: <<u32 as Word>::Wide as Packed>::LANES,
			lanes64: <<u64 as Word>::Wide as Packed>::LANES,
		};

		debug!(
			vectorize = capabilities.vectorize,
			native_sha256 = capabilities.native_sha256,
			lanes32 = capabilities.lanes32,
			lanes64 = capabilities.lanes64,
			"selected hashing strategy"
		);
		capabilities
	}
}

pub fn capabilities() -> &'static Capabilities {
	static CAPABILITIES: OnceLock<Capabilities> = OnceLock::new();
	CAPABILITIES.get_or_init(Capabilities::detect)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::lanes::MAX_LANES;

	#[test]
	fn test_capabilities_are_stable() {
		let first = *capabilities();
		assert_eq!(first, *capabilities());
		assert!(first.lanes32 >= first.lanes64);
		assert!(first.lanes32 <= MAX_LANES);
	}
}
