// Copyright 2025 Irreducible Inc.

//! The hashing core: SHA-1, SHA-2 and RIPEMD on generic round engines, streaming accumulation,
//! double hashing and bitcoin merkle trees.
//!
//! The engines are written once over [`word::WordOps`], so the same round code runs on scalar
//! words, on portable lane arrays and on SIMD registers. See [`dispatch`] for how a strategy is
//! picked at runtime.

pub mod accumulator;
mod arch;
pub mod checksum;
pub mod codec;
pub mod compression;
pub mod dispatch;
pub mod functions;
pub mod hasher;
pub mod hmac;
pub mod lanes;
pub mod multi_digest;
pub mod parallel;
pub mod pbkdf2;
pub mod primitives;
pub mod rmd;
pub mod serialization;
pub mod sha;
pub mod word;

pub use accumulator::Accumulator;
pub use compression::*;
pub use functions::*;
pub use hasher::{HashError, Hasher};
pub use hmac::Hmac;
pub use multi_digest::{
	MultiDigest, MultiSha, ParallelDigest, ParallelMultidigestImpl, Serializable,
};
pub use pbkdf2::pbkdf2;
pub use serialization::{hash_serialize, HashWriter};

pub type Sha1 = sha::Algorithm<sha::H160>;
pub type Sha224 = sha::Algorithm<sha::H224>;
pub type Sha256 = sha::Algorithm<sha::H256>;
pub type Sha384 = sha::Algorithm<sha::H384>;
pub type Sha512 = sha::Algorithm<sha::H512>;
pub type Sha512_224 = sha::Algorithm<sha::H512_224>;
pub type Sha512_256 = sha::Algorithm<sha::H512_256>;

pub type Rmd128 = rmd::Algorithm<rmd::H128>;
pub type Rmd160 = rmd::Algorithm<rmd::H160>;
