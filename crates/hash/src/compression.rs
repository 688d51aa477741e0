// Copyright 2024-2025 Irreducible Inc.

//! Fixed-arity compression interfaces for building hash trees.

/// An `N`-to-1 compression function collision-resistant in a hash tree setting.
///
/// Unlike `CompressionFunction`, it may not be collision-resistant in general.
/// Instead it is only collision-resistant in hash-tree like settings where
/// the preimage of a non-leaf node must consist of compression outputs.
pub trait PseudoCompressionFunction<T, const N: usize>: Clone {
	fn compress(&self, input: [T; N]) -> T;
}

/// An `N`-to-1 compression function.
pub trait CompressionFunction<T, const N: usize>: PseudoCompressionFunction<T, N> {}

/// Folds `leaves` pairwise into a root, carrying the last node of an odd level up unchanged.
///
/// Unlike the bitcoin merkle root, odd levels are not padded with a duplicate, so the result
/// does not suffer from the duplicate-leaf ambiguity. Returns `None` for no leaves.
pub fn compress_tree<T: Clone, C: PseudoCompressionFunction<T, 2>>(
	compression: &C,
	mut leaves: Vec<T>,
) -> Option<T> {
	while leaves.len() > 1 {
		leaves = leaves
			.chunks(2)
			.map(|pair| match pair {
				[left, right] => compression.compress([left.clone(), right.clone()]),
				[single] => single.clone(),
				_ => unreachable!("chunks of two"),
			})
			.collect();
	}
	leaves.pop()
}
