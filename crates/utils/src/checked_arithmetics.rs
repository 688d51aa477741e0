// Copyright 2024-2025 Irreducible Inc.

/// Exact integer division, usable in constant expressions.
///
/// Fails (at compile time when evaluated in a `const` context) if `b` doesn't divide `a`.
pub const fn checked_int_div(a: usize, b: usize) -> usize {
	let result = a / b;
	assert!(b * result == a);

	result
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_checked_int_div_success() {
		assert_eq!(checked_int_div(64, 2), 32);
		assert_eq!(checked_int_div(128, 8), 16);
		assert_eq!(checked_int_div(20, 4), 5);
	}

	#[test]
	#[should_panic]
	fn test_checked_int_div_fail() {
		_ = checked_int_div(28, 8);
	}
}
