// Copyright 2025 Irreducible Inc.

/// Read boolean flag from the environment variable.
pub fn boolean_env_flag_set(flag: &str) -> bool {
	match std::env::var(flag) {
		Ok(val) => ["1", "on", "ON", "true", "TRUE", "yes", "YES"].contains(&val.as_str()),
		Err(_) => false,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_unset_flag_is_false() {
		assert!(!boolean_env_flag_set("BITSYS_UTILS_TEST_FLAG_THAT_IS_NEVER_SET"));
	}

	#[test]
	fn test_flag_values() {
		let flag = "BITSYS_UTILS_TEST_FLAG_VALUES";
		let cases = [("1", true), ("yes", true), ("TRUE", true), ("0", false), ("no", false)];
		for (value, expected) in cases {
			std::env::set_var(flag, value);
			assert_eq!(boolean_env_flag_set(flag), expected, "value {value}");
		}
		std::env::remove_var(flag);
	}
}
