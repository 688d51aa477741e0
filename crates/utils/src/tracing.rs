// Copyright 2025 Irreducible Inc.

use crate::env::boolean_env_flag_set;

/// Installs the global tracing subscriber.
///
/// The filter is read from `RUST_LOG` and defaults to `warn`. Setting `BITSYS_TRACE_SPANS`
/// additionally reports every closed span together with its busy and idle time, which is the
/// cheapest way to see where a batch hashing workload spends its time.
///
/// Calling this more than once is harmless: only the first call installs a subscriber.
pub fn init_tracing() {
	use tracing_subscriber::{
		fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
	};

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

	if boolean_env_flag_set("BITSYS_TRACE_SPANS") {
		let _ = tracing_subscriber::registry()
			.with(filter)
			.with(tracing_subscriber::fmt::layer().with_span_events(FmtSpan::CLOSE))
			.try_init();
	} else {
		let _ = tracing_subscriber::registry()
			.with(filter)
			.with(tracing_subscriber::fmt::layer())
			.try_init();
	};
}
