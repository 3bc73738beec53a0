// Copyright 2023-2025 Irreducible Inc.

use crate::env::boolean_env_flag_set;

/// Environment flag that turns on span close events in the log output.
pub const LOG_SPANS_FLAG: &str = "MDEXT_LOG_SPANS";

/// Install the global `tracing` subscriber used by the binaries.
///
/// Verbosity is taken from `RUST_LOG` and defaults to `warn`. Logs go to stderr so that the
/// results printed on stdout stay machine readable. Calling this more than once is harmless, the
/// first subscriber wins.
pub fn init_tracing() {
	use tracing_subscriber::{
		fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
	};

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
	let span_events = if boolean_env_flag_set(LOG_SPANS_FLAG) {
		FmtSpan::CLOSE
	} else {
		FmtSpan::NONE
	};

	let _ = tracing_subscriber::registry()
		.with(filter)
		.with(
			tracing_subscriber::fmt::layer()
				.with_writer(std::io::stderr)
				.with_span_events(span_events),
		)
		.try_init();
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_init_tracing_twice() {
		init_tracing();
		init_tracing();
		tracing::debug!("subscriber installed");
	}
}
