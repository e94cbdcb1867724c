// self
use crate::obs::{ApiOperation, RequestOutcome};

/// Records an operation outcome via the global metrics recorder (when enabled).
pub fn record_request_outcome(operation: ApiOperation, outcome: RequestOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"discord_oauth2_request_total",
			"operation" => operation.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}
	#[cfg(not(feature = "metrics"))]
	{
		let _ = (operation, outcome);
	}
}
