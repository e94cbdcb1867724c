//! Client-level error types shared by the transport, configuration, and API operations.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical error exposed by every public operation.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS).
	#[error(transparent)]
	Transport(#[from] TransportError),

	/// Response body could not be decoded as JSON.
	#[error("Discord returned a response body that is not valid JSON.")]
	Parse {
		/// HTTP status code, when available.
		status: Option<u16>,
		/// Underlying JSON syntax failure.
		#[source]
		source: serde_json::Error,
	},
	/// Response JSON did not match the typed model it was decoded into.
	#[error("Discord returned JSON that does not match the expected shape.")]
	Decode {
		/// Structured decoding failure, including the offending field path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
	/// Discord answered with an `error` or `message` field.
	///
	/// The display form is the provider's text, unchanged.
	#[error("{message}")]
	Api {
		/// Value of the `error` (or, failing that, `message`) field.
		message: String,
		/// HTTP status code, when available.
		status: Option<u16>,
	},
	/// The `state` returned to the redirect handler does not match the one issued.
	#[error("Authorization state mismatch.")]
	StateMismatch,
}
impl Error {
	/// Returns the provider's error text when this is an [`Error::Api`].
	pub fn api_message(&self) -> Option<&str> {
		match self {
			Self::Api { message, .. } => Some(message),
			_ => None,
		}
	}

	/// HTTP status attached to the failure, if the request got that far.
	pub fn status(&self) -> Option<u16> {
		match self {
			Self::Api { status, .. } | Self::Parse { status, .. } => *status,
			_ => None,
		}
	}
}

/// Configuration and validation failures raised before a request leaves the process.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// HTTP request construction failed (e.g. a credential that is not a valid header value).
	#[error(transparent)]
	HttpRequest(#[from] http::Error),
	/// A required configuration field was not supplied.
	#[error("Client configuration is missing `{field}`.")]
	MissingField {
		/// Name of the missing field.
		field: &'static str,
	},
	/// API version segment is empty or contains path separators/whitespace.
	#[error("API version `{version}` is not a valid path segment.")]
	InvalidApiVersion {
		/// Rejected version string.
		version: String,
	},
	/// Redirect URI cannot be parsed.
	#[error("Redirect URI is invalid.")]
	InvalidRedirect {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Base endpoint cannot be parsed.
	#[error("API base URL is invalid.")]
	InvalidBaseUrl {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// An endpoint URL assembled from the base and a request path is invalid.
	#[error("Request URL `{url}` is invalid.")]
	InvalidUrl {
		/// The assembled URL.
		url: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the Discord API.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the Discord API.")]
	Io(#[from] std::io::Error),
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn api_error_displays_provider_text_verbatim() {
		let err = Error::Api { message: "invalid_grant".into(), status: Some(400) };

		assert_eq!(err.to_string(), "invalid_grant");
		assert_eq!(err.api_message(), Some("invalid_grant"));
		assert_eq!(err.status(), Some(400));
	}

	#[test]
	fn config_errors_convert_into_client_errors() {
		let err: Error = ConfigError::MissingField { field: "client_id" }.into();

		assert!(matches!(err, Error::Config(ConfigError::MissingField { field: "client_id" })));
		assert_eq!(err.to_string(), "Client configuration is missing `client_id`.");
		assert!(err.api_message().is_none());
		assert!(err.status().is_none());
	}

	#[test]
	fn network_errors_keep_their_source() {
		let io = std::io::Error::other("connection reset");
		let err: Error = TransportError::network(io).into();

		assert!(matches!(err, Error::Transport(TransportError::Network { .. })));
		assert_eq!(
			err.source().map(|source| source.to_string()),
			Some("connection reset".to_owned()),
		);
	}
}
