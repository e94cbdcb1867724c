//! Immutable client configuration and its validating builder.

// self
use crate::{_prelude::*, auth::Secret, error::ConfigError};

/// API version segment used when none is configured.
pub const DEFAULT_API_VERSION: &str = "v8";
/// Base endpoint every request path is appended to.
pub const DEFAULT_API_BASE: &str = "https://discord.com/api";

/// Provider configuration owned by one [`OAuthClient`](crate::OAuthClient).
///
/// Values are fixed at [`ClientConfigBuilder::build`]; there are no setters.
#[derive(Clone, Debug)]
pub struct ClientConfig {
	api_version: String,
	client_id: String,
	client_secret: Secret,
	redirect_uri: String,
	api_base: Url,
}
impl ClientConfig {
	/// Creates a new builder seeded with the default API version and base endpoint.
	pub fn builder() -> ClientConfigBuilder {
		ClientConfigBuilder::default()
	}

	/// API version segment, e.g. `v8`.
	pub fn api_version(&self) -> &str {
		&self.api_version
	}

	/// Application client identifier in its string form.
	pub fn client_id(&self) -> &str {
		&self.client_id
	}

	/// Application client secret.
	pub fn client_secret(&self) -> &Secret {
		&self.client_secret
	}

	/// Redirect URI forced into every token exchange, exactly as configured.
	pub fn redirect_uri(&self) -> &str {
		&self.redirect_uri
	}

	/// Base endpoint request paths are appended to.
	pub fn api_base(&self) -> &Url {
		&self.api_base
	}

	/// Prefixes `suffix` with the version segment: `/v8` + `suffix`.
	pub fn versioned_path(&self, suffix: &str) -> String {
		format!("/{}{suffix}", self.api_version)
	}
}

/// Builder for [`ClientConfig`] values.
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
	/// API version segment; defaults to [`DEFAULT_API_VERSION`].
	pub api_version: Option<String>,
	/// Client identifier in its string form.
	pub client_id: Option<String>,
	/// Client secret.
	pub client_secret: Option<Secret>,
	/// Redirect URI registered with the application.
	pub redirect_uri: Option<String>,
	/// Base endpoint; defaults to [`DEFAULT_API_BASE`].
	pub api_base: Option<Url>,
}
impl ClientConfigBuilder {
	/// Overrides the API version segment.
	pub fn api_version(mut self, version: impl Into<String>) -> Self {
		self.api_version = Some(version.into());

		self
	}

	/// Sets the client identifier. Numeric identifiers are stored as their decimal string.
	pub fn client_id(mut self, client_id: impl Display) -> Self {
		self.client_id = Some(client_id.to_string());

		self
	}

	/// Sets the client secret.
	pub fn client_secret(mut self, secret: impl Into<String>) -> Self {
		self.client_secret = Some(Secret::new(secret));

		self
	}

	/// Sets the redirect URI.
	pub fn redirect_uri(mut self, redirect_uri: impl Into<String>) -> Self {
		self.redirect_uri = Some(redirect_uri.into());

		self
	}

	/// Points the client at a different base endpoint (proxies, mock servers).
	pub fn api_base(mut self, url: Url) -> Self {
		self.api_base = Some(url);

		self
	}

	/// Validates the collected values and produces an immutable [`ClientConfig`].
	pub fn build(self) -> Result<ClientConfig, ConfigError> {
		let client_id = self.client_id.ok_or(ConfigError::MissingField { field: "client_id" })?;
		let client_secret =
			self.client_secret.ok_or(ConfigError::MissingField { field: "client_secret" })?;
		let redirect_uri =
			self.redirect_uri.ok_or(ConfigError::MissingField { field: "redirect_uri" })?;
		let api_version = self.api_version.unwrap_or_else(|| DEFAULT_API_VERSION.to_owned());

		validate_api_version(&api_version)?;
		// Parse for validation only; the wire keeps the caller's exact string.
		Url::parse(&redirect_uri).map_err(|source| ConfigError::InvalidRedirect { source })?;

		let api_base = match self.api_base {
			Some(url) => url,
			None => Url::parse(DEFAULT_API_BASE)
				.map_err(|source| ConfigError::InvalidBaseUrl { source })?,
		};

		Ok(ClientConfig { api_version, client_id, client_secret, redirect_uri, api_base })
	}
}

fn validate_api_version(version: &str) -> Result<(), ConfigError> {
	if version.is_empty() || version.contains('/') || version.chars().any(char::is_whitespace) {
		return Err(ConfigError::InvalidApiVersion { version: version.to_owned() });
	}

	Ok(())
}
