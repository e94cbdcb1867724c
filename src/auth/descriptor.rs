//! Per-request `Authorization` header descriptors.

// crates.io
use base64::{Engine as _, engine::general_purpose::STANDARD};
// self
use crate::{_prelude::*, auth::Secret};

/// HTTP authentication schemes used against the Discord API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AuthScheme {
	/// `Basic` client credentials, used by the token and revocation endpoints.
	Basic,
	/// `Bearer` access tokens, used by resource endpoints.
	Bearer,
}
impl AuthScheme {
	/// Returns the scheme token as it appears in the `Authorization` header.
	pub const fn as_str(self) -> &'static str {
		match self {
			AuthScheme::Basic => "Basic",
			AuthScheme::Bearer => "Bearer",
		}
	}
}
impl Display for AuthScheme {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Scheme + credential pair rendered into the `Authorization` header of one request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthDescriptor {
	/// Authentication scheme.
	pub scheme: AuthScheme,
	/// Credential placed after the scheme.
	pub credential: Secret,
}
impl AuthDescriptor {
	/// Basic credentials: `base64("<client_id>:<client_secret>")`.
	pub fn basic(client_id: &str, client_secret: &Secret) -> Self {
		let credential = STANDARD.encode(format!("{client_id}:{}", client_secret.expose()));

		Self { scheme: AuthScheme::Basic, credential: Secret::new(credential) }
	}

	/// Bearer credentials carrying an opaque access token.
	pub fn bearer(access_token: impl Into<String>) -> Self {
		Self { scheme: AuthScheme::Bearer, credential: Secret::new(access_token) }
	}

	/// Full header value, e.g. `Bearer abc`.
	pub fn header_value(&self) -> String {
		format!("{} {}", self.scheme, self.credential.expose())
	}
}
