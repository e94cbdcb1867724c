//! Token exchange request/response models.

// crates.io
use serde::{Deserializer, de::Error as DeError};
// self
use crate::{
	_prelude::*,
	auth::Secret,
	form::{FormParams, FormValue},
};

/// OAuth 2.0 grants accepted by Discord's token endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GrantType {
	/// Authorization Code grant.
	AuthorizationCode,
	/// Refresh Token grant.
	RefreshToken,
	/// Client Credentials grant (bot owner's own token).
	ClientCredentials,
}
impl GrantType {
	/// Returns the RFC 6749 `grant_type` value.
	pub const fn as_str(self) -> &'static str {
		match self {
			GrantType::AuthorizationCode => "authorization_code",
			GrantType::RefreshToken => "refresh_token",
			GrantType::ClientCredentials => "client_credentials",
		}
	}
}
impl Display for GrantType {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Parameters for [`OAuthClient::get_token`](crate::OAuthClient::get_token).
///
/// Encoded in field order (`grant_type`, `code`, `refresh_token`, `scope`), then `extra` in
/// insertion order, then the configured `redirect_uri`. Empty values are dropped by the form
/// encoder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenRequest {
	/// Grant being exercised.
	pub grant_type: GrantType,
	/// Authorization code returned to the redirect URI.
	pub code: Option<String>,
	/// Refresh token being exchanged.
	pub refresh_token: Option<Secret>,
	/// Requested scopes, sent space-delimited.
	pub scope: Vec<String>,
	/// Additional provider parameters.
	pub extra: FormParams,
}
impl TokenRequest {
	/// Creates a bare request for `grant_type`.
	pub fn new(grant_type: GrantType) -> Self {
		Self {
			grant_type,
			code: None,
			refresh_token: None,
			scope: Vec::new(),
			extra: FormParams::new(),
		}
	}

	/// `authorization_code` exchange for `code`.
	pub fn authorization_code(code: impl Into<String>) -> Self {
		Self { code: Some(code.into()), ..Self::new(GrantType::AuthorizationCode) }
	}

	/// `refresh_token` exchange for `refresh_token`.
	pub fn refresh_token(refresh_token: impl Into<String>) -> Self {
		Self {
			refresh_token: Some(Secret::new(refresh_token)),
			..Self::new(GrantType::RefreshToken)
		}
	}

	/// `client_credentials` request for the application owner's token.
	pub fn client_credentials() -> Self {
		Self::new(GrantType::ClientCredentials)
	}

	/// Replaces the requested scopes.
	pub fn with_scope<I, S>(mut self, scopes: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.scope = scopes.into_iter().map(Into::into).collect();

		self
	}

	/// Adds or replaces an extra form parameter.
	pub fn with_param(mut self, key: impl Into<String>, value: impl Into<FormValue>) -> Self {
		self.extra.insert(key, value);

		self
	}

	/// Renders the request into ordered form parameters, forcing `redirect_uri`.
	pub fn to_form(&self, redirect_uri: &str) -> FormParams {
		let mut form = FormParams::new();

		form.insert("grant_type", self.grant_type.as_str());
		form.insert("code", self.code.as_deref());
		form.insert("refresh_token", self.refresh_token.as_ref().map(Secret::expose));
		form.insert("scope", self.scope.join(" "));
		form.extend(self.extra.iter().map(|(key, value)| (key, value.clone())));
		form.insert("redirect_uri", redirect_uri);

		form
	}
}

/// Token endpoint response with `scope` normalized to a list.
///
/// Unknown fields (e.g. `guild` or `webhook` on bot authorizations) are kept in `extra`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
	/// Issued access token.
	pub access_token: Secret,
	/// Token type, normally `Bearer`.
	pub token_type: Option<String>,
	/// Lifetime in seconds.
	pub expires_in: Option<u64>,
	/// Refresh token, when issued.
	pub refresh_token: Option<Secret>,
	/// Granted scopes, split from the wire's space-delimited string.
	#[serde(default, deserialize_with = "deserialize_scope")]
	pub scope: Vec<String>,
	/// Remaining provider fields, passed through untouched.
	#[serde(flatten)]
	pub extra: JsonMap<String, JsonValue>,
}
impl TokenResponse {
	/// Decodes a token endpoint payload, reporting the failing field path on mismatch.
	pub fn from_json(value: JsonValue) -> Result<Self> {
		serde_path_to_error::deserialize(value).map_err(|source| Error::Decode { source })
	}

	/// Returns true if `scope` was granted.
	pub fn has_scope(&self, scope: &str) -> bool {
		self.scope.iter().any(|granted| granted == scope)
	}
}

/// Splits a space-delimited scope string into scope names, skipping empty segments.
pub fn split_scope(raw: &str) -> Vec<String> {
	raw.split(' ').filter(|segment| !segment.is_empty()).map(ToOwned::to_owned).collect()
}

fn deserialize_scope<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
	D: Deserializer<'de>,
{
	#[derive(Deserialize)]
	#[serde(untagged)]
	enum WireScope {
		Delimited(String),
		List(Vec<String>),
	}

	match Option::<WireScope>::deserialize(deserializer)? {
		None => Ok(Vec::new()),
		Some(WireScope::Delimited(raw)) => Ok(split_scope(&raw)),
		Some(WireScope::List(list)) => {
			if list.iter().any(|scope| scope.is_empty() || scope.contains(' ')) {
				return Err(DeError::custom("scope entries must be non-empty and space-free"));
			}

			Ok(list)
		},
	}
}
