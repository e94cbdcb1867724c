//! Authorization Code redirect helper: authorize URL plus the `state` it must round-trip.

// crates.io
use rand::{Rng, distr::Alphanumeric};
// self
use crate::{_prelude::*, config::ClientConfig, error::ConfigError};

const STATE_LEN: usize = 32;

/// Authorize URL and anti-forgery state returned by
/// [`OAuthClient::authorization_request`](crate::OAuthClient::authorization_request).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthorizationRequest {
	/// Fully formed authorize URL that callers should send end-users to.
	pub url: Url,
	/// Opaque state value that must round-trip via the redirect handler.
	pub state: String,
}
impl AuthorizationRequest {
	/// Validates the returned `state` parameter after the authorization redirect.
	pub fn validate_state(&self, returned_state: &str) -> Result<()> {
		if returned_state == self.state { Ok(()) } else { Err(Error::StateMismatch) }
	}
}

pub(crate) fn build_authorization_request<I, S>(
	config: &ClientConfig,
	scopes: I,
) -> Result<AuthorizationRequest>
where
	I: IntoIterator<Item = S>,
	S: AsRef<str>,
{
	let state = random_string(STATE_LEN);
	let raw = format!("{}/oauth2/authorize", config.api_base().as_str().trim_end_matches('/'));
	let mut url = Url::parse(&raw).map_err(|source| ConfigError::InvalidUrl { url: raw, source })?;
	let scope = scopes.into_iter().map(|s| s.as_ref().to_owned()).collect::<Vec<_>>().join(" ");
	let mut pairs = url.query_pairs_mut();

	pairs.append_pair("response_type", "code");
	pairs.append_pair("client_id", config.client_id());
	pairs.append_pair("redirect_uri", config.redirect_uri());

	if !scope.is_empty() {
		pairs.append_pair("scope", &scope);
	}

	pairs.append_pair("state", &state);

	drop(pairs);

	Ok(AuthorizationRequest { url, state })
}

fn random_string(len: usize) -> String {
	rand::rng().sample_iter(Alphanumeric).take(len).map(char::from).collect()
}

#[cfg(test)]
mod tests {
	// std
	use std::collections::HashMap;
	// self
	use super::*;

	fn config() -> ClientConfig {
		ClientConfig::builder()
			.client_id(42)
			.client_secret("secret")
			.redirect_uri("https://app.example.com/callback")
			.build()
			.expect("Fixture configuration should be valid.")
	}

	#[test]
	fn authorize_url_carries_client_and_state() {
		let request = build_authorization_request(&config(), ["identify", "guilds"])
			.expect("Authorization request should build.");
		let query = request.url.query_pairs().into_owned().collect::<HashMap<_, _>>();

		assert_eq!(request.url.path(), "/api/oauth2/authorize");
		assert_eq!(query.get("response_type").map(String::as_str), Some("code"));
		assert_eq!(query.get("client_id").map(String::as_str), Some("42"));
		assert_eq!(
			query.get("redirect_uri").map(String::as_str),
			Some("https://app.example.com/callback"),
		);
		assert_eq!(query.get("scope").map(String::as_str), Some("identify guilds"));
		assert_eq!(query.get("state"), Some(&request.state));
		assert_eq!(request.state.len(), STATE_LEN);
	}

	#[test]
	fn empty_scope_list_omits_scope_parameter() {
		let request = build_authorization_request(&config(), Vec::<String>::new())
			.expect("Authorization request should build.");

		assert!(!request.url.query_pairs().any(|(key, _)| key == "scope"));
	}

	#[test]
	fn state_validation_errors_on_mismatch() {
		let request = build_authorization_request(&config(), ["identify"])
			.expect("Authorization request should build.");

		assert!(request.validate_state(&request.state).is_ok());
		assert!(matches!(request.validate_state("forged"), Err(Error::StateMismatch)));
	}
}
