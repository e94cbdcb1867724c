// std
use std::sync::Arc;
// crates.io
use parking_lot::Mutex;
use serde_json::json;
// self
use discord_oauth2::{
	ClientConfig, Error, OAuthClient, TokenRequest,
	error::TransportError,
	http::{ApiHttpClient, HttpFuture, HttpRequest, HttpResponse, Method, StatusCode},
};

const REDIRECT_URI: &str = "https://app.example.com/callback";
const ENCODED_REDIRECT: &str = "https%3A%2F%2Fapp.example.com%2Fcallback";

/// Replays one canned response and records every request it is handed.
struct ScriptedHttpClient {
	status: StatusCode,
	body: &'static str,
	seen: Mutex<Vec<HttpRequest>>,
}
impl ScriptedHttpClient {
	fn ok(body: &'static str) -> Self {
		Self { status: StatusCode::OK, body, seen: Mutex::default() }
	}

	fn last_body(&self) -> String {
		let seen = self.seen.lock();
		let request = seen.last().expect("A request should have been recorded.");

		String::from_utf8(request.body().clone()).expect("Recorded bodies should be UTF-8.")
	}
}
impl ApiHttpClient for ScriptedHttpClient {
	fn execute(&self, request: HttpRequest) -> HttpFuture<'_> {
		Box::pin(async move {
			self.seen.lock().push(request);

			let mut response = HttpResponse::new(self.body.as_bytes().to_vec());

			*response.status_mut() = self.status;

			Ok(response)
		})
	}
}

struct UnreachableHttpClient;
impl ApiHttpClient for UnreachableHttpClient {
	fn execute(&self, _: HttpRequest) -> HttpFuture<'_> {
		Box::pin(async {
			Err(Error::Transport(TransportError::network(std::io::Error::other("connection reset"))))
		})
	}
}

fn config() -> ClientConfig {
	ClientConfig::builder()
		.client_id(12345)
		.client_secret("shh")
		.redirect_uri(REDIRECT_URI)
		.build()
		.expect("Client configuration should build successfully.")
}

#[tokio::test]
async fn numeric_client_id_is_used_as_text_in_basic_auth() {
	let http = Arc::new(ScriptedHttpClient::ok("{}"));
	let client: OAuthClient<ScriptedHttpClient> =
		OAuthClient::with_http_client(config(), http.clone());

	client.revoke_token("tok123").await.expect("Revocation should succeed.");

	let seen = http.seen.lock();
	let request = seen.first().expect("One request should be recorded.");

	assert_eq!(request.method(), Method::POST);
	assert_eq!(request.uri().to_string(), "https://discord.com/api/v8/oauth2/token/revoke");
	assert_eq!(request.headers()["authorization"], "Basic MTIzNDU6c2ho");
	assert_eq!(request.headers()["content-type"], "application/x-www-form-urlencoded");
	assert_eq!(request.body().as_slice(), b"token=tok123");
}

#[tokio::test]
async fn refresh_grant_sends_scope_and_forced_redirect() {
	let http = Arc::new(ScriptedHttpClient::ok(
		r#"{"access_token":"a2","token_type":"Bearer","expires_in":604800,"refresh_token":"r2","scope":"identify guilds"}"#,
	));
	let client: OAuthClient<ScriptedHttpClient> =
		OAuthClient::with_http_client(config(), http.clone());
	let token = client
		.get_token(
			TokenRequest::refresh_token("r1")
				.with_scope(["identify", "guilds"])
				.with_param("redirect_uri", "https://ignored.example.com"),
		)
		.await
		.expect("Refresh should succeed.");

	assert_eq!(
		http.last_body(),
		format!(
			"grant_type=refresh_token&refresh_token=r1&scope=identify+guilds&redirect_uri={ENCODED_REDIRECT}"
		),
	);
	assert_eq!(token.access_token.expose(), "a2");
	assert_eq!(token.expires_in, Some(604800));
	assert_eq!(token.refresh_token.as_ref().map(|secret| secret.expose()), Some("r2"));
	assert!(token.has_scope("guilds"));
}

#[tokio::test]
async fn client_credentials_grant_keeps_extra_response_fields() {
	let http = Arc::new(ScriptedHttpClient::ok(
		r#"{"access_token":"app","token_type":"Bearer","scope":"identify","guild":{"id":"g1"}}"#,
	));
	let client: OAuthClient<ScriptedHttpClient> =
		OAuthClient::with_http_client(config(), http.clone());
	let token = client
		.get_token(TokenRequest::client_credentials().with_scope(["identify"]))
		.await
		.expect("Client credentials should succeed.");

	assert_eq!(
		http.last_body(),
		format!("grant_type=client_credentials&scope=identify&redirect_uri={ENCODED_REDIRECT}"),
	);
	assert_eq!(token.extra.get("guild"), Some(&json!({ "id": "g1" })));
}

#[tokio::test]
async fn falsy_extra_params_are_dropped_from_the_body() {
	let http = Arc::new(ScriptedHttpClient::ok(r#"{"access_token":"t"}"#));
	let client: OAuthClient<ScriptedHttpClient> =
		OAuthClient::with_http_client(config(), http.clone());

	client
		.get_token(
			TokenRequest::authorization_code("abc")
				.with_param("prompt", "")
				.with_param("permissions", 0_i64)
				.with_param("guild_id", "g1"),
		)
		.await
		.expect("Token exchange should succeed.");

	assert_eq!(
		http.last_body(),
		format!("grant_type=authorization_code&code=abc&guild_id=g1&redirect_uri={ENCODED_REDIRECT}"),
	);
}

#[tokio::test]
async fn token_without_access_token_fails_to_decode() {
	let http = Arc::new(ScriptedHttpClient::ok(r#"{"token_type":"Bearer"}"#));
	let client: OAuthClient<ScriptedHttpClient> = OAuthClient::with_http_client(config(), http);
	let err = client
		.get_token(TokenRequest::authorization_code("abc"))
		.await
		.expect_err("Responses without an access token should fail.");

	assert!(matches!(err, Error::Decode { .. }));
}

#[tokio::test]
async fn transport_failures_surface_unchanged() {
	let client: OAuthClient<UnreachableHttpClient> =
		OAuthClient::with_http_client(config(), UnreachableHttpClient);
	let err = client.user("tok").await.expect_err("Network failures should surface.");

	assert!(matches!(err, Error::Transport(TransportError::Network { .. })));
}

#[test]
fn authorization_request_round_trips_state() {
	let client: OAuthClient<UnreachableHttpClient> =
		OAuthClient::with_http_client(config(), UnreachableHttpClient);
	let request = client
		.authorization_request(["identify", "guilds"])
		.expect("Authorize URL should build.");
	let pairs = request.url.query_pairs().into_owned().collect::<Vec<_>>();

	assert_eq!(request.url.path(), "/api/oauth2/authorize");
	assert!(pairs.contains(&("client_id".into(), "12345".into())));
	assert!(pairs.contains(&("scope".into(), "identify guilds".into())));
	assert!(pairs.contains(&("state".into(), request.state.clone())));
	assert!(request.validate_state(&request.state).is_ok());
	assert!(matches!(request.validate_state("forged"), Err(Error::StateMismatch)));
}
