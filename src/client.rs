//! Discord OAuth2 client: one async method per API operation.

// crates.io
use url::form_urlencoded::Serializer;
// self
use crate::{
	_prelude::*,
	auth::{AuthDescriptor, AuthorizationRequest, authorize},
	config::ClientConfig,
	form::FormParams,
	http::{ApiHttpClient, Method},
	model::{TokenRequest, TokenResponse},
	obs::{self, ApiOperation, RequestOutcome, RequestSpan},
	transport::{ContentType, Transport},
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestHttpClient;

/// Member search result count used when the caller gives none.
pub const DEFAULT_SEARCH_LIMIT: u32 = 1;

#[cfg(feature = "reqwest")]
/// Client specialized for the crate's default reqwest transport stack.
pub type ReqwestOAuthClient = OAuthClient<ReqwestHttpClient>;

/// Issues Discord OAuth2 and user/guild API calls for one application.
///
/// The client owns an immutable [`ClientConfig`] and a shared HTTP client; clones are cheap and
/// concurrent calls share no mutable state. Every method performs exactly one HTTP request and
/// surfaces any failure directly; nothing is cached, retried, or refreshed.
pub struct OAuthClient<C>
where
	C: ?Sized + ApiHttpClient,
{
	config: ClientConfig,
	transport: Transport<C>,
}
impl<C> OAuthClient<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Creates a client that sends requests through the caller-provided HTTP client.
	pub fn with_http_client(config: ClientConfig, http_client: impl Into<Arc<C>>) -> Self {
		let transport = Transport::new(config.api_base().clone(), http_client);

		Self { config, transport }
	}

	/// Configuration the client was built with.
	pub fn config(&self) -> &ClientConfig {
		&self.config
	}

	/// Builds the authorize URL for `scopes` with a fresh random `state`.
	pub fn authorization_request<I, S>(&self, scopes: I) -> Result<AuthorizationRequest>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		authorize::build_authorization_request(&self.config, scopes)
	}

	/// Exchanges a grant at `POST /{version}/oauth2/token`.
	///
	/// `redirect_uri` is always set to the configured value. The returned scope list is split
	/// from the provider's space-delimited string.
	pub async fn get_token(&self, request: TokenRequest) -> Result<TokenResponse> {
		self.observe(ApiOperation::GetToken, async {
			let body = request.to_form(self.config.redirect_uri()).encode();
			let value = self
				.transport
				.send(
					Method::POST,
					&self.config.versioned_path("/oauth2/token"),
					&self.basic_auth(),
					ContentType::FormUrlEncoded,
					Some(body),
				)
				.await?;

			TokenResponse::from_json(value)
		})
		.await
	}

	/// Revokes an access or refresh token at `POST /{version}/oauth2/token/revoke`.
	pub async fn revoke_token(&self, token: &str) -> Result<JsonValue> {
		self.observe(ApiOperation::RevokeToken, async {
			let body = FormParams::new().with("token", token).encode();

			self.transport
				.send(
					Method::POST,
					&self.config.versioned_path("/oauth2/token/revoke"),
					&self.basic_auth(),
					ContentType::FormUrlEncoded,
					Some(body),
				)
				.await
		})
		.await
	}

	/// Current user (`GET /{version}/users/@me`).
	pub async fn user(&self, access_token: &str) -> Result<JsonValue> {
		self.observe(ApiOperation::User, self.get_json(access_token, "/users/@me")).await
	}

	/// Guilds the current user belongs to (`GET /{version}/users/@me/guilds`).
	pub async fn user_guilds(&self, access_token: &str) -> Result<JsonValue> {
		let guilds = self.get_json(access_token, "/users/@me/guilds");

		self.observe(ApiOperation::UserGuilds, guilds).await
	}

	/// One of the current user's guilds (`GET /{version}/users/@me/guilds/{guild_id}`).
	pub async fn user_guild(&self, access_token: &str, guild_id: &str) -> Result<JsonValue> {
		let suffix = format!("/users/@me/guilds/{guild_id}");

		self.observe(ApiOperation::UserGuild, self.get_json(access_token, &suffix)).await
	}

	/// Channels of one of the current user's guilds.
	pub async fn user_guild_channels(
		&self,
		access_token: &str,
		guild_id: &str,
	) -> Result<JsonValue> {
		let suffix = format!("/users/@me/guilds/{guild_id}/channels");

		self.observe(ApiOperation::UserGuildChannels, self.get_json(access_token, &suffix)).await
	}

	/// Searches members of one of the current user's guilds by name prefix.
	///
	/// `limit` defaults to [`DEFAULT_SEARCH_LIMIT`].
	pub async fn search_guild_member(
		&self,
		access_token: &str,
		guild_id: &str,
		query: &str,
		limit: Option<u32>,
	) -> Result<JsonValue> {
		let limit = limit.unwrap_or(DEFAULT_SEARCH_LIMIT).to_string();
		let query = Serializer::new(String::new())
			.append_pair("query", query)
			.append_pair("limit", &limit)
			.finish();
		let suffix = format!("/users/@me/guilds/{guild_id}/members/search?{query}");

		self.observe(ApiOperation::SearchGuildMember, self.get_json(access_token, &suffix)).await
	}

	fn basic_auth(&self) -> AuthDescriptor {
		AuthDescriptor::basic(self.config.client_id(), self.config.client_secret())
	}

	async fn get_json(&self, access_token: &str, suffix: &str) -> Result<JsonValue> {
		self.transport
			.send(
				Method::GET,
				&self.config.versioned_path(suffix),
				&AuthDescriptor::bearer(access_token),
				ContentType::Json,
				None,
			)
			.await
	}

	async fn observe<T, Fut>(&self, operation: ApiOperation, fut: Fut) -> Result<T>
	where
		Fut: Future<Output = Result<T>>,
	{
		let span = RequestSpan::new(operation);

		obs::record_request_outcome(operation, RequestOutcome::Attempt);

		let result = span.instrument(fut).await;

		match &result {
			Ok(_) => obs::record_request_outcome(operation, RequestOutcome::Success),
			Err(_) => obs::record_request_outcome(operation, RequestOutcome::Failure),
		}

		result
	}
}
#[cfg(feature = "reqwest")]
impl OAuthClient<ReqwestHttpClient> {
	/// Creates a client backed by a default reqwest transport.
	pub fn new(config: ClientConfig) -> Self {
		Self::with_http_client(config, ReqwestHttpClient::default())
	}
}
impl<C> Clone for OAuthClient<C>
where
	C: ?Sized + ApiHttpClient,
{
	fn clone(&self) -> Self {
		Self { config: self.config.clone(), transport: self.transport.clone() }
	}
}
impl<C> Debug for OAuthClient<C>
where
	C: ?Sized + ApiHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("OAuthClient")
			.field("api_base", &self.config.api_base().as_str())
			.field("api_version", &self.config.api_version())
			.field("client_id", &self.config.client_id())
			.finish()
	}
}
