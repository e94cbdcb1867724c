//! Single-request JSON transport for the Discord API.
//!
//! [`Transport::send`] prefixes the base endpoint, attaches the `Authorization` and
//! `Content-Type` headers, hands the request to an [`ApiHttpClient`], decodes the body as JSON,
//! and turns provider-side `error`/`message` payloads into [`Error::Api`]. The HTTP status is
//! recorded on errors but never decides success on its own.

// crates.io
use http::header::{AUTHORIZATION, CONTENT_TYPE};
// self
use crate::{
	_prelude::*,
	auth::AuthDescriptor,
	error::ConfigError,
	http::{ApiHttpClient, Method},
};

/// Request body encodings used by the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContentType {
	/// `application/json`.
	Json,
	/// `application/x-www-form-urlencoded`.
	FormUrlEncoded,
}
impl ContentType {
	/// Returns the MIME type sent in `Content-Type`.
	pub const fn as_str(self) -> &'static str {
		match self {
			ContentType::Json => "application/json",
			ContentType::FormUrlEncoded => "application/x-www-form-urlencoded",
		}
	}
}
impl Display for ContentType {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Base endpoint plus the shared HTTP client every request goes through.
pub struct Transport<C>
where
	C: ?Sized + ApiHttpClient,
{
	base: Url,
	http_client: Arc<C>,
}
impl<C> Transport<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Creates a transport that appends request paths to `base`.
	pub fn new(base: Url, http_client: impl Into<Arc<C>>) -> Self {
		Self { base, http_client: http_client.into() }
	}

	/// Base endpoint request paths are appended to.
	pub fn base(&self) -> &Url {
		&self.base
	}

	/// Shared HTTP client.
	pub fn http_client(&self) -> &Arc<C> {
		&self.http_client
	}

	/// Issues one request and returns the decoded JSON payload.
	///
	/// `path` is relative to the base endpoint and already carries the version segment and any
	/// query string. `body` is attached only when present and non-empty.
	pub async fn send(
		&self,
		method: Method,
		path: &str,
		auth: &AuthDescriptor,
		content_type: ContentType,
		body: Option<String>,
	) -> Result<JsonValue> {
		let url = self.endpoint(path)?;

		#[cfg(feature = "tracing")]
		tracing::debug!(method = %method, url = %url, "Dispatching Discord API request.");

		let body = body.filter(|body| !body.is_empty()).map(String::into_bytes).unwrap_or_default();
		let request = http::Request::builder()
			.method(method)
			.uri(url.as_str())
			.header(AUTHORIZATION, auth.header_value())
			.header(CONTENT_TYPE, content_type.as_str())
			.body(body)
			.map_err(ConfigError::from)?;
		let response = self.http_client.execute(request).await?;
		let status = response.status().as_u16();

		#[cfg(feature = "tracing")]
		tracing::debug!(status, "Discord API responded.");

		decode_response(status, response.body())
	}

	fn endpoint(&self, path: &str) -> Result<Url> {
		let raw = format!("{}{path}", self.base.as_str().trim_end_matches('/'));

		Url::parse(&raw).map_err(|source| ConfigError::InvalidUrl { url: raw, source }.into())
	}
}
impl<C> Clone for Transport<C>
where
	C: ?Sized + ApiHttpClient,
{
	fn clone(&self) -> Self {
		Self { base: self.base.clone(), http_client: Arc::clone(&self.http_client) }
	}
}
impl<C> Debug for Transport<C>
where
	C: ?Sized + ApiHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Transport").field("base", &self.base.as_str()).finish()
	}
}

/// Decodes a response body and normalizes provider-side errors.
pub fn decode_response(status: u16, body: &[u8]) -> Result<JsonValue> {
	let value = serde_json::from_slice::<JsonValue>(body)
		.map_err(|source| Error::Parse { status: Some(status), source })?;

	if let Some(message) = provider_error_message(&value) {
		return Err(Error::Api { message, status: Some(status) });
	}

	Ok(value)
}

/// Returns the text of a non-empty `error` field, else of a non-empty `message` field.
fn provider_error_message(value: &JsonValue) -> Option<String> {
	let object = value.as_object()?;

	["error", "message"].into_iter().find_map(|field| object.get(field).and_then(field_text))
}

fn field_text(value: &JsonValue) -> Option<String> {
	match value {
		JsonValue::Null | JsonValue::Bool(false) => None,
		JsonValue::String(text) if text.is_empty() => None,
		JsonValue::String(text) => Some(text.clone()),
		JsonValue::Number(number) if number.as_f64() == Some(0.0) => None,
		other => Some(other.to_string()),
	}
}
