//! HTTP client seam used by the transport.
//!
//! [`ApiHttpClient`] is the crate's only dependency on an HTTP stack: the transport hands it a
//! fully built [`HttpRequest`] and gets back the raw [`HttpResponse`]. The default
//! implementation, [`ReqwestHttpClient`], wraps a shared [`ReqwestClient`]; custom stacks and
//! test fakes implement the trait directly and plug in through
//! [`OAuthClient::with_http_client`](crate::OAuthClient::with_http_client).

pub use http::{Method, StatusCode};

// std
#[cfg(feature = "reqwest")] use std::ops::Deref;
// self
use crate::_prelude::*;
#[cfg(feature = "reqwest")] use crate::error::{ConfigError, TransportError};

/// Request type handed to [`ApiHttpClient::execute`].
pub type HttpRequest = http::Request<Vec<u8>>;
/// Response type returned by [`ApiHttpClient::execute`].
pub type HttpResponse = http::Response<Vec<u8>>;
/// Boxed, `Send` future returned by [`ApiHttpClient::execute`].
pub type HttpFuture<'a> = Pin<Box<dyn Future<Output = Result<HttpResponse>> + 'a + Send>>;

/// Executes a single HTTP exchange on behalf of the transport.
///
/// Implementations must be `Send + Sync + 'static` so one instance can be shared behind an
/// `Arc` by every clone of a client, and the futures they return must be `Send` so callers can
/// spawn API calls on multi-threaded executors. Implementations report network failures as
/// [`Error::Transport`](crate::Error::Transport) and must return non-2xx responses as ordinary
/// responses: status handling belongs to the transport.
pub trait ApiHttpClient
where
	Self: 'static + Send + Sync,
{
	/// Sends `request` and resolves with the response status, headers, and full body.
	fn execute(&self, request: HttpRequest) -> HttpFuture<'_>;
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug, Default)]
pub struct ReqwestHttpClient(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestHttpClient {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}

	/// Builds a client from a customized [`reqwest::ClientBuilder`].
	pub fn from_builder(builder: reqwest::ClientBuilder) -> Result<Self> {
		let client = builder.build().map_err(ConfigError::from)?;

		Ok(Self(client))
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl Deref for ReqwestHttpClient {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl ApiHttpClient for ReqwestHttpClient {
	fn execute(&self, request: HttpRequest) -> HttpFuture<'_> {
		Box::pin(async move {
			let request: reqwest::Request = request.try_into().map_err(TransportError::from)?;
			let response = self.0.execute(request).await.map_err(TransportError::from)?;
			let status = response.status();
			let headers = response.headers().to_owned();
			let mut response_new =
				HttpResponse::new(response.bytes().await.map_err(TransportError::from)?.to_vec());

			*response_new.status_mut() = status;
			*response_new.headers_mut() = headers;

			Ok(response_new)
		})
	}
}
