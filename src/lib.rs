//! Async Discord OAuth2 client: token exchange and revocation over Basic credentials, plus
//! Bearer-authenticated user and guild lookups, all through one thin JSON transport.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod form;
pub mod http;
pub mod model;
pub mod obs;
pub mod transport;

mod _prelude {
	pub use std::{
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		sync::Arc,
	};

	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use serde_json::{Map as JsonMap, Value as JsonValue};
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;

pub use client::OAuthClient;
#[cfg(feature = "reqwest")] pub use client::ReqwestOAuthClient;
pub use config::{ClientConfig, ClientConfigBuilder, DEFAULT_API_BASE, DEFAULT_API_VERSION};
pub use error::{Error, Result};
pub use model::{GrantType, TokenRequest, TokenResponse};

#[cfg(test)] use {color_eyre as _, httpmock as _};
