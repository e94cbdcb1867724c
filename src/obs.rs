//! Optional observability helpers for API operations.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to run every operation inside a span named `discord_oauth2.request` with an
//!   `operation` field, and to emit transport-level `debug` events (method, URL, status).
//! - Enable `metrics` to increment the `discord_oauth2_request_total` counter for every
//!   attempt/success/failure, labeled by `operation` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Public client operations, used as span and metric labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ApiOperation {
	/// `POST /oauth2/token`.
	GetToken,
	/// `POST /oauth2/token/revoke`.
	RevokeToken,
	/// `GET /users/@me`.
	User,
	/// `GET /users/@me/guilds`.
	UserGuilds,
	/// `GET /users/@me/guilds/{guild_id}`.
	UserGuild,
	/// `GET /users/@me/guilds/{guild_id}/channels`.
	UserGuildChannels,
	/// `GET /users/@me/guilds/{guild_id}/members/search`.
	SearchGuildMember,
}
impl ApiOperation {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			ApiOperation::GetToken => "get_token",
			ApiOperation::RevokeToken => "revoke_token",
			ApiOperation::User => "user",
			ApiOperation::UserGuilds => "user_guilds",
			ApiOperation::UserGuild => "user_guild",
			ApiOperation::UserGuildChannels => "user_guild_channels",
			ApiOperation::SearchGuildMember => "search_guild_member",
		}
	}
}
impl Display for ApiOperation {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RequestOutcome {
	/// Entry to a client operation.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl RequestOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			RequestOutcome::Attempt => "attempt",
			RequestOutcome::Success => "success",
			RequestOutcome::Failure => "failure",
		}
	}
}
impl Display for RequestOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
