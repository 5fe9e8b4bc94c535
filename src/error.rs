use thiserror::Error;

/// Failures surfaced by the model fetcher. There is no local recovery:
/// every variant is propagated unchanged to the caller.
#[derive(Debug, Error)]
pub enum Error {
	/// The host answered, but not with a success status. An unknown league
	/// code ends up here as a 404 from the static host.
	#[error("failed to fetch model for '{league_code}': HTTP status {status}")]
	HttpStatus {
		league_code: String,
		status: reqwest::StatusCode,
	},

	/// The request never produced a response (DNS, connect, read failure).
	#[error("request for model '{league_code}' failed")]
	Request {
		league_code: String,
		#[source]
		source: reqwest::Error,
	},

	/// The response body was not valid standard-alphabet Base64.
	#[error("model payload for '{league_code}' is not valid Base64")]
	Decode {
		league_code: String,
		#[source]
		source: base64::DecodeError,
	},
}

impl Error {
	/// The league code the failed call was made with.
	pub fn league_code(&self) -> &str {
		match self {
			Error::HttpStatus { league_code, .. }
			| Error::Request { league_code, .. }
			| Error::Decode { league_code, .. } => league_code,
		}
	}
}

pub type Result<T> = std::result::Result<T, Error>;
