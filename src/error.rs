// Error type for the backend client. Network failures and non-success
// statuses are separate variants but callers treat them the same way: the
// population and cleanup loops only print the message and move on.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// The request never produced a response (DNS, connection refused, ...).
    #[error("{action} request failed: {source}")]
    Transport {
        action: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The backend answered with something other than 200 OK.
    #[error("{action} failed: {status} - {body}")]
    Status {
        action: &'static str,
        status: StatusCode,
        body: String,
    },

    /// The backend answered 200 but the body did not have the expected shape.
    #[error("parsing {action} response: {source}")]
    Decode {
        action: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{action} requires a bearer token; login first")]
    MissingToken { action: &'static str },
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
