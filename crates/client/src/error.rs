use core::fmt::{self, Display};
use http::{uri::InvalidUri, StatusCode};

#[derive(Debug)]
pub enum Error {
    /// The base URL or an endpoint path is not a valid URI.
    Uri(InvalidUri),
    /// The base URL lacks a scheme or a host.
    NotAbsolute,
    /// The base URL uses a scheme other than `http` or `https`.
    UnsupportedScheme(Box<str>),
    /// The request itself could not be assembled.
    Request(http::Error),
    /// Connecting to or talking with the server failed.
    Transport(hyper_util::client::legacy::Error),
    /// The response body could not be read to completion.
    Body(hyper::Error),
    /// The server replied with a non-success status code.
    Status(StatusCode),
    /// The request payload could not be serialized.
    Encode(serde_json::Error),
    /// The response payload did not match the expected schema.
    Decode(serde_json::Error),
}

impl From<InvalidUri> for Error {
    fn from(err: InvalidUri) -> Self {
        Self::Uri(err)
    }
}

impl From<http::Error> for Error {
    fn from(err: http::Error) -> Self {
        Self::Request(err)
    }
}

impl From<hyper_util::client::legacy::Error> for Error {
    fn from(err: hyper_util::client::legacy::Error) -> Self {
        Self::Transport(err)
    }
}

impl From<hyper::Error> for Error {
    fn from(err: hyper::Error) -> Self {
        Self::Body(err)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uri(err) => write!(f, "invalid URI: {err}"),
            Self::NotAbsolute => f.write_str("base URL must include a scheme and a host"),
            Self::UnsupportedScheme(scheme) => write!(f, "unsupported URL scheme `{scheme}`"),
            Self::Request(err) => write!(f, "cannot build request: {err}"),
            Self::Transport(err) => write!(f, "request failed: {err}"),
            Self::Body(err) => write!(f, "cannot read response body: {err}"),
            Self::Status(status) => write!(f, "server replied with {status}"),
            Self::Encode(err) => write!(f, "cannot encode request: {err}"),
            Self::Decode(err) => write!(f, "unexpected response payload: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Uri(err) => Some(err),
            Self::NotAbsolute | Self::UnsupportedScheme(_) | Self::Status(_) => None,
            Self::Request(err) => Some(err),
            Self::Transport(err) => Some(err),
            Self::Body(err) => Some(err),
            Self::Encode(err) | Self::Decode(err) => Some(err),
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;
