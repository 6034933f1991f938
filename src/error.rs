use std::fmt;
use thiserror::Error;

/// Side of an exchange that was never supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Missing {
    Request,
    Response,
}

impl fmt::Display for Missing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Missing::Request => write!(f, "request"),
            Missing::Response => write!(f, "response"),
        }
    }
}

/// Errors raised by the adapter layer. Policy evaluation itself never fails.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CorsError {
    #[error("CORS exchange is not initialized: missing {missing}")]
    NotInitialized { missing: Missing },
}
