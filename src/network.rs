//! Wire-level constants for the Lemmy HTTP API.

macro_rules! api_version {
    () => {
        "v3"
    };
}

/// Lemmy HTTP API version targeted by this crate.
pub const API_VERSION: &str = api_version!();

/// Path prefix prepended to every endpoint path.
pub const API_PREFIX: &str = concat!("/api/", api_version!());

/// Reserved parameter name that carries the credential (query string or JSON body).
pub const AUTH_PARAM: &str = "auth";

/// Field of an error payload that holds the machine-readable error code.
pub const ERROR_FIELD: &str = "error";

/// Default request timeout for the reqwest-backed session.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default `User-Agent` sent by the reqwest-backed session.
pub const DEFAULT_USER_AGENT: &str = concat!("lemmy-client/", env!("CARGO_PKG_VERSION"));

/// Longest prefix of a non-JSON error body kept inside a transport error.
pub(crate) const MAX_ERROR_BODY_LEN: usize = 512;
