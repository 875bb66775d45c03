//! HTTP layer — the `Session` seam, parameter encoding and the `LemmyHttp`
//! dispatcher every endpoint call goes through.

pub mod client;
pub mod params;
pub mod session;

#[cfg(feature = "http")]
pub mod reqwest_session;

pub use client::{AuthMode, LemmyHttp};
pub use params::Params;
pub use session::{HttpRequest, HttpResponse, Method, Session};

#[cfg(feature = "http")]
pub use reqwest_session::{ReqwestSession, ReqwestSessionBuilder};
