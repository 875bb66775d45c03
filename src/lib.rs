//! # Lemmy client
//!
//! A typed async Rust SDK for the Lemmy HTTP API (`/api/v3`).
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Shared enums and traits, domain models, errors, constants
//! 2. **Auth** — `Credential` plus login/registration forms
//! 3. **HTTP API** — `LemmyHttp` over an injectable [`http::Session`]; `reqwest` backend behind the `http` feature
//! 4. **Endpoints** — One [`endpoints::Endpoint`] per upstream operation
//! 5. **High-Level Client** — `LemmyClient` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use lemmy_client::prelude::*;
//!
//! let client = LemmyClient::builder()
//!     .base_url("https://lemmy.ml")
//!     .build()?;
//!
//! let jwt = client.auth().login("alice", "hunter22").await?;
//! let client = client.with_credential(jwt);
//!
//! let anime = client.communities().get(&GetCommunity::by_name("anime")).await?;
//! let posts = client.posts().list(&GetPosts::default()).await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared wire enums, object traits and id helpers.
pub mod shared;

/// Domain modules (vertical slices): objects, request forms, sub-clients.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// API path and default constants.
pub mod network;

// ── Layer 2: Auth ────────────────────────────────────────────────────────────

/// Credentials and account bootstrap forms.
pub mod auth;

// ── Layer 3: HTTP API ────────────────────────────────────────────────────────

/// Request construction, sessions and response decoding.
pub mod http;

// ── Layer 4: Endpoints ───────────────────────────────────────────────────────

/// Catalog of every upstream operation.
pub mod endpoints;

// ── Layer 5: High-Level Client ───────────────────────────────────────────────

/// `LemmyClient` — the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared enums and traits
    pub use crate::shared::{
        CommentSortType, InstanceBound, LemmyObject, ListingType, ModlogActionType,
        PostFeatureType, Published, RegistrationMode, SearchType, SortType,
    };

    // Domain types
    pub use crate::domain::comment::CommentView;
    pub use crate::domain::community::CommunityView;
    pub use crate::domain::person::PersonView;
    pub use crate::domain::post::PostView;
    pub use crate::domain::private_message::PrivateMessageView;
    pub use crate::domain::site::SiteView;

    // Common forms
    pub use crate::domain::comment::wire::{CreateComment, GetComments};
    pub use crate::domain::community::wire::{GetCommunity, ListCommunities};
    pub use crate::domain::modlog::wire::GetModlog;
    pub use crate::domain::person::wire::GetPersonDetails;
    pub use crate::domain::post::wire::{CreatePost, GetPosts};
    pub use crate::domain::site::wire::Search;

    // Errors
    pub use crate::error::{LemmyError, LemmyResult, SessionError, TransportError};

    // Auth
    pub use crate::auth::{Credential, Login, LoginResponse};

    // HTTP layer
    pub use crate::http::{AuthMode, HttpRequest, HttpResponse, LemmyHttp, Method, Session};
    #[cfg(feature = "http")]
    pub use crate::http::{ReqwestSession, ReqwestSessionBuilder};

    // Endpoints
    pub use crate::endpoints::Endpoint;

    // Client + sub-clients
    pub use crate::client::{
        AdminClient, AuthClient, CommentsClient, CommunitiesClient, CustomEmojisClient,
        LemmyClient, PersonsClient, PostsClient, PrivateMessagesClient, SiteSubClient,
    };
    #[cfg(feature = "http")]
    pub use crate::client::LemmyClientBuilder;
}
