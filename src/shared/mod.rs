//! Shared enums, traits and helpers used across all domain modules.
//!
//! Request enums serialize exactly as the Lemmy API spells them
//! (`"TopDay"`, `"Subscribed"`, …) so they can be dropped straight into
//! request forms.

pub mod ids;
pub mod time;

pub use ids::{decode_id_b64, encode_id_b64, ShortIdError};
pub use time::parse_timestamp;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($(#[$vmeta:meta])* $variant:ident),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }
    };
}

// ─── Listing / sorting ───────────────────────────────────────────────────────

wire_enum! {
    /// Sort order for post listings.
    SortType {
        Active,
        Hot,
        New,
        Old,
        TopDay,
        TopWeek,
        TopMonth,
        TopYear,
        TopAll,
        MostComments,
        NewComments,
        TopHour,
        TopSixHour,
        TopTwelveHour,
        TopThreeMonths,
        TopSixMonths,
        TopNineMonths,
    }
}

wire_enum! {
    /// Sort order for comment trees.
    CommentSortType { Hot, Top, New, Old }
}

wire_enum! {
    /// Which slice of the federation a listing covers.
    ListingType { All, Local, Subscribed }
}

wire_enum! {
    /// Object kinds returned by `search`.
    SearchType { All, Comments, Posts, Communities, Users, Url }
}

wire_enum! {
    /// Where a post is pinned.
    PostFeatureType { Local, Community }
}

wire_enum! {
    /// Site registration policy.
    RegistrationMode { Closed, RequireApplication, Open }
}

wire_enum! {
    /// Mod log filter.
    ModlogActionType {
        All,
        ModRemovePost,
        ModLockPost,
        ModFeaturePost,
        ModRemoveComment,
        ModRemoveCommunity,
        ModBanFromCommunity,
        ModAddCommunity,
        ModTransferCommunity,
        ModAdd,
        ModBan,
        ModHideCommunity,
        AdminPurgePerson,
        AdminPurgeCommunity,
        AdminPurgePost,
        AdminPurgeComment,
    }
}

// ─── Object traits ───────────────────────────────────────────────────────────

/// Any record carrying a numeric Lemmy id.
pub trait LemmyObject {
    fn id(&self) -> i32;

    /// Short URL-safe code for the id; see [`encode_id_b64`].
    fn id_b64(&self) -> String {
        encode_id_b64(self.id())
    }
}

/// Records that live on some instance of the federation.
pub trait InstanceBound {
    fn actor_id(&self) -> &str;

    fn is_local(&self) -> bool;

    /// Host of the home instance, `None` for local records or unparsable actor ids.
    fn instance_domain(&self) -> Option<String> {
        if self.is_local() {
            return None;
        }
        url::Url::parse(self.actor_id())
            .ok()?
            .host_str()
            .map(str::to_owned)
    }
}

/// Records with a `published` timestamp.
pub trait Published {
    fn published(&self) -> &str;

    fn published_at(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(self.published())
    }
}

macro_rules! impl_lemmy_object {
    ($($ty:ty),+ $(,)?) => {
        $(impl $crate::shared::LemmyObject for $ty {
            fn id(&self) -> i32 {
                self.id
            }
        })+
    };
}

macro_rules! impl_published {
    ($($ty:ty),+ $(,)?) => {
        $(impl $crate::shared::Published for $ty {
            fn published(&self) -> &str {
                &self.published
            }
        })+
    };
}

macro_rules! impl_instance_bound {
    ($($ty:ty),+ $(,)?) => {
        $(impl $crate::shared::InstanceBound for $ty {
            fn actor_id(&self) -> &str {
                &self.actor_id
            }

            fn is_local(&self) -> bool {
                self.local
            }
        })+
    };
}

pub(crate) use impl_instance_bound;
pub(crate) use impl_lemmy_object;
pub(crate) use impl_published;

// ─── Generic responses ───────────────────────────────────────────────────────

/// Response of endpoints that return an empty object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmptyResponse {}

/// `{"success": bool}` acknowledgement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
}
