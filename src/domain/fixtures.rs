//! JSON payloads shaped like Lemmy responses, shared by unit tests.

use serde_json::{json, Value};

pub(crate) const PUBLISHED: &str = "2023-06-20T12:34:56.789012";

pub(crate) fn person_json(id: i32, name: &str, local: bool) -> Value {
    json!({
        "id": id,
        "name": name,
        "actor_id": format!("https://lemmy.ml/u/{}", name),
        "local": local,
        "banned": false,
        "published": PUBLISHED,
    })
}

pub(crate) fn person_view_json(id: i32, name: &str) -> Value {
    json!({
        "person": person_json(id, name, true),
        "counts": {
            "id": id,
            "person_id": id,
            "post_count": 3,
            "comment_count": 10,
        },
    })
}

pub(crate) fn community_json(id: i32, name: &str, local: bool) -> Value {
    json!({
        "id": id,
        "name": name,
        "title": name.to_uppercase(),
        "removed": false,
        "deleted": false,
        "nsfw": false,
        "actor_id": format!("https://lemmy.world/c/{}", name),
        "local": local,
        "published": "2023-01-01T00:00:00",
    })
}

pub(crate) fn community_view_json(id: i32, name: &str) -> Value {
    json!({
        "community": community_json(id, name, false),
        "subscribed": "NotSubscribed",
        "blocked": false,
        "counts": {
            "id": id,
            "community_id": id,
            "subscribers": 42,
            "posts": 7,
            "comments": 99,
        },
    })
}

pub(crate) fn post_json(id: i32) -> Value {
    json!({
        "id": id,
        "name": format!("Post {}", id),
        "creator_id": 1,
        "community_id": 3,
        "removed": false,
        "locked": false,
        "deleted": false,
        "nsfw": false,
        "ap_id": format!("https://lemmy.world/post/{}", id),
        "local": true,
        "language_id": 0,
        "featured_community": false,
        "featured_local": false,
        "published": PUBLISHED,
    })
}

pub(crate) fn post_view_json(id: i32) -> Value {
    json!({
        "post": post_json(id),
        "creator": person_json(1, "alice", false),
        "community": community_json(3, "anime", false),
        "creator_banned_from_community": false,
        "counts": {
            "id": id,
            "post_id": id,
            "comments": 2,
            "score": 5,
            "upvotes": 6,
            "downvotes": 1,
            "published": PUBLISHED,
        },
        "subscribed": "NotSubscribed",
        "saved": false,
        "read": false,
        "creator_blocked": false,
        "unread_comments": 0,
    })
}

pub(crate) fn comment_json(id: i32, post_id: i32) -> Value {
    json!({
        "id": id,
        "creator_id": 1,
        "post_id": post_id,
        "content": "first!",
        "removed": false,
        "deleted": false,
        "ap_id": format!("https://lemmy.world/comment/{}", id),
        "local": true,
        "path": format!("0.{}", id),
        "distinguished": false,
        "language_id": 0,
        "published": PUBLISHED,
    })
}

pub(crate) fn comment_aggregates_json(id: i32) -> Value {
    json!({
        "id": id,
        "comment_id": id,
        "score": 1,
        "upvotes": 1,
        "downvotes": 0,
        "child_count": 0,
    })
}

pub(crate) fn comment_view_json(id: i32, post_id: i32) -> Value {
    json!({
        "comment": comment_json(id, post_id),
        "creator": person_json(1, "alice", false),
        "post": post_json(post_id),
        "community": community_json(3, "anime", false),
        "counts": comment_aggregates_json(id),
        "creator_banned_from_community": false,
        "subscribed": "NotSubscribed",
        "saved": false,
        "creator_blocked": false,
    })
}

pub(crate) fn private_message_view_json(id: i32) -> Value {
    json!({
        "private_message": {
            "id": id,
            "creator_id": 1,
            "recipient_id": 2,
            "content": "hi",
            "deleted": false,
            "read": false,
            "ap_id": format!("https://lemmy.ml/private_message/{}", id),
            "local": true,
            "published": PUBLISHED,
        },
        "creator": person_json(1, "alice", true),
        "recipient": person_json(2, "bob", true),
    })
}

/// Every field of `actual` is present in `envelope` with the same value.
pub(crate) fn assert_subset(actual: &Value, envelope: &Value) {
    match (actual, envelope) {
        (Value::Object(a), Value::Object(e)) => {
            for (key, value) in a {
                let expected = e
                    .get(key)
                    .unwrap_or_else(|| panic!("field {:?} not in envelope", key));
                assert_subset(value, expected);
            }
        }
        (Value::Array(a), Value::Array(e)) => {
            assert_eq!(a.len(), e.len());
            for (a, e) in a.iter().zip(e) {
                assert_subset(a, e);
            }
        }
        (a, e) => assert_eq!(a, e),
    }
}
