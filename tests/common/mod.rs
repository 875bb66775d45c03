//! Response payloads shared by the integration tests.

#![allow(dead_code)]

use serde_json::{json, Value};

pub const PUBLISHED: &str = "2023-06-20T12:34:56.789012";

pub fn community_view(id: i32, name: &str) -> Value {
    json!({
        "community": {
            "id": id,
            "name": name,
            "title": name.to_uppercase(),
            "actor_id": format!("https://lemmy.world/c/{}", name),
            "local": false,
            "published": PUBLISHED,
        },
        "subscribed": "NotSubscribed",
        "blocked": false,
        "counts": {"id": id, "community_id": id, "subscribers": 42, "posts": 7, "comments": 99},
    })
}

pub fn get_community_response(id: i32, name: &str) -> Value {
    json!({
        "community_view": community_view(id, name),
        "moderators": [],
        "discussion_languages": [0],
    })
}

pub fn site_response() -> Value {
    json!({
        "site_view": {
            "site": {"id": 1, "name": "Lemmy", "actor_id": "https://lemmy.ml/", "published": PUBLISHED},
            "local_site": {"id": 1, "site_id": 1},
            "local_site_rate_limit": {"id": 1, "local_site_id": 1},
            "counts": {"id": 1, "site_id": 1, "users": 10, "posts": 20, "comments": 30, "communities": 4},
        },
        "admins": [],
        "version": "0.18.1",
    })
}
