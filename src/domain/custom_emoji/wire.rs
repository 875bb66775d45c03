//! Wire types for custom emoji requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::custom_emoji::CustomEmojiView;

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateCustomEmoji {
    pub category: String,
    pub shortcode: String,
    pub image_url: String,
    pub alt_text: String,
    pub keywords: Vec<String>,
}

/// Replaces every editable field; the shortcode cannot change.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EditCustomEmoji {
    pub id: i32,
    pub category: String,
    pub image_url: String,
    pub alt_text: String,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct DeleteCustomEmoji {
    pub id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomEmojiResponse {
    pub custom_emoji: CustomEmojiView,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeleteCustomEmojiResponse {
    pub id: i32,
    pub success: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fixtures;
    use crate::http::params::to_params;
    use serde_json::json;

    #[test]
    fn test_create_form_sends_keyword_list() {
        let params = to_params(&CreateCustomEmoji {
            category: "cats".into(),
            shortcode: "blobcat".into(),
            image_url: "https://lemmy.ml/pictrs/image/blobcat.png".into(),
            alt_text: "a blob cat".into(),
            keywords: vec!["cat".into(), "blob".into()],
        })
        .unwrap();
        assert_eq!(params["keywords"], json!(["cat", "blob"]));
        assert_eq!(params.len(), 5);
    }

    #[test]
    fn test_custom_emoji_response() {
        let envelope = json!({
            "custom_emoji": {
                "custom_emoji": {
                    "id": 3,
                    "local_site_id": 1,
                    "shortcode": "blobcat",
                    "image_url": "https://lemmy.ml/pictrs/image/blobcat.png",
                    "alt_text": "a blob cat",
                    "category": "cats",
                    "published": fixtures::PUBLISHED,
                },
                "keywords": [{"id": 1, "custom_emoji_id": 3, "keyword": "cat"}],
            }
        });
        let resp: CustomEmojiResponse = serde_json::from_value(envelope.clone()).unwrap();
        assert_eq!(resp.custom_emoji.markdown(), ":blobcat:");
        assert!(resp.custom_emoji.matches("cat"));
        assert!(!resp.custom_emoji.matches("dog"));
        fixtures::assert_subset(&serde_json::to_value(&resp).unwrap(), &envelope);
    }
}
