//! Custom emoji domain.

pub mod client;
pub mod wire;

use serde::{Deserialize, Serialize};

use crate::shared::{impl_lemmy_object, impl_published};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomEmoji {
    pub id: i32,
    pub local_site_id: i32,
    pub shortcode: String,
    pub image_url: String,
    pub alt_text: String,
    pub category: String,
    pub published: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CustomEmojiKeyword {
    pub id: i32,
    pub custom_emoji_id: i32,
    pub keyword: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomEmojiView {
    pub custom_emoji: CustomEmoji,
    #[serde(default)]
    pub keywords: Vec<CustomEmojiKeyword>,
}

impl CustomEmojiView {
    /// `:shortcode:` as typed in markdown.
    pub fn markdown(&self) -> String {
        format!(":{}:", self.custom_emoji.shortcode)
    }

    pub fn matches(&self, keyword: &str) -> bool {
        self.custom_emoji.shortcode == keyword || self.keywords.iter().any(|k| k.keyword == keyword)
    }
}

impl_lemmy_object!(CustomEmoji, CustomEmojiKeyword);
impl_published!(CustomEmoji);
