//! Custom emojis sub-client. Admin only.

use crate::client::LemmyClient;
use crate::domain::custom_emoji::wire::{
    CreateCustomEmoji, CustomEmojiResponse, DeleteCustomEmoji, DeleteCustomEmojiResponse,
    EditCustomEmoji,
};
use crate::endpoints;
use crate::error::LemmyResult;

/// Sub-client for custom emoji operations.
pub struct CustomEmojis<'a> {
    pub(crate) client: &'a LemmyClient,
}

impl<'a> CustomEmojis<'a> {
    pub async fn create(&self, form: &CreateCustomEmoji) -> LemmyResult<CustomEmojiResponse> {
        self.client.http.request(&endpoints::CREATE_CUSTOM_EMOJI, form).await
    }

    pub async fn edit(&self, form: &EditCustomEmoji) -> LemmyResult<CustomEmojiResponse> {
        self.client.http.request(&endpoints::EDIT_CUSTOM_EMOJI, form).await
    }

    pub async fn delete(&self, id: i32) -> LemmyResult<DeleteCustomEmojiResponse> {
        let form = DeleteCustomEmoji { id };
        self.client.http.request(&endpoints::DELETE_CUSTOM_EMOJI, &form).await
    }
}
