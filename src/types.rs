//! Common types used throughout the eightball bot.

use std::fmt;

use poise::serenity_prelude::ChannelId;

/// Identifies one conversation; the sole partition key of the answer store.
///
/// On Discord a conversation is a channel, so this wraps the raw channel id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConversationId(u64);

impl ConversationId {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<ChannelId> for ConversationId {
    fn from(channel_id: ChannelId) -> Self {
        Self(channel_id.get())
    }
}

impl fmt::Display for ConversationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
