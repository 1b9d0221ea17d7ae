//! Everything the roller needs from Discord, behind one trait.

use poise::serenity_prelude::{self as serenity, ChannelId, GuildId, MessageId, UserId};

mod http;

pub mod roller;
pub mod trigger;

#[cfg(test)]
pub(crate) mod mock;

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("not found")]
    NotFound,

    #[error("'{0}' can't be used as a reaction")]
    InvalidEmoji(String),

    #[error(transparent)]
    Serenity(#[from] serenity::Error),
}

/// A user who reacted, resolved through the guild if possible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reactor {
    pub id: UserId,
    pub name: String,
}

impl Reactor {
    pub fn mention(&self) -> String {
        format!("<@{}>", self.id)
    }
}

/// The outbound side of the bot.
pub trait DiscordApi {
    async fn guild_name(&self, guild: GuildId) -> Option<String>;

    /// Prefers the guild member, then falls back to a global user lookup.
    async fn resolve_user(&self, guild: GuildId, user: UserId) -> Result<Reactor, PlatformError>;

    async fn direct_message(&self, user: UserId, content: String) -> Result<(), PlatformError>;

    /// Whether `channel` is a text channel of `guild`.
    async fn is_guild_text_channel(&self, guild: GuildId, channel: ChannelId) -> bool;

    async fn send_message(
        &self,
        channel: ChannelId,
        content: String,
    ) -> Result<MessageId, PlatformError>;

    async fn add_reaction(
        &self,
        channel: ChannelId,
        message: MessageId,
        emoji: &str,
    ) -> Result<(), PlatformError>;

    async fn remove_reaction(
        &self,
        channel: ChannelId,
        message: MessageId,
        user: UserId,
        emoji: &str,
    ) -> Result<(), PlatformError>;

    async fn message_author(
        &self,
        channel: ChannelId,
        message: MessageId,
    ) -> Result<UserId, PlatformError>;

    async fn edit_message(
        &self,
        channel: ChannelId,
        message: MessageId,
        content: String,
    ) -> Result<(), PlatformError>;
}
