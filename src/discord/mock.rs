use std::sync::{
    atomic::{AtomicU64, Ordering},
    Mutex,
};

use poise::serenity_prelude::{ChannelId, GuildId, MessageId, UserId};

use super::{DiscordApi, PlatformError, Reactor};

/// Side effects the mock has been asked to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    DirectMessage {
        user: UserId,
        content: String,
    },
    SendMessage {
        channel: ChannelId,
        content: String,
    },
    AddReaction {
        channel: ChannelId,
        message: MessageId,
        emoji: String,
    },
    RemoveReaction {
        channel: ChannelId,
        message: MessageId,
        user: UserId,
        emoji: String,
    },
    EditMessage {
        channel: ChannelId,
        message: MessageId,
        content: String,
    },
}

#[derive(Debug, Default)]
pub(crate) struct MockDiscord {
    pub(crate) members: Vec<UserId>,
    pub(crate) users: Vec<UserId>,
    pub(crate) text_channels: Vec<(GuildId, ChannelId)>,
    pub(crate) messages: Vec<(ChannelId, MessageId, UserId)>,
    pub(crate) dms_closed: bool,
    pub(crate) reactions_forbidden: bool,
    pub(crate) posts_forbidden: bool,
    pub(crate) calls: Mutex<Vec<Call>>,
    pub(crate) next_message: AtomicU64,
}

impl MockDiscord {
    pub(crate) const FIRST_MESSAGE: u64 = 9000;

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

impl DiscordApi for MockDiscord {
    async fn guild_name(&self, _guild: GuildId) -> Option<String> {
        Some("test guild".to_owned())
    }

    async fn resolve_user(&self, _guild: GuildId, user: UserId) -> Result<Reactor, PlatformError> {
        if self.members.contains(&user) {
            Ok(Reactor {
                id: user,
                name: "member".to_owned(),
            })
        } else if self.users.contains(&user) {
            Ok(Reactor {
                id: user,
                name: "user".to_owned(),
            })
        } else {
            Err(PlatformError::NotFound)
        }
    }

    async fn direct_message(&self, user: UserId, content: String) -> Result<(), PlatformError> {
        self.record(Call::DirectMessage { user, content });

        if self.dms_closed {
            Err(PlatformError::NotFound)
        } else {
            Ok(())
        }
    }

    async fn is_guild_text_channel(&self, guild: GuildId, channel: ChannelId) -> bool {
        self.text_channels.contains(&(guild, channel))
    }

    async fn send_message(
        &self,
        channel: ChannelId,
        content: String,
    ) -> Result<MessageId, PlatformError> {
        self.record(Call::SendMessage { channel, content });

        if self.posts_forbidden {
            return Err(PlatformError::NotFound);
        }

        let offset = self.next_message.fetch_add(1, Ordering::SeqCst);
        Ok(MessageId::new(Self::FIRST_MESSAGE + offset))
    }

    async fn add_reaction(
        &self,
        channel: ChannelId,
        message: MessageId,
        emoji: &str,
    ) -> Result<(), PlatformError> {
        self.record(Call::AddReaction {
            channel,
            message,
            emoji: emoji.to_owned(),
        });

        if self.reactions_forbidden {
            Err(PlatformError::InvalidEmoji(emoji.to_owned()))
        } else {
            Ok(())
        }
    }

    async fn remove_reaction(
        &self,
        channel: ChannelId,
        message: MessageId,
        user: UserId,
        emoji: &str,
    ) -> Result<(), PlatformError> {
        self.record(Call::RemoveReaction {
            channel,
            message,
            user,
            emoji: emoji.to_owned(),
        });

        if self.reactions_forbidden {
            Err(PlatformError::NotFound)
        } else {
            Ok(())
        }
    }

    async fn message_author(
        &self,
        channel: ChannelId,
        message: MessageId,
    ) -> Result<UserId, PlatformError> {
        self.messages
            .iter()
            .find(|(c, m, _)| *c == channel && *m == message)
            .map(|(_, _, author)| *author)
            .ok_or(PlatformError::NotFound)
    }

    async fn edit_message(
        &self,
        channel: ChannelId,
        message: MessageId,
        content: String,
    ) -> Result<(), PlatformError> {
        self.record(Call::EditMessage {
            channel,
            message,
            content,
        });
        Ok(())
    }
}
