use poise::serenity_prelude::{
    self as serenity, ChannelId, ChannelType, EditMessage, GuildId, HttpError, MessageId,
    ReactionType, UserId,
};
use tracing::{debug, instrument};

use super::{DiscordApi, PlatformError, Reactor};

fn reaction_type(emoji: &str) -> Result<ReactionType, PlatformError> {
    ReactionType::try_from(emoji).map_err(|_| PlatformError::InvalidEmoji(emoji.to_owned()))
}

fn not_found_or(err: serenity::Error) -> PlatformError {
    match err {
        serenity::Error::Http(HttpError::UnsuccessfulRequest(ref response))
            if response.status_code.as_u16() == 404 =>
        {
            PlatformError::NotFound
        }
        other => PlatformError::Serenity(other),
    }
}

impl DiscordApi for serenity::Context {
    async fn guild_name(&self, guild: GuildId) -> Option<String> {
        if let Some(name) = guild.name(self) {
            return Some(name);
        }

        guild
            .to_partial_guild(self)
            .await
            .ok()
            .map(|guild| guild.name)
    }

    #[instrument(skip(self))]
    async fn resolve_user(&self, guild: GuildId, user: UserId) -> Result<Reactor, PlatformError> {
        match guild.member(self, user).await {
            Ok(member) => Ok(Reactor {
                id: member.user.id,
                name: member.display_name().to_owned(),
            }),
            Err(err) => {
                debug!(%err, "member lookup failed, trying global user");

                let user = user.to_user(self).await.map_err(not_found_or)?;
                Ok(Reactor {
                    id: user.id,
                    name: user.name,
                })
            }
        }
    }

    async fn direct_message(&self, user: UserId, content: String) -> Result<(), PlatformError> {
        let channel = user.create_dm_channel(self).await?;
        channel.id.say(self, content).await?;
        Ok(())
    }

    async fn is_guild_text_channel(&self, guild: GuildId, channel: ChannelId) -> bool {
        let Ok(channel) = channel.to_channel(self).await else {
            return false;
        };

        channel.guild().is_some_and(|channel| {
            channel.guild_id == guild && matches!(channel.kind, ChannelType::Text | ChannelType::News)
        })
    }

    async fn send_message(
        &self,
        channel: ChannelId,
        content: String,
    ) -> Result<MessageId, PlatformError> {
        let message = channel.say(self, content).await.map_err(not_found_or)?;
        Ok(message.id)
    }

    async fn add_reaction(
        &self,
        channel: ChannelId,
        message: MessageId,
        emoji: &str,
    ) -> Result<(), PlatformError> {
        let reaction = reaction_type(emoji)?;
        channel.create_reaction(self, message, reaction).await?;
        Ok(())
    }

    async fn remove_reaction(
        &self,
        channel: ChannelId,
        message: MessageId,
        user: UserId,
        emoji: &str,
    ) -> Result<(), PlatformError> {
        let reaction = reaction_type(emoji)?;
        channel
            .delete_reaction(self, message, Some(user), reaction)
            .await
            .map_err(not_found_or)
    }

    async fn message_author(
        &self,
        channel: ChannelId,
        message: MessageId,
    ) -> Result<UserId, PlatformError> {
        let message = channel.message(self, message).await.map_err(not_found_or)?;
        Ok(message.author.id)
    }

    async fn edit_message(
        &self,
        channel: ChannelId,
        message: MessageId,
        content: String,
    ) -> Result<(), PlatformError> {
        channel
            .edit_message(self, message, EditMessage::new().content(content))
            .await
            .map_err(not_found_or)?;
        Ok(())
    }
}
