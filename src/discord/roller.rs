//! Moderator operations that touch Discord as well as the store.

use poise::serenity_prelude::{ChannelId, GuildId, MessageId, UserId};
use tracing::{info, instrument, Level};

use super::{DiscordApi, PlatformError};
use crate::{
    store::{ConfigStore, StoreBackend, StoreError, TriggerBinding},
    utils::suppress::Suppress,
};

pub const DEFAULT_ROLLER_TEXT: &str = "React to roll!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostedRoller {
    pub binding: TriggerBinding,
    pub emoji: String,
    pub reaction_added: bool,
}

/// Posts the message users react to and makes it the guild's trigger.
#[instrument(skip(api, store, text))]
pub async fn post_roller<B: StoreBackend>(
    api: &impl DiscordApi,
    store: &ConfigStore<B>,
    guild: GuildId,
    channel: ChannelId,
    text: &str,
) -> Result<PostedRoller, PostRollerError> {
    let emoji = store.get_or_create(guild).await?.trigger_emoji;

    let message = api
        .send_message(
            channel,
            format!("{text}\n\nReact with {emoji} to roll a **d100**."),
        )
        .await
        .map_err(PostRollerError::Send)?;

    let reaction_added = api
        .add_reaction(channel, message, &emoji)
        .await
        .suppress("attach roller reaction")
        .is_some();

    let binding = TriggerBinding::new(channel, message);
    store
        .update(guild, |config| config.set_trigger_binding(binding))
        .await?;

    info!(%message, reaction_added, "roller posted");

    Ok(PostedRoller {
        binding,
        emoji,
        reaction_added,
    })
}

#[derive(Debug, thiserror::Error)]
pub enum PostRollerError {
    #[error("couldn't post the roller message: {0}")]
    Send(#[source] PlatformError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Rewrites a roll log the bot posted in the guild's mod channel.
#[instrument(skip(api, store, new_text))]
pub async fn edit_roll_log<B: StoreBackend>(
    api: &impl DiscordApi,
    store: &ConfigStore<B>,
    guild: GuildId,
    bot_id: UserId,
    message_id: &str,
    new_text: String,
) -> Result<(), EditLogError> {
    let config = store.get_or_create(guild).await?;

    let channel = config.mod_channel().ok_or(EditLogError::ModChannelUnset)?;

    if !api.is_guild_text_channel(guild, channel).await {
        return Err(EditLogError::ModChannelNotFound);
    }

    let message = parse_message_id(message_id)?;

    let author = api
        .message_author(channel, message)
        .await
        .map_err(|err| match err {
            PlatformError::NotFound => EditLogError::MessageNotFound,
            other => EditLogError::Platform(other),
        })?;

    if author != bot_id {
        return Err(EditLogError::NotOwnMessage);
    }

    api.edit_message(channel, message, new_text)
        .await
        .map_err(EditLogError::Platform)?;

    info!(%message, "roll log edited");

    Ok(())
}

fn parse_message_id(message_id: &str) -> Result<MessageId, EditLogError> {
    message_id
        .trim()
        .parse::<u64>()
        .ok()
        .filter(|id| *id != 0)
        .map(MessageId::new)
        .ok_or(EditLogError::InvalidMessageId)
}

#[derive(Debug, thiserror::Error)]
pub enum EditLogError {
    #[error("Mod channel is not set. Use /set-mod-channel.")]
    ModChannelUnset,

    #[error("Mod channel not found.")]
    ModChannelNotFound,

    #[error("message_id must be a number.")]
    InvalidMessageId,

    #[error("That message ID wasn't found in the mod channel.")]
    MessageNotFound,

    #[error("I can only edit my own log messages.")]
    NotOwnMessage,

    #[error("couldn't edit the message: {0}")]
    Platform(#[source] PlatformError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl EditLogError {
    pub fn level(&self) -> Level {
        match self {
            Self::Platform(_) | Self::Store(_) => Level::ERROR,
            _ => Level::WARN,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tracing_test::traced_test;

    use super::*;
    use crate::{
        discord::mock::{Call, MockDiscord},
        store::{tests::MemoryBackend, GuildConfig, Guilds},
    };

    const BOT: UserId = UserId::new(1);
    const SOMEONE: UserId = UserId::new(2);
    const GUILD: GuildId = GuildId::new(10);
    const ROLLER_CHANNEL: ChannelId = ChannelId::new(20);
    const MOD_CHANNEL: ChannelId = ChannelId::new(40);
    const BOT_LOG: MessageId = MessageId::new(41);
    const USER_MESSAGE: MessageId = MessageId::new(42);

    async fn store_with(config: Option<GuildConfig>) -> (ConfigStore<MemoryBackend>, MemoryBackend) {
        let mut initial = Guilds::new();
        if let Some(config) = config {
            initial.insert(GUILD.to_string(), config);
        }

        let backend = MemoryBackend {
            initial,
            ..Default::default()
        };
        let store = ConfigStore::open(backend.clone()).await.unwrap();
        (store, backend)
    }

    fn with_mod_channel() -> GuildConfig {
        let mut config = GuildConfig::default();
        config.set_mod_channel(MOD_CHANNEL);
        config
    }

    fn mod_mock() -> MockDiscord {
        MockDiscord {
            text_channels: vec![(GUILD, MOD_CHANNEL)],
            messages: vec![(MOD_CHANNEL, BOT_LOG, BOT), (MOD_CHANNEL, USER_MESSAGE, SOMEONE)],
            ..Default::default()
        }
    }

    #[tokio::test]
    #[traced_test]
    async fn posting_binds_the_trigger() {
        let api = MockDiscord::default();
        let (store, backend) = store_with(None).await;

        let posted = post_roller(&api, &store, GUILD, ROLLER_CHANNEL, DEFAULT_ROLLER_TEXT)
            .await
            .unwrap();

        let message = MessageId::new(MockDiscord::FIRST_MESSAGE);
        assert_eq!(
            posted,
            PostedRoller {
                binding: TriggerBinding::new(ROLLER_CHANNEL, message),
                emoji: "🎲".to_owned(),
                reaction_added: true,
            }
        );

        assert_eq!(
            api.calls(),
            vec![
                Call::SendMessage {
                    channel: ROLLER_CHANNEL,
                    content: "React to roll!\n\nReact with 🎲 to roll a **d100**.".to_owned(),
                },
                Call::AddReaction {
                    channel: ROLLER_CHANNEL,
                    message,
                    emoji: "🎲".to_owned(),
                },
            ]
        );

        let stored = store.get(GUILD).await.unwrap();
        assert_eq!(stored.trigger_binding(), Some(posted.binding));
        assert_eq!(backend.saved().unwrap()[&GUILD.to_string()], stored);
    }

    #[tokio::test]
    async fn failed_reaction_does_not_abort_posting() {
        let api = MockDiscord {
            reactions_forbidden: true,
            ..Default::default()
        };
        let (store, _) = store_with(None).await;

        let posted = post_roller(&api, &store, GUILD, ROLLER_CHANNEL, "roll for powers")
            .await
            .unwrap();

        assert!(!posted.reaction_added);
        assert_eq!(
            store.get(GUILD).await.unwrap().trigger_binding(),
            Some(posted.binding)
        );
    }

    #[tokio::test]
    async fn edits_own_log() {
        let api = mod_mock();
        let (store, _) = store_with(Some(with_mod_channel())).await;

        edit_roll_log(&api, &store, GUILD, BOT, "41", "corrected".to_owned())
            .await
            .unwrap();

        assert_eq!(
            api.calls(),
            vec![Call::EditMessage {
                channel: MOD_CHANNEL,
                message: BOT_LOG,
                content: "corrected".to_owned(),
            }]
        );
    }

    #[tokio::test]
    async fn refuses_other_authors() {
        let api = mod_mock();
        let (store, _) = store_with(Some(with_mod_channel())).await;

        let result = edit_roll_log(&api, &store, GUILD, BOT, "42", "hijacked".to_owned()).await;

        assert!(matches!(result, Err(EditLogError::NotOwnMessage)));
        assert_eq!(api.calls(), vec![]);
    }

    #[tokio::test]
    async fn rejects_bad_inputs() {
        let api = mod_mock();

        let (unset, _) = store_with(None).await;
        assert!(matches!(
            edit_roll_log(&api, &unset, GUILD, BOT, "41", String::new()).await,
            Err(EditLogError::ModChannelUnset)
        ));

        let (store, _) = store_with(Some(with_mod_channel())).await;
        assert!(matches!(
            edit_roll_log(&api, &store, GUILD, BOT, "forty-one", String::new()).await,
            Err(EditLogError::InvalidMessageId)
        ));
        assert!(matches!(
            edit_roll_log(&api, &store, GUILD, BOT, "43", String::new()).await,
            Err(EditLogError::MessageNotFound)
        ));

        let missing_channel = MockDiscord::default();
        assert!(matches!(
            edit_roll_log(&missing_channel, &store, GUILD, BOT, "41", String::new()).await,
            Err(EditLogError::ModChannelNotFound)
        ));

        assert_eq!(api.calls(), vec![]);
    }

    #[test]
    fn message_ids_must_be_positive_integers() {
        assert_eq!(parse_message_id(" 123 ").unwrap(), MessageId::new(123));
        assert!(parse_message_id("0").is_err());
        assert!(parse_message_id("-5").is_err());
        assert!(parse_message_id("").is_err());
    }
}
