//! Rolls for users who react to the roller message.

use poise::serenity_prelude::{self as serenity, ChannelId, GuildId, MessageId, UserId};
use tracing::{debug, error, info, instrument, warn};

use super::{DiscordApi, Reactor};
use crate::{
    odds::roll_d100,
    store::{ConfigStore, StoreBackend, TriggerBinding},
    utils::suppress::Suppress,
};

/// The parts of a reaction-add event the roller looks at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactionEvent {
    pub user: Option<UserId>,
    pub guild: Option<GuildId>,
    pub channel: ChannelId,
    pub message: MessageId,
    /// The emoji as rendered text, e.g. `🎲` or `<:dice:123>`.
    pub emoji: String,
}

impl From<&serenity::Reaction> for ReactionEvent {
    fn from(reaction: &serenity::Reaction) -> Self {
        Self {
            user: reaction.user_id,
            guild: reaction.guild_id,
            channel: reaction.channel_id,
            message: reaction.message_id,
            emoji: reaction.emoji.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ignored {
    OwnReaction,
    NotInGuild,
    NoConfig,
    NoTrigger,
    OtherMessage,
    OtherEmoji,
    InvalidOdds,
    UnknownUser,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roll {
    pub user: UserId,
    pub d100: u8,
    pub outcome: String,
    pub dm_delivered: bool,
    pub logged: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    Ignored(Ignored),
    Rolled(Roll),
}

/// Handles one reaction-add event. Nothing here fails outward: every
/// platform error is either a reason to ignore the event or suppressed.
#[instrument(skip_all, fields(message = %event.message, user = ?event.user))]
pub async fn handle_reaction<B: StoreBackend>(
    api: &impl DiscordApi,
    store: &ConfigStore<B>,
    bot_id: UserId,
    event: &ReactionEvent,
) -> Report {
    let user = match event.user {
        Some(user) if user != bot_id => user,
        _ => return Report::Ignored(Ignored::OwnReaction),
    };

    let Some(guild) = event.guild else {
        return Report::Ignored(Ignored::NotInGuild);
    };

    let Some(config) = store.get(guild).await else {
        return Report::Ignored(Ignored::NoConfig);
    };

    let Some(binding) = config.trigger_binding() else {
        return Report::Ignored(Ignored::NoTrigger);
    };

    if !binding.matches(event.channel, event.message) {
        return Report::Ignored(Ignored::OtherMessage);
    }

    if event.emoji != config.trigger_emoji {
        debug!(emoji = %event.emoji, "reaction with a different emoji");
        return Report::Ignored(Ignored::OtherEmoji);
    }

    if let Err(err) = config.outcomes.validate() {
        error!(%err, %guild, "stored odds are invalid, not rolling");
        return Report::Ignored(Ignored::InvalidOdds);
    }

    let reactor = match api.resolve_user(guild, user).await {
        Ok(reactor) => reactor,
        Err(err) => {
            warn!(%err, "couldn't resolve reacting user");
            return Report::Ignored(Ignored::UnknownUser);
        }
    };

    let d100 = roll_d100();
    let outcome = config.outcomes.draw().to_owned();

    let guild_name = api
        .guild_name(guild)
        .await
        .unwrap_or_else(|| "this server".to_owned());

    let dm_delivered = api
        .direct_message(
            reactor.id,
            dm_text(d100, &outcome, &config.trigger_emoji, &guild_name),
        )
        .await
        .suppress("send roll dm")
        .is_some();

    let mut logged = false;
    if let Some(mod_channel) = config.mod_channel() {
        if api.is_guild_text_channel(guild, mod_channel).await {
            logged = api
                .send_message(
                    mod_channel,
                    log_text(&reactor, d100, &outcome, dm_delivered, binding),
                )
                .await
                .suppress("post roll log")
                .is_some();
        } else {
            debug!(%mod_channel, "mod channel can't be resolved, skipping log");
        }
    }

    api.remove_reaction(binding.channel, binding.message, reactor.id, &event.emoji)
        .await
        .suppress("remove trigger reaction");

    info!(
        user = %reactor.id,
        name = %reactor.name,
        d100,
        %outcome,
        dm_delivered,
        logged,
        "rolled"
    );

    Report::Rolled(Roll {
        user: reactor.id,
        d100,
        outcome,
        dm_delivered,
        logged,
    })
}

fn dm_text(d100: u8, outcome: &str, emoji: &str, guild_name: &str) -> String {
    format!(
        "🎲 **Your roll:** {d100}/100\n\
         ✨ **Outcome:** {outcome}\n\n\
         (Triggered by reacting with {emoji} in **{guild_name}**.)"
    )
}

fn log_text(
    reactor: &Reactor,
    d100: u8,
    outcome: &str,
    dm_delivered: bool,
    binding: TriggerBinding,
) -> String {
    let delivered = if dm_delivered {
        "✅"
    } else {
        "❌ (user has DMs closed?)"
    };

    format!(
        "📋 **Roll Log**\n\
         User: {mention} (`{id}`)\n\
         Roll: **{d100}**/100\n\
         Outcome: **{outcome}**\n\
         DM delivered: {delivered}\n\
         Trigger message: `{message}` in <#{channel}>",
        mention = reactor.mention(),
        id = reactor.id,
        message = binding.message,
        channel = binding.channel,
    )
}
