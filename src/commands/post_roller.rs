use poise::serenity_prelude::GuildChannel;
use tracing::instrument;

use super::LogCommands;
use crate::{
    discord::roller::{self, DEFAULT_ROLLER_TEXT},
    utils::{
        poise::{CommandResult, ContextExt},
        Context,
    },
};

/// Post the dice roller message users react to, and add the emoji to it.
#[instrument(skip_all)]
#[poise::command(
    slash_command,
    rename = "post-roller",
    guild_only,
    default_member_permissions = "MANAGE_MESSAGES"
)]
pub async fn post_roller(
    ctx: Context<'_>,
    #[description = "Where to post the roller message"]
    #[channel_types("Text", "News")]
    channel: GuildChannel,
    #[description = "Text to show above the roller"] message: Option<String>,
) -> CommandResult {
    ctx.log_command();
    _post_roller(ctx, channel, message).await
}

async fn _post_roller(
    ctx: Context<'_>,
    channel: GuildChannel,
    message: Option<String>,
) -> CommandResult {
    let guild = ctx.guild_id_or_err()?;
    ctx.require_moderator().await?;

    let text = message.as_deref().unwrap_or(DEFAULT_ROLLER_TEXT);
    let posted =
        roller::post_roller(ctx.serenity_context(), ctx.store(), guild, channel.id, text).await?;

    let mut reply = format!(
        "✅ Roller posted in <#{}> (message id: `{}`)\nUsers must react with {}.",
        posted.binding.channel, posted.binding.message, posted.emoji
    );
    if !posted.reaction_added {
        reply.push_str("\nI couldn't add the reaction myself, so add it by hand.");
    }

    ctx.reply_ephemeral(reply).await?;

    Ok(())
}
