use poise::serenity_prelude::GuildChannel;
use tracing::instrument;

use super::LogCommands;
use crate::utils::{
    poise::{CommandResult, ContextExt},
    Context,
};

/// Set the moderator log channel for rolls.
#[instrument(skip_all)]
#[poise::command(
    slash_command,
    rename = "set-mod-channel",
    guild_only,
    default_member_permissions = "MANAGE_MESSAGES"
)]
pub async fn set_mod_channel(
    ctx: Context<'_>,
    #[description = "The channel where roll logs should be sent"]
    #[channel_types("Text", "News")]
    channel: GuildChannel,
) -> CommandResult {
    ctx.log_command();
    _set_mod_channel(ctx, channel).await
}

async fn _set_mod_channel(ctx: Context<'_>, channel: GuildChannel) -> CommandResult {
    let guild = ctx.guild_id_or_err()?;
    ctx.require_moderator().await?;

    ctx.store()
        .update(guild, |config| config.set_mod_channel(channel.id))
        .await?;

    ctx.reply_ephemeral(format!("✅ Mod log channel set to <#{}>", channel.id))
        .await?;

    Ok(())
}
