use tracing::instrument;

use super::LogCommands;
use crate::{
    errors::CommandError,
    utils::{
        poise::{CommandResult, ContextExt},
        Context,
    },
};

/// Set the emoji used to trigger the roll reaction.
#[instrument(skip_all)]
#[poise::command(
    slash_command,
    rename = "set-emoji",
    guild_only,
    default_member_permissions = "MANAGE_MESSAGES"
)]
pub async fn set_emoji(
    ctx: Context<'_>,
    #[description = "Emoji users react with (e.g. 🎲)"] emoji: String,
) -> CommandResult {
    ctx.log_command();
    _set_emoji(ctx, emoji).await
}

async fn _set_emoji(ctx: Context<'_>, emoji: String) -> CommandResult {
    let guild = ctx.guild_id_or_err()?;
    ctx.require_moderator().await?;

    let emoji = trigger_emoji(&emoji)?;

    ctx.store()
        .update(guild, |config| config.trigger_emoji = emoji.clone())
        .await?;

    ctx.reply_ephemeral(format!("✅ Trigger emoji set to: {emoji}"))
        .await?;

    Ok(())
}

fn trigger_emoji(input: &str) -> Result<String, CommandError> {
    let emoji = input.trim();

    if emoji.is_empty() {
        Err(CommandError::BlankEmoji)
    } else {
        Ok(emoji.to_owned())
    }
}
