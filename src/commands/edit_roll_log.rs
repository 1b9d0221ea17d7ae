use tracing::instrument;

use super::LogCommands;
use crate::{
    discord::roller,
    utils::{
        poise::{CommandResult, ContextExt},
        Context,
    },
};

/// Edit a roll log message the bot posted in the mod channel.
#[instrument(skip_all)]
#[poise::command(
    slash_command,
    rename = "edit-roll-log",
    guild_only,
    default_member_permissions = "MANAGE_MESSAGES"
)]
pub async fn edit_roll_log(
    ctx: Context<'_>,
    #[description = "The message ID of the log message"] message_id: String,
    #[description = "What the message should say now"] new_text: String,
) -> CommandResult {
    ctx.log_command();
    _edit_roll_log(ctx, message_id, new_text).await
}

async fn _edit_roll_log(ctx: Context<'_>, message_id: String, new_text: String) -> CommandResult {
    let guild = ctx.guild_id_or_err()?;
    ctx.require_moderator().await?;

    roller::edit_roll_log(
        ctx.serenity_context(),
        ctx.store(),
        guild,
        ctx.framework().bot_id,
        &message_id,
        new_text,
    )
    .await?;

    ctx.reply_ephemeral("✅ Edited the roll log message.").await?;

    Ok(())
}
