use tracing::instrument;

use super::{or_not_set, LogCommands};
use crate::{
    store::GuildConfig,
    utils::{
        poise::{CommandResult, ContextExt},
        Context,
    },
};

/// Show the current odds configuration.
#[instrument(skip_all)]
#[poise::command(slash_command, rename = "show-odds", guild_only)]
pub async fn show_odds(ctx: Context<'_>) -> CommandResult {
    ctx.log_command();
    _show_odds(ctx).await
}

async fn _show_odds(ctx: Context<'_>) -> CommandResult {
    let guild = ctx.guild_id_or_err()?;
    let config = ctx.store().get_or_create(guild).await?;

    ctx.reply_ephemeral(describe(&config)).await?;

    Ok(())
}

fn describe(config: &GuildConfig) -> String {
    let binding = config.trigger_binding();

    format!(
        "**Trigger emoji:** {}\n\
         **Trigger message id:** {}\n\
         **Trigger channel:** {}\n\
         **Mod channel:** {}\n\n\
         **Odds:**\n{}",
        config.trigger_emoji,
        or_not_set(binding.map(|binding| binding.message)),
        or_not_set(binding.map(|binding| format!("<#{}>", binding.channel))),
        or_not_set(config.mod_channel().map(|channel| format!("<#{channel}>"))),
        config.outcomes,
    )
}
