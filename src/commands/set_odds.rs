use poise::serenity_prelude::GuildId;
use tracing::{info, instrument};

use super::LogCommands;
use crate::{
    errors::CommandError,
    odds::Outcomes,
    store::{ConfigStore, StoreBackend},
    utils::{
        poise::{CommandResult, ContextExt},
        Context,
    },
};

/// Set the weighted outcome percentages (must total 100).
#[instrument(skip_all)]
#[poise::command(
    slash_command,
    rename = "set-odds",
    guild_only,
    default_member_permissions = "MANAGE_MESSAGES"
)]
pub async fn set_odds(
    ctx: Context<'_>,
    #[description = "name=weight; name=weight; ... (e.g. powers, curse=25; powers, blessing=25; no powers=50)"]
    odds: String,
) -> CommandResult {
    ctx.log_command();
    _set_odds(ctx, odds).await
}

async fn _set_odds(ctx: Context<'_>, odds: String) -> CommandResult {
    let guild = ctx.guild_id_or_err()?;
    ctx.require_moderator().await?;

    let outcomes = replace_odds(ctx.store(), guild, &odds).await?;

    ctx.reply_ephemeral(format!("✅ Odds updated:\n{outcomes}"))
        .await?;

    Ok(())
}

/// Parses `odds` and stores it as the guild's table. Nothing is saved unless it is valid.
async fn replace_odds<B: StoreBackend>(
    store: &ConfigStore<B>,
    guild: GuildId,
    odds: &str,
) -> Result<Outcomes, CommandError> {
    let outcomes = Outcomes::parse(odds)?;

    let (config, ()) = store
        .update(guild, |config| config.outcomes = outcomes)
        .await?;

    info!(%guild, "odds updated");

    Ok(config.outcomes)
}
