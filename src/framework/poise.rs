use poise::serenity_prelude::ChannelId;
use tracing::{info, trace};

use crate::{
    commands,
    discord::DiscordApi,
    errors::{self, CommandError},
    utils::suppress::Suppress,
};

use super::{data::PoiseData, event_handler};

pub fn build(data: PoiseData) -> poise::Framework<PoiseData, CommandError> {
    poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: commands::list(),
            on_error: errors::handle_framework_error,
            event_handler: event_handler::poise,
            ..Default::default()
        })
        .setup(|ctx, _ready, framework| {
            Box::pin(async move {
                let commands = framework.options().commands.as_ref();
                let bot = &data.config().bot;

                if let Some(guild_id) = bot.testing_server() {
                    poise::builtins::register_in_guild(&ctx.http, commands, guild_id).await?;
                    info!(%guild_id, "registered commands in testing server");
                } else {
                    poise::builtins::register_globally(&ctx.http, commands).await?;
                    info!("registered commands globally");
                }

                ctx.set_activity(bot.activity());

                trace!("finished setup, accepting commands");

                if let Some(status_channel) = bot.status_channel() {
                    announce_ready(ctx, status_channel).await;
                }

                Ok(data)
            })
        })
        .build()
}

/// Says "ready!" in the status channel. Failing to do so never stops startup.
async fn announce_ready(api: &impl DiscordApi, channel: ChannelId) -> bool {
    api.send_message(channel, "ready!".to_owned())
        .await
        .suppress("post ready message")
        .is_some()
}
