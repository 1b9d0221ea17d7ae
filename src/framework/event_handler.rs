use std::{future::Future, pin::Pin};

use poise::{
    serenity_prelude::{self as serenity, FullEvent},
    FrameworkContext,
};
use tracing::{info, trace};

use super::PoiseData;
use crate::{
    discord::trigger::{self, ReactionEvent},
    errors::CommandError,
};

async fn event_handler(
    serenity_ctx: &serenity::Context,
    event: &FullEvent,
    framework_ctx: FrameworkContext<'_, PoiseData, CommandError>,
    data: &PoiseData,
) -> Result<(), CommandError> {
    match event {
        FullEvent::Ready { data_about_bot } => {
            info!(user = %data_about_bot.user.name, "connected to gateway");
        }
        FullEvent::ReactionAdd {
            add_reaction: reaction,
        } => {
            trace!(message = %reaction.message_id, "reaction captured");

            let event = ReactionEvent::from(reaction);
            trigger::handle_reaction(serenity_ctx, &data.store, framework_ctx.bot_id, &event)
                .await;
        }
        _ => (),
    }

    Ok(())
}

pub fn poise<'a>(
    serenity_ctx: &'a serenity::Context,
    event: &'a FullEvent,
    framework_ctx: FrameworkContext<'a, PoiseData, CommandError>,
    data: &'a PoiseData,
) -> Pin<Box<dyn Future<Output = Result<(), CommandError>> + Send + 'a>> {
    Box::pin(event_handler(serenity_ctx, event, framework_ctx, data))
}
