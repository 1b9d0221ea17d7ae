use poise::{serenity_prelude as serenity, BoxFuture, CreateReply, FrameworkError};
use thiserror::Error as ThisError;
use tracing::{error, error_span, warn, Instrument, Level};

use crate::{
    discord::roller::{EditLogError, PostRollerError},
    framework::PoiseData,
    odds::OddsError,
    store::StoreError,
    utils::Context,
};

pub fn handle_framework_error(err: FrameworkError<'_, PoiseData, CommandError>) -> BoxFuture<'_, ()> {
    Box::pin(async move {
        match err {
            FrameworkError::Command { error, ctx, .. } => {
                let command = ctx.invoked_command_name();
                let span = error_span!("", command);

                handle_error(error, ctx).instrument(span).await;
            }
            FrameworkError::Setup { error, .. } => report_setup_failure(&error),
            FrameworkError::GuildOnly { ctx, .. } => {
                handle_error(CommandError::NotInGuild, ctx).await;
            }
            FrameworkError::MissingBotPermissions {
                missing_permissions,
                ctx,
                ..
            } => {
                let command = ctx.invoked_command_name();
                error!(command, %missing_permissions, "bot is missing permissions");
            }
            other => {
                if let Err(err) = poise::builtins::on_error(other).await {
                    error!(%err, "failed to handle framework error");
                }
            }
        }
    })
}

/// A failed setup leaves every later event unhandled.
fn report_setup_failure(err: &CommandError) {
    error!(%err, "framework setup failed, commands and reactions will not be handled");
}

async fn handle_error(err: CommandError, ctx: Context<'_>) {
    err.trace();

    let reply = CreateReply::default().content(err.to_string()).ephemeral(true);
    if let Err(err) = ctx.send(reply).await {
        error!(%err, "failed to send error response");
    }
}

#[derive(Debug, ThisError)]
pub enum CommandError {
    #[error("Use this in a server.")]
    NotInGuild,

    #[error("You need Manage Messages (or Admin) to do this.")]
    MissingCapability,

    #[error("❌ Emoji must be a non-empty string.")]
    BlankEmoji,

    #[error("❌ {0}")]
    Odds(#[from] OddsError),

    #[error("❌ {0}")]
    EditLog(#[from] EditLogError),

    #[error("❌ {0}")]
    PostRoller(#[from] PostRollerError),

    #[error("❌ couldn't save the guild config: {0}")]
    Store(#[from] StoreError),

    #[error("❌ discord error: {0}")]
    Serenity(#[from] serenity::Error),
}

impl CommandError {
    pub fn level(&self) -> Level {
        match self {
            Self::EditLog(err) => err.level(),
            Self::PostRoller(_) | Self::Store(_) | Self::Serenity(_) => Level::ERROR,
            _ => Level::WARN,
        }
    }

    /// Emits the error at its own level.
    pub fn trace(&self) {
        if self.level() == Level::ERROR {
            error!(err = %self, "command failed");
        } else {
            warn!(err = %self, "command rejected");
        }
    }
}
