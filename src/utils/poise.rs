use poise::{
    serenity_prelude::{self as serenity, GuildId, Permissions},
    CreateReply,
};

use crate::{errors::CommandError, framework::PoiseData, store::ConfigStore};

pub type Context<'a> = poise::Context<'a, PoiseData, CommandError>;

pub type Command = poise::Command<PoiseData, CommandError>;
pub type CommandResult = Result<(), CommandError>;

/// Whether a resolved permission set may change the roller's configuration.
pub fn is_moderator(permissions: Permissions) -> bool {
    permissions.contains(Permissions::ADMINISTRATOR)
        || permissions.contains(Permissions::MANAGE_MESSAGES)
}

pub trait ContextExt {
    async fn reply_ephemeral(
        &self,
        text: impl Into<String>,
    ) -> Result<poise::ReplyHandle<'_>, serenity::Error>;

    fn guild_id_or_err(&self) -> Result<GuildId, CommandError>;

    /// Fails unless the caller holds Manage Messages or Administrator.
    async fn require_moderator(&self) -> Result<(), CommandError>;

    fn store(&self) -> &ConfigStore;
}

impl ContextExt for Context<'_> {
    async fn reply_ephemeral(
        &self,
        text: impl Into<String>,
    ) -> Result<poise::ReplyHandle<'_>, serenity::Error> {
        let builder = CreateReply::default().ephemeral(true).content(text);
        self.send(builder).await
    }

    fn guild_id_or_err(&self) -> Result<GuildId, CommandError> {
        self.guild_id().ok_or(CommandError::NotInGuild)
    }

    async fn require_moderator(&self) -> Result<(), CommandError> {
        let permissions = self
            .author_member()
            .await
            .and_then(|member| member.permissions);

        match permissions {
            Some(permissions) if is_moderator(permissions) => Ok(()),
            _ => Err(CommandError::MissingCapability),
        }
    }

    fn store(&self) -> &ConfigStore {
        &self.data().store
    }
}

#[cfg(test)]
mod tests {
    use poise::serenity_prelude::Permissions;

    use super::is_moderator;

    #[test]
    fn moderators_need_manage_messages_or_admin() {
        assert!(is_moderator(Permissions::MANAGE_MESSAGES));
        assert!(is_moderator(Permissions::ADMINISTRATOR));
        assert!(is_moderator(
            Permissions::SEND_MESSAGES | Permissions::MANAGE_MESSAGES
        ));

        assert!(!is_moderator(Permissions::empty()));
        assert!(!is_moderator(
            Permissions::SEND_MESSAGES | Permissions::ADD_REACTIONS | Permissions::MANAGE_CHANNELS
        ));
    }
}
