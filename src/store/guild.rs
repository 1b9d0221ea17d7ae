use poise::serenity_prelude::{ChannelId, MessageId};
use serde::{Deserialize, Serialize};

use crate::odds::Outcomes;

pub const DEFAULT_EMOJI: &str = "🎲";

/// Per-guild roller settings, stored with raw integer ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuildConfig {
    pub trigger_emoji: String,
    pub trigger_message_id: Option<u64>,
    pub trigger_channel_id: Option<u64>,
    pub mod_channel_id: Option<u64>,
    pub outcomes: Outcomes,
}

impl Default for GuildConfig {
    fn default() -> Self {
        Self {
            trigger_emoji: DEFAULT_EMOJI.to_owned(),
            trigger_message_id: None,
            trigger_channel_id: None,
            mod_channel_id: None,
            outcomes: Outcomes::default(),
        }
    }
}

impl GuildConfig {
    /// The message users react to, if both halves of it are set.
    pub fn trigger_binding(&self) -> Option<TriggerBinding> {
        let channel = non_zero(self.trigger_channel_id)?;
        let message = non_zero(self.trigger_message_id)?;

        Some(TriggerBinding {
            channel: ChannelId::new(channel),
            message: MessageId::new(message),
        })
    }

    pub fn set_trigger_binding(&mut self, binding: TriggerBinding) {
        self.trigger_channel_id = Some(binding.channel.get());
        self.trigger_message_id = Some(binding.message.get());
    }

    pub fn mod_channel(&self) -> Option<ChannelId> {
        non_zero(self.mod_channel_id).map(ChannelId::new)
    }

    pub fn set_mod_channel(&mut self, channel: ChannelId) {
        self.mod_channel_id = Some(channel.get());
    }
}

// discord ids are never zero, and serenity panics on them
fn non_zero(id: Option<u64>) -> Option<u64> {
    id.filter(|id| *id != 0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerBinding {
    pub channel: ChannelId,
    pub message: MessageId,
}

impl TriggerBinding {
    pub fn new(channel: ChannelId, message: MessageId) -> Self {
        Self { channel, message }
    }

    pub fn matches(&self, channel: ChannelId, message: MessageId) -> bool {
        self.channel == channel && self.message == message
    }
}
