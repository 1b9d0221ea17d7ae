use std::collections::BTreeMap;

use poise::serenity_prelude::GuildId;
use tokio::sync::Mutex;
use tracing::{info, instrument};

mod error;
pub use error::StoreError;

mod guild;
pub use guild::{GuildConfig, TriggerBinding};

mod json;
pub use json::JsonFile;

/// Every guild's config, keyed by the guild id as a decimal string.
pub type Guilds = BTreeMap<String, GuildConfig>;

pub trait StoreBackend {
    async fn load(&self) -> Result<Guilds, StoreError>;
    async fn save(&self, guilds: &Guilds) -> Result<(), StoreError>;
}

fn guild_key(guild_id: GuildId) -> String {
    guild_id.to_string()
}

/// Shared guild configs, persisted wholesale after every change.
///
/// All reads and writes go through one lock, so concurrent commands and
/// reactions never interleave a load-mutate-save sequence.
#[derive(Debug)]
pub struct ConfigStore<B = JsonFile> {
    backend: B,
    guilds: Mutex<Guilds>,
}

impl<B: StoreBackend> ConfigStore<B> {
    #[instrument(skip_all)]
    pub async fn open(backend: B) -> Result<Self, StoreError> {
        let guilds = backend.load().await?;
        info!(guilds = guilds.len(), "config store opened");

        Ok(Self {
            backend,
            guilds: Mutex::new(guilds),
        })
    }

    /// Looks up a guild without creating anything.
    pub async fn get(&self, guild_id: GuildId) -> Option<GuildConfig> {
        self.guilds.lock().await.get(&guild_key(guild_id)).cloned()
    }

    /// Returns the guild's config, inserting and saving the default the first time.
    #[instrument(skip(self))]
    pub async fn get_or_create(&self, guild_id: GuildId) -> Result<GuildConfig, StoreError> {
        let mut guilds = self.guilds.lock().await;
        let key = guild_key(guild_id);

        if let Some(config) = guilds.get(&key) {
            return Ok(config.clone());
        }

        let config = GuildConfig::default();
        let mut updated = guilds.clone();
        updated.insert(key, config.clone());

        self.backend.save(&updated).await?;
        *guilds = updated;

        info!("created default config");

        Ok(config)
    }

    /// Applies `mutate` to the guild's config (default if missing) and saves.
    ///
    /// Nothing changes in memory unless the save succeeds.
    #[instrument(skip(self, mutate))]
    pub async fn update<R>(
        &self,
        guild_id: GuildId,
        mutate: impl FnOnce(&mut GuildConfig) -> R,
    ) -> Result<(GuildConfig, R), StoreError> {
        let mut guilds = self.guilds.lock().await;

        let mut updated = guilds.clone();
        let config = updated.entry(guild_key(guild_id)).or_default();
        let output = mutate(config);
        let config = config.clone();

        self.backend.save(&updated).await?;
        *guilds = updated;

        Ok((config, output))
    }
}
