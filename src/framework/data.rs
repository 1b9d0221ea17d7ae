use crate::store::ConfigStore;

use super::Config;

/// Shared state handed to every command and event.
#[derive(Debug)]
pub struct PoiseData {
    pub(crate) config: Config,
    pub(crate) store: ConfigStore,
}

impl PoiseData {
    pub(crate) fn new(config: Config, store: ConfigStore) -> Self {
        Self { config, store }
    }

    pub(crate) const fn config(&self) -> &Config {
        &self.config
    }
}
