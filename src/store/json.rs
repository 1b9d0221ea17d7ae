use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use tracing::{debug, instrument, warn};

use super::{Guilds, StoreBackend, StoreError};

/// Whole-document JSON file, replaced atomically on every save.
#[derive(Debug, Clone)]
pub struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(ToOwned::to_owned)
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl StoreBackend for JsonFile {
    #[instrument(skip_all, fields(path = %self.path().display()))]
    async fn load(&self) -> Result<Guilds, StoreError> {
        let bytes = match tokio::fs::read(self.path()).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                warn!("no config store yet, starting empty");
                return Ok(Guilds::new());
            }
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let guilds: Guilds = serde_json::from_slice(&bytes).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })?;

        debug!(guilds = guilds.len(), "loaded config store");

        Ok(guilds)
    }

    #[instrument(skip_all, fields(path = %self.path().display()))]
    async fn save(&self, guilds: &Guilds) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(guilds).map_err(StoreError::Serialize)?;

        let write_err = |source| StoreError::Write {
            path: self.path.clone(),
            source,
        };

        let temp = self.temp_path();
        tokio::fs::write(&temp, bytes).await.map_err(write_err)?;
        tokio::fs::rename(&temp, self.path())
            .await
            .map_err(write_err)?;

        debug!(guilds = guilds.len(), "saved config store");

        Ok(())
    }
}
