use std::path::PathBuf;

use ::config as config_rs;
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

use super::defaults;

pub trait EnvConfig: Sized + DeserializeOwned {
    /// Variable naming an alternative env file.
    const ENV_FILE_VAR: &'static str = "ENV_FILE";

    /// Loads the env file into the process environment. Variables that are
    /// already set keep their values. A missing or unreadable file is an error.
    fn load_dotenv() -> Result<PathBuf> {
        let path = std::env::var(Self::ENV_FILE_VAR)
            .unwrap_or_else(|_| defaults::DEFAULT_ENV_FILE.to_string());
        dotenvy::from_filename(&path).with_context(|| format!("could not load env file {path}"))
    }

    fn validate(&self) -> Result<()> {
        Ok(())
    }

    fn from_source(source: config_rs::Environment) -> Result<Self> {
        let settings = config_rs::Config::builder()
            .add_source(source.try_parsing(true).ignore_empty(true))
            .build()
            .context("failed to read environment variables for config")?;

        let cfg = settings
            .try_deserialize::<Self>()
            .context("failed to deserialize environment into config")?;

        cfg.validate()?;
        Ok(cfg)
    }

    fn from_env() -> Result<Self> {
        Self::load_dotenv()?;
        Self::from_source(config_rs::Environment::default())
    }
}
