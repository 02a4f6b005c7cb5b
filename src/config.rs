use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tokio::fs;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Dataset used when none is given on the command line.
    #[serde(default)]
    pub data: Option<PathBuf>,
}

impl Config {
    pub async fn load() -> Result<Self, anywho::Error> {
        let Some(path) = config_path() else {
            log::warn!("No configuration directory available");
            return Ok(Self::default());
        };

        if !fs::try_exists(&path).await? {
            return Ok(Self::default());
        }

        log::info!("Loading configuration: {}", path.display());

        Self::parse(&fs::read_to_string(&path).await?)
    }

    pub fn parse(contents: &str) -> Result<Self, anywho::Error> {
        Ok(ron::from_str(contents)?)
    }
}

fn config_path() -> Option<PathBuf> {
    Some(dirs::config_dir()?.join("animepower").join("config.ron"))
}
