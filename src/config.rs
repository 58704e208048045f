use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ParcelstockConfig {
    pub database: Option<String>,
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("parcelstock.toml")
}

pub fn default_database_path() -> PathBuf {
    PathBuf::from("parcelstock.db")
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Option<ParcelstockConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: ParcelstockConfig = toml::from_str(&contents)?;
    Ok(Some(config))
}

pub fn write_config(path: &Path, config: &ParcelstockConfig, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!("config already exists at {} (use --force to overwrite)", path.display());
    }

    let contents = toml::to_string_pretty(config)?;
    std::fs::write(path, contents)?;
    Ok(())
}

/// Pick the database path: explicit flag, then config file, then default
pub fn resolve_database(flag: Option<PathBuf>, config: Option<&ParcelstockConfig>) -> PathBuf {
    flag.or_else(|| config.and_then(|c| c.database.as_ref()).map(PathBuf::from))
        .unwrap_or_else(default_database_path)
}

pub fn ensure_db_dir(db_path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
