mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::Path;

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    validate_config(&config)?;

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    let default_paths = [
        "./folio.toml",
        "./config.toml",
        "~/.config/folio/config.toml",
        "/etc/folio/config.toml",
    ];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            return load_config(path);
        }
    }

    Ok(Config::default())
}

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    if config.server.port == 0 {
        anyhow::bail!("Server port cannot be 0");
    }

    let prefix = &config.media.route_prefix;
    if !prefix.starts_with('/') || prefix.len() < 2 || prefix.ends_with('/') {
        anyhow::bail!(
            "Media route prefix must start with '/' and not end with one: {:?}",
            prefix
        );
    }

    if let Some(roots) = &config.media.roots {
        if roots.is_empty() {
            anyhow::bail!("media.roots is set but lists no roots");
        }
        for root in roots {
            if !root.path.exists() {
                tracing::warn!("Media root does not exist: {:?}", root.path);
            }
        }
    }

    if let Some(dir) = &config.media.working_dir {
        if !dir.is_dir() {
            tracing::warn!("Media working dir is not a directory: {:?}", dir);
        }
    }

    if let Some(dir) = &config.server.static_dir {
        if !dir.exists() {
            tracing::warn!("Static dir does not exist: {:?}", dir);
        }
    }

    Ok(())
}
