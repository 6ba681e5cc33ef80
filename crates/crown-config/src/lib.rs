use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use self::catalog::CatalogConfig;
use self::menu::MenuConfig;

pub mod catalog;
pub mod menu;

fn default_public_dir() -> String {
    "public".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub menu: MenuConfig,
    pub catalog: CatalogConfig,
    /// Directory the site serves static assets from
    #[serde(default = "default_public_dir")]
    pub public_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            menu: MenuConfig::default(),
            catalog: CatalogConfig::default(),
            public_dir: default_public_dir(),
        }
    }
}

impl Config {
    /// Built-in defaults with environment overrides applied
    pub fn new() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    /// Load a JSON config file; missing fields fall back to defaults
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        tracing::info!("Loading config from {}", path.display());
        let file = File::open(path)
            .with_context(|| format!("failed to open config file {}", path.display()))?;
        let reader = BufReader::new(file);
        let mut config: Config = serde_json::from_reader(reader)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        config.apply_env();
        Ok(config)
    }

    fn apply_env(&mut self) {
        if let Ok(path) = env::var("CROWN_MENU_PATH") {
            tracing::debug!("CROWN_MENU_PATH overrides menu path: {path}");
            self.menu.path = path;
        }

        if let Ok(dir) = env::var("CROWN_PUBLIC_DIR") {
            tracing::debug!("CROWN_PUBLIC_DIR overrides public dir: {dir}");
            self.public_dir = dir;
        }
    }
}
