use log::{error, Level};
use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::effects::pointer_tint::PointerTint;
use crate::nav::mega_menu::{MenuLayoutConfig, MenuSection};
use crate::reveal::controller::RevealConfig;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub brand: String,
    /// Defaults for every `<Reveal>` that does not override them.
    pub reveal: RevealConfig,
    pub menu: MenuLayoutConfig,
    pub sections: Vec<MenuSection>,
    pub tint: PointerTint,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand: "Stackyon".to_string(),
            reveal: RevealConfig::default(),
            menu: MenuLayoutConfig::default(),
            sections: Vec::new(),
            tint: PointerTint::default(),
        }
    }
}

impl SiteConfig {
    /// A broken config must not take the site down, so parse errors fall
    /// back to the defaults.
    pub fn parse(raw: &str) -> Self {
        match serde_json::from_str(raw) {
            Ok(config) => config,
            Err(e) => {
                error!("invalid site config, using defaults: {}", e);
                Self::default()
            }
        }
    }
}

static SITE: Lazy<SiteConfig> = Lazy::new(|| SiteConfig::parse(include_str!("../site.json")));

pub fn site() -> &'static SiteConfig {
    &SITE
}
