use adw::Application;
use directories::ProjectDirs;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::bank::models::DashboardVariant;
use crate::error::{AppError, Result};
use crate::notify::Notice;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Delay before the assistant answers, in milliseconds.
    pub reply_delay_ms: u64,
    pub toast_timeout_secs: u32,
    pub avatar_endpoint: String,
    pub avatar_format: String,
    pub load_avatars: bool,
    pub prefer_dark: bool,
    pub default_variant: DashboardVariant,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: 1000,
            toast_timeout_secs: 3,
            avatar_endpoint: "https://api.dicebear.com/7.x/initials".into(),
            avatar_format: "png".into(),
            load_avatars: true,
            prefer_dark: true,
            default_variant: DashboardVariant::Overview,
        }
    }
}

impl AppConfig {
    fn path() -> Option<PathBuf> {
        let proj = ProjectDirs::from("com", "alltius", "AlltiusDashboard")?;
        Some(proj.config_dir().join("alltius.toml"))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Reads the user's config. A missing file is created with defaults;
    /// a broken one is left alone and defaults are used.
    pub fn load() -> Self {
        let Some(path) = Self::path() else {
            warn!("{}", AppError::NoConfigDir);
            return Self::default();
        };
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(AppError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                let config = Self::default();
                match config.save_to(&path) {
                    Ok(()) => info!("wrote default config to {}", path.display()),
                    Err(e) => warn!("could not write default config: {e}"),
                }
                config
            }
            Err(e) => {
                warn!("ignoring {}: {e}", path.display());
                Self::default()
            }
        }
    }
}

/// Top-level screens. Each one owns its own window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Dashboard,
}

pub fn navigate(app: &Application, route: Route, config: &AppConfig, notice: Option<Notice>) {
    info!("navigating to {route:?}");
    match route {
        Route::Login => crate::ui::login::show_login_window(app, config),
        Route::Dashboard => crate::ui::dashboard::show_dashboard_window(app, config, notice),
    }
}

pub fn build_ui(app: &Application) {
    let config = AppConfig::load();
    crate::ui::style::install(config.prefer_dark);
    navigate(app, Route::Login, &config, None);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config: AppConfig =
            toml::from_str("reply_delay_ms = 250\ndefault_variant = \"spending\"").unwrap();
        assert_eq!(config.reply_delay_ms, 250);
        assert_eq!(config.default_variant, DashboardVariant::Spending);
        assert!(config.load_avatars);
        assert_eq!(config.avatar_format, "png");
    }

    #[test]
    fn unknown_variant_is_rejected() {
        assert!(toml::from_str::<AppConfig>("default_variant = \"casino\"").is_err());
    }

    #[test]
    fn save_then_load_from_disk() {
        let dir = std::env::temp_dir().join(format!("alltius-config-{}", std::process::id()));
        let path = dir.join("alltius.toml");
        let config = AppConfig { reply_delay_ms: 10, load_avatars: false, ..AppConfig::default() };
        config.save_to(&path).unwrap();
        assert_eq!(AppConfig::load_from(&path).unwrap(), config);
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let path = std::env::temp_dir().join("alltius-does-not-exist/alltius.toml");
        assert!(matches!(AppConfig::load_from(&path), Err(AppError::Io(_))));
    }
}
