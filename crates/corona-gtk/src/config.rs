use crate::events::AppEvent;
use crate::gui::resources::HexColor;
use async_channel::Sender;
use corona::{SelectionItem, Settings};
use directories::ProjectDirs;
use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use palette::Srgba;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Requested side of the square drawing area.
    pub size: i32,
    pub padding: f64,
    /// Sector color used when an option's color does not parse.
    pub fallback_color: HexColor,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            size: 360,
            padding: 16.0,
            fallback_color: HexColor(Srgba::new(0.62, 0.62, 0.62, 1.0)),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub options: Vec<SelectionItem>,
    pub selector: Settings,
    pub window: WindowConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            options: demo_options(),
            selector: Settings::default(),
            window: WindowConfig::default(),
        }
    }
}

pub fn demo_options() -> Vec<SelectionItem> {
    vec![
        SelectionItem::new("audio-x-generic", "#e91e63"),
        SelectionItem::new("camera-photo", "#3f51b5"),
        SelectionItem::new("mail-unread", "#009688"),
        SelectionItem::new("weather-clear", "#ffc107"),
        SelectionItem::new("emblem-favorite", "#795548"),
    ]
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Notify error: {0}")]
    Notify(#[from] notify::Error),
    #[error("Config directory error: {0}")]
    Io(#[from] std::io::Error),
}

pub fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("org", "corona", "corona")
}

pub fn get_config_path() -> Result<std::path::PathBuf, ConfigError> {
    let proj_dirs = project_dirs().ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

pub fn load_config() -> Result<Config, ConfigError> {
    let config_path = get_config_path()?;

    let s = config::Config::builder()
        .add_source(config::File::from(config_path).required(false))
        .add_source(config::Environment::with_prefix("CORONA").separator("__"))
        .build()?;

    Ok(s.try_deserialize()?)
}

pub fn load_or_default() -> Config {
    match load_config() {
        Ok(c) => c,
        Err(e) => {
            log::error!("Falling back to default config: {}", e);
            Config::default()
        }
    }
}

pub fn write_default_config() -> std::io::Result<std::path::PathBuf> {
    let path =
        get_config_path().map_err(|e| std::io::Error::new(std::io::ErrorKind::NotFound, e))?;
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(&path, DEFAULT_CONFIG)?;
    }
    Ok(path)
}

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

/// Editors tend to fire several events per save; they are folded into one reload.
const RELOAD_SETTLE: Duration = Duration::from_millis(150);

fn is_config_change(event: &notify::Event, config_path: &Path) -> bool {
    matches!(
        event.kind,
        EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
    ) && event.paths.iter().any(|p| p == config_path)
}

/// Watches the config directory and forwards every successfully parsed
/// config. A file that fails to parse is logged and the previous options stay.
pub async fn watch_config(tx: Sender<AppEvent>) -> Result<(), ConfigError> {
    let config_path = get_config_path()?;
    let config_dir = config_path
        .parent()
        .ok_or(ConfigError::ConfigDirNotFound)?
        .to_path_buf();
    fs_err::create_dir_all(&config_dir)?;

    let (change_tx, change_rx) = async_channel::unbounded();
    let mut watcher = RecommendedWatcher::new(
        move |res: notify::Result<notify::Event>| match res {
            Ok(event) if is_config_change(&event, &config_path) => {
                let _ = change_tx.send_blocking(());
            }
            Ok(_) => {}
            Err(e) => log::warn!("Config watch error: {}", e),
        },
        notify::Config::default(),
    )?;
    watcher.watch(&config_dir, RecursiveMode::NonRecursive)?;
    log::debug!("Watching {} for option changes", config_dir.display());

    while change_rx.recv().await.is_ok() {
        tokio::time::sleep(RELOAD_SETTLE).await;
        while change_rx.try_recv().is_ok() {}

        let config = match tokio::task::spawn_blocking(load_config).await {
            Ok(Ok(config)) => config,
            Ok(Err(e)) => {
                log::error!("Ignoring config change: {}", e);
                continue;
            }
            Err(e) => {
                log::error!("Config loader failed: {}", e);
                continue;
            }
        };
        if tx.send(AppEvent::ConfigReload(Box::new(config))).await.is_err() {
            break;
        }
    }
    Ok(())
}
