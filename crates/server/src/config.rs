use std::{fs, path::PathBuf};

use anyhow::{bail, Context};
use serde::Deserialize;
use shared::domain::DEFAULT_BOARD_SIZE;
use tracing::warn;

const SETTINGS_FILE: &str = "server.toml";
const MAX_BOARD_SIZE: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub server_bind: String,
    pub static_dir: PathBuf,
    pub reset_on_fetch: bool,
    pub board_size: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_bind: "127.0.0.1:8000".into(),
            static_dir: PathBuf::from("static"),
            reset_on_fetch: true,
            board_size: DEFAULT_BOARD_SIZE,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    bind_addr: Option<String>,
    static_dir: Option<PathBuf>,
    reset_on_fetch: Option<bool>,
    board_size: Option<usize>,
}

pub fn load_settings() -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    match fs::read_to_string(SETTINGS_FILE) {
        Ok(raw) => apply_file_settings(&mut settings, &raw)
            .with_context(|| format!("failed to parse {SETTINGS_FILE}"))?,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
        Err(err) => {
            warn!(%err, file = SETTINGS_FILE, "could not read settings file; using defaults")
        }
    }

    apply_env_settings(&mut settings, |name| std::env::var(name).ok())?;
    validate(&settings)?;
    Ok(settings)
}

fn apply_file_settings(settings: &mut Settings, raw: &str) -> anyhow::Result<()> {
    let file_cfg: FileSettings = toml::from_str(raw)?;
    if let Some(v) = file_cfg.bind_addr {
        settings.server_bind = v;
    }
    if let Some(v) = file_cfg.static_dir {
        settings.static_dir = v;
    }
    if let Some(v) = file_cfg.reset_on_fetch {
        settings.reset_on_fetch = v;
    }
    if let Some(v) = file_cfg.board_size {
        settings.board_size = v;
    }
    Ok(())
}

fn apply_env_settings(
    settings: &mut Settings,
    lookup: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<()> {
    if let Some(v) = lookup("SERVER_BIND") {
        settings.server_bind = v;
    }
    if let Some(v) = lookup("APP__BIND_ADDR") {
        settings.server_bind = v;
    }

    if let Some(v) = lookup("APP__STATIC_DIR") {
        settings.static_dir = PathBuf::from(v);
    }

    if let Some(v) = lookup("APP__RESET_ON_FETCH") {
        settings.reset_on_fetch = parse_bool(&v)
            .with_context(|| format!("APP__RESET_ON_FETCH must be a boolean, got '{v}'"))?;
    }

    if let Some(v) = lookup("APP__BOARD_SIZE") {
        settings.board_size = v
            .trim()
            .parse()
            .with_context(|| format!("APP__BOARD_SIZE must be a number, got '{v}'"))?;
    }

    Ok(())
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn validate(settings: &Settings) -> anyhow::Result<()> {
    if settings.board_size == 0 || settings.board_size > MAX_BOARD_SIZE {
        bail!(
            "board_size must be between 1 and {MAX_BOARD_SIZE}, got {}",
            settings.board_size
        );
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
