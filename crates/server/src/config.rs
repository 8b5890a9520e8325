use serde::Deserialize;
use std::sync::OnceLock;

static SETTINGS: OnceLock<Settings> = OnceLock::new();

/// Path to the config file, relative to the project root.
const CONFIG_PATH: &str = "config.toml";

/// Server settings, loadable from `config.toml` and overridable with
/// environment variables (`PORT`, `BIND_ADDR`).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Address the fullstack server binds to.
    pub bind_addr: String,
    pub port: u16,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

/// Read `config.toml`, apply env overrides, and store the result in the
/// global `OnceLock`. Safe to call multiple times — only the first call
/// has effect. A missing or unparseable file falls back to defaults.
pub fn load_settings() {
    SETTINGS.get_or_init(|| {
        let mut settings = match std::fs::read_to_string(CONFIG_PATH) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|e| {
                eprintln!("[config] Failed to parse {CONFIG_PATH}: {e} — using defaults");
                Settings::default()
            }),
            Err(_) => Settings::default(),
        };

        if let Ok(addr) = std::env::var("BIND_ADDR") {
            if !addr.is_empty() {
                settings.bind_addr = addr;
            }
        }
        if let Some(port) = std::env::var("PORT").ok().and_then(|p| p.parse().ok()) {
            settings.port = port;
        }

        tracing::info!(bind_addr = %settings.bind_addr, port = settings.port, "server settings loaded");
        settings
    });
}

/// Get the loaded settings. Returns defaults if `load_settings()` hasn't
/// been called yet (safe fallback).
pub fn settings() -> Settings {
    SETTINGS.get().cloned().unwrap_or_default()
}
