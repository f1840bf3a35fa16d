use crate::domain::models::{
    DisplaySettings, GlobalConfig, HistoryEntry, ServiceItem, SettingsFile,
};
use crate::services::catalog;
use std::path::PathBuf;

pub fn audit(action: &str, data: serde_json::Value) {
    let home = match std::env::var("HOME") {
        Ok(h) => h,
        Err(_) => return,
    };
    let path = PathBuf::from(home).join(".config/calq/audit.jsonl");
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let event = serde_json::json!({
        "ts": chrono::Local::now().to_rfc3339(),
        "action": action,
        "data": data
    });
    let line = format!("{}\n", event);
    let _ = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .and_then(|mut f| std::io::Write::write_all(&mut f, line.as_bytes()));
}

fn config_path() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")?;
    Ok(PathBuf::from(home).join(".config/calq/config.json"))
}

fn services_path() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")?;
    Ok(PathBuf::from(home).join(".config/calq/services.json"))
}

fn history_path() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")?;
    Ok(PathBuf::from(home).join(".config/calq/history.json"))
}

fn write_record<T: serde::Serialize>(path: PathBuf, value: &T) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, serde_json::to_string_pretty(value)?)?;
    Ok(())
}

// Absent or unreadable records are "no persisted data", never an error:
// each loader falls back to its defaults.

pub fn load_config() -> anyhow::Result<GlobalConfig> {
    let p = config_path()?;
    if !p.exists() {
        return Ok(GlobalConfig::default());
    }
    let raw = std::fs::read_to_string(p)?;
    Ok(serde_json::from_str(&raw).unwrap_or_default())
}

pub fn save_config(config: &GlobalConfig) -> anyhow::Result<()> {
    write_record(config_path()?, config)
}

pub fn load_services() -> anyhow::Result<Vec<ServiceItem>> {
    let p = services_path()?;
    if !p.exists() {
        return Ok(catalog::default_catalog());
    }
    let raw = std::fs::read_to_string(p)?;
    Ok(serde_json::from_str(&raw).unwrap_or_else(|_| catalog::default_catalog()))
}

pub fn save_services(services: &[ServiceItem]) -> anyhow::Result<()> {
    write_record(services_path()?, &services)
}

pub fn load_history() -> anyhow::Result<Vec<HistoryEntry>> {
    let p = history_path()?;
    if !p.exists() {
        return Ok(Vec::new());
    }
    let raw = std::fs::read_to_string(p)?;
    Ok(serde_json::from_str(&raw).unwrap_or_default())
}

pub fn save_history(history: &[HistoryEntry]) -> anyhow::Result<()> {
    write_record(history_path()?, &history)
}

pub fn load_settings() -> anyhow::Result<DisplaySettings> {
    let home = std::env::var("HOME")?;
    let path = PathBuf::from(home).join(".config/calq/settings.toml");
    if !path.exists() {
        return Ok(DisplaySettings::default());
    }
    let raw = std::fs::read_to_string(path)?;
    let file: SettingsFile = toml::from_str(&raw)?;
    Ok(file.display)
}
