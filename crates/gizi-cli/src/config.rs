use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Current config version. Bump this when the shape changes in a way serde
/// defaults cannot absorb.
pub const CURRENT_VERSION: u32 = 1;

/// Environment variable naming a config file, checked after `--config`.
pub const CONFIG_ENV: &str = "GIZI_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GiziConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    /// Directory holding the reference table files. `None` uses the
    /// built-in sample rows.
    #[serde(default)]
    pub reference_dir: Option<PathBuf>,
    /// Emit logs as JSON lines instead of human-readable text.
    #[serde(default)]
    pub log_json: bool,
}

impl Default for GiziConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            reference_dir: None,
            log_json: false,
        }
    }
}

/// Resolve the config file path: explicit flag, then `$GIZI_CONFIG`, then
/// the platform config directory.
pub fn config_path(explicit: Option<&Path>) -> eyre::Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("gizi").join("config.json"))
}

/// Load the config at `path`, or defaults when the file does not exist.
pub fn load_config(path: &Path) -> eyre::Result<GiziConfig> {
    if !path.exists() {
        return Ok(GiziConfig::default());
    }

    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so the version is checked before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let checked = check_version(json, on_disk_version)?;
    let config: GiziConfig = serde_json::from_value(checked)?;
    Ok(config)
}

/// Reject configs written by a newer build and stamp the current version
/// on older ones. Fields added since a file was written take their serde
/// defaults.
pub fn check_version(mut json: serde_json::Value, on_disk: u32) -> eyre::Result<serde_json::Value> {
    if on_disk > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {on_disk} is newer than this build supports ({CURRENT_VERSION}). \
             Please update gizi."
        ));
    }

    let obj = json
        .as_object_mut()
        .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
    obj.insert(
        "config_version".to_string(),
        serde_json::Value::Number(CURRENT_VERSION.into()),
    );

    Ok(json)
}

pub fn save_config(path: &Path, config: &GiziConfig) -> eyre::Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let json = serde_json::to_string_pretty(&stamped)?;

    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;
    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
