use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{ClientError, ClientResult};

pub const DEFAULT_CURRENCY_SYMBOL: &str = "₱";

/// On-disk shape of `config.json` under the pesobook home directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint_url: Option<String>,
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            endpoint_url: None,
            currency_symbol: default_currency_symbol(),
        }
    }
}

fn default_currency_symbol() -> String {
    DEFAULT_CURRENCY_SYMBOL.to_string()
}

/// Resolved paths for one pesobook home, independent of whether a config
/// file exists yet.
#[derive(Debug, Clone)]
pub struct HomePaths {
    pub home: PathBuf,
    pub config_path: PathBuf,
    pub snapshot_path: PathBuf,
}

/// A fully loaded configuration, ready for remote operations.
#[derive(Debug, Clone)]
pub struct ConfigContext {
    pub paths: HomePaths,
    pub endpoint_url: String,
    pub currency_symbol: String,
}

pub fn resolve_home(home_override: Option<&Path>) -> ClientResult<PathBuf> {
    let candidate = match home_override {
        Some(path) => path.to_path_buf(),
        None => {
            if let Some(override_path) = std::env::var_os("PESOBOOK_HOME") {
                PathBuf::from(override_path)
            } else if let Some(home_path) = home::home_dir() {
                home_path.join(".pesobook")
            } else {
                return Err(ClientError::home_unresolvable(
                    "no home directory is available",
                ));
            }
        }
    };

    absolutize(&candidate)
}

pub fn resolve_paths(home_override: Option<&Path>) -> ClientResult<HomePaths> {
    let home = resolve_home(home_override)?;
    Ok(HomePaths {
        config_path: home.join("config.json"),
        snapshot_path: home.join("snapshot.json"),
        home,
    })
}

pub fn ensure_home_directory(path: &Path) -> ClientResult<()> {
    fs::create_dir_all(path).map_err(|error| ClientError::config_io(path, &error.to_string()))?;
    set_private_permissions_best_effort(path);
    Ok(())
}

/// Loads the config file, requiring a usable endpoint URL. Remote commands
/// start here.
pub fn load(home_override: Option<&Path>) -> ClientResult<ConfigContext> {
    let paths = resolve_paths(home_override)?;
    let Some(file) = read_config_file(&paths.config_path)? else {
        return Err(ClientError::endpoint_not_configured(&paths.config_path));
    };

    let endpoint_url = file
        .endpoint_url
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .ok_or_else(|| ClientError::endpoint_not_configured(&paths.config_path))?;

    Ok(ConfigContext {
        endpoint_url,
        currency_symbol: file.currency_symbol,
        paths,
    })
}

/// Loads whatever config exists, if any. `config show` and `config set`
/// start here so they work before first configuration.
pub fn load_optional(home_override: Option<&Path>) -> ClientResult<(HomePaths, Option<ConfigFile>)> {
    let paths = resolve_paths(home_override)?;
    let file = read_config_file(&paths.config_path)?;
    Ok((paths, file))
}

pub fn store(paths: &HomePaths, file: &ConfigFile) -> ClientResult<()> {
    ensure_home_directory(&paths.home)?;
    let body = serde_json::to_string_pretty(file)
        .map_err(|error| ClientError::internal_serialization(&error.to_string()))?;
    fs::write(&paths.config_path, body)
        .map_err(|error| ClientError::config_io(&paths.config_path, &error.to_string()))
}

fn read_config_file(config_path: &Path) -> ClientResult<Option<ConfigFile>> {
    let body = match fs::read_to_string(config_path) {
        Ok(value) => value,
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(error) => return Err(ClientError::config_io(config_path, &error.to_string())),
    };

    serde_json::from_str::<ConfigFile>(&body)
        .map(Some)
        .map_err(|error| ClientError::config_invalid(config_path, &error.to_string()))
}

fn absolutize(path: &Path) -> ClientResult<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }

    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .map_err(|error| ClientError::home_unresolvable(&error.to_string()))
}

#[cfg(unix)]
fn set_private_permissions_best_effort(path: &Path) {
    use std::os::unix::fs::PermissionsExt;

    let _ = fs::set_permissions(path, fs::Permissions::from_mode(0o700));
}

#[cfg(not(unix))]
fn set_private_permissions_best_effort(_path: &Path) {}
