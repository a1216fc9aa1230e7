use path_clean::PathClean;
use serde::{Deserialize, Serialize};
use std::env::VarError;
use std::path::{Path, PathBuf};
use utility::{Error, Result};

//AuthType auth type
pub type AuthType = String;

///BasicAuthType basic authentication type
pub const BASIC_AUTH_TYPE: &str = "basic";
///OAUTH_2AUTH_TYPE oauth2 authentication type
pub const OAUTH_2AUTH_TYPE: &str = "oauth2";

/// CONFIG_LOCATION_ENV is the name of he env variable used
/// to configure the location of the faas-cli config folder.
/// When not set, DEFAULT_DIR location is used.
pub const CONFIG_LOCATION_ENV: &str = "OPENFAAS_CONFIG";

pub const DEFAULT_DIR: &str = "~/.openfaas";
pub const DEFAULT_FILE: &str = "config.yml";

/// DEFAULT_CI_DIR is the 'openfaas' directory in the current directory
/// used when running in a CI environment.
pub const DEFAULT_CI_DIR: &str = "./openfaas";

/// ConfigFile for OpenFaaS CLI exclusively.
#[derive(Serialize, Deserialize, Default, Clone, Debug)]
pub struct ConfigFile {
    #[serde(default)]
    #[serde(rename = "auths")]
    pub auth_configs: Vec<AuthConfig>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct AuthConfig {
    #[serde(default)]
    pub gateway: String,
    #[serde(default)]
    pub auth: AuthType,
    #[serde(default)]
    pub token: String,
}

impl ConfigFile {
    /// load reads the yaml file from disk, an empty file yields an empty config
    pub fn load<P: AsRef<Path>>(file_path: P) -> Result<ConfigFile> {
        let data = std::fs::read_to_string(file_path.as_ref())?;
        if data.trim().is_empty() {
            return Ok(ConfigFile::default());
        }
        serde_yaml::from_str(data.as_str()).map_err(|e| {
            Error::Custom(format!(
                "can't parse config file {}: {}",
                file_path.as_ref().display(),
                e
            ))
        })
    }

    ///returns the auth entry stored for `gateway`
    pub fn lookup(&self, gateway: &str) -> Option<&AuthConfig> {
        self.auth_configs.iter().find(|v| v.gateway == gateway)
    }
}

/// config_dir returns the path to the faas-cli config directory.
/// When
/// 1. CI = "true" and OPENFAAS_CONFIG="", then it will return `./openfaas`, which is located in the current working directory.
/// 2. CI = "true" and OPENFAAS_CONFIG="<path>", then it will return the path value in  OPENFAAS_CONFIG
/// 3. CI = "" and OPENFAAS_CONFIG="", then it will return the default location ~/.openfaas
pub fn config_dir() -> Result<String> {
    match std::env::var(CONFIG_LOCATION_ENV) {
        Ok(overrid) => {
            if overrid.is_empty() && is_running_in_ci() {
                Ok(DEFAULT_CI_DIR.into())
            } else if !overrid.is_empty() {
                Ok(overrid)
            } else {
                Ok(DEFAULT_DIR.into())
            }
        }
        Err(VarError::NotPresent) => {
            if is_running_in_ci() {
                Ok(DEFAULT_CI_DIR.into())
            } else {
                Ok(DEFAULT_DIR.into())
            }
        }
        Err(e) => Err(Error::Custom(format!("{:?}", e))),
    }
}

/// is_running_in_ci checks the ENV var CI and returns true if it's set to true or 1
fn is_running_in_ci() -> bool {
    matches!(std::env::var("CI").as_deref(), Ok("1") | Ok("true"))
}

///full path of the config file with `~` expanded
pub fn config_file_path() -> Result<PathBuf> {
    let dir = config_dir()?;
    let dir = shellexpand::tilde(&dir);
    Ok(PathBuf::from(dir.into_owned()).join(DEFAULT_FILE).clean())
}

/// returns true if the config file is located at the configured path
pub fn file_exists() -> Result<bool> {
    let file_path = config_file_path()?;
    match std::fs::metadata(&file_path) {
        Ok(_) => Ok(true),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(err) => Err(Error::Io(err)),
    }
}

/// encodes the username and password strings to base64
pub fn encode_auth(username: &str, password: &str) -> String {
    base64::encode(format!("{}:{}", username, password))
}

/// decodes base64 to the username and password
pub fn decode_auth(encoded: &str) -> Result<(String, String)> {
    let decoded = base64::decode(encoded).map_err(|e| Error::Custom(format!("{:?}", e)))?;
    let decoded = std::str::from_utf8(&decoded).map_err(|e| Error::Custom(format!("{:?}", e)))?;
    let mut data = decoded.splitn(2, ':');

    let username = data.next().unwrap_or_default().to_owned();
    let password = data
        .next()
        .ok_or_else(|| {
            Error::Custom("the data decoded to format not like username:password".to_string())
        })?
        .to_string();
    Ok((username, password))
}

///returns the auth entry stored in `file_path` for a given gateway
pub fn read_auth_config<P: AsRef<Path>>(file_path: P, gateway: &str) -> Result<AuthConfig> {
    let cfg = ConfigFile::load(file_path)?;
    match cfg.lookup(gateway) {
        Some(v) => {
            if !v.auth.is_empty() && v.auth != BASIC_AUTH_TYPE && v.auth != OAUTH_2AUTH_TYPE {
                tracing::warn!(gateway, auth = v.auth.as_str(), "unknown auth type in config file");
            }
            Ok(v.clone())
        }
        None => {
            tracing::debug!(gateway, "no stored auth config for gateway");
            Ok(AuthConfig::default())
        }
    }
}

///returns the username and password for a given gateway
pub fn lookup_auth_config(gateway: &str) -> Result<AuthConfig> {
    if !file_exists()? {
        return Err(Error::Custom("config file is not found".to_string()));
    }
    read_auth_config(config_file_path()?, gateway)
}
