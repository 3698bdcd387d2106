#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::collections::HashMap;
use std::env;
use std::path;

use anyhow::bail;
use anyhow::Result;
use clap::ArgMatches;
use clap::Command;
use dashmap::DashMap;
use once_cell::sync::Lazy;
use strum::EnumIter;
use strum::EnumVariantNames;
use strum::IntoEnumIterator;
use tokio::fs;

static CONFIG: Lazy<DashMap<String, String>> = Lazy::new(DashMap::new);

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, EnumIter, EnumVariantNames, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ConfigKey {
    BotName,
    ConfigFile,
    ServerURL,
    Username,
}

pub struct Config {}

impl Config {
    pub fn get(key: ConfigKey) -> String {
        if let Some(val) = CONFIG.get(&key.to_string()) {
            return val.to_string();
        }

        return "".to_string();
    }

    pub fn set(key: ConfigKey, value: &str) {
        CONFIG.insert(key.to_string(), value.to_string());
    }

    pub fn default_config_path() -> path::PathBuf {
        #[cfg(not(target_os = "macos"))]
        let config_dir = dirs::config_dir();
        #[cfg(target_os = "macos")]
        let config_dir = dirs::home_dir().map(|home| return home.join(".config"));

        return config_dir
            .unwrap_or_else(env::temp_dir)
            .join("tripchat/config.toml");
    }

    /// Debug log location, overridable with `TRIPCHAT_LOG_DIR`.
    pub fn log_path() -> path::PathBuf {
        if let Ok(log_dir) = env::var("TRIPCHAT_LOG_DIR") {
            if !log_dir.is_empty() {
                return path::PathBuf::from(log_dir).join("debug.log");
            }
        }

        return dirs::cache_dir()
            .unwrap_or_else(env::temp_dir)
            .join("tripchat/debug.log");
    }

    pub fn default(key: ConfigKey) -> String {
        match key {
            ConfigKey::BotName => return "Travel Bot".to_string(),
            ConfigKey::ConfigFile => {
                return Config::default_config_path().to_string_lossy().to_string();
            }
            ConfigKey::ServerURL => return "http://localhost:8000".to_string(),
            ConfigKey::Username => {
                let user = env::var("USER").unwrap_or_else(|_| return "".to_string());
                if user.is_empty() {
                    return "User".to_string();
                }

                return user;
            }
        }
    }

    fn validate(key: ConfigKey, val: &str) -> Result<()> {
        if key == ConfigKey::ServerURL {
            let is_http = reqwest::Url::parse(val)
                .map(|url| return ["http", "https"].contains(&url.scheme()))
                .unwrap_or(false);
            if !is_http {
                bail!("Invalid value for '{key}': {val}\nExpected an http or https URL such as http://localhost:8000");
            }
        }

        return Ok(());
    }

    /// Resolves every key from defaults, the config file and CLI flags or
    /// environment, in that order. Nothing is stored unless all values are
    /// valid.
    pub async fn load(clap_arg_matches: Vec<&ArgMatches>) -> Result<()> {
        let mut values: HashMap<ConfigKey, String> = ConfigKey::iter()
            .map(|key| return (key, Config::default(key)))
            .collect();

        for matches in clap_arg_matches.as_slice() {
            if let Ok(Some(arg_config_file)) =
                matches.try_get_one::<String>(&ConfigKey::ConfigFile.to_string())
            {
                values.insert(ConfigKey::ConfigFile, arg_config_file.to_string());
            }
        }

        let config_path = path::PathBuf::from(&values[&ConfigKey::ConfigFile]);
        if config_path.exists() {
            let toml_str = fs::read_to_string(&config_path).await?;
            let doc = toml_str.parse::<toml_edit::Document>()?;

            for key in ConfigKey::iter() {
                if key == ConfigKey::ConfigFile {
                    continue;
                }

                if let Some(val_str) = doc.get(&key.to_string()).and_then(|e| return e.as_str()) {
                    if val_str.is_empty() {
                        continue;
                    }

                    if let Err(err) = Config::validate(key, val_str) {
                        bail!("{} has an invalid value. {err}", config_path.display());
                    }
                    values.insert(key, val_str.to_string());
                }
            }
        }

        for key in ConfigKey::iter() {
            for matches in clap_arg_matches.as_slice() {
                if let Ok(Some(val)) = matches.try_get_one::<String>(&key.to_string()) {
                    if val.is_empty() {
                        continue;
                    }
                    Config::validate(key, val)?;
                    values.insert(key, val.to_string());
                }
            }
        }

        for (key, val) in values {
            Config::set(key, &val);
        }

        tracing::debug!(
            username = Config::get(ConfigKey::Username),
            bot_name = Config::get(ConfigKey::BotName),
            server_url = Config::get(ConfigKey::ServerURL),
            config_file = Config::get(ConfigKey::ConfigFile),
            "config"
        );

        return Ok(());
    }

    pub fn serialize_default(cmd: Command) -> String {
        let toml_str = ConfigKey::iter()
            .filter_map(|key| {
                if key == ConfigKey::ConfigFile {
                    return None;
                }

                if key == ConfigKey::Username {
                    return Some(
                        "# Your user name displayed in your chat bubbles.\n# username = \"\""
                            .to_string(),
                    );
                }

                let description = cmd
                    .get_arguments()
                    .find(|e| return e.get_long() == Some(key.to_string().as_str()))
                    .and_then(|arg| return arg.get_help())
                    .map(|help| return help.to_string())
                    .unwrap_or_default();
                let description = description
                    .split("[default:")
                    .next()
                    .unwrap_or_default()
                    .trim()
                    .to_string();

                let val = format!("{key} = \"{}\"", Config::default(key));
                return Some(format!("# {description}\n{val}"));
            })
            .collect::<Vec<String>>()
            .join("\n\n");

        return toml_str;
    }
}
