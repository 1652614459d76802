use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tictactoe_common::config::{
    ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer,
};
use tictactoe_common::games::tictactoe::Mode;

const CONFIG_FILE_NAME: &str = "tictactoe_config.yaml";
const MAX_AI_DELAY_MS: u64 = 5000;

pub fn default_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(
    path: Option<PathBuf>,
) -> ConfigManager<FileContentConfigProvider, ClientConfig, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path.unwrap_or_else(default_config_path))
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct ClientConfig {
    #[serde(default)]
    pub mode: Mode,
    #[serde(default = "default_ai_delay_ms")]
    pub ai_delay_ms: u64,
    #[serde(default)]
    pub verbose_logging: bool,
}

fn default_ai_delay_ms() -> u64 {
    500
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<(), String> {
        if self.ai_delay_ms > MAX_AI_DELAY_MS {
            return Err(format!(
                "ai_delay_ms must not exceed {} (got {})",
                MAX_AI_DELAY_MS, self.ai_delay_ms
            ));
        }
        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            mode: Mode::TwoPlayer,
            ai_delay_ms: default_ai_delay_ms(),
            verbose_logging: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_common::config::{ConfigContentProvider, ConfigSerializer};

    fn get_temp_file_path() -> PathBuf {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_tictactoe_config_{}.yaml", random_number));
        path
    }

    #[test]
    fn test_default_config_round_trips_through_file() {
        let default_config = ClientConfig::default();
        let serializer = YamlConfigSerializer::new();
        let file_path = get_temp_file_path();
        let content_provider = FileContentConfigProvider::new(file_path.clone());

        let serialized = serializer.serialize(&default_config).unwrap();
        content_provider.set_config_content(&serialized).unwrap();
        let read_back = content_provider.get_config_content().unwrap().unwrap();
        let deserialized: ClientConfig = serializer.deserialize(&read_back).unwrap();
        assert_eq!(default_config, deserialized);

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_manager_saves_and_loads() {
        let file_path = get_temp_file_path();
        let manager = get_config_manager(Some(file_path.clone()));
        let config = ClientConfig {
            mode: Mode::HumanVsAI,
            ai_delay_ms: 0,
            verbose_logging: true,
        };

        manager.set_config(&config).unwrap();
        assert_eq!(manager.get_config(), Ok(config.clone()));

        let fresh = get_config_manager(Some(file_path.clone()));
        assert_eq!(fresh.get_config(), Ok(config));

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_config_file_does_not_exist_returns_default_config() {
        let manager = get_config_manager(Some(PathBuf::from("this_file_does_not_exist.yaml")));
        assert_eq!(manager.get_config(), Ok(ClientConfig::default()));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let serializer = YamlConfigSerializer::new();
        let config: ClientConfig = serializer.deserialize("mode: human_vs_ai\n").unwrap();
        assert_eq!(config.mode, Mode::HumanVsAI);
        assert_eq!(config.ai_delay_ms, 500);
        assert!(!config.verbose_logging);
    }

    #[test]
    fn test_excessive_delay_is_invalid() {
        let config = ClientConfig {
            ai_delay_ms: 60_000,
            ..ClientConfig::default()
        };
        assert!(config.validate().is_err());
        assert!(ClientConfig::default().validate().is_ok());
    }
}
