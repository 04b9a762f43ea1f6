use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use serde::{Deserialize, Serialize};

use super::TicTacToeConfig;

const CONFIG_FILE_NAME: &str = "tictactoe_client_config.yaml";

fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager() -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer>
{
    ConfigManager::from_yaml_file(get_config_path())
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub tictactoe: TicTacToeConfig,
    #[serde(default)]
    pub log_prefix: Option<String>,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.tictactoe.validate()?;
        if let Some(prefix) = &self.log_prefix
            && prefix.trim().is_empty()
        {
            return Err("log_prefix must not be blank".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::config::{ConfigContentProvider, ConfigSerializer};
    use common::games::tictactoe::Difficulty;

    fn get_temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        let file_name = format!("temp_tictactoe_client_config_{}.yaml", random_number);
        path.push(file_name);
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();
        let serialized_string = serializer.serialize(&default_config).unwrap();
        let deserialized_config: Config = serializer.deserialize(&serialized_string).unwrap();
        assert_eq!(default_config, deserialized_config);
    }

    #[test]
    fn test_config_saved_through_manager_is_read_back() {
        let config = Config {
            tictactoe: TicTacToeConfig {
                difficulty: Difficulty::Optimal,
                reply_delay_ms: 250,
            },
            log_prefix: Some("Client".to_string()),
        };
        let file_path = get_temp_file_path();
        let manager = ConfigManager::from_yaml_file(file_path.clone());

        assert!(manager.set_config(&config).is_ok());
        assert_eq!(manager.get_config(), Ok(config.clone()));

        let fresh_manager = ConfigManager::<_, Config, _>::from_yaml_file(file_path.clone());
        assert_eq!(fresh_manager.get_config(), Ok(config));

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let serializer = YamlConfigSerializer::new();
        let config: Config = serializer.deserialize("log_prefix: Game\n").unwrap();
        assert_eq!(config.tictactoe, TicTacToeConfig::default());
        assert_eq!(config.log_prefix.as_deref(), Some("Game"));
    }

    #[test]
    fn test_difficulty_is_written_lowercase() {
        let provider = FileContentConfigProvider::new(get_temp_file_path());
        let serializer = YamlConfigSerializer::new();
        let config = Config {
            tictactoe: TicTacToeConfig {
                difficulty: Difficulty::Optimal,
                reply_delay_ms: 0,
            },
            log_prefix: None,
        };
        let content = serializer.serialize(&config).unwrap();
        provider.set_config_content(&content).unwrap();
        let stored = provider.get_config_content().unwrap().unwrap();
        assert!(stored.contains("difficulty: optimal"), "{}", stored);
        let _ = std::fs::remove_file(provider.path());
    }

    #[test]
    fn test_validation_rejects_long_delay_and_blank_prefix() {
        let mut config = Config::default();
        config.tictactoe.reply_delay_ms = 10_000;
        assert!(config.validate().is_err());

        let config = Config {
            log_prefix: Some("  ".to_string()),
            ..Config::default()
        };
        assert!(config.validate().is_err());
        assert!(Config::default().validate().is_ok());
    }
}
