use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Mutex;

use super::{
    ConfigContentProvider, ConfigSerializer, FileContentConfigProvider, Validate,
    YamlConfigSerializer,
};

/// Loads a config once, validates it, and caches it until the next `set_config`.
pub struct ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer = YamlConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    config_serializer: TConfigSerializer,
    config_content_provider: TConfigContentProvider,
    config: Mutex<Option<TConfig>>,
}

impl<TConfig> ConfigManager<FileContentConfigProvider, TConfig, YamlConfigSerializer>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(file_path: impl Into<PathBuf>) -> Self {
        Self::new(
            FileContentConfigProvider::new(file_path),
            YamlConfigSerializer::new(),
        )
    }
}

impl<TConfigContentProvider, TConfig, TConfigSerializer>
    ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    pub fn new(
        config_content_provider: TConfigContentProvider,
        config_serializer: TConfigSerializer,
    ) -> Self {
        Self {
            config: Mutex::new(None),
            config_content_provider,
            config_serializer,
        }
    }

    pub fn get_config(&self) -> Result<TConfig, String> {
        let mut current = self
            .config
            .lock()
            .map_err(|_| "Config cache lock poisoned".to_string())?;

        if let Some(config) = current.as_ref() {
            return Ok(config.clone());
        }

        let Some(config_data) = self.config_content_provider.get_config_content()? else {
            return Ok(TConfig::default());
        };

        let config = self.config_serializer.deserialize(&config_data)?;
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        *current = Some(config.clone());
        Ok(config)
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), String> {
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        let serialized_config = self.config_serializer.serialize(config)?;
        self.config_content_provider
            .set_config_content(&serialized_config)?;

        let mut current = self
            .config
            .lock()
            .map_err(|_| "Config cache lock poisoned".to_string())?;
        *current = Some(config.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InMemoryConfigProvider;

    #[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
    struct TestConfig {
        reply_delay_ms: u64,
    }

    impl Validate for TestConfig {
        fn validate(&self) -> Result<(), String> {
            if self.reply_delay_ms > 1000 {
                return Err("reply_delay_ms too large".to_string());
            }
            Ok(())
        }
    }

    fn create_manager(
        content: Option<&str>,
    ) -> ConfigManager<InMemoryConfigProvider, TestConfig, YamlConfigSerializer> {
        ConfigManager::new(
            InMemoryConfigProvider::new(content.map(str::to_string)),
            YamlConfigSerializer::new(),
        )
    }

    #[test]
    fn test_missing_content_yields_default() {
        let manager = create_manager(None);
        assert_eq!(manager.get_config(), Ok(TestConfig::default()));
    }

    #[test]
    fn test_stored_content_is_parsed() {
        let manager = create_manager(Some("reply_delay_ms: 250\n"));
        assert_eq!(manager.get_config(), Ok(TestConfig { reply_delay_ms: 250 }));
    }

    #[test]
    fn test_invalid_stored_content_is_rejected() {
        let manager = create_manager(Some("reply_delay_ms: 5000\n"));
        let result = manager.get_config();
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Config validation error"));
    }

    #[test]
    fn test_set_config_validates_before_saving() {
        let manager = create_manager(None);
        assert!(manager.set_config(&TestConfig { reply_delay_ms: 2000 }).is_err());
        assert_eq!(manager.get_config(), Ok(TestConfig::default()));

        let config = TestConfig { reply_delay_ms: 400 };
        assert!(manager.set_config(&config).is_ok());
        assert_eq!(manager.get_config(), Ok(config));
    }

    #[test]
    fn test_yaml_file_round_trip() {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_tictactoe_common_config_{}.yaml", random_number));

        let config = TestConfig { reply_delay_ms: 600 };
        let writer = ConfigManager::<_, TestConfig, _>::from_yaml_file(path.clone());
        assert!(writer.set_config(&config).is_ok());

        let reader = ConfigManager::<_, TestConfig, _>::from_yaml_file(path.clone());
        assert_eq!(reader.get_config(), Ok(config));

        let _ = std::fs::remove_file(path);
    }
}
