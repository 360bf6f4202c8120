#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use tsk::api::gemini::GeminiConfig;
    use tsk::libs::config::{Config, ReminderConfig};

    struct ConfigTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_missing_file_yields_default(_ctx: &mut ConfigTestContext) {
        let config = Config::read().unwrap();
        assert!(config.reminders.is_none());
        assert!(config.gemini.is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_round_trip(_ctx: &mut ConfigTestContext) {
        let config = Config {
            reminders: Some(ReminderConfig { poll_interval: 30 }),
            gemini: Some(GeminiConfig {
                model: "gemini-pro".to_string(),
            }),
        };
        config.save().unwrap();

        let loaded = Config::read().unwrap();
        assert_eq!(loaded.reminders, Some(ReminderConfig { poll_interval: 30 }));
        assert_eq!(
            loaded.gemini,
            Some(GeminiConfig {
                model: "gemini-pro".to_string()
            })
        );
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_corrupt_file_is_a_parse_error(_ctx: &mut ConfigTestContext) {
        let path = tsk::libs::data_storage::DataStorage::new().get_path("config.json").unwrap();
        std::fs::write(path, "{ not json").unwrap();

        let err = Config::read().unwrap_err();
        assert!(err.to_string().contains("Failed to parse configuration file"));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_partial_config_keeps_other_modules_off(_ctx: &mut ConfigTestContext) {
        Config {
            reminders: Some(ReminderConfig::default()),
            gemini: None,
        }
        .save()
        .unwrap();

        let loaded = Config::read().unwrap();
        assert_eq!(loaded.reminders.unwrap().poll_interval, 60);
        assert!(loaded.gemini.is_none());
    }
}
