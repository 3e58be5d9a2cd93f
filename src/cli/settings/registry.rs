//! Registry of setting handlers.

use std::collections::HashMap;

use super::handlers::{
    backoff_handler, detailed_brief_handler, max_attempts_handler, timeout_handler,
    BaseUrlHandler,
};
use super::{SettingError, SettingHandler};
use crate::core::config::data::Config;

/// Registry of all available setting handlers.
pub struct SettingRegistry {
    handlers: HashMap<&'static str, Box<dyn SettingHandler>>,
    /// Keys in registration order for help output.
    display_order: Vec<&'static str>,
}

impl SettingRegistry {
    /// Create a new registry with all handlers registered.
    pub fn new() -> Self {
        let mut registry = Self {
            handlers: HashMap::new(),
            display_order: Vec::new(),
        };

        registry.register(Box::new(BaseUrlHandler));
        registry.register(Box::new(max_attempts_handler()));
        registry.register(Box::new(timeout_handler()));
        registry.register(Box::new(backoff_handler()));
        registry.register(Box::new(detailed_brief_handler()));

        registry
    }

    fn register(&mut self, handler: Box<dyn SettingHandler>) {
        let key = handler.key();
        self.display_order.push(key);
        self.handlers.insert(key, handler);
    }

    /// Get a handler by key.
    pub fn get(&self, key: &str) -> Option<&dyn SettingHandler> {
        self.handlers.get(key).map(|h| h.as_ref())
    }

    /// Get all keys in display order.
    pub fn keys_display_order(&self) -> &[&'static str] {
        &self.display_order
    }

    pub fn set(&self, key: &str, args: &[String], config: &mut Config) -> Result<String, SettingError> {
        self.get(key)
            .ok_or_else(|| SettingError::UnknownKey(key.to_string()))?
            .set(args, config)
    }

    pub fn unset(&self, key: &str, config: &mut Config) -> Result<String, SettingError> {
        let handler = self
            .get(key)
            .ok_or_else(|| SettingError::UnknownKey(key.to_string()))?;
        Ok(handler.unset(config))
    }
}

impl Default for SettingRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn registry_lists_keys_in_display_order() {
        let registry = SettingRegistry::new();
        assert_eq!(
            registry.keys_display_order(),
            ["base-url", "max-attempts", "timeout", "backoff", "detailed-brief"]
        );
    }

    #[test]
    fn numeric_settings_update_retry_policy() {
        let registry = SettingRegistry::new();
        let mut config = Config::default();

        assert_eq!(
            registry.set("max-attempts", &args(&["3"]), &mut config),
            Ok("✅ Set max-attempts to: 3".to_string())
        );
        registry.set("timeout", &args(&["15"]), &mut config).unwrap();
        registry.set("backoff", &args(&["0"]), &mut config).unwrap();

        let policy = config.retry_policy();
        assert_eq!(policy.max_attempts, 3);
        assert_eq!(policy.timeout, Duration::from_secs(15));
        assert_eq!(policy.backoff, Duration::ZERO);

        assert_eq!(
            registry.unset("backoff", &mut config),
            Ok("✅ Unset backoff (will use default: 1000ms)".to_string())
        );
        assert_eq!(config.backoff_ms, None);
    }

    #[test]
    fn numeric_settings_reject_out_of_range_values() {
        let registry = SettingRegistry::new();
        let mut config = Config::default();

        for bad in ["0", "-1", "many", "99999999999"] {
            let err = registry
                .set("max-attempts", &args(&[bad]), &mut config)
                .expect_err("should reject");
            assert!(matches!(err, SettingError::InvalidNumber { .. }), "input={bad}");
        }
        assert_eq!(config, Config::default());
    }

    #[test]
    fn base_url_is_validated_and_normalized() {
        let registry = SettingRegistry::new();
        let mut config = Config::default();

        assert_eq!(
            registry.set("base-url", &args(&["ftp://example.com"]), &mut config),
            Err(SettingError::InvalidUrl("ftp://example.com".to_string()))
        );
        registry
            .set("base-url", &args(&["http://localhost:9000//"]), &mut config)
            .unwrap();
        assert_eq!(config.endpoint(), "http://localhost:9000/chat/completions");
    }

    #[test]
    fn boolean_setting_accepts_common_spellings() {
        let registry = SettingRegistry::new();
        let mut config = Config::default();

        registry
            .set("detailed-brief", &args(&["Yes"]), &mut config)
            .unwrap();
        assert!(config.detailed_brief());
        assert_eq!(
            registry.set("detailed-brief", &args(&["sometimes"]), &mut config),
            Err(SettingError::InvalidBoolean("sometimes".to_string()))
        );
    }

    #[test]
    fn missing_values_and_unknown_keys_are_errors() {
        let registry = SettingRegistry::new();
        let mut config = Config::default();

        assert!(matches!(
            registry.set("timeout", &[], &mut config),
            Err(SettingError::MissingArgs { .. })
        ));
        assert_eq!(
            registry.unset("theme", &mut config),
            Err(SettingError::UnknownKey("theme".to_string()))
        );
    }
}
