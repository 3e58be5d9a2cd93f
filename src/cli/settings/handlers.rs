//! Setting handlers for the keys `appspark set` understands.

use super::{format_bool, parse_bool, success_set, success_unset, SettingError, SettingHandler};
use crate::core::config::data::{Config, DEFAULT_BASE_URL};
use crate::utils::url::{is_http_url, normalize_base_url};

/// Handler for the `base-url` setting.
pub struct BaseUrlHandler;

impl SettingHandler for BaseUrlHandler {
    fn key(&self) -> &'static str {
        "base-url"
    }

    fn set(&self, args: &[String], config: &mut Config) -> Result<String, SettingError> {
        let Some(input) = args.first().map(|arg| arg.trim()) else {
            return Err(SettingError::MissingArgs {
                hint: "To set the service URL, specify it without the chat/completions path:",
                example: "appspark set base-url https://ai.hackclub.com",
            });
        };

        if !is_http_url(input) {
            return Err(SettingError::InvalidUrl(input.to_string()));
        }

        let url = normalize_base_url(input);
        let message = success_set(self.key(), &url);
        config.base_url = Some(url);
        Ok(message)
    }

    fn unset(&self, config: &mut Config) -> String {
        config.base_url = None;
        success_unset(self.key(), DEFAULT_BASE_URL)
    }
}

/// Data-driven handler for whole-number settings.
pub struct NumberHandler {
    key: &'static str,
    hint: &'static str,
    example: &'static str,
    unit: &'static str,
    min: u64,
    max: u64,
    default_display: &'static str,
    set_field: fn(&mut Config, Option<u64>),
}

impl SettingHandler for NumberHandler {
    fn key(&self) -> &'static str {
        self.key
    }

    fn set(&self, args: &[String], config: &mut Config) -> Result<String, SettingError> {
        let Some(input) = args.first() else {
            return Err(SettingError::MissingArgs {
                hint: self.hint,
                example: self.example,
            });
        };

        let value = input
            .trim()
            .parse::<u64>()
            .ok()
            .filter(|value| (self.min..=self.max).contains(value))
            .ok_or_else(|| SettingError::InvalidNumber {
                key: self.key,
                input: input.clone(),
                min: self.min,
            })?;

        (self.set_field)(config, Some(value));
        Ok(success_set(self.key, &format!("{value}{}", self.unit)))
    }

    fn unset(&self, config: &mut Config) -> String {
        (self.set_field)(config, None);
        success_unset(self.key, self.default_display)
    }
}

pub fn max_attempts_handler() -> NumberHandler {
    NumberHandler {
        key: "max-attempts",
        hint: "To set how many times a request is tried, specify a number:",
        example: "appspark set max-attempts 5",
        unit: "",
        min: 1,
        max: u32::MAX as u64,
        default_display: "5",
        set_field: |config, value| config.max_attempts = value.map(|value| value as u32),
    }
}

pub fn timeout_handler() -> NumberHandler {
    NumberHandler {
        key: "timeout",
        hint: "To set the per-attempt timeout, specify seconds:",
        example: "appspark set timeout 60",
        unit: "s",
        min: 1,
        max: u64::MAX,
        default_display: "60s",
        set_field: |config, value| config.timeout_secs = value,
    }
}

pub fn backoff_handler() -> NumberHandler {
    NumberHandler {
        key: "backoff",
        hint: "To set the delay between attempts, specify milliseconds:",
        example: "appspark set backoff 1000",
        unit: "ms",
        min: 0,
        max: u64::MAX,
        default_display: "1000ms",
        set_field: |config, value| config.backoff_ms = value,
    }
}

/// Data-driven handler for boolean (on/off) settings.
pub struct BooleanHandler {
    key: &'static str,
    hint: &'static str,
    example: &'static str,
    default_display: &'static str,
    set_field: fn(&mut Config, Option<bool>),
}

impl SettingHandler for BooleanHandler {
    fn key(&self) -> &'static str {
        self.key
    }

    fn set(&self, args: &[String], config: &mut Config) -> Result<String, SettingError> {
        if args.is_empty() {
            return Err(SettingError::MissingArgs {
                hint: self.hint,
                example: self.example,
            });
        }

        let input = args.join(" ");
        let value = parse_bool(&input).ok_or(SettingError::InvalidBoolean(input))?;
        (self.set_field)(config, Some(value));
        Ok(success_set(self.key, format_bool(value)))
    }

    fn unset(&self, config: &mut Config) -> String {
        (self.set_field)(config, None);
        success_unset(self.key, self.default_display)
    }
}

pub fn detailed_brief_handler() -> BooleanHandler {
    BooleanHandler {
        key: "detailed-brief",
        hint: "To request the full concept brief by default, specify on or off:",
        example: "appspark set detailed-brief on",
        default_display: "off",
        set_field: |config, value| config.detailed_brief = value,
    }
}
