// config.rs

use thiserror::Error;

pub const LOG_ENV: &str = "CALC_LOG";
pub const LINE_EDITOR_ENV: &str = "CALC_LINE_EDITOR";
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum LineEditorMode {
    /// Line editor when stdin is a terminal, plain reads otherwise.
    #[default]
    Auto,
    Always,
    Never,
}

impl LineEditorMode {
    pub fn use_editor(self, stdin_is_terminal: bool) -> bool {
        match self {
            LineEditorMode::Auto => stdin_is_terminal,
            LineEditorMode::Always => true,
            LineEditorMode::Never => false,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unrecognized CALC_LINE_EDITOR value {0:?}, expected auto, always or never")]
    LineEditorMode(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub log_filter: String,
    pub line_editor: LineEditorMode,
    /// Values that were ignored; reported once logging is up.
    pub problems: Vec<ConfigError>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        let log_filter = lookup(LOG_ENV)
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
        let mut problems = Vec::new();
        let line_editor = match lookup(LINE_EDITOR_ENV) {
            None => LineEditorMode::Auto,
            Some(value) => match value.trim().to_lowercase().as_str() {
                "" | "auto" => LineEditorMode::Auto,
                "always" => LineEditorMode::Always,
                "never" => LineEditorMode::Never,
                _ => {
                    problems.push(ConfigError::LineEditorMode(value));
                    LineEditorMode::Auto
                }
            },
        };
        Self { log_filter, line_editor, problems }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        let config = config_from(&[]);
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
        assert_eq!(config.line_editor, LineEditorMode::Auto);
        assert!(config.problems.is_empty());
    }

    #[test]
    fn reads_both_variables() {
        let config = config_from(&[(LOG_ENV, "debug"), (LINE_EDITOR_ENV, " Never ")]);
        assert_eq!(config.log_filter, "debug");
        assert_eq!(config.line_editor, LineEditorMode::Never);
    }

    #[test]
    fn unknown_editor_mode_falls_back_to_auto() {
        let config = config_from(&[(LINE_EDITOR_ENV, "sometimes")]);
        assert_eq!(config.line_editor, LineEditorMode::Auto);
        assert_eq!(config.problems, vec![ConfigError::LineEditorMode("sometimes".into())]);
    }

    #[test]
    fn editor_choice_follows_mode() {
        assert!(LineEditorMode::Auto.use_editor(true));
        assert!(!LineEditorMode::Auto.use_editor(false));
        assert!(LineEditorMode::Always.use_editor(false));
        assert!(!LineEditorMode::Never.use_editor(true));
    }
}
