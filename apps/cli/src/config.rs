use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    fn from_value(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Text
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Directory whose `taxonomy.json` / `finance_act.json` override the bundled data.
    pub data_dir: Option<PathBuf>,
    pub log_format: LogFormat,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let data_dir = var("TF_DATA_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from);
        let log_format = var("TF_LOG_FORMAT")
            .map(|value| LogFormat::from_value(&value))
            .unwrap_or_default();
        Self {
            data_dir,
            log_format,
        }
    }

    /// Command-line flags take precedence over the environment.
    pub fn with_data_dir(mut self, data_dir: Option<PathBuf>) -> Self {
        if data_dir.is_some() {
            self.data_dir = data_dir;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]);
        assert!(config.data_dir.is_none());
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    fn test_reads_variables() {
        let config = config(&[("TF_DATA_DIR", "/srv/fees"), ("TF_LOG_FORMAT", "JSON")]);
        assert_eq!(config.data_dir, Some(PathBuf::from("/srv/fees")));
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_blank_data_dir_is_ignored() {
        assert!(config(&[("TF_DATA_DIR", "  ")]).data_dir.is_none());
    }

    #[test]
    fn test_flag_overrides_env() {
        let config = config(&[("TF_DATA_DIR", "/from/env")]);
        assert_eq!(
            config.clone().with_data_dir(Some(PathBuf::from("/from/flag"))).data_dir,
            Some(PathBuf::from("/from/flag"))
        );
        assert_eq!(
            config.with_data_dir(None).data_dir,
            Some(PathBuf::from("/from/env"))
        );
    }
}
