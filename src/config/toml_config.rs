use crate::core::OutputFormat;
use crate::utils::error::{BookwormsError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputConfig {
    #[serde(default)]
    pub files: Vec<String>,
    pub concurrent_reads: Option<usize>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
    pub path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(BookwormsError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| BookwormsError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${ROSTER_DIR})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| BookwormsError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_file_extensions("input.files", &self.input.files, &["json"])?;

        if let Some(concurrent) = self.input.concurrent_reads {
            validation::validate_positive_number("input.concurrent_reads", concurrent, 1)?;
        }

        if let Some(path) = &self.output.path {
            validation::validate_path("output.path", path)?;
        }

        if let Some(level) = self.log_level() {
            validation::validate_non_empty_string("logging.level", level)?;
        }

        Ok(())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[input]
files = ["shelves/fadi.json", "shelves/peggy.json"]
concurrent_reads = 2

[output]
format = "csv"
path = "./common.csv"

[logging]
level = "debug"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.input.files.len(), 2);
        assert_eq!(config.input.concurrent_reads, Some(2));
        assert_eq!(config.output.format, Some(OutputFormat::Csv));
        assert_eq!(config.output.path.as_deref(), Some("./common.csv"));
        assert_eq!(config.log_level(), Some("debug"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_all_sections_are_optional() {
        let config = TomlConfig::from_toml_str("").unwrap();

        assert!(config.input.files.is_empty());
        assert_eq!(config.output.format, None);
        assert_eq!(config.log_level(), None);
    }

    #[test]
    fn test_unknown_output_format_is_rejected() {
        let toml_content = r#"
[output]
format = "yaml"
"#;

        assert!(matches!(
            TomlConfig::from_toml_str(toml_content),
            Err(BookwormsError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("BOOKWORMS_TEST_ROSTER_DIR", "/data/shelves");

        let toml_content = r#"
[input]
files = ["${BOOKWORMS_TEST_ROSTER_DIR}/bookworms.json", "${BOOKWORMS_TEST_UNSET_VAR}/x.json"]
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.input.files[0], "/data/shelves/bookworms.json");
        assert_eq!(config.input.files[1], "${BOOKWORMS_TEST_UNSET_VAR}/x.json");

        std::env::remove_var("BOOKWORMS_TEST_ROSTER_DIR");
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[input]
files = ["bookworms.txt"]
concurrent_reads = 0
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[input]
files = ["bookworms.json"]
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.input.files, vec!["bookworms.json".to_string()]);
    }
}
