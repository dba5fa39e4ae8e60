use crate::config::{OutputFormat, SUPPORTED_FORMATS};
use crate::utils::error::{ChartError, Result};
use crate::utils::validation::{validate_one_of, validate_path, validate_range, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const MIN_DIMENSION: u32 = 200;
pub const MAX_DIMENSION: u32 = 4096;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const LOG_FORMATS: [&str; 2] = ["compact", "json"];

/// Rendering options read from a TOML file. Chart data is not configurable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenderConfig {
    pub output: Option<OutputConfig>,
    pub display: Option<DisplayConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub directory: Option<String>,
    pub format: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub show: Option<bool>,
    pub window_title: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub format: Option<String>,
}

impl RenderConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ChartError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ChartError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CHART_DIR})，未設定的變數保留原文
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ChartError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(output) = &self.output {
            if let Some(directory) = &output.directory {
                validate_path("output.directory", directory)?;
            }
            if let Some(format) = &output.format {
                validate_one_of("output.format", format, &SUPPORTED_FORMATS)?;
            }
            if let Some(width) = output.width {
                validate_range("output.width", width, MIN_DIMENSION, MAX_DIMENSION)?;
            }
            if let Some(height) = output.height {
                validate_range("output.height", height, MIN_DIMENSION, MAX_DIMENSION)?;
            }
        }

        if let Some(logging) = &self.logging {
            if let Some(level) = &logging.level {
                validate_one_of("logging.level", level, &LOG_LEVELS)?;
            }
            if let Some(format) = &logging.format {
                validate_one_of("logging.format", format, &LOG_FORMATS)?;
            }
        }

        Ok(())
    }

    pub fn output_directory(&self) -> Option<&str> {
        self.output.as_ref().and_then(|o| o.directory.as_deref())
    }

    pub fn output_format(&self) -> Result<Option<OutputFormat>> {
        self.output
            .as_ref()
            .and_then(|o| o.format.as_deref())
            .map(str::parse)
            .transpose()
    }

    pub fn width(&self) -> Option<u32> {
        self.output.as_ref().and_then(|o| o.width)
    }

    pub fn height(&self) -> Option<u32> {
        self.output.as_ref().and_then(|o| o.height)
    }

    pub fn show(&self) -> bool {
        self.display.as_ref().and_then(|d| d.show).unwrap_or(false)
    }

    pub fn window_title(&self) -> Option<&str> {
        self.display.as_ref().and_then(|d| d.window_title.as_deref())
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    pub fn json_logs(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.format.as_deref())
            .map(|f| f == "json")
            .unwrap_or(false)
    }
}

impl Validate for RenderConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
