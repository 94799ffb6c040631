use crate::codec::{EnumCodec, DEFAULT_SEPARATORS};
use crate::geo::CoordinateUnit;
use crate::utils::error::{ExtkitError, Result};
use crate::utils::logger::{LogFormat, LOG_LEVELS};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

const DEFAULT_PRECISION: usize = 6;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtkitConfig {
    pub logging: Option<LoggingConfig>,
    pub geo: Option<GeoConfig>,
    pub enum_parsing: Option<EnumParsingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub verbose: Option<bool>,
    pub format: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeoConfig {
    pub default_unit: Option<String>,
    pub precision: Option<usize>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnumParsingConfig {
    pub separators: Option<String>,
}

impl ExtkitConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ExtkitError::ConfigError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${EXTKIT_UNIT})，未設定的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ExtkitError::ConfigError {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        if let Some(logging) = &self.logging {
            if let Some(level) = logging.level.as_deref() {
                validation::validate_one_of("logging.level", level.trim(), LOG_LEVELS)?;
            }
            if let Some(format) = logging.format.as_deref() {
                let formats = LogFormat::to_description_list();
                validation::validate_one_of("logging.format", format.trim(), &formats)?;
            }
        }

        if let Some(geo) = &self.geo {
            if let Some(unit) = geo.default_unit.as_deref() {
                let names = CoordinateUnit::to_ordered_name_list();
                validation::validate_one_of("geo.default_unit", unit, &names)?;
            }
            if let Some(precision) = geo.precision {
                validation::validate_range("geo.precision", precision, 0, 12)?;
            }
        }

        if let Some(separators) = self
            .enum_parsing
            .as_ref()
            .and_then(|e| e.separators.as_deref())
        {
            validation::validate_non_empty_string("enum_parsing.separators", separators)?;
        }

        Ok(())
    }

    pub fn verbose(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.verbose)
            .unwrap_or(false)
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    pub fn log_format(&self) -> LogFormat {
        LogFormat::from_config(self.logging.as_ref().and_then(|l| l.format.as_deref()))
    }

    /// 預設座標軸，未設定或無法辨識時為 Latitude
    pub fn default_unit(&self) -> CoordinateUnit {
        CoordinateUnit::to_enum(
            self.geo.as_ref().and_then(|g| g.default_unit.as_deref()),
            CoordinateUnit::Latitude,
        )
    }

    pub fn precision(&self) -> usize {
        self.geo
            .as_ref()
            .and_then(|g| g.precision)
            .unwrap_or(DEFAULT_PRECISION)
    }

    pub fn separators(&self) -> Vec<char> {
        self.enum_parsing
            .as_ref()
            .and_then(|e| e.separators.as_deref())
            .map(|s| s.chars().filter(|c| !c.is_whitespace()).collect())
            .unwrap_or_else(|| DEFAULT_SEPARATORS.to_vec())
    }
}

impl Validate for ExtkitConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
