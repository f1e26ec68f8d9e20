use crate::app::demos;
use crate::config::OutputFormat;
use crate::config::roster::validate_roster;
use crate::domain::model::Person;
use crate::utils::error::{Result, TourError};
use crate::utils::validation::{validate_non_empty_string, validate_unique, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TourConfig {
    pub tour: TourSection,
    pub output: Option<OutputConfig>,
    pub monitoring: Option<MonitoringConfig>,
    pub roster: Option<Vec<Person>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TourSection {
    pub name: String,
    pub description: Option<String>,
    pub demos: Option<Vec<String>>, // 示範執行順序
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
}

impl TourConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${TOUR_NAME})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}")?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn selected_demos(&self) -> Option<&[String]> {
        self.tour.demos.as_deref()
    }

    pub fn output_format(&self) -> Option<OutputFormat> {
        self.output.as_ref().and_then(|o| o.format)
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }
}

impl Validate for TourConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("tour.name", &self.tour.name)?;

        if let Some(selected) = self.selected_demos() {
            validate_unique("tour.demos", selected)?;
            let known = demos::names();
            if let Some(unknown) = selected.iter().find(|name| !known.contains(&name.as_str())) {
                return Err(TourError::UnknownDemo {
                    name: unknown.clone(),
                });
            }
        }

        if let Some(roster) = &self.roster {
            validate_roster(roster)?;
        }

        Ok(())
    }
}
