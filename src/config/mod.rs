pub mod roster;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::domain::model::{default_roster, Person};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use toml_config::TourConfig;

#[cfg(feature = "cli")]
use clap::Parser;

pub const DEFAULT_TOUR_NAME: &str = "functional tour";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "fn-tour")]
#[command(about = "A guided tour of closures, streams, comparators and map utilities")]
pub struct CliConfig {
    #[arg(long, help = "TOML tour configuration file")]
    pub config: Option<String>,

    #[arg(long, help = "CSV roster with first_name,last_name,age columns")]
    pub roster: Option<String>,

    #[arg(long, value_delimiter = ',', help = "Run only these demos, in this order")]
    pub only: Vec<String>,

    #[arg(long, value_enum, help = "Output format [default: text]")]
    pub format: Option<OutputFormat>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log CPU and memory usage after each demo")]
    pub monitor: bool,

    #[arg(long, help = "List the available demos and exit")]
    pub list: bool,
}

/// 合併 CLI、TOML 與 CSV 之後的最終設定
///
/// 名單優先順序：CSV、TOML 的 `[[roster]]`、內建名單。
/// 示範選擇：`--only` 優先於 TOML 的 `tour.demos`。
#[derive(Debug, Clone)]
pub struct TourSettings {
    pub tour_name: String,
    pub roster: Vec<Person>,
    pub demos: Option<Vec<String>>,
    pub format: OutputFormat,
    pub monitor: bool,
}

impl Default for TourSettings {
    fn default() -> Self {
        Self {
            tour_name: DEFAULT_TOUR_NAME.to_string(),
            roster: default_roster(),
            demos: None,
            format: OutputFormat::Text,
            monitor: false,
        }
    }
}

impl TourSettings {
    pub fn from_sources(
        config: Option<TourConfig>,
        csv_roster: Option<Vec<Person>>,
        only: Vec<String>,
        format: Option<OutputFormat>,
        monitor: bool,
    ) -> Self {
        let mut settings = Self::default();

        if let Some(config) = config {
            settings.format = config.output_format().unwrap_or_default();
            settings.monitor = config.monitoring_enabled();
            settings.demos = config.tour.demos;
            settings.tour_name = config.tour.name;
            if let Some(roster) = config.roster {
                settings.roster = roster;
            }
        }

        if let Some(roster) = csv_roster {
            settings.roster = roster;
        }
        if !only.is_empty() {
            settings.demos = Some(only);
        }
        if let Some(format) = format {
            settings.format = format;
        }
        settings.monitor |= monitor;

        settings
    }

    #[cfg(feature = "cli")]
    pub fn from_cli(cli: &CliConfig) -> Result<Self> {
        use crate::utils::validation::{validate_file_extension, validate_path};

        let config = match &cli.config {
            Some(path) => {
                validate_path("config", path)?;
                validate_file_extension("config", path, &["toml"])?;
                let config = TourConfig::from_file(path)?;
                config.validate()?;
                tracing::debug!("Loaded tour configuration from {}", path);
                Some(config)
            }
            None => None,
        };

        let csv_roster = match &cli.roster {
            Some(path) => {
                validate_path("roster", path)?;
                validate_file_extension("roster", path, &["csv"])?;
                Some(roster::load_roster(path)?)
            }
            None => None,
        };

        let settings = Self::from_sources(
            config,
            csv_roster,
            cli.only.clone(),
            cli.format,
            cli.monitor,
        );
        settings.validate()?;
        Ok(settings)
    }
}

impl ConfigProvider for TourSettings {
    fn tour_name(&self) -> &str {
        &self.tour_name
    }

    fn roster(&self) -> &[Person] {
        &self.roster
    }

    fn selected_demos(&self) -> Option<&[String]> {
        self.demos.as_deref()
    }
}

impl Validate for TourSettings {
    fn validate(&self) -> Result<()> {
        crate::utils::validation::validate_non_empty_string("tour.name", &self.tour_name)?;
        if let Some(demos) = &self.demos {
            crate::utils::validation::validate_unique("demos", demos)?;
        }
        roster::validate_roster(&self.roster)
    }
}
