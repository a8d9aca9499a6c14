//! Configuration management for riserboard
//!
//! This module handles loading, validation, and management of
//! riserboard configuration from YAML files.

pub mod error;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub use error::{ConfigError, ConfigErrorCode, ConfigErrorDetails, ConfigResult};

// ==================== Configuration Types ====================

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,
    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8081
}

/// Dataset location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Directory holding the dataset
    #[serde(default = "default_data_path")]
    pub path: PathBuf,
    /// Dataset file name
    #[serde(default = "default_data_file")]
    pub file: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: default_data_path(),
            file: default_data_file(),
        }
    }
}

fn default_data_path() -> PathBuf {
    PathBuf::from("./data")
}

fn default_data_file() -> String {
    "data.json".to_string()
}

/// Dashboard labels and derived-metric settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Page title
    #[serde(default = "default_title")]
    pub title: String,
    /// Month abbreviations, January first
    #[serde(default = "default_month_labels")]
    pub month_labels: Vec<String>,
    #[serde(default = "default_revenue_label")]
    pub revenue_label: String,
    #[serde(default = "default_count_label")]
    pub count_label: String,
    #[serde(default = "default_margin_label")]
    pub margin_label: String,
    /// Dataset label of the monthly sales bar chart
    #[serde(default = "default_sales_series_label")]
    pub sales_series_label: String,
    /// Unit cost as a fraction of price when a record has no usable cost
    #[serde(default = "default_cost_ratio")]
    pub default_cost_ratio: f64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            month_labels: default_month_labels(),
            revenue_label: default_revenue_label(),
            count_label: default_count_label(),
            margin_label: default_margin_label(),
            sales_series_label: default_sales_series_label(),
            default_cost_ratio: default_cost_ratio(),
        }
    }
}

fn default_title() -> String {
    "Riser Dashboard".to_string()
}

fn default_month_labels() -> Vec<String> {
    ["Ene", "Feb", "Mar", "Abr", "May", "Jun", "Jul", "Ago", "Sep", "Oct", "Nov", "Dic"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_revenue_label() -> String {
    "Ventas Totales".to_string()
}

fn default_count_label() -> String {
    "Modelos Disponibles".to_string()
}

fn default_margin_label() -> String {
    "Margen de Reventa Promedio".to_string()
}

fn default_sales_series_label() -> String {
    "Ventas ($)".to_string()
}

fn default_cost_ratio() -> f64 {
    0.5
}

/// Chart and card colors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaletteConfig {
    #[serde(default = "default_primary")]
    pub primary: String,
    #[serde(default = "default_secondary")]
    pub secondary: String,
    #[serde(default = "default_success")]
    pub success: String,
    #[serde(default = "default_pending")]
    pub pending: String,
    #[serde(default = "default_cancelled")]
    pub cancelled: String,
    /// Doughnut colors for the fourth status onwards, cycled
    #[serde(default = "default_extra_colors")]
    pub extra: Vec<String>,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            primary: default_primary(),
            secondary: default_secondary(),
            success: default_success(),
            pending: default_pending(),
            cancelled: default_cancelled(),
            extra: default_extra_colors(),
        }
    }
}

fn default_primary() -> String {
    "#1100ff".to_string()
}

fn default_secondary() -> String {
    "#0f0f0f".to_string()
}

fn default_success() -> String {
    "#28a745".to_string()
}

fn default_pending() -> String {
    "#ffc107".to_string()
}

fn default_cancelled() -> String {
    "#b91c1c".to_string()
}

fn default_extra_colors() -> Vec<String> {
    vec![
        "#6366f1".to_string(),
        "#14b8a6".to_string(),
        "#f97316".to_string(),
        "#64748b".to_string(),
    ]
}

/// Currency and number formatting
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrencyConfig {
    /// Symbol prefixed to amounts
    #[serde(default = "default_symbol")]
    pub symbol: String,
    /// Number of decimal places
    #[serde(default = "default_decimal_places")]
    pub decimal_places: u32,
    /// Thousands separator
    #[serde(default = "default_thousands_sep")]
    pub thousands_separator: String,
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            symbol: default_symbol(),
            decimal_places: default_decimal_places(),
            thousands_separator: default_thousands_sep(),
        }
    }
}

fn default_symbol() -> String {
    "$".to_string()
}

fn default_decimal_places() -> u32 {
    2
}

fn default_thousands_sep() -> String {
    ",".to_string()
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level() }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Dataset location
    #[serde(default)]
    pub data: DataConfig,
    /// Labels and metric settings
    #[serde(default)]
    pub dashboard: DashboardConfig,
    /// Colors
    #[serde(default)]
    pub palette: PaletteConfig,
    /// Currency settings
    #[serde(default)]
    pub currency: CurrencyConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ConfigError::FileNotFound {
                path: path.to_string_lossy().to_string(),
            },
            _ => ConfigError::Unreadable {
                path: path.to_string_lossy().to_string(),
                message: e.to_string(),
            },
        })?;

        Self::from_yaml(&content)
    }

    /// Load configuration, falling back to defaults when the file does not exist
    pub fn load_or_default(path: impl AsRef<Path>) -> ConfigResult<Self> {
        match Self::load(path.as_ref()) {
            Err(ConfigError::FileNotFound { .. }) => Ok(Config::default()),
            other => other,
        }
    }

    /// Parse and validate configuration from YAML text
    pub fn from_yaml(content: &str) -> ConfigResult<Self> {
        let config: Config = serde_yaml::from_str(content)
            .map_err(|e| ConfigError::InvalidYaml { message: e.to_string() })?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> ConfigResult<()> {
        if self.server.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.port".to_string(),
                reason: "Port must be greater than 0".to_string(),
            });
        }

        if self.dashboard.month_labels.len() != 12 {
            return Err(ConfigError::InvalidValue {
                field: "dashboard.month_labels".to_string(),
                reason: format!(
                    "Exactly 12 month labels are required, got {}",
                    self.dashboard.month_labels.len()
                ),
            });
        }

        let ratio = self.dashboard.default_cost_ratio;
        if !(0.0..=1.0).contains(&ratio) {
            return Err(ConfigError::InvalidValue {
                field: "dashboard.default_cost_ratio".to_string(),
                reason: "Cost ratio must be between 0 and 1".to_string(),
            });
        }

        if self.currency.decimal_places > 10 {
            return Err(ConfigError::InvalidValue {
                field: "currency.decimal_places".to_string(),
                reason: "Decimal places must be between 0 and 10".to_string(),
            });
        }

        if self.data.file.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "data.file".to_string(),
                reason: "A dataset file name is required".to_string(),
            });
        }

        Ok(())
    }

    /// The commented default configuration, as printed by `--print-default-config`
    pub fn generate_default() -> &'static str {
        include_str!("../templates/default_config.yaml")
    }

    /// Get the full path to the dataset
    pub fn data_file_path(&self) -> PathBuf {
        self.data.path.join(&self.data.file)
    }
}
