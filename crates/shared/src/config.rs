//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database configuration.
    pub database: DatabaseConfig,
    /// Payroll report configuration.
    #[serde(default)]
    pub reports: ReportsConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
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
    8080
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Database connection URL.
    pub url: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Minimum number of connections in the pool.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

/// Which payslips appear in the tax-authority (PAYE) report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayeRows {
    /// Only payslips whose employee tax PIN has a classification entry.
    #[default]
    MappedPins,
    /// Every payslip in the period.
    AllPayslips,
}

/// A tax PIN with the classification label printed in the PAYE report.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClassificationEntry {
    /// Employee tax PIN.
    pub pin: String,
    /// Label such as "Primary Employee".
    pub label: String,
}

/// Payroll report configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportsConfig {
    /// Company name stamped in every report header.
    #[serde(default = "default_company_name")]
    pub company_name: String,
    /// Earliest year a report can be requested for.
    #[serde(default = "default_earliest_year")]
    pub earliest_year: i32,
    /// Whether the housing levy report carries the relief column.
    #[serde(default)]
    pub include_relief_column: bool,
    /// Row policy for the PAYE report.
    #[serde(default)]
    pub paye_rows: PayeRows,
    /// Tax PIN classification labels.
    #[serde(default)]
    pub classifications: Vec<ClassificationEntry>,
    /// Salary rule code overrides, keyed by rule name.
    #[serde(default)]
    pub rule_codes: std::collections::HashMap<String, String>,
}

impl Default for ReportsConfig {
    fn default() -> Self {
        Self {
            company_name: default_company_name(),
            earliest_year: default_earliest_year(),
            include_relief_column: false,
            paye_rows: PayeRows::default(),
            classifications: Vec::new(),
            rule_codes: std::collections::HashMap::new(),
        }
    }
}

fn default_company_name() -> String {
    "My Company".to_string()
}

fn default_earliest_year() -> i32 {
    2020
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("PAYSHEET").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
