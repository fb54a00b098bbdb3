use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub generator: GeneratorSettings,
    #[serde(default)]
    pub refresh: RefreshSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub debug: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8050
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            debug: false,
        }
    }
}

impl ServerSettings {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct GeneratorSettings {
    #[serde(default = "default_start_date")]
    pub start_date: NaiveDate,
    #[serde(default = "default_end_date")]
    pub end_date: NaiveDate,
    #[serde(default = "default_sales_mean")]
    pub sales_mean: f64,
    #[serde(default = "default_sales_std_dev")]
    pub sales_std_dev: f64,
    #[serde(default = "default_revenue_mean")]
    pub revenue_mean: f64,
    #[serde(default = "default_revenue_std_dev")]
    pub revenue_std_dev: f64,
    #[serde(default = "default_orders_lambda")]
    pub orders_lambda: f64,
    /// Pin the random source for reproducible renders.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default()
}

fn default_end_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 12, 31).unwrap_or_default()
}

fn default_sales_mean() -> f64 {
    1000.0
}

fn default_sales_std_dev() -> f64 {
    200.0
}

fn default_revenue_mean() -> f64 {
    15000.0
}

fn default_revenue_std_dev() -> f64 {
    3000.0
}

fn default_orders_lambda() -> f64 {
    50.0
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            start_date: default_start_date(),
            end_date: default_end_date(),
            sales_mean: default_sales_mean(),
            sales_std_dev: default_sales_std_dev(),
            revenue_mean: default_revenue_mean(),
            revenue_std_dev: default_revenue_std_dev(),
            orders_lambda: default_orders_lambda(),
            seed: None,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct RefreshSettings {
    /// Rebuild the product table on every refresh instead of once at startup.
    #[serde(default)]
    pub rebuild_table: bool,
}

/// Defaults, then `config/dashboard.{toml,json,...}` if present, then
/// `DASHBOARD__SECTION__KEY` environment variables.
pub fn load_app_config() -> anyhow::Result<AppConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/dashboard").required(false))
        .add_source(config::Environment::with_prefix("DASHBOARD").separator("__"))
        .build()?;

    Ok(settings.try_deserialize()?)
}
