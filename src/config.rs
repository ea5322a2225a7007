use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::models::ScoringWeights;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub recommend: RecommendSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogSettings {
    pub recipes_path: Option<String>,
    pub users_path: Option<String>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RecommendSettings {
    #[serde(default = "default_k")]
    pub default_k: usize,
    /// Upper bound on `k`; requests above it are rejected. Unbounded when unset.
    #[serde(default)]
    pub max_k: Option<usize>,
    #[serde(default = "default_diversity")]
    pub default_diversity: f64,
}

impl Default for RecommendSettings {
    fn default() -> Self {
        Self {
            default_k: default_k(),
            max_k: None,
            default_diversity: default_diversity(),
        }
    }
}

fn default_k() -> usize { 10 }
fn default_diversity() -> f64 { 0.2 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_allergy_weight")]
    pub allergy: f64,
    #[serde(default = "default_disliked_weight")]
    pub disliked: f64,
    #[serde(default = "default_diet_tag_weight")]
    pub diet_tag: f64,
    #[serde(default = "default_liked_weight")]
    pub liked: f64,
    #[serde(default = "default_cuisine_weight")]
    pub cuisine: f64,
    #[serde(default = "default_time_weight")]
    pub time: f64,
    #[serde(default = "default_cost_weight")]
    pub cost: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            allergy: default_allergy_weight(),
            disliked: default_disliked_weight(),
            diet_tag: default_diet_tag_weight(),
            liked: default_liked_weight(),
            cuisine: default_cuisine_weight(),
            time: default_time_weight(),
            cost: default_cost_weight(),
        }
    }
}

impl From<WeightsConfig> for ScoringWeights {
    fn from(config: WeightsConfig) -> Self {
        Self {
            allergy: config.allergy,
            disliked: config.disliked,
            diet_tag: config.diet_tag,
            liked: config.liked,
            cuisine: config.cuisine,
            time: config.time,
            cost: config.cost,
        }
    }
}

fn default_allergy_weight() -> f64 { -10.0 }
fn default_disliked_weight() -> f64 { -3.0 }
fn default_diet_tag_weight() -> f64 { 2.0 }
fn default_liked_weight() -> f64 { 1.5 }
fn default_cuisine_weight() -> f64 { 0.8 }
fn default_time_weight() -> f64 { 1.0 }
fn default_cost_weight() -> f64 { 1.0 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local configuration file (config/local.toml)
    /// 4. Environment variables (prefixed with MEALREC_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., MEALREC__SERVER__PORT -> server.port
            .add_source(env_source())
            .build()?;

        settings.try_deserialize::<Self>()?.validated()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(env_source())
            .build()?;

        settings.try_deserialize::<Self>()?.validated()
    }

    fn validated(self) -> Result<Self, ConfigError> {
        let diversity = self.recommend.default_diversity;
        if !(0.0..=1.0).contains(&diversity) {
            return Err(ConfigError::Message(format!(
                "recommend.default_diversity must be within [0, 1], got {}",
                diversity
            )));
        }
        Ok(self)
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("MEALREC")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
