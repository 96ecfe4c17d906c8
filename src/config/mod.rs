use std::env;
use std::fmt;
use std::path::PathBuf;

use crate::workflows::eligibility::poverty::{
    PovertyGuideline, DEFAULT_BASE_AMOUNT, DEFAULT_PER_ADDITIONAL_MEMBER,
};

pub const DEFAULT_SESSION_PATH: &str = ".coverage-intake/session.json";
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Distinguishes runtime behavior for different stages of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration, read from the environment (and `.env` when present).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub eligibility: EligibilityConfig,
    pub storage: StorageConfig,
    pub providers: ProviderConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );
        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let guideline = PovertyGuideline {
            base_amount: positive_u32("FPL_BASE_AMOUNT", DEFAULT_BASE_AMOUNT)?,
            per_additional_member: positive_u32(
                "FPL_PER_ADDITIONAL_MEMBER",
                DEFAULT_PER_ADDITIONAL_MEMBER,
            )?,
        };

        let session_path = env::var("APP_STORAGE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_SESSION_PATH));

        let page_size = match env::var("PROVIDER_PAGE_SIZE") {
            Ok(raw) => raw
                .trim()
                .parse::<usize>()
                .map_err(|_| ConfigError::InvalidNumber {
                    var: "PROVIDER_PAGE_SIZE",
                    value: raw.clone(),
                })?,
            Err(_) => DEFAULT_PAGE_SIZE,
        };
        if page_size == 0 {
            return Err(ConfigError::InvalidPageSize);
        }

        let directory_csv = env::var("PROVIDER_DIRECTORY_CSV")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            eligibility: EligibilityConfig { guideline },
            storage: StorageConfig { session_path },
            providers: ProviderConfig {
                page_size,
                directory_csv,
            },
        })
    }
}

fn positive_u32(var: &'static str, default: u32) -> Result<u32, ConfigError> {
    let Ok(raw) = env::var(var) else {
        return Ok(default);
    };

    match raw.trim().parse::<u32>() {
        Ok(0) => Err(ConfigError::NotPositive { var }),
        Ok(value) => Ok(value),
        Err(_) => Err(ConfigError::InvalidNumber { var, value: raw }),
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Poverty guideline used for every determination.
#[derive(Debug, Clone, Copy)]
pub struct EligibilityConfig {
    pub guideline: PovertyGuideline,
}

#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub session_path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub page_size: usize,
    /// Replaces the built-in directory when set.
    pub directory_csv: Option<PathBuf>,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidNumber { var: &'static str, value: String },
    NotPositive { var: &'static str },
    InvalidPageSize,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidNumber { var, value } => {
                write!(f, "{var} must be a whole number, got '{value}'")
            }
            ConfigError::NotPositive { var } => write!(f, "{var} must be greater than zero"),
            ConfigError::InvalidPageSize => write!(f, "PROVIDER_PAGE_SIZE must be at least 1"),
        }
    }
}

impl std::error::Error for ConfigError {}
