use crate::config::ConfigError;
use crate::session::StoreError;
use crate::telemetry::TelemetryError;
use crate::workflows::intake::SubmitError;
use crate::workflows::providers::ProviderImportError;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Store(StoreError),
    ProviderImport(ProviderImportError),
    Submission(SubmitError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Store(err) => write!(f, "session store error: {}", err),
            AppError::ProviderImport(err) => write!(f, "provider import error: {}", err),
            AppError::Submission(err) => write!(f, "form submission rejected: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Store(err) => Some(err),
            AppError::ProviderImport(err) => Some(err),
            AppError::Submission(err) => Some(err),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<StoreError> for AppError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<ProviderImportError> for AppError {
    fn from(value: ProviderImportError) -> Self {
        Self::ProviderImport(value)
    }
}

impl From<SubmitError> for AppError {
    fn from(value: SubmitError) -> Self {
        Self::Submission(value)
    }
}
