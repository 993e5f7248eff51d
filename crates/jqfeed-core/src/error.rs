use thiserror::Error;

use crate::vendor::VendorError;

/// Validation errors for request and domain parsing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("symbol cannot be empty")]
    EmptySymbol,

    #[error("invalid exchange '{value}', expected one of SSE, SZSE, BSE, CFFEX, SHFE, DCE, CZCE, INE, GFEX")]
    InvalidExchange { value: String },
    #[error("invalid interval '{value}', expected one of 1m, 1h, d, w, tick")]
    InvalidInterval { value: String },

    #[error("datetime must be RFC3339 or 'YYYY-MM-DD[ HH:MM[:SS]]': '{value}'")]
    InvalidDateTime { value: String },
    #[error("history request start must not be after end")]
    InvertedRange,
}

/// Errors raised while loading datafeed settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("environment variable '{name}' is not set")]
    MissingEnv { name: &'static str },

    #[error("settings key '{key}' is missing or empty")]
    MissingKey { key: &'static str },

    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse settings file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors propagated out of a history query.
///
/// Authentication failures are not represented here; they surface as the
/// "unavailable" result of [`crate::Datafeed::query_bar_history`].
#[derive(Debug, Error)]
pub enum DatafeedError {
    #[error(transparent)]
    Vendor(#[from] VendorError),
}
