use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] jqfeed_core::ValidationError),

    #[error(transparent)]
    Settings(#[from] jqfeed_core::SettingsError),

    #[error(transparent)]
    Vendor(#[from] jqfeed_core::VendorError),

    #[error(transparent)]
    Datafeed(#[from] jqfeed_core::DatafeedError),

    #[error("datafeed unavailable: vendor authentication failed")]
    Unavailable,

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error("datetime formatting failed: {0}")]
    Format(#[from] time::error::Format),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) | Self::Settings(_) => 2,
            Self::Unavailable => 3,
            Self::Vendor(_)
            | Self::Datafeed(_)
            | Self::Serialization(_)
            | Self::Format(_)
            | Self::Io(_) => 10,
        }
    }
}
