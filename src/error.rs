use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BillbookError {
    #[error("Config directory not found at {0}. Run 'billbook init' to create it.")]
    ConfigNotFound(PathBuf),

    #[error("Config file not found: {0}")]
    ConfigFileNotFound(PathBuf),

    #[error("Failed to parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config directory already exists at {0}")]
    AlreadyInitialized(PathBuf),

    #[error("Bill '{0}' not found in the bill book")]
    BillNotFound(String),

    #[error("Invalid bill index '{0}'. Use 'billbook list' to see available bills.")]
    InvalidBillIndex(String),

    #[error("Invalid date '{0}'. Accepted formats: DD/MM/YYYY, YYYY-MM-DD.")]
    InvalidDate(String),

    #[error("Invalid status filter '{0}'. Use 'pending', 'overdue', 'interest-pending', or 'settled'.")]
    InvalidStatusFilter(String),

    #[error("Amount must be greater than zero")]
    InvalidAmount,

    #[error("No receipt recorded for {0}")]
    NoReceipt(String),

    #[error("Allocation needs at least one bill reference")]
    NoAllocationTargets,

    #[error("Cheque scan endpoint not configured. Set [scan] endpoint in config.toml.")]
    ScanNotConfigured,

    #[error("Cheque scan API key missing. Set the {0} environment variable.")]
    ScanKeyMissing(String),

    #[error("Cheque scan failed: {0}")]
    ScanFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BillbookError>;
