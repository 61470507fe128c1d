mod bills;
mod settings;

pub use bills::{Bill, BillStore, Counter, YesNo};
pub use settings::{BillingSettings, Company, Config, PolicyKind, ScanSettings};

use crate::error::{BillbookError, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::PathBuf;

/// Get the config directory path (~/.billbook/)
pub fn config_dir() -> Result<PathBuf> {
    // First try XDG-style directories
    if let Some(proj_dirs) = ProjectDirs::from("", "", "billbook") {
        return Ok(proj_dirs.config_dir().to_path_buf());
    }

    // Fallback to ~/.billbook/
    let home = dirs_home().ok_or_else(|| {
        BillbookError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Could not determine home directory",
        ))
    })?;

    Ok(home.join(".billbook"))
}

fn dirs_home() -> Option<PathBuf> {
    std::env::var_os("HOME").map(PathBuf::from)
}

/// Load the main config.toml
pub fn load_config(config_dir: &PathBuf) -> Result<Config> {
    let path = config_dir.join("config.toml");
    if !path.exists() {
        return Err(BillbookError::ConfigFileNotFound(path));
    }
    let content = fs::read_to_string(&path)?;
    toml::from_str(&content).map_err(|e| BillbookError::ConfigParse { path, source: e })
}

/// Load bills.toml (creates an empty store if missing)
pub fn load_bills(config_dir: &PathBuf) -> Result<BillStore> {
    let path = config_dir.join("bills.toml");
    if !path.exists() {
        return Ok(BillStore::default());
    }
    let content = fs::read_to_string(&path)?;
    toml::from_str(&content).map_err(|e| BillbookError::ConfigParse { path, source: e })
}

/// Save bills.toml
pub fn save_bills(config_dir: &PathBuf, store: &BillStore) -> Result<()> {
    let path = config_dir.join("bills.toml");
    let content = toml::to_string_pretty(store).map_err(|e| {
        BillbookError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            e.to_string(),
        ))
    })?;
    fs::write(path, content)?;
    Ok(())
}

/// Template content for config.toml
pub const CONFIG_TEMPLATE: &str = r#"[company]
name = "Your Firm Name"
# mobile = "+91-98765-43210"   # optional
# email = "accounts@firm.com"  # optional

[billing]
id_format = "BILL-{year}-{seq:04}"  # e.g., BILL-2026-0001
currency = "INR"
currency_symbol = "Rs."
default_credit_days = 30
default_interest_rate = 12.0  # annual %, used when 'add' omits --rate

[interest]
# How accrued interest is computed for days past the credit window:
#   "annual-rate"  - net_amount * rate/100 / 365 * interest_days,
#                    using each bill's own rate
#   "fixed-daily"  - net_amount * daily_multiplier * interest_days
policy = "annual-rate"
daily_multiplier = 0.0005

[scan]
# Cheque-image extraction service (optional). The API key is read from
# the environment, never stored here.
# endpoint = "https://api.example.com/v1/cheque/extract"
api_key_env = "BILLBOOK_SCAN_API_KEY"
timeout_secs = 10
"#;
