use serde::{Deserialize, Serialize};

use crate::calc::InterestPolicy;

#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    pub company: Company,
    pub billing: BillingSettings,
    pub interest: InterestSettings,
    #[serde(default)]
    pub scan: ScanSettings,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Company {
    pub name: String,
    #[serde(default)]
    pub mobile: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct BillingSettings {
    pub id_format: String,
    pub currency: String,
    pub currency_symbol: String,
    pub default_credit_days: i64,
    #[serde(default)]
    pub default_interest_rate: f64,
}

/// Which interest formula the book runs on. Both historical behaviors are
/// supported; the choice applies uniformly to every bill.
#[derive(Debug, Deserialize, Serialize)]
pub struct InterestSettings {
    pub policy: PolicyKind,
    #[serde(default)]
    pub daily_multiplier: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum PolicyKind {
    AnnualRate,
    FixedDaily,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ScanSettings {
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            endpoint: None,
            api_key_env: default_api_key_env(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_api_key_env() -> String {
    "BILLBOOK_SCAN_API_KEY".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Config {
    pub fn interest_policy(&self) -> InterestPolicy {
        match self.interest.policy {
            PolicyKind::AnnualRate => InterestPolicy::AnnualRate,
            PolicyKind::FixedDaily => InterestPolicy::FixedDaily {
                multiplier: self.interest.daily_multiplier,
            },
        }
    }
}
