use chrono::Datelike;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Default)]
pub struct BillStore {
    pub counter: Counter,
    #[serde(default)]
    pub bills: Vec<Bill>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Counter {
    pub last_number: u32,
    pub last_year: u32,
}

impl Default for Counter {
    fn default() -> Self {
        Self {
            last_number: 0,
            last_year: chrono::Utc::now().year() as u32,
        }
    }
}

/// A single trade bill as stored in bills.toml. Date fields hold the raw
/// text as entered (several encodings are accepted, and legacy rows may
/// carry anything); normalization happens on every read, never on write.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Bill {
    pub id: String,
    pub bill_no: String,
    pub party: String,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub bill_date: String,
    pub net_amount: f64,
    pub credit_days: i64,
    #[serde(default)]
    pub rec_date: Option<String>,
    #[serde(default)]
    pub rec_amount: f64,
    #[serde(default)]
    pub interest_paid: YesNo,
    #[serde(default)]
    pub interest_rate: f64,
    #[serde(default)]
    pub mobile: Option<String>,
    #[serde(default)]
    pub cheque_number: Option<String>,
    #[serde(default)]
    pub bank_name: Option<String>,
}

impl Bill {
    pub fn outstanding(&self) -> f64 {
        self.net_amount - self.rec_amount
    }
}

/// Yes/No flag, serialized as the literal strings "Yes"/"No" that the
/// historical data carries.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum YesNo {
    Yes,
    #[default]
    No,
}

impl YesNo {
    pub fn is_yes(self) -> bool {
        self == YesNo::Yes
    }
}

impl std::fmt::Display for YesNo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            YesNo::Yes => write!(f, "Yes"),
            YesNo::No => write!(f, "No"),
        }
    }
}
