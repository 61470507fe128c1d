use std::time::Duration;

use serde::Deserialize;
use ureq::Agent;

use crate::calc::normalize_date;
use crate::config::ScanSettings;
use crate::error::{BillbookError, Result};

/// Candidate receipt fields extracted from a cheque image. Every field is
/// a guess the operator confirms; none of them is trusted downstream
/// without the same validation as manual entry.
#[derive(Debug, Deserialize, Default)]
pub struct ChequeFields {
    #[serde(default)]
    pub party: Option<String>,
    #[serde(default)]
    pub bank_name: Option<String>,
    #[serde(default)]
    pub cheque_number: Option<String>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub date: Option<String>,
}

/// Send the cheque image to the configured extraction service and decode
/// the candidate fields it returns. The API key comes from the environment
/// variable named in config, never from disk.
pub fn extract_cheque_fields(settings: &ScanSettings, image: &[u8]) -> Result<ChequeFields> {
    let endpoint = settings
        .endpoint
        .as_deref()
        .ok_or(BillbookError::ScanNotConfigured)?;
    let api_key = std::env::var(&settings.api_key_env)
        .map_err(|_| BillbookError::ScanKeyMissing(settings.api_key_env.clone()))?;

    let agent: Agent = Agent::config_builder()
        .timeout_global(Some(Duration::from_secs(settings.timeout_secs)))
        .build()
        .into();

    let body: String = agent
        .post(endpoint)
        .header("Authorization", &format!("Bearer {api_key}"))
        .header("Content-Type", "application/octet-stream")
        .send(image)
        .map_err(|e| BillbookError::ScanFailed(e.to_string()))?
        .body_mut()
        .read_to_string()
        .map_err(|e| BillbookError::ScanFailed(e.to_string()))?;

    let mut fields: ChequeFields = serde_json::from_str(&body)
        .map_err(|e| BillbookError::ScanFailed(format!("unexpected response: {e}")))?;

    // Keep the date guess only if it survives normalization.
    if let Some(ref date) = fields.date {
        if normalize_date(date).is_none() {
            fields.date = None;
        }
    }

    Ok(fields)
}
