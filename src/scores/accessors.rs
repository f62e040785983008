//! Read-only helpers over a `CreditReport`.
//!
//! Each one looks at the first consumer report carrying the section it needs
//! and answers "nothing" when that section is absent or empty.

use serde_json::Value;

use crate::models::credit_report::{ConsumerReport, CreditReport};

const FICO_MODEL: &str = "FICO";
const FROZEN_HIT_CODE: &str = "A";
// alert code 8 is informational, not a fraud indication
const NON_FRAUD_ALERT_CODE: &str = "8";

impl CreditReport {
    pub fn consumer_reports(&self) -> &[ConsumerReport] {
        self.consumers
            .as_ref()
            .and_then(|c| c.equifax_us_consumer_credit_report.as_deref())
            .unwrap_or(&[])
    }

    /// FICO score of the first report with models; `None` for a missing or zero score.
    pub fn fico_score(&self) -> Option<u32> {
        let models = self.consumer_reports().iter().find_map(|r| r.models.as_ref())?;
        let fico = models.iter().find(|m| m.model_type.as_deref() == Some(FICO_MODEL))?;
        fico.score.as_ref().and_then(score_value).filter(|score| *score != 0)
    }

    /// Credit is frozen when the first report with a hit code has code `A`.
    pub fn is_frozen(&self) -> bool {
        self.consumer_reports()
            .iter()
            .find_map(|r| r.hit_code.as_ref())
            .is_some_and(|hit| hit.code.as_deref() == Some(FROZEN_HIT_CODE))
    }

    /// Descriptions of the fraud alerts, or `None` when there is nothing to report.
    pub fn is_fraud(&self) -> Option<Vec<String>> {
        let codes = self
            .consumer_reports()
            .iter()
            .find_map(|r| r.fraud_id_scan_alert_codes.as_ref())?;
        let hits: Vec<String> = codes
            .iter()
            .filter(|c| c.code.as_deref() != Some(NON_FRAUD_ALERT_CODE))
            .filter_map(|c| c.description.clone())
            .collect();
        (!hits.is_empty()).then_some(hits)
    }

    /// `"[dateFiled] disposition"` for each bankruptcy on the first report listing any.
    pub fn bankruptcies(&self) -> Option<Vec<String>> {
        let records = self.consumer_reports().iter().find_map(|r| r.bankruptcies.as_ref())?;
        if records.is_empty() {
            return None;
        }
        Some(
            records
                .iter()
                .map(|bk| {
                    format!(
                        "[{}] {}",
                        bk.date_filed.as_deref().unwrap_or_default(),
                        bk.current_intent_or_disposition_code
                            .as_ref()
                            .and_then(|c| c.description.as_deref())
                            .unwrap_or_default()
                    )
                })
                .collect(),
        )
    }
}

/// Whole, non-negative scores only; `700.0` reads as 700, `685.5` as nothing.
fn score_value(score: &Value) -> Option<u32> {
    let whole = match score {
        Value::Number(n) => n.as_u64().or_else(|| n.as_f64().and_then(whole_number))?,
        Value::String(s) => {
            let s = s.trim();
            s.parse::<u64>().ok().or_else(|| s.parse::<f64>().ok().and_then(whole_number))?
        }
        _ => return None,
    };
    u32::try_from(whole).ok()
}

fn whole_number(f: f64) -> Option<u64> {
    (f.is_finite() && f >= 0.0 && f.fract() == 0.0 && f <= u32::MAX as f64).then_some(f as u64)
}
