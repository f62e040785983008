//! Scores & Attributes credit report, as handed back after key normalization.
//!
//! Every field may be missing on some reports, so everything is optional and
//! unknown keys are retained in `extra`. The service is loose with types too:
//! scalars arrive as strings or numbers, sections as `null`. A leaf of the
//! wrong shape reads as absent and a malformed list element is skipped, so
//! one odd value never costs the caller the whole report.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use serde_with::{serde_as, DefaultOnError, DeserializeAs, VecSkipError};

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreditReport {
    #[serde_as(deserialize_as = "LenientString")]
    pub status: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnError")]
    pub consumers: Option<Consumers>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Consumers {
    #[serde_as(deserialize_as = "DefaultOnError<Option<VecSkipError<_>>>")]
    pub equifax_us_consumer_credit_report: Option<Vec<ConsumerReport>>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConsumerReport {
    #[serde_as(deserialize_as = "LenientString")]
    pub identifier: Option<String>,
    #[serde_as(deserialize_as = "LenientString")]
    pub customer_reference_number: Option<String>,
    #[serde_as(deserialize_as = "LenientString")]
    pub customer_number: Option<String>,
    #[serde_as(deserialize_as = "LenientString")]
    pub consumer_referral_code: Option<String>,
    #[serde_as(deserialize_as = "LenientString")]
    pub multiple_report_indicator: Option<String>,
    #[serde_as(deserialize_as = "LenientString")]
    pub ecoa_inquiry_type: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnError")]
    pub hit_code: Option<Code>,
    #[serde_as(deserialize_as = "LenientString")]
    pub file_since_date: Option<String>,
    #[serde_as(deserialize_as = "LenientString")]
    pub last_activity_date: Option<String>,
    #[serde_as(deserialize_as = "LenientString")]
    pub report_date: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnError")]
    pub subject_name: Option<Name>,
    #[serde_as(deserialize_as = "LenientString")]
    pub subject_social_num: Option<String>,
    /// number or string, depending on the report
    pub birth_date: Option<Value>,
    #[serde_as(deserialize_as = "LenientString")]
    pub address_discrepancy_indicator: Option<String>,
    #[serde_as(deserialize_as = "LenientString")]
    pub impacted_data_indicator: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnError")]
    pub fraud_victim_indicator: Option<Code>,
    #[serde_as(deserialize_as = "DefaultOnError<Option<VecSkipError<_>>>")]
    pub fraud_id_scan_alert_codes: Option<Vec<Code>>,
    #[serde_as(deserialize_as = "DefaultOnError<Option<VecSkipError<_>>>")]
    pub addresses: Option<Vec<Address>>,
    #[serde_as(deserialize_as = "DefaultOnError<Option<VecSkipError<_>>>")]
    pub former_names: Option<Vec<Name>>,
    #[serde_as(deserialize_as = "DefaultOnError<Option<VecSkipError<_>>>")]
    pub trades: Option<Vec<Value>>,
    #[serde_as(deserialize_as = "DefaultOnError<Option<VecSkipError<_>>>")]
    pub inquiries: Option<Vec<Inquiry>>,
    #[serde_as(deserialize_as = "DefaultOnError<Option<VecSkipError<_>>>")]
    pub employments: Option<Vec<Employment>>,
    #[serde_as(deserialize_as = "DefaultOnError<Option<VecSkipError<_>>>")]
    pub bankruptcies: Option<Vec<Bankruptcy>>,
    #[serde_as(deserialize_as = "DefaultOnError<Option<VecSkipError<_>>>")]
    pub consumer_statements: Option<Vec<ConsumerStatement>>,
    #[serde_as(deserialize_as = "DefaultOnError<Option<VecSkipError<_>>>")]
    pub models: Option<Vec<Model>>,
    #[serde_as(deserialize_as = "DefaultOnError<Option<VecSkipError<_>>>")]
    pub ofac_alerts: Option<Vec<OfacAlert>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Code {
    #[serde_as(deserialize_as = "LenientString")]
    pub code: Option<String>,
    #[serde_as(deserialize_as = "LenientString")]
    pub description: Option<String>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Name {
    #[serde_as(deserialize_as = "LenientString")]
    pub last_name: Option<String>,
    #[serde_as(deserialize_as = "LenientString")]
    pub first_name: Option<String>,
    #[serde_as(deserialize_as = "LenientString")]
    pub middle_initial: Option<String>,
    #[serde_as(deserialize_as = "LenientString")]
    pub suffix: Option<String>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Address {
    #[serde_as(deserialize_as = "LenientString")]
    pub address_type: Option<String>,
    #[serde_as(deserialize_as = "LenientString")]
    pub house_number: Option<String>,
    #[serde_as(deserialize_as = "LenientString")]
    pub street_name: Option<String>,
    #[serde_as(deserialize_as = "LenientString")]
    pub street_type: Option<String>,
    #[serde_as(deserialize_as = "LenientString")]
    pub city_name: Option<String>,
    #[serde_as(deserialize_as = "LenientString")]
    pub state_abbreviation: Option<String>,
    #[serde_as(deserialize_as = "LenientString")]
    pub zip_code: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnError")]
    pub source_of_address: Option<Code>,
    #[serde_as(deserialize_as = "DefaultOnError")]
    pub address_variance_indicator: Option<Code>,
    #[serde_as(deserialize_as = "LenientString")]
    pub address_line1: Option<String>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConsumerStatement {
    #[serde_as(deserialize_as = "LenientString")]
    pub date_reported: Option<String>,
    #[serde_as(deserialize_as = "LenientString")]
    pub date_purged: Option<String>,
    #[serde_as(deserialize_as = "LenientString")]
    pub statement: Option<String>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Model {
    #[serde(rename = "type")]
    #[serde_as(deserialize_as = "LenientString")]
    pub model_type: Option<String>,
    pub fico_score_indicator_code: Option<Value>,
    /// number or numeric string
    pub score: Option<Value>,
    #[serde_as(deserialize_as = "DefaultOnError<Option<VecSkipError<_>>>")]
    pub reasons: Option<Vec<Code>>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OfacAlert {
    #[serde_as(deserialize_as = "LenientString")]
    pub revised_legal_verbiage_indicator: Option<String>,
    #[serde_as(deserialize_as = "LenientString")]
    pub member_firm_code: Option<String>,
    #[serde_as(deserialize_as = "LenientString")]
    pub cdc_transaction_date: Option<String>,
    #[serde_as(deserialize_as = "LenientString")]
    pub cdc_transaction_time: Option<String>,
    #[serde_as(deserialize_as = "LenientString")]
    pub transaction_type: Option<String>,
    #[serde_as(deserialize_as = "LenientString")]
    pub cdc_response_code: Option<String>,
    #[serde_as(deserialize_as = "LenientString")]
    pub legal_verbiage: Option<String>,
    #[serde_as(deserialize_as = "LenientString")]
    pub data_segment_regulated: Option<String>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Inquiry {
    #[serde(rename = "type")]
    #[serde_as(deserialize_as = "LenientString")]
    pub inquiry_type: Option<String>,
    #[serde_as(deserialize_as = "LenientString")]
    pub industry_code: Option<String>,
    #[serde_as(deserialize_as = "LenientString")]
    pub inquiry_date: Option<String>,
    #[serde_as(deserialize_as = "LenientString")]
    pub customer_number: Option<String>,
    #[serde_as(deserialize_as = "LenientString")]
    pub customer_name: Option<String>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Employment {
    #[serde_as(deserialize_as = "LenientString")]
    pub identifier: Option<String>,
    #[serde_as(deserialize_as = "LenientString")]
    pub occupation: Option<String>,
    #[serde_as(deserialize_as = "LenientString")]
    pub employer: Option<String>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Bankruptcy {
    #[serde_as(deserialize_as = "LenientString")]
    pub customer_number: Option<String>,
    #[serde(rename = "type")]
    #[serde_as(deserialize_as = "LenientString")]
    pub bankruptcy_type: Option<String>,
    #[serde_as(deserialize_as = "LenientString")]
    pub filer: Option<String>,
    #[serde_as(deserialize_as = "LenientString")]
    pub industry_code: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnError")]
    pub current_intent_or_disposition_code: Option<Code>,
    #[serde_as(deserialize_as = "LenientString")]
    pub date_filed: Option<String>,
}

/// Any scalar read as text; null, lists and objects read as absent.
struct LenientString;

impl<'de> DeserializeAs<'de, Option<String>> for LenientString {
    fn deserialize_as<D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        })
    }
}
