//! Wire shape of a Scores & Attributes report request.

use serde::Serialize;

pub const CURRENT: &str = "current";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRequest {
    pub consumers: ConsumerInput,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_reference_identifier: Option<String>,
    pub customer_configuration: CustomerConfiguration,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsumerInput {
    pub name: Vec<NameInput>,
    pub social_num: Vec<NumberInput>,
    pub phone_numbers: Vec<NumberInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    pub addresses: Vec<AddressInput>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NameInput {
    pub identifier: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberInput {
    pub identifier: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressInput {
    pub identifier: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub house_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apartment_number: Option<String>,
    pub city: String,
    pub state: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerConfiguration {
    #[serde(rename = "equifaxUSConsumerCreditReport")]
    pub equifax_us_consumer_credit_report: CreditReportConfiguration,
}

/// Member credentials plus the fixed product selection this client always asks for.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditReportConfiguration {
    pub member_number: String,
    pub security_code: String,
    pub code_description_required: bool,
    pub customer_code: String,
    pub fixed_inquiry_format: String,
    pub multiple_report_indicator: String,
    pub file_selection_level: String,
    pub months_for_inquiry: String,
    pub plain_language: String,
    #[serde(rename = "ECOAInquiryType")]
    pub ecoa_inquiry_type: String,
    pub optional_feature_code: Vec<String>,
    pub vendor_identification_code: String,
}

impl CreditReportConfiguration {
    pub fn new(member_number: &str, security_code: &str, customer_code: &str) -> Self {
        Self {
            member_number: member_number.to_owned(),
            security_code: security_code.to_owned(),
            code_description_required: true,
            customer_code: customer_code.to_owned(),
            fixed_inquiry_format: "72".to_owned(),
            multiple_report_indicator: "1".to_owned(),
            file_selection_level: "B".to_owned(),
            months_for_inquiry: String::new(),
            plain_language: "P".to_owned(),
            ecoa_inquiry_type: "Individual".to_owned(),
            optional_feature_code: vec!["X".to_owned()],
            vendor_identification_code: "FI".to_owned(),
        }
    }
}
