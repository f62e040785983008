//! Scores & Attributes: pull a consumer credit report through the dispatcher.

pub mod accessors;
pub mod subject;

use http::{HeaderMap, HeaderName, HeaderValue, Method};
use tracing::{debug, info};
use uuid::Uuid;

use crate::client::request::RequestBody;
use crate::client::response::DispatchResult;
use crate::client::Equifax;
use crate::error::ApiError;
use crate::helpers::predicates::is_empty;
use crate::models::credit_report::CreditReport;
use crate::models::report_request::{
    AddressInput, ConsumerInput, CreditReportConfiguration, CustomerConfiguration, NameInput,
    NumberInput, ReportRequest, CURRENT,
};
use crate::utils::constants::{CORRELATION_ID_HEADER, SCORE_ATTRIBUTES_PATH};

pub use subject::{ReportOptions, ReportSubject};

pub struct ScoresAndAttributesApi<'a> {
    client: &'a Equifax,
}

impl<'a> ScoresAndAttributesApi<'a> {
    pub fn new(client: &'a Equifax) -> Self {
        Self { client }
    }

    /// Run the basic credit report for `subject`.
    pub async fn report(&self, subject: &ReportSubject, options: &ReportOptions) -> Result<CreditReport, ApiError> {
        let request = self.build_request(subject, options);
        let body = serde_json::to_value(&request)
            .map_err(|e| ApiError::client(format!("cannot encode report request: {}", e)))?;

        let correlation_id = options
            .correlation_id
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static(CORRELATION_ID_HEADER),
            HeaderValue::from_str(&correlation_id)
                .map_err(|e| ApiError::client(format!("invalid correlation id: {}", e)))?,
        );

        info!(correlation_id = %correlation_id, "requesting credit report");
        let result = self
            .client
            .fire(Method::POST, SCORE_ATTRIBUTES_PATH, headers, &[], Some(RequestBody::Json(body)))
            .await;
        interpret_report(result)
    }

    /// Request body for `subject`, scrubbed, with this client's customer configuration.
    pub fn build_request(&self, subject: &ReportSubject, options: &ReportOptions) -> ReportRequest {
        let config = self.client.config();
        let subject = subject.normalized();
        ReportRequest {
            consumers: ConsumerInput {
                name: vec![NameInput {
                    identifier: CURRENT.to_owned(),
                    first_name: subject.first_name,
                    last_name: subject.last_name,
                    middle_name: subject.middle_name,
                    suffix: subject.suffix,
                }],
                social_num: vec![NumberInput { identifier: CURRENT.to_owned(), number: subject.ssn }],
                phone_numbers: vec![NumberInput { identifier: CURRENT.to_owned(), number: subject.phone }],
                date_of_birth: subject.dob,
                addresses: vec![AddressInput {
                    identifier: CURRENT.to_owned(),
                    house_number: subject.house_number,
                    street_name: subject.street_name,
                    street_type: subject.street_type,
                    apartment_number: subject.apartment_number,
                    city: subject.city,
                    state: subject.state,
                    zip: subject.zip,
                }],
            },
            customer_reference_identifier: options.customer_reference_identifier.clone(),
            customer_configuration: CustomerConfiguration {
                equifax_us_consumer_credit_report: CreditReportConfiguration::new(
                    &config.member_number,
                    &config.security_code,
                    &config.customer_code,
                ),
            },
        }
    }
}

/// Status >= 400, or a body with a `timestamp`, is an upstream error even on 2xx.
pub(crate) fn interpret_report(result: DispatchResult) -> Result<CreditReport, ApiError> {
    match result {
        DispatchResult::Completed { response, payload } => {
            let flagged = payload.get("timestamp").is_some_and(|t| !is_empty(t));
            if response.status.as_u16() >= 400 || flagged {
                debug!(status = %response.status, "credit report request rejected");
                return Err(ApiError::from_payload(&payload));
            }
            serde_json::from_value(payload)
                .map_err(|e| ApiError::client(format!("unreadable credit report: {}", e)))
        }
        DispatchResult::Unauthenticated { error, .. } => Err(error),
        DispatchResult::Transport { reason, .. } => {
            Err(ApiError::client(format!("credit report request failed: {}", reason)))
        }
        DispatchResult::Exhausted { attempts, .. } => Err(ApiError::equifax(format!(
            "access token rejected on all {} attempts",
            attempts
        ))),
    }
}
