use serde::Deserialize;

use crate::helpers::predicates::is_blank;

/// Who the report is about, as the caller knows them.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSubject {
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub suffix: Option<String>,
    /// `YYYY-MM-DD`; sent upstream as `MMDDYYYY`
    pub dob: Option<String>,
    pub ssn: Option<String>,
    pub house_number: Option<String>,
    pub street_name: Option<String>,
    pub street_type: Option<String>,
    pub apartment_number: Option<String>,
    pub city: String,
    pub state: String,
    pub zip: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportOptions {
    pub customer_reference_identifier: Option<String>,
    /// Sent as `efx-client-correlation-id`; a fresh UUID when absent
    pub correlation_id: Option<String>,
}

impl ReportSubject {
    /// Scrub the fields into the shape the service accepts.
    ///
    /// SSN and zip lose their hyphens, the phone loses `- ( )` and spaces,
    /// a `YYYY-MM-DD` birth date becomes `MMDDYYYY`. Anything else in `dob`
    /// is passed through untouched, as are absent and empty fields.
    pub fn normalized(&self) -> Self {
        let mut subject = self.clone();
        subject.zip = scrub(subject.zip, |zip| strip(zip, &['-']));
        subject.ssn = scrub(subject.ssn, |ssn| strip(ssn, &['-']));
        subject.phone = scrub(subject.phone, |phone| strip(phone, &['-', '(', ')', ' ']));
        subject.dob = scrub(subject.dob, |dob| reformat_dob(dob).unwrap_or_else(|| dob.to_owned()));
        subject
    }
}

fn scrub(value: Option<String>, rewrite: impl FnOnce(&str) -> String) -> Option<String> {
    if is_blank(value.as_deref()) {
        return value;
    }
    value.map(|v| rewrite(&v))
}

fn strip(value: &str, unwanted: &[char]) -> String {
    value.chars().filter(|c| !unwanted.contains(c)).collect()
}

fn reformat_dob(dob: &str) -> Option<String> {
    let mut parts = dob.split('-');
    let (year, month, day) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }
    let digits = |s: &str, len: usize| s.len() == len && s.bytes().all(|b| b.is_ascii_digit());
    if !(digits(year, 4) && digits(month, 2) && digits(day, 2)) {
        return None;
    }
    Some(format!("{}{}{}", month, day, year))
}
