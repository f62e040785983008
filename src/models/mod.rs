pub mod credit_report;
pub mod report_request;
