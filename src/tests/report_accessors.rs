#[cfg(test)]
mod test {

    use serde_json::{json, Value};

    use crate::helpers::casing::camelcase_keys;
    use crate::models::credit_report::CreditReport;
    use crate::scores::{ReportOptions, ReportSubject};
    use crate::tests::common::test_client;

    fn report(raw: Value) -> CreditReport {
        serde_json::from_value(camelcase_keys(raw)).expect("report parses")
    }

    fn with_consumer(consumer: Value) -> CreditReport {
        report(json!({"consumers": {"equifaxUSConsumerCreditReport": [consumer]}}))
    }

    #[test]
    fn subject_fields_are_scrubbed() {
        let subject = ReportSubject {
            ssn: Some("666-84-7432".into()),
            phone: Some("(770) 555-1212".into()),
            zip: Some("76487-1234".into()),
            dob: Some("1977-08-02".into()),
            ..Default::default()
        };

        let scrubbed = subject.normalized();

        assert_eq!(scrubbed.ssn.as_deref(), Some("666847432"));
        assert_eq!(scrubbed.phone.as_deref(), Some("7705551212"));
        assert_eq!(scrubbed.zip.as_deref(), Some("764871234"));
        assert_eq!(scrubbed.dob.as_deref(), Some("08021977"));
    }

    #[test]
    fn empty_and_absent_fields_are_left_alone() {
        let subject = ReportSubject {
            ssn: Some(String::new()),
            phone: Some(String::new()),
            zip: None,
            ..Default::default()
        };

        let scrubbed = subject.normalized();

        assert_eq!(scrubbed.ssn.as_deref(), Some(""));
        assert_eq!(scrubbed.phone.as_deref(), Some(""));
        assert_eq!(scrubbed.zip, None);
    }

    #[test]
    fn unrecognized_birth_dates_pass_through() {
        for dob in ["08/02/1977", "1977-8-2", "", "1977-08-02-01", "abcd-ef-gh"] {
            let subject = ReportSubject { dob: Some(dob.into()), ..Default::default() };
            assert_eq!(subject.normalized().dob.as_deref(), Some(dob));
        }
        assert_eq!(ReportSubject::default().normalized().dob, None);
    }

    #[test]
    fn request_body_carries_fixed_configuration() {
        let client = test_client("api.sandbox.equifax.com");
        let subject = ReportSubject {
            first_name: "MARK".into(),
            last_name: "FFUU".into(),
            city: "LASC".into(),
            state: "NM".into(),
            ..Default::default()
        };

        let body = serde_json::to_value(client.scores_attributes().build_request(&subject, &ReportOptions::default())).unwrap();

        assert_eq!(body["consumers"]["socialNum"], json!([{"identifier": "current"}]));
        assert!(body["consumers"].get("dateOfBirth").is_none());
        assert_eq!(
            body["customerConfiguration"]["equifaxUSConsumerCreditReport"],
            json!({
                "memberNumber": "abc123456",
                "securityCode": "XYZ",
                "codeDescriptionRequired": true,
                "customerCode": "AOK",
                "fixedInquiryFormat": "72",
                "multipleReportIndicator": "1",
                "fileSelectionLevel": "B",
                "monthsForInquiry": "",
                "plainLanguage": "P",
                "ECOAInquiryType": "Individual",
                "optionalFeatureCode": ["X"],
                "vendorIdentificationCode": "FI"
            })
        );
    }

    #[test]
    fn accessors_on_an_empty_report() {
        for rpt in [
            CreditReport::default(),
            report(json!({"consumers": {}})),
            report(json!({"consumers": {"equifaxUSConsumerCreditReport": []}})),
            with_consumer(json!({"models": [], "fraudIDScanAlertCodes": [], "bankruptcies": []})),
        ] {
            assert_eq!(rpt.fico_score(), None);
            assert!(!rpt.is_frozen());
            assert_eq!(rpt.is_fraud(), None);
            assert_eq!(rpt.bankruptcies(), None);
        }
    }

    #[test]
    fn frozen_when_hit_code_is_a() {
        let frozen = with_consumer(json!({"hitCode": {"code": "A", "description": "File Frozen"}}));
        let normal = with_consumer(json!({"hitCode": {"code": "1"}}));

        assert!(frozen.is_frozen());
        assert!(!normal.is_frozen());
    }

    #[test]
    fn fico_score_reads_numbers_and_numeric_strings() {
        let numeric = with_consumer(json!({"models": [{"type": "FICO", "score": 685}]}));
        let text = with_consumer(json!({"models": [{"type": "FICO", "score": "0712"}]}));
        let zero = with_consumer(json!({"models": [{"type": "FICO", "score": 0}]}));
        let other_model = with_consumer(json!({"models": [{"type": "VANTAGE", "score": 700}]}));

        assert_eq!(numeric.fico_score(), Some(685));
        assert_eq!(text.fico_score(), Some(712));
        assert_eq!(zero.fico_score(), None);
        for (score, expected) in [
            (json!(700.0), Some(700)),
            (json!("700.0"), Some(700)),
            (json!(685.5), None),
            (json!("685.5"), None),
            (json!(-5), None),
            (json!("n/a"), None),
        ] {
            let rpt = with_consumer(json!({"models": [{"type": "FICO", "score": score.clone()}]}));
            assert_eq!(rpt.fico_score(), expected, "score {}", score);
        }
        assert_eq!(other_model.fico_score(), None);
    }

    #[test]
    fn accessors_use_the_first_report_with_the_section() {
        let rpt = report(json!({
            "consumers": {"equifaxUSConsumerCreditReport": [
                {"identifier": "first"},
                {"identifier": "second", "models": [{"type": "FICO", "score": 640}], "hitCode": {"code": "A"}},
                {"identifier": "third", "models": [{"type": "FICO", "score": 800}]}
            ]}
        }));

        assert_eq!(rpt.fico_score(), Some(640));
        assert!(rpt.is_frozen());
    }

    #[test]
    fn fraud_alerts_skip_informational_code() {
        let rpt = with_consumer(json!({
            "fraudIDScanAlertCodes": [
                {"code": "8", "description": "Informational"},
                {"code": "2", "description": "Fraud victim alert on file"},
                {"code": "5"}
            ]
        }));
        let informational = with_consumer(json!({"fraudIDScanAlertCodes": [{"code": "8", "description": "x"}]}));

        assert_eq!(rpt.is_fraud(), Some(vec!["Fraud victim alert on file".to_string()]));
        assert_eq!(informational.is_fraud(), None);
    }

    #[test]
    fn bankruptcies_are_listed_with_filing_date() {
        let rpt = with_consumer(json!({
            "bankruptcies": [
                {
                    "type": "I",
                    "dateFiled": "2015-03-01",
                    "currentIntentOrDispositionCode": {"code": "F", "description": "Discharged Chapter 7"}
                },
                {"dateFiled": "2019-11-20"}
            ]
        }));

        assert_eq!(
            rpt.bankruptcies(),
            Some(vec!["[2015-03-01] Discharged Chapter 7".to_string(), "[2019-11-20] ".to_string()])
        );
    }
}
