use pretty_assertions::assert_eq;
use serde_json::json;

use business_case::{extract, extract_narrative, extract_structured_data, ExtractError};

#[test]
fn splits_narrative_and_json_dropping_trailer() {
    let raw = r#"NARRATIVE TEXT [JSON_START] {"a":1} [JSON_END] TRAILING"#;
    assert_eq!(extract_narrative(raw), Ok("NARRATIVE TEXT"));
    assert_eq!(extract_structured_data(raw), Ok(json!({"a": 1})));

    let resp = extract(raw).unwrap();
    assert_eq!(resp.generated_output, "NARRATIVE TEXT");
    assert_eq!(resp.structured_data, json!({"a": 1}));
}

#[test]
fn multiline_reply_is_trimmed() {
    let raw = "\n  Executive summary.\n\nMore text.\n[JSON_START]\n{\n  \"k\": [1, 2]\n}\n[JSON_END]\n";
    let resp = extract(raw).unwrap();
    assert_eq!(resp.generated_output, "Executive summary.\n\nMore text.");
    assert_eq!(resp.structured_data, json!({"k": [1, 2]}));
}

#[test]
fn missing_start_marker_fails_both_parts() {
    let raw = r#"Just prose {"a":1} [JSON_END]"#;
    assert_eq!(extract_narrative(raw), Err(ExtractError::MissingStartMarker));
    assert_eq!(
        extract_structured_data(raw),
        Err(ExtractError::MissingStartMarker)
    );
    assert_eq!(extract(raw), Err(ExtractError::MissingStartMarker));
}

#[test]
fn missing_end_marker_fails() {
    let raw = r#"prose [JSON_START] {"a":1}"#;
    assert_eq!(
        extract_structured_data(raw),
        Err(ExtractError::MissingEndMarker)
    );
}

#[test]
fn end_before_start_is_out_of_order() {
    let raw = r#"prose [JSON_END] {"a":1} [JSON_START]"#;
    assert_eq!(
        extract_structured_data(raw),
        Err(ExtractError::MarkersOutOfOrder)
    );
}

#[test]
fn trailing_comma_is_invalid_json() {
    let raw = r#"prose [JSON_START] {"a":1,} [JSON_END]"#;
    match extract_structured_data(raw) {
        Err(ExtractError::InvalidJson(msg)) => assert!(msg.contains("line 1"), "msg={msg}"),
        other => panic!("expected InvalidJson, got {other:?}"),
    }
}

#[test]
fn unquoted_key_is_invalid_json() {
    let raw = "prose [JSON_START] {a: 1} [JSON_END]";
    let err = extract(raw).unwrap_err();
    assert!(matches!(err, ExtractError::InvalidJson(_)));
    assert!(err.to_string().starts_with("invalid json between markers"));
}

#[test]
fn empty_payload_is_invalid_json() {
    let raw = "prose [JSON_START] [JSON_END]";
    assert!(matches!(
        extract_structured_data(raw),
        Err(ExtractError::InvalidJson(_))
    ));
}

#[test]
fn non_object_payloads_are_rejected() {
    let cases = [
        ("[1, 2]", "array"),
        ("null", "null"),
        ("42", "number"),
        (r#""text""#, "string"),
    ];
    for (payload, kind) in cases {
        let raw = format!("Story. [JSON_START] {payload} [JSON_END]");
        assert_eq!(
            extract_structured_data(&raw),
            Err(ExtractError::NotAnObject(kind)),
            "payload={payload}"
        );
        assert_eq!(extract(&raw), Err(ExtractError::NotAnObject(kind)));
    }
}

#[test]
fn acme_business_case_scenario() {
    let raw = r#"Acme's case. [JSON_START]{"business_case":{"executive_summary":"ok","investment_required":1000,"payback_period":"1yr","five_year_projections":[],"key_assumptions":[],"risk_factors":[],"success_metrics":[]}}[JSON_END]"#;
    let resp = extract(raw).unwrap();
    assert_eq!(resp.generated_output, "Acme's case.");
    assert_eq!(
        resp.structured_data["business_case"]["investment_required"],
        json!(1000)
    );
    let case = resp.business_case().unwrap();
    assert_eq!(case.payback_period, "1yr");
}
