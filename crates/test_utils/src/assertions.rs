//! Custom Test Assertions
//!
//! Provides assertion helpers for contract responses that give more
//! meaningful failure messages than comparing raw bytes.

use domain_claims::{Claim, Response};
use serde_json::Value;

/// Asserts the response succeeded and returns its payload
///
/// # Panics
///
/// Panics with the error message if the response failed
pub fn assert_success(response: &Response) -> &[u8] {
    assert!(
        response.is_ok(),
        "Expected success, got error: {}",
        response.message
    );
    &response.payload
}

/// Asserts the response failed with exactly `message`
pub fn assert_error_message(response: &Response, message: &str) {
    assert!(
        !response.is_ok(),
        "Expected error {:?}, got success with payload {:?}",
        message,
        String::from_utf8_lossy(&response.payload)
    );
    assert_eq!(response.message, message);
    assert!(response.payload.is_empty(), "Error responses carry no payload");
}

/// Asserts the response payload is the stored form of `expected`
pub fn assert_claim_payload(response: &Response, expected: &Claim) {
    let payload = assert_success(response);
    let actual = Claim::from_bytes(payload).unwrap_or_else(|e| {
        panic!(
            "Payload is not a claim ({}): {}",
            e,
            String::from_utf8_lossy(payload)
        )
    });
    assert_eq!(&actual, expected);

    let object = serde_json::from_slice::<Value>(payload).expect("payload is JSON");
    let fields = object.as_object().expect("payload is a JSON object");
    assert_eq!(fields.len(), 7, "Claim payload must carry exactly seven fields");
    assert!(fields.values().all(Value::is_string), "All claim fields are strings");
}

/// Parses a `queryAllClaims` payload into `(key, record)` pairs
///
/// # Panics
///
/// Panics if the payload is not a JSON array of `{Key, Record}` objects
pub fn parse_query_results(payload: &[u8]) -> Vec<(String, Value)> {
    let value: Value = serde_json::from_slice(payload).unwrap_or_else(|e| {
        panic!("Invalid query payload ({}): {}", e, String::from_utf8_lossy(payload))
    });
    value
        .as_array()
        .expect("query payload is an array")
        .iter()
        .map(|member| {
            let key = member["Key"].as_str().expect("member has a Key").to_string();
            (key, member["Record"].clone())
        })
        .collect()
}
