//! Custom assertions for response envelopes

use serde_json::Value;

/// Assert a failure envelope carrying exactly `message`
pub fn assert_failure(body: &Value, message: &str) {
    assert_eq!(body["success"], false, "body: {}", body);
    assert_eq!(body["error"], message, "body: {}", body);
    assert!(body.get("analysis").is_none(), "body: {}", body);
}

/// Assert a success envelope and return its analysis
pub fn assert_success(body: &Value) -> &Value {
    assert_eq!(body["success"], true, "body: {}", body);
    assert!(body.get("error").is_none(), "body: {}", body);
    &body["analysis"]
}
