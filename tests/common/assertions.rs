//! Custom assertion macros and utilities
//!
//! Provides assertion macros for checking response envelopes with more
//! descriptive error messages.

/// Assert that a result is ok and return the value
#[macro_export]
macro_rules! assert_ok {
    ($result:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
    ($result:expr, $message:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("{}: {:?}", $message, e),
        }
    };
}

/// Assert that a string contains a substring
#[macro_export]
macro_rules! assert_contains {
    ($haystack:expr, $needle:expr) => {
        assert!(
            $haystack.contains($needle),
            "Expected '{}' to contain '{}'",
            $haystack,
            $needle
        );
    };
}

/// Assert the `meta` block of an envelope and hand back its `data`
///
/// Checks that `meta.code` matches both the expected code and the HTTP status
/// of the response.
#[macro_export]
macro_rules! assert_envelope {
    ($response:expr, $code:expr, $message:expr) => {{
        let response = $response;
        let code: u16 = $code;
        assert_eq!(
            response.status_code().as_u16(),
            code,
            "unexpected HTTP status, body: {}",
            response.text()
        );
        let body: serde_json::Value = response.json();
        pretty_assertions::assert_eq!(body["meta"]["code"], serde_json::json!(code));
        pretty_assertions::assert_eq!(body["meta"]["message"], serde_json::json!($message));
        let status = if code == 200 { "success" } else { "error" };
        pretty_assertions::assert_eq!(body["meta"]["status"], serde_json::json!(status));
        body["data"].clone()
    }};
}
