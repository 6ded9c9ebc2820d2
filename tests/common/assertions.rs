//! Custom assertion macros

/// Assert that a response has the expected status, printing the body if not
macro_rules! assert_status {
    ($response:expr, $expected:expr) => {{
        let (status, body) = &$response;
        assert_eq!(
            *status, $expected,
            "unexpected status {}, body: {}",
            status, body
        );
    }};
}
