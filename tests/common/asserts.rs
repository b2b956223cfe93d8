use super::headers::{cors_header_names, header_value};
use cors_headers_core::Response;
use cors_headers_core::constants::header;

pub fn assert_no_cors(response: &Response) {
    let names = cors_header_names(response);
    assert!(names.is_empty(), "expected no CORS headers, got {names:?}");
}

pub fn assert_preflight(response: &Response) {
    assert_eq!(response.status(), 200, "preflight should answer 200");
    assert!(response.body().is_empty(), "preflight body should be empty");
    assert_eq!(header_value(response, header::CONTENT_LENGTH), Some("0"));
}

pub fn assert_handled(response: &Response) {
    assert_eq!(response.body(), b"handled", "inner handler should have run");
}
