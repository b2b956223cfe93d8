use cors_headers_core::Response;
use cors_headers_core::constants::header;
use std::collections::HashSet;

pub fn header_value<'a>(response: &'a Response, name: &str) -> Option<&'a str> {
    response.header(name)
}

pub fn has_header(response: &Response, name: &str) -> bool {
    header_value(response, name).is_some()
}

pub fn vary_values(response: &Response) -> HashSet<String> {
    header_value(response, header::VARY)
        .map(|value| {
            value
                .split(',')
                .map(|part| part.trim().to_string())
                .filter(|part| !part.is_empty())
                .collect::<HashSet<_>>()
        })
        .unwrap_or_default()
}

pub fn cors_header_names(response: &Response) -> Vec<String> {
    response
        .headers()
        .iter()
        .map(|(name, _)| name.to_string())
        .filter(|name| name.to_ascii_lowercase().starts_with("access-control-"))
        .collect()
}
