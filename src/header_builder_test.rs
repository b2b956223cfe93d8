use super::*;
use crate::case::HeaderCasing;

const ORIGIN: &str = "https://app.test";

fn get() -> Request {
    Request::new("GET", "/").with_header("Origin", ORIGIN)
}

fn options_request() -> Request {
    Request::new("OPTIONS", "/").with_header("Origin", ORIGIN)
}

fn names(headers: &Headers) -> Vec<&str> {
    headers.iter().map(|(name, _)| name).collect()
}

mod build_origin_header {
    use super::*;

    #[test]
    fn should_emit_wildcard_when_all_origins_allowed_without_credentials() {
        // Arrange
        let options = CorsOptions {
            allow_all_origins: true,
            ..CorsOptions::default()
        };
        let mut headers = Headers::new();

        // Act
        HeaderBuilder::new(&options).build_origin_header(&mut headers, ORIGIN);

        // Assert
        assert_eq!(headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN), Some("*"));
    }

    #[test]
    fn should_echo_origin_when_all_origins_allowed_with_credentials() {
        // Arrange
        let options = CorsOptions {
            allow_all_origins: true,
            allow_credentials: true,
            ..CorsOptions::default()
        };
        let mut headers = Headers::new();

        // Act
        HeaderBuilder::new(&options).build_origin_header(&mut headers, ORIGIN);

        // Assert
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some(ORIGIN)
        );
    }

    #[test]
    fn should_echo_origin_when_origin_specific() {
        // Arrange
        let options = CorsOptions::default();
        let mut headers = Headers::new();

        // Act
        HeaderBuilder::new(&options).build_origin_header(&mut headers, ORIGIN);

        // Assert
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some(ORIGIN)
        );
    }
}

mod build_credentials_header {
    use super::*;

    #[test]
    fn should_emit_true_only_when_enabled() {
        // Arrange
        let enabled = CorsOptions {
            allow_credentials: true,
            ..CorsOptions::default()
        };
        let disabled = CorsOptions::default();
        let mut with = Headers::new();
        let mut without = Headers::new();

        // Act
        HeaderBuilder::new(&enabled).build_credentials_header(&mut with);
        HeaderBuilder::new(&disabled).build_credentials_header(&mut without);

        // Assert
        assert_eq!(
            with.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS),
            Some("true")
        );
        assert!(without.is_empty());
    }
}

mod build_exposed_headers {
    use super::*;

    #[test]
    fn should_join_with_comma_space() {
        // Arrange
        let options = CorsOptions {
            expose_headers: vec!["accept".into(), "origin".into(), "content-type".into()],
            ..CorsOptions::default()
        };
        let mut headers = Headers::new();

        // Act
        HeaderBuilder::new(&options).build_exposed_headers(&mut headers);

        // Assert
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_EXPOSE_HEADERS),
            Some("accept, origin, content-type")
        );
    }

    #[test]
    fn should_skip_when_empty() {
        // Arrange
        let options = CorsOptions::default();
        let mut headers = Headers::new();

        // Act
        HeaderBuilder::new(&options).build_exposed_headers(&mut headers);

        // Assert
        assert!(headers.is_empty());
    }
}

mod build_preflight_headers {
    use super::*;

    #[test]
    fn should_emit_headers_methods_and_max_age() {
        // Arrange
        let options = CorsOptions {
            allow_headers: vec!["content-type".into(), "origin".into()],
            allow_methods: vec!["GET".into(), "OPTIONS".into()],
            preflight_max_age: 1002,
            ..CorsOptions::default()
        };
        let mut headers = Headers::new();

        // Act
        HeaderBuilder::new(&options).build_preflight_headers(&mut headers);

        // Assert
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_HEADERS),
            Some("content-type, origin")
        );
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_METHODS),
            Some("GET, OPTIONS")
        );
        assert_eq!(headers.get(header::ACCESS_CONTROL_MAX_AGE), Some("1002"));
    }

    #[test]
    fn should_omit_max_age_when_zero() {
        // Arrange
        let options = CorsOptions {
            preflight_max_age: 0,
            ..CorsOptions::default()
        };
        let mut headers = Headers::new();

        // Act
        HeaderBuilder::new(&options).build_preflight_headers(&mut headers);

        // Assert
        assert!(!headers.contains(header::ACCESS_CONTROL_MAX_AGE));
        assert!(headers.contains(header::ACCESS_CONTROL_ALLOW_METHODS));
    }
}

mod build_private_network_header {
    use super::*;

    fn options(allow: bool) -> CorsOptions {
        CorsOptions {
            allow_private_network: allow,
            ..CorsOptions::default()
        }
    }

    #[test]
    fn should_emit_when_allowed_and_requested() {
        // Arrange
        let request = get().with_header("Access-Control-Request-Private-Network", "true");
        let options = options(true);
        let mut headers = Headers::new();

        // Act
        HeaderBuilder::new(&options).build_private_network_header(&mut headers, &request);

        // Assert
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_PRIVATE_NETWORK),
            Some("true")
        );
    }

    #[test]
    fn should_skip_when_not_allowed() {
        // Arrange
        let request = get().with_header("Access-Control-Request-Private-Network", "true");
        let options = options(false);
        let mut headers = Headers::new();

        // Act
        HeaderBuilder::new(&options).build_private_network_header(&mut headers, &request);

        // Assert
        assert!(headers.is_empty());
    }

    #[test]
    fn should_skip_when_request_value_not_exactly_true() {
        // Arrange
        let request = get().with_header("Access-Control-Request-Private-Network", "TRUE");
        let options = options(true);
        let mut headers = Headers::new();

        // Act
        HeaderBuilder::new(&options).build_private_network_header(&mut headers, &request);

        // Assert
        assert!(headers.is_empty());
    }
}

mod build {
    use super::*;

    fn full_options(casing: HeaderCasing) -> CorsOptions {
        CorsOptions {
            allow_credentials: true,
            allow_private_network: true,
            expose_headers: vec!["x-trace".into()],
            header_casing: casing,
            ..CorsOptions::default()
        }
    }

    #[test]
    fn should_emit_headers_in_fixed_order_for_preflight() {
        // Arrange
        let options = full_options(HeaderCasing::Lower);
        let request =
            options_request().with_header("Access-Control-Request-Private-Network", "true");

        // Act
        let headers = HeaderBuilder::new(&options).build(&request, ORIGIN);

        // Assert
        assert_eq!(
            names(&headers),
            vec![
                "access-control-allow-origin",
                "access-control-allow-credentials",
                "access-control-expose-headers",
                "access-control-allow-headers",
                "access-control-allow-methods",
                "access-control-max-age",
                "access-control-allow-private-network",
            ]
        );
    }

    #[test]
    fn should_skip_preflight_headers_for_other_methods() {
        // Arrange
        let options = full_options(HeaderCasing::Pascal);

        // Act
        let headers = HeaderBuilder::new(&options).build(&get(), ORIGIN);

        // Assert
        assert_eq!(
            names(&headers),
            vec![
                "Access-Control-Allow-Origin",
                "Access-Control-Allow-Credentials",
                "Access-Control-Expose-Headers",
            ]
        );
    }
}
