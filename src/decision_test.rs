use super::*;
use crate::constants::header;
use crate::headers::ResponseHeaders;

fn render(decision: &Decision) -> ResponseHeaders {
    let mut sink = ResponseHeaders::new();
    decision.write_to(&mut sink);
    sink
}

mod write_to {
    use super::*;

    #[test]
    fn should_write_nothing_given_default_decision() {
        // Arrange
        let decision = Decision::default();

        // Act
        let headers = render(&decision);

        // Assert
        assert!(headers.is_empty());
    }

    #[test]
    fn should_write_all_fields_given_fully_populated_decision() {
        // Arrange
        let decision = Decision {
            allow_credentials: true,
            allow_origin: "http://x.io".into(),
            allow_methods: AllowValue::list(["GET", "POST"]),
            allow_headers: AllowValue::list(["X-Custom"]),
            expose_headers: vec!["X-Total".into()],
            max_age: 600,
        };

        // Act
        let headers = render(&decision);

        // Assert
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS),
            Some("true")
        );
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some("http://x.io")
        );
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_METHODS),
            Some("GET,POST")
        );
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_HEADERS),
            Some("X-Custom")
        );
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_EXPOSE_HEADERS),
            Some("X-Total")
        );
        assert_eq!(headers.get(header::ACCESS_CONTROL_MAX_AGE), Some("600"));
    }

    #[test]
    fn should_leave_vary_unset_given_echoed_values() {
        // Arrange
        let decision = Decision {
            allow_origin: "http://x.io".into(),
            allow_methods: AllowValue::echo("DELETE"),
            allow_headers: AllowValue::echo("X-Custom"),
            ..Decision::default()
        };

        // Act
        let headers = render(&decision);

        // Assert
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_METHODS),
            Some("DELETE")
        );
        assert!(headers.get(header::VARY).is_none());
    }
}

mod is_origin_allowed {
    use super::*;

    #[test]
    fn should_report_denied_given_empty_origin() {
        assert!(!Decision::default().is_origin_allowed());
    }
}
