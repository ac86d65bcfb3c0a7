use axum::http::StatusCode;

/// Classification of a numeric HTTP status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Redirect,
    ClientError,
    ServerError,
    Unknown,
}

impl StatusKind {
    /// Classify a status code into its response-kind range.
    pub fn classify(code: u16) -> Self {
        match code {
            200..=299 => StatusKind::Success,
            300..=399 => StatusKind::Redirect,
            400..=499 => StatusKind::ClientError,
            500..=599 => StatusKind::ServerError,
            _ => StatusKind::Unknown,
        }
    }

    /// The `status` label carried in the envelope body.
    ///
    /// Redirects are shaped like client faults; anything unclassifiable is
    /// treated as a server fault.
    pub fn label(self) -> &'static str {
        match self {
            StatusKind::Success => "success",
            StatusKind::Redirect | StatusKind::ClientError => "fail",
            StatusKind::ServerError | StatusKind::Unknown => "error",
        }
    }
}

/// Canonical reason phrase for a status code, e.g. 404 -> "Not Found".
pub fn canonical_message(code: u16) -> &'static str {
    StatusCode::from_u16(code)
        .ok()
        .and_then(|status| status.canonical_reason())
        .unwrap_or("Unknown Status")
}

/// Transport status for an envelope. Codes the HTTP layer cannot represent
/// are sent as 500; the body still carries the original code.
pub(crate) fn transport_status(code: u16) -> StatusCode {
    StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_success_range() {
        for code in 200..=299 {
            assert_eq!(StatusKind::classify(code), StatusKind::Success);
        }
    }

    #[test]
    fn test_classify_redirect_range() {
        for code in 300..=399 {
            assert_eq!(StatusKind::classify(code), StatusKind::Redirect);
        }
    }

    #[test]
    fn test_classify_client_error_range() {
        for code in 400..=499 {
            assert_eq!(StatusKind::classify(code), StatusKind::ClientError);
        }
    }

    #[test]
    fn test_classify_server_error_range() {
        for code in 500..=599 {
            assert_eq!(StatusKind::classify(code), StatusKind::ServerError);
        }
    }

    #[test]
    fn test_classify_out_of_range_is_unknown() {
        assert_eq!(StatusKind::classify(0), StatusKind::Unknown);
        assert_eq!(StatusKind::classify(99), StatusKind::Unknown);
        assert_eq!(StatusKind::classify(600), StatusKind::Unknown);
        assert_eq!(StatusKind::classify(999), StatusKind::Unknown);
    }

    #[test]
    fn test_labels() {
        assert_eq!(StatusKind::Success.label(), "success");
        assert_eq!(StatusKind::Redirect.label(), "fail");
        assert_eq!(StatusKind::ClientError.label(), "fail");
        assert_eq!(StatusKind::ServerError.label(), "error");
        assert_eq!(StatusKind::Unknown.label(), "error");
    }

    #[test]
    fn test_canonical_messages_for_well_known_codes() {
        assert_eq!(canonical_message(200), "OK");
        assert_eq!(canonical_message(201), "Created");
        assert_eq!(canonical_message(204), "No Content");
        assert_eq!(canonical_message(404), "Not Found");
        assert_eq!(canonical_message(422), "Unprocessable Entity");
        assert_eq!(canonical_message(429), "Too Many Requests");
        assert_eq!(canonical_message(503), "Service Unavailable");
    }

    #[test]
    fn test_canonical_message_fallback() {
        assert_eq!(canonical_message(0), "Unknown Status");
        assert_eq!(canonical_message(99), "Unknown Status");
        assert_eq!(canonical_message(599), "Unknown Status");
    }

    #[test]
    fn test_transport_status_passes_valid_codes() {
        assert_eq!(transport_status(204), StatusCode::NO_CONTENT);
        assert_eq!(transport_status(503), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_transport_status_falls_back_for_unrepresentable_codes() {
        assert_eq!(transport_status(0), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(transport_status(42), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
