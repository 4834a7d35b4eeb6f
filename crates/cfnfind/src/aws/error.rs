//! AWS error classification
//!
//! Maps SDK failures onto a handful of categories using the `.code()` the
//! service returned, so the CLI can tell the user what to do about a region
//! that could not be searched.

use thiserror::Error;

/// Categories of listing failures
#[derive(Debug, Error)]
pub enum AwsError {
    /// Credentials are valid but not allowed to call `DescribeStacks`
    #[error("Access denied")]
    AccessDenied,

    /// Session credentials have expired
    #[error("Credentials expired")]
    ExpiredCredentials,

    /// Token not recognised by the region (typical of opt-in regions that are disabled)
    #[error("Security token not valid in this region")]
    InvalidToken,

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    Throttled,

    /// Generic AWS SDK error with code and message
    #[error("AWS error: {message}")]
    Sdk {
        code: Option<String>,
        message: String,
    },
}

impl AwsError {
    /// Check if the failure points at the caller's credentials
    pub fn is_credential_problem(&self) -> bool {
        matches!(self, AwsError::AccessDenied | AwsError::ExpiredCredentials)
    }

    /// Get a user-friendly suggestion for resolving this error, if available.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            AwsError::AccessDenied => {
                Some("Grant cloudformation:DescribeStacks to this profile, or skip the region with --region.")
            }
            AwsError::ExpiredCredentials => {
                Some("Refresh the session for this profile (e.g. `aws sso login`).")
            }
            AwsError::InvalidToken => {
                Some("If this is an opt-in region, enable it for the account or leave it out with --region.")
            }
            AwsError::Throttled => Some("Lower --max-concurrency or search fewer regions."),
            AwsError::Sdk { .. } => None,
        }
    }
}

/// Known AWS error codes for authorization failures
const ACCESS_DENIED_CODES: &[&str] = &["AccessDenied", "AccessDeniedException"];

/// Known AWS error codes for expired sessions
const EXPIRED_CODES: &[&str] = &["ExpiredToken", "ExpiredTokenException", "RequestExpired"];

/// Known AWS error codes for tokens a region does not accept
const INVALID_TOKEN_CODES: &[&str] = &[
    "InvalidClientTokenId",
    "UnrecognizedClientException",
    "AuthFailure",
];

/// Known AWS error codes for throttling/rate limiting
const THROTTLING_CODES: &[&str] = &["Throttling", "ThrottlingException", "RequestLimitExceeded"];

/// Classify an AWS SDK error using the error code.
pub fn classify_aws_error(code: Option<&str>, message: Option<&str>) -> AwsError {
    match code {
        Some(c) if ACCESS_DENIED_CODES.contains(&c) => AwsError::AccessDenied,
        Some(c) if EXPIRED_CODES.contains(&c) => AwsError::ExpiredCredentials,
        Some(c) if INVALID_TOKEN_CODES.contains(&c) => AwsError::InvalidToken,
        Some(c) if THROTTLING_CODES.contains(&c) => AwsError::Throttled,
        _ => AwsError::Sdk {
            code: code.map(|s| s.to_string()),
            message: message.unwrap_or("Unknown error").to_string(),
        },
    }
}

/// Classify an error from an anyhow::Error by extracting the AWS error code.
///
/// Walks the error chain looking for a `DescribeStacks` SDK error. Falls back
/// to the `code: Some("...")` field of the Debug representation, and finally
/// to a generic error carrying the display chain.
pub fn classify_anyhow_error(error: &anyhow::Error) -> AwsError {
    use aws_sdk_cloudformation::error::{ProvideErrorMetadata, SdkError};
    use aws_sdk_cloudformation::operation::describe_stacks::DescribeStacksError;

    for cause in error.chain() {
        if let Some(e) = cause.downcast_ref::<SdkError<DescribeStacksError>>() {
            return classify_aws_error(e.code(), e.message());
        }
    }

    let debug_str = format!("{:?}", error);
    if let Some(code) = extract_error_code(&debug_str) {
        return classify_aws_error(Some(&code), Some(&error.to_string()));
    }

    AwsError::Sdk {
        code: None,
        message: format!("{:#}", error),
    }
}

/// Extract an AWS error code from a debug string representation
fn extract_error_code(debug_str: &str) -> Option<String> {
    let start = debug_str.find("code: Some(\"")?;
    let rest = &debug_str[start + 12..];
    let end = rest.find('"')?;
    Some(rest[..end].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use aws_sdk_cloudformation::error::SdkError;
    use aws_sdk_cloudformation::operation::describe_stacks::DescribeStacksError;
    use aws_smithy_runtime_api::http::Response;
    use aws_smithy_types::body::SdkBody;
    use aws_smithy_types::error::ErrorMetadata;

    /// Shape of a failure as `CloudFormationLister::list_stacks` returns it
    fn describe_stacks_failure(code: &str) -> anyhow::Error {
        let service_error = DescribeStacksError::generic(
            ErrorMetadata::builder()
                .code(code)
                .message("request rejected")
                .build(),
        );
        let sdk_error: SdkError<DescribeStacksError> = SdkError::service_error(
            service_error,
            Response::new(400.try_into().unwrap(), SdkBody::empty()),
        );
        Err::<(), _>(sdk_error)
            .context("Failed to describe stacks")
            .unwrap_err()
    }

    #[test]
    fn access_denied_codes() {
        for code in ACCESS_DENIED_CODES {
            let err = classify_aws_error(Some(code), Some("not authorized"));
            assert!(matches!(err, AwsError::AccessDenied), "code: {code}");
            assert!(err.is_credential_problem());
        }
    }

    #[test]
    fn expired_codes() {
        for code in EXPIRED_CODES {
            let err = classify_aws_error(Some(code), Some("msg"));
            assert!(matches!(err, AwsError::ExpiredCredentials), "code: {code}");
        }
    }

    #[test]
    fn invalid_token_codes() {
        for code in INVALID_TOKEN_CODES {
            let err = classify_aws_error(Some(code), Some("msg"));
            assert!(matches!(err, AwsError::InvalidToken), "code: {code}");
            assert!(!err.is_credential_problem());
        }
    }

    #[test]
    fn throttling_codes() {
        for code in THROTTLING_CODES {
            let err = classify_aws_error(Some(code), Some("msg"));
            assert!(matches!(err, AwsError::Throttled), "code: {code}");
        }
    }

    #[test]
    fn unknown_and_missing_codes() {
        let err = classify_aws_error(Some("SomeNewError"), Some("details"));
        assert!(matches!(err, AwsError::Sdk { code: Some(_), .. }));
        assert!(err.suggestion().is_none());

        let err2 = classify_aws_error(None, None);
        match err2 {
            AwsError::Sdk { code, message } => {
                assert!(code.is_none());
                assert_eq!(message, "Unknown error");
            }
            other => panic!("unexpected classification: {other:?}"),
        }
    }

    #[test]
    fn suggestions_for_actionable_errors() {
        for err in [
            AwsError::AccessDenied,
            AwsError::ExpiredCredentials,
            AwsError::InvalidToken,
            AwsError::Throttled,
        ] {
            assert!(err.suggestion().is_some(), "no suggestion for {err:?}");
        }
    }

    #[test]
    fn extract_code_from_code_field() {
        let debug_str = r#"ServiceError { code: Some("Throttling"), message: "Rate exceeded" }"#;
        assert_eq!(extract_error_code(debug_str).as_deref(), Some("Throttling"));
        assert!(extract_error_code("connection refused").is_none());
    }

    #[test]
    fn classify_plain_anyhow_error() {
        let err = anyhow::anyhow!("API error").context("Failed to describe stacks");
        match classify_anyhow_error(&err) {
            AwsError::Sdk { code, message } => {
                assert!(code.is_none());
                assert_eq!(message, "Failed to describe stacks: API error");
            }
            other => panic!("unexpected classification: {other:?}"),
        }
    }

    #[test]
    fn classify_sdk_error_behind_context() {
        let err = describe_stacks_failure("InvalidClientTokenId");
        let classified = classify_anyhow_error(&err);
        assert!(matches!(classified, AwsError::InvalidToken), "{classified:?}");
        assert!(classified.suggestion().is_some());

        let err = describe_stacks_failure("ThrottlingException");
        let classified = classify_anyhow_error(&err);
        assert!(matches!(classified, AwsError::Throttled), "{classified:?}");
        assert!(classified.suggestion().is_some());
    }

    #[test]
    fn classify_unknown_sdk_code_keeps_code() {
        let err = describe_stacks_failure("ValidationError");
        match classify_anyhow_error(&err) {
            AwsError::Sdk { code, message } => {
                assert_eq!(code.as_deref(), Some("ValidationError"));
                assert_eq!(message, "request rejected");
            }
            other => panic!("unexpected classification: {other:?}"),
        }
    }
}
