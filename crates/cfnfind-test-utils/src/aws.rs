//! AWS test utilities

/// Get the AWS region for credential-backed tests.
///
/// Checks environment variables in order:
/// 1. AWS_REGION
/// 2. AWS_DEFAULT_REGION
/// 3. Falls back to us-east-1
pub fn get_test_region() -> String {
    std::env::var("AWS_REGION")
        .or_else(|_| std::env::var("AWS_DEFAULT_REGION"))
        .unwrap_or_else(|_| "us-east-1".to_string())
}

/// Profile for credential-backed tests (`AWS_PROFILE`, else `default`).
pub fn get_test_profile() -> String {
    std::env::var("AWS_PROFILE").unwrap_or_else(|_| "default".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_test_region_is_never_empty() {
        assert!(!get_test_region().is_empty());
    }

    #[test]
    fn test_get_test_profile_is_never_empty() {
        assert!(!get_test_profile().is_empty());
    }
}
