//! Form-input validation for generation requests.
//!
//! Returns human-readable messages; an empty list means the request is
//! valid. Callers are expected to run this before invoking the engine.

/// Minimum useful business-description length.
const MIN_BUSINESS_LEN: usize = 10;

/// Validate the three required generation inputs.
pub fn validate_request(business: &str, industry: &str, keyword_type: &str) -> Vec<String> {
    let mut errors = Vec::new();

    if business.trim().is_empty() {
        errors.push("Business description is required".to_string());
    }

    if industry.is_empty() {
        errors.push("Industry selection is required".to_string());
    }

    if keyword_type.is_empty() {
        errors.push("Keyword type selection is required".to_string());
    }

    if !business.trim().is_empty() && business.trim().len() < MIN_BUSINESS_LEN {
        errors.push("Business description should be at least 10 characters".to_string());
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_request() {
        let errors = validate_request("Professional pet grooming", "pet-care", "mixed");
        assert!(errors.is_empty());
    }

    #[test]
    fn test_all_missing() {
        let errors = validate_request("", "", "");
        assert_eq!(errors.len(), 3);
        assert!(errors[0].contains("Business description"));
    }

    #[test]
    fn test_short_business() {
        let errors = validate_request("too short", "fitness", "mixed");
        assert_eq!(errors, vec!["Business description should be at least 10 characters"]);
    }

    #[test]
    fn test_whitespace_only_business_is_missing_not_short() {
        let errors = validate_request("   ", "fitness", "mixed");
        assert_eq!(errors, vec!["Business description is required"]);
    }
}
