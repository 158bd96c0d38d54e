// All LLM prompt constants for the Report module.

/// System instruction for every analysis call.
pub const ANALYSIS_SYSTEM: &str = "You are an expert business consultant.";

/// Detailed template used for premium accounts. Replace `{business_info}`
/// before sending.
pub const PREMIUM_PROMPT_TEMPLATE: &str = "Provide a detailed SWOT analysis for the following business. \
Include in-depth insights and custom branding recommendations in the Opportunities and Threats sections.\n\n\
Business Details: {business_info}";

/// Concise template used for standard accounts. Replace `{business_info}`
/// before sending.
pub const BASIC_PROMPT_TEMPLATE: &str = "Provide a basic, concise SWOT analysis for the following business.\n\n\
Business Details: {business_info}";

/// Selects the tier template and appends the literal business description.
pub fn analysis_prompt(premium: bool, business_info: &str) -> String {
    let template = if premium {
        PREMIUM_PROMPT_TEMPLATE
    } else {
        BASIC_PROMPT_TEMPLATE
    };
    template.replace("{business_info}", business_info)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_premium_prompt_requests_detailed_analysis() {
        let prompt = analysis_prompt(true, "A bakery");

        assert!(prompt.contains("detailed SWOT analysis"));
        assert!(prompt.contains("branding recommendations"));
        assert!(prompt.ends_with("Business Details: A bakery"));
    }

    #[test]
    fn test_basic_prompt_requests_concise_analysis() {
        let prompt = analysis_prompt(false, "A bakery");

        assert!(prompt.contains("basic, concise SWOT analysis"));
        assert!(!prompt.contains("branding recommendations"));
        assert!(prompt.ends_with("Business Details: A bakery"));
    }

    #[test]
    fn test_business_info_is_appended_verbatim() {
        let info = "Family-run café.\nTwo locations, 12 staff.";
        let prompt = analysis_prompt(false, info);

        assert!(prompt.contains(info));
    }
}
