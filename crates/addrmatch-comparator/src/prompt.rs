//! Oracle prompt engineering for address comparison

/// Builds the comparison prompt submitted to the oracle
///
/// The instruction template is fixed; the only variable content is the two
/// address strings, interpolated verbatim. Addresses are natural-language
/// text, not executable content, so no escaping is applied.
pub struct PromptBuilder {
    address1: String,
    address2: String,
}

impl PromptBuilder {
    /// Create a new prompt builder
    pub fn new(address1: impl Into<String>, address2: impl Into<String>) -> Self {
        Self {
            address1: address1.into(),
            address2: address2.into(),
        }
    }

    /// Build the complete comparison prompt
    pub fn build(&self) -> String {
        let mut prompt = String::new();

        // 1. The comparison task
        prompt.push_str(COMPARISON_INSTRUCTIONS);
        prompt.push('\n');

        // 2. The two addresses, verbatim
        prompt.push_str(&format!("- Address 1: {}\n", self.address1));
        prompt.push_str(&format!("- Address 2: {}\n", self.address2));
        prompt.push('\n');

        // 3. Output format requirement
        prompt.push_str(OUTPUT_FORMAT_REMINDER);

        prompt
    }
}

const COMPARISON_INSTRUCTIONS: &str =
    "Compare the following two addresses and determine if they refer to the same location:";

const OUTPUT_FORMAT_REMINDER: &str = r#"Respond with a JSON object in the following format:
{
  "match": boolean, // true if the addresses refer to the same location, false otherwise
  "confidence": number, // a confidence score between 0 and 1
  "reasoning": string // a brief explanation of your analysis
}

Only return the JSON object, nothing else."#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_includes_both_addresses() {
        let builder = PromptBuilder::new("123 Main St, Springfield", "123 Main Street, Springfield");

        let prompt = builder.build();
        assert!(prompt.contains("Address 1: 123 Main St, Springfield"));
        assert!(prompt.contains("Address 2: 123 Main Street, Springfield"));
    }

    #[test]
    fn test_prompt_includes_instructions() {
        let prompt = PromptBuilder::new("a", "b").build();
        assert!(prompt.contains("determine if they refer to the same location"));
        assert!(prompt.contains(r#""match": boolean"#));
        assert!(prompt.contains(r#""confidence": number"#));
        assert!(prompt.contains(r#""reasoning": string"#));
        assert!(prompt.contains("Only return the JSON object, nothing else."));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let a = PromptBuilder::new("1 First Ave", "2 Second Ave").build();
        let b = PromptBuilder::new("1 First Ave", "2 Second Ave").build();
        assert_eq!(a, b);
    }

    #[test]
    fn test_addresses_are_interpolated_verbatim() {
        let prompt = PromptBuilder::new("  weird   spacing  ", "Ünïcode Straße 7").build();
        assert!(prompt.contains("  weird   spacing  "));
        assert!(prompt.contains("Ünïcode Straße 7"));
    }
}
