//! Prompt for scam classification

/// Build the classification prompt for a piece of scanned content
///
/// The literal content and scan-type label are embedded verbatim; the model is
/// instructed to answer with a JSON object matching the verdict wire shape.
pub fn build_classification_prompt(content: &str, scan_type: &str) -> String {
    format!(
        r#"Analyze this {scan_type} content for scam detection:

"{content}"

Return a JSON response with:
{{
  "status": "real|fake|possibly_fake|unverified",
  "confidence": 0-100,
  "type": "phishing|financial_fraud|fake_news|job_scam|crypto_scam|lottery_scam|romance_scam|tech_support|other",
  "explanation": "Clear explanation of why this is/isn't a scam",
  "safetyTip": "Practical safety advice",
  "riskLevel": "critical|high|medium|low"
}}"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_content_and_scan_type() {
        let prompt = build_classification_prompt("Win a free iPhone now!", "WhatsApp forward");
        assert!(prompt.contains("Win a free iPhone now!"));
        assert!(prompt.contains("this WhatsApp forward content"));
        assert!(prompt.contains("\"safetyTip\""));
        assert!(prompt.contains("\"riskLevel\""));
    }
}
