//! Hardening pass for decoded verdicts
//!
//! The upstream model is an untrusted text generator, not a schema-enforced
//! API: a decoded verdict can still carry an out-of-range confidence or blank
//! explanatory text. This pass clamps and backfills so the fully-populated
//! invariant holds for every verdict the service returns.

use crate::model::Verdict;

const MIN_CONFIDENCE: i64 = 0;
const MAX_CONFIDENCE: i64 = 100;

const GENERIC_EXPLANATION: &str = "Content analyzed but requires manual verification.";
const GENERIC_SAFETY_TIP: &str = "Always verify suspicious content through official sources.";

/// Clamp numeric fields and backfill blank text fields on a decoded verdict
pub fn harden_verdict(mut verdict: Verdict) -> Verdict {
    if !(MIN_CONFIDENCE..=MAX_CONFIDENCE).contains(&verdict.confidence) {
        tracing::warn!(
            confidence = verdict.confidence,
            "Model returned out-of-range confidence, clamping"
        );
        verdict.confidence = verdict.confidence.clamp(MIN_CONFIDENCE, MAX_CONFIDENCE);
    }

    if verdict.explanation.trim().is_empty() {
        tracing::warn!("Model returned blank explanation, substituting generic text");
        verdict.explanation = GENERIC_EXPLANATION.to_string();
    }

    if verdict.safety_tip.trim().is_empty() {
        tracing::warn!("Model returned blank safety tip, substituting generic text");
        verdict.safety_tip = GENERIC_SAFETY_TIP.to_string();
    }

    verdict
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{RiskLevel, ScamType, VerdictStatus};

    fn sample_verdict() -> Verdict {
        Verdict {
            status: VerdictStatus::Fake,
            confidence: 95,
            scam_type: ScamType::Phishing,
            explanation: "Spoofed sender domain.".to_string(),
            safety_tip: "Check the sender address.".to_string(),
            risk_level: RiskLevel::High,
        }
    }

    #[test]
    fn test_in_range_verdict_passes_through_unchanged() {
        let verdict = sample_verdict();
        assert_eq!(harden_verdict(verdict.clone()), verdict);
    }

    #[test]
    fn test_confidence_clamped_high_and_low() {
        let mut verdict = sample_verdict();
        verdict.confidence = 150;
        assert_eq!(harden_verdict(verdict).confidence, 100);

        let mut verdict = sample_verdict();
        verdict.confidence = -5;
        assert_eq!(harden_verdict(verdict).confidence, 0);
    }

    #[test]
    fn test_blank_text_fields_are_backfilled() {
        let mut verdict = sample_verdict();
        verdict.explanation = "   ".to_string();
        verdict.safety_tip = String::new();

        let hardened = harden_verdict(verdict);
        assert_eq!(hardened.explanation, GENERIC_EXPLANATION);
        assert_eq!(hardened.safety_tip, GENERIC_SAFETY_TIP);
    }
}
