//! Domain types for scam classification

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A single user-initiated scan request
///
/// `scan_type` is an open label set; the values in [`scan_presets`] are the
/// presets the mobile client offers, but any string is accepted and injected
/// verbatim into the classification prompt.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ScanRequest {
    /// Free-form content to analyze
    pub content: String,
    /// Analysis context label (e.g. "text", "WhatsApp forward", "job offer")
    #[serde(default = "default_scan_type")]
    pub scan_type: String,
}

fn default_scan_type() -> String {
    "text".to_string()
}

/// Classification status returned by the model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum VerdictStatus {
    Real,
    Fake,
    PossiblyFake,
    Unverified,
}

/// Scam category returned by the model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ScamType {
    Phishing,
    FinancialFraud,
    FakeNews,
    JobScam,
    CryptoScam,
    LotteryScam,
    RomanceScam,
    TechSupport,
    Other,
}

/// Risk level returned by the model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Critical,
    High,
    Medium,
    Low,
}

/// The classification result every consumer depends on
///
/// Invariant: a `Verdict` is always fully populated. When the upstream model
/// fails to supply a well-formed verdict, one of the fixed fallbacks below is
/// substituted instead of propagating a partial object. Field names follow the
/// wire contract the mobile client expects (`safetyTip`, `riskLevel`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
    pub status: VerdictStatus,
    /// Integer in [0, 100] after hardening; decoded leniently so out-of-range
    /// model output can be clamped rather than rejected
    pub confidence: i64,
    #[serde(rename = "type")]
    pub scam_type: ScamType,
    pub explanation: String,
    pub safety_tip: String,
    pub risk_level: RiskLevel,
}

impl Verdict {
    /// Fallback substituted when the model replied but no verdict could be
    /// decoded from its output
    pub fn parse_fallback() -> Self {
        Self {
            status: VerdictStatus::Unverified,
            confidence: 50,
            scam_type: ScamType::Other,
            explanation: "Content analyzed but requires manual verification.".to_string(),
            safety_tip: "Always verify suspicious content through official sources.".to_string(),
            risk_level: RiskLevel::Medium,
        }
    }

    /// Fallback substituted when the classification call itself failed
    pub fn transport_fallback() -> Self {
        Self {
            status: VerdictStatus::Unverified,
            confidence: 0,
            scam_type: ScamType::Other,
            explanation: "Unable to complete scan due to technical issue.".to_string(),
            safety_tip: "Please try again or verify manually.".to_string(),
            risk_level: RiskLevel::Medium,
        }
    }
}

/// Which path produced the verdict; exposed for observability and tests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ScanOutcome {
    Ok,
    ParseFallback,
    TransportError,
}

/// Result of a classification: the verdict plus the outcome tag and, on
/// transport failure, the preserved diagnostic message
#[derive(Debug, Clone)]
pub struct ScanReport {
    pub verdict: Verdict,
    pub outcome: ScanOutcome,
    pub error: Option<String>,
}

/// Display payload handed to the presentation layer
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ScanRecord {
    pub content: String,
    pub verdict: Verdict,
    pub outcome: ScanOutcome,
    pub timestamp: DateTime<Utc>,
    pub scan_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ScanRecord {
    pub fn new(request: ScanRequest, report: ScanReport) -> Self {
        Self {
            content: request.content,
            verdict: report.verdict,
            outcome: report.outcome,
            timestamp: Utc::now(),
            scan_type: request.scan_type,
            error: report.error,
        }
    }
}

/// A scan-type preset offered by the client UI
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ScanPreset {
    pub id: &'static str,
    pub scan_type: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Sample payload the client uses to demo the preset, if it ships one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample: Option<&'static str>,
}

/// The preset scanners the mobile client exposes on its home screen
pub fn scan_presets() -> &'static [ScanPreset] {
    const PRESETS: &[ScanPreset] = &[
        ScanPreset {
            id: "text_scanner",
            scan_type: "text",
            title: "Text Scanner",
            description: "Paste any message or link for analysis",
            sample: None,
        },
        ScanPreset {
            id: "whatsapp_forward",
            scan_type: "WhatsApp forward",
            title: "WhatsApp Forward Scanner",
            description: "Check forwarded messages for authenticity",
            sample: Some(
                "🎉 CONGRATULATIONS! You've been selected for a lottery prize of ₹50,00,000! \
                 Click here to claim your reward within 24 hours. Limited time offer!",
            ),
        },
        ScanPreset {
            id: "image_scanner",
            scan_type: "image-based scam",
            title: "Image Scam Detector",
            description: "Scan suspicious images for fake content",
            sample: Some(
                "Image shows: 'Earn ₹5000 daily from home! No investment required. Join our \
                 WhatsApp group for instant money making opportunities. 100% genuine work.'",
            ),
        },
        ScanPreset {
            id: "job_verifier",
            scan_type: "job offer",
            title: "Job Scam Verifier",
            description: "Verify job offers and work-from-home schemes",
            sample: Some(
                "URGENT HIRING! Work from home data entry job. Earn ₹25,000/month. No experience \
                 needed. Pay registration fee of ₹2,000 to confirm your position. Contact immediately!",
            ),
        },
        ScanPreset {
            id: "crypto_scanner",
            scan_type: "cryptocurrency investment",
            title: "Crypto Scam Checker",
            description: "Check crypto investments and trading offers",
            sample: Some(
                "🚀 NEW CRYPTO OPPORTUNITY! Invest in BitCoin2.0 now! Guaranteed 500% returns in \
                 30 days. Early bird bonus: Invest ₹10,000 get ₹50,000 back! Limited slots available.",
            ),
        },
        ScanPreset {
            id: "loan_scanner",
            scan_type: "loan offer",
            title: "Loan Scam Detector",
            description: "Verify loan offers and financial schemes",
            sample: Some(
                "Instant loan approval! Get ₹5 lakh loan in 2 hours. No documents required. Only \
                 pay ₹5,000 processing fee first. 100% approval guaranteed regardless of credit score.",
            ),
        },
    ];
    PRESETS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_wire_format_round_trip() {
        let json = r#"{
            "status": "fake",
            "confidence": 95,
            "type": "lottery_scam",
            "explanation": "Classic advance-fee lottery bait.",
            "safetyTip": "Never pay to claim a prize.",
            "riskLevel": "high"
        }"#;

        let verdict: Verdict = serde_json::from_str(json).unwrap();
        assert_eq!(verdict.status, VerdictStatus::Fake);
        assert_eq!(verdict.scam_type, ScamType::LotteryScam);
        assert_eq!(verdict.risk_level, RiskLevel::High);

        let out = serde_json::to_value(&verdict).unwrap();
        assert_eq!(out["type"], "lottery_scam");
        assert_eq!(out["safetyTip"], "Never pay to claim a prize.");
        assert_eq!(out["riskLevel"], "high");
    }

    #[test]
    fn test_unknown_enum_value_is_rejected() {
        let json = r#"{
            "status": "bogus",
            "confidence": 10,
            "type": "other",
            "explanation": "x",
            "safetyTip": "y",
            "riskLevel": "low"
        }"#;

        assert!(serde_json::from_str::<Verdict>(json).is_err());
    }

    #[test]
    fn test_fallbacks_are_fully_populated_and_distinct() {
        let parse = Verdict::parse_fallback();
        let transport = Verdict::transport_fallback();

        assert_ne!(parse, transport);
        for v in [parse, transport] {
            assert_eq!(v.status, VerdictStatus::Unverified);
            assert_eq!(v.scam_type, ScamType::Other);
            assert_eq!(v.risk_level, RiskLevel::Medium);
            assert!((0..=100).contains(&v.confidence));
            assert!(!v.explanation.trim().is_empty());
            assert!(!v.safety_tip.trim().is_empty());
        }
    }

    #[test]
    fn test_presets_cover_the_documented_scan_types() {
        let types: Vec<&str> = scan_presets().iter().map(|p| p.scan_type).collect();
        for expected in [
            "text",
            "WhatsApp forward",
            "image-based scam",
            "job offer",
            "cryptocurrency investment",
            "loan offer",
        ] {
            assert!(types.contains(&expected), "missing preset {expected}");
        }
    }
}
