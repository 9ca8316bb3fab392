pub mod chat;
pub mod config;
pub mod scan;

pub use chat::{ChatMessage, ChatReply, ChatRole};
pub use config::{Config, LlmConfig};
pub use scan::{
    RiskLevel, ScamType, ScanOutcome, ScanPreset, ScanRecord, ScanReport, ScanRequest, Verdict,
    VerdictStatus, scan_presets,
};
