use serde::{Deserialize, Serialize};

/// Verification status of a redeem code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeStatus {
    Active,
    Expired,
    Unknown,
}

impl CodeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CodeStatus::Active => "active",
            CodeStatus::Expired => "expired",
            CodeStatus::Unknown => "unknown",
        }
    }
}

/// A redeem code from the static catalog. Display data only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedeemCode {
    pub code: String,

    pub reward: String,

    pub status: CodeStatus,

    pub last_verified_at: String,

    pub verified_by: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence: Option<String>,
}
