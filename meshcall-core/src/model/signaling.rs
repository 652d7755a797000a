use serde::{Deserialize, Serialize};

/// A STUN or TURN server handed to browsers so they can gather candidates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IceServerConfig {
    pub urls: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential: Option<String>,
}

impl IceServerConfig {
    pub fn stun(url: impl Into<String>) -> Self {
        Self {
            urls: vec![url.into()],
            username: None,
            credential: None,
        }
    }

    pub fn default_stun() -> Vec<Self> {
        vec![Self::stun("stun:stun.l.google.com:19302")]
    }
}
