use serde::{Deserialize, Serialize};

/// Dashboard send form (`POST /`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BroadcastForm {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Ship report form (`POST /receive-message`). Posted by ship devices and
/// accepted by the hub; `sender` and `ship` are optional identity fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InboundMessageForm {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ship: Option<String>,
}
