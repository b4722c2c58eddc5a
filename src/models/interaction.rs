use serde::{Deserialize, Serialize};

/// Interaction types assigned by the calling platform.
pub mod interaction_type {
    /// Liveness probe
    pub const PING: u8 = 1;
    /// User command invocation
    pub const APPLICATION_COMMAND: u8 = 2;
}

/// Response types understood by the calling platform.
pub mod response_type {
    pub const PONG: u8 = 1;
    pub const CHANNEL_MESSAGE: u8 = 4;
}

/// Inbound interaction event.
///
/// Deserialized from the raw request bytes only after signature verification
/// has passed; every field beyond `type` is optional on the wire.
#[derive(Debug, Clone, Deserialize)]
pub struct Interaction {
    #[serde(rename = "type")]
    pub kind: u8,
    pub data: Option<CommandData>,
    pub member: Option<Member>,
    pub channel_id: Option<String>,
    pub guild_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommandData {
    pub name: String,
    #[serde(default)]
    pub options: Vec<CommandOption>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommandOption {
    pub value: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Member {
    pub user: User,
}

#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub username: String,
    pub id: String,
}

/// Synchronous response body returned to the calling platform.
#[derive(Debug, Clone, Serialize)]
pub struct InteractionResponse {
    #[serde(rename = "type")]
    pub kind: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ResponseData>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResponseData {
    pub content: String,
}

impl InteractionResponse {
    /// `{"type": 1}` — answer to a liveness probe.
    pub fn pong() -> Self {
        Self {
            kind: response_type::PONG,
            data: None,
        }
    }

    /// `{"type": 4, "data": {"content": ...}}` — visible acknowledgment.
    pub fn message(content: impl Into<String>) -> Self {
        Self {
            kind: response_type::CHANNEL_MESSAGE,
            data: Some(ResponseData {
                content: content.into(),
            }),
        }
    }
}

/// Payload relayed to the automation endpoint.
///
/// Absent fields are omitted from the JSON body rather than sent as null.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForwardPayload {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(rename = "userId", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(rename = "channelId", skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
    #[serde(rename = "guildId", skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<String>,
}
