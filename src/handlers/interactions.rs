use axum::{body::Bytes, extract::State, http::HeaderMap, response::Json};
use tracing::{debug, info, warn};

use crate::app_state::AppState;
use crate::error::{ApiError, Result};
use crate::models::{interaction_type, ForwardPayload, Interaction, InteractionResponse};

const SIGNATURE_HEADER: &str = "x-signature-ed25519";
const TIMESTAMP_HEADER: &str = "x-signature-timestamp";

/// POST /interactions
///
/// Authenticates the raw request bytes before any parsing, then dispatches on
/// the interaction type. The relay for recognized commands runs on a
/// detached task so the platform's response deadline is never at risk.
pub async fn handle_interaction(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<InteractionResponse>> {
    let signature = header_str(&headers, SIGNATURE_HEADER);
    let timestamp = header_str(&headers, TIMESTAMP_HEADER);

    let (Some(signature), Some(timestamp)) = (signature, timestamp) else {
        warn!("Interaction rejected: missing signature headers");
        return Err(ApiError::bad_signature());
    };

    if !state.verifier.verify(signature, timestamp, &body) {
        warn!("Interaction rejected: signature verification failed");
        return Err(ApiError::bad_signature());
    }

    // Only authenticated bytes are ever interpreted.
    let interaction: Interaction = serde_json::from_slice(&body)
        .map_err(|e| ApiError::BadRequest(format!("Malformed interaction payload: {}", e)))?;

    match interaction.kind {
        interaction_type::PING => {
            debug!("Liveness probe acknowledged");
            Ok(Json(InteractionResponse::pong()))
        }
        interaction_type::APPLICATION_COMMAND => handle_command(&state, &interaction),
        other => {
            debug!(kind = other, "Unrecognized interaction type");
            Ok(Json(InteractionResponse::message("❌ Unknown command.")))
        }
    }
}

fn handle_command(state: &AppState, interaction: &Interaction) -> Result<Json<InteractionResponse>> {
    let Some(data) = interaction.data.as_ref() else {
        return Err(ApiError::BadRequest(
            "Command invocation without command data".to_string(),
        ));
    };

    if data.name != "audit" {
        info!(command = %data.name, "Unrecognized command");
        return Ok(Json(InteractionResponse::message("❌ Unknown command.")));
    }

    let url = data
        .options
        .first()
        .map(|option| option.value.trim())
        .filter(|value| !value.is_empty())
        .ok_or_else(|| {
            ApiError::BadRequest("Audit command is missing its target URL option".to_string())
        })?
        .to_string();

    let payload = ForwardPayload {
        url: url.clone(),
        user: interaction
            .member
            .as_ref()
            .map(|member| member.user.username.clone()),
        user_id: interaction.member.as_ref().map(|member| member.user.id.clone()),
        channel_id: interaction.channel_id.clone(),
        guild_id: interaction.guild_id.clone(),
    };

    info!(url = %url, "Audit command accepted, relaying");
    state.relay.dispatch(payload);

    Ok(Json(InteractionResponse::message(format!(
        "✅ Sent {} to the automation endpoint for audit!",
        url
    ))))
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|value| value.to_str().ok())
}
