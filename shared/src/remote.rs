//! Wire format of the generative completion endpoint and the mapping of its
//! HTTP results onto [`RemoteOutcome`].

use serde::{Deserialize, Serialize};

use crate::chat::{ConversationTurn, RemoteCallFailure, RemoteOutcome, Role};

pub const API_KEY_HEADER: &str = "x-goog-api-key";

pub const ADVISOR_SYSTEM_INSTRUCTION: &str = "You are Sofia Giordano, a world-class luxury client advisor. \
Tone: sophisticated, discreet, helpful. Keep responses concise but elegant.";

const MAX_ERROR_SNIPPET: usize = 120;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub system_instruction: Content,
}

impl GenerateContentRequest {
    /// Builds the request body from the full conversation, greeting included.
    #[must_use]
    pub fn from_turns(turns: &[ConversationTurn]) -> Self {
        Self {
            contents: turns
                .iter()
                .map(|turn| Content {
                    role: Some(wire_role(turn.role).to_owned()),
                    parts: vec![Part {
                        text: turn.text.clone(),
                    }],
                })
                .collect(),
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: ADVISOR_SYSTEM_INSTRUCTION.to_owned(),
                }],
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Text of the first candidate, parts concatenated. Empty when there is none.
    #[must_use]
    pub fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|candidate| candidate.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .map(|part| part.text.as_str())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

#[must_use]
pub const fn wire_role(role: Role) -> &'static str {
    match role {
        Role::User => "user",
        Role::Assistant => "model",
    }
}

/// Maps a finished HTTP exchange onto the chat outcome.
pub fn decode_reply(status: u16, body: &[u8]) -> RemoteOutcome {
    if !(200..300).contains(&status) {
        return Err(RemoteCallFailure::Status(status));
    }

    serde_json::from_slice::<GenerateContentResponse>(body)
        .map(|response| response.text())
        .map_err(|e| RemoteCallFailure::MalformedResponse(truncate(&e.to_string())))
}

/// Adapter for the `crux_http` callback.
pub fn outcome_from_http(result: crux_http::Result<crux_http::Response<Vec<u8>>>) -> RemoteOutcome {
    match result {
        Ok(mut response) => {
            let status: u16 = response.status().into();
            let body = response.take_body().unwrap_or_default();
            decode_reply(status, &body)
        }
        Err(e) => Err(RemoteCallFailure::Transport(truncate(&e.to_string()))),
    }
}

fn truncate(message: &str) -> String {
    if message.chars().count() <= MAX_ERROR_SNIPPET {
        message.to_owned()
    } else {
        let cut: String = message.chars().take(MAX_ERROR_SNIPPET).collect();
        format!("{cut}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    #[test]
    fn request_maps_roles_and_carries_persona() {
        let turns = vec![
            ConversationTurn::assistant("Good evening."),
            ConversationTurn::user("Is my jacket ready?"),
        ];
        let body = serde_json::to_value(GenerateContentRequest::from_turns(&turns)).unwrap();

        assert_eq!(
            body,
            json!({
                "contents": [
                    { "role": "model", "parts": [{ "text": "Good evening." }] },
                    { "role": "user", "parts": [{ "text": "Is my jacket ready?" }] }
                ],
                "systemInstruction": { "parts": [{ "text": ADVISOR_SYSTEM_INSTRUCTION }] }
            })
        );
    }

    #[test]
    fn reply_text_joins_first_candidate_parts() {
        let body = json!({
            "candidates": [
                { "content": { "role": "model", "parts": [{ "text": "Of course. " }, { "text": "Tomorrow at ten." }] } },
                { "content": { "parts": [{ "text": "ignored" }] } }
            ]
        });
        let reply = decode_reply(200, body.to_string().as_bytes());
        assert_eq!(reply, Ok("Of course. Tomorrow at ten.".to_owned()));
    }

    #[test]
    fn no_candidates_is_an_empty_reply() {
        assert_eq!(decode_reply(200, br#"{"candidates":[]}"#), Ok(String::new()));
        assert_eq!(decode_reply(200, b"{}"), Ok(String::new()));
    }

    #[test]
    fn error_status_is_a_failure() {
        assert_eq!(
            decode_reply(403, br#"{"error":{"message":"API key not valid"}}"#),
            Err(RemoteCallFailure::Status(403))
        );
    }

    #[test]
    fn garbage_body_is_malformed() {
        assert_matches!(
            decode_reply(200, b"<html>"),
            Err(RemoteCallFailure::MalformedResponse(_))
        );
    }

    #[test]
    fn long_errors_are_truncated() {
        let long = "x".repeat(500);
        let cut = truncate(&long);
        assert_eq!(cut.len(), MAX_ERROR_SNIPPET + 3);
        assert!(cut.ends_with("..."));
    }
}
