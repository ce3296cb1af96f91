//! Advisor chat session: the turn log, the draft and the single in-flight request.

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::responder::ResponseScript;

/// Shown when the remote call succeeds with an empty reply.
pub const REMOTE_REPLY_PLACEHOLDER: &str = "I'll check that for you.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: Role,
    pub text: String,
}

impl ConversationTurn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            text: text.into(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestId(pub Uuid);

impl RequestId {
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Every way the remote completion can fail. All of them end in the scripted reply.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum RemoteCallFailure {
    #[error("no API key configured")]
    MissingCredentials,

    #[error("transport error: {0}")]
    Transport(String),

    #[error("remote returned HTTP {0}")]
    Status(u16),

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("no reply within the timeout")]
    Timeout,
}

impl RemoteCallFailure {
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::MissingCredentials => "MISSING_CREDENTIALS",
            Self::Transport(_) => "TRANSPORT",
            Self::Status(_) => "HTTP_STATUS",
            Self::MalformedResponse(_) => "MALFORMED_RESPONSE",
            Self::Timeout => "TIMEOUT",
        }
    }
}

pub type RemoteOutcome = Result<String, RemoteCallFailure>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum ChatPhase {
    #[default]
    Idle,
    AwaitingRemote {
        request_id: RequestId,
        elapsed_ticks: u32,
    },
}

impl ChatPhase {
    #[must_use]
    pub const fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}

/// What the caller needs to issue the remote call for a freshly submitted message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSend {
    pub request_id: RequestId,
    pub message: String,
    pub history: Vec<ConversationTurn>,
}

/// How a resolved request was answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplySource {
    Remote,
    Scripted,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChatSession {
    turns: Vec<ConversationTurn>,
    draft: String,
    phase: ChatPhase,
    pending_message: Option<String>,
}

impl ChatSession {
    /// A fresh session opening with the advisor's greeting.
    pub fn opened(greeting: impl Into<String>) -> Self {
        Self {
            turns: vec![ConversationTurn::assistant(greeting)],
            ..Self::default()
        }
    }

    #[must_use]
    pub fn turns(&self) -> &[ConversationTurn] {
        &self.turns
    }

    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    #[must_use]
    pub const fn phase(&self) -> ChatPhase {
        self.phase
    }

    #[must_use]
    pub const fn is_awaiting(&self) -> bool {
        !self.phase.is_idle()
    }

    /// Send is possible only while idle and with something other than whitespace typed.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.phase.is_idle() && !self.draft.trim().is_empty()
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Moves the draft into the log and starts waiting for a reply.
    ///
    /// Returns `None` and changes nothing when the draft is blank or a reply is pending.
    pub fn submit(&mut self) -> Option<PendingSend> {
        if !self.can_submit() {
            debug!(awaiting = self.is_awaiting(), "chat submit ignored");
            return None;
        }

        let message = std::mem::take(&mut self.draft);
        self.turns.push(ConversationTurn::user(message.clone()));

        let request_id = RequestId::generate();
        self.phase = ChatPhase::AwaitingRemote {
            request_id,
            elapsed_ticks: 0,
        };
        self.pending_message = Some(message.clone());

        info!(%request_id, turns = self.turns.len(), "chat message submitted");

        Some(PendingSend {
            request_id,
            message,
            history: self.turns.clone(),
        })
    }

    /// Finishes the pending request. Stale ids are ignored and return `None`.
    pub fn resolve<R: Rng + ?Sized>(
        &mut self,
        request_id: RequestId,
        outcome: RemoteOutcome,
        script: &ResponseScript,
        rng: &mut R,
    ) -> Option<ReplySource> {
        match self.phase {
            ChatPhase::AwaitingRemote { request_id: current, .. } if current == request_id => {}
            _ => {
                debug!(%request_id, "stale chat reply dropped");
                return None;
            }
        }

        let message = self.pending_message.take().unwrap_or_default();

        let (text, source) = match outcome {
            Ok(text) if text.trim().is_empty() => {
                (REMOTE_REPLY_PLACEHOLDER.to_owned(), ReplySource::Remote)
            }
            Ok(text) => (text, ReplySource::Remote),
            Err(failure) => {
                warn!(%request_id, reason = failure.code(), "remote reply unavailable, using script");
                (script.classify(&message, rng).to_owned(), ReplySource::Scripted)
            }
        };

        self.turns.push(ConversationTurn::assistant(text));
        self.phase = ChatPhase::Idle;
        Some(source)
    }

    /// Counts one timer tick against the pending request.
    ///
    /// Returns the request id once `timeout_ticks` is reached; the caller resolves it as a timeout.
    pub fn tick(&mut self, timeout_ticks: u32) -> Option<RequestId> {
        match &mut self.phase {
            ChatPhase::Idle => None,
            ChatPhase::AwaitingRemote {
                request_id,
                elapsed_ticks,
            } => {
                *elapsed_ticks = elapsed_ticks.saturating_add(1);
                (*elapsed_ticks >= timeout_ticks).then_some(*request_id)
            }
        }
    }
}
