use serde::{Deserialize, Serialize};

use crate::chat::{RemoteOutcome, RequestId};
use crate::config::ConciergeConfig;
use crate::fixtures::RsvpStatus;
use crate::navigation::{EventId, ProductId, ScreenId, SelectionParams};

/// How a piece reached the add-item flow. Decides where the app goes afterwards.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AddItemOrigin {
    /// Identified by the camera lens; returns to the wardrobe.
    Scan,
    /// Picked from the catalog list; returns to the previous screen.
    Catalog,
}

// --- Event enum: large variants boxed ---

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub enum Event {
    #[default]
    Noop,

    AppStarted,
    /// Shell to core only: the API key is never written back out.
    #[serde(skip_serializing)]
    Configure(Box<ConciergeConfig>),

    // Navigation
    Navigate {
        screen: ScreenId,
        params: SelectionParams,
    },
    GoBack,
    ToggleChat,

    // Advisor chat
    ChatDraftChanged {
        text: String,
    },
    ChatSubmitted,
    RemoteReplyReceived {
        request_id: RequestId,
        outcome: Box<RemoteOutcome>,
    },
    TimerTick,

    // Entry
    LoginCodeEntered {
        code: String,
    },

    // Wardrobes & events
    WardrobeCurated {
        name: String,
        location: Option<String>,
    },
    ItemAdded {
        product_id: ProductId,
        origin: AddItemOrigin,
    },
    EventRsvp {
        event_id: EventId,
        status: RsvpStatus,
    },
}

impl Event {
    /// Plain navigation without selection changes.
    #[must_use]
    pub fn navigate(screen: ScreenId) -> Self {
        Self::Navigate {
            screen,
            params: SelectionParams::none(),
        }
    }

    #[must_use]
    pub fn navigate_with(screen: ScreenId, params: SelectionParams) -> Self {
        Self::Navigate { screen, params }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Noop => "noop",
            Self::AppStarted => "app_started",
            Self::Configure(_) => "configure",
            Self::Navigate { .. } => "navigate",
            Self::GoBack => "go_back",
            Self::ToggleChat => "toggle_chat",
            Self::ChatDraftChanged { .. } => "chat_draft_changed",
            Self::ChatSubmitted => "chat_submitted",
            Self::RemoteReplyReceived { .. } => "remote_reply_received",
            Self::TimerTick => "timer_tick",
            Self::LoginCodeEntered { .. } => "login_code_entered",
            Self::WardrobeCurated { .. } => "wardrobe_curated",
            Self::ItemAdded { .. } => "item_added",
            Self::EventRsvp { .. } => "event_rsvp",
        }
    }

    #[must_use]
    pub const fn is_user_initiated(&self) -> bool {
        matches!(
            self,
            Self::Navigate { .. }
                | Self::GoBack
                | Self::ToggleChat
                | Self::ChatDraftChanged { .. }
                | Self::ChatSubmitted
                | Self::LoginCodeEntered { .. }
                | Self::WardrobeCurated { .. }
                | Self::ItemAdded { .. }
                | Self::EventRsvp { .. }
        )
    }
}
