use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::{debug, info};
use uuid::Uuid;

use crate::chat::{ChatSession, ReplySource, RemoteOutcome, RequestId};
use crate::config::{ConciergeConfig, ConfigError};
use crate::fixtures::{self, CatalogError, ClubEvent, RsvpStatus, Wardrobe, PRODUCTS};
use crate::navigation::{EventId, Navigator, ProductId, WardrobeId};
use crate::responder::ResponseScript;

/// Pieces picked for a freshly curated wardrobe.
pub const CURATED_WARDROBE_SIZE: usize = 5;
pub const CURATED_WARDROBE_KIND: &str = "Curated";

/// Session state. Lives as long as the shell keeps the core alive; nothing is persisted.
#[derive(Debug)]
pub struct Model {
    pub navigator: Navigator,
    /// Present while the advisor overlay is open.
    pub chat: Option<ChatSession>,
    pub wardrobes: Vec<Wardrobe>,
    pub events: Vec<ClubEvent>,
    pub login_error: bool,
    pub config: ConciergeConfig,
    pub script: ResponseScript,
    pub rng: StdRng,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            navigator: Navigator::default(),
            chat: None,
            wardrobes: fixtures::initial_wardrobes(),
            events: fixtures::initial_events(),
            login_error: false,
            config: ConciergeConfig::default(),
            script: ResponseScript::concierge(),
            rng: StdRng::from_entropy(),
        }
    }
}

impl Model {
    /// Validates and installs a new configuration. On error the previous one stays.
    pub fn apply_config(&mut self, config: ConciergeConfig) -> Result<(), ConfigError> {
        config.validate()?;

        if let Some(seed) = config.reply_seed {
            self.rng = StdRng::seed_from_u64(seed);
        }

        info!(
            remote_enabled = config.api_key().is_some(),
            model = %config.model,
            timeout_secs = config.remote_timeout_secs,
            "configuration applied"
        );
        self.config = config;
        Ok(())
    }

    #[must_use]
    pub fn wardrobe(&self, id: &WardrobeId) -> Option<&Wardrobe> {
        self.wardrobes.iter().find(|w| &w.id == id)
    }

    #[must_use]
    pub fn event(&self, id: &EventId) -> Option<&ClubEvent> {
        self.events.iter().find(|e| &e.id == id)
    }

    #[must_use]
    pub fn selected_wardrobe(&self) -> Option<&Wardrobe> {
        self.navigator
            .selection()
            .wardrobe
            .as_ref()
            .and_then(|id| self.wardrobe(id))
    }

    #[must_use]
    pub fn selected_event(&self) -> Option<&ClubEvent> {
        self.navigator
            .selection()
            .event
            .as_ref()
            .and_then(|id| self.event(id))
    }

    #[must_use]
    pub fn selected_product(&self) -> Option<&'static fixtures::Product> {
        self.navigator
            .selection()
            .product
            .as_ref()
            .and_then(|id| fixtures::product(id.as_str()))
    }

    /// Opens a fresh chat session, or drops the current one when closing.
    pub fn toggle_chat(&mut self) {
        if self.navigator.toggle_chat() {
            self.chat = Some(ChatSession::opened(fixtures::advisor_greeting()));
        } else {
            self.chat = None;
        }
    }

    /// Hands a remote outcome to the open session. Without a session the outcome is dropped.
    pub fn resolve_chat(&mut self, request_id: RequestId, outcome: RemoteOutcome) -> Option<ReplySource> {
        let Self {
            chat, script, rng, ..
        } = self;

        match chat.as_mut() {
            Some(session) => session.resolve(request_id, outcome, script, rng),
            None => {
                debug!(%request_id, "reply arrived after chat closed");
                None
            }
        }
    }

    /// Builds a wardrobe of distinct random catalog pieces and returns its id.
    pub fn curate_wardrobe(&mut self, name: &str, location: Option<&str>) -> Result<WardrobeId, CatalogError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CatalogError::EmptyWardrobeName);
        }

        let picked: Vec<_> = PRODUCTS
            .choose_multiple(&mut self.rng, CURATED_WARDROBE_SIZE)
            .collect();

        let kind = location
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .unwrap_or(CURATED_WARDROBE_KIND);

        let wardrobe = Wardrobe {
            id: WardrobeId::new(Uuid::new_v4().simple().to_string()),
            name: name.to_owned(),
            kind: kind.to_owned(),
            cover_image: picked.first().map(|p| p.image.to_owned()).unwrap_or_default(),
            items: picked.iter().map(|p| ProductId::new(p.id)).collect(),
        };

        let id = wardrobe.id.clone();
        info!(wardrobe_id = %id, items = wardrobe.items.len(), "wardrobe curated");
        self.wardrobes.push(wardrobe);
        Ok(id)
    }

    /// Appends a catalog piece to the selected wardrobe and returns that wardrobe's id.
    pub fn add_item_to_selected(&mut self, product_id: &ProductId) -> Result<WardrobeId, CatalogError> {
        if fixtures::product(product_id.as_str()).is_none() {
            return Err(CatalogError::UnknownProduct(product_id.clone()));
        }

        let wardrobe_id = self
            .navigator
            .selection()
            .wardrobe
            .clone()
            .ok_or(CatalogError::NoWardrobeSelected)?;

        let wardrobe = self
            .wardrobes
            .iter_mut()
            .find(|w| w.id == wardrobe_id)
            .ok_or_else(|| CatalogError::UnknownWardrobe(wardrobe_id.clone()))?;

        wardrobe.items.push(product_id.clone());
        info!(%wardrobe_id, %product_id, "item added to wardrobe");
        Ok(wardrobe_id)
    }

    pub fn set_rsvp(&mut self, event_id: &EventId, status: RsvpStatus) -> Result<(), CatalogError> {
        let event = self
            .events
            .iter_mut()
            .find(|e| &e.id == event_id)
            .ok_or_else(|| CatalogError::UnknownEvent(event_id.clone()))?;

        event.status = status;
        info!(%event_id, ?status, "rsvp updated");
        Ok(())
    }
}
