//! Screen navigation: the closed set of screens, the sticky selection fields and
//! the state container that owns both.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

// --- Typed IDs ---

macro_rules! typed_id {
    ($name:ident) => {
        #[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(s: impl Into<String>) -> Self {
                Self(s.into())
            }
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_owned())
            }
        }
    };
}

typed_id!(WardrobeId);
typed_id!(EventId);
typed_id!(ProductId);
typed_id!(CapsuleItemId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScreenId {
    #[default]
    Welcome,
    Login,
    Home,
    Wardrobe,
    WardrobeDetail,
    CreateWardrobe,
    WardrobeListing,
    Events,
    EventDetail,
    ProductDetail,
    Drops,
    Account,
    Mto,
    MtoDetail,
    StoreKey,
    CaDetail,
    FamilySizes,
    ExclusiveAccess,
    AddItemSelection,
    AddItemMethod,
    ScanItem,
    PersonalPreferences,
    MySize,
    PlanVisit,
    OrderHistory,
    CollectionLanding,
    CapsuleCarousel,
    CapsuleConfirm,
}

/// Bottom navigation entries. `Account` is the avatar button at the end of the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    Home,
    Wardrobe,
    Shop,
    Mto,
    Events,
    Account,
}

impl Tab {
    pub const BAR: [Tab; 6] = [
        Tab::Home,
        Tab::Wardrobe,
        Tab::Shop,
        Tab::Mto,
        Tab::Events,
        Tab::Account,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Wardrobe => "Wardrobe",
            Self::Shop => "Shop",
            Self::Mto => "MTO",
            Self::Events => "Events",
            Self::Account => "Account",
        }
    }

    #[must_use]
    pub const fn target(self) -> ScreenId {
        match self {
            Self::Home => ScreenId::Home,
            Self::Wardrobe => ScreenId::Wardrobe,
            Self::Shop => ScreenId::Drops,
            Self::Mto => ScreenId::Mto,
            Self::Events => ScreenId::Events,
            Self::Account => ScreenId::Account,
        }
    }
}

impl ScreenId {
    pub const ALL: [ScreenId; 28] = [
        Self::Welcome,
        Self::Login,
        Self::Home,
        Self::Wardrobe,
        Self::WardrobeDetail,
        Self::CreateWardrobe,
        Self::WardrobeListing,
        Self::Events,
        Self::EventDetail,
        Self::ProductDetail,
        Self::Drops,
        Self::Account,
        Self::Mto,
        Self::MtoDetail,
        Self::StoreKey,
        Self::CaDetail,
        Self::FamilySizes,
        Self::ExclusiveAccess,
        Self::AddItemSelection,
        Self::AddItemMethod,
        Self::ScanItem,
        Self::PersonalPreferences,
        Self::MySize,
        Self::PlanVisit,
        Self::OrderHistory,
        Self::CollectionLanding,
        Self::CapsuleCarousel,
        Self::CapsuleConfirm,
    ];

    /// Where `go_back` lands when there is nothing usable to return to.
    pub const BACK_DEFAULT: ScreenId = ScreenId::Home;

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Welcome => "welcome",
            Self::Login => "login",
            Self::Home => "home",
            Self::Wardrobe => "wardrobe",
            Self::WardrobeDetail => "wardrobe-detail",
            Self::CreateWardrobe => "create-wardrobe",
            Self::WardrobeListing => "wardrobe-listing",
            Self::Events => "events",
            Self::EventDetail => "event-detail",
            Self::ProductDetail => "product-detail",
            Self::Drops => "drops",
            Self::Account => "account",
            Self::Mto => "mto",
            Self::MtoDetail => "mto-detail",
            Self::StoreKey => "store-key",
            Self::CaDetail => "ca-detail",
            Self::FamilySizes => "family-sizes",
            Self::ExclusiveAccess => "exclusive-access",
            Self::AddItemSelection => "add-item-selection",
            Self::AddItemMethod => "add-item-method",
            Self::ScanItem => "scan-item",
            Self::PersonalPreferences => "personal-preferences",
            Self::MySize => "my-size",
            Self::PlanVisit => "plan-visit",
            Self::OrderHistory => "order-history",
            Self::CollectionLanding => "collection-landing",
            Self::CapsuleCarousel => "capsule-carousel",
            Self::CapsuleConfirm => "capsule-confirm",
        }
    }

    /// The bottom bar is hidden on the entry flow and on the full-screen store pass.
    #[must_use]
    pub const fn shows_tab_bar(self) -> bool {
        !matches!(self, Self::Login | Self::Welcome | Self::StoreKey)
    }

    /// The tab highlighted while this screen is active, if any.
    #[must_use]
    pub const fn tab(self) -> Option<Tab> {
        match self {
            Self::Home => Some(Tab::Home),
            Self::Wardrobe => Some(Tab::Wardrobe),
            Self::Drops => Some(Tab::Shop),
            Self::Mto => Some(Tab::Mto),
            Self::Events => Some(Tab::Events),
            Self::Account => Some(Tab::Account),
            _ => None,
        }
    }

    /// Screens that have a dedicated view. Everything else renders the placeholder corridor.
    #[must_use]
    pub const fn is_built(self) -> bool {
        matches!(
            self,
            Self::Welcome
                | Self::Login
                | Self::Home
                | Self::Wardrobe
                | Self::WardrobeDetail
                | Self::CreateWardrobe
                | Self::WardrobeListing
                | Self::AddItemSelection
                | Self::ProductDetail
                | Self::Mto
                | Self::StoreKey
                | Self::Events
                | Self::EventDetail
                | Self::AddItemMethod
                | Self::ScanItem
                | Self::Drops
                | Self::Account
                | Self::PersonalPreferences
                | Self::MySize
                | Self::PlanVisit
        )
    }

    /// Title shown on the placeholder: only the first hyphen becomes a space.
    #[must_use]
    pub fn placeholder_title(self) -> String {
        self.as_str().replacen('-', " ", 1)
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optional selection updates merged into the navigator by `navigate`.
///
/// Only `Some` fields overwrite; `None` leaves the current selection untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SelectionParams {
    #[serde(default)]
    pub wardrobe: Option<WardrobeId>,
    #[serde(default)]
    pub event: Option<EventId>,
    #[serde(default)]
    pub product: Option<ProductId>,
    #[serde(default)]
    pub capsule_item: Option<CapsuleItemId>,
}

impl SelectionParams {
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn wardrobe(id: impl Into<WardrobeId>) -> Self {
        Self {
            wardrobe: Some(id.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn event(id: impl Into<EventId>) -> Self {
        Self {
            event: Some(id.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn product(id: impl Into<ProductId>) -> Self {
        Self {
            product: Some(id.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn capsule_item(id: impl Into<CapsuleItemId>) -> Self {
        Self {
            capsule_item: Some(id.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.wardrobe.is_none()
            && self.event.is_none()
            && self.product.is_none()
            && self.capsule_item.is_none()
    }
}

/// Foreign keys into the fixture catalog. Sticky across navigation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub wardrobe: Option<WardrobeId>,
    pub event: Option<EventId>,
    pub product: Option<ProductId>,
    pub capsule_item: Option<CapsuleItemId>,
}

impl Selection {
    fn merge(&mut self, params: SelectionParams) {
        let SelectionParams {
            wardrobe,
            event,
            product,
            capsule_item,
        } = params;

        if wardrobe.is_some() {
            self.wardrobe = wardrobe;
        }
        if event.is_some() {
            self.event = event;
        }
        if product.is_some() {
            self.product = product;
        }
        if capsule_item.is_some() {
            self.capsule_item = capsule_item;
        }
    }
}

/// Owns the active screen, the one-step history and the selection.
///
/// `navigate`, `go_back` and `toggle_chat` are the only mutators.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Navigator {
    active: ScreenId,
    prev: Option<ScreenId>,
    selection: Selection,
    chat_open: bool,
}

impl Navigator {
    #[must_use]
    pub fn new(initial: ScreenId) -> Self {
        Self {
            active: initial,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn active_screen(&self) -> ScreenId {
        self.active
    }

    #[must_use]
    pub const fn prev_screen(&self) -> Option<ScreenId> {
        self.prev
    }

    #[must_use]
    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    #[must_use]
    pub const fn chat_open(&self) -> bool {
        self.chat_open
    }

    /// Target of the next `go_back`.
    #[must_use]
    pub fn back_target(&self) -> ScreenId {
        match self.prev {
            Some(prev) if prev != self.active => prev,
            _ => ScreenId::BACK_DEFAULT,
        }
    }

    pub fn navigate(&mut self, screen: ScreenId, params: SelectionParams) {
        debug!(from = %self.active, to = %screen, selects = !params.is_empty(), "navigate");
        self.prev = Some(self.active);
        self.active = screen;
        self.selection.merge(params);
    }

    /// One step back. Not a history stack: two calls in a row bounce between the same pair.
    pub fn go_back(&mut self) {
        let target = self.back_target();
        self.navigate(target, SelectionParams::none());
    }

    pub fn toggle_chat(&mut self) -> bool {
        self.chat_open = !self.chat_open;
        self.chat_open
    }
}
