use serde::{Deserialize, Serialize};

use crate::chat::{ChatSession, ConversationTurn};
use crate::fixtures::{
    self, Advisor, AdvisorStatus, ClubEvent, EventTiming, MtoStatus, Product, RsvpStatus, Store,
    Wardrobe, ADVISOR, MEMBER, MTO_ORDER, PRODUCTS,
};
use crate::model::Model;
use crate::navigation::{ScreenId, Tab};

pub const PLACEHOLDER_MESSAGE: &str = "This private corridor is being prepared for your arrival.";

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductCard {
    pub id: String,
    pub name: String,
    pub category: String,
    pub image: String,
}

impl From<&Product> for ProductCard {
    fn from(p: &Product) -> Self {
        Self {
            id: p.id.to_owned(),
            name: p.name.to_owned(),
            category: p.category.to_owned(),
            image: p.image.to_owned(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct WardrobeCard {
    pub id: String,
    pub name: String,
    pub kind: String,
    pub cover_image: String,
    pub item_count: usize,
}

impl From<&Wardrobe> for WardrobeCard {
    fn from(w: &Wardrobe) -> Self {
        Self {
            id: w.id.to_string(),
            name: w.name.clone(),
            kind: w.kind.clone(),
            cover_image: w.cover_image.clone(),
            item_count: w.items.len(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct WardrobeDetail {
    pub id: String,
    pub name: String,
    pub kind: String,
    pub cover_image: String,
    pub items: Vec<ProductCard>,
}

impl From<&Wardrobe> for WardrobeDetail {
    fn from(w: &Wardrobe) -> Self {
        Self {
            id: w.id.to_string(),
            name: w.name.clone(),
            kind: w.kind.clone(),
            cover_image: w.cover_image.clone(),
            items: w.products().map(ProductCard::from).collect(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct EventCard {
    pub id: String,
    pub title: String,
    pub date: String,
    pub image: String,
    pub status: RsvpStatus,
    pub timing: EventTiming,
    pub description: String,
    pub privileges: Vec<String>,
}

impl From<&ClubEvent> for EventCard {
    fn from(e: &ClubEvent) -> Self {
        Self {
            id: e.id.to_string(),
            title: e.title.to_owned(),
            date: e.date.to_owned(),
            image: e.image.to_owned(),
            status: e.status,
            timing: e.timing,
            description: e.description.to_owned(),
            privileges: e.privileges.iter().map(|&p| p.to_owned()).collect(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MtoStageView {
    pub stage: String,
    pub date: String,
    pub note: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MtoView {
    pub name: String,
    pub date: String,
    pub status: MtoStatus,
    pub timeline: Vec<MtoStageView>,
}

impl MtoView {
    fn current() -> Self {
        Self {
            name: MTO_ORDER.name.to_owned(),
            date: MTO_ORDER.date.to_owned(),
            status: MTO_ORDER.status,
            timeline: MTO_ORDER
                .timeline
                .iter()
                .map(|s| MtoStageView {
                    stage: s.stage.to_owned(),
                    date: s.date.to_owned(),
                    note: s.note.map(str::to_owned),
                })
                .collect(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoreView {
    pub id: String,
    pub name: String,
    pub location: String,
    pub manager: String,
    pub image: String,
    pub is_home: bool,
}

impl From<&Store> for StoreView {
    fn from(s: &Store) -> Self {
        Self {
            id: s.id.to_owned(),
            name: s.name.to_owned(),
            location: s.location.to_owned(),
            manager: s.manager.to_owned(),
            image: s.image.to_owned(),
            is_home: s.is_home,
        }
    }
}

/// The advisor to show. While the assigned advisor is on leave, the replacement stands in.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdvisorView {
    pub name: String,
    pub avatar: String,
    pub on_leave: bool,
    pub stand_in: Option<String>,
}

impl From<&Advisor> for AdvisorView {
    fn from(a: &Advisor) -> Self {
        let on_leave = a.status == AdvisorStatus::OnLeave;
        let (name, avatar, stand_in) = match (on_leave, a.replacement_name, a.replacement_avatar) {
            (true, Some(name), Some(avatar)) => (name, avatar, Some(a.name.to_owned())),
            _ => (a.name, a.avatar, None),
        };
        Self {
            name: name.to_owned(),
            avatar: avatar.to_owned(),
            on_leave,
            stand_in,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MemberView {
    pub name: String,
    pub first_name: String,
    pub location: String,
    pub size: String,
    pub measurements: String,
    pub avatar: String,
    pub home_store: StoreView,
    pub visited_stores: Vec<StoreView>,
}

impl MemberView {
    fn current() -> Self {
        Self {
            name: MEMBER.name.to_owned(),
            first_name: MEMBER.first_name.to_owned(),
            location: MEMBER.location.to_owned(),
            size: MEMBER.size.to_owned(),
            measurements: MEMBER.measurements.to_owned(),
            avatar: MEMBER.avatar.to_owned(),
            home_store: StoreView::from(&MEMBER.home_store),
            visited_stores: MEMBER.visited_stores.iter().map(StoreView::from).collect(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScreenView {
    Welcome,
    Login {
        error: bool,
    },
    Home {
        member: MemberView,
        advisor: AdvisorView,
        wardrobes: Vec<WardrobeCard>,
        next_event: Option<EventCard>,
    },
    Wardrobes {
        wardrobes: Vec<WardrobeCard>,
    },
    /// `None` when the selected wardrobe id is unknown.
    WardrobeDetail {
        wardrobe: Option<WardrobeDetail>,
    },
    WardrobeListing {
        wardrobe: Option<WardrobeDetail>,
    },
    CreateWardrobe,
    AddItemMethod {
        wardrobe_name: Option<String>,
    },
    AddItemSelection {
        wardrobe_name: Option<String>,
        catalog: Vec<ProductCard>,
    },
    ScanItem {
        wardrobe_name: Option<String>,
        detected: Option<ProductCard>,
    },
    ProductDetail {
        product: Option<ProductCard>,
    },
    Events {
        upcoming: Vec<EventCard>,
        past: Vec<EventCard>,
    },
    EventDetail {
        event: Option<EventCard>,
    },
    Mto {
        order: MtoView,
    },
    StoreKey {
        member: MemberView,
    },
    Drops {
        catalog: Vec<ProductCard>,
    },
    Account {
        member: MemberView,
        advisor: AdvisorView,
    },
    PersonalPreferences,
    MySize {
        size: String,
        measurements: String,
    },
    PlanVisit {
        stores: Vec<StoreView>,
    },
    Placeholder {
        title: String,
        message: String,
    },
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatView {
    pub advisor_name: String,
    pub turns: Vec<ConversationTurn>,
    pub draft: String,
    pub is_typing: bool,
    pub can_send: bool,
}

impl From<&ChatSession> for ChatView {
    fn from(session: &ChatSession) -> Self {
        Self {
            advisor_name: ADVISOR.name.to_owned(),
            turns: session.turns().to_vec(),
            draft: session.draft().to_owned(),
            is_typing: session.is_awaiting(),
            can_send: session.can_submit(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TabView {
    pub tab: Tab,
    pub label: String,
    pub target: ScreenId,
    pub active: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ViewModel {
    pub screen: ScreenView,
    pub active_screen: ScreenId,
    pub show_tab_bar: bool,
    pub active_tab: Option<Tab>,
    /// Bottom bar entries; empty while the bar is hidden.
    pub tabs: Vec<TabView>,
    pub can_go_back: bool,
    pub back_target: ScreenId,
    /// Present while the advisor overlay is open.
    pub chat: Option<ChatView>,
}

impl ViewModel {
    #[must_use]
    pub fn project(model: &Model) -> Self {
        let navigator = &model.navigator;
        let active = navigator.active_screen();

        Self {
            screen: screen_view(active, model),
            active_screen: active,
            show_tab_bar: active.shows_tab_bar(),
            active_tab: active.tab(),
            tabs: tab_bar(active),
            can_go_back: navigator.prev_screen().is_some(),
            back_target: navigator.back_target(),
            chat: model.chat.as_ref().map(ChatView::from),
        }
    }
}

fn tab_bar(active: ScreenId) -> Vec<TabView> {
    if !active.shows_tab_bar() {
        return Vec::new();
    }
    Tab::BAR
        .iter()
        .map(|&tab| TabView {
            tab,
            label: tab.label().to_owned(),
            target: tab.target(),
            active: active.tab() == Some(tab),
        })
        .collect()
}

fn catalog() -> Vec<ProductCard> {
    PRODUCTS.iter().map(ProductCard::from).collect()
}

fn events_by_timing(model: &Model, timing: EventTiming) -> Vec<EventCard> {
    model
        .events
        .iter()
        .filter(|e| e.timing == timing)
        .map(EventCard::from)
        .collect()
}

fn screen_view(screen: ScreenId, model: &Model) -> ScreenView {
    let selected_name = || model.selected_wardrobe().map(|w| w.name.clone());

    match screen {
        ScreenId::Welcome => ScreenView::Welcome,
        ScreenId::Login => ScreenView::Login {
            error: model.login_error,
        },
        ScreenId::Home => ScreenView::Home {
            member: MemberView::current(),
            advisor: AdvisorView::from(&ADVISOR),
            wardrobes: model.wardrobes.iter().map(WardrobeCard::from).collect(),
            next_event: events_by_timing(model, EventTiming::Upcoming).into_iter().next(),
        },
        ScreenId::Wardrobe => ScreenView::Wardrobes {
            wardrobes: model.wardrobes.iter().map(WardrobeCard::from).collect(),
        },
        ScreenId::WardrobeDetail => ScreenView::WardrobeDetail {
            wardrobe: model.selected_wardrobe().map(WardrobeDetail::from),
        },
        ScreenId::WardrobeListing => ScreenView::WardrobeListing {
            wardrobe: model.selected_wardrobe().map(WardrobeDetail::from),
        },
        ScreenId::CreateWardrobe => ScreenView::CreateWardrobe,
        ScreenId::AddItemMethod => ScreenView::AddItemMethod {
            wardrobe_name: selected_name(),
        },
        ScreenId::AddItemSelection => ScreenView::AddItemSelection {
            wardrobe_name: selected_name(),
            catalog: catalog(),
        },
        ScreenId::ScanItem => ScreenView::ScanItem {
            wardrobe_name: selected_name(),
            detected: fixtures::scanned_product().map(ProductCard::from),
        },
        ScreenId::ProductDetail => ScreenView::ProductDetail {
            product: model.selected_product().map(ProductCard::from),
        },
        ScreenId::Events => ScreenView::Events {
            upcoming: events_by_timing(model, EventTiming::Upcoming),
            past: events_by_timing(model, EventTiming::Past),
        },
        ScreenId::EventDetail => ScreenView::EventDetail {
            event: model.selected_event().map(EventCard::from),
        },
        ScreenId::Mto => ScreenView::Mto {
            order: MtoView::current(),
        },
        ScreenId::StoreKey => ScreenView::StoreKey {
            member: MemberView::current(),
        },
        ScreenId::Drops => ScreenView::Drops { catalog: catalog() },
        ScreenId::Account => ScreenView::Account {
            member: MemberView::current(),
            advisor: AdvisorView::from(&ADVISOR),
        },
        ScreenId::PersonalPreferences => ScreenView::PersonalPreferences,
        ScreenId::MySize => ScreenView::MySize {
            size: MEMBER.size.to_owned(),
            measurements: MEMBER.measurements.to_owned(),
        },
        ScreenId::PlanVisit => ScreenView::PlanVisit {
            stores: std::iter::once(&MEMBER.home_store)
                .chain(MEMBER.visited_stores)
                .map(StoreView::from)
                .collect(),
        },
        other => ScreenView::Placeholder {
            title: other.placeholder_title(),
            message: PLACEHOLDER_MESSAGE.to_owned(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::SelectionParams;

    fn model_at(screen: ScreenId, params: SelectionParams) -> Model {
        let mut model = Model::default();
        model.navigator.navigate(screen, params);
        model
    }

    #[test]
    fn initial_view_is_welcome_without_tab_bar() {
        let view = ViewModel::project(&Model::default());
        assert_eq!(view.screen, ScreenView::Welcome);
        assert!(!view.show_tab_bar);
        assert!(!view.can_go_back);
        assert_eq!(view.back_target, ScreenId::Home);
        assert!(view.chat.is_none());
    }

    #[test]
    fn every_screen_without_a_view_gets_the_placeholder() {
        for screen in ScreenId::ALL {
            let view = ViewModel::project(&model_at(screen, SelectionParams::none()));
            let is_placeholder = matches!(view.screen, ScreenView::Placeholder { .. });
            assert_eq!(is_placeholder, !screen.is_built(), "{screen}");
        }
    }

    #[test]
    fn placeholder_title_replaces_first_hyphen_only() {
        let view = ViewModel::project(&model_at(ScreenId::CapsuleConfirm, SelectionParams::none()));
        assert_eq!(
            view.screen,
            ScreenView::Placeholder {
                title: "capsule confirm".into(),
                message: PLACEHOLDER_MESSAGE.into(),
            }
        );

        let view = ViewModel::project(&model_at(ScreenId::CollectionLanding, SelectionParams::none()));
        assert!(matches!(view.screen, ScreenView::Placeholder { ref title, .. } if title == "collection landing"));
    }

    #[test]
    fn unknown_wardrobe_renders_not_found() {
        let view = ViewModel::project(&model_at(ScreenId::WardrobeDetail, SelectionParams::wardrobe("w404")));
        assert_eq!(view.screen, ScreenView::WardrobeDetail { wardrobe: None });
    }

    #[test]
    fn wardrobe_detail_resolves_items() {
        let view = ViewModel::project(&model_at(ScreenId::WardrobeDetail, SelectionParams::wardrobe("w1")));
        let ScreenView::WardrobeDetail { wardrobe: Some(detail) } = view.screen else {
            panic!("expected wardrobe detail");
        };
        assert_eq!(detail.name, "Winter Vacation");
        let ids: Vec<_> = detail.items.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["lp1", "lp2", "lp3", "lp4"]);
    }

    #[test]
    fn events_are_split_by_timing() {
        let view = ViewModel::project(&model_at(ScreenId::Events, SelectionParams::none()));
        let ScreenView::Events { upcoming, past } = view.screen else {
            panic!("expected events");
        };
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].id, "giraglia-2025");
        assert_eq!(past.len(), 2);
    }

    #[test]
    fn shop_tab_highlights_on_drops() {
        let view = ViewModel::project(&model_at(ScreenId::Drops, SelectionParams::none()));
        assert_eq!(view.active_tab, Some(Tab::Shop));
        assert!(view.show_tab_bar);

        let labels: Vec<_> = view.tabs.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, ["Home", "Wardrobe", "Shop", "MTO", "Events", "Account"]);
        let active: Vec<_> = view.tabs.iter().filter(|t| t.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].target, ScreenId::Drops);
    }

    #[test]
    fn hidden_bar_has_no_tabs() {
        let view = ViewModel::project(&model_at(ScreenId::StoreKey, SelectionParams::none()));
        assert!(view.tabs.is_empty());
    }

    #[test]
    fn replacement_advisor_stands_in_while_on_leave() {
        let advisor = AdvisorView::from(&ADVISOR);
        assert!(advisor.on_leave);
        assert_eq!(advisor.name, "Marco Rossi");
        assert_eq!(advisor.stand_in.as_deref(), Some("Sofia Giordano"));
    }

    #[test]
    fn view_serializes_with_type_tag() {
        let view = ViewModel::project(&model_at(ScreenId::Login, SelectionParams::none()));
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["screen"]["type"], "login");
        assert_eq!(json["active_screen"], "login");
    }
}
