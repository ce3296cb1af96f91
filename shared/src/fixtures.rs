//! Hard-coded catalog standing in for a backend.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::navigation::{EventId, ProductId, WardrobeId};

const ASSETS: &str = "https://raw.githubusercontent.com/marcelorm81/LP_assets";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("product not found: {0}")]
    UnknownProduct(ProductId),
    #[error("wardrobe not found: {0}")]
    UnknownWardrobe(WardrobeId),
    #[error("event not found: {0}")]
    UnknownEvent(EventId),
    #[error("no wardrobe selected")]
    NoWardrobeSelected,
    #[error("wardrobe name cannot be empty")]
    EmptyWardrobeName,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Product {
    pub id: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    pub image: &'static str,
}

pub static PRODUCTS: &[Product] = &[
    Product { id: "lp1", name: "Cashmere High Neck", category: "Knitwear", image: "https://raw.githubusercontent.com/marcelorm81/LP_assets/ea4f9b2cf53770c9aed50b9db962a88c1d08e575/product_loro_1.jpg" },
    Product { id: "lp2", name: "Vicuña Overcoat", category: "Outerwear", image: "https://raw.githubusercontent.com/marcelorm81/LP_assets/ea4f9b2cf53770c9aed50b9db962a88c1d08e575/product_loro_2.jpg" },
    Product { id: "lp3", name: "Storm System® Jacket", category: "Outerwear", image: "https://raw.githubusercontent.com/marcelorm81/LP_assets/ea4f9b2cf53770c9aed50b9db962a88c1d08e575/product_loro_3.jpg" },
    Product { id: "lp4", name: "Winter Trousers", category: "Trousers", image: "https://raw.githubusercontent.com/marcelorm81/LP_assets/ea4f9b2cf53770c9aed50b9db962a88c1d08e575/product_loro_4.jpg" },
    Product { id: "lp5", name: "André Silk Shirt", category: "Shirts", image: "https://raw.githubusercontent.com/marcelorm81/LP_assets/ea4f9b2cf53770c9aed50b9db962a88c1d08e575/product_loro_5.jpg" },
    Product { id: "lp6", name: "Linen Blazer", category: "Jackets", image: "https://raw.githubusercontent.com/marcelorm81/LP_assets/ea4f9b2cf53770c9aed50b9db962a88c1d08e575/product_loro_6.jpg" },
    Product { id: "lp7", name: "Pleated Skirt", category: "Trousers", image: "https://raw.githubusercontent.com/marcelorm81/LP_assets/ea4f9b2cf53770c9aed50b9db962a88c1d08e575/product_loro_7.jpg" },
    Product { id: "lp8", name: "Summer Knit", category: "Knitwear", image: "https://raw.githubusercontent.com/marcelorm81/LP_assets/ea4f9b2cf53770c9aed50b9db962a88c1d08e575/product_loro_8.jpg" },
    Product { id: "lp9", name: "Martingala Cashmere Coat", category: "Outerwear", image: "https://media.loropiana.com/HYBRIS/FAP/FAP2569/4A58C083-0035-48A2-B354-80297E7372C1/FAP2569_T1N8_MEDIUM.jpg?sw=300&sh=400" },
    Product { id: "lp10", name: "Summer Charms Walk Loafers", category: "Shoes", image: "https://media.loropiana.com/HYBRIS/FAO/FAO9704/461F3132-DCCD-4F23-A484-A48B2019B911/FAO9704_20GI_MEDIUM.jpg?sw=300&sh=400" },
    Product { id: "lp11", name: "Sesia Pouch", category: "Accessories", image: "https://media.loropiana.com/HYBRIS/FAP/FAP0271/97F78F41-3F80-467E-B357-8076C0C585E7/FAP0271_T1N4_MEDIUM.jpg?sw=300&sh=400" },
    Product { id: "lp12", name: "360 Flexy Walk Sneaker", category: "Shoes", image: "https://media.loropiana.com/HYBRIS/FAP/FAP5226/A1BE2AEE-A86A-491F-B23D-9905E73D83DE/FAP5226_20DS_MEDIUM.jpg?sw=300&sh=400" },
    Product { id: "lp13", name: "Girocollo Cashmere Sweater", category: "Knitwear", image: "https://media.loropiana.com/HYBRIS/FAP/FAP4708/CF0BD6B6-9735-445A-B6B1-76BC0E97F257/FAP4708_B577_MEDIUM.jpg?sw=300&sh=400" },
    Product { id: "lp14", name: "Bespoke Vicuña Scarf", category: "Accessories", image: "https://images.unsplash.com/photo-1544005313-94ddf0286df2?auto=format&fit=crop&q=80&w=800" },
];

#[must_use]
pub fn product(id: &str) -> Option<&'static Product> {
    PRODUCTS.iter().find(|p| p.id == id)
}

/// The piece the lens recognises. Recognition is simulated, so it is always the same one.
#[must_use]
pub fn scanned_product() -> Option<&'static Product> {
    product("lp1")
}

/// A named set of catalog pieces. Items reference the catalog by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wardrobe {
    pub id: WardrobeId,
    pub name: String,
    pub kind: String,
    pub cover_image: String,
    pub items: Vec<ProductId>,
}

impl Wardrobe {
    /// Items resolved against the catalog; ids the catalog doesn't know are skipped.
    pub fn products(&self) -> impl Iterator<Item = &'static Product> + '_ {
        self.items.iter().filter_map(|id| product(id.as_str()))
    }
}

fn wardrobe(id: &str, name: &str, kind: &str, cover: &str, items: &[&str]) -> Wardrobe {
    Wardrobe {
        id: WardrobeId::new(id),
        name: name.to_owned(),
        kind: kind.to_owned(),
        cover_image: format!("{ASSETS}/01e89b9bcbf16e10ac5d32eca7e9fb6487796d7e/{cover}"),
        items: items.iter().map(|&id| ProductId::new(id)).collect(),
    }
}

#[must_use]
pub fn initial_wardrobes() -> Vec<Wardrobe> {
    vec![
        wardrobe("w1", "Winter Vacation", "Seasonal", "Wardrobe_winter.png", &["lp1", "lp2", "lp3", "lp4"]),
        wardrobe("w2", "Tokyo Apartment", "Primary", "Wardrobe_everyday.png", &["lp5", "lp6", "lp7", "lp8"]),
        wardrobe("w3", "Sailing Retreat", "Travel", "Wardrobe_chic.png", &["lp10", "lp11", "lp12", "lp14"]),
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RsvpStatus {
    #[default]
    None,
    Confirmed,
    Declined,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventTiming {
    Upcoming,
    Past,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClubEvent {
    pub id: EventId,
    pub title: &'static str,
    pub date: &'static str,
    pub image: &'static str,
    pub status: RsvpStatus,
    pub timing: EventTiming,
    pub description: &'static str,
    pub privileges: &'static [&'static str],
}

#[must_use]
pub fn initial_events() -> Vec<ClubEvent> {
    vec![
        ClubEvent {
            id: EventId::new("giraglia-2025"),
            title: "Giraglia 2025",
            date: "09-19 JUNE",
            image: "https://images.unsplash.com/photo-1534447677768-be436bb09401?auto=format&fit=crop&q=80&w=1200",
            status: RsvpStatus::None,
            timing: EventTiming::Upcoming,
            description: "Set foot aboard My Song, at the next Giraglia. During three days, witness the Grand Finale of an unforgettable sea journey.",
            privileges: &[
                "VIP Access to the Giraglia.",
                "Front-row seating for optimal viewing of the race.",
                "Exclusive meet and greet with professional sailors.",
                "Private Transfers to and from the event.",
                "Access to exclusive after-event parties.",
            ],
        },
        ClubEvent {
            id: EventId::new("lake-como-2024"),
            title: "Lake Como Concours",
            date: "12-14 MAY",
            image: "https://raw.githubusercontent.com/marcelorm81/LP_assets/add0a5841d1b594837aa998c9992e9ec863eb8df/lakecomo.jpg",
            status: RsvpStatus::Confirmed,
            timing: EventTiming::Past,
            description: "A celebration of elegance and automotive heritage on the shores of Lake Como.",
            privileges: &[],
        },
        ClubEvent {
            id: EventId::new("aspen-winter-2024"),
            title: "Aspen Winter Lounge",
            date: "15-20 JAN",
            image: "https://raw.githubusercontent.com/marcelorm81/LP_assets/582084ffd3e71fcf69dc689d60061f9e587543df/aspennew.jpg",
            status: RsvpStatus::Confirmed,
            timing: EventTiming::Past,
            description: "An exclusive winter retreat in the heart of the Rockies.",
            privileges: &[],
        },
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MtoStatus {
    Confirmed,
    Creation,
    Finishing,
    Quality,
    Ready,
    Delivered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MtoStage {
    pub stage: &'static str,
    pub date: &'static str,
    pub note: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MtoOrder {
    pub name: &'static str,
    pub date: &'static str,
    pub status: MtoStatus,
    pub timeline: &'static [MtoStage],
}

pub static MTO_ORDER: MtoOrder = MtoOrder {
    name: "Bespoke Traveller Jacket",
    date: "August 15, 2024",
    status: MtoStatus::Creation,
    timeline: &[
        MtoStage { stage: "Order confirmed", date: "Aug 15", note: None },
        MtoStage { stage: "In creation", date: "Aug 22", note: Some("Signature hardware embedding in progress.") },
        MtoStage { stage: "Finishing", date: "Sep 05", note: None },
    ],
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvisorStatus {
    Available,
    OnLeave,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Advisor {
    pub name: &'static str,
    pub avatar: &'static str,
    pub status: AdvisorStatus,
    pub replacement_name: Option<&'static str>,
    pub replacement_avatar: Option<&'static str>,
}

pub static ADVISOR: Advisor = Advisor {
    name: "Sofia Giordano",
    avatar: "https://images.unsplash.com/photo-1544005313-94ddf0286df2?auto=format&fit=crop&q=80&w=200&h=200",
    status: AdvisorStatus::OnLeave,
    replacement_name: Some("Marco Rossi"),
    replacement_avatar: Some("https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?auto=format&fit=crop&q=80&w=200"),
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Store {
    pub id: &'static str,
    pub name: &'static str,
    pub location: &'static str,
    pub manager: &'static str,
    pub image: &'static str,
    pub is_home: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Member {
    pub name: &'static str,
    pub first_name: &'static str,
    pub location: &'static str,
    pub size: &'static str,
    pub measurements: &'static str,
    pub avatar: &'static str,
    pub home_store: Store,
    pub visited_stores: &'static [Store],
}

pub static MEMBER: Member = Member {
    name: "Andrea Sparks",
    first_name: "Andrea",
    location: "Tokyo",
    size: "IT 50",
    measurements: "Chest 102cm, Waist 88cm, Sleeve 65cm",
    avatar: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?auto=format&fit=crop&q=80&w=200&h=200",
    home_store: Store {
        id: "s1",
        name: "Ginza Tower",
        location: "Tokyo",
        manager: "Kenji Sato",
        image: "https://raw.githubusercontent.com/marcelorm81/LP_assets/b0f3d1a55dd1259a27955c7c020478361f332bdf/ginzatokio.jpg",
        is_home: true,
    },
    visited_stores: &[Store {
        id: "s2",
        name: "Montenapoleone",
        location: "Milan",
        manager: "Francesca Rossi",
        image: "https://images.unsplash.com/photo-1551524164-687a55ea112c?auto=format&fit=crop&q=80&w=400",
        is_home: false,
    }],
};

/// Opening line of every chat session.
#[must_use]
pub fn advisor_greeting() -> String {
    format!(
        "Good evening, {}. How may I assist you with your collection today?",
        MEMBER.first_name
    )
}
