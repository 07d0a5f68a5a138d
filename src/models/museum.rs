//! Museum model and seed data

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Fixed visitor categories, each with its own ticket price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum VisitorCategory {
    Adult,
    Child,
    Senior,
    Tourist,
}

impl VisitorCategory {
    pub const ALL: [VisitorCategory; 4] = [
        VisitorCategory::Adult,
        VisitorCategory::Child,
        VisitorCategory::Senior,
        VisitorCategory::Tourist,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VisitorCategory::Adult => "adult",
            VisitorCategory::Child => "child",
            VisitorCategory::Senior => "senior",
            VisitorCategory::Tourist => "tourist",
        }
    }
}

/// Per-visitor-category pricing table (whole rupees)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Pricing {
    pub adult: i64,
    pub child: i64,
    pub senior: i64,
    pub tourist: i64,
}

impl Pricing {
    pub fn price_for(&self, category: VisitorCategory) -> i64 {
        match category {
            VisitorCategory::Adult => self.adult,
            VisitorCategory::Child => self.child,
            VisitorCategory::Senior => self.senior,
            VisitorCategory::Tourist => self.tourist,
        }
    }
}

/// A bookable venue with fixed time slots, capacity and pricing
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Museum {
    pub id: String,
    pub name: String,
    pub location: String,
    pub state: String,
    pub description: String,
    pub image_url: String,
    /// Display string, e.g. "10:00 AM - 6:00 PM (Closed on Mondays)"
    pub opening_hours: String,
    /// Fixed, ordered list of time-slot labels
    pub time_slots: Vec<String>,
    pub pricing: Pricing,
    pub capacity: u32,
    /// Advisory headcount, not transactionally maintained
    pub current_visitors: u32,
}

/// Partial museum update (capacity/pricing edits, mostly)
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMuseum {
    pub name: Option<String>,
    pub description: Option<String>,
    pub opening_hours: Option<String>,
    pub time_slots: Option<Vec<String>>,
    pub pricing: Option<Pricing>,
    pub capacity: Option<u32>,
}

/// A derived availability window for one slot; never persisted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    pub time: String,
    /// Remaining spots; may go negative when a slot is overbooked
    pub available: i64,
    pub total: i64,
    pub is_available: bool,
}

/// Initial museum catalog, loaded once at startup
pub fn seed_museums() -> Vec<Museum> {
    vec![
        Museum {
            id: "national-museum-delhi".to_string(),
            name: "National Museum".to_string(),
            location: "New Delhi".to_string(),
            state: "Delhi".to_string(),
            description: "One of the largest museums in India, housing over 200,000 works \
                          of art spanning 5,000 years."
                .to_string(),
            image_url: "/images/national-museum.jpg".to_string(),
            opening_hours: "10:00 AM - 6:00 PM (Closed on Mondays)".to_string(),
            time_slots: vec![
                "10:00".to_string(),
                "12:00".to_string(),
                "14:00".to_string(),
                "16:00".to_string(),
            ],
            pricing: Pricing {
                adult: 20,
                child: 0,
                senior: 10,
                tourist: 650,
            },
            capacity: 200,
            current_visitors: 0,
        },
        Museum {
            id: "indian-museum-kolkata".to_string(),
            name: "Indian Museum".to_string(),
            location: "Kolkata".to_string(),
            state: "West Bengal".to_string(),
            description: "The oldest and largest museum in India, founded in 1814, with rare \
                          collections of antiques, armour, fossils and Mughal paintings."
                .to_string(),
            image_url: "/images/indian-museum.jpg".to_string(),
            opening_hours: "10:00 AM - 5:00 PM (Closed on Mondays)".to_string(),
            time_slots: vec![
                "10:00".to_string(),
                "11:30".to_string(),
                "13:00".to_string(),
                "14:30".to_string(),
                "16:00".to_string(),
            ],
            pricing: Pricing {
                adult: 50,
                child: 20,
                senior: 25,
                tourist: 500,
            },
            capacity: 150,
            current_visitors: 0,
        },
        Museum {
            id: "salar-jung-hyderabad".to_string(),
            name: "Salar Jung Museum".to_string(),
            location: "Hyderabad".to_string(),
            state: "Telangana".to_string(),
            description: "Home to the largest one-man collection of antiques in the world, \
                          including the famous Veiled Rebecca."
                .to_string(),
            image_url: "/images/salar-jung.jpg".to_string(),
            opening_hours: "10:00 AM - 5:00 PM (Closed on Fridays)".to_string(),
            time_slots: vec![
                "10:00".to_string(),
                "12:00".to_string(),
                "14:00".to_string(),
                "16:00".to_string(),
            ],
            pricing: Pricing {
                adult: 20,
                child: 10,
                senior: 10,
                tourist: 500,
            },
            capacity: 120,
            current_visitors: 0,
        },
        Museum {
            id: "csmvs-mumbai".to_string(),
            name: "Chhatrapati Shivaji Maharaj Vastu Sangrahalaya".to_string(),
            location: "Mumbai".to_string(),
            state: "Maharashtra".to_string(),
            description: "Premier art and history museum of Mumbai with around 50,000 exhibits \
                          of ancient Indian history."
                .to_string(),
            image_url: "/images/csmvs.jpg".to_string(),
            opening_hours: "10:15 AM - 6:00 PM (Open all days)".to_string(),
            time_slots: vec![
                "10:30".to_string(),
                "12:30".to_string(),
                "14:30".to_string(),
                "16:30".to_string(),
            ],
            pricing: Pricing {
                adult: 100,
                child: 25,
                senior: 50,
                tourist: 700,
            },
            capacity: 80,
            current_visitors: 0,
        },
    ]
}
