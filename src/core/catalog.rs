//! # Safety Catalog
//!
//! Built-in reference data shown on the Home and Zones tabs. It is static
//! and never touches the store.

use crate::core::model::RiskLevel;

pub const PRIMARY_EMERGENCY_NUMBER: &str = "112";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmergencyNumber {
    pub service: &'static str,
    pub number: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskZone {
    pub name: &'static str,
    pub area: &'static str,
    pub level: RiskLevel,
    pub advisory: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpotKind {
    Police,
    Hospital,
    Embassy,
    TransitHub,
    Cafe,
}

impl SpotKind {
    pub fn label(self) -> &'static str {
        match self {
            SpotKind::Police => "police",
            SpotKind::Hospital => "hospital",
            SpotKind::Embassy => "embassy",
            SpotKind::TransitHub => "transit",
            SpotKind::Cafe => "24h cafe",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SafeSpot {
    pub name: &'static str,
    pub kind: SpotKind,
    pub address: &'static str,
    pub open_24h: bool,
}

pub const EMERGENCY_NUMBERS: &[EmergencyNumber] = &[
    EmergencyNumber { service: "National emergency", number: PRIMARY_EMERGENCY_NUMBER },
    EmergencyNumber { service: "Police", number: "100" },
    EmergencyNumber { service: "Fire", number: "101" },
    EmergencyNumber { service: "Ambulance", number: "108" },
    EmergencyNumber { service: "Women helpline", number: "1091" },
    EmergencyNumber { service: "Tourist helpline", number: "1363" },
];

pub const RISK_ZONES: &[RiskZone] = &[
    RiskZone {
        name: "Old Market Lanes",
        area: "Chandni Chowk",
        level: RiskLevel::High,
        advisory: "Pickpocketing reported in crowds, keep bags in front",
    },
    RiskZone {
        name: "Railway Station Forecourt",
        area: "Paharganj",
        level: RiskLevel::High,
        advisory: "Touts and fake ticket offices, use official counters",
    },
    RiskZone {
        name: "Riverside Promenade",
        area: "Yamuna Bank",
        level: RiskLevel::Medium,
        advisory: "Poorly lit after 21:00",
    },
    RiskZone {
        name: "Metro Interchange",
        area: "Rajiv Chowk",
        level: RiskLevel::Medium,
        advisory: "Crowded at peak hours, women's coach available",
    },
    RiskZone {
        name: "Embassy District",
        area: "Chanakyapuri",
        level: RiskLevel::Low,
        advisory: "Well patrolled, taxis readily available",
    },
];

pub const SAFE_SPOTS: &[SafeSpot] = &[
    SafeSpot {
        name: "Connaught Place Police Station",
        kind: SpotKind::Police,
        address: "Block H, Connaught Place",
        open_24h: true,
    },
    SafeSpot {
        name: "City General Hospital",
        kind: SpotKind::Hospital,
        address: "Ring Road, Ansari Nagar",
        open_24h: true,
    },
    SafeSpot {
        name: "New Delhi Metro Station",
        kind: SpotKind::TransitHub,
        address: "Ajmeri Gate",
        open_24h: false,
    },
    SafeSpot {
        name: "Midnight Brew",
        kind: SpotKind::Cafe,
        address: "Hauz Khas Village",
        open_24h: true,
    },
    SafeSpot {
        name: "Consular Assistance Office",
        kind: SpotKind::Embassy,
        address: "Shantipath, Chanakyapuri",
        open_24h: false,
    },
];

/// Zones at or above the given level, highest risk first.
pub fn zones_at_least(level: RiskLevel) -> Vec<&'static RiskZone> {
    let mut zones: Vec<_> = RISK_ZONES.iter().filter(|z| z.level >= level).collect();
    zones.sort_by(|a, b| b.level.cmp(&a.level));
    zones
}
