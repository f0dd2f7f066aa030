//! Class helpers shared by the journey screens. Class names are defined in `assets/main.css`.

use crate::domain::{Level, TransportType};

// ============================================
// CONTAINERS
// ============================================

pub const CARD: &str = "card";
pub const CARD_HEADER: &str = "card-header";
pub const CARD_TITLE: &str = "card-title";
pub const CARD_DESCRIPTION: &str = "card-description";
pub const CALLOUT: &str = "callout";
pub const SEPARATOR: &str = "separator";

// ============================================
// CONTROLS
// ============================================

pub const INPUT: &str = "input";
pub const LABEL: &str = "label";
pub const HINT: &str = "hint";
pub const BTN_PRIMARY: &str = "btn btn-primary";
pub const BTN_OUTLINE: &str = "btn btn-outline";
pub const BTN_LINK: &str = "btn btn-link";

pub fn tab_button(active: bool) -> &'static str {
    if active {
        "tab tab-active"
    } else {
        "tab"
    }
}

pub fn step_badge(reached: bool) -> &'static str {
    if reached {
        "step-badge step-badge-reached"
    } else {
        "step-badge"
    }
}

// ============================================
// STATUS
// ============================================

pub fn level_badge(level: Level) -> &'static str {
    match level {
        Level::Low => "badge badge-low",
        Level::Medium => "badge badge-medium",
        Level::High => "badge badge-high",
    }
}

/// Overall risk uses green for low, unlike alert impact badges which use blue.
pub fn risk_badge(level: Level) -> &'static str {
    match level {
        Level::Low => "badge badge-safe",
        Level::Medium => "badge badge-medium",
        Level::High => "badge badge-high",
    }
}

pub fn transport_icon(transport: TransportType) -> &'static str {
    match transport {
        TransportType::Truck => "🚚",
        TransportType::Train => "🚆",
        TransportType::Ship => "🚢",
    }
}
