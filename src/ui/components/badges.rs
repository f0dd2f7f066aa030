use dioxus::prelude::*;

use crate::domain::Level;
use crate::ui::theme;

/// Impact pill for an alert, e.g. "High Impact".
#[component]
pub fn ImpactBadge(level: Level) -> Element {
    rsx! {
        span { class: theme::level_badge(level), "{level.label()} Impact" }
    }
}

#[component]
pub fn RiskBadge(level: Level) -> Element {
    rsx! {
        span { class: theme::risk_badge(level), "{level.label()}" }
    }
}

/// Marks a panel that is showing fallback content instead of live backend data.
#[component]
pub fn EstimatedBadge(estimated: bool) -> Element {
    if !estimated {
        return rsx! {};
    }
    rsx! {
        span {
            class: "badge badge-estimated",
            title: "Live data was unavailable; showing typical values.",
            "Estimated data"
        }
    }
}
