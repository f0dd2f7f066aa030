use dioxus::prelude::*;

use crate::domain::{Alert, AlertKind};
use crate::ui::components::badges::ImpactBadge;
use crate::ui::theme;

#[component]
pub fn AlertCard(alert: Alert, kind: AlertKind) -> Element {
    rsx! {
        div { class: theme::CARD,
            div { class: "alert-card",
                div { class: "alert-icon", "{alert.icon(kind)}" }
                div {
                    div { class: "row",
                        h4 { "{alert.location}" }
                        ImpactBadge { level: alert.impact }
                    }
                    p { strong { "{alert.condition}" } }
                    p { class: theme::HINT, "{alert.description}" }
                }
            }
        }
    }
}
