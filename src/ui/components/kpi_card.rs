use dioxus::prelude::*;

use crate::ui::theme;

#[component]
pub fn KpiCard(title: String, value: String, description: Option<String>) -> Element {
    rsx! {
        div { class: theme::CARD,
            p { class: theme::HINT, "{title}" }
            p { class: "card-title", "{value}" }
            if let Some(desc) = description {
                p { class: theme::HINT, "{desc}" }
            }
        }
    }
}
