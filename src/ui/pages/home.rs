use dioxus::prelude::*;

use crate::app::Route;
use crate::domain::headlines;
use crate::infra::ApiClient;
use crate::ui::theme;

const HEADLINE_LIMIT: usize = 5;

#[component]
pub fn HomePage() -> Element {
    let client = use_context::<ApiClient>();
    let nav = use_navigator();

    let news = use_resource(move || {
        let client = client.clone();
        async move { headlines(client.news().await.as_ref()) }
    });
    let news = news.read().clone();

    rsx! {
        div { class: "stack",
            h1 { class: "page-title", "ChainPulse" }
            p { class: theme::CARD_DESCRIPTION,
                "Plan supply chain journeys with live route, weather, traffic and risk insights."
            }
            button {
                class: theme::BTN_PRIMARY,
                onclick: move |_| {
                    nav.push(Route::Journey {});
                },
                "Plan a Journey"
            }

            div { class: theme::CARD,
                div { class: theme::CARD_HEADER,
                    h2 { class: theme::CARD_TITLE, "Supply Chain News" }
                }
                match news {
                    None => rsx! { p { class: theme::HINT, "Loading headlines..." } },
                    Some(items) if items.is_empty() => rsx! {
                        p { class: theme::HINT, "No headlines available right now." }
                    },
                    Some(items) => rsx! {
                        ul {
                            for (index, headline) in items.into_iter().take(HEADLINE_LIMIT).enumerate() {
                                li { key: "{index}",
                                    match headline.link {
                                        Some(link) => rsx! {
                                            a { class: theme::BTN_LINK, href: "{link}", target: "_blank", "{headline.title}" }
                                        },
                                        None => rsx! { span { "{headline.title}" } },
                                    }
                                    if let Some(published) = headline.published {
                                        p { class: theme::HINT, "{published}" }
                                    }
                                }
                            }
                        }
                    },
                }
            }
        }
    }
}
