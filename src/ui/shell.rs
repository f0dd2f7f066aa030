use dioxus::prelude::*;

use crate::app::Route;
use crate::util::version::{version_label, APP_NAME};

#[component]
pub fn Shell(children: Element) -> Element {
    let current_route = use_route::<Route>();
    let nav = use_navigator();

    rsx! {
        div {
            header { class: "app-header",
                span { class: "brand", "📦 {APP_NAME}" }
                nav { class: "row",
                    NavButton {
                        active: matches!(current_route, Route::Home {}),
                        onclick: move |_| { nav.push(Route::Home {}); },
                        label: "Home",
                    }
                    NavButton {
                        active: matches!(current_route, Route::Journey {}),
                        onclick: move |_| { nav.push(Route::Journey {}); },
                        label: "Plan Journey",
                    }
                }
            }
            main { class: "app-main",
                {children}
            }
            footer { class: "footer", "{version_label()}" }
        }
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<()>, label: &'static str) -> Element {
    let class = if active { "btn btn-link tab-active" } else { "btn btn-link" };
    rsx! {
        button {
            class: "{class}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
