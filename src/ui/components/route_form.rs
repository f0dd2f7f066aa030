use dioxus::prelude::*;

use crate::domain::{JourneyRequest, TransportType};
use crate::ui::components::toast::{push_toast, ToastKind, ToastMessage};
use crate::ui::theme;

#[component]
pub fn RouteForm(on_submit: EventHandler<JourneyRequest>) -> Element {
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let mut origin = use_signal(String::new);
    let mut destination = use_signal(String::new);
    let mut transport = use_signal(TransportType::default);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        match JourneyRequest::new(origin(), destination(), transport()) {
            Ok(request) => on_submit.call(request),
            Err(err) => push_toast(toasts, ToastKind::Warning, err.to_string()),
        }
    };

    rsx! {
        div { class: theme::CARD,
            div { class: theme::CARD_HEADER,
                h2 { class: theme::CARD_TITLE, "Route Information" }
                p { class: theme::CARD_DESCRIPTION,
                    "Enter the starting point and destination for your supply chain journey."
                }
            }
            form { class: "stack", onsubmit: submit,
                div {
                    label { class: theme::LABEL, r#for: "origin", "Starting Point" }
                    input {
                        id: "origin",
                        class: theme::INPUT,
                        placeholder: "Enter city or address",
                        required: true,
                        value: origin(),
                        oninput: move |evt| origin.set(evt.value()),
                    }
                }
                div {
                    label { class: theme::LABEL, r#for: "destination", "Destination" }
                    input {
                        id: "destination",
                        class: theme::INPUT,
                        placeholder: "Enter city or address",
                        required: true,
                        value: destination(),
                        oninput: move |evt| destination.set(evt.value()),
                    }
                }
                div {
                    span { class: theme::LABEL, "Transportation Type" }
                    for kind in TransportType::ALL {
                        label { class: "row", r#for: "transport-{kind.as_str()}",
                            span { "{theme::transport_icon(kind)} {kind.label()}" }
                            input {
                                id: "transport-{kind.as_str()}",
                                r#type: "radio",
                                name: "transport",
                                value: kind.as_str(),
                                checked: transport() == kind,
                                onchange: move |_| transport.set(kind),
                            }
                        }
                    }
                }
                button { class: "{theme::BTN_PRIMARY} btn-block", r#type: "submit",
                    "Continue to Inventory"
                }
            }
        }
    }
}
