use dioxus::prelude::*;

use crate::domain::{JourneyRequest, WizardState, WizardStep};
use crate::infra::{fetch_journey_results, settle_submission, ApiClient};
use crate::ui::components::inventory_form::{InventoryForm, InventorySubmission};
use crate::ui::components::results::JourneyResultsView;
use crate::ui::components::route_form::RouteForm;
use crate::ui::components::step_indicator::StepIndicator;
use crate::ui::components::toast::{push_toast, ToastKind, ToastMessage};
use crate::ui::theme;

/// Three-step planner. Wizard state lives with the page and starts over on each visit.
#[component]
pub fn JourneyPage() -> Element {
    let client = use_context::<ApiClient>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let mut wizard = use_signal(WizardState::default);

    let on_route = move |request: JourneyRequest| {
        if let Err(err) = wizard.with_mut(|state| state.submit_route(request)) {
            push_toast(toasts, ToastKind::Warning, err.to_string());
        }
    };

    let on_inventory = move |(items, requirements): InventorySubmission| {
        let query = match wizard.with_mut(|state| state.begin_inventory_submission(items, requirements)) {
            Ok(query) => query,
            Err(err) => {
                push_toast(toasts, ToastKind::Warning, err.to_string());
                return;
            }
        };

        let client = client.clone();
        spawn(async move {
            let outcome = fetch_journey_results(&client, &query).await;
            let mut wizard = wizard;
            if !wizard.with_mut(|state| settle_submission(state, outcome)) {
                push_toast(
                    toasts,
                    ToastKind::Error,
                    "Could not load journey data. Please try again.",
                );
            }
        });
    };

    let snapshot = wizard();
    let body = match snapshot.step() {
        WizardStep::RouteEntry => rsx! {
            RouteForm { on_submit: on_route }
        },
        WizardStep::InventoryEntry if snapshot.is_loading() => rsx! {
            div { class: "loader",
                div { class: "spinner" }
                p { class: theme::HINT, "Analyzing your supply chain journey..." }
            }
        },
        WizardStep::InventoryEntry => rsx! {
            div { class: theme::CARD,
                div { class: theme::CARD_HEADER,
                    h2 { class: theme::CARD_TITLE, "Inventory Details" }
                    p { class: theme::CARD_DESCRIPTION,
                        "Add the items you plan to transport and any special handling requirements."
                    }
                }
                InventoryForm { on_submit: on_inventory }
            }
        },
        WizardStep::Results => match snapshot.request() {
            Some(request) => rsx! {
                JourneyResultsView {
                    request: request.clone(),
                    items: snapshot.items().to_vec(),
                    requirements: snapshot.requirements(),
                    results: snapshot.results().clone(),
                }
            },
            None => rsx! {},
        },
    };

    rsx! {
        div { class: "stack",
            h1 { class: "page-title", "Plan Your Supply Chain Journey" }
            StepIndicator { step: snapshot.step() }
            {body}
        }
    }
}
