//! Step-three screen: journey overview, route/weather/traffic tabs, and the risk report.

use dioxus::prelude::*;

use crate::domain::{
    AlertFeed, AlertKind, EndpointConditions, InventoryItem, JourneyRequest, JourneyResults,
    Level, RiskReport, RouteDetails, SpecialRequirements,
};
use crate::infra::{endpoint_conditions, ApiClient};
use crate::ui::components::alert_card::AlertCard;
use crate::ui::components::badges::{EstimatedBadge, RiskBadge};
use crate::ui::components::journey_map::JourneyMap;
use crate::ui::components::kpi_card::KpiCard;
use crate::ui::components::toast::{push_toast, ToastKind, ToastMessage};
use crate::ui::theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ResultsTab {
    Route,
    Weather,
    Traffic,
}

impl ResultsTab {
    const ALL: [ResultsTab; 3] = [ResultsTab::Route, ResultsTab::Weather, ResultsTab::Traffic];

    fn label(&self) -> &'static str {
        match self {
            ResultsTab::Route => "Route Details",
            ResultsTab::Weather => "Weather Alerts",
            ResultsTab::Traffic => "Traffic Alerts",
        }
    }
}

#[component]
pub fn JourneyResultsView(
    request: JourneyRequest,
    items: Vec<InventoryItem>,
    requirements: SpecialRequirements,
    results: JourneyResults,
) -> Element {
    let client = use_context::<ApiClient>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let mut active_tab = use_signal(|| ResultsTab::Route);

    let origin = request.origin().to_string();
    let destination = request.destination().to_string();
    let endpoints = use_resource({
        let (origin, destination) = (origin.clone(), destination.clone());
        move || {
            let client = client.clone();
            let (origin, destination) = (origin.clone(), destination.clone());
            async move {
                tokio::join!(
                    endpoint_conditions(&client, &origin),
                    endpoint_conditions(&client, &destination)
                )
            }
        }
    });
    let endpoints = endpoints.read().clone();
    let (origin_conditions, destination_conditions) = match endpoints {
        Some((from, to)) => (Some(from), Some(to)),
        None => (None, None),
    };

    let route = RouteDetails::from_payload(results.route.as_ref());
    let risk = RiskReport::from_payload(results.risk.as_ref());
    let weather = AlertFeed::from_payload(AlertKind::Weather, results.weather.as_ref());
    let traffic = AlertFeed::from_payload(AlertKind::Traffic, results.traffic.as_ref());

    let item_count = items.len();
    let handling = match requirements.enabled_labels() {
        labels if labels.is_empty() => "No special handling".to_string(),
        labels => labels.join(", "),
    };
    let transport = request.transport();

    rsx! {
        div { class: "stack",
            div { class: theme::CARD,
                div { class: theme::CARD_HEADER,
                    h2 { class: theme::CARD_TITLE, "Journey Overview" }
                    p { class: theme::CARD_DESCRIPTION,
                        "{theme::transport_icon(transport)} {origin} to {destination} by {transport.label()}, {item_count} item type(s)"
                    }
                    p { class: theme::HINT, "{handling}" }
                }
                JourneyMap {
                    origin: origin.clone(),
                    destination: destination.clone(),
                    origin_coords: origin_conditions.as_ref().and_then(|c| c.coordinates),
                    destination_coords: destination_conditions.as_ref().and_then(|c| c.coordinates),
                }
                div { class: "grid-2",
                    EndpointWeather { place: origin.clone(), conditions: origin_conditions.clone() }
                    EndpointWeather { place: destination.clone(), conditions: destination_conditions.clone() }
                }
            }

            div { class: "tabs",
                for tab in ResultsTab::ALL {
                    button {
                        class: theme::tab_button(active_tab() == tab),
                        r#type: "button",
                        onclick: move |_| active_tab.set(tab),
                        "{tab.label()}"
                    }
                }
            }

            match active_tab() {
                ResultsTab::Route => rsx! { RoutePanel { details: route } },
                ResultsTab::Weather => rsx! { AlertPanel { feed: weather } },
                ResultsTab::Traffic => rsx! { AlertPanel { feed: traffic } },
            }

            RiskPanel { report: risk }

            div { class: "row",
                span {}
                button {
                    class: theme::BTN_PRIMARY,
                    r#type: "button",
                    onclick: move |_| {
                        push_toast(toasts, ToastKind::Info, "Saving journey plans is not available yet.");
                    },
                    "Save Journey Plan"
                }
            }
        }
    }
}

#[component]
fn EndpointWeather(place: String, conditions: Option<EndpointConditions>) -> Element {
    let value = match conditions.as_ref() {
        None => "Loading...".to_string(),
        Some(found) => match &found.weather {
            Some(snapshot) => snapshot.summary(),
            None => "Unavailable".to_string(),
        },
    };
    rsx! {
        KpiCard { title: format!("Weather in {place}"), value, description: None }
    }
}

#[component]
fn RoutePanel(details: RouteDetails) -> Element {
    rsx! {
        div { class: theme::CARD,
            div { class: "row",
                h3 { "Route Details" }
                EstimatedBadge { estimated: details.estimated }
            }
            div { class: "grid-2",
                KpiCard { title: "Total Distance".to_string(), value: details.distance_label(), description: None }
                KpiCard { title: "Estimated Travel Time".to_string(), value: details.travel_time.clone(), description: None }
            }
            KpiCard {
                title: "Recommended Departure".to_string(),
                value: details.departure.clone(),
                description: Some("To avoid peak traffic".to_string()),
            }
            div { class: theme::CALLOUT,
                h4 { "Route Recommendation" }
                p { "{details.recommendation}" }
            }
        }
    }
}

#[component]
fn AlertPanel(feed: AlertFeed) -> Element {
    let title = match feed.kind {
        AlertKind::Weather => "Weather Alerts",
        AlertKind::Traffic => "Traffic Alerts",
    };
    let advice = match feed.kind {
        AlertKind::Weather => "Weather Recommendation",
        AlertKind::Traffic => "Traffic Recommendation",
    };
    let kind = feed.kind;

    rsx! {
        div { class: theme::CARD,
            div { class: "row",
                h3 { "{title}" }
                EstimatedBadge { estimated: feed.estimated }
            }
            if feed.alerts.is_empty() {
                p { class: theme::HINT, "No alerts reported along this route." }
            }
            for (index, alert) in feed.alerts.iter().cloned().enumerate() {
                AlertCard { key: "{index}", alert, kind }
            }
            div { class: theme::CALLOUT,
                h4 { "{advice}" }
                p { "{feed.recommendation}" }
            }
        }
    }
}

#[component]
fn RiskPanel(report: RiskReport) -> Element {
    let breakdown: Vec<(&'static str, Level)> = [
        ("Weather Risk", report.weather),
        ("Traffic Risk", report.traffic),
        ("Inventory Risk", report.inventory),
    ]
    .into_iter()
    .filter_map(|(label, level)| level.map(|level| (label, level)))
    .collect();

    rsx! {
        div { class: theme::CARD,
            div { class: theme::CARD_HEADER,
                div { class: "row",
                    h2 { class: theme::CARD_TITLE, "Risk Assessment" }
                    EstimatedBadge { estimated: report.estimated }
                }
                p { class: theme::CARD_DESCRIPTION, "Potential risks for your supply chain journey" }
            }
            div { class: "row",
                span { "Overall Risk Level" }
                RiskBadge { level: report.overall }
            }
            for (label, level) in breakdown {
                div { class: "row", key: "{label}",
                    span { class: theme::HINT, "{label}" }
                    RiskBadge { level }
                }
            }
            hr { class: theme::SEPARATOR }
            h4 { "Risk Factors" }
            ul {
                for (index, factor) in report.factors.iter().enumerate() {
                    li { key: "{index}", "{factor}" }
                }
            }
            div { class: theme::CALLOUT,
                h4 { "Recommendation" }
                p { "{report.recommendation}" }
            }
        }
    }
}
