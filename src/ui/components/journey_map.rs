//! Schematic route sketch. Not a real map: fixed geometry with the two endpoints labelled.

use dioxus::prelude::*;

use crate::domain::Coordinates;
use crate::ui::theme;

const WIDTH: u32 = 600;
const HEIGHT: u32 = 300;
const MARGIN: u32 = 50;

#[component]
pub fn JourneyMap(
    origin: String,
    destination: String,
    origin_coords: Option<Coordinates>,
    destination_coords: Option<Coordinates>,
) -> Element {
    let end_x = WIDTH - MARGIN;
    let route_path = format!(
        "M {MARGIN} 150 C {} 100, {} 200, {end_x} 150",
        WIDTH / 3,
        WIDTH / 3 * 2
    );
    let view_box = format!("0 0 {WIDTH} {HEIGHT}");

    rsx! {
        div { class: "map",
            svg {
                "viewBox": "{view_box}",
                "preserveAspectRatio": "xMidYMid meet",
                rect { x: "0", y: "0", width: "{WIDTH}", height: "{HEIGHT}", fill: "#f3f4f6" }
                path {
                    d: "{route_path}",
                    fill: "none",
                    stroke: "#3b82f6",
                    "stroke-width": "3",
                }
                circle { cx: "{MARGIN}", cy: "150", r: "8", fill: "#10b981" }
                circle { cx: "{end_x}", cy: "150", r: "8", fill: "#ef4444" }
                WarningMarker { x: WIDTH / 2, y: 130, fill: "rgba(251, 191, 36, 0.7)" }
                WarningMarker { x: WIDTH / 3, y: 180, fill: "rgba(239, 68, 68, 0.7)" }
                text { x: "{MARGIN}", y: "175", "text-anchor": "middle", "font-size": "12", "{origin}" }
                text { x: "{end_x}", y: "175", "text-anchor": "middle", "font-size": "12", "{destination}" }
            }
        }
        div { class: "row",
            p { class: theme::HINT, "{coordinates_label(&origin, origin_coords)}" }
            p { class: theme::HINT, "{coordinates_label(&destination, destination_coords)}" }
        }
    }
}

#[component]
fn WarningMarker(x: u32, y: u32, fill: &'static str) -> Element {
    rsx! {
        circle { cx: "{x}", cy: "{y}", r: "15", fill: "{fill}" }
        text {
            x: "{x}",
            y: "{y}",
            "text-anchor": "middle",
            "dominant-baseline": "middle",
            "font-weight": "bold",
            "font-size": "14",
            "!"
        }
    }
}

fn coordinates_label(place: &str, coords: Option<Coordinates>) -> String {
    match coords {
        Some(coords) => format!("{place}: {}", coords.label()),
        None => format!("{place}: location unresolved"),
    }
}
