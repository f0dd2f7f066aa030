use dioxus::prelude::*;

use crate::domain::WizardStep;
use crate::ui::theme;

#[component]
pub fn StepIndicator(step: WizardStep) -> Element {
    let current = step.number();
    rsx! {
        div { class: "row",
            for number in 1..=3u8 {
                if number > 1 {
                    span { class: "step-link" }
                }
                span { class: theme::step_badge(current >= number), "{number}" }
            }
        }
    }
}
