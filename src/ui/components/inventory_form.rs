use dioxus::prelude::*;

use crate::domain::{
    finalize_items, with_blank_item, with_item_field, InventoryItem, ItemDraft, ItemField,
    ItemType, Requirement, SpecialRequirements,
};
use crate::ui::components::toast::{push_toast, ToastKind, ToastMessage};
use crate::ui::theme;

/// Submitted inventory plus the requirement toggles.
pub type InventorySubmission = (Vec<InventoryItem>, SpecialRequirements);

#[component]
pub fn InventoryForm(on_submit: EventHandler<InventorySubmission>) -> Element {
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let mut drafts = use_signal(|| vec![ItemDraft::default()]);
    let mut requirements = use_signal(SpecialRequirements::default);
    let mut notes = use_signal(String::new);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        match finalize_items(&drafts()) {
            Ok(items) => on_submit.call((items, requirements())),
            Err(err) => push_toast(toasts, ToastKind::Warning, err.to_string()),
        }
    };

    let rows = drafts().into_iter().enumerate().collect::<Vec<_>>();
    let current = requirements();

    rsx! {
        form { class: "stack", onsubmit: submit,
            h3 { "Inventory Items" }
            for (index, draft) in rows {
                div { key: "{index}", class: theme::CARD,
                    div { class: "grid-2",
                        div {
                            label { class: theme::LABEL, r#for: "item-name-{index}", "Item Name" }
                            input {
                                id: "item-name-{index}",
                                class: theme::INPUT,
                                placeholder: "Enter item name",
                                required: true,
                                value: draft.name.clone(),
                                oninput: move |evt| {
                                    let next = with_item_field(&drafts(), index, ItemField::Name, &evt.value());
                                    drafts.set(next);
                                },
                            }
                        }
                        div {
                            label { class: theme::LABEL, r#for: "item-quantity-{index}", "Quantity" }
                            input {
                                id: "item-quantity-{index}",
                                class: theme::INPUT,
                                r#type: "number",
                                placeholder: "Enter quantity",
                                required: true,
                                value: draft.quantity.clone(),
                                oninput: move |evt| {
                                    let next = with_item_field(&drafts(), index, ItemField::Quantity, &evt.value());
                                    drafts.set(next);
                                },
                            }
                        }
                    }
                    div {
                        label { class: theme::LABEL, r#for: "item-type-{index}", "Item Type" }
                        select {
                            id: "item-type-{index}",
                            class: theme::INPUT,
                            required: true,
                            value: draft.item_type.map(|kind| kind.as_str()).unwrap_or_default(),
                            onchange: move |evt| {
                                let next = with_item_field(&drafts(), index, ItemField::Type, &evt.value());
                                drafts.set(next);
                            },
                            option { value: "", disabled: true, selected: draft.item_type.is_none(), "Select item type" }
                            for kind in ItemType::ALL {
                                option {
                                    value: kind.as_str(),
                                    selected: draft.item_type == Some(kind),
                                    "{kind.label()}"
                                }
                            }
                        }
                    }
                }
            }
            button {
                class: theme::BTN_OUTLINE,
                r#type: "button",
                onclick: move |_| {
                    let next = with_blank_item(&drafts());
                    drafts.set(next);
                },
                "Add Another Item"
            }

            hr { class: theme::SEPARATOR }

            h3 { "Special Requirements" }
            RequirementToggle {
                id: "temperature-control",
                title: "Temperature Control",
                hint: "Required for perishable items",
                checked: current.temperature_control,
                on_toggle: move |_| requirements.set(requirements().toggled(Requirement::TemperatureControl)),
            }
            RequirementToggle {
                id: "fragile-handling",
                title: "Fragile Handling",
                hint: "Special care for fragile items",
                checked: current.fragile_handling,
                on_toggle: move |_| requirements.set(requirements().toggled(Requirement::FragileHandling)),
            }
            RequirementToggle {
                id: "express-delivery",
                title: "Express Delivery",
                hint: "Priority handling and faster transit",
                checked: current.express_delivery,
                on_toggle: move |_| requirements.set(requirements().toggled(Requirement::ExpressDelivery)),
            }

            hr { class: theme::SEPARATOR }

            h3 { "Additional Notes" }
            div {
                label { class: theme::LABEL, r#for: "notes", "Special Instructions" }
                // Kept on screen only; notes are not sent to the backend.
                textarea {
                    id: "notes",
                    class: theme::INPUT,
                    placeholder: "Enter any special instructions or notes for this shipment",
                    value: notes(),
                    oninput: move |evt| notes.set(evt.value()),
                }
            }

            div { class: "row",
                span {}
                button { class: theme::BTN_PRIMARY, r#type: "submit", "Continue to Results" }
            }
        }
    }
}

#[component]
fn RequirementToggle(
    id: &'static str,
    title: &'static str,
    hint: &'static str,
    checked: bool,
    on_toggle: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "row",
            div {
                label { class: theme::LABEL, r#for: id, "{title}" }
                p { class: theme::HINT, "{hint}" }
            }
            input {
                id: id,
                r#type: "checkbox",
                checked: checked,
                onchange: move |_| on_toggle.call(()),
            }
        }
    }
}
