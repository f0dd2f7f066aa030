//! What the user enters: the route, the inventory rows and the handling requirements.

use super::wizard::WizardError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TransportType {
    #[default]
    Truck,
    Train,
    Ship,
}

impl TransportType {
    pub const ALL: [TransportType; 3] = [TransportType::Truck, TransportType::Train, TransportType::Ship];

    pub fn as_str(&self) -> &'static str {
        match self {
            TransportType::Truck => "truck",
            TransportType::Train => "train",
            TransportType::Ship => "ship",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TransportType::Truck => "Truck",
            TransportType::Train => "Train",
            TransportType::Ship => "Ship",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ItemType {
    #[default]
    Standard,
    Perishable,
    Fragile,
    Hazardous,
}

impl ItemType {
    pub const ALL: [ItemType; 4] = [
        ItemType::Standard,
        ItemType::Perishable,
        ItemType::Fragile,
        ItemType::Hazardous,
    ];

    /// Wire value used for the risk query's `item_type` parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::Standard => "standard",
            ItemType::Perishable => "perishable",
            ItemType::Fragile => "fragile",
            ItemType::Hazardous => "hazardous",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ItemType::Standard => "Standard",
            ItemType::Perishable => "Perishable",
            ItemType::Fragile => "Fragile",
            ItemType::Hazardous => "Hazardous",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == value)
    }
}

/// Route entered in the first wizard step. Fixed for the rest of the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JourneyRequest {
    origin: String,
    destination: String,
    transport: TransportType,
}

impl JourneyRequest {
    /// Both places are required; they are kept exactly as entered.
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        transport: TransportType,
    ) -> Result<Self, WizardError> {
        let origin = origin.into();
        let destination = destination.into();
        if origin.trim().is_empty() {
            return Err(WizardError::MissingField("origin"));
        }
        if destination.trim().is_empty() {
            return Err(WizardError::MissingField("destination"));
        }
        Ok(Self {
            origin,
            destination,
            transport,
        })
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn transport(&self) -> TransportType {
        self.transport
    }

    /// Combined key the alert endpoints expect, e.g. `"A-B"`.
    pub fn route_key(&self) -> String {
        format!("{}-{}", self.origin, self.destination)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InventoryItem {
    pub name: String,
    /// Finite, non-negative numeric string, trimmed.
    pub quantity: String,
    pub item_type: ItemType,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SpecialRequirements {
    pub temperature_control: bool,
    pub fragile_handling: bool,
    pub express_delivery: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Requirement {
    TemperatureControl,
    FragileHandling,
    ExpressDelivery,
}

impl SpecialRequirements {
    pub fn toggled(self, requirement: Requirement) -> Self {
        let mut next = self;
        match requirement {
            Requirement::TemperatureControl => next.temperature_control = !next.temperature_control,
            Requirement::FragileHandling => next.fragile_handling = !next.fragile_handling,
            Requirement::ExpressDelivery => next.express_delivery = !next.express_delivery,
        }
        next
    }

    /// Labels of the switched-on requirements, in form order.
    pub fn enabled_labels(&self) -> Vec<&'static str> {
        [
            (self.temperature_control, "Temperature Control"),
            (self.fragile_handling, "Fragile Handling"),
            (self.express_delivery, "Express Delivery"),
        ]
        .into_iter()
        .filter_map(|(enabled, label)| enabled.then_some(label))
        .collect()
    }
}

/// Editable inventory row before submission; the type starts unselected.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemDraft {
    pub name: String,
    pub quantity: String,
    pub item_type: Option<ItemType>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemField {
    Name,
    Quantity,
    Type,
}

/// Returns a new sequence with one blank row appended.
pub fn with_blank_item(drafts: &[ItemDraft]) -> Vec<ItemDraft> {
    let mut next = drafts.to_vec();
    next.push(ItemDraft::default());
    next
}

/// Returns a new sequence where the row at `index` has `field` replaced by `value`.
/// An out-of-range index leaves the sequence unchanged.
pub fn with_item_field(
    drafts: &[ItemDraft],
    index: usize,
    field: ItemField,
    value: &str,
) -> Vec<ItemDraft> {
    drafts
        .iter()
        .enumerate()
        .map(|(position, draft)| {
            if position != index {
                return draft.clone();
            }
            let mut updated = draft.clone();
            match field {
                ItemField::Name => updated.name = value.to_string(),
                ItemField::Quantity => updated.quantity = value.to_string(),
                ItemField::Type => updated.item_type = ItemType::parse(value),
            }
            updated
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("item {0} needs a name")]
    MissingName(usize),
    #[error("item {0} needs a numeric quantity")]
    InvalidQuantity(usize),
    #[error("item {0} needs an item type")]
    MissingType(usize),
}

/// Every row must be complete; positions in errors are 1-based for display.
pub fn finalize_items(drafts: &[ItemDraft]) -> Result<Vec<InventoryItem>, DraftError> {
    drafts
        .iter()
        .enumerate()
        .map(|(index, draft)| {
            let position = index + 1;
            if draft.name.trim().is_empty() {
                return Err(DraftError::MissingName(position));
            }
            if !is_valid_quantity(&draft.quantity) {
                return Err(DraftError::InvalidQuantity(position));
            }
            let item_type = draft.item_type.ok_or(DraftError::MissingType(position))?;
            Ok(InventoryItem {
                name: draft.name.clone(),
                quantity: draft.quantity.trim().to_string(),
                item_type,
            })
        })
        .collect()
}

fn is_valid_quantity(raw: &str) -> bool {
    raw.trim()
        .parse::<f64>()
        .is_ok_and(|value| value.is_finite() && value >= 0.0)
}
