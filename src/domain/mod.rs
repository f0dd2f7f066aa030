//! Journey planning domain: inputs, wizard flow, and result views.

pub mod insights;
pub mod journey;
pub mod wizard;

pub use insights::{
    headlines, Alert, AlertFeed, AlertKind, Coordinates, EndpointConditions, Level, RiskReport,
    RouteDetails,
};
pub use journey::{
    finalize_items, with_blank_item, with_item_field, InventoryItem, ItemDraft, ItemField,
    ItemType, JourneyRequest, Requirement, SpecialRequirements, TransportType,
};
pub use wizard::{JourneyQuery, JourneyResults, WizardState, WizardStep};
