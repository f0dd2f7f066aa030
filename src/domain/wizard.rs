//! Three-step journey wizard: route entry, inventory entry, results.
//!
//! The state only moves forward. Network work happens outside; the wizard hands out a
//! [`JourneyQuery`] when inventory is submitted and takes the fetched
//! [`JourneyResults`] back in `complete_submission`.

use serde_json::Value;
use thiserror::Error;

use super::journey::{InventoryItem, ItemType, JourneyRequest, SpecialRequirements};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum WizardStep {
    #[default]
    RouteEntry,
    InventoryEntry,
    Results,
}

impl WizardStep {
    pub fn number(&self) -> u8 {
        match self {
            WizardStep::RouteEntry => 1,
            WizardStep::InventoryEntry => 2,
            WizardStep::Results => 3,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("add at least one inventory item")]
    NoItems,
    #[error("expected to be on step {}, currently on step {}", .expected.number(), .actual.number())]
    WrongStep {
        expected: WizardStep,
        actual: WizardStep,
    },
    #[error("journey data is already loading")]
    AlreadyLoading,
    #[error("no inventory submission is in flight")]
    NotLoading,
}

/// The four lookups issued when inventory is submitted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JourneyQuery {
    pub origin: String,
    pub destination: String,
    pub route_key: String,
    pub item_type: ItemType,
}

/// Raw payloads of the four lookups; `None` marks an unavailable resource.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct JourneyResults {
    pub route: Option<Value>,
    pub risk: Option<Value>,
    pub traffic: Option<Value>,
    pub weather: Option<Value>,
}

/// Type of the first entered item; standard goods when nothing was entered.
pub fn primary_item_type(items: &[InventoryItem]) -> ItemType {
    items
        .first()
        .map(|item| item.item_type)
        .unwrap_or_default()
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct WizardState {
    step: WizardStep,
    request: Option<JourneyRequest>,
    items: Vec<InventoryItem>,
    requirements: SpecialRequirements,
    results: JourneyResults,
    is_loading: bool,
}

impl WizardState {
    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn request(&self) -> Option<&JourneyRequest> {
        self.request.as_ref()
    }

    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    pub fn requirements(&self) -> SpecialRequirements {
        self.requirements
    }

    pub fn results(&self) -> &JourneyResults {
        &self.results
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Step 1 → 2. No network traffic.
    pub fn submit_route(&mut self, request: JourneyRequest) -> Result<(), WizardError> {
        self.expect_step(WizardStep::RouteEntry)?;
        log::info!(
            "route set: {} -> {} by {}",
            request.origin(),
            request.destination(),
            request.transport().as_str()
        );
        self.request = Some(request);
        self.step = WizardStep::InventoryEntry;
        Ok(())
    }

    /// Starts the step 2 → 3 transition: stores the inventory, raises the loading flag and
    /// returns the lookups to run. The step does not change until `complete_submission`.
    pub fn begin_inventory_submission(
        &mut self,
        items: Vec<InventoryItem>,
        requirements: SpecialRequirements,
    ) -> Result<JourneyQuery, WizardError> {
        self.expect_step(WizardStep::InventoryEntry)?;
        if self.is_loading {
            return Err(WizardError::AlreadyLoading);
        }
        if items.is_empty() {
            return Err(WizardError::NoItems);
        }
        let request = self
            .request
            .as_ref()
            .ok_or(WizardError::MissingField("route"))?;

        let query = JourneyQuery {
            origin: request.origin().to_string(),
            destination: request.destination().to_string(),
            route_key: request.route_key(),
            item_type: primary_item_type(&items),
        };
        self.items = items;
        self.requirements = requirements;
        self.is_loading = true;
        Ok(query)
    }

    /// Finishes the transition once all four lookups have resolved.
    pub fn complete_submission(&mut self, results: JourneyResults) -> Result<(), WizardError> {
        if !self.is_loading {
            return Err(WizardError::NotLoading);
        }
        self.results = results;
        self.is_loading = false;
        self.step = WizardStep::Results;
        Ok(())
    }

    /// Clears the loading flag and stays on inventory entry.
    pub fn abort_submission(&mut self) {
        self.is_loading = false;
    }

    fn expect_step(&self, expected: WizardStep) -> Result<(), WizardError> {
        if self.step == expected {
            Ok(())
        } else {
            Err(WizardError::WrongStep {
                expected,
                actual: self.step,
            })
        }
    }
}
