pub mod alert_card;
pub mod badges;
pub mod inventory_form;
pub mod journey_map;
pub mod kpi_card;
pub mod results;
pub mod route_form;
pub mod step_indicator;
pub mod toast;
