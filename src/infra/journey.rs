//! Concurrent fan-out behind the inventory → results transition.

use thiserror::Error;
use tokio::task::JoinError;

use crate::domain::{EndpointConditions, JourneyQuery, JourneyResults, WizardState};
use crate::infra::client::ApiClient;

#[derive(Debug, Error)]
pub enum JourneyFetchError {
    #[error("journey lookup task failed: {0}")]
    Join(#[from] JoinError),
}

/// Runs the route, risk, traffic and weather lookups concurrently and returns once all
/// four have resolved. Unavailable resources come back as `None` slots.
pub async fn fetch_journey_results(
    client: &ApiClient,
    query: &JourneyQuery,
) -> Result<JourneyResults, JourneyFetchError> {
    log::debug!(
        "fetching journey data for {} ({} goods)",
        query.route_key,
        query.item_type.as_str()
    );

    let route = tokio::spawn({
        let client = client.clone();
        let (origin, destination) = (query.origin.clone(), query.destination.clone());
        async move { client.route(&origin, &destination).await }
    });
    let risk = tokio::spawn({
        let client = client.clone();
        let (origin, destination) = (query.origin.clone(), query.destination.clone());
        let item_type = query.item_type;
        async move {
            client
                .risk_assessment(&origin, &destination, Some(item_type))
                .await
        }
    });
    let traffic = tokio::spawn({
        let client = client.clone();
        let route_key = query.route_key.clone();
        async move { client.traffic_alerts(&route_key).await }
    });
    let weather = tokio::spawn({
        let client = client.clone();
        let route_key = query.route_key.clone();
        async move { client.weather_alerts(&route_key).await }
    });

    let (route, risk, traffic, weather) = tokio::try_join!(route, risk, traffic, weather)?;
    Ok(JourneyResults {
        route,
        risk,
        traffic,
        weather,
    })
}

/// Weather and location for one endpoint, fetched side by side. Not part of the
/// wizard transition; the results screen loads these on its own.
pub async fn endpoint_conditions(client: &ApiClient, place: &str) -> EndpointConditions {
    let (weather, location) = tokio::join!(client.weather(place), client.location(place));
    EndpointConditions::from_payloads(place, weather.as_ref(), location.as_ref())
}

/// Applies a fan-out outcome to the wizard. Returns `false` when the fetch failed and the
/// wizard stayed on inventory entry.
pub fn settle_submission(
    state: &mut WizardState,
    outcome: Result<JourneyResults, JourneyFetchError>,
) -> bool {
    match outcome {
        Ok(results) => match state.complete_submission(results) {
            Ok(()) => {
                log::info!("journey results ready");
                true
            }
            Err(err) => {
                log::warn!("discarding journey results: {err}");
                false
            }
        },
        Err(err) => {
            log::error!("error fetching journey data: {err}");
            state.abort_submission();
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use mockito::Matcher;
    use serde_json::json;

    use super::*;
    use crate::domain::{
        InventoryItem, ItemType, JourneyRequest, SpecialRequirements, TransportType, WizardStep,
    };
    use crate::infra::client::tests::{client_for, UNREACHABLE_BACKEND};

    fn inventory(types: &[ItemType]) -> Vec<InventoryItem> {
        types
            .iter()
            .enumerate()
            .map(|(index, item_type)| InventoryItem {
                name: format!("item {index}"),
                quantity: "5".to_string(),
                item_type: *item_type,
            })
            .collect()
    }

    fn route_submitted() -> WizardState {
        let mut state = WizardState::default();
        state
            .submit_route(JourneyRequest::new("A", "B", TransportType::Truck).unwrap())
            .unwrap();
        state
    }

    async fn submit(
        client: &ApiClient,
        state: &mut WizardState,
        items: Vec<InventoryItem>,
    ) -> bool {
        let query = state
            .begin_inventory_submission(items, SpecialRequirements::default())
            .unwrap();
        assert!(state.is_loading());
        let outcome = fetch_journey_results(client, &query).await;
        settle_submission(state, outcome)
    }

    #[tokio::test]
    async fn inventory_submission_issues_exactly_four_queries() {
        let mut server = mockito::Server::new_async().await;
        let ab = || {
            Matcher::AllOf(vec![
                Matcher::UrlEncoded("origin".into(), "A".into()),
                Matcher::UrlEncoded("destination".into(), "B".into()),
            ])
        };
        let route = server
            .mock("GET", "/api/route")
            .match_query(ab())
            .with_status(200)
            .with_body(r#"{"distance":120}"#)
            .expect(1)
            .create_async()
            .await;
        let risk = server
            .mock("GET", "/api/risk")
            .match_query(Matcher::AllOf(vec![
                ab(),
                Matcher::UrlEncoded("item_type".into(), "fragile".into()),
            ]))
            .with_status(200)
            .with_body(r#"{"overall_risk":"Medium"}"#)
            .expect(1)
            .create_async()
            .await;
        let traffic = server
            .mock("GET", "/api/traffic")
            .match_query(Matcher::UrlEncoded("route".into(), "A-B".into()))
            .with_status(200)
            .with_body(r#"{"alerts":[]}"#)
            .expect(1)
            .create_async()
            .await;
        let weather = server
            .mock("GET", "/api/weather-alerts")
            .match_query(Matcher::UrlEncoded("route".into(), "A-B".into()))
            .with_status(500)
            .expect(1)
            .create_async()
            .await;

        let client = client_for(&server.url());
        let mut state = route_submitted();
        let settled = submit(
            &client,
            &mut state,
            inventory(&[ItemType::Fragile, ItemType::Standard]),
        )
        .await;

        assert!(settled);
        route.assert_async().await;
        risk.assert_async().await;
        traffic.assert_async().await;
        weather.assert_async().await;

        assert_eq!(state.step(), WizardStep::Results);
        assert!(!state.is_loading());
        assert_eq!(state.results().route, Some(json!({"distance": 120})));
        assert_eq!(state.results().risk, Some(json!({"overall_risk": "Medium"})));
        assert_eq!(state.results().traffic, Some(json!({"alerts": []})));
        assert_eq!(state.results().weather, None);
    }

    #[tokio::test]
    async fn endpoint_conditions_combine_weather_and_location() {
        let mut server = mockito::Server::new_async().await;
        let _weather = server
            .mock("GET", "/api/weather/Salt%20Lake%20City")
            .with_status(200)
            .with_body(r#"{"city":"Salt Lake City","temperature":4.5,"description":"light snow"}"#)
            .create_async()
            .await;
        let _location = server
            .mock("GET", "/api/location/Salt%20Lake%20City")
            .with_status(404)
            .with_body(r#"{"detail":"Place not found"}"#)
            .create_async()
            .await;

        let client = client_for(&server.url());
        let conditions = endpoint_conditions(&client, "Salt Lake City").await;
        assert_eq!(conditions.place, "Salt Lake City");
        assert_eq!(
            conditions.weather.map(|w| w.summary()),
            Some("4.5°C, light snow".to_string())
        );
        assert_eq!(conditions.coordinates, None);
    }

    #[tokio::test]
    async fn missing_backend_still_reaches_results_with_empty_slots() {
        let client = client_for(UNREACHABLE_BACKEND);
        let mut state = route_submitted();
        let settled = submit(&client, &mut state, inventory(&[ItemType::Perishable])).await;

        assert!(settled);
        assert_eq!(state.step(), WizardStep::Results);
        assert!(!state.is_loading());
        assert_eq!(state.results(), &JourneyResults::default());
    }

    #[tokio::test]
    async fn failed_fan_out_stays_on_inventory_step() {
        let mut state = route_submitted();
        state
            .begin_inventory_submission(inventory(&[ItemType::Standard]), SpecialRequirements::default())
            .unwrap();

        let handle = tokio::spawn(async { std::future::pending::<()>().await });
        handle.abort();
        let join_error = handle.await.unwrap_err();

        assert!(!settle_submission(&mut state, Err(JourneyFetchError::Join(join_error))));
        assert_eq!(state.step(), WizardStep::InventoryEntry);
        assert!(!state.is_loading());
    }
}
