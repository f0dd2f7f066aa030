//! One accessor per backend resource. Each fixes the resource's path and query shape
//! and hands back the collapsed [`QueryResult`] untouched.

use crate::domain::ItemType;
use crate::infra::client::{ApiClient, QueryResult};

impl ApiClient {
    pub async fn weather(&self, city: &str) -> QueryResult {
        self.fetch(&["weather", city], &[]).await
    }

    pub async fn location(&self, place: &str) -> QueryResult {
        self.fetch(&["location", place], &[]).await
    }

    pub async fn route(&self, origin: &str, destination: &str) -> QueryResult {
        self.fetch(&["route"], &[("origin", origin), ("destination", destination)])
            .await
    }

    pub async fn news(&self) -> QueryResult {
        self.fetch(&["news"], &[]).await
    }

    /// Risk for moving `item_type` goods between two places; `None` asks for standard goods.
    pub async fn risk_assessment(
        &self,
        origin: &str,
        destination: &str,
        item_type: Option<ItemType>,
    ) -> QueryResult {
        let item_type = item_type.unwrap_or_default();
        self.fetch(
            &["risk"],
            &[
                ("origin", origin),
                ("destination", destination),
                ("item_type", item_type.as_str()),
            ],
        )
        .await
    }

    /// `route` is the combined "origin-destination" key.
    pub async fn traffic_alerts(&self, route: &str) -> QueryResult {
        self.fetch(&["traffic"], &[("route", route)]).await
    }

    pub async fn weather_alerts(&self, route: &str) -> QueryResult {
        self.fetch(&["weather-alerts"], &[("route", route)]).await
    }
}

#[cfg(test)]
mod tests {
    use mockito::Matcher;
    use serde_json::json;

    use super::*;
    use crate::infra::client::tests::{client_for, UNREACHABLE_BACKEND};

    fn query(pairs: &[(&str, &str)]) -> Matcher {
        Matcher::AllOf(
            pairs
                .iter()
                .map(|(key, value)| Matcher::UrlEncoded(key.to_string(), value.to_string()))
                .collect(),
        )
    }

    #[tokio::test]
    async fn path_resources_encode_their_argument() {
        let mut server = mockito::Server::new_async().await;
        let location = json!({"place": "New York", "coordinates": [-74.006, 40.7128]});
        let weather = json!({"city": "Austin/Round Rock", "temperature": 31.5});
        let location_mock = server
            .mock("GET", "/api/location/New%20York")
            .with_status(200)
            .with_body(location.to_string())
            .create_async()
            .await;
        let weather_mock = server
            .mock("GET", "/api/weather/Austin%2FRound%20Rock")
            .with_status(200)
            .with_body(weather.to_string())
            .create_async()
            .await;

        let client = client_for(&server.url());
        assert_eq!(client.location("New York").await, Some(location));
        assert_eq!(client.weather("Austin/Round Rock").await, Some(weather));
        location_mock.assert_async().await;
        weather_mock.assert_async().await;
    }

    #[tokio::test]
    async fn route_sends_origin_and_destination() {
        let mut server = mockito::Server::new_async().await;
        let payload = json!({"distance": 120, "duration": 135});
        let mock = server
            .mock("GET", "/api/route")
            .match_query(query(&[("origin", "San Jose"), ("destination", "Fresno")]))
            .with_status(200)
            .with_body(payload.to_string())
            .create_async()
            .await;

        let client = client_for(&server.url());
        assert_eq!(client.route("San Jose", "Fresno").await, Some(payload));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn risk_defaults_to_standard_goods() {
        let mut server = mockito::Server::new_async().await;
        let standard = server
            .mock("GET", "/api/risk")
            .match_query(query(&[
                ("origin", "A"),
                ("destination", "B"),
                ("item_type", "standard"),
            ]))
            .with_status(200)
            .with_body(r#"{"overall_risk":"Low"}"#)
            .create_async()
            .await;
        let hazardous = server
            .mock("GET", "/api/risk")
            .match_query(query(&[
                ("origin", "A"),
                ("destination", "B"),
                ("item_type", "hazardous"),
            ]))
            .with_status(200)
            .with_body(r#"{"overall_risk":"High"}"#)
            .create_async()
            .await;

        let client = client_for(&server.url());
        assert_eq!(
            client.risk_assessment("A", "B", None).await,
            Some(json!({"overall_risk": "Low"}))
        );
        assert_eq!(
            client.risk_assessment("A", "B", Some(ItemType::Hazardous)).await,
            Some(json!({"overall_risk": "High"}))
        );
        standard.assert_async().await;
        hazardous.assert_async().await;
    }

    #[tokio::test]
    async fn alert_feeds_take_the_combined_route_key() {
        let mut server = mockito::Server::new_async().await;
        let traffic = json!({"alerts": [], "recommendation": "Clear roads."});
        let weather = json!({"alerts": [{"location": "Pass", "condition": "Fog"}]});
        let traffic_mock = server
            .mock("GET", "/api/traffic")
            .match_query(query(&[("route", "Los Angeles-Las Vegas")]))
            .with_status(200)
            .with_body(traffic.to_string())
            .create_async()
            .await;
        let weather_mock = server
            .mock("GET", "/api/weather-alerts")
            .match_query(query(&[("route", "Los Angeles-Las Vegas")]))
            .with_status(200)
            .with_body(weather.to_string())
            .create_async()
            .await;

        let client = client_for(&server.url());
        assert_eq!(client.traffic_alerts("Los Angeles-Las Vegas").await, Some(traffic));
        assert_eq!(client.weather_alerts("Los Angeles-Las Vegas").await, Some(weather));
        traffic_mock.assert_async().await;
        weather_mock.assert_async().await;
    }

    #[tokio::test]
    async fn repeated_queries_are_idempotent() {
        let mut server = mockito::Server::new_async().await;
        let payload = json!({"news": [{"title": "Port congestion eases", "link": "https://example.com/1"}]});
        let mock = server
            .mock("GET", "/api/news")
            .with_status(200)
            .with_body(payload.to_string())
            .expect(2)
            .create_async()
            .await;

        let client = client_for(&server.url());
        let first = client.news().await;
        let second = client.news().await;
        assert_eq!(first, Some(payload));
        assert_eq!(first, second);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn failing_backend_yields_none_for_every_resource() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", Matcher::Any)
            .with_status(500)
            .create_async()
            .await;

        for base in [server.url(), UNREACHABLE_BACKEND.to_string()] {
            let client = client_for(&base);
            assert_eq!(client.weather("Paris").await, None);
            assert_eq!(client.location("Paris").await, None);
            assert_eq!(client.route("A", "B").await, None);
            assert_eq!(client.news().await, None);
            assert_eq!(client.risk_assessment("A", "B", None).await, None);
            assert_eq!(client.traffic_alerts("A-B").await, None);
            assert_eq!(client.weather_alerts("A-B").await, None);
        }
    }
}
