//! Display models read leniently from backend payloads.
//!
//! Payloads are decoded into raw `Deserialize` structs whose fields are all optional, then
//! mapped into display values. Absent or unreadable fields are replaced with canned
//! content, and the model reports `estimated = true` so the UI can flag it.

use serde::de::{self, DeserializeOwned, Deserializer, Visitor};
use serde::Deserialize;
use serde_json::Value;

pub const FALLBACK_DISTANCE_MILES: f64 = 450.0;
pub const FALLBACK_TRAVEL_TIME: &str = "8 hours 30 minutes";
pub const FALLBACK_DEPARTURE: &str = "6:00 AM";
pub const FALLBACK_ROUTE_RECOMMENDATION: &str = "Based on current conditions, we recommend taking the northern route to avoid traffic congestion and potential weather delays.";
pub const FALLBACK_WEATHER_RECOMMENDATION: &str = "Plan for a 1-hour buffer in your schedule to account for potential weather delays. The rain at Springfield may slow traffic.";
pub const FALLBACK_TRAFFIC_RECOMMENDATION: &str = "Take the alternate route via Highway 280 to avoid the construction zone. This will add 12 miles but save approximately 45 minutes.";
pub const FALLBACK_RISK_RECOMMENDATION: &str = "Consider adding temperature monitoring for perishable goods due to potential delays in areas with high temperatures.";
pub const FALLBACK_RISK_FACTORS: [&str; 3] = [
    "Weather conditions may affect perishable goods",
    "Traffic delays could impact delivery timeline",
    "Current inventory levels are sufficient for the journey",
];

/// Decodes a payload into its raw form. A missing payload or one that does not match the
/// expected shape reads as the all-absent default.
fn decode<T>(payload: Option<&Value>) -> T
where
    T: DeserializeOwned + Default,
{
    let Some(payload) = payload else {
        return T::default();
    };
    T::deserialize(payload).unwrap_or_else(|err| {
        log::debug!("unreadable payload, showing fallback content: {err}");
        T::default()
    })
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}

/// Accepts `212`, `212.5` or `"212.5"`. Null, unparsable and non-finite values read as absent.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    struct NumberOrString;

    impl<'de> Visitor<'de> for NumberOrString {
        type Value = Option<f64>;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("a number or numeric string")
        }

        fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value).filter(|value| value.is_finite()))
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value as f64))
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value as f64))
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite()))
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_some<D2>(self, deserializer: D2) -> Result<Self::Value, D2::Error>
        where
            D2: Deserializer<'de>,
        {
            deserializer.deserialize_any(self)
        }
    }

    deserializer.deserialize_any(NumberOrString)
}

/// Integral values print without decimals; others keep one.
pub fn format_quantity(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

/// `510` minutes reads as `"8 hours 30 minutes"`.
pub fn format_duration(minutes: u64) -> String {
    format!("{} hours {} minutes", minutes / 60, minutes % 60)
}

#[derive(Debug, Default, Deserialize)]
struct RawRoute {
    #[serde(default, deserialize_with = "lenient_number")]
    distance: Option<f64>,
    /// Minutes.
    #[serde(default, deserialize_with = "lenient_number")]
    duration: Option<f64>,
    #[serde(default)]
    recommended_departure: Option<String>,
    #[serde(default)]
    route_recommendation: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RouteDetails {
    pub distance_miles: f64,
    pub travel_time: String,
    pub departure: String,
    pub recommendation: String,
    pub estimated: bool,
}

impl RouteDetails {
    pub fn from_payload(payload: Option<&Value>) -> Self {
        let raw: RawRoute = decode(payload);
        let distance = raw.distance.filter(|miles| *miles > 0.0);
        let duration = raw.duration.filter(|minutes| *minutes >= 0.0);
        let departure = non_blank(raw.recommended_departure);
        let recommendation = non_blank(raw.route_recommendation);
        let estimated = distance.is_none()
            || duration.is_none()
            || departure.is_none()
            || recommendation.is_none();

        Self {
            distance_miles: distance.unwrap_or(FALLBACK_DISTANCE_MILES),
            travel_time: duration
                .map(|minutes| format_duration(minutes.round() as u64))
                .unwrap_or_else(|| FALLBACK_TRAVEL_TIME.to_string()),
            departure: departure.unwrap_or_else(|| FALLBACK_DEPARTURE.to_string()),
            recommendation: recommendation
                .unwrap_or_else(|| FALLBACK_ROUTE_RECOMMENDATION.to_string()),
            estimated,
        }
    }

    pub fn distance_label(&self) -> String {
        format!("{} miles", format_quantity(self.distance_miles))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    #[default]
    Low,
    Medium,
    High,
}

impl Level {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "low" => Some(Level::Low),
            "medium" => Some(Level::Medium),
            "high" => Some(Level::High),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Level::Low => "Low",
            Level::Medium => "Medium",
            Level::High => "High",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertKind {
    Traffic,
    Weather,
}

#[derive(Debug, Default, Deserialize)]
struct RawAlert {
    #[serde(default)]
    location: Option<String>,
    #[serde(default)]
    condition: Option<String>,
    #[serde(default)]
    impact: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

/// Shared shape of the traffic and weather-alert feeds.
#[derive(Debug, Default, Deserialize)]
struct RawAlertFeed {
    #[serde(default)]
    alerts: Option<Vec<RawAlert>>,
    #[serde(default)]
    recommendation: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Alert {
    pub location: String,
    pub condition: String,
    pub impact: Level,
    pub description: String,
}

impl From<RawAlert> for Alert {
    fn from(value: RawAlert) -> Self {
        Self {
            location: non_blank(value.location).unwrap_or_else(|| "Unknown location".to_string()),
            condition: value.condition.unwrap_or_default(),
            // Unrecognised impact labels render as low.
            impact: value
                .impact
                .as_deref()
                .and_then(Level::parse)
                .unwrap_or_default(),
            description: value.description.unwrap_or_default(),
        }
    }
}

impl Alert {
    fn new(location: &str, condition: &str, impact: Level, description: &str) -> Self {
        Self {
            location: location.to_string(),
            condition: condition.to_string(),
            impact,
            description: description.to_string(),
        }
    }

    pub fn icon(&self, kind: AlertKind) -> &'static str {
        match kind {
            AlertKind::Traffic => "🚚",
            AlertKind::Weather if self.condition.contains("Rain") => "🌧️",
            AlertKind::Weather => "☁️",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AlertFeed {
    pub kind: AlertKind,
    pub alerts: Vec<Alert>,
    pub recommendation: String,
    pub estimated: bool,
}

impl AlertFeed {
    pub fn from_payload(kind: AlertKind, payload: Option<&Value>) -> Self {
        let raw: RawAlertFeed = decode(payload);
        let listed = raw
            .alerts
            .map(|entries| entries.into_iter().map(Alert::from).collect::<Vec<_>>());
        let recommendation = non_blank(raw.recommendation);
        let estimated = listed.is_none() || recommendation.is_none();

        Self {
            kind,
            alerts: listed.unwrap_or_else(|| fallback_alerts(kind)),
            recommendation: recommendation
                .unwrap_or_else(|| fallback_recommendation(kind).to_string()),
            estimated,
        }
    }
}

fn fallback_alerts(kind: AlertKind) -> Vec<Alert> {
    match kind {
        AlertKind::Traffic => vec![Alert::new(
            "Highway 101 (Mile 78-82)",
            "Construction",
            Level::High,
            "Road construction causing lane closures and significant delays.",
        )],
        AlertKind::Weather => vec![
            Alert::new(
                "Midway Point (Springfield)",
                "Heavy Rain",
                Level::Medium,
                "Heavy rain expected between 2PM-6PM. May cause slight delays.",
            ),
            Alert::new(
                "Mountain Pass",
                "Fog",
                Level::Low,
                "Morning fog expected to clear by 9AM.",
            ),
        ],
    }
}

fn fallback_recommendation(kind: AlertKind) -> &'static str {
    match kind {
        AlertKind::Traffic => FALLBACK_TRAFFIC_RECOMMENDATION,
        AlertKind::Weather => FALLBACK_WEATHER_RECOMMENDATION,
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawRisk {
    #[serde(default)]
    overall_risk: Option<String>,
    #[serde(default)]
    weather_risk: Option<String>,
    #[serde(default)]
    traffic_risk: Option<String>,
    #[serde(default)]
    inventory_risk: Option<String>,
    /// The backend pads this list with nulls.
    #[serde(default)]
    risk_factors: Option<Vec<Option<String>>>,
    #[serde(default)]
    recommendation: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RiskReport {
    pub overall: Level,
    pub weather: Option<Level>,
    pub traffic: Option<Level>,
    pub inventory: Option<Level>,
    pub factors: Vec<String>,
    pub recommendation: String,
    pub estimated: bool,
}

impl RiskReport {
    pub fn from_payload(payload: Option<&Value>) -> Self {
        let raw: RawRisk = decode(payload);
        let overall = non_blank(raw.overall_risk);
        let factors = raw.risk_factors.map(|entries| {
            entries
                .into_iter()
                .flatten()
                .filter(|factor| !factor.is_empty())
                .collect::<Vec<_>>()
        });
        let recommendation = non_blank(raw.recommendation);
        let estimated = overall.is_none() || factors.is_none() || recommendation.is_none();
        let level = |value: Option<String>| value.as_deref().and_then(Level::parse);

        Self {
            overall: match overall {
                Some(raw) => Level::parse(&raw).unwrap_or_default(),
                None => Level::Medium,
            },
            weather: level(raw.weather_risk),
            traffic: level(raw.traffic_risk),
            inventory: level(raw.inventory_risk),
            factors: factors.unwrap_or_else(|| {
                FALLBACK_RISK_FACTORS.iter().map(|f| f.to_string()).collect()
            }),
            recommendation: recommendation
                .unwrap_or_else(|| FALLBACK_RISK_RECOMMENDATION.to_string()),
            estimated,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawWeather {
    #[serde(default)]
    city: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    temperature: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    humidity: Option<f64>,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct WeatherSnapshot {
    pub city: String,
    pub temperature_c: Option<f64>,
    pub humidity: Option<f64>,
    pub description: Option<String>,
}

impl WeatherSnapshot {
    pub fn from_payload(city: &str, payload: &Value) -> Self {
        let raw: RawWeather = decode(Some(payload));
        Self {
            city: non_blank(raw.city).unwrap_or_else(|| city.to_string()),
            temperature_c: raw.temperature,
            humidity: raw.humidity,
            description: non_blank(raw.description),
        }
    }

    pub fn summary(&self) -> String {
        let mut parts = Vec::new();
        if let Some(temp) = self.temperature_c {
            parts.push(format!("{}°C", format_quantity(temp)));
        }
        if let Some(humidity) = self.humidity {
            parts.push(format!("{}% humidity", format_quantity(humidity)));
        }
        if let Some(description) = &self.description {
            parts.push(description.clone());
        }
        if parts.is_empty() {
            "No conditions reported".to_string()
        } else {
            parts.join(", ")
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawLocation {
    /// `[lon, lat]`.
    #[serde(default)]
    coordinates: Option<Vec<f64>>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinates {
    pub longitude: f64,
    pub latitude: f64,
}

impl Coordinates {
    pub fn from_payload(payload: &Value) -> Option<Self> {
        let raw: RawLocation = decode(Some(payload));
        match raw.coordinates?.as_slice() {
            [longitude, latitude, ..] => Some(Self {
                longitude: *longitude,
                latitude: *latitude,
            }),
            _ => None,
        }
    }

    pub fn label(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

/// Current weather and resolved position for one end of the journey.
#[derive(Clone, Debug, PartialEq)]
pub struct EndpointConditions {
    pub place: String,
    pub weather: Option<WeatherSnapshot>,
    pub coordinates: Option<Coordinates>,
}

impl EndpointConditions {
    pub fn from_payloads(place: &str, weather: Option<&Value>, location: Option<&Value>) -> Self {
        Self {
            place: place.to_string(),
            weather: weather.map(|payload| WeatherSnapshot::from_payload(place, payload)),
            coordinates: location.and_then(Coordinates::from_payload),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawHeadline {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    link: Option<String>,
    #[serde(default)]
    published: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawNews {
    #[serde(default)]
    news: Vec<RawHeadline>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Headline {
    pub title: String,
    pub link: Option<String>,
    pub published: Option<String>,
}

/// Titled entries of a news payload, in feed order. Untitled entries are skipped.
pub fn headlines(payload: Option<&Value>) -> Vec<Headline> {
    let raw: RawNews = decode(payload);
    raw.news
        .into_iter()
        .filter_map(|entry| {
            Some(Headline {
                title: non_blank(entry.title)?,
                link: non_blank(entry.link),
                published: non_blank(entry.published),
            })
        })
        .collect()
}
