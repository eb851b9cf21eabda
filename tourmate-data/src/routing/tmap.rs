//! Wire types for the T-Map sequential route service.
//!
//! Requests carry coordinates as strings in `WGS84GEO`. Responses are GeoJSON
//! feature collections: `Point` features mark the start (`S`), via (`B1`,
//! `B2`, ...) and end (`E`) stops; `LineString` features carry the path.
//! Numeric properties arrive as numbers or strings depending on the endpoint
//! version, so both are accepted.

use serde::{Deserialize, Serialize};

use tourmate_core::Waypoint;

const COORD_TYPE: &str = "WGS84GEO";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SequentialRouteBody<'a> {
    req_coord_type: &'static str,
    res_coord_type: &'static str,
    start_name: &'a str,
    start_x: String,
    start_y: String,
    start_time: String,
    end_name: &'a str,
    end_x: String,
    end_y: String,
    via_points: Vec<ViaPoint<'a>>,
    search_option: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ViaPoint<'a> {
    via_point_id: String,
    via_point_name: &'a str,
    via_x: String,
    via_y: String,
}

impl<'a> SequentialRouteBody<'a> {
    pub(crate) fn new(
        start: &'a Waypoint,
        end: &'a Waypoint,
        via: &'a [Waypoint],
        start_time: String,
        search_option: &'a str,
    ) -> Self {
        let via_points = via
            .iter()
            .enumerate()
            .map(|(i, waypoint)| ViaPoint {
                via_point_id: format!("via{}", i + 1),
                via_point_name: &waypoint.name,
                via_x: waypoint.location.x.to_string(),
                via_y: waypoint.location.y.to_string(),
            })
            .collect();
        Self {
            req_coord_type: COORD_TYPE,
            res_coord_type: COORD_TYPE,
            start_name: &start.name,
            start_x: start.location.x.to_string(),
            start_y: start.location.y.to_string(),
            start_time,
            end_name: &end.name,
            end_x: end.location.x.to_string(),
            end_y: end.location.y.to_string(),
            via_points,
            search_option,
        }
    }
}

/// A number that may be encoded as a JSON number or a decimal string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub(crate) enum Numeric {
    Integer(u64),
    Float(f64),
    Text(String),
}

impl Numeric {
    /// Non-negative whole value, rounded to the nearest unit.
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "value is checked to be finite and non-negative before rounding"
    )]
    pub(crate) fn as_u64(&self) -> Option<u64> {
        let value = match self {
            Self::Integer(value) => return Some(*value),
            Self::Float(value) => *value,
            Self::Text(text) => {
                let trimmed = text.trim();
                if let Ok(value) = trimmed.parse::<u64>() {
                    return Some(value);
                }
                trimmed.parse::<f64>().ok()?
            }
        };
        (value.is_finite() && value >= 0.0).then(|| value.round() as u64)
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct FeatureCollection {
    #[serde(default)]
    pub(crate) properties: Option<Totals>,
    #[serde(default)]
    pub(crate) features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Totals {
    pub(crate) total_distance: Numeric,
    pub(crate) total_time: Numeric,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Feature {
    pub(crate) geometry: Geometry,
    #[serde(default)]
    pub(crate) properties: FeatureProperties,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
pub(crate) enum Geometry {
    Point { coordinates: [f64; 2] },
    LineString { coordinates: Vec<[f64; 2]> },
    #[serde(other)]
    Other,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FeatureProperties {
    #[serde(default)]
    pub(crate) point_type: Option<String>,
    #[serde(default)]
    pub(crate) via_point_name: Option<String>,
}

/// Error envelope returned with non-2xx statuses.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorEnvelope {
    pub(crate) error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub(crate) code: Option<String>,
    #[serde(default)]
    pub(crate) message: Option<String>,
}

/// Strip the `[n] ` ordinal prefix the service adds to stop names.
pub(crate) fn clean_stop_name(raw: &str) -> &str {
    let trimmed = raw.trim();
    trimmed
        .strip_prefix('[')
        .and_then(|rest| rest.split_once(']'))
        .filter(|(ordinal, _)| !ordinal.is_empty() && ordinal.chars().all(|c| c.is_ascii_digit()))
        .map_or(trimmed, |(_, name)| name.trim_start())
}
