//! Deterministic test doubles for the translation and routing seams.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crate::{
    Language, RoutePlan, RouteProvider, RouteRequest, RouteStop, RoutingError, StopKind,
    TranslationError, Translator,
};

/// `Translator` that tags text with the target code and counts calls.
///
/// Successful translations look like `"[en] 지도"`.
#[derive(Debug, Default)]
pub struct RecordingTranslator {
    calls: AtomicUsize,
    fail: bool,
}

impl RecordingTranslator {
    /// A translator whose every call fails with a network error.
    #[must_use]
    pub const fn failing() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail: true,
        }
    }

    /// Number of times the backend was invoked.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Translator for RecordingTranslator {
    fn translate(
        &self,
        text: &str,
        _from: Language,
        to: Language,
    ) -> Result<String, TranslationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if text.is_empty() {
            return Err(TranslationError::EmptyText);
        }
        if self.fail {
            return Err(TranslationError::NetworkError {
                url: "http://translator.invalid".to_owned(),
                message: "connection refused".to_owned(),
            });
        }
        Ok(format!("[{}] {text}", to.code()))
    }
}

/// `RouteProvider` that visits the stops in request order along straight
/// segments, charging one kilometre and ten minutes per leg.
#[derive(Debug, Default, Copy, Clone)]
pub struct StraightLineRouteProvider;

/// Distance charged per leg by [`StraightLineRouteProvider`].
pub const LEG_DISTANCE_M: u64 = 1_000;

/// Time charged per leg by [`StraightLineRouteProvider`].
pub const LEG_TIME: Duration = Duration::from_secs(600);

impl RouteProvider for StraightLineRouteProvider {
    fn plan_route(&self, request: &RouteRequest) -> Result<RoutePlan, RoutingError> {
        let last = request.via.len() + 1;
        let stops: Vec<RouteStop> = request
            .waypoints()
            .enumerate()
            .map(|(index, waypoint)| RouteStop {
                index,
                name: waypoint.name.clone(),
                location: waypoint.location,
                kind: match index {
                    0 => StopKind::Start,
                    i if i == last => StopKind::End,
                    _ => StopKind::Via,
                },
            })
            .collect();
        let path = stops.iter().map(|stop| stop.location).collect();
        let legs = u32::try_from(last).map_err(|err| RoutingError::ParseError {
            message: err.to_string(),
        })?;
        RoutePlan::new(
            stops,
            path,
            LEG_DISTANCE_M * u64::from(legs),
            LEG_TIME * legs,
        )
        .map_err(|err| RoutingError::ParseError {
            message: err.to_string(),
        })
    }
}
