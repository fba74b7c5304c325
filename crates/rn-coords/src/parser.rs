//! The full text → `GeoPoint` pipeline.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use rn_core::GeoPoint;

use crate::dms::{Axis, dms_tokens};
use crate::sanitize::sanitize;
use crate::{CoordError, CoordResult};

static DECIMAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-?\d+(?:\.\d+)?").expect("valid regex"));

/// Parse free-form coordinate text.
///
/// Accepts decimal pairs (`"14.5995, 120.9842"`) and DMS pairs
/// (`"14°35'58.2\"N 120°59'3.1\"E"`).  A pair entered longitude-first is
/// swapped when the first value cannot be a latitude.  A result outside
/// `[-90, 90] × [-180, 180]` is a hard failure.
pub fn parse(input: &str) -> CoordResult<GeoPoint> {
    let result = parse_sanitized(&sanitize(input));
    if let Err(e) = &result {
        debug!(input, error = %e, "coordinate parse failed");
    }
    result
}

fn parse_sanitized(text: &str) -> CoordResult<GeoPoint> {
    if text.is_empty() {
        return Err(CoordError::Empty);
    }

    if text.contains('°') {
        let tokens = dms_tokens(text)?;
        if let [a, b, ..] = tokens.as_slice() {
            let (lat, lng) = match (a.axis(), b.axis()) {
                (Axis::Longitude, Axis::Latitude) => (b.value(), a.value()),
                _ => (a.value(), b.value()),
            };
            return validate(normalize(lat, lng));
        }
    }

    let numbers = DECIMAL_RE
        .find_iter(text)
        .map(|m| {
            m.as_str()
                .parse::<f64>()
                .map_err(|_| CoordError::InvalidNumber(m.as_str().to_string()))
        })
        .take(2)
        .collect::<CoordResult<Vec<f64>>>()?;

    match numbers.as_slice() {
        &[lat, lng] => validate(normalize(lat, lng)),
        _ => Err(CoordError::TooFewValues { found: numbers.len() }),
    }
}

/// Swap the pair when the first value's magnitude exceeds 90 and the
/// second's does not.
pub fn normalize(lat: f64, lng: f64) -> (f64, f64) {
    if lat.abs() > 90.0 && lng.abs() <= 90.0 {
        (lng, lat)
    } else {
        (lat, lng)
    }
}

fn validate((lat, lng): (f64, f64)) -> CoordResult<GeoPoint> {
    GeoPoint::new(lat, lng).map_err(|_| CoordError::OutOfRange { lat, lng })
}
