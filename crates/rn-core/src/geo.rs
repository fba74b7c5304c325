//! Geographic coordinate type and great-circle utilities.
//!
//! `GeoPoint` uses `f64` latitude/longitude.  Distances decide whether a
//! facility is inside the search radius, so they are computed with the full
//! haversine formula.  The degree/metre conversions below are approximations
//! used only to bound candidate retrieval.

use crate::{CoreError, CoreResult};

/// Mean Earth radius, metres.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Approximate metres per degree of latitude.
pub const METERS_PER_DEGREE: f64 = 111_320.0;

/// Relative widening applied to the prefilter box so a point lying exactly
/// on the circle survives float rounding.
const BOX_SLACK: f64 = 1.000_000_1;

/// A validated WGS-84 coordinate.
///
/// Latitude is always in `[-90, 90]` and longitude in `[-180, 180]`; the only
/// way to build one is [`GeoPoint::new`].  There is intentionally no
/// `PartialEq`: compare two points with [`distance_m`].
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "LatLng"))]
pub struct GeoPoint {
    lat: f64,
    lng: f64,
}

impl GeoPoint {
    /// Validate and build a point.  `NaN` is rejected on either axis.
    pub fn new(lat: f64, lng: f64) -> CoreResult<Self> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(CoreError::LatitudeOutOfRange(lat));
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(CoreError::LongitudeOutOfRange(lng));
        }
        Ok(Self { lat, lng })
    }

    #[inline]
    pub fn lat(self) -> f64 {
        self.lat
    }

    #[inline]
    pub fn lng(self) -> f64 {
        self.lng
    }

    /// Haversine great-circle distance in metres.  See [`distance_m`].
    #[inline]
    pub fn distance_m(self, other: GeoPoint) -> f64 {
        distance_m(self, other)
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.6}, {:.6}", self.lat, self.lng)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct LatLng {
    lat: f64,
    lng: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<LatLng> for GeoPoint {
    type Error = CoreError;
    fn try_from(raw: LatLng) -> CoreResult<Self> {
        GeoPoint::new(raw.lat, raw.lng)
    }
}

// ── Distance ──────────────────────────────────────────────────────────────────

/// Haversine great-circle distance in metres on a sphere of radius
/// [`EARTH_RADIUS_M`].
///
/// Symmetric in its arguments and exactly `0.0` for identical coordinates.
pub fn distance_m(a: GeoPoint, b: GeoPoint) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();

    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();

    let h = (d_lat * 0.5).sin().powi(2)
        + lat1.cos() * lat2.cos() * (d_lng * 0.5).sin().powi(2);

    // Rounding can push h a hair above 1 for antipodal points.
    2.0 * EARTH_RADIUS_M * h.min(1.0).sqrt().asin()
}

/// Approximate `(lat_delta, lng_delta)` in degrees spanned by `radius_m`
/// around latitude `lat_deg`.
///
/// `lat_delta = r / 111 320` and `lng_delta = r / (111 320 · cos φ)`, with the
/// divisor replaced by `1` when it evaluates to zero.  Not exact at extreme
/// latitudes; never use it as an inclusion test.
pub fn degree_deltas(lat_deg: f64, radius_m: f64) -> (f64, f64) {
    let lat_delta = radius_m / METERS_PER_DEGREE;
    let divisor = METERS_PER_DEGREE * lat_deg.to_radians().cos();
    let divisor = if divisor == 0.0 { 1.0 } else { divisor };
    (lat_delta, radius_m / divisor)
}

/// Human-readable distance: whole metres below 1 km, two decimals below
/// 10 km, one decimal beyond.
pub fn format_distance(meters: f64) -> String {
    if meters < 1_000.0 {
        return format!("{} m", meters.round());
    }
    let km = meters / 1_000.0;
    if km < 10.0 {
        format!("{km:.2} km")
    } else {
        format!("{km:.1} km")
    }
}

// ── Prefilter box ─────────────────────────────────────────────────────────────

/// Latitude/longitude rectangle enclosing every point within a radius of a
/// centre.
///
/// Starts from [`degree_deltas`] and widens each axis to the exact extent of
/// the spherical cap, so a point inside the circle is never outside the box.
/// Latitude is clamped to `[-90, 90]`.  A cap touching a pole spans every
/// longitude; a box crossing the antimeridian is split into two spans.
#[derive(Copy, Clone, Debug)]
pub struct GeoBox {
    pub min_lat: f64,
    pub max_lat: f64,
    spans: [(f64, f64); 2],
    span_count: usize,
}

impl GeoBox {
    pub fn around(center: GeoPoint, radius_m: f64) -> Self {
        let (approx_lat, approx_lng) = degree_deltas(center.lat, radius_m);
        let angular = radius_m / EARTH_RADIUS_M;

        let lat_delta = approx_lat.max(angular.to_degrees()) * BOX_SLACK;
        let reaches_pole =
            center.lat + lat_delta >= 90.0 || center.lat - lat_delta <= -90.0;

        let min_lat = (center.lat - lat_delta).max(-90.0);
        let max_lat = (center.lat + lat_delta).min(90.0);

        let lng_delta = if reaches_pole {
            None
        } else {
            let ratio = angular.sin() / center.lat.to_radians().cos();
            (ratio < 1.0).then(|| approx_lng.max(ratio.asin().to_degrees()) * BOX_SLACK)
        };

        let full = Self { min_lat, max_lat, spans: [(-180.0, 180.0); 2], span_count: 1 };
        let Some(delta) = lng_delta.filter(|&d| d < 180.0) else {
            return full;
        };

        let lo = center.lng - delta;
        let hi = center.lng + delta;
        if lo < -180.0 {
            Self { spans: [(lo + 360.0, 180.0), (-180.0, hi)], span_count: 2, ..full }
        } else if hi > 180.0 {
            Self { spans: [(lo, 180.0), (-180.0, hi - 360.0)], span_count: 2, ..full }
        } else {
            Self { spans: [(lo, hi), (lo, hi)], span_count: 1, ..full }
        }
    }

    /// The `(min_lng, max_lng)` spans covered by this box, west to east
    /// within each span.
    pub fn lng_spans(&self) -> &[(f64, f64)] {
        &self.spans[..self.span_count]
    }

    /// `true` if the box spans every longitude.
    pub fn is_full_width(&self) -> bool {
        self.span_count == 1 && self.spans[0] == (-180.0, 180.0)
    }

    /// Cheap rectangular inclusion test.
    #[inline]
    pub fn contains(&self, p: GeoPoint) -> bool {
        p.lat >= self.min_lat
            && p.lat <= self.max_lat
            && self.lng_spans().iter().any(|&(lo, hi)| p.lng >= lo && p.lng <= hi)
    }
}
