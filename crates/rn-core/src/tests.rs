//! Unit tests for rn-core primitives.

#[cfg(test)]
mod ids {
    use crate::FacilityPos;

    #[test]
    fn index_roundtrip() {
        let pos = FacilityPos(42);
        assert_eq!(pos.index(), 42);
        assert_eq!(FacilityPos::try_from(42usize).unwrap(), pos);
    }

    #[test]
    fn ordering() {
        assert!(FacilityPos(0) < FacilityPos(1));
    }

    #[test]
    fn display() {
        assert_eq!(FacilityPos(7).to_string(), "#7");
    }
}

#[cfg(test)]
mod point {
    use crate::{CoreError, GeoPoint};

    #[test]
    fn accepts_range_limits() {
        assert!(GeoPoint::new(90.0, 180.0).is_ok());
        assert!(GeoPoint::new(-90.0, -180.0).is_ok());
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(
            GeoPoint::new(90.5, 0.0).unwrap_err(),
            CoreError::LatitudeOutOfRange(90.5)
        );
        assert_eq!(
            GeoPoint::new(0.0, -180.1).unwrap_err(),
            CoreError::LongitudeOutOfRange(-180.1)
        );
    }

    #[test]
    fn rejects_nan() {
        assert!(GeoPoint::new(f64::NAN, 0.0).is_err());
        assert!(GeoPoint::new(0.0, f64::NAN).is_err());
    }

    #[test]
    fn display_six_decimals() {
        let p = GeoPoint::new(14.5995, 120.9842).unwrap();
        assert_eq!(p.to_string(), "14.599500, 120.984200");
    }
}

#[cfg(test)]
mod distance {
    use crate::{GeoPoint, distance_m};

    fn pt(lat: f64, lng: f64) -> GeoPoint {
        GeoPoint::new(lat, lng).unwrap()
    }

    #[test]
    fn zero_distance() {
        let p = pt(14.5995, 120.9842);
        assert_eq!(distance_m(p, p), 0.0);
    }

    #[test]
    fn symmetric() {
        let pairs = [
            (pt(14.5995, 120.9842), pt(10.3157, 123.8854)),
            (pt(-33.86, 151.21), pt(51.5074, -0.1278)),
            (pt(0.0, 179.9), pt(0.0, -179.9)),
        ];
        for (a, b) in pairs {
            assert!((distance_m(a, b) - distance_m(b, a)).abs() < 1e-9);
        }
    }

    #[test]
    fn one_degree_latitude() {
        // π·R/180 ≈ 111 194.9 m
        let d = distance_m(pt(30.0, -88.0), pt(31.0, -88.0));
        assert!((d - 111_194.93).abs() < 0.5, "got {d}");
    }

    #[test]
    fn across_antimeridian_is_short() {
        let d = distance_m(pt(0.0, 179.99), pt(0.0, -179.99));
        assert!(d < 2_300.0, "got {d}");
    }

    #[test]
    fn antipodes_do_not_nan() {
        let d = distance_m(pt(0.0, 0.0), pt(0.0, 180.0));
        assert!((d - std::f64::consts::PI * crate::EARTH_RADIUS_M).abs() < 1.0);
    }
}

#[cfg(test)]
mod deltas {
    use crate::degree_deltas;

    #[test]
    fn equator() {
        let (lat, lng) = degree_deltas(0.0, 111_320.0);
        assert!((lat - 1.0).abs() < 1e-12);
        assert!((lng - 1.0).abs() < 1e-12);
    }

    #[test]
    fn sixty_degrees_doubles_longitude() {
        let (lat, lng) = degree_deltas(60.0, 1_113.2);
        assert!((lat - 0.01).abs() < 1e-12);
        assert!((lng - 0.02).abs() < 1e-9, "got {lng}");
    }

    #[test]
    fn pole_is_finite() {
        let (_, lng) = degree_deltas(90.0, 1_000.0);
        assert!(lng.is_finite());
        assert!(lng > 180.0);
    }
}

#[cfg(test)]
mod format {
    use crate::format_distance;

    #[test]
    fn metres_are_rounded() {
        assert_eq!(format_distance(0.0), "0 m");
        assert_eq!(format_distance(12.4), "12 m");
        assert_eq!(format_distance(12.6), "13 m");
        assert_eq!(format_distance(999.4), "999 m");
    }

    #[test]
    fn short_kilometres_two_decimals() {
        assert_eq!(format_distance(1_000.0), "1.00 km");
        assert_eq!(format_distance(2_346.0), "2.35 km");
        assert_eq!(format_distance(9_990.0), "9.99 km");
    }

    #[test]
    fn long_kilometres_one_decimal() {
        assert_eq!(format_distance(10_000.0), "10.0 km");
        assert_eq!(format_distance(123_456.0), "123.5 km");
    }
}

#[cfg(test)]
mod bbox {
    use crate::{GeoBox, GeoPoint, distance_m};

    fn pt(lat: f64, lng: f64) -> GeoPoint {
        GeoPoint::new(lat, lng).unwrap()
    }

    #[test]
    fn contains_centre_and_rejects_far() {
        let c = pt(14.5995, 120.9842);
        let b = GeoBox::around(c, 1_000.0);
        assert!(b.contains(c));
        assert!(!b.contains(pt(14.7, 120.9842)));
        assert_eq!(b.lng_spans().len(), 1);
    }

    #[test]
    fn due_north_point_on_circle_is_inside() {
        // 111 320 m/deg understates a degree; the box must still hold
        // a point 999.9 m due north.
        let c = pt(14.5995, 120.9842);
        let north = pt(14.5995 + (999.9 / crate::EARTH_RADIUS_M).to_degrees(), 120.9842);
        assert!(distance_m(c, north) <= 1_000.0);
        assert!(GeoBox::around(c, 1_000.0).contains(north));
    }

    #[test]
    fn wraps_antimeridian() {
        let c = pt(0.0, 179.995);
        let b = GeoBox::around(c, 2_000.0);
        assert_eq!(b.lng_spans().len(), 2);
        assert!(b.contains(pt(0.0, -179.995)));
        assert!(!b.contains(pt(0.0, 0.0)));
    }

    #[test]
    fn polar_cap_spans_all_longitudes() {
        let b = GeoBox::around(pt(89.99, 10.0), 5_000.0);
        assert!(b.is_full_width());
        assert_eq!(b.max_lat, 90.0);
        assert!(b.contains(pt(89.99, -170.0)));
    }

    #[test]
    fn high_latitude_width_covers_cap() {
        // At 80° and 1 000 km the cap is far wider than r / (111 320 · cos φ).
        let c = pt(80.0, 0.0);
        let r = 1_000_000.0;
        let lng_extent = ((r / crate::EARTH_RADIUS_M).sin() / 80f64.to_radians().cos())
            .asin()
            .to_degrees();
        let edge = pt(79.0, lng_extent * 0.99);
        let b = GeoBox::around(c, r);
        if distance_m(c, edge) <= r {
            assert!(b.contains(edge));
        }
        assert!(b.lng_spans()[0].1 >= lng_extent);
    }
}
