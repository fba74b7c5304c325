//! Unit tests for rn-store.

use std::io::Cursor;

use rn_core::{FacilityPos, GeoPoint};

use crate::{Facility, FacilityStore};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn fac(id: &str, property: &str, lat: f64, lng: f64) -> Facility {
    Facility::new(id, property, GeoPoint::new(lat, lng).unwrap())
}

/// Four records around Metro Manila.
fn manila() -> FacilityStore {
    FacilityStore::load(vec![
        fac("MNL-001", "Makati Tower", 14.5547, 121.0244),
        fac("MNL-002", "Quezon Hub", 14.6760, 121.0437),
        fac("CEB-001", "Cebu IT Park", 10.3300, 123.9060),
        fac("MNL-003", "tower annex (makati)", 14.5550, 121.0250),
    ])
    .unwrap()
}

const JSON_DATA: &str = r#"[
  {"id":"MNL-001","property":"Makati Tower","lat":14.5547,"lng":121.0244},
  {"id":"CEB-001","property":"Cebu IT Park","lat":10.33,"lng":123.906}
]"#;

const CSV_DATA: &str = "\
id,property,lat,lng\n\
MNL-001, Makati Tower ,14.5547,121.0244\n\
CEB-001,Cebu IT Park,10.33,123.906\n\
";

// ── FacilityStore ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod store {
    use super::*;

    #[test]
    fn positions_follow_input_order() {
        let s = manila();
        assert_eq!(s.len(), 4);
        assert_eq!(s.get(FacilityPos(0)).id, "MNL-001");
        assert_eq!(s.get(FacilityPos(2)).id, "CEB-001");
        let ids: Vec<_> = s.iter().map(|(p, f)| (p.0, f.id.as_str())).collect();
        assert_eq!(ids, vec![(0, "MNL-001"), (1, "MNL-002"), (2, "CEB-001"), (3, "MNL-003")]);
    }

    #[test]
    fn locations_mirror_records() {
        let s = manila();
        assert_eq!(s.locations().len(), 4);
        assert_eq!(s.location(FacilityPos(1)).lat(), 14.6760);
    }

    #[test]
    fn try_get_out_of_range() {
        assert!(manila().try_get(FacilityPos(4)).is_none());
    }

    #[test]
    #[should_panic]
    fn get_out_of_range_panics() {
        let _ = manila().get(FacilityPos(99));
    }

    #[test]
    fn empty_store() {
        let s = FacilityStore::empty();
        assert!(s.is_empty());
        assert_eq!(s.search("x", 10).count(), 0);
    }

    #[test]
    fn label() {
        assert_eq!(fac("A", "B", 0.0, 0.0).label(), "A — B");
    }
}

// ── search ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod search {
    use super::*;

    #[test]
    fn case_insensitive_on_both_fields() {
        let s = manila();
        let hits: Vec<_> = s.search("MaKaTi", 20).map(|(p, _)| p).collect();
        assert_eq!(hits, vec![FacilityPos(0), FacilityPos(3)]);

        let hits: Vec<_> = s.search("mnl-00", 20).map(|(p, _)| p.0).collect();
        assert_eq!(hits, vec![0, 1, 3]);
    }

    #[test]
    fn stops_at_max_matches() {
        let s = manila();
        let hits: Vec<_> = s.search("mnl", 2).map(|(p, _)| p.0).collect();
        assert_eq!(hits, vec![0, 1]);
        assert_eq!(s.search("mnl", 0).count(), 0);
    }

    #[test]
    fn result_is_lazy() {
        let s = manila();
        let mut it = s.search("tower", 20);
        assert_eq!(it.next().map(|(p, _)| p), Some(FacilityPos(0)));
        assert_eq!(it.next().map(|(p, f)| (p, f.id.clone())), Some((FacilityPos(3), "MNL-003".into())));
        assert!(it.next().is_none());
    }

    #[test]
    fn no_match() {
        assert_eq!(manila().search("davao", 20).count(), 0);
    }
}

// ── Loaders ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use super::*;
    use crate::{StoreError, load_facilities, load_facilities_csv_reader, load_facilities_json_reader};

    #[test]
    fn json_roundtrip_fields() {
        let s = load_facilities_json_reader(Cursor::new(JSON_DATA)).unwrap();
        assert_eq!(s.len(), 2);
        let f = s.get(FacilityPos(1));
        assert_eq!((f.id.as_str(), f.property.as_str()), ("CEB-001", "Cebu IT Park"));
        assert_eq!((f.location.lat(), f.location.lng()), (10.33, 123.906));
    }

    #[test]
    fn csv_trims_fields() {
        let s = load_facilities_csv_reader(Cursor::new(CSV_DATA)).unwrap();
        assert_eq!(s.len(), 2);
        assert_eq!(s.get(FacilityPos(0)).property, "Makati Tower");
    }

    #[test]
    fn missing_property_defaults_to_empty() {
        let s = load_facilities_json_reader(Cursor::new(r#"[{"id":"X","lat":1,"lng":2}]"#)).unwrap();
        assert_eq!(s.get(FacilityPos(0)).property, "");
    }

    #[test]
    fn invalid_coordinate_fails_whole_load() {
        let data = r#"[
            {"id":"OK","property":"","lat":1,"lng":2},
            {"id":"BAD","property":"","lat":120.9,"lng":14.6}
        ]"#;
        match load_facilities_json_reader(Cursor::new(data)) {
            Err(StoreError::InvalidLocation { row, id, .. }) => {
                assert_eq!(row, 1);
                assert_eq!(id, "BAD");
            }
            other => panic!("expected InvalidLocation, got {other:?}"),
        }
    }

    #[test]
    fn malformed_inputs() {
        assert!(matches!(
            load_facilities_json_reader(Cursor::new("{}")),
            Err(StoreError::Json(_))
        ));
        assert!(matches!(
            load_facilities_csv_reader(Cursor::new("id,property,lat,lng\nA,B,north,2\n")),
            Err(StoreError::Csv(_))
        ));
    }

    #[test]
    fn unknown_extension() {
        let r = load_facilities(std::path::Path::new("facilities.xml"));
        assert!(matches!(r, Err(StoreError::UnknownFormat(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        let r = load_facilities(std::path::Path::new("/definitely/not/here.json"));
        assert!(matches!(r, Err(StoreError::Io(_))));
    }
}
