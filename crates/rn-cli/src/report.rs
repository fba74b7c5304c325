//! Text and JSON renderings of query results.

use serde_json::{Value, json};

use rn_core::{FacilityPos, GeoPoint, format_distance};
use rn_query::{QueryOutcome, ReferencePoint};
use rn_store::{Facility, FacilityStore};

pub fn google_maps_url(p: GeoPoint) -> String {
    format!("https://www.google.com/maps?q={},{}", p.lat(), p.lng())
}

pub fn waze_url(p: GeoPoint) -> String {
    format!("https://waze.com/ul?ll={}%2C{}&navigate=yes", p.lat(), p.lng())
}

// ── Text ──────────────────────────────────────────────────────────────────────

pub fn outcome_text(
    store: &FacilityStore,
    reference: &ReferencePoint,
    radius_m: f64,
    outcome: &QueryOutcome,
) -> String {
    let mut out = format!("Reference: {reference}\n{}\n", outcome.summary(radius_m));
    for (rank, (r, distance)) in outcome.formatted().enumerate() {
        let f = store.get(r.position);
        out.push_str(&format!(
            "\n{:>3}. {}  [{distance}]\n     {}\n     {}\n     {}\n",
            rank + 1,
            f.id,
            f.property,
            f.location,
            google_maps_url(f.location),
        ));
    }
    out
}

pub fn matches_text(matches: &[(FacilityPos, &Facility)]) -> String {
    if matches.is_empty() {
        return "No matching facilities.\n".to_string();
    }
    matches
        .iter()
        .map(|(pos, f)| format!("{pos}  {}  {}  ({})\n", f.id, f.property, f.location))
        .collect()
}

// ── JSON ──────────────────────────────────────────────────────────────────────

pub fn outcome_json(
    store: &FacilityStore,
    reference: &ReferencePoint,
    radius_m: f64,
    outcome: &QueryOutcome,
) -> Value {
    let results: Vec<Value> = outcome
        .results
        .iter()
        .map(|r| {
            let f = store.get(r.position);
            json!({
                "position":   r.position.0,
                "id":         f.id,
                "property":   f.property,
                "lat":        f.location.lat(),
                "lng":        f.location.lng(),
                "distance_m": r.distance_m,
                "distance":   format_distance(r.distance_m),
                "google_maps": google_maps_url(f.location),
                "waze":       waze_url(f.location),
            })
        })
        .collect();

    json!({
        "reference": {
            "label": reference.label,
            "lat":   reference.point.lat(),
            "lng":   reference.point.lng(),
        },
        "radius_m":      radius_m,
        "total_matched": outcome.total_matched,
        "shown":         outcome.shown(),
        "results":       results,
    })
}

pub fn matches_json(matches: &[(FacilityPos, &Facility)]) -> Value {
    Value::Array(
        matches
            .iter()
            .map(|(pos, f)| {
                json!({
                    "position": pos.0,
                    "id":       f.id,
                    "property": f.property,
                    "lat":      f.location.lat(),
                    "lng":      f.location.lng(),
                })
            })
            .collect(),
    )
}
