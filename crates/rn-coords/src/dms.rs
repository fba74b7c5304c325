//! Degrees-minutes-seconds tokens such as `14°35'58.2"N`.
//!
//! Minutes, seconds and their marks are optional; the hemisphere letter is
//! not.  `14°N`, `14° 35' N` and `14°35'58.2"N` all match.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::{CoordError, CoordResult};

static DMS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(\d+)\s*°\s*(\d+)?\s*'?\s*(\d+(?:\.\d+)?)?\s*"?\s*([NSEW])"#)
        .expect("valid regex")
});

/// Which axis a hemisphere letter belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Axis {
    Latitude,
    Longitude,
}

/// One matched DMS group.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DmsToken {
    pub degrees: f64,
    pub minutes: f64,
    pub seconds: f64,
    /// One of `N`, `S`, `E`, `W`.
    pub direction: char,
}

impl DmsToken {
    /// Signed decimal degrees.
    pub fn value(&self) -> f64 {
        dms_to_decimal(self.degrees, self.minutes, self.seconds, self.direction)
    }

    pub fn axis(&self) -> Axis {
        match self.direction {
            'N' | 'S' => Axis::Latitude,
            _ => Axis::Longitude,
        }
    }
}

/// `deg + min/60 + sec/3600`, negated for the southern and western
/// hemispheres.
pub fn dms_to_decimal(degrees: f64, minutes: f64, seconds: f64, direction: char) -> f64 {
    let v = degrees + minutes / 60.0 + seconds / 3600.0;
    if matches!(direction, 'S' | 'W') { -v } else { v }
}

/// Every DMS token in already-sanitized `text`, left to right.
///
/// Fails if any matched group does not parse as a number.
pub fn dms_tokens(text: &str) -> CoordResult<Vec<DmsToken>> {
    DMS_RE.captures_iter(text).map(|cap| token_from(&cap)).collect()
}

fn token_from(cap: &Captures<'_>) -> CoordResult<DmsToken> {
    let number = |i: usize| -> CoordResult<f64> {
        match cap.get(i) {
            None => Ok(0.0),
            Some(m) => m
                .as_str()
                .parse::<f64>()
                .map_err(|_| CoordError::InvalidNumber(m.as_str().to_string())),
        }
    };

    Ok(DmsToken {
        degrees: number(1)?,
        minutes: number(2)?,
        seconds: number(3)?,
        direction: cap
            .get(4)
            .and_then(|m| m.as_str().chars().next())
            .unwrap_or('N'),
    })
}
