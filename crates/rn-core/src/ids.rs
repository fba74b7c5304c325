//! Strongly typed facility position.
//!
//! A facility's position is its index in the loaded dataset and is the unit
//! the grid index stores.  The inner integer is `pub` so SoA `Vec`s can be
//! indexed directly, but callers should prefer [`FacilityPos::index`].

use std::fmt;

/// Index of a facility in the loaded `FacilityStore`.  Max ~4.3 billion
/// records.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FacilityPos(pub u32);

impl FacilityPos {
    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for FacilityPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<FacilityPos> for usize {
    #[inline(always)]
    fn from(pos: FacilityPos) -> usize {
        pos.0 as usize
    }
}

impl TryFrom<usize> for FacilityPos {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<FacilityPos, Self::Error> {
        u32::try_from(n).map(FacilityPos)
    }
}
