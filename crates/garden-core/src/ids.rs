//! Gardener identity.

use std::fmt;

/// Identifier of one of the two gardeners.
///
/// Exactly two identities exist per run — [`FIRST`][GardenerId::FIRST] and
/// [`SECOND`][GardenerId::SECOND].  The inner number is what appears in step
/// logs and CSV rows.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GardenerId(pub u8);

impl GardenerId {
    /// The gardener that sweeps the garden top-down from `(0, 0)`.
    pub const FIRST: GardenerId = GardenerId(1);

    /// The gardener that sweeps the garden bottom-up from the far corner.
    pub const SECOND: GardenerId = GardenerId(2);
}

impl fmt::Display for GardenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "gardener {}", self.0)
    }
}
